//! Text Analyser
//!
//! Counts, reading/speaking time estimates, Flesch readability scores and
//! word/letter frequency tables for arbitrary text. The engine is a pure
//! function of its input; the feature layer wraps it as palette commands.
//!
//! ```
//! use text_analyser_lib::analyze;
//!
//! let report = analyze("Hello world.");
//! assert_eq!(report.word_count, 2);
//! assert_eq!(report.longest_word, "Hello");
//! ```

pub mod shared;
pub mod core;

pub use crate::core::features::text_analyser::{analyze, analyze_text, analyze_with, TextAnalyserFeature};
pub use crate::core::features::{execute_feature_action, execute_feature_action_with, get_all_command_items, AppFeature, FeatureSync};
pub use crate::shared::error::{AppError, AppResult};
pub use crate::shared::settings::AnalyserSettings;
pub use crate::shared::types::{LetterFrequency, TextReport, WordFrequency};
