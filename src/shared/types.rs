use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct TextAnalysisRequest {
    pub text: String,
}

/// A word and how many times it occurs (lowercased).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct LetterFrequency {
    pub letter: char,
    pub count: usize,
}

/// Full statistics for one piece of text.
///
/// Built fresh by `analyze` on every request and never mutated afterwards.
/// Ratios are rounded for display: two decimals for averages, one for
/// readability scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct TextReport {
    // Character-level counts
    pub char_count: usize,
    pub char_count_no_spaces: usize,
    pub grapheme_count: usize,
    pub whitespace_count: usize,
    pub punctuation_count: usize,
    pub uppercase_count: usize,
    pub lowercase_count: usize,
    pub digit_count: usize,

    // Structure
    pub line_count: usize,
    pub paragraph_count: usize,
    pub word_count: usize,
    pub unique_word_count: usize,
    pub sentence_count: usize,
    pub syllable_count: usize,
    pub token_count: usize,

    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    pub longest_word: String,
    pub shortest_word: String,

    pub reading_time: String,
    pub reading_time_sec: f64,
    pub speaking_time: String,
    pub speaking_time_sec: f64,

    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,

    pub top_words: Vec<WordFrequency>,
    pub letter_frequency: Vec<LetterFrequency>,
}

// Action types for command palette and widget actions
// Using adjacently tagged serialization for frontend compatibility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload")]
#[ts(export, export_to = "bindings.ts")]
pub enum ActionType {
    AnalyzeText(TextAnalysisPayload),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct TextAnalysisPayload {
    pub action: TextAnalysisAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub enum TextAnalysisAction {
    CountWords,
    CountChars,
    ReadingTime,
    SpeakingTime,
    Readability,
    TopWords,
    FullReport,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct CommandItem {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    pub action_type: Option<ActionType>,
    pub widget_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct ExecuteActionRequest {
    pub action_type: ActionType,
    #[ts(type = "any")]
    pub params: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings.ts")]
pub struct ExecuteActionResponse {
    pub result: String,
    #[ts(type = "any")]
    pub metadata: Option<serde_json::Value>,
}
