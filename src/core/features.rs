//! Feature plugin system with enum dispatch
//!
//! Uses enum_dispatch for static dispatch over every feature the host knows
//! about at compile time.

use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::AnalyserSettings;
use crate::shared::types::{ActionType, CommandItem, ExecuteActionRequest, ExecuteActionResponse};
use enum_dispatch::enum_dispatch;
use std::sync::OnceLock;

pub mod text_analyser;

#[enum_dispatch]
pub trait FeatureSync: Send + Sync {
    /// Unique identifier for this feature
    fn id(&self) -> &str;

    /// Widget commands open the feature's UI window.
    fn widget_commands(&self) -> Vec<CommandItem>;

    /// Action commands perform immediate actions without opening a window.
    /// Example: "Count Words" counts the words in the selected text.
    fn action_commands(&self) -> Vec<CommandItem>;

    /// Execute an action for this feature
    ///
    /// Returns `AppError::Unsupported` when the action belongs to another feature.
    fn execute_action(
        &self,
        action: &ActionType,
        params: &serde_json::Value,
    ) -> AppResult<ExecuteActionResponse>;
}

#[enum_dispatch(FeatureSync)]
pub enum AppFeature {
    TextAnalyser(text_analyser::TextAnalyserFeature),
}

impl AppFeature {
    pub fn all() -> Vec<Self> {
        Self::all_with(&AnalyserSettings::default())
    }

    pub fn all_with(settings: &AnalyserSettings) -> Vec<Self> {
        vec![AppFeature::TextAnalyser(text_analyser::TextAnalyserFeature::new(settings.clone()))]
    }
}

/// Cached command items; the command list only changes between builds.
static BASE_COMMAND_ITEMS: OnceLock<Vec<CommandItem>> = OnceLock::new();

fn get_base_command_items() -> &'static Vec<CommandItem> {
    BASE_COMMAND_ITEMS.get_or_init(|| {
        let mut items = vec![];
        for feature in AppFeature::all() {
            items.extend(feature.widget_commands());
            items.extend(feature.action_commands());
        }
        log::debug!("[get_base_command_items] Cached {} commands", items.len());
        items
    })
}

/// Get all command items from all features
pub fn get_all_command_items() -> Vec<CommandItem> {
    get_base_command_items().clone()
}

/// Execute an action with default settings
pub fn execute_feature_action(request: &ExecuteActionRequest) -> AppResult<ExecuteActionResponse> {
    execute_feature_action_with(request, &AnalyserSettings::default())
}

/// Execute an action across all features
///
/// The first feature that does not answer `Unsupported` handles the request,
/// including when it fails.
pub fn execute_feature_action_with(
    request: &ExecuteActionRequest,
    settings: &AnalyserSettings,
) -> AppResult<ExecuteActionResponse> {
    for feature in AppFeature::all_with(settings) {
        match feature.execute_action(&request.action_type, &request.params) {
            Err(AppError::Unsupported) => continue,
            result => {
                log::debug!("[execute_feature_action] Handled by {}", feature.id());
                return result;
            }
        }
    }

    Err(AppError::Feature("Unknown action type".to_string()))
}
