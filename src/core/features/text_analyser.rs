//! Text Analyser feature
//!
//! Word and character counts, reading/speaking time, readability scores and
//! frequency tables for a piece of text. The statistics themselves live in
//! [`logic`]; this module exposes them as palette commands and actions.

pub mod frequency;
pub mod logic;
pub mod readability;
pub mod timing;

use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::AnalyserSettings;
use crate::shared::types::{
    ActionType, CommandItem, ExecuteActionResponse, TextAnalysisAction, TextAnalysisPayload,
    TextAnalysisRequest, TextReport,
};

pub use logic::{analyze, analyze_with};

pub const ERR_NOTHING_TO_ANALYZE: &str = "Nothing to analyze";

#[derive(Clone, Default)]
pub struct TextAnalyserFeature {
    settings: AnalyserSettings,
}

impl TextAnalyserFeature {
    pub fn new(settings: AnalyserSettings) -> Self {
        Self { settings }
    }

    /// Analyze non-blank text with this feature's settings.
    pub fn analyze_checked(&self, text: &str) -> AppResult<TextReport> {
        if text.trim().is_empty() {
            return Err(AppError::Validation(ERR_NOTHING_TO_ANALYZE.to_string()));
        }
        Ok(analyze_with(text, &self.settings))
    }
}

fn action_command(id: &str, label: &str, description: &str, action: TextAnalysisAction) -> CommandItem {
    CommandItem {
        id: id.to_string(),
        label: label.to_string(),
        description: Some(description.to_string()),
        action_type: Some(ActionType::AnalyzeText(TextAnalysisPayload { action })),
        widget_type: None,
    }
}

impl super::FeatureSync for TextAnalyserFeature {
    fn id(&self) -> &str {
        "text_analyser"
    }

    fn widget_commands(&self) -> Vec<CommandItem> {
        vec![CommandItem {
            id: "widget_analyser".to_string(),
            label: "Text Analyser".to_string(),
            description: Some("Analyze word count, reading time, readability, etc.".to_string()),
            action_type: None,
            widget_type: Some("text_analyser".to_string()),
        }]
    }

    fn action_commands(&self) -> Vec<CommandItem> {
        use TextAnalysisAction::*;
        vec![
            action_command("count_words", "Count Words", "Count words in selected text", CountWords),
            action_command("count_chars", "Count Characters", "Count characters (with/without spaces)", CountChars),
            action_command("reading_time", "Reading Time", "Estimate reading time", ReadingTime),
            action_command("speaking_time", "Speaking Time", "Estimate speaking time", SpeakingTime),
            action_command("readability", "Readability", "Flesch reading ease and grade level", Readability),
            action_command("top_words", "Top Words", "Most frequent words, excluding stop words", TopWords),
            action_command("full_report", "Full Report", "All text statistics", FullReport),
        ]
    }

    fn execute_action(
        &self,
        action: &ActionType,
        params: &serde_json::Value,
    ) -> AppResult<ExecuteActionResponse> {
        let analysis_action = match action {
            ActionType::AnalyzeText(payload) => payload.action,
            #[allow(unreachable_patterns)]
            _ => return Err(AppError::Unsupported),
        };

        let text = params
            .get("text")
            .and_then(|t| t.as_str())
            .ok_or_else(|| AppError::Validation("Missing 'text' parameter".to_string()))?;

        let report = self.analyze_checked(text)?;
        log::debug!("[text_analyser] {:?} over {} words", analysis_action, report.word_count);

        Ok(ExecuteActionResponse {
            result: summarize(analysis_action, &report),
            metadata: Some(serde_json::to_value(&report)?),
        })
    }
}

/// One-line, human readable answer for a palette action.
pub fn summarize(action: TextAnalysisAction, report: &TextReport) -> String {
    match action {
        TextAnalysisAction::CountWords => format!("{} words", report.word_count),
        TextAnalysisAction::CountChars => format!(
            "{} chars ({} without spaces)",
            report.char_count, report.char_count_no_spaces
        ),
        TextAnalysisAction::ReadingTime => format!("~{} to read", report.reading_time),
        TextAnalysisAction::SpeakingTime => format!("~{} to speak", report.speaking_time),
        TextAnalysisAction::Readability => format!(
            "Reading ease {:.1}, grade {:.1}",
            report.flesch_reading_ease, report.flesch_kincaid_grade
        ),
        TextAnalysisAction::TopWords => {
            if report.top_words.is_empty() {
                "No words found".to_string()
            } else {
                report
                    .top_words
                    .iter()
                    .map(|w| format!("{} ({})", w.word, w.count))
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }
        TextAnalysisAction::FullReport => format!(
            "{} words, {} sentences, {} paragraphs, ~{} to read",
            report.word_count, report.sentence_count, report.paragraph_count, report.reading_time
        ),
    }
}

/// Direct command entry point: analyze the request text with default settings.
pub fn analyze_text(request: &TextAnalysisRequest) -> AppResult<TextReport> {
    TextAnalyserFeature::default().analyze_checked(&request.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::FeatureSync;
    use serde_json::json;

    fn action(action: TextAnalysisAction) -> ActionType {
        ActionType::AnalyzeText(TextAnalysisPayload { action })
    }

    #[test]
    fn test_one_command_per_action() {
        let commands = TextAnalyserFeature::default().action_commands();
        assert_eq!(commands.len(), 7);
        assert!(commands.iter().all(|c| c.action_type.is_some() && c.widget_type.is_none()));
    }

    #[test]
    fn test_count_words_action() {
        let feature = TextAnalyserFeature::default();
        let response = feature
            .execute_action(&action(TextAnalysisAction::CountWords), &json!({ "text": "one two three" }))
            .unwrap();
        assert_eq!(response.result, "3 words");

        let metadata = response.metadata.unwrap();
        assert_eq!(metadata["word_count"], 3);
        assert_eq!(metadata["longest_word"], "three");
    }

    #[test]
    fn test_count_chars_and_timing_actions() {
        let feature = TextAnalyserFeature::default();
        let params = json!({ "text": "Hello world." });

        let chars = feature.execute_action(&action(TextAnalysisAction::CountChars), &params).unwrap();
        assert_eq!(chars.result, "12 chars (11 without spaces)");

        let reading = feature.execute_action(&action(TextAnalysisAction::ReadingTime), &params).unwrap();
        assert_eq!(reading.result, "~1s to read");
    }

    #[test]
    fn test_top_words_summary() {
        let report = analyze("Rust rust cargo. The end.");
        assert_eq!(summarize(TextAnalysisAction::TopWords, &report), "rust (2), cargo (1), end (1)");

        let empty = analyze("a an the");
        assert_eq!(summarize(TextAnalysisAction::TopWords, &empty), "No words found");
    }

    #[test]
    fn test_readability_summary() {
        let report = analyze("The cat sat.");
        assert_eq!(summarize(TextAnalysisAction::Readability, &report), "Reading ease 100.0, grade 0.0");
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let feature = TextAnalyserFeature::default();
        let result = feature.execute_action(&action(TextAnalysisAction::FullReport), &json!({ "text": " \n\t " }));
        assert_eq!(result.unwrap_err(), AppError::Validation(ERR_NOTHING_TO_ANALYZE.to_string()));
    }

    #[test]
    fn test_missing_text_param() {
        let feature = TextAnalyserFeature::default();
        let result = feature.execute_action(&action(TextAnalysisAction::CountWords), &json!({ "txt": "hi" }));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_analyze_text_command() {
        let report = analyze_text(&TextAnalysisRequest { text: "Short text here.".to_string() }).unwrap();
        assert_eq!(report.word_count, 3);
        assert!(analyze_text(&TextAnalysisRequest { text: String::new() }).is_err());
    }

    #[test]
    fn test_feature_uses_its_settings() {
        let feature = TextAnalyserFeature::new(AnalyserSettings { top_words_limit: 1, ..Default::default() });
        let report = feature.analyze_checked("alpha beta beta").unwrap();
        assert_eq!(report.top_words.len(), 1);
        assert_eq!(report.top_words[0].word, "beta");
    }
}
