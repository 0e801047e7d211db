use serde::{Deserialize, Serialize};
use ts_rs::TS;
use tokio::fs;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;

use crate::shared::error::{AppError, AppResult};

/// Average silent reading speed.
pub const DEFAULT_READING_WPM: f64 = 200.0;
/// Average speaking pace.
pub const DEFAULT_SPEAKING_WPM: f64 = 150.0;
/// Rough characters-per-token ratio of subword tokenizers.
pub const DEFAULT_CHARS_PER_TOKEN: usize = 4;
pub const DEFAULT_TOP_WORDS_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "settings.ts")]
pub struct AnalyserSettings {
    pub reading_wpm: f64,
    pub speaking_wpm: f64,
    pub chars_per_token: usize,
    pub top_words_limit: usize,
}

impl Default for AnalyserSettings {
    fn default() -> Self {
        Self {
            reading_wpm: DEFAULT_READING_WPM,
            speaking_wpm: DEFAULT_SPEAKING_WPM,
            chars_per_token: DEFAULT_CHARS_PER_TOKEN,
            top_words_limit: DEFAULT_TOP_WORDS_LIMIT,
        }
    }
}

impl AnalyserSettings {
    pub fn settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "antigravity", "text-analyser")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::Config("Failed to determine config directory".to_string()))
    }

    /// Load settings from the user config directory.
    pub async fn load() -> AppResult<Self> {
        let path = Self::settings_path()?;
        Self::load_from(&path).await
    }

    /// Load settings from `path`, writing defaults there first if the file does not exist.
    pub async fn load_from(path: &Path) -> AppResult<Self> {
        if !fs::try_exists(path).await? {
            log::info!("[AnalyserSettings::load_from] No settings at {}, writing defaults", path.display());
            let settings = Self::default();
            settings.save_to(path).await?;
            return Ok(settings);
        }

        let content = fs::read_to_string(path).await?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;

        log::debug!("[AnalyserSettings::load_from] Loaded {:?}", settings);
        Ok(settings)
    }

    pub async fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Reject wpm values that are not finite and positive, and a zero token ratio.
    pub fn validate(&self) -> AppResult<()> {
        if !self.reading_wpm.is_finite() || self.reading_wpm <= 0.0 {
            return Err(AppError::Config(format!("reading_wpm must be a positive number, got {}", self.reading_wpm)));
        }
        if !self.speaking_wpm.is_finite() || self.speaking_wpm <= 0.0 {
            return Err(AppError::Config(format!("speaking_wpm must be a positive number, got {}", self.speaking_wpm)));
        }
        if self.chars_per_token == 0 {
            return Err(AppError::Config("chars_per_token must be at least 1".to_string()));
        }
        Ok(())
    }
}
