//! Configuration persistence for textsnip settings

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::history::HistoryMode;

/// User settings persisted between sessions as JSON in the config dir.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Whether history is a table or a flat text buffer.
    pub history_mode: HistoryMode,
    /// Tesseract language code.
    pub ocr_language: String,
    /// Tesseract page segmentation mode.
    pub ocr_psm: i32,
    /// Upscale small selections before recognition.
    pub upscale_small: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_mode: HistoryMode::Table,
            ocr_language: "eng".to_string(),
            // Sparse-text segmentation works best on screen grabs
            ocr_psm: 11,
            upscale_small: true,
        }
    }
}

impl AppConfig {
    fn config_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join("textsnip").join("config.json"))
    }

    /// Load configuration from disk, or return defaults if unavailable.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            log::warn!("no config directory available, using defaults");
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("error loading config, using defaults: {:?}", err);
                Self::default()
            }
        }
    }

    fn load_from(path: &std::path::Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
    }

    /// Save configuration to disk. Failures are logged, never fatal.
    pub fn save(&self) {
        let Some(path) = Self::config_path() else {
            log::error!("no config directory available, not saving");
            return;
        };
        if let Err(err) = self.save_to(&path) {
            log::error!("failed to save config: {:?}", err);
        }
    }

    fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(self).context("serializing config")?;
        fs::write(path, raw).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = AppConfig {
            history_mode: HistoryMode::Flat,
            ocr_language: "deu".to_string(),
            ocr_psm: 6,
            upscale_small: false,
        };
        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
