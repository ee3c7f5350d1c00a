use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{BakeryError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_daypart_limit")]
    pub daypart_limit: usize,
    #[serde(default = "default_category_limit")]
    pub category_limit: usize,
}

fn default_data_file() -> String {
    "Bakery.csv".to_string()
}

fn default_daypart_limit() -> usize {
    5
}

fn default_category_limit() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            daypart_limit: default_daypart_limit(),
            category_limit: default_category_limit(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("bakery")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable settings");
            Settings::default()
        })
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| BakeryError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

/// The data file to read: an explicit `--file` wins over the saved setting.
pub fn data_path(file_override: Option<&str>) -> PathBuf {
    match file_override {
        Some(f) => PathBuf::from(f),
        None => PathBuf::from(load_settings().data_file),
    }
}
