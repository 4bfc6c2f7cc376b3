use crate::{KanbanError, KanbanResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SPRINT_DURATION_DAYS: u32 = 14;
/// Longest sprint the board will plan; larger configured values are clamped.
pub const MAX_SPRINT_DURATION_DAYS: u32 = 365;
pub const DEFAULT_TAG_DISPLAY_LIMIT: usize = 3;
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub sprint_duration_days: Option<u32>,
    #[serde(default)]
    pub seed_sample_data: Option<bool>,
    #[serde(default)]
    pub tag_display_limit: Option<usize>,
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/kanban/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("kanban/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("kanban\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load from the platform config file, falling back to defaults when it
    /// is missing or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                match Self::from_path(&config_path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Ignoring config file {}: {}", config_path.display(), e);
                    }
                }
            }
        }
        Self::default()
    }

    pub fn from_path(path: &Path) -> KanbanResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> KanbanResult<Self> {
        toml::from_str(content).map_err(|e| KanbanError::Config(e.to_string()))
    }

    pub fn effective_sprint_duration_days(&self) -> u32 {
        self.sprint_duration_days
            .unwrap_or(DEFAULT_SPRINT_DURATION_DAYS)
            .min(MAX_SPRINT_DURATION_DAYS)
    }

    pub fn effective_seed_sample_data(&self) -> bool {
        self.seed_sample_data.unwrap_or(true)
    }

    pub fn effective_tag_display_limit(&self) -> usize {
        self.tag_display_limit.unwrap_or(DEFAULT_TAG_DISPLAY_LIMIT)
    }

    pub fn effective_log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
