//! Configuration handling for the TUI

use crate::state::{DeliveryEstimate, OrderProgress};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const LOG_FILE_NAME: &str = "track-order.log";

/// User configuration for the tracking page
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrackerConfig {
    /// Index of the reached order stage (0-2). Defaults to "in transit".
    pub current_stage: Option<usize>,
    /// Estimated delivery date, `YYYY-MM-DD`
    pub estimated_delivery: Option<NaiveDate>,
}

impl TrackerConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "track-order", "track-order-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Where the log file goes; the current directory when no home is known
    pub fn log_path() -> PathBuf {
        Self::project_dirs()
            .map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: TrackerConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn progress(&self) -> OrderProgress {
        self.current_stage
            .map(OrderProgress::new)
            .unwrap_or_default()
    }

    pub fn delivery(&self) -> DeliveryEstimate {
        self.estimated_delivery
            .map(DeliveryEstimate::new)
            .unwrap_or_default()
    }
}
