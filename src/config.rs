//! Configuration handling for the TUI

use crate::state::{AppState, DEFAULT_SNACKBAR_DURATION};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// User configuration for the contact form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Show the last submitted contact under the form
    pub show_summary: Option<bool>,
    /// Show a "Cleared" snackbar after clearing the form
    pub clear_confirmation: Option<bool>,
    /// How long snackbars stay on screen
    pub snackbar_duration_ms: Option<u64>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contactform", "contact-form-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn snackbar_duration(&self) -> Duration {
        self.snackbar_duration_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SNACKBAR_DURATION)
    }

    /// Copy preferences onto the application state
    pub fn apply(&self, state: &mut AppState) {
        state.show_summary = self.show_summary.unwrap_or(true);
        state.clear_confirmation = self.clear_confirmation.unwrap_or(true);
        state.snackbar_duration = self.snackbar_duration();
    }
}
