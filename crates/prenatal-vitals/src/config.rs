//! Analyzer configuration
//!
//! Only the trailing window is configurable. Clinical thresholds stay as
//! constants next to the rules they belong to.

use crate::error::{Result, VitalsError};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default trailing window for contraction analysis, in minutes
pub const DEFAULT_WINDOW_MINUTES: i64 = 60;

/// Settings for windowed contraction analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzerConfig {
    /// Length of the trailing window in minutes
    pub window_minutes: i64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            window_minutes: DEFAULT_WINDOW_MINUTES,
        }
    }
}

impl AnalyzerConfig {
    pub fn with_window_minutes(mut self, minutes: i64) -> Self {
        self.window_minutes = minutes;
        self
    }

    /// Parse and validate a JSON configuration document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AnalyzerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        self.window().map(|_| ())
    }

    /// Window as a duration; rejects zero, negative and overflowing values
    pub fn window(&self) -> Result<Duration> {
        if self.window_minutes <= 0 {
            return Err(VitalsError::InvalidWindow(self.window_minutes));
        }
        Duration::try_minutes(self.window_minutes).ok_or(VitalsError::InvalidWindow(self.window_minutes))
    }
}
