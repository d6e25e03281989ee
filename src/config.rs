//! Extraction settings and configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default maximum heading length in characters.
pub const DEFAULT_MAX_HEADING_LENGTH: usize = 150;

/// Default minimum composite score for a candidate to become a heading.
pub const DEFAULT_MIN_HEADING_CONFIDENCE: f32 = 0.4;

/// Settings shared by every stage of the extraction pipeline.
///
/// Loaded once per process and passed by reference. Keys use the same
/// upper-case names as the `config.json` file; missing keys fall back to
/// their defaults and unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct Settings {
    /// Fragments longer than this (in characters) are never headings
    pub max_heading_length: usize,

    /// Minimum composite score for a candidate to be retained
    pub min_heading_confidence: f32,

    /// Reject fragments that look like running headers or footers
    pub skip_headers_footers: bool,
}

impl Settings {
    /// Create settings with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path.as_ref())?;
        Self::from_json(&data)
    }

    /// Load settings from a JSON file, using defaults when it does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Check that every value is within its legal range.
    pub fn validate(&self) -> Result<()> {
        if self.max_heading_length == 0 {
            return Err(Error::InvalidConfig(
                "MAX_HEADING_LENGTH must be greater than zero".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.min_heading_confidence) {
            return Err(Error::InvalidConfig(format!(
                "MIN_HEADING_CONFIDENCE must be within [0, 1], got {}",
                self.min_heading_confidence
            )));
        }
        Ok(())
    }

    /// Set the maximum heading length.
    pub fn with_max_heading_length(mut self, length: usize) -> Self {
        self.max_heading_length = length;
        self
    }

    /// Set the minimum heading confidence.
    pub fn with_min_confidence(mut self, confidence: f32) -> Self {
        self.min_heading_confidence = confidence;
        self
    }

    /// Enable or disable header/footer rejection.
    pub fn with_skip_headers_footers(mut self, skip: bool) -> Self {
        self.skip_headers_footers = skip;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_heading_length: DEFAULT_MAX_HEADING_LENGTH,
            min_heading_confidence: DEFAULT_MIN_HEADING_CONFIDENCE,
            skip_headers_footers: false,
        }
    }
}
