//! Table of contents options.

use crate::model::MAX_LEVEL;

/// Options for rendering a table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocOptions {
    /// Deepest heading level to include (1-3)
    pub max_level: u8,

    /// Append page numbers to each line
    pub include_page_numbers: bool,
}

impl TocOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deepest included level.
    pub fn with_max_level(mut self, level: u8) -> Self {
        self.max_level = level.clamp(1, MAX_LEVEL);
        self
    }

    /// Enable or disable page numbers.
    pub fn with_page_numbers(mut self, include: bool) -> Self {
        self.include_page_numbers = include;
        self
    }
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            max_level: MAX_LEVEL,
            include_page_numbers: true,
        }
    }
}
