//! Error types for pdfoutline library.
//!
//! The extraction pipeline itself is total and never returns an error. Only
//! the edges (settings files, layout documents, rendering) are fallible.

use std::io;
use thiserror::Error;

/// Result type alias for pdfoutline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading inputs or rendering outputs.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed JSON in a settings file or layout document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings are present but out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The layout document violates a structural requirement.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Error during rendering (JSON, table of contents).
    #[error("Rendering error: {0}")]
    Render(String),
}
