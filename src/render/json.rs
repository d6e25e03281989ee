//! JSON rendering for outline results and reports.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::OutlineReport;

use super::OutlineResult;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize any value in the given format.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Convert an extraction result to JSON.
pub fn result_to_json(result: &OutlineResult, format: JsonFormat) -> Result<String> {
    to_json(result, format)
}

/// Convert an outline report to JSON.
pub fn report_to_json(report: &OutlineReport, format: JsonFormat) -> Result<String> {
    to_json(report, format)
}
