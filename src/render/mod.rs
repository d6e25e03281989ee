//! Rendering module for turning outlines into output formats.

mod diagnostics;
mod json;
mod options;
mod result;
mod text;

pub use diagnostics::{DebugInfo, DocumentStats, HeadingStats};
pub use json::{report_to_json, result_to_json, to_json, JsonFormat};
pub use options::TocOptions;
pub use result::{OutlineEntry, OutlineResult, OutlineSummary};
pub use text::table_of_contents;
