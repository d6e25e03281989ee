//! Document and outline model types.
//!
//! The document side is what the PDF parsing collaborator hands over:
//! positioned text blocks with font metadata. The outline side is what the
//! extraction pipeline produces from it.

mod document;
mod heading;
mod outline;

pub use document::{
    Document, DocumentBuilder, FontInfo, FontStatistics, Language, LayoutDocument, TextBlock,
    DEFAULT_FONT_SIZE, OCR_FONT_FAMILY,
};
pub use heading::{clamp_confidence, clamp_level, Heading, HeadingId, MAX_LEVEL, MIN_LEVEL};
pub use outline::{
    HeadingRecord, Hierarchy, HierarchyEntry, Outline, OutlineReport, OutlineStatistics, Position,
};
