//! # pdfoutline
//!
//! Document outline extraction from PDF text layouts.
//!
//! Given the positioned text blocks of a parsed PDF, this library detects
//! which blocks are section headings, assigns them H1/H2/H3 levels, repairs
//! illegal level sequences and assembles a validated outline tree with
//! quality metrics.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfoutline::{extract_result, load_document, render, Settings};
//!
//! fn main() -> pdfoutline::Result<()> {
//!     // Load a layout document produced by the PDF parser
//!     let doc = load_document("document.layout.json")?;
//!
//!     // Extract the outline
//!     let result = extract_result(&doc, &Settings::default());
//!     println!("{}", render::result_to_json(&result, render::JsonFormat::Pretty)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Language profiles**: Latin-script (English) and CJK (Japanese) heuristics
//! - **Hierarchy repair**: level grammar enforcement and deduplication
//! - **Quality metrics**: confidence, balance, page coverage and consistency
//! - **Parallel processing**: Uses Rayon for document batches
//! - **Output formats**: minimal JSON result, full report, table of contents

pub mod build;
pub mod config;
pub mod detect;
pub mod error;
pub mod model;
pub mod render;
pub mod text;

// Re-export commonly used types
pub use build::{OutlineBuilder, QualityMetrics};
pub use config::Settings;
pub use detect::{HeadingDetector, LanguageProfile};
pub use error::{Error, Result};
pub use model::{
    Document, DocumentBuilder, FontInfo, Heading, HeadingId, Language, Outline, OutlineReport,
    TextBlock,
};
pub use render::{JsonFormat, OutlineResult, OutlineSummary, TocOptions};

use model::LayoutDocument;
use rayon::prelude::*;
use std::path::Path;

/// Extract the outline of a document.
///
/// Never fails: a document without headings yields an empty outline.
///
/// # Example
///
/// ```
/// use pdfoutline::{extract_outline, Document, FontInfo, Settings, TextBlock};
///
/// let doc = Document::builder("report.pdf")
///     .page(612.0, 792.0)
///     .block(TextBlock::new("Body text.", 1, 72.0, 300.0, FontInfo::new("Times", 10.0)))
///     .block(TextBlock::new("1. Introduction", 1, 72.0, 80.0, FontInfo::new("Times-Bold", 18.0)))
///     .build();
///
/// let outline = extract_outline(&doc, &Settings::default());
/// assert_eq!(outline.total_headings(), 1);
/// ```
pub fn extract_outline(doc: &Document, settings: &Settings) -> Outline {
    let headings = HeadingDetector::new(settings).detect(doc);
    OutlineBuilder::new().build(headings)
}

/// Extract the flat outline result of a document, titled by its filename.
pub fn extract_result(doc: &Document, settings: &Settings) -> OutlineResult {
    let outline = extract_outline(doc, settings);
    OutlineResult::from_outline(doc.filename(), &outline)
}

/// Extract outline results for many documents in parallel.
///
/// Results are returned in input order.
pub fn extract_batch(docs: &[Document], settings: &Settings) -> Vec<OutlineResult> {
    log::info!("Extracting outlines for {} documents", docs.len());
    docs.par_iter()
        .map(|doc| extract_result(doc, settings))
        .collect()
}

/// Load a layout document from a JSON file.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::load_document;
///
/// let doc = load_document("document.layout.json").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let doc = parse_document(&content)?;
    log::debug!(
        "Loaded {} ({} text blocks, {} pages)",
        path.display(),
        doc.text_blocks().len(),
        doc.page_count()
    );
    Ok(doc)
}

/// Parse a layout document from a JSON string.
///
/// Fails with [`Error::Json`] on malformed JSON and with
/// [`Error::InvalidDocument`] when the layout is not usable.
pub fn parse_document(json: &str) -> Result<Document> {
    let layout: LayoutDocument = serde_json::from_str(json)?;
    Document::try_from(layout)
}

/// Builder for extracting outlines with custom settings.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::{load_document, OutlineExtractor};
///
/// let doc = load_document("document.layout.json")?;
/// let outline = OutlineExtractor::new()
///     .max_heading_length(120)
///     .min_confidence(0.5)
///     .skip_headers_footers(true)
///     .extract(&doc);
/// println!("{} headings", outline.total_headings());
/// # Ok::<(), pdfoutline::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct OutlineExtractor {
    settings: Settings,
}

impl OutlineExtractor {
    /// Create a new extractor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all settings.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Set the maximum heading length in characters.
    pub fn max_heading_length(mut self, length: usize) -> Self {
        self.settings = self.settings.with_max_heading_length(length);
        self
    }

    /// Set the minimum heading confidence.
    pub fn min_confidence(mut self, confidence: f32) -> Self {
        self.settings = self.settings.with_min_confidence(confidence);
        self
    }

    /// Skip running page headers and footers.
    pub fn skip_headers_footers(mut self, skip: bool) -> Self {
        self.settings = self.settings.with_skip_headers_footers(skip);
        self
    }

    /// Settings in effect.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Extract the outline of a document.
    pub fn extract(&self, doc: &Document) -> Outline {
        extract_outline(doc, &self.settings)
    }

    /// Extract the flat outline result of a document.
    pub fn extract_result(&self, doc: &Document) -> OutlineResult {
        extract_result(doc, &self.settings)
    }

    /// Extract outline results for many documents in parallel.
    pub fn extract_batch(&self, docs: &[Document]) -> Vec<OutlineResult> {
        extract_batch(docs, &self.settings)
    }
}
