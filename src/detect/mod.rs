//! Heading detection: candidate scoring and level classification.
//!
//! Detection runs the language profile of the document over its text blocks,
//! keeps the candidates scoring above the configured threshold and assigns
//! them levels by font size. The result is unordered; reading order and the
//! level grammar are the outline builder's job.

mod classifier;
mod language;
mod scorer;

pub use classifier::classify_levels;
pub use language::{KeywordWeight, LanguageProfile, NumberingRule, Weights};
pub use scorer::{
    font_size_score, font_style_score, position_score, CandidateScorer, ScoreBreakdown,
    ScoredCandidate,
};

use crate::config::Settings;
use crate::model::{Document, Heading};

/// Detects headings in a document.
pub struct HeadingDetector<'a> {
    settings: &'a Settings,
}

impl<'a> HeadingDetector<'a> {
    /// Create a detector using the given settings.
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Score every candidate of a document.
    pub fn score<'d>(&self, doc: &'d Document) -> Vec<ScoredCandidate<'d>> {
        CandidateScorer::for_document(self.settings, doc).score(doc)
    }

    /// Detect headings with their classified levels.
    pub fn detect(&self, doc: &Document) -> Vec<Heading> {
        log::info!(
            "Starting heading detection for {} (lang: {})",
            doc.filename(),
            doc.language()
        );

        let scored = self.score(doc);
        let headings = classify_levels(&scored);

        log::info!(
            "Detected {} {} heading candidates in {}",
            headings.len(),
            doc.language(),
            doc.filename()
        );
        headings
    }
}
