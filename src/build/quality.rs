//! Outline quality metrics.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::model::Heading;
use crate::text::has_numbering;

const CONFIDENCE_WEIGHT: f32 = 0.4;
const BALANCE_WEIGHT: f32 = 0.3;
const COVERAGE_WEIGHT: f32 = 0.2;
const CONSISTENCY_WEIGHT: f32 = 0.1;

/// Quality metrics of an outline, all in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub average_confidence: f32,
    pub hierarchy_balance: f32,
    pub page_coverage: f32,
    pub consistency: f32,
    /// Weighted combination of the four factors
    pub quality_score: f32,
}

impl QualityMetrics {
    /// Compute metrics for a validated heading sequence.
    ///
    /// Every metric is 0 for an empty sequence.
    pub fn compute(headings: &[Heading]) -> Self {
        if headings.is_empty() {
            return Self::default();
        }

        let average_confidence = average_confidence(headings);
        let hierarchy_balance = hierarchy_balance(headings);
        let page_coverage = page_coverage(headings);
        let consistency = consistency(headings);

        let quality_score = average_confidence * CONFIDENCE_WEIGHT
            + hierarchy_balance * BALANCE_WEIGHT
            + page_coverage * COVERAGE_WEIGHT
            + consistency * CONSISTENCY_WEIGHT;

        log::debug!(
            "Outline quality metrics - confidence: {:.2}, balance: {:.2}, coverage: {:.2}, consistency: {:.2}, quality: {:.2}",
            average_confidence,
            hierarchy_balance,
            page_coverage,
            consistency,
            quality_score
        );

        Self {
            average_confidence,
            hierarchy_balance,
            page_coverage,
            consistency,
            quality_score: quality_score.clamp(0.0, 1.0),
        }
    }
}

/// Mean confidence, 0 when empty.
pub fn average_confidence(headings: &[Heading]) -> f32 {
    if headings.is_empty() {
        return 0.0;
    }
    headings.iter().map(|h| h.confidence).sum::<f32>() / headings.len() as f32
}

/// How plausible the H1/H2/H3 proportions are.
pub fn hierarchy_balance(headings: &[Heading]) -> f32 {
    let count = |level: u8| headings.iter().filter(|h| h.level == level).count() as f32;
    let (h1, h2, h3) = (count(1), count(2), count(3));

    if h1 == 0.0 {
        return 0.0;
    }

    let mut score = 0.8;
    if h2 > 0.0 && (1.0..=5.0).contains(&(h2 / h1)) {
        score += 0.1;
    }
    if h3 > 0.0 && h2 > 0.0 && (1.0..=3.0).contains(&(h3 / h2)) {
        score += 0.1;
    }
    f32::min(score, 1.0)
}

/// How well headings are spread over the pages they span.
pub fn page_coverage(headings: &[Heading]) -> f32 {
    let (Some(min), Some(max)) = (
        headings.iter().map(|h| h.page).min(),
        headings.iter().map(|h| h.page).max(),
    ) else {
        return 0.0;
    };

    let span = max - min + 1;
    if span <= 1 {
        return 0.5;
    }

    let distinct: BTreeSet<u32> = headings.iter().map(|h| h.page).collect();
    let ratio = distinct.len() as f32 / span as f32;
    if ratio >= 0.3 {
        1.0
    } else if ratio >= 0.2 {
        0.7
    } else if ratio >= 0.1 {
        0.4
    } else {
        0.2
    }
}

/// Font uniformity within levels plus prevalence of numbering.
pub fn consistency(headings: &[Heading]) -> f32 {
    if headings.len() < 2 {
        return 1.0;
    }

    let mut level_fonts: BTreeMap<u8, HashSet<&str>> = BTreeMap::new();
    for heading in headings {
        level_fonts
            .entry(heading.level)
            .or_default()
            .insert(heading.font_info.family.as_str());
    }
    let uniform = level_fonts.values().filter(|fonts| fonts.len() == 1).count();
    let font_consistency = uniform as f32 / level_fonts.len() as f32;

    let numbered = headings.iter().filter(|h| has_numbering(&h.text)).count();
    let numbering_consistency = numbered as f32 / headings.len() as f32;

    f32::min(
        0.2 + font_consistency * 0.5 + numbering_consistency * 0.3,
        1.0,
    )
}
