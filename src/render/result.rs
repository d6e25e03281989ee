//! Flat extraction result and outline summary.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::Outline;

/// Minimal extraction output: document title plus a flat heading list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineResult {
    /// Document title (the source filename)
    pub title: String,

    /// Headings in reading order
    pub outline: Vec<OutlineEntry>,
}

/// One heading of an [`OutlineResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// "H1", "H2" or "H3"
    pub level: String,
    pub text: String,
    pub page: u32,
}

impl OutlineResult {
    /// Flatten an outline under the given title.
    pub fn from_outline(title: impl Into<String>, outline: &Outline) -> Self {
        Self {
            title: title.into(),
            outline: outline
                .headings()
                .iter()
                .map(|h| OutlineEntry {
                    level: h.label(),
                    text: h.text.clone(),
                    page: h.page,
                })
                .collect(),
        }
    }

    /// A result with no headings.
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            outline: Vec::new(),
        }
    }

    /// Number of headings.
    pub fn len(&self) -> usize {
        self.outline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }
}

/// Short statistical summary of an outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineSummary {
    pub total_headings: usize,

    /// Heading count per level, keyed "h1", "h2", "h3"
    pub levels: IndexMap<String, usize>,

    /// Number of distinct pages carrying a heading
    pub pages_covered: usize,

    pub quality_score: f32,
    pub average_confidence: f32,
}

impl OutlineSummary {
    /// Summarize an outline.
    pub fn from_outline(outline: &Outline) -> Self {
        let mut levels = IndexMap::new();
        levels.insert("h1".to_string(), outline.h1_count());
        levels.insert("h2".to_string(), outline.h2_count());
        levels.insert("h3".to_string(), outline.h3_count());

        let pages: BTreeSet<u32> = outline.headings().iter().map(|h| h.page).collect();

        Self {
            total_headings: outline.total_headings(),
            levels,
            pages_covered: pages.len(),
            quality_score: outline.quality_score(),
            average_confidence: outline.average_confidence(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FontInfo, Heading};

    fn sample() -> Outline {
        let font = FontInfo::new("Arial-Bold", 16.0);
        Outline::new(vec![
            Heading::new("Introduction", 1, 1, 0.9, font.clone(), (72.0, 80.0)),
            Heading::new("Background", 2, 1, 0.8, font.clone(), (72.0, 200.0)),
            Heading::new("Methods", 1, 3, 0.85, font, (72.0, 80.0)),
        ])
    }

    #[test]
    fn test_result_from_outline() {
        let result = OutlineResult::from_outline("paper.pdf", &sample());
        assert_eq!(result.title, "paper.pdf");
        assert_eq!(result.len(), 3);
        assert_eq!(
            result.outline[1],
            OutlineEntry {
                level: "H2".to_string(),
                text: "Background".to_string(),
                page: 1,
            }
        );
    }

    #[test]
    fn test_result_json_shape() {
        let result = OutlineResult::from_outline("paper.pdf", &sample());
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["title"], "paper.pdf");
        assert_eq!(value["outline"][0]["level"], "H1");
        assert_eq!(value["outline"][0]["text"], "Introduction");
        assert_eq!(value["outline"][0]["page"], 1);
    }

    #[test]
    fn test_empty_result() {
        let result = OutlineResult::from_outline("blank.pdf", &Outline::empty());
        assert!(result.is_empty());
        assert_eq!(result, OutlineResult::empty("blank.pdf"));
    }

    #[test]
    fn test_summary() {
        let summary = OutlineSummary::from_outline(&sample());
        assert_eq!(summary.total_headings, 3);
        assert_eq!(summary.levels["h1"], 2);
        assert_eq!(summary.levels["h2"], 1);
        assert_eq!(summary.levels["h3"], 0);
        assert_eq!(summary.pages_covered, 2);
        assert!(summary.quality_score > 0.0);
    }
}
