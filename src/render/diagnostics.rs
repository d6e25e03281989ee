//! Debug information about a document and its extracted outline.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{Document, Outline};

/// Debug information for troubleshooting extraction results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugInfo {
    pub document_stats: DocumentStats,
    pub heading_stats: HeadingStats,
    /// Heading count per `"{family}_{size}"` font key
    pub font_analysis: IndexMap<String, usize>,
    pub potential_issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub filename: String,
    pub page_count: u32,
    pub text_blocks: usize,
    pub avg_font_size: f32,
    pub primary_font: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingStats {
    pub total_headings: usize,
    /// Keyed "h1", "h2", "h3"; only levels that occur
    pub by_level: IndexMap<String, usize>,
    pub avg_confidence: f32,
}

impl DebugInfo {
    /// Collect debug information for a document and the outline built from it.
    pub fn collect(doc: &Document, outline: &Outline) -> Self {
        let headings = outline.headings();

        let mut by_level: IndexMap<String, usize> = IndexMap::new();
        let mut font_analysis: IndexMap<String, usize> = IndexMap::new();
        for heading in headings {
            *by_level.entry(format!("h{}", heading.level)).or_default() += 1;
            let font_key = format!("{}_{:.1}", heading.font_info.family, heading.font_info.size);
            *font_analysis.entry(font_key).or_default() += 1;
        }

        let avg_confidence = outline.average_confidence();

        let mut potential_issues = Vec::new();
        if headings.is_empty() {
            potential_issues.push("No headings detected".to_string());
        } else if !outline.has_h1_headings() {
            potential_issues.push("No H1 headings found".to_string());
        } else if avg_confidence < 0.5 {
            potential_issues.push("Low average confidence scores".to_string());
        }

        Self {
            document_stats: DocumentStats {
                filename: doc.filename().to_string(),
                page_count: doc.page_count(),
                text_blocks: doc.text_blocks().len(),
                avg_font_size: doc.avg_font_size(),
                primary_font: doc.primary_font().to_string(),
            },
            heading_stats: HeadingStats {
                total_headings: headings.len(),
                by_level,
                avg_confidence,
            },
            font_analysis,
            potential_issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FontInfo, Heading, TextBlock};

    fn document() -> Document {
        Document::builder("report.pdf")
            .page(612.0, 792.0)
            .block(TextBlock::new("Body", 1, 72.0, 300.0, FontInfo::new("Times", 11.0)))
            .block(TextBlock::new("Summary", 1, 72.0, 80.0, FontInfo::new("Times-Bold", 18.0)))
            .build()
    }

    #[test]
    fn test_collect() {
        let outline = Outline::new(vec![
            Heading::new("Summary", 1, 1, 0.8, FontInfo::new("Times-Bold", 18.0), (72.0, 80.0)),
            Heading::new("Detail", 2, 1, 0.6, FontInfo::new("Times-Bold", 14.0), (72.0, 160.0)),
        ]);
        let info = DebugInfo::collect(&document(), &outline);

        assert_eq!(info.document_stats.filename, "report.pdf");
        assert_eq!(info.document_stats.page_count, 1);
        assert_eq!(info.document_stats.text_blocks, 2);
        assert_eq!(info.heading_stats.total_headings, 2);
        assert_eq!(info.heading_stats.by_level["h1"], 1);
        assert_eq!(info.heading_stats.by_level["h2"], 1);
        assert_eq!(info.font_analysis["Times-Bold_18.0"], 1);
        assert!(info.potential_issues.is_empty());
    }

    #[test]
    fn test_issues() {
        let empty = DebugInfo::collect(&document(), &Outline::empty());
        assert_eq!(empty.potential_issues, vec!["No headings detected"]);

        let weak = Outline::new(vec![Heading::new(
            "Summary",
            1,
            1,
            0.3,
            FontInfo::new("Times-Bold", 18.0),
            (72.0, 80.0),
        )]);
        let info = DebugInfo::collect(&document(), &weak);
        assert_eq!(info.potential_issues, vec!["Low average confidence scores"]);
    }
}
