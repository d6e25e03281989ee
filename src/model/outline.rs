//! Assembled outline: flat heading arena, tree links, hierarchy and metrics.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{FontInfo, Heading, HeadingId};
use crate::build::QualityMetrics;

/// Nested hierarchy keyed `"{level}_{index}"`, index counted per parent.
pub type Hierarchy = IndexMap<String, HierarchyEntry>;

/// One node of the nested hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyEntry {
    pub text: String,
    pub page: u32,
    pub confidence: f32,
    pub children: Hierarchy,
}

/// Document outline built from validated headings.
///
/// Headings are stored flat in page and position order; tree edges are
/// [`HeadingId`] indices into that list. Statistics are computed once when
/// the outline is assembled.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Outline {
    headings: Vec<Heading>,
    roots: Vec<HeadingId>,
    hierarchy: Hierarchy,
    metrics: QualityMetrics,
    total_headings: usize,
    h1_count: usize,
    h2_count: usize,
    h3_count: usize,
}

impl Outline {
    /// Assemble an outline from headings that are already validated and in
    /// reading order.
    pub fn new(headings: Vec<Heading>) -> Self {
        crate::build::assemble(headings)
    }

    /// An outline with no headings.
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(
        headings: Vec<Heading>,
        roots: Vec<HeadingId>,
        hierarchy: Hierarchy,
        metrics: QualityMetrics,
    ) -> Self {
        let count = |level: u8| headings.iter().filter(|h| h.level == level).count();
        Self {
            total_headings: headings.len(),
            h1_count: count(1),
            h2_count: count(2),
            h3_count: count(3),
            headings,
            roots,
            hierarchy,
            metrics,
        }
    }

    /// All headings in reading order.
    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    /// Get a heading by id.
    pub fn get(&self, id: HeadingId) -> Option<&Heading> {
        self.headings.get(id.0)
    }

    /// Top-level headings of the tree.
    pub fn roots(&self) -> &[HeadingId] {
        &self.roots
    }

    /// Nested hierarchy mirroring the tree.
    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    /// Quality metric breakdown.
    pub fn metrics(&self) -> &QualityMetrics {
        &self.metrics
    }

    pub fn average_confidence(&self) -> f32 {
        self.metrics.average_confidence
    }

    pub fn quality_score(&self) -> f32 {
        self.metrics.quality_score
    }

    pub fn total_headings(&self) -> usize {
        self.total_headings
    }

    pub fn h1_count(&self) -> usize {
        self.h1_count
    }

    pub fn h2_count(&self) -> usize {
        self.h2_count
    }

    pub fn h3_count(&self) -> usize {
        self.h3_count
    }

    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    pub fn has_h1_headings(&self) -> bool {
        self.h1_count > 0
    }

    /// Whether more than one level is present.
    pub fn has_hierarchy(&self) -> bool {
        let mut levels: Vec<u8> = self.headings.iter().map(|h| h.level).collect();
        levels.sort_unstable();
        levels.dedup();
        levels.len() > 1
    }

    /// Deepest level present, 0 when empty.
    pub fn max_depth(&self) -> u8 {
        self.headings.iter().map(|h| h.level).max().unwrap_or(0)
    }

    pub fn headings_by_level(&self, level: u8) -> Vec<&Heading> {
        self.headings.iter().filter(|h| h.level == level).collect()
    }

    pub fn headings_on_page(&self, page: u32) -> Vec<&Heading> {
        self.headings.iter().filter(|h| h.page == page).collect()
    }

    /// First and last page carrying a heading, `(0, 0)` when empty.
    pub fn page_range(&self) -> (u32, u32) {
        let min = self.headings.iter().map(|h| h.page).min();
        let max = self.headings.iter().map(|h| h.page).max();
        match (min, max) {
            (Some(min), Some(max)) => (min, max),
            _ => (0, 0),
        }
    }

    pub fn high_confidence_headings(&self, threshold: f32) -> Vec<&Heading> {
        self.headings
            .iter()
            .filter(|h| h.confidence >= threshold)
            .collect()
    }

    pub fn low_confidence_headings(&self, threshold: f32) -> Vec<&Heading> {
        self.headings
            .iter()
            .filter(|h| h.confidence < threshold)
            .collect()
    }

    /// Number of ancestors above a heading.
    pub fn depth(&self, id: HeadingId) -> usize {
        self.ancestors(id).count()
    }

    /// Ancestors of a heading, nearest first.
    pub fn ancestors(&self, id: HeadingId) -> impl Iterator<Item = HeadingId> + '_ {
        std::iter::successors(self.get(id).and_then(|h| h.parent), move |parent| {
            self.get(*parent).and_then(|h| h.parent)
        })
    }

    /// All descendants of a heading in pre-order.
    pub fn descendants(&self, id: HeadingId) -> Vec<HeadingId> {
        let mut out = Vec::new();
        if let Some(heading) = self.get(id) {
            for &child in &heading.children {
                out.push(child);
                out.extend(self.descendants(child));
            }
        }
        out
    }

    /// Ids from the root down to `id`.
    pub fn path(&self, id: HeadingId) -> Vec<HeadingId> {
        if self.get(id).is_none() {
            return Vec::new();
        }
        let mut path: Vec<HeadingId> = self.ancestors(id).collect();
        path.reverse();
        path.push(id);
        path
    }

    /// Heading texts from the root down to `id`, joined by `separator`.
    pub fn path_text(&self, id: HeadingId, separator: &str) -> String {
        self.path(id)
            .into_iter()
            .filter_map(|p| self.get(p))
            .map(|h| h.text.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Every heading reachable from the roots, in pre-order.
    pub fn flatten_tree(&self) -> Vec<HeadingId> {
        let mut out = Vec::with_capacity(self.headings.len());
        for &root in &self.roots {
            out.push(root);
            out.extend(self.descendants(root));
        }
        out
    }

    /// Advisory findings about the outline structure.
    ///
    /// An empty result means no issues were found.
    pub fn validate_structure(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.is_empty() {
            issues.push("Outline is empty".to_string());
            return issues;
        }

        if !self.has_h1_headings() {
            issues.push("No H1 headings found".to_string());
        }

        let mut prev_level = 0u8;
        for (i, heading) in self.headings.iter().enumerate() {
            if heading.level > prev_level + 1 {
                let preview: String = heading.text.chars().take(50).collect();
                issues.push(format!("Heading level jump at position {}: {}", i, preview));
            }
            prev_level = heading.level;
        }

        let low = self.low_confidence_headings(0.3).len();
        if low as f32 > self.headings.len() as f32 * 0.5 {
            issues.push("More than 50% of headings have low confidence".to_string());
        }

        let (min_page, max_page) = self.page_range();
        let span = max_page - min_page + 1;
        let per_page = self.total_headings as f32 / span as f32;
        if per_page > 10.0 {
            issues.push("Too many headings per page (possible over-detection)".to_string());
        } else if per_page < 0.1 {
            issues.push("Too few headings per page (possible under-detection)".to_string());
        }

        issues
    }

    /// Serializable report with statistics, headings, hierarchy and issues.
    pub fn report(&self) -> OutlineReport {
        OutlineReport {
            statistics: OutlineStatistics {
                total_headings: self.total_headings,
                h1_count: self.h1_count,
                h2_count: self.h2_count,
                h3_count: self.h3_count,
                average_confidence: self.average_confidence(),
                quality_score: self.quality_score(),
            },
            page_range: self.page_range(),
            headings: self.headings.iter().map(HeadingRecord::from).collect(),
            hierarchy: self.hierarchy.clone(),
            validation_issues: self.validate_structure(),
        }
    }
}

/// Full outline report for serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineReport {
    pub statistics: OutlineStatistics,
    pub page_range: (u32, u32),
    pub headings: Vec<HeadingRecord>,
    pub hierarchy: Hierarchy,
    pub validation_issues: Vec<String>,
}

/// Outline statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutlineStatistics {
    pub total_headings: usize,
    pub h1_count: usize,
    pub h2_count: usize,
    pub h3_count: usize,
    pub average_confidence: f32,
    pub quality_score: f32,
}

/// Flattened heading as it appears in a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadingRecord {
    pub text: String,
    pub level: u8,
    pub page: u32,
    pub confidence: f32,
    pub font_info: FontInfo,
    pub position: Position,
    pub numbering: Option<String>,
    pub has_children: bool,
    pub child_count: usize,
}

/// A point on a page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl From<&Heading> for HeadingRecord {
    fn from(h: &Heading) -> Self {
        Self {
            text: h.text.clone(),
            level: h.level,
            page: h.page,
            confidence: h.confidence,
            font_info: h.font_info.clone(),
            position: Position {
                x: h.position.0,
                y: h.position.1,
            },
            numbering: h.numbering.clone(),
            has_children: h.has_children(),
            child_count: h.children.len(),
        }
    }
}
