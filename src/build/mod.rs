//! Outline building: hierarchy repair, tree assembly and quality metrics.

mod assembler;
mod hierarchy;
mod quality;

pub use assembler::assemble;
pub use hierarchy::{
    repair_levels, sort_reading_order, validate_hierarchy, LEVEL_ADJUSTMENT_PENALTY,
};
pub use quality::{
    average_confidence, consistency, hierarchy_balance, page_coverage, QualityMetrics,
};

use crate::model::{Heading, Outline};

/// Turns classified headings into a validated outline.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineBuilder;

impl OutlineBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Sort, repair, deduplicate and assemble.
    pub fn build(&self, headings: Vec<Heading>) -> Outline {
        if headings.is_empty() {
            log::info!("No headings to build an outline from");
            return Outline::empty();
        }

        let detected = headings.len();
        let validated = validate_hierarchy(headings);
        let outline = assemble(validated);

        log::info!(
            "Built outline with {} headings from {} detected (H1: {}, H2: {}, H3: {}, quality: {:.2})",
            outline.total_headings(),
            detected,
            outline.h1_count(),
            outline.h2_count(),
            outline.h3_count(),
            outline.quality_score()
        );
        outline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FontInfo;

    #[test]
    fn test_build_repairs_and_orders() {
        let font = FontInfo::new("Arial-Bold", 16.0);
        let headings = vec![
            Heading::new("Methods", 2, 2, 0.7, font.clone(), (72.0, 100.0)),
            Heading::new("Introduction", 3, 1, 0.8, font.clone(), (72.0, 80.0)),
            Heading::new("Results", 1, 3, 0.9, font, (72.0, 80.0)),
        ];

        let outline = OutlineBuilder::new().build(headings);
        let levels: Vec<(&str, u8)> = outline
            .headings()
            .iter()
            .map(|h| (h.text.as_str(), h.level))
            .collect();
        assert_eq!(levels, vec![("Introduction", 1), ("Methods", 2), ("Results", 1)]);
        assert!(outline.validate_structure().is_empty());
    }

    #[test]
    fn test_build_empty() {
        let outline = OutlineBuilder::new().build(Vec::new());
        assert!(outline.is_empty());
        assert_eq!(outline.quality_score(), 0.0);
    }
}
