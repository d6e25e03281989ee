//! Detected headings.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::FontInfo;

/// Shallowest heading level.
pub const MIN_LEVEL: u8 = 1;

/// Deepest heading level.
pub const MAX_LEVEL: u8 = 3;

/// Index of a heading inside its owning [`Outline`](super::Outline).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeadingId(pub usize);

impl HeadingId {
    /// Position in the outline's flat heading list.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A detected heading with its level and confidence.
///
/// `children` are owned edges of the outline tree; `parent` is a back
/// reference only. Both are indices into the owning outline and are empty
/// until the outline is assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Trimmed heading text
    pub text: String,
    /// Level, 1 (H1) to 3 (H3)
    pub level: u8,
    /// Page number (1-indexed)
    pub page: u32,
    /// Confidence in [0, 1]
    pub confidence: f32,
    /// Font of the source block
    pub font_info: FontInfo,
    /// (x, y) position of the source block
    pub position: (f32, f32),
    /// Leading numbering token, e.g. "1.1", "A.", "Chapter 1"
    #[serde(default)]
    pub numbering: Option<String>,
    /// Enclosing heading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<HeadingId>,
    /// Nested headings, in reading order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<HeadingId>,
}

impl Heading {
    /// Create a heading. Text is trimmed, level and confidence are clamped.
    pub fn new(
        text: impl AsRef<str>,
        level: u8,
        page: u32,
        confidence: f32,
        font_info: FontInfo,
        position: (f32, f32),
    ) -> Self {
        Self {
            text: text.as_ref().trim().to_string(),
            level: clamp_level(level),
            page,
            confidence: clamp_confidence(confidence),
            font_info,
            position,
            numbering: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Set the numbering token.
    pub fn with_numbering(mut self, numbering: Option<String>) -> Self {
        self.numbering = numbering;
        self
    }

    /// Copy of this heading moved to another level with its confidence
    /// scaled by `penalty`. Tree links are not carried over.
    pub fn relevelled(&self, level: u8, penalty: f32) -> Self {
        Self {
            text: self.text.clone(),
            level: clamp_level(level),
            page: self.page,
            confidence: clamp_confidence(self.confidence * penalty),
            font_info: self.font_info.clone(),
            position: self.position,
            numbering: self.numbering.clone(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Vertical position on the page.
    pub fn y(&self) -> f32 {
        self.position.1
    }

    pub fn is_h1(&self) -> bool {
        self.level == 1
    }

    pub fn is_h2(&self) -> bool {
        self.level == 2
    }

    pub fn is_h3(&self) -> bool {
        self.level == 3
    }

    /// Whether a numbering token was recognized.
    pub fn has_numbering(&self) -> bool {
        self.numbering.is_some()
    }

    /// Whether the heading has nested headings.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Level label, e.g. "H2".
    pub fn label(&self) -> String {
        format!("H{}", self.level)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "H{}: {} (page {}, confidence {:.2})",
            self.level, self.text, self.page, self.confidence
        )
    }
}

/// Clamp a level into `[MIN_LEVEL, MAX_LEVEL]`.
pub fn clamp_level(level: u8) -> u8 {
    level.clamp(MIN_LEVEL, MAX_LEVEL)
}

/// Clamp a confidence into `[0, 1]`. NaN becomes 0.
pub fn clamp_confidence(confidence: f32) -> f32 {
    if confidence.is_nan() {
        return 0.0;
    }
    confidence.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font() -> FontInfo {
        FontInfo::new("Arial-Bold", 16.0)
    }

    #[test]
    fn test_heading_new_clamps() {
        let h = Heading::new("  Overview  ", 7, 2, 1.4, font(), (10.0, 20.0));
        assert_eq!(h.text, "Overview");
        assert_eq!(h.level, 3);
        assert_eq!(h.confidence, 1.0);

        let h = Heading::new("Scope", 0, 1, -0.2, font(), (0.0, 0.0));
        assert_eq!(h.level, 1);
        assert_eq!(h.confidence, 0.0);
    }

    #[test]
    fn test_relevelled_applies_penalty() {
        let h = Heading::new("Scope", 3, 1, 0.8, font(), (0.0, 0.0))
            .with_numbering(Some("1.1".into()));
        let moved = h.relevelled(1, 0.9);
        assert_eq!(moved.level, 1);
        assert!((moved.confidence - 0.72).abs() < 1e-6);
        assert_eq!(moved.numbering.as_deref(), Some("1.1"));
    }

    #[test]
    fn test_level_predicates() {
        let h = Heading::new("Scope", 2, 1, 0.5, font(), (0.0, 0.0));
        assert!(h.is_h2());
        assert!(!h.is_h1());
        assert!(!h.is_h3());
        assert_eq!(h.label(), "H2");
        assert!(!h.has_numbering());
        assert!(!h.has_children());
    }

    #[test]
    fn test_display() {
        let h = Heading::new("Results", 1, 4, 0.856, font(), (0.0, 0.0));
        assert_eq!(h.to_string(), "H1: Results (page 4, confidence 0.86)");
    }

    #[test]
    fn test_clamp_confidence_nan() {
        assert_eq!(clamp_confidence(f32::NAN), 0.0);
    }
}
