//! Document-level types: fonts, positioned text blocks and the parsed document.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Font family reported for fragments recovered by OCR.
pub const OCR_FONT_FAMILY: &str = "OCR";

/// Fallback body size when a document has no measurable fonts.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Font information attached to a text block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontInfo {
    /// Font family name (e.g., "Helvetica-Bold")
    pub family: String,

    /// Font size in points
    pub size: f32,

    /// Style bitmask (see the `FLAG_*` constants)
    #[serde(default)]
    pub flags: u32,

    /// Text color as `#rrggbb`
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "#000000".to_string()
}

impl FontInfo {
    pub const FLAG_SUPERSCRIPT: u32 = 1;
    pub const FLAG_ITALIC: u32 = 1 << 1;
    pub const FLAG_SERIF: u32 = 1 << 2;
    pub const FLAG_MONOSPACE: u32 = 1 << 3;
    pub const FLAG_BOLD: u32 = 1 << 4;

    /// Create font info with no style flags and black text.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            flags: 0,
            color: default_color(),
        }
    }

    /// Font info used for OCR fragments, which carry no real font data.
    pub fn ocr() -> Self {
        Self::new(OCR_FONT_FAMILY, DEFAULT_FONT_SIZE)
    }

    /// Set the style flags.
    pub fn with_flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    /// Set the color from a packed sRGB integer.
    pub fn with_rgb(mut self, rgb: u32) -> Self {
        self.color = Self::color_from_rgb(rgb);
        self
    }

    /// Format a packed sRGB integer as `#rrggbb`.
    pub fn color_from_rgb(rgb: u32) -> String {
        format!("#{:06x}", rgb & 0x00FF_FFFF)
    }

    /// Whether the bold flag is set.
    pub fn is_bold(&self) -> bool {
        self.flags & Self::FLAG_BOLD != 0
    }

    /// Whether the italic flag is set.
    pub fn is_italic(&self) -> bool {
        self.flags & Self::FLAG_ITALIC != 0
    }

    /// Whether this font comes from the OCR fallback.
    pub fn is_ocr(&self) -> bool {
        self.family == OCR_FONT_FAMILY
    }
}

/// One positioned run of text on one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    /// The text content (untrimmed)
    pub text: String,
    /// Page number (1-indexed)
    pub page: u32,
    /// X position (left edge, origin top-left)
    pub x: f32,
    /// Y position (top edge, origin top-left)
    pub y: f32,
    /// Width of the block
    #[serde(default)]
    pub width: f32,
    /// Height of the block
    #[serde(default)]
    pub height: f32,
    /// Font of the block
    pub font_info: FontInfo,
}

impl TextBlock {
    /// Create a new text block with zero extent.
    pub fn new(text: impl Into<String>, page: u32, x: f32, y: f32, font_info: FontInfo) -> Self {
        Self {
            text: text.into(),
            page,
            x,
            y,
            width: 0.0,
            height: 0.0,
            font_info,
        }
    }

    /// Set width and height.
    pub fn with_extent(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Horizontal center of the block.
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// Language tag selecting the heuristic profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Latin-script documents
    #[default]
    English,
    /// CJK documents
    Japanese,
}

impl Language {
    /// Resolve a language tag. Unrecognized tags fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }

    /// The canonical tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Japanese => "japanese",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" | "eng" => Ok(Language::English),
            "japanese" | "ja" | "jpn" => Ok(Language::Japanese),
            other => Err(format!("unknown language tag: {}", other)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Font statistics derived from a document's text blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontStatistics {
    /// Mean font size of measurable, non-OCR blocks
    pub avg_font_size: f32,
    /// Median font size of the same blocks
    pub median_font_size: f32,
    /// Population standard deviation of the same blocks
    pub font_size_std: f32,
    /// Most frequent non-OCR font family
    pub primary_font: String,
}

impl FontStatistics {
    /// Compute statistics over a set of blocks.
    pub fn from_blocks(blocks: &[TextBlock]) -> Self {
        let mut sizes: Vec<f32> = blocks
            .iter()
            .filter(|b| b.font_info.size > 0.0 && !b.font_info.is_ocr())
            .map(|b| b.font_info.size)
            .collect();

        let (avg, median, std) = if sizes.is_empty() {
            (DEFAULT_FONT_SIZE, DEFAULT_FONT_SIZE, 0.0)
        } else {
            let n = sizes.len() as f32;
            let avg = sizes.iter().sum::<f32>() / n;
            let variance = sizes.iter().map(|s| (s - avg).powi(2)).sum::<f32>() / n;

            sizes.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            let mid = sizes.len() / 2;
            let median = if sizes.len() % 2 == 0 {
                (sizes[mid - 1] + sizes[mid]) / 2.0
            } else {
                sizes[mid]
            };
            (avg, median, variance.sqrt())
        };

        // Insertion order breaks ties in favour of the family seen first
        let mut families: IndexMap<&str, usize> = IndexMap::new();
        for block in blocks.iter().filter(|b| !b.font_info.is_ocr()) {
            *families.entry(block.font_info.family.as_str()).or_insert(0) += 1;
        }
        let mut primary: Option<(&str, usize)> = None;
        for (family, count) in families {
            if primary.map_or(true, |(_, best)| count > best) {
                primary = Some((family, count));
            }
        }

        Self {
            avg_font_size: avg,
            median_font_size: median,
            font_size_std: std,
            primary_font: primary
                .map(|(family, _)| family.to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

/// A parsed document: positioned text blocks plus derived statistics.
///
/// Statistics are computed once when the document is built and the document
/// is read-only afterwards. Construct with [`Document::builder`] or by
/// deserializing a [`LayoutDocument`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "LayoutDocument")]
pub struct Document {
    filename: String,
    filepath: String,
    page_count: u32,
    processed_at: DateTime<Utc>,
    text_blocks: Vec<TextBlock>,
    language: Language,
    page_dimensions: Vec<(f32, f32)>,
    #[serde(flatten)]
    stats: FontStatistics,
}

impl Document {
    /// Start building a document.
    pub fn builder(filename: impl Into<String>) -> DocumentBuilder {
        DocumentBuilder::new(filename)
    }

    /// Source file name.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Source file path (may be empty).
    pub fn filepath(&self) -> &str {
        &self.filepath
    }

    /// Number of pages.
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// When the document was built.
    pub fn processed_at(&self) -> DateTime<Utc> {
        self.processed_at
    }

    /// Text blocks in extraction order.
    pub fn text_blocks(&self) -> &[TextBlock] {
        &self.text_blocks
    }

    /// Document language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Page sizes indexed by page - 1.
    pub fn page_dimensions(&self) -> &[(f32, f32)] {
        &self.page_dimensions
    }

    /// Dimensions of a page (1-indexed).
    pub fn page_size(&self, page: u32) -> Option<(f32, f32)> {
        if page == 0 {
            return None;
        }
        self.page_dimensions.get((page - 1) as usize).copied()
    }

    /// Mean font size of non-OCR text.
    pub fn avg_font_size(&self) -> f32 {
        self.stats.avg_font_size
    }

    /// Median font size of non-OCR text.
    pub fn median_font_size(&self) -> f32 {
        self.stats.median_font_size
    }

    /// Standard deviation of non-OCR font sizes.
    pub fn font_size_std(&self) -> f32 {
        self.stats.font_size_std
    }

    /// Most frequent non-OCR font family.
    pub fn primary_font(&self) -> &str {
        &self.stats.primary_font
    }

    /// All derived font statistics.
    pub fn font_stats(&self) -> &FontStatistics {
        &self.stats
    }

    /// Check if the document has no text.
    pub fn is_empty(&self) -> bool {
        self.text_blocks.is_empty()
    }
}

/// Builder that finalizes the block list before computing statistics.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    filename: String,
    filepath: String,
    page_count: Option<u32>,
    processed_at: Option<DateTime<Utc>>,
    text_blocks: Vec<TextBlock>,
    language: Language,
    page_dimensions: Vec<(f32, f32)>,
}

impl DocumentBuilder {
    /// Create a builder for the given file name.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            filepath: String::new(),
            page_count: None,
            processed_at: None,
            text_blocks: Vec::new(),
            language: Language::default(),
            page_dimensions: Vec::new(),
        }
    }

    /// Set the source path.
    pub fn filepath(mut self, path: impl Into<String>) -> Self {
        self.filepath = path.into();
        self
    }

    /// Set the page count explicitly.
    pub fn page_count(mut self, count: u32) -> Self {
        self.page_count = Some(count);
        self
    }

    /// Set the processing timestamp.
    pub fn processed_at(mut self, at: DateTime<Utc>) -> Self {
        self.processed_at = Some(at);
        self
    }

    /// Set the language.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Append one page's dimensions.
    pub fn page(mut self, width: f32, height: f32) -> Self {
        self.page_dimensions.push((width, height));
        self
    }

    /// Replace all page dimensions.
    pub fn page_dimensions(mut self, dimensions: Vec<(f32, f32)>) -> Self {
        self.page_dimensions = dimensions;
        self
    }

    /// Append a text block.
    pub fn block(mut self, block: TextBlock) -> Self {
        self.text_blocks.push(block);
        self
    }

    /// Append several text blocks.
    pub fn blocks(mut self, blocks: impl IntoIterator<Item = TextBlock>) -> Self {
        self.text_blocks.extend(blocks);
        self
    }

    /// Finalize the document and compute its statistics.
    pub fn build(self) -> Document {
        let stats = FontStatistics::from_blocks(&self.text_blocks);
        let highest_page = self.text_blocks.iter().map(|b| b.page).max().unwrap_or(0);
        let page_count = self
            .page_count
            .unwrap_or_else(|| (self.page_dimensions.len() as u32).max(highest_page));

        log::debug!(
            "Document stats for {} - avg font size: {:.1}, primary font: {}",
            self.filename,
            stats.avg_font_size,
            stats.primary_font
        );

        Document {
            filename: self.filename,
            filepath: self.filepath,
            page_count,
            processed_at: self.processed_at.unwrap_or_else(Utc::now),
            text_blocks: self.text_blocks,
            language: self.language,
            page_dimensions: self.page_dimensions,
            stats,
        }
    }
}

/// Layout document as produced by the PDF parsing collaborator.
///
/// Derived statistics in the input, if any, are ignored and recomputed.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutDocument {
    pub filename: String,
    #[serde(default)]
    pub filepath: String,
    #[serde(default)]
    pub page_count: Option<u32>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub page_dimensions: Vec<(f32, f32)>,
    #[serde(default)]
    pub text_blocks: Vec<TextBlock>,
}

impl TryFrom<LayoutDocument> for Document {
    type Error = Error;

    fn try_from(layout: LayoutDocument) -> std::result::Result<Self, Self::Error> {
        if let Some(block) = layout.text_blocks.iter().find(|b| b.page == 0) {
            return Err(Error::InvalidDocument(format!(
                "text block {:?} has page 0 (pages are 1-indexed)",
                block.text
            )));
        }

        let language = layout
            .language
            .as_deref()
            .map(Language::from_tag)
            .unwrap_or_default();

        let mut builder = Document::builder(layout.filename)
            .filepath(layout.filepath)
            .language(language)
            .page_dimensions(layout.page_dimensions)
            .blocks(layout.text_blocks);
        if let Some(count) = layout.page_count {
            builder = builder.page_count(count);
        }
        Ok(builder.build())
    }
}
