//! Text helpers shared by the scorer, validator and assembler.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Leading numbering tokens, tried in order. Deeper decimal forms come first
/// so that "1.2.3 Scope" yields "1.2.3" rather than "1.".
static NUMBERING_TOKENS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)^(\d+\.\d+\.\d+)\s*(.+)",
        r"(?i)^(\d+\.\d+)\s*(.+)",
        r"(?i)^(\d+\.)\s*(.+)",
        r"(?i)^([A-Z]\.)\s*(.+)",
        r"(?i)^([IVX]+\.)\s*(.+)",
        r"(?i)^(\(\d+\))\s*(.+)",
        r"(?i)^(Chapter\s+\d+)\s*(.+)",
        r"(?i)^(Section\s+\d+)\s*(.+)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Numbering shapes that count towards outline consistency.
static CONSISTENCY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^\d+\.",
        r"^\d+\.\d+",
        r"^[A-Z]\.",
        r"^[IVX]+\.",
        r"^\(\d+\)",
        r"^Chapter\s+\d+",
        r"^Section\s+\d+",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static HEADER_FOOTER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)^\d+$",
        r"(?i)^Page\s+\d+",
        r"(?i)^Chapter\s+\d+\s*$",
        r"(?i)^\w+\s+\d{4}$",
        r"(?i)^©.*\d{4}",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Normalize text to NFC, collapse whitespace runs and trim.
pub fn normalize_text(text: &str) -> String {
    let nfc: String = text.nfc().collect();
    WHITESPACE.replace_all(nfc.trim(), " ").into_owned()
}

/// Key used to detect repeated headings.
pub fn dedup_key(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Split a leading numbering token from heading text.
///
/// Returns `(numbering, remaining_text)`.
pub fn extract_numbering(text: &str) -> Option<(String, String)> {
    let text = text.trim();
    NUMBERING_TOKENS.iter().find_map(|re| {
        re.captures(text)
            .map(|caps| (caps[1].to_string(), caps[2].trim().to_string()))
    })
}

/// Check whether heading text starts with a recognized numbering pattern.
pub fn has_numbering(text: &str) -> bool {
    let text = text.trim();
    CONSISTENCY_PATTERNS.iter().any(|re| re.is_match(text))
}

/// Check whether a fragment looks like a running page header or footer.
///
/// Only text in the top or bottom 10% of the page is considered.
pub fn is_likely_page_header_footer(text: &str, page_height: f32, y: f32) -> bool {
    if y >= page_height * 0.1 && y <= page_height * 0.9 {
        return false;
    }
    let text = text.trim();
    HEADER_FOOTER_PATTERNS.iter().any(|re| re.is_match(text))
}

/// Format a confidence score for display, e.g. `"93% (High)"`.
pub fn format_confidence(confidence: f32) -> String {
    let percentage = confidence * 100.0;
    let label = if percentage >= 90.0 {
        "High"
    } else if percentage >= 70.0 {
        "Medium"
    } else if percentage >= 50.0 {
        "Low"
    } else {
        "Very Low"
    };
    format!("{:.0}% ({})", percentage, label)
}
