//! Candidate filtering and heading-likelihood scoring.

use serde::Serialize;

use super::language::{KeywordWeight, LanguageProfile};
use crate::config::Settings;
use crate::model::{Document, TextBlock, DEFAULT_FONT_SIZE};
use crate::text::{is_likely_page_header_footer, normalize_text};

/// Punctuation that marks the end of a sentence rather than a heading.
const SENTENCE_TERMINALS: [char; 5] = ['.', '!', '?', ';', ':'];

/// Terminal punctuation only disqualifies fragments longer than this.
const TERMINAL_PUNCTUATION_MIN_LEN: usize = 20;

/// Score contribution of a bold-looking font family.
const BOLD_FAMILY_SCORE: f32 = 0.8;

const BOLD_FAMILY_MARKERS: [&str; 4] = ["bold", "black", "heavy", "gothicb"];

/// Individual signals behind a candidate's composite score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreBreakdown {
    pub size: f32,
    pub style: f32,
    pub position: f32,
    pub numbering: f32,
    pub keyword: bool,
    pub total: f32,
}

/// A text block that passed filtering, with its score.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'d> {
    pub block: &'d TextBlock,
    pub score: f32,
    pub breakdown: ScoreBreakdown,
}

/// Filters and scores heading candidates of a document.
pub struct CandidateScorer<'a> {
    settings: &'a Settings,
    profile: LanguageProfile,
}

impl<'a> CandidateScorer<'a> {
    /// Create a scorer for the given profile.
    pub fn new(settings: &'a Settings, profile: LanguageProfile) -> Self {
        Self { settings, profile }
    }

    /// Create a scorer with the profile matching the document language.
    pub fn for_document(settings: &'a Settings, doc: &Document) -> Self {
        Self::new(settings, LanguageProfile::for_language(doc.language()))
    }

    /// The active profile.
    pub fn profile(&self) -> LanguageProfile {
        self.profile
    }

    /// Check whether a block is plausible heading text at all.
    pub fn is_candidate(&self, block: &TextBlock, doc: &Document) -> bool {
        let text = block.text.trim();
        if text.is_empty() {
            return false;
        }

        let len = text.chars().count();
        if len > self.settings.max_heading_length {
            return false;
        }

        if block.font_info.size < body_size(doc) {
            return false;
        }

        if len > TERMINAL_PUNCTUATION_MIN_LEN && text.ends_with(SENTENCE_TERMINALS) {
            return false;
        }

        if self.settings.skip_headers_footers {
            if let Some((_, height)) = doc.page_size(block.page) {
                if is_likely_page_header_footer(text, height, block.y) {
                    return false;
                }
            }
        }

        true
    }

    /// Blocks that pass filtering, in extraction order.
    pub fn candidates<'d>(&self, doc: &'d Document) -> Vec<&'d TextBlock> {
        doc.text_blocks()
            .iter()
            .filter(|b| self.is_candidate(b, doc))
            .collect()
    }

    /// Compute every signal and the composite score of a block.
    pub fn score_block(&self, block: &TextBlock, doc: &Document) -> ScoreBreakdown {
        let weights = self.profile.weights();
        let text = block.text.trim();

        let size = font_size_score(block.font_info.size, doc.avg_font_size());
        let style = font_style_score(&block.font_info.family);
        let numbering = self.profile.numbering_score(text);
        let keyword = self.profile.has_keyword(&normalize_text(text));

        let mut breakdown = ScoreBreakdown {
            size,
            style,
            numbering,
            keyword,
            ..Default::default()
        };

        let mut total = size * weights.size + style * weights.style;
        if let Some(position_weight) = weights.position {
            let page_width = doc.page_size(block.page).map(|(w, _)| w);
            breakdown.position = position_score(block, page_width);
            total += breakdown.position * position_weight;
        }
        total += numbering * weights.numbering;

        match weights.keyword {
            KeywordWeight::Bonus(bonus) => {
                if keyword {
                    total = (total + bonus).min(1.0);
                }
            }
            KeywordWeight::Weighted(weight) => {
                if keyword {
                    total += weight;
                }
            }
        }

        breakdown.total = total;
        breakdown
    }

    /// Filter and score a document's blocks.
    ///
    /// Candidates below the confidence threshold are dropped; the rest are
    /// returned by score, highest first. Ties keep extraction order.
    pub fn score<'d>(&self, doc: &'d Document) -> Vec<ScoredCandidate<'d>> {
        let mut scored: Vec<ScoredCandidate<'d>> = self
            .candidates(doc)
            .into_iter()
            .filter_map(|block| {
                let breakdown = self.score_block(block, doc);
                (breakdown.total >= self.settings.min_heading_confidence).then_some(
                    ScoredCandidate {
                        block,
                        score: breakdown.total,
                        breakdown,
                    },
                )
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        log::debug!(
            "Scored {} candidates above {:.2} in {}",
            scored.len(),
            self.settings.min_heading_confidence,
            doc.filename()
        );
        scored
    }
}

/// Body font size used as the reference for size ratios.
fn body_size(doc: &Document) -> f32 {
    let avg = doc.avg_font_size();
    if avg > 0.0 {
        avg
    } else {
        DEFAULT_FONT_SIZE
    }
}

/// Score a font size by its ratio to the average body size.
pub fn font_size_score(size: f32, avg_font_size: f32) -> f32 {
    let avg = if avg_font_size > 0.0 {
        avg_font_size
    } else {
        DEFAULT_FONT_SIZE
    };
    let ratio = size / avg;
    if ratio > 1.5 {
        1.0
    } else if ratio > 1.3 {
        0.8
    } else if ratio > 1.1 {
        0.6
    } else {
        0.2
    }
}

/// Score a font family by bold-looking markers in its name.
pub fn font_style_score(family: &str) -> f32 {
    let family = family.to_lowercase();
    let mut score = 0.0f32;
    if BOLD_FAMILY_MARKERS.iter().any(|m| family.contains(m)) {
        score += BOLD_FAMILY_SCORE;
    }
    score.min(1.0)
}

/// Score horizontal placement: centered beats left-flush.
///
/// Returns 0 when the page width is unknown.
pub fn position_score(block: &TextBlock, page_width: Option<f32>) -> f32 {
    let Some(page_width) = page_width.filter(|w| *w > 0.0) else {
        return 0.0;
    };
    let center_diff = (block.center_x() - page_width / 2.0).abs();
    if center_diff < page_width * 0.15 {
        0.8
    } else if block.x < page_width * 0.1 {
        0.5
    } else {
        0.0
    }
}
