//! Per-language heuristic profiles.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::Language;

/// A numbering pattern and the score it contributes when it matches.
#[derive(Debug)]
pub struct NumberingRule {
    pub pattern: Regex,
    pub score: f32,
}

impl NumberingRule {
    fn new(pattern: &str, score: f32) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            score,
        }
    }
}

static LATIN_NUMBERING: Lazy<Vec<NumberingRule>> = Lazy::new(|| {
    vec![
        NumberingRule::new(r"^\d+\.\d*", 0.8),
        NumberingRule::new(r"^[A-Z]\.", 0.7),
        NumberingRule::new(r"(?i)^[IVXLC]+\.\s+", 0.7),
        NumberingRule::new(r"(?i)^(Chapter|Section)\s+\d+", 0.9),
    ]
});

static CJK_NUMBERING: Lazy<Vec<NumberingRule>> = Lazy::new(|| {
    vec![
        NumberingRule::new(r"^第[一二三四五六七八九十百]+(章|節)", 1.0),
        NumberingRule::new(r"^\d+．", 0.8),
        NumberingRule::new(r"^\d+\.\d*", 0.7),
    ]
});

const LATIN_KEYWORDS: &[&str] = &[
    "introduction",
    "conclusion",
    "abstract",
    "summary",
    "background",
    "methodology",
    "results",
    "discussion",
    "references",
    "appendix",
    "chapter",
    "section",
];

const CJK_KEYWORDS: &[&str] = &[
    "概要",
    "はじめに",
    "要旨",
    "背景",
    "目的",
    "方法",
    "結果",
    "考察",
    "結論",
    "参考文献",
    "付録",
];

/// How a keyword hit enters the composite score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeywordWeight {
    /// Flat bonus added after the weighted sum, capped at 1.0
    Bonus(f32),
    /// Weighted term inside the sum
    Weighted(f32),
}

/// Weight table of a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub size: f32,
    pub style: f32,
    /// `None` when position is not a reliable signal for the script
    pub position: Option<f32>,
    pub numbering: f32,
    pub keyword: KeywordWeight,
}

/// Heuristic profile selected by the document language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageProfile {
    /// Latin-script documents: size and style dominate, position counts
    Latin,
    /// CJK documents: numbering and keywords carry more weight, no position
    Cjk,
}

impl LanguageProfile {
    /// Select the profile for a language tag.
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => LanguageProfile::Latin,
            Language::Japanese => LanguageProfile::Cjk,
        }
    }

    pub fn weights(&self) -> Weights {
        match self {
            LanguageProfile::Latin => Weights {
                size: 0.5,
                style: 0.3,
                position: Some(0.1),
                numbering: 0.1,
                keyword: KeywordWeight::Bonus(0.1),
            },
            LanguageProfile::Cjk => Weights {
                size: 0.4,
                style: 0.2,
                position: None,
                numbering: 0.3,
                keyword: KeywordWeight::Weighted(0.1),
            },
        }
    }

    /// Numbering rules, tried in order; the first match wins.
    pub fn numbering_rules(&self) -> &'static [NumberingRule] {
        match self {
            LanguageProfile::Latin => LATIN_NUMBERING.as_slice(),
            LanguageProfile::Cjk => CJK_NUMBERING.as_slice(),
        }
    }

    /// Structural keywords of the profile.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            LanguageProfile::Latin => LATIN_KEYWORDS,
            LanguageProfile::Cjk => CJK_KEYWORDS,
        }
    }

    /// Score of the first numbering rule matching `text`, 0 if none.
    pub fn numbering_score(&self, text: &str) -> f32 {
        let text = text.trim();
        self.numbering_rules()
            .iter()
            .find(|rule| rule.pattern.is_match(text))
            .map_or(0.0, |rule| rule.score)
    }

    /// Whether `text` contains any structural keyword. Matching is
    /// case-sensitive.
    pub fn has_keyword(&self, text: &str) -> bool {
        self.keywords().iter().any(|k| text.contains(k))
    }
}

impl From<Language> for LanguageProfile {
    fn from(language: Language) -> Self {
        Self::for_language(language)
    }
}
