//! Integration tests for the extraction pipeline.

use pdfoutline::build::{repair_levels, validate_hierarchy, OutlineBuilder};
use pdfoutline::detect::{classify_levels, CandidateScorer, ScoreBreakdown, ScoredCandidate};
use pdfoutline::{
    extract_outline, Document, FontInfo, Heading, Language, Settings, TextBlock,
};

fn body(text: &str, page: u32, y: f32) -> TextBlock {
    TextBlock::new(text, page, 72.0, y, FontInfo::new("Times-Roman", 10.0)).with_extent(450.0, 12.0)
}

fn title(text: &str, page: u32, y: f32, size: f32) -> TextBlock {
    TextBlock::new(text, page, 72.0, y, FontInfo::new("Times-Bold", size)).with_extent(300.0, size)
}

/// A report with one chapter per page, two sections and two subsections each.
fn synthetic_report(pages: u32) -> Document {
    let mut builder = Document::builder("report.pdf").language(Language::English);
    for page in 1..=pages {
        builder = builder
            .page(612.0, 792.0)
            .block(title(&format!("{}. Chapter heading {}", page, page), page, 60.0, 20.0));
        let mut y = 100.0;
        for section in 1..=2 {
            builder = builder.block(title(
                &format!("{}.{} Section heading", page, section),
                page,
                y,
                16.0,
            ));
            y += 30.0;
            for sub in 1..=2 {
                builder = builder.block(title(
                    &format!("{}.{}.{} Detail heading", page, section, sub),
                    page,
                    y,
                    13.0,
                ));
                y += 25.0;
                for line in 0..3 {
                    builder = builder.block(body(
                        &format!("Body text line {} of page {}.", line, page),
                        page,
                        y,
                    ));
                    y += 14.0;
                }
            }
        }
    }
    builder.build()
}

fn heading(text: &str, level: u8, page: u32, y: f32) -> Heading {
    Heading::new(text, level, page, 0.8, FontInfo::new("Arial-Bold", 14.0), (72.0, y))
}

#[test]
fn test_scenario_three_largest_sizes() {
    let blocks: Vec<TextBlock> = [("A", 18.0), ("B", 14.0), ("C", 12.0), ("D", 10.0)]
        .iter()
        .enumerate()
        .map(|(i, (text, size))| title(text, 1, 50.0 * i as f32, *size))
        .collect();
    let candidates: Vec<ScoredCandidate<'_>> = blocks
        .iter()
        .map(|block| ScoredCandidate {
            block,
            score: 0.6,
            breakdown: ScoreBreakdown::default(),
        })
        .collect();

    let headings = classify_levels(&candidates);
    let levels: Vec<(&str, u8)> = headings.iter().map(|h| (h.text.as_str(), h.level)).collect();
    assert_eq!(levels, vec![("A", 1), ("B", 2), ("C", 3)]);
}

#[test]
fn test_scenario_level_repair() {
    let out = repair_levels(vec![
        heading("Deep", 3, 1, 10.0),
        heading("Top", 1, 1, 20.0),
        heading("Middle", 2, 1, 30.0),
    ]);

    let levels: Vec<u8> = out.iter().map(|h| h.level).collect();
    assert_eq!(levels, vec![1, 1, 2]);
    assert!((out[0].confidence - 0.8 * 0.9).abs() < 1e-6);
    assert!((out[1].confidence - 0.8).abs() < 1e-6);
    assert!((out[2].confidence - 0.8).abs() < 1e-6);
}

#[test]
fn test_scenario_duplicate_text() {
    let out = validate_hierarchy(vec![
        heading("introduction ", 1, 4, 10.0),
        heading("Introduction", 1, 1, 10.0),
    ]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].text, "Introduction");
    assert_eq!(out[0].page, 1);
}

#[test]
fn test_scenario_empty_document() {
    let doc = Document::builder("empty.pdf").build();
    let outline = extract_outline(&doc, &Settings::default());

    assert_eq!(outline.total_headings(), 0);
    assert_eq!(outline.quality_score(), 0.0);
    assert_eq!(outline.validate_structure(), vec!["Outline is empty"]);
    assert_eq!(outline.page_range(), (0, 0));
}

#[test]
fn test_scenario_numbered_chapter_score() {
    // Heading at 12pt over a 10pt average: ratio 1.2
    let doc = Document::builder("chapters.pdf")
        .page(600.0, 800.0)
        .block(
            TextBlock::new("Chapter 3", 1, 30.0, 100.0, FontInfo::new("Times", 12.0))
                .with_extent(100.0, 12.0),
        )
        .block(body("First body line.", 1, 200.0))
        .block(
            TextBlock::new("Second body line.", 1, 72.0, 220.0, FontInfo::new("Times", 8.0))
                .with_extent(450.0, 10.0),
        )
        .build();
    assert!((doc.avg_font_size() - 10.0).abs() < 1e-6);

    let settings = Settings::default();
    let scorer = CandidateScorer::for_document(&settings, &doc);
    let breakdown = scorer.score_block(&doc.text_blocks()[0], &doc);

    assert_eq!(breakdown.size, 0.6);
    assert_eq!(breakdown.style, 0.0);
    assert_eq!(breakdown.position, 0.5);
    assert_eq!(breakdown.numbering, 0.9);
    assert!(!breakdown.keyword);

    let expected = 0.6 * 0.5 + 0.0 * 0.3 + 0.5 * 0.1 + 0.9 * 0.1;
    assert!((breakdown.total - expected).abs() < 1e-6);
}

#[test]
fn test_pipeline_properties() {
    let doc = synthetic_report(6);
    let outline = extract_outline(&doc, &Settings::default());
    let headings = outline.headings();

    assert!(!headings.is_empty());
    assert_eq!(headings[0].level, 1);
    for pair in headings.windows(2) {
        assert!(pair[1].level <= pair[0].level + 1);
    }
    for h in headings {
        assert!((0.0..=1.0).contains(&h.confidence));
        assert!((1..=3).contains(&h.level));
    }

    // Every heading is reachable from exactly one root
    let reachable: usize = outline
        .roots()
        .iter()
        .map(|&root| 1 + outline.descendants(root).len())
        .sum();
    assert_eq!(reachable, outline.total_headings());

    let quality = outline.quality_score();
    assert!(quality > 0.0 && quality <= 1.0);
}

#[test]
fn test_synthetic_report_structure() {
    let outline = extract_outline(&synthetic_report(3), &Settings::default());

    assert_eq!(outline.h1_count(), 3);
    assert_eq!(outline.h2_count(), 6);
    assert_eq!(outline.h3_count(), 12);
    assert_eq!(outline.roots().len(), 3);
    assert_eq!(outline.page_range(), (1, 3));
    assert!(outline.validate_structure().is_empty());

    let deepest = outline
        .headings()
        .iter()
        .position(|h| h.text == "2.2.1 Detail heading")
        .map(pdfoutline::HeadingId)
        .unwrap();
    assert_eq!(
        outline.path_text(deepest, " > "),
        "2. Chapter heading 2 > 2.2 Section heading > 2.2.1 Detail heading"
    );
}

#[test]
fn test_repair_is_idempotent_on_outline() {
    let outline = extract_outline(&synthetic_report(4), &Settings::default());
    let again = OutlineBuilder::new().build(outline.headings().to_vec());

    let strip = |hs: &[Heading]| -> Vec<(String, u8, u32, f32)> {
        hs.iter()
            .map(|h| (h.text.clone(), h.level, h.page, h.confidence))
            .collect()
    };
    assert_eq!(strip(outline.headings()), strip(again.headings()));
    assert_eq!(outline.quality_score(), again.quality_score());
}

#[test]
fn test_headers_and_footers_skipped_when_enabled() {
    let doc = Document::builder("running.pdf")
        .page(612.0, 792.0)
        .block(title("Page 1", 1, 770.0, 18.0))
        .block(title("Overview", 1, 80.0, 18.0))
        .block(body("Body text.", 1, 200.0))
        .block(body("More body text.", 1, 220.0))
        .build();

    let with_footer = extract_outline(&doc, &Settings::default());
    assert_eq!(with_footer.total_headings(), 2);

    let settings = Settings::default().with_skip_headers_footers(true);
    let without_footer = extract_outline(&doc, &settings);
    let texts: Vec<&str> = without_footer
        .headings()
        .iter()
        .map(|h| h.text.as_str())
        .collect();
    assert_eq!(texts, vec!["Overview"]);
}

#[test]
fn test_japanese_profile_pipeline() {
    let doc = Document::builder("jp.pdf")
        .language(Language::Japanese)
        .page(595.0, 842.0)
        .block(TextBlock::new("第一章 概要", 1, 60.0, 80.0, FontInfo::new("MS-Gothic", 18.0)))
        .block(TextBlock::new("本文の段落です。", 1, 60.0, 200.0, FontInfo::new("MS-Mincho", 10.0)))
        .block(TextBlock::new("本文の続きです。", 1, 60.0, 220.0, FontInfo::new("MS-Mincho", 10.0)))
        .build();

    let outline = extract_outline(&doc, &Settings::default());
    assert_eq!(outline.total_headings(), 1);
    let h = &outline.headings()[0];
    assert_eq!(h.text, "第一章 概要");
    assert!(h.is_h1());
}
