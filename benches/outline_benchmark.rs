//! Benchmarks for outline extraction performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks run the full pipeline over synthetic layout documents.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pdfoutline::{extract_batch, extract_outline, Document, FontInfo, Settings, TextBlock};

/// Creates a synthetic layout document with the given number of pages.
fn create_test_document(page_count: u32) -> Document {
    let mut builder = Document::builder(format!("bench_{}.pdf", page_count));

    for page in 1..=page_count {
        builder = builder.page(612.0, 792.0).block(TextBlock::new(
            format!("{}. Chapter {}", page, page),
            page,
            72.0,
            60.0,
            FontInfo::new("Helvetica-Bold", 20.0),
        ));

        let mut y = 100.0;
        for section in 1..=3 {
            builder = builder.block(TextBlock::new(
                format!("{}.{} Section", page, section),
                page,
                72.0,
                y,
                FontInfo::new("Helvetica-Bold", 15.0),
            ));
            y += 24.0;

            for line in 0..8 {
                builder = builder.block(
                    TextBlock::new(
                        format!("Body text line {} of section {}.{}, ending here.", line, page, section),
                        page,
                        72.0,
                        y,
                        FontInfo::new("Helvetica", 10.0),
                    )
                    .with_extent(468.0, 12.0),
                );
                y += 14.0;
            }
        }
    }

    builder.build()
}

fn bench_extract_outline(c: &mut Criterion) {
    let settings = Settings::default();
    let mut group = c.benchmark_group("extract_outline");

    for pages in [1u32, 10, 50, 200] {
        let doc = create_test_document(pages);
        group.bench_with_input(BenchmarkId::from_parameter(pages), &doc, |b, doc| {
            b.iter(|| extract_outline(black_box(doc), black_box(&settings)))
        });
    }

    group.finish();
}

fn bench_extract_batch(c: &mut Criterion) {
    let settings = Settings::default();
    let docs: Vec<Document> = (0..16).map(|_| create_test_document(20)).collect();

    c.bench_function("extract_batch_16x20", |b| {
        b.iter(|| extract_batch(black_box(&docs), black_box(&settings)))
    });
}

criterion_group!(benches, bench_extract_outline, bench_extract_batch);
criterion_main!(benches);
