//! Font-size based level classification.

use std::collections::BTreeMap;

use super::scorer::ScoredCandidate;
use crate::model::{Heading, MAX_LEVEL};
use crate::text::extract_numbering;

/// Grouping key for a font size rounded to 0.1pt.
fn size_key(size: f32) -> i64 {
    (size * 10.0).round() as i64
}

/// Assign levels by font size and emit headings.
///
/// The largest distinct size becomes H1, the next H2, the next H3. Candidates
/// in any smaller size group are dropped. Within a group, candidates keep
/// their incoming order.
pub fn classify_levels(candidates: &[ScoredCandidate<'_>]) -> Vec<Heading> {
    let mut groups: BTreeMap<i64, Vec<&ScoredCandidate<'_>>> = BTreeMap::new();
    for candidate in candidates {
        groups
            .entry(size_key(candidate.block.font_info.size))
            .or_default()
            .push(candidate);
    }

    if groups.len() > MAX_LEVEL as usize {
        let dropped: usize = groups
            .values()
            .rev()
            .skip(MAX_LEVEL as usize)
            .map(Vec::len)
            .sum();
        log::debug!(
            "{} font size groups found, dropping {} candidates below the third largest",
            groups.len(),
            dropped
        );
    }

    groups
        .values()
        .rev()
        .take(MAX_LEVEL as usize)
        .zip(1u8..)
        .flat_map(|(group, level)| {
            group.iter().map(move |candidate| {
                let block = candidate.block;
                let numbering = extract_numbering(&block.text).map(|(token, _)| token);
                Heading::new(
                    &block.text,
                    level,
                    block.page,
                    candidate.score,
                    block.font_info.clone(),
                    (block.x, block.y),
                )
                .with_numbering(numbering)
            })
        })
        .collect()
}
