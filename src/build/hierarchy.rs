//! Hierarchy validation and repair.
//!
//! The level grammar, applied left to right in reading order:
//!
//! - the first heading is H1;
//! - H1 is always accepted;
//! - H2 needs an earlier H1, otherwise it is promoted to H1;
//! - H3 needs an open H2 section, otherwise it becomes H2 when any H1 or H2
//!   came before, else H1.
//!
//! Repeated heading text is dropped, first occurrence wins.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::model::{clamp_level, Heading};
use crate::text::dedup_key;

/// Confidence multiplier applied to every heading whose level is changed.
pub const LEVEL_ADJUSTMENT_PENALTY: f32 = 0.9;

/// Sort headings by page, then by vertical position. Stable.
pub fn sort_reading_order(headings: &mut [Heading]) {
    headings.sort_by(|a, b| {
        a.page
            .cmp(&b.page)
            .then_with(|| a.y().partial_cmp(&b.y()).unwrap_or(Ordering::Equal))
    });
}

/// State threaded through the repair fold.
#[derive(Debug, Default)]
struct RepairState {
    /// Open levels, shallowest first
    level_stack: Vec<u8>,
    seen: HashSet<String>,
    emitted_h1: bool,
    emitted_h1_or_h2: bool,
    output: Vec<Heading>,
}

impl RepairState {
    fn is_first(&self) -> bool {
        self.output.is_empty()
    }

    /// Level the grammar allows for a heading classified at `target`.
    fn allowed_level(&self, target: u8) -> u8 {
        if self.is_first() {
            return 1;
        }
        match clamp_level(target) {
            1 => 1,
            2 if self.emitted_h1 => 2,
            2 => 1,
            _ if self.level_stack.contains(&2) => 3,
            _ if self.emitted_h1_or_h2 => 2,
            _ => 1,
        }
    }

    fn push_level(&mut self, level: u8) {
        self.level_stack.retain(|&open| open < level);
        self.level_stack.push(level);
        self.emitted_h1 |= level == 1;
        self.emitted_h1_or_h2 |= level <= 2;
    }

    fn step(mut self, heading: Heading) -> Self {
        if !self.seen.insert(dedup_key(&heading.text)) {
            log::debug!("Dropping duplicate heading on page {}: {}", heading.page, preview(&heading.text));
            return self;
        }

        let level = self.allowed_level(heading.level);
        let heading = if level != heading.level {
            log::debug!(
                "Adjusting heading level from {} to {}: {}",
                heading.level,
                level,
                preview(&heading.text)
            );
            heading.relevelled(level, LEVEL_ADJUSTMENT_PENALTY)
        } else {
            heading
        };

        self.push_level(level);
        self.output.push(heading);
        self
    }
}

fn preview(text: &str) -> String {
    text.chars().take(50).collect()
}

/// Repair the level sequence and drop duplicates.
///
/// Headings must already be in reading order. Duplicates are dropped before
/// they reach the grammar, so they never open a section. Running this on its
/// own output returns the output unchanged.
pub fn repair_levels(headings: Vec<Heading>) -> Vec<Heading> {
    headings
        .into_iter()
        .fold(RepairState::default(), RepairState::step)
        .output
}

/// Sort headings into reading order, then repair and deduplicate them.
pub fn validate_hierarchy(mut headings: Vec<Heading>) -> Vec<Heading> {
    sort_reading_order(&mut headings);
    repair_levels(headings)
}
