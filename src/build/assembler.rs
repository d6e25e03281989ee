//! Outline tree assembly.

use crate::model::{Heading, HeadingId, Hierarchy, HierarchyEntry, Outline};

use super::QualityMetrics;

/// Assemble validated, ordered headings into an [`Outline`].
///
/// Any existing tree links on the input are discarded and rebuilt.
pub fn assemble(mut headings: Vec<Heading>) -> Outline {
    let roots = link_tree(&mut headings);
    let hierarchy = build_hierarchy(&headings, &roots);
    let metrics = QualityMetrics::compute(&headings);
    Outline::from_parts(headings, roots, hierarchy, metrics)
}

/// Set parent and child links with an ancestor stack; returns the roots.
fn link_tree(headings: &mut [Heading]) -> Vec<HeadingId> {
    for heading in headings.iter_mut() {
        heading.parent = None;
        heading.children.clear();
    }

    let mut roots = Vec::new();
    let mut stack: Vec<HeadingId> = Vec::new();

    for index in 0..headings.len() {
        let id = HeadingId(index);
        let level = headings[index].level;

        while let Some(&top) = stack.last() {
            if headings[top.index()].level >= level {
                stack.pop();
            } else {
                break;
            }
        }

        match stack.last() {
            Some(&parent) => {
                headings[index].parent = Some(parent);
                headings[parent.index()].children.push(id);
            }
            None => roots.push(id),
        }
        stack.push(id);
    }

    roots
}

fn build_hierarchy(headings: &[Heading], ids: &[HeadingId]) -> Hierarchy {
    let mut map = Hierarchy::new();
    for &id in ids {
        let heading = &headings[id.index()];
        let key = format!("{}_{}", heading.level, map.len());
        map.insert(
            key,
            HierarchyEntry {
                text: heading.text.clone(),
                page: heading.page,
                confidence: heading.confidence,
                children: build_hierarchy(headings, &heading.children),
            },
        );
    }
    map
}
