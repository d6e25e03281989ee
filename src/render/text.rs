//! Plain text table of contents.

use crate::model::Outline;

use super::TocOptions;

/// Render an outline as indented table of contents lines.
///
/// Each level below H1 is indented by two spaces.
pub fn table_of_contents(outline: &Outline, options: &TocOptions) -> Vec<String> {
    outline
        .headings()
        .iter()
        .filter(|h| h.level <= options.max_level)
        .map(|h| {
            let indent = "  ".repeat(usize::from(h.level.saturating_sub(1)));
            if options.include_page_numbers {
                format!("{}{} ... {}", indent, h.text, h.page)
            } else {
                format!("{}{}", indent, h.text)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FontInfo, Heading};

    fn outline() -> Outline {
        let font = FontInfo::new("Arial-Bold", 16.0);
        Outline::new(vec![
            Heading::new("Introduction", 1, 1, 0.9, font.clone(), (72.0, 80.0)),
            Heading::new("Scope", 2, 1, 0.8, font.clone(), (72.0, 200.0)),
            Heading::new("Terms", 3, 2, 0.7, font, (72.0, 80.0)),
        ])
    }

    #[test]
    fn test_table_of_contents() {
        let toc = table_of_contents(&outline(), &TocOptions::default());
        assert_eq!(
            toc,
            vec!["Introduction ... 1", "  Scope ... 1", "    Terms ... 2"]
        );
    }

    #[test]
    fn test_max_level_and_no_pages() {
        let options = TocOptions::new().with_max_level(2).with_page_numbers(false);
        let toc = table_of_contents(&outline(), &options);
        assert_eq!(toc, vec!["Introduction", "  Scope"]);
    }

    #[test]
    fn test_empty_outline() {
        assert!(table_of_contents(&Outline::empty(), &TocOptions::default()).is_empty());
    }
}
