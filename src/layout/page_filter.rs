//! Margin and gutter filtering.
//!
//! Two filters bracket line assembly. Before clustering, fragments outside
//! the configured page margins are discarded — headers, footers, and binding
//! artifacts. After assembly, lines that start in the right half of the page
//! are discarded: transcript software prints a duplicate line-number gutter
//! along the right margin, and those numbers are not content.
//!
//! Both filters are idempotent and order-preserving.

use crate::config::MinerConfig;
use crate::layout::fragment::{Line, Page, TextFragment};

/// Keep only fragments inside the configured margins.
///
/// The left margin always applies: a fragment survives only when its left
/// edge is strictly greater than `left_margin`. The right, top, and bottom
/// margins apply only when non-zero, measured in from the respective page
/// edge.
pub fn filter_fragments(page: &Page, config: &MinerConfig) -> Vec<TextFragment> {
    page.fragments
        .iter()
        .filter(|f| f.bbox.left > config.left_margin)
        .filter(|f| config.bottom_margin == 0.0 || f.bbox.bottom > config.bottom_margin)
        .filter(|f| config.top_margin == 0.0 || f.bbox.top < page.height - config.top_margin)
        .filter(|f| config.right_margin == 0.0 || f.bbox.right < page.width - config.right_margin)
        .cloned()
        .collect()
}

/// Drop lines that start in the right half of the page.
pub fn filter_lines(lines: Vec<Line>, page_width: f32) -> Vec<Line> {
    let half = page_width / 2.0;
    lines.into_iter().filter(|l| l.start <= half).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoundingBox;

    fn mock_page(fragments: Vec<TextFragment>) -> Page {
        Page {
            number: 1,
            width: 612.0,
            height: 792.0,
            fragments,
        }
    }

    fn mock_fragment(left: f32, bottom: f32, text: &str) -> TextFragment {
        TextFragment::new(1, BoundingBox::new(left, bottom, left + 100.0, bottom + 12.0), text)
    }

    #[test]
    fn test_left_margin_is_strict() {
        let page = mock_page(vec![
            mock_fragment(20.0, 400.0, "at the margin"),
            mock_fragment(21.0, 400.0, "inside"),
        ]);
        let config = MinerConfig::new().with_left_margin(20.0).with_bottom_margin(0.0);
        let kept = filter_fragments(&page, &config);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].text, "inside");
    }

    #[test]
    fn test_bottom_margin_drops_footer() {
        let page = mock_page(vec![
            mock_fragment(100.0, 30.0, "Veritext Legal Solutions"),
            mock_fragment(100.0, 400.0, "body text"),
        ]);
        let kept = filter_fragments(&page, &MinerConfig::default());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].text, "body text");
    }

    #[test]
    fn test_zero_margins_keep_everything_above_origin() {
        let page = mock_page(vec![
            mock_fragment(100.0, 30.0, "footer"),
            mock_fragment(100.0, 780.0, "header"),
        ]);
        let config = MinerConfig::new().with_bottom_margin(0.0);
        assert_eq!(filter_fragments(&page, &config).len(), 2);
    }

    #[test]
    fn test_top_and_right_margins() {
        let page = mock_page(vec![
            mock_fragment(100.0, 781.0, "header"),
            mock_fragment(540.0, 400.0, "margin note"),
            mock_fragment(100.0, 400.0, "body text"),
        ]);
        let config = MinerConfig::new()
            .with_bottom_margin(0.0)
            .with_top_margin(10.0)
            .with_right_margin(20.0);
        let kept = filter_fragments(&page, &config);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].text, "body text");
    }

    #[test]
    fn test_right_gutter_lines_dropped() {
        let lines = vec![
            Line::new(1, 1, 135.0, "body text"),
            Line::new(1, 0, 580.0, "1"),
        ];
        let kept = filter_lines(lines, 612.0);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].text, "body text");
    }

    #[test]
    fn test_line_filter_is_idempotent() {
        let lines = vec![
            Line::new(1, 1, 135.0, "body text"),
            Line::new(1, 0, 580.0, "1"),
        ];
        let once = filter_lines(lines, 612.0);
        let twice = filter_lines(once.clone(), 612.0);
        assert_eq!(once, twice);
    }
}
