//! Vertical clustering of page fragments into logical lines.
//!
//! Transcript pages carry a printed line-number gutter, so a logical line is
//! usually two or more fragments: the gutter number plus one or more body
//! runs at the same height. Fragments are clustered by the vertical distance
//! between their top edges, then each cluster is flattened into a [`Line`]
//! with the gutter number split off.

use crate::layout::fragment::{Line, TextFragment};
use std::cmp::Ordering;

/// Cluster one page's fragments into lines.
///
/// `fragments` must already be sorted by descending top edge then ascending
/// left edge (document coordinates put the top of the page at large y). Two
/// consecutive fragments whose top edges differ by less than `fudge_factor`
/// belong to the same line.
///
/// # Examples
///
/// ```
/// use transcript_oxide::geometry::BoundingBox;
/// use transcript_oxide::layout::{assemble_lines, TextFragment};
///
/// let fragments = vec![
///     TextFragment::new(1, BoundingBox::new(108.0, 700.0, 115.0, 712.0), "1"),
///     TextFragment::new(1, BoundingBox::new(171.0, 700.0, 430.0, 712.0), "Q.   Were you there?"),
/// ];
/// let lines = assemble_lines(&fragments, 10.0);
/// assert_eq!(lines.len(), 1);
/// assert_eq!(lines[0].number, 1);
/// assert_eq!(lines[0].start, 171.0);
/// assert_eq!(lines[0].text, "Q.   Were you there?");
/// ```
pub fn assemble_lines(fragments: &[TextFragment], fudge_factor: f32) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut cluster: Vec<&TextFragment> = Vec::new();
    let mut last_top = 0.0f32;

    for fragment in fragments {
        if cluster.is_empty() {
            last_top = fragment.bbox.top;
            cluster.push(fragment);
            continue;
        }

        if last_top - fragment.bbox.top < fudge_factor {
            cluster.push(fragment);
        } else {
            lines.push(close_cluster(std::mem::take(&mut cluster)));
            last_top = fragment.bbox.top;
            cluster.push(fragment);
        }
    }

    // Flush the trailing cluster so the last line of the page survives.
    if !cluster.is_empty() {
        lines.push(close_cluster(cluster));
    }

    lines
}

/// Flatten a cluster of vertically co-located fragments into a [`Line`].
///
/// The leftmost fragment is expected to be the printed gutter line number.
/// When it parses as an integer the line starts at the second fragment and
/// concatenates text from there; a cluster with no second fragment keeps the
/// parsed number but degrades to the only fragment it has, and a non-numeric
/// leading fragment means no explicit number was printed at all.
fn close_cluster(mut cluster: Vec<&TextFragment>) -> Line {
    cluster.sort_by(|a, b| {
        a.bbox
            .left
            .partial_cmp(&b.bbox.left)
            .unwrap_or(Ordering::Equal)
    });

    let first = cluster[0];
    let page = first.page;

    let (number, start, body) = match first.text.trim().parse::<u32>() {
        Ok(number) if cluster.len() >= 2 => (number, cluster[1].bbox.left, &cluster[1..]),
        Ok(number) => (number, first.bbox.left, &cluster[..]),
        Err(_) => (0, first.bbox.left, &cluster[..]),
    };

    let mut text = String::new();
    for fragment in body {
        // Redactions inject mid-fragment line breaks; a line must never keep
        // a literal newline.
        text.push_str(&fragment.text.replace('\n', " "));
    }

    log::trace!("assembled line pg.{page} ln.{number} start {start}: {text:?}");

    Line::new(page, number, start, text)
}
