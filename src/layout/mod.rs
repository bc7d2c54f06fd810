//! Layout analysis: from positioned fragments to classified lines.
//!
//! The pipeline runs one synchronous pass per page:
//! fragments → margin filter → vertical clustering → gutter-line filter,
//! producing the document's ordered [`Line`] sequence. Column positions are
//! then inferred once over the whole sequence.

pub mod assembler;
pub mod columns;
pub mod fragment;
pub mod page_filter;

// Re-export main types
pub use assembler::assemble_lines;
pub use columns::{classify_line, infer_columns, ColumnPositions, FrequencyTable, LineClass};
pub use fragment::{Line, Page, TextFragment};
pub use page_filter::{filter_fragments, filter_lines};

use crate::config::MinerConfig;
use std::cmp::Ordering;

/// Extract the ordered line sequence of a whole document.
///
/// Pages are processed independently and their lines concatenated in page
/// order.
pub fn extract_lines(pages: &[Page], config: &MinerConfig) -> Vec<Line> {
    let mut lines = Vec::new();

    for page in pages {
        let mut fragments = filter_fragments(page, config);
        sort_fragments(&mut fragments);
        let assembled = assemble_lines(&fragments, config.fudge_factor);
        let filtered = filter_lines(assembled, page.width);
        log::debug!("page {}: {} lines after filtering", page.number, filtered.len());
        lines.extend(filtered);
    }

    lines
}

/// Sort fragments into reading order: by page, then top edge descending
/// (document coordinates grow upward), then left edge ascending.
pub fn sort_fragments(fragments: &mut [TextFragment]) {
    fragments.sort_by(|a, b| {
        a.page
            .cmp(&b.page)
            .then(b.bbox.top.partial_cmp(&a.bbox.top).unwrap_or(Ordering::Equal))
            .then(a.bbox.left.partial_cmp(&b.bbox.left).unwrap_or(Ordering::Equal))
    });
}
