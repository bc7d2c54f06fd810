//! Positioned text input and reconstructed lines.
//!
//! This module defines the records that cross the layout pipeline: the
//! fragments an external layout extractor discovers on each page, the page
//! wrapper carrying the geometry the filters need, and the logical line the
//! assembler produces.

use crate::geometry::BoundingBox;
use serde::{Deserialize, Serialize};

/// A positioned run of text as discovered in page geometry, prior to line and
/// paragraph reconstruction.
///
/// Fragment text may contain embedded newlines: when a redaction marker is
/// typeset inside a line, extractors report the line as one fragment with
/// line breaks around the marker. The assembler normalizes these away.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextFragment {
    /// 1-based page number the fragment was found on.
    pub page: u32,
    /// Bounding box in document coordinate space.
    pub bbox: BoundingBox,
    /// Raw fragment text.
    pub text: String,
}

impl TextFragment {
    /// Create a new fragment.
    pub fn new(page: u32, bbox: BoundingBox, text: impl Into<String>) -> Self {
        Self {
            page,
            bbox,
            text: text.into(),
        }
    }
}

/// One page of extractor output: the page geometry plus the fragments
/// discovered on it, in discovery order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page number.
    pub number: u32,
    /// Page width in document units.
    pub width: f32,
    /// Page height in document units.
    pub height: f32,
    /// Fragments discovered on this page.
    pub fragments: Vec<TextFragment>,
}

/// One reconstructed row of transcript text.
///
/// Immutable once created. `number` is the explicit line number printed in
/// the left gutter, or 0 when the gutter fragment could not be parsed.
/// `start` is the left edge used for column classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// 1-based page number.
    pub page: u32,
    /// Explicit line number, 0 if undetermined.
    pub number: u32,
    /// Horizontal start position of the line's content.
    pub start: f32,
    /// Assembled text: fragment texts concatenated, newline-free, trimmed.
    pub text: String,
}

impl Line {
    /// Create a new line. The text is trimmed on construction.
    pub fn new(page: u32, number: u32, start: f32, text: impl Into<String>) -> Self {
        Self {
            page,
            number,
            start,
            text: text.into().trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_trims_text() {
        let line = Line::new(3, 14, 135.0, "  some testimony \n");
        assert_eq!(line.text, "some testimony");
        assert_eq!(line.page, 3);
        assert_eq!(line.number, 14);
    }

    #[test]
    fn test_fragment_round_trips_through_json() {
        let fragment = TextFragment::new(
            1,
            BoundingBox::new(135.0, 700.0, 480.0, 712.0),
            "Q.   Is that correct?",
        );
        let json = serde_json::to_string(&fragment).unwrap();
        let back: TextFragment = serde_json::from_str(&json).unwrap();
        assert_eq!(back.page, 1);
        assert_eq!(back.bbox, fragment.bbox);
        assert_eq!(back.text, fragment.text);
    }
}
