//! Output rendering for reconstructed transcripts.
//!
//! Rendering is read-only over the reconstruction output: a paragraph plus
//! options in, a display string out. The whole-transcript renderer adds the
//! page markers the paragraph records themselves do not carry.

pub mod plain_text;

// Re-export main types
pub use plain_text::{render_paragraph, render_transcript};

/// Rendering toggles.
///
/// Defaults mirror the read-aloud use case: page markers on, everything that
/// interrupts listening off.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Prefix each paragraph with its bracketed page/line locator.
    pub include_line_numbers: bool,
    /// Prefix question paragraphs with `[Q]` and answer paragraphs with `[A]`.
    pub include_question_answer_tag: bool,
    /// Emit a `[**PAGE: n**]` marker line whenever a paragraph starts on a
    /// new page.
    pub include_page_markers: bool,
    /// Append the transcript date to page markers, when one was detected.
    pub include_date_with_page_markers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_line_numbers: false,
            include_question_answer_tag: false,
            include_page_markers: true,
            include_date_with_page_markers: false,
        }
    }
}

impl RenderOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the bracketed page/line locator.
    pub fn with_line_numbers(mut self, enable: bool) -> Self {
        self.include_line_numbers = enable;
        self
    }

    /// Toggle `[Q]`/`[A]` tags.
    pub fn with_question_answer_tag(mut self, enable: bool) -> Self {
        self.include_question_answer_tag = enable;
        self
    }

    /// Toggle page marker lines.
    pub fn with_page_markers(mut self, enable: bool) -> Self {
        self.include_page_markers = enable;
        self
    }

    /// Toggle the date on page marker lines.
    pub fn with_date_on_page_markers(mut self, enable: bool) -> Self {
        self.include_date_with_page_markers = enable;
        self
    }
}
