//! # Transcript Oxide
//!
//! Reconstructs human-readable paragraphs from positioned text fragments
//! extracted from transcript-style documents (court reporter transcripts,
//! depositions), where text is laid out in fixed columns: a line-number
//! gutter, speaker labels, question/answer markers, and body text.
//!
//! No fixed schema is guaranteed, so the column layout is inferred per
//! document by statistical frequency analysis, and lines are folded into
//! paragraph records with speaker and question/answer attribution.
//!
//! ## Pipeline
//!
//! ```text
//! TextFragment[]  →  Line[]        →  ColumnPositions  →  Paragraph[]
//!   (per page)     assemble+filter    infer_columns       reconstruct
//! ```
//!
//! Extraction of the fragments themselves (and their bounding boxes) from a
//! page-description format is an external collaborator's job; this crate
//! starts at the fragment level.
//!
//! ## Quick start
//!
//! ```
//! use transcript_oxide::converters::{render_transcript, RenderOptions};
//! use transcript_oxide::geometry::BoundingBox;
//! use transcript_oxide::layout::{Page, TextFragment};
//! use transcript_oxide::MinerConfig;
//!
//! # fn main() -> transcript_oxide::Result<()> {
//! let page = Page {
//!     number: 1,
//!     width: 612.0,
//!     height: 792.0,
//!     fragments: vec![
//!         TextFragment::new(1, BoundingBox::new(108.0, 700.0, 115.0, 712.0), "1"),
//!         TextFragment::new(1, BoundingBox::new(171.0, 700.0, 430.0, 712.0), "Q.   Were you there?"),
//!         TextFragment::new(1, BoundingBox::new(108.0, 682.0, 115.0, 694.0), "2"),
//!         TextFragment::new(1, BoundingBox::new(135.0, 682.0, 430.0, 694.0), "on the night in question?"),
//!     ],
//! };
//!
//! let transcript = transcript_oxide::extract_paragraphs(&[page], &MinerConfig::default())?;
//! let text = render_transcript(&transcript, &RenderOptions::default());
//! assert!(text.contains("Were you there? on the night in question?"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Compiled line patterns
pub mod patterns;

// Layout analysis
pub mod geometry;
pub mod layout;

// Paragraph reconstruction
pub mod paragraphs;

// Output rendering
pub mod converters;

pub use config::MinerConfig;
pub use error::{Error, Result};
pub use paragraphs::Transcript;

use layout::Page;

/// Run the whole reconstruction pipeline over a document's pages.
///
/// Processing is single-threaded and fully sequential; all state is scoped
/// to this call, so independent documents may be processed concurrently by
/// an outer driver with no coordination.
///
/// # Errors
///
/// Fails when the column layout cannot be inferred — see
/// [`Error::ColumnInference`].
pub fn extract_paragraphs(pages: &[Page], config: &MinerConfig) -> Result<Transcript> {
    let lines = layout::extract_lines(pages, config);
    log::info!("extracted {} transcript lines", lines.len());
    paragraphs::reconstruct(&lines)
}
