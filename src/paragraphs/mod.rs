//! Paragraph reconstruction: classified lines folded into paragraph records
//! with speaker and question/answer attribution.

pub mod builder;
pub mod paragraph;
pub mod speaker;

// Re-export main types
pub use builder::{reconstruct, ParagraphBuilder, Transcript};
pub use paragraph::Paragraph;
pub use speaker::{Speaker, SpeakerRegistry};
