//! Column inference by frequency-mode detection.
//!
//! Transcript layouts put each semantic category of line at a characteristic
//! horizontal position: the line-number gutter, body/continuation text,
//! question-and-answer lead-ins, and speaker labels. No fixed schema is
//! guaranteed, so the positions are inferred statistically: every line is
//! bucketed by the pattern its text matches, and each bucket's position is
//! the mode of the start positions observed in it.

use crate::error::{Error, Result};
use crate::layout::fragment::Line;
use crate::patterns::{QUESTION_ANSWER_RE, SPEAKER_RE, STRAY_LINE_NUMBER_RE};

/// Offset below the continuation column assumed for the line-number gutter
/// when no stray gutter numbers were observed.
const LINE_NUMBER_FALLBACK_OFFSET: f32 = 4.0;

/// Positional jitter absorbed by the integer continuation threshold.
const CONTINUATION_JITTER: f32 = 1.5;

/// Semantic category of a single line, judged from its text alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Begins with a `Q` or `A` lead-in.
    QuestionAnswer,
    /// Begins with an uppercase speaker label ending in a colon.
    Speaker,
    /// The entire line is a stray one- or two-digit gutter number.
    StrayLineNumber,
    /// Anything else: body text continuing the current paragraph.
    Continuation,
}

/// Classify a line's text into exactly one category.
///
/// The categories are tested most-specific first; `Continuation` is the
/// catch-all.
pub fn classify_line(text: &str) -> LineClass {
    if QUESTION_ANSWER_RE.is_match(text) {
        LineClass::QuestionAnswer
    } else if SPEAKER_RE.is_match(text) {
        LineClass::Speaker
    } else if STRAY_LINE_NUMBER_RE.is_match(text) {
        LineClass::StrayLineNumber
    } else {
        LineClass::Continuation
    }
}

/// Occurrence counts keyed by exact start position.
///
/// An association list rather than a hash map: start positions repeat
/// exactly (they come from a typesetting grid), the distinct count per
/// bucket is tiny, and insertion order is what makes the mode tie-break
/// deterministic.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    entries: Vec<(f32, usize)>,
}

impl FrequencyTable {
    /// Count one occurrence of `position`.
    pub fn record(&mut self, position: f32) {
        if let Some(entry) = self.entries.iter_mut().find(|(p, _)| *p == position) {
            entry.1 += 1;
        } else {
            self.entries.push((position, 1));
        }
    }

    /// The most frequent position, or `None` for an empty table.
    ///
    /// Ties resolve to the position that was first recorded.
    pub fn mode(&self) -> Option<f32> {
        let mut best: Option<(f32, usize)> = None;
        for &(position, count) in &self.entries {
            match best {
                Some((_, best_count)) if count <= best_count => {},
                _ => best = Some((position, count)),
            }
        }
        best.map(|(position, _)| position)
    }

    /// Number of distinct positions recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The four inferred column positions of a document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnPositions {
    /// Start position of the line-number gutter.
    pub line_number_pos: f32,
    /// Start position of continuation/body lines.
    pub continuation_pos: f32,
    /// Start position of question/answer lead-ins, if any were seen.
    pub question_pos: Option<f32>,
    /// Start position of speaker labels, if any were seen.
    pub speaker_pos: Option<f32>,
}

impl ColumnPositions {
    /// The integer cutoff separating continuation lines from new-paragraph
    /// lines.
    ///
    /// Comparing raw floats for column membership would demand exact
    /// equality; adding 1.5 and flooring yields a cutoff that absorbs small
    /// positional jitter. Lines starting at or left of the threshold continue
    /// the current paragraph; lines starting right of it open a new one.
    pub fn continuation_threshold(&self) -> f32 {
        (self.continuation_pos + CONTINUATION_JITTER).floor()
    }
}

/// Infer the document's column positions from its full line sequence.
///
/// Fails with [`Error::ColumnInference`] when no line falls into the
/// continuation bucket — without a continuation column there is no threshold
/// and the document cannot be reconstructed.
pub fn infer_columns(lines: &[Line]) -> Result<ColumnPositions> {
    let mut question_table = FrequencyTable::default();
    let mut speaker_table = FrequencyTable::default();
    let mut gutter_table = FrequencyTable::default();
    let mut continuation_table = FrequencyTable::default();

    for line in lines {
        let table = match classify_line(&line.text) {
            LineClass::QuestionAnswer => &mut question_table,
            LineClass::Speaker => &mut speaker_table,
            LineClass::StrayLineNumber => &mut gutter_table,
            LineClass::Continuation => &mut continuation_table,
        };
        table.record(line.start);
    }

    let question_pos = question_table.mode();
    let speaker_pos = speaker_table.mode();
    let continuation_pos = continuation_table.mode().ok_or(Error::ColumnInference)?;
    let line_number_pos = match gutter_table.mode() {
        Some(position) => position,
        None => {
            log::warn!(
                "no stray gutter numbers detected; assuming line-number column {} left of continuation",
                LINE_NUMBER_FALLBACK_OFFSET
            );
            continuation_pos - LINE_NUMBER_FALLBACK_OFFSET
        },
    };

    log::info!(
        "columns inferred: line numbers {line_number_pos}, continuation {continuation_pos}, \
         question/answer {question_pos:?}, speakers {speaker_pos:?}"
    );

    Ok(ColumnPositions {
        line_number_pos,
        continuation_pos,
        question_pos,
        speaker_pos,
    })
}
