//! The paragraph state machine.
//!
//! [`ParagraphBuilder`] folds the document's line sequence into paragraph
//! records, attributing speakers and question/answer lead-ins as it goes.
//! All per-document walk state lives on the builder — current paragraph,
//! current speaker, current page — so a run is a plain fold with no ambient
//! mutability.

use crate::error::Result;
use crate::layout::{infer_columns, ColumnPositions, Line};
use crate::paragraphs::paragraph::Paragraph;
use crate::paragraphs::speaker::SpeakerRegistry;
use crate::patterns::{DATE_LINE_RE, QUESTIONER_RE, QUESTION_ANSWER_RE, SPEAKER_RE};
use chrono::NaiveDate;

/// Heads the appearances page; looks like a speaker label but is not one.
const APPEARANCES_LABEL: &str = "APPEARANCES:";

/// Format of the full transcript date line.
const DATE_FORMAT: &str = "%A, %B %d, %Y";

/// The reconstructed document: the paragraph sequence plus the reporting
/// artifacts gathered along the way.
#[derive(Debug)]
pub struct Transcript {
    /// Paragraphs in document order.
    ///
    /// The first entry is always the empty placeholder the state machine
    /// closes when it sees the first new-paragraph line; it is kept for
    /// behavioral parity with the reference heuristic.
    pub paragraphs: Vec<Paragraph>,
    /// Every speaker label seen, with the pages it was seen on.
    pub speakers: SpeakerRegistry,
    /// Transcript date detected on page 1, if any.
    pub date: Option<NaiveDate>,
}

/// Reconstruct a document's paragraphs from its full line sequence.
///
/// Infers the column layout once, then folds every line through a
/// [`ParagraphBuilder`].
///
/// # Errors
///
/// Fails when the column layout cannot be inferred (no continuation-column
/// lines at all).
pub fn reconstruct(lines: &[Line]) -> Result<Transcript> {
    let columns = infer_columns(lines)?;
    let mut builder = ParagraphBuilder::new(columns);
    for line in lines {
        builder.push_line(line);
    }
    Ok(builder.finish())
}

/// State machine that folds classified lines into paragraphs.
#[derive(Debug)]
pub struct ParagraphBuilder {
    columns: ColumnPositions,
    threshold: f32,
    paragraphs: Vec<Paragraph>,
    current: Paragraph,
    speakers: SpeakerRegistry,
    current_speaker: Option<String>,
    current_questioner: Option<String>,
    current_page: u32,
    date: Option<NaiveDate>,
}

impl ParagraphBuilder {
    /// Create a builder for a document with the given column layout.
    pub fn new(columns: ColumnPositions) -> Self {
        Self {
            threshold: columns.continuation_threshold(),
            columns,
            paragraphs: Vec::new(),
            current: Paragraph::default(),
            speakers: SpeakerRegistry::new(),
            current_speaker: None,
            current_questioner: None,
            current_page: 0,
            date: None,
        }
    }

    /// Fold one line into the state machine.
    pub fn push_line(&mut self, line: &Line) {
        // Page tracking lags one line, so this window opens on the second
        // line of page 1 and closes one line into page 2.
        if self.current_page == 1 && self.date.is_none() {
            self.detect_date(&line.text);
        }

        if line.start <= self.threshold {
            if line.start <= self.columns.line_number_pos {
                // A stray gutter number that survived filtering. Not content.
                log::debug!("skipping stray gutter line on page {}: {:?}", line.page, line.text);
            } else {
                self.current.extend_with(&line.text, line.page, line.number);
            }
        } else {
            self.start_new_paragraph(line);
        }

        self.current_page = line.page;
    }

    /// Finalize the walk, flushing the trailing paragraph.
    pub fn finish(mut self) -> Transcript {
        self.paragraphs.push(self.current);
        Transcript {
            paragraphs: self.paragraphs,
            speakers: self.speakers,
            date: self.date,
        }
    }

    /// The column layout this builder classifies against.
    pub fn columns(&self) -> &ColumnPositions {
        &self.columns
    }

    /// The most recent speaker label attached to a paragraph.
    pub fn current_speaker(&self) -> Option<&str> {
        self.current_speaker.as_deref()
    }

    /// The most recent examining attorney, from a `"BY ..."` label.
    pub fn current_questioner(&self) -> Option<&str> {
        self.current_questioner.as_deref()
    }

    fn detect_date(&mut self, text: &str) {
        if let Some(matched) = DATE_LINE_RE.find(text) {
            match NaiveDate::parse_from_str(matched.as_str(), DATE_FORMAT) {
                Ok(date) => {
                    log::info!("transcript date: {}", date.format(DATE_FORMAT));
                    self.date = Some(date);
                },
                Err(err) => {
                    log::warn!("date-like line {:?} failed to parse: {}", matched.as_str(), err);
                },
            }
        }
    }

    fn start_new_paragraph(&mut self, line: &Line) {
        let finished = std::mem::replace(
            &mut self.current,
            Paragraph::starting_at(line.text.as_str(), line.page, line.number),
        );
        log::trace!("closing paragraph: {:?}", finished.text);
        self.paragraphs.push(finished);

        if let Some(label_match) = SPEAKER_RE.find(&line.text) {
            let label = label_match.as_str();
            if label != APPEARANCES_LABEL {
                self.speakers.record(label, line.page);
                self.current.speaker = Some(label.to_string());
                self.current_speaker = Some(label.to_string());
                if QUESTIONER_RE.is_match(label) {
                    self.current_questioner = Some(label.to_string());
                }
            }
        } else if let Some(lead_in) = QUESTION_ANSWER_RE.find(&line.text) {
            let token = lead_in
                .as_str()
                .trim_matches(|c: char| c == '.' || c.is_whitespace());
            match token {
                "Q" => {
                    self.current.question = true;
                    self.strip_lead_in(&line.text);
                },
                "A" => {
                    self.current.answer = true;
                    self.strip_lead_in(&line.text);
                },
                _ => {},
            }
        }
    }

    fn strip_lead_in(&mut self, text: &str) {
        self.current.text = QUESTION_ANSWER_RE.replace(text, "").into_owned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_columns() -> ColumnPositions {
        ColumnPositions {
            line_number_pos: 108.0,
            continuation_pos: 135.0,
            question_pos: Some(171.0),
            speaker_pos: Some(153.0),
        }
    }

    fn mock_line(page: u32, number: u32, start: f32, text: &str) -> Line {
        Line::new(page, number, start, text)
    }

    fn build(lines: &[Line]) -> Transcript {
        let mut builder = ParagraphBuilder::new(mock_columns());
        for line in lines {
            builder.push_line(line);
        }
        builder.finish()
    }

    #[test]
    fn test_placeholder_is_first_output() {
        let transcript = build(&[mock_line(1, 1, 171.0, "Q.   Were you there?")]);
        assert_eq!(transcript.paragraphs.len(), 2);
        assert_eq!(transcript.paragraphs[0].text, "");
        assert_eq!(transcript.paragraphs[1].text, "Were you there?");
    }

    #[test]
    fn test_question_flag_and_lead_in_strip() {
        let transcript = build(&[mock_line(1, 1, 171.0, "Q. Are you aware?")]);
        let paragraph = &transcript.paragraphs[1];
        assert!(paragraph.question);
        assert!(!paragraph.answer);
        assert_eq!(paragraph.text, "Are you aware?");
    }

    #[test]
    fn test_answer_flag_and_lead_in_strip() {
        let transcript = build(&[mock_line(1, 1, 171.0, "A.   Yes, sir.")]);
        let paragraph = &transcript.paragraphs[1];
        assert!(paragraph.answer);
        assert!(!paragraph.question);
        assert_eq!(paragraph.text, "Yes, sir.");
    }

    #[test]
    fn test_continuation_extends_paragraph() {
        let transcript = build(&[
            mock_line(1, 1, 171.0, "Q. Are you aware?"),
            mock_line(1, 2, 135.0, "of the incident?"),
        ]);
        assert_eq!(transcript.paragraphs.len(), 2);
        let paragraph = &transcript.paragraphs[1];
        assert!(paragraph.question);
        assert_eq!(paragraph.text, "Are you aware? of the incident?");
        assert_eq!(paragraph.line_start, 1);
        assert_eq!(paragraph.line_end, 2);
        assert_eq!(paragraph.page_start, 1);
        assert_eq!(paragraph.page_end, 1);
    }

    #[test]
    fn test_trailing_continuation_is_not_lost() {
        let transcript = build(&[
            mock_line(1, 1, 171.0, "Q. Are you aware?"),
            mock_line(1, 2, 135.0, "of the incident?"),
        ]);
        assert_eq!(transcript.paragraphs.last().unwrap().text, "Are you aware? of the incident?");
    }

    #[test]
    fn test_stray_gutter_line_is_swallowed() {
        let transcript = build(&[
            mock_line(1, 1, 171.0, "Q. Are you aware?"),
            mock_line(1, 0, 108.0, "14"),
            mock_line(1, 2, 135.0, "of the incident?"),
        ]);
        let paragraph = transcript.paragraphs.last().unwrap();
        assert_eq!(paragraph.text, "Are you aware? of the incident?");
        // The stray line updates neither extent.
        assert_eq!(paragraph.line_end, 2);
    }

    #[test]
    fn test_speaker_attached_and_registered() {
        let transcript = build(&[
            mock_line(2, 5, 153.0, "MR. SMITH:  Objection."),
            mock_line(7, 12, 153.0, "MR. SMITH:  Same objection."),
        ]);
        assert_eq!(transcript.speakers.len(), 1);
        let speaker = transcript.speakers.get("MR. SMITH:").unwrap();
        assert_eq!(speaker.pages.iter().copied().collect::<Vec<_>>(), vec![2, 7]);
        assert_eq!(
            transcript.paragraphs[1].speaker.as_deref(),
            Some("MR. SMITH:")
        );
    }

    #[test]
    fn test_appearances_is_not_a_speaker() {
        let transcript = build(&[mock_line(1, 1, 153.0, "APPEARANCES:")]);
        assert!(transcript.speakers.is_empty());
        assert!(transcript.paragraphs[1].speaker.is_none());
    }

    #[test]
    fn test_by_label_sets_questioner() {
        let mut builder = ParagraphBuilder::new(mock_columns());
        builder.push_line(&mock_line(1, 1, 153.0, "BY MR. SMITH:"));
        assert_eq!(builder.current_questioner(), Some("BY MR. SMITH:"));
        assert_eq!(builder.current_speaker(), Some("BY MR. SMITH:"));
        builder.push_line(&mock_line(1, 2, 153.0, "MS. JONES:  Objection."));
        // A plain speaker label does not displace the questioner.
        assert_eq!(builder.current_questioner(), Some("BY MR. SMITH:"));
        assert_eq!(builder.current_speaker(), Some("MS. JONES:"));
    }

    #[test]
    fn test_date_window_lags_one_line() {
        // The very first line is never date-checked: page tracking still
        // reads 0 when it is processed.
        let transcript = build(&[
            mock_line(1, 1, 235.0, "Monday, January 5, 2015"),
            mock_line(1, 2, 135.0, "continuation text here"),
        ]);
        assert!(transcript.date.is_none());

        let transcript = build(&[
            mock_line(1, 1, 171.0, "Q. Ready?"),
            mock_line(1, 2, 235.0, "Monday, January 5, 2015"),
            mock_line(1, 3, 135.0, "continuation text here"),
        ]);
        assert_eq!(
            transcript.date,
            NaiveDate::from_ymd_opt(2015, 1, 5)
        );
    }

    #[test]
    fn test_first_date_wins() {
        let transcript = build(&[
            mock_line(1, 1, 171.0, "Q. Ready?"),
            mock_line(1, 2, 235.0, "Monday, January 5, 2015"),
            mock_line(1, 3, 235.0, "Tuesday, January 6, 2015"),
            mock_line(1, 4, 135.0, "continuation text here"),
        ]);
        assert_eq!(transcript.date, NaiveDate::from_ymd_opt(2015, 1, 5));
    }

    #[test]
    fn test_date_not_detected_past_page_one_window() {
        let transcript = build(&[
            mock_line(2, 1, 171.0, "Q. Ready?"),
            mock_line(2, 2, 235.0, "Monday, January 5, 2015"),
            mock_line(2, 3, 135.0, "continuation text here"),
        ]);
        assert!(transcript.date.is_none());
    }
}
