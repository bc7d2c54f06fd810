//! Plain-text rendering of paragraphs and transcripts.

use crate::converters::RenderOptions;
use crate::paragraphs::{Paragraph, Transcript};

/// Interior width of the bracketed locator field.
///
/// A fixed field keeps the text column aligned across paragraphs; the widest
/// common locator (`16:25-17:4`) fits exactly.
const LOCATOR_WIDTH: usize = 10;

/// Date format used on page markers.
const MARKER_DATE_FORMAT: &str = "%A, %B %d, %Y";

/// Render one paragraph as a display line.
///
/// Pure: the paragraph is not modified. When both the question and answer
/// flags are set the question tag wins.
///
/// # Examples
///
/// ```
/// use transcript_oxide::converters::{render_paragraph, RenderOptions};
/// use transcript_oxide::paragraphs::Paragraph;
///
/// let mut paragraph = Paragraph::starting_at("Were you there?", 4, 17);
/// paragraph.question = true;
/// let options = RenderOptions::new()
///     .with_line_numbers(true)
///     .with_question_answer_tag(true);
/// assert_eq!(
///     render_paragraph(&paragraph, &options),
///     "[4:17-17   ]  [Q] Were you there?"
/// );
/// ```
pub fn render_paragraph(paragraph: &Paragraph, options: &RenderOptions) -> String {
    let mut text = paragraph.text.clone();

    if options.include_question_answer_tag {
        if paragraph.question {
            text = format!("[Q] {text}");
        } else if paragraph.answer {
            text = format!("[A] {text}");
        }
    }

    if options.include_line_numbers {
        text = format!("[{:<width$}]  {}", locator(paragraph), text, width = LOCATOR_WIDTH);
    }

    text
}

/// Render a whole transcript, one paragraph per line.
///
/// With page markers enabled, a `[**PAGE: n**]` line precedes the first
/// paragraph starting on each new page; with the date enabled and a
/// transcript date detected, the marker carries it.
pub fn render_transcript(transcript: &Transcript, options: &RenderOptions) -> String {
    let mut out = String::new();
    let mut current_page = 0;

    for paragraph in &transcript.paragraphs {
        if options.include_page_markers && paragraph.page_start != current_page {
            out.push_str(&page_marker(paragraph.page_start, transcript, options));
            out.push('\n');
            current_page = paragraph.page_start;
        }
        out.push_str(&render_paragraph(paragraph, options));
        out.push('\n');
    }

    out
}

/// The page/line extent of a paragraph, e.g. `4:17-25` or `16:25-17:4`.
fn locator(paragraph: &Paragraph) -> String {
    if paragraph.page_start == paragraph.page_end {
        format!(
            "{}:{}-{}",
            paragraph.page_start, paragraph.line_start, paragraph.line_end
        )
    } else {
        format!(
            "{}:{}-{}:{}",
            paragraph.page_start, paragraph.line_start, paragraph.page_end, paragraph.line_end
        )
    }
}

fn page_marker(page: u32, transcript: &Transcript, options: &RenderOptions) -> String {
    match transcript.date {
        Some(date) if options.include_date_with_page_markers => {
            format!("[**PAGE: {}, {}**]", page, date.format(MARKER_DATE_FORMAT))
        },
        _ => format!("[**PAGE: {}**]", page),
    }
}
