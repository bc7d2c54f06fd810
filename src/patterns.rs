//! Compiled line-pattern constants.
//!
//! The classifier and the paragraph builder test every line against the same
//! small set of patterns, so they are compiled once for the whole process.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Question/answer lead-in: a lone `Q` or `A` followed by punctuation or
    /// whitespace, e.g. `"Q.   Is that correct?"` or `"A Yes."`.
    pub static ref QUESTION_ANSWER_RE: Regex = Regex::new(r"^[AQ][.\s]+").unwrap();

    /// Speaker label: uppercase letters, periods, and spaces terminated by a
    /// colon, e.g. `"THE COURT:"`, `"MR. CLARK:"`, `"BY MS. JONES:"`.
    pub static ref SPEAKER_RE: Regex = Regex::new(r"^[A-Z.\s]+:").unwrap();

    /// Examining-attorney label, e.g. `"BY MR. SMITH:"`.
    pub static ref QUESTIONER_RE: Regex = Regex::new(r"^BY [A-Z.\s]+:$").unwrap();

    /// A stray line-number artifact: the whole line is one or two digits.
    pub static ref STRAY_LINE_NUMBER_RE: Regex = Regex::new(r"^[0-9]{1,2}$").unwrap();

    /// Full transcript date, e.g. `"Monday, January 5, 2015"`, anchored to the
    /// end of the line.
    pub static ref DATE_LINE_RE: Regex = Regex::new(
        r"(Sunday|Monday|Tuesday|Wednesday|Thursday|Friday|Saturday), (January|February|March|April|May|June|July|August|September|October|November|December) ([\d]+), ([\d]{4})$"
    )
    .unwrap();
}
