//! CSV question bank parsing.
//!
//! Data files are header-driven: `QuestionContent`, `AAnsver` or `AAnswer`,
//! `BAnswer`, `CAnswer`, `DAnswer` and `Answer`. Empty lines and rows whose
//! fields are all blank are skipped.

use std::io::Read;

use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::models::{OptionLabel, QuestionRecord};

/// A malformed row in a data file. `row` is the 1-based line number.
#[derive(Debug, Error)]
#[error("row {row}: {message}")]
pub struct ParseError {
    pub row: u64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "QuestionContent", default)]
    question: Option<String>,
    // Both spellings of the first option column exist in the wild.
    #[serde(rename = "AAnsver", default)]
    a_misspelled: Option<String>,
    #[serde(rename = "AAnswer", default)]
    a: Option<String>,
    #[serde(rename = "BAnswer", default)]
    b: Option<String>,
    #[serde(rename = "CAnswer", default)]
    c: Option<String>,
    #[serde(rename = "DAnswer", default)]
    d: Option<String>,
    #[serde(rename = "Answer", default)]
    answer: Option<String>,
}

impl RawRecord {
    fn into_record(self, row: u64) -> Result<QuestionRecord, ParseError> {
        let raw_answer = self.answer.unwrap_or_default();
        let answer = OptionLabel::parse(&raw_answer).ok_or_else(|| ParseError {
            row,
            message: format!("invalid answer label {:?}", raw_answer),
        })?;

        let a = non_blank(self.a_misspelled).or_else(|| non_blank(self.a));
        let record = QuestionRecord::new(
            self.question.unwrap_or_default().trim(),
            [a, non_blank(self.b), non_blank(self.c), non_blank(self.d)],
            answer,
        );

        if record.option(answer).is_none() {
            warn!("row {}: answer {} points at an empty option", row, answer);
        }

        Ok(record)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

fn csv_error(err: csv::Error) -> ParseError {
    ParseError {
        row: err.position().map_or(0, |pos| pos.line()),
        message: err.to_string(),
    }
}

/// Parses every question in a CSV document.
pub fn parse_questions<R: Read>(reader: R) -> Result<Vec<QuestionRecord>, ParseError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(csv_error)?.clone();

    let mut questions = Vec::new();
    let mut record = csv::StringRecord::new();
    while csv_reader.read_record(&mut record).map_err(csv_error)? {
        let row = record.position().map_or(0, |pos| pos.line());
        if record.iter().all(|field| field.trim().is_empty()) {
            debug!("row {}: blank, skipped", row);
            continue;
        }
        let raw: RawRecord = record
            .deserialize(Some(&headers))
            .map_err(|err| ParseError {
                row,
                message: err.to_string(),
            })?;
        questions.push(raw.into_record(row)?);
    }

    debug!("parsed {} questions", questions.len());
    Ok(questions)
}

/// Parses a CSV document held in memory, tolerating a UTF-8 byte order mark.
pub fn parse_questions_str(content: &str) -> Result<Vec<QuestionRecord>, ParseError> {
    parse_questions(content.trim_start_matches('\u{feff}').as_bytes())
}
