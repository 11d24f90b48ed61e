// src/medical/mod.rs
use anyhow::{bail, Context, Result};
use std::{fs, path::Path};
use tracing::{debug, info};

pub mod question;

use question::{split_question, strip_marker, ANSWER_MARKER, QUESTION_MARKER};

/// One question/answer unit from the medical QA text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaPair {
    /// Digits from a `<digits>.` question prefix, if the line had one.
    pub number: Option<String>,
    pub question: String,
    /// All answer lines of the record, concatenated without a separator.
    pub answer: String,
}

impl QaPair {
    /// The record's number, or its 1-based `position` when it has none.
    pub fn number_or_position(&self, position: usize) -> String {
        self.number.clone().unwrap_or_else(|| position.to_string())
    }
}

/// Line-classification state machine that accumulates [`QaPair`]s.
///
/// Feed lines in source order with [`process_line`](Self::process_line), then
/// call [`finish`](Self::finish) to flush a trailing record.
#[derive(Debug, Default)]
pub struct MedicalQaParser {
    /// Question of the in-progress record.
    question: Option<String>,

    /// Number of the in-progress record.
    number: Option<String>,

    /// Answer lines accumulated since the last flush.
    answer_lines: Vec<String>,

    /// Completed records, in source order.
    pairs: Vec<QaPair>,
}

impl MedicalQaParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a single line and update the in-progress record.
    pub fn process_line(&mut self, raw: &str) {
        let line = raw.trim();

        if line.is_empty() {
            // Blank line closes a complete record and starts from scratch
            if self.flush_complete() {
                self.question = None;
                self.number = None;
            }
            return;
        }

        if line.starts_with(QUESTION_MARKER) {
            // Only the answer accumulator is cleared here. A number from the
            // previous record survives if this question is unnumbered.
            self.flush_complete();

            let parsed = split_question(line);
            if let Some(number) = parsed.number {
                self.number = Some(number);
            }
            self.question = Some(parsed.text);
        } else if line.starts_with(ANSWER_MARKER) {
            self.answer_lines.push(strip_marker(line, ANSWER_MARKER));
        } else if self.has_question() {
            self.answer_lines.push(line.to_string());
        }
    }

    /// Flush a trailing record (no blank line after it) and return all records.
    pub fn finish(mut self) -> Vec<QaPair> {
        self.flush_complete();
        self.pairs
    }

    fn has_question(&self) -> bool {
        self.question.as_deref().is_some_and(|q| !q.is_empty())
    }

    fn is_complete(&self) -> bool {
        self.has_question() && !self.answer_lines.is_empty()
    }

    /// Push the in-progress record if it is complete and clear the answer
    /// accumulator. Returns whether a record was pushed.
    fn flush_complete(&mut self) -> bool {
        if !self.is_complete() {
            return false;
        }

        let pair = QaPair {
            number: self.number.clone(),
            question: self.question.clone().unwrap_or_default(),
            answer: self.answer_lines.concat(),
        };
        debug!(number = ?pair.number, "completed QA pair #{}", self.pairs.len() + 1);

        self.answer_lines.clear();
        self.pairs.push(pair);
        true
    }
}

/// Segment `lines` (in source order) into QA pairs.
pub fn parse_medical_qa<I, S>(lines: I) -> Vec<QaPair>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = MedicalQaParser::new();
    for line in lines {
        parser.process_line(line.as_ref());
    }
    parser.finish()
}

/// Turn `\r\n` and lone `\r` line endings into `\n`.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Read the whole text file at `path` into memory and parse it.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.display()))]
pub fn load_medical_qa(path: &Path) -> Result<Vec<QaPair>> {
    info!("Reading medical QA file from: {}", path.display());

    if !path.exists() {
        bail!("File not found at {}", path.display());
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read medical QA file {}", path.display()))?;

    let pairs = parse_medical_qa(normalize_newlines(&text).lines());
    info!("parsed {} QA pairs", pairs.len());
    Ok(pairs)
}
