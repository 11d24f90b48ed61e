use chrono::{DateTime, Utc};
use std::{fmt, path::PathBuf};

use crate::medical::QaPair;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Outcome of one conversion job, as printed at the end of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    /// What a record is called in the report ("QA pairs", "records").
    pub unit: &'static str,
    pub records: usize,
    /// Source rows dropped for missing fields.
    pub skipped: usize,
    pub output_path: PathBuf,
    pub output_bytes: u64,
    pub started: DateTime<Utc>,
    pub finished: DateTime<Utc>,
}

impl ConversionSummary {
    pub fn size_mb(&self) -> f64 {
        self.output_bytes as f64 / BYTES_PER_MB
    }

    /// Output line count: one action line plus one document line per record.
    pub fn output_lines(&self) -> usize {
        2 * self.records
    }

    pub fn elapsed(&self) -> chrono::Duration {
        self.finished - self.started
    }
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Conversion completed!")?;
        writeln!(f, "Total {}: {}", self.unit, self.records)?;
        if self.skipped > 0 {
            writeln!(f, "Skipped rows: {}", self.skipped)?;
        }
        writeln!(f, "Output file: {}", self.output_path.display())?;
        write!(f, "File size: {:.2} MB", self.size_mb())
    }
}

/// First `max_chars` characters of `s`.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Short listing of the first `limit` pairs: 50 chars of each question,
/// 80 chars of each answer.
pub fn preview(pairs: &[QaPair], limit: usize) -> String {
    let shown = pairs.len().min(limit);
    let mut out = format!("First {} QA pairs:\n", shown);
    for (i, pair) in pairs.iter().take(limit).enumerate() {
        let position = i + 1;
        out.push_str(&format!(
            "\n{}. Q{}: {}...\n   A: {}...\n",
            position,
            pair.number_or_position(position),
            truncate_chars(&pair.question, 50),
            truncate_chars(&pair.answer, 80),
        ));
    }
    out
}
