// src/qa_csv/mod.rs
use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};
use tracing::{info, warn};

pub const ID_COLUMN: &str = "ID";
pub const TITLE_COLUMN: &str = "标题";
pub const CONTENT_COLUMN: &str = "段落";
pub const QUESTION_COLUMN: &str = "问题";
pub const ANSWER_COLUMN: &str = "答案";

/// Converted rows between progress log lines.
pub const PROGRESS_INTERVAL: usize = 100;

/// Row id reported for skipped rows that carry no `ID` value.
const UNKNOWN_ROW: &str = "unknown";

/// One fully-populated CSV row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRecord {
    pub doc_id: String,
    pub title: String,
    pub content: String,
    pub question: String,
    pub answer: String,
}

/// Result of projecting one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Converted(CsvRecord),
    /// `missing` is the first required column the row lacks.
    Skipped { row_id: String, missing: &'static str },
}

/// Header positions of the required columns, resolved once per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QaColumns {
    id: Option<usize>,
    title: Option<usize>,
    content: Option<usize>,
    question: Option<usize>,
    answer: Option<usize>,
}

impl QaColumns {
    /// A column name that repeats resolves to its last occurrence.
    pub fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| {
            headers
                .iter()
                .collect::<Vec<_>>()
                .into_iter()
                .rposition(|h| h.trim_start_matches('\u{feff}') == name)
        };
        Self {
            id: find(ID_COLUMN),
            title: find(TITLE_COLUMN),
            content: find(CONTENT_COLUMN),
            question: find(QUESTION_COLUMN),
            answer: find(ANSWER_COLUMN),
        }
    }

    /// Project `row` onto a [`CsvRecord`], or report why it was skipped.
    pub fn project(&self, row: &StringRecord) -> RowOutcome {
        match self.try_project(row) {
            Ok(record) => RowOutcome::Converted(record),
            Err(missing) => RowOutcome::Skipped {
                row_id: self
                    .id
                    .and_then(|i| row.get(i))
                    .unwrap_or(UNKNOWN_ROW)
                    .to_string(),
                missing,
            },
        }
    }

    fn try_project(&self, row: &StringRecord) -> std::result::Result<CsvRecord, &'static str> {
        let field = |idx: Option<usize>, name: &'static str| {
            idx.and_then(|i| row.get(i))
                .map(str::to_string)
                .ok_or(name)
        };
        Ok(CsvRecord {
            doc_id: field(self.id, ID_COLUMN)?,
            title: field(self.title, TITLE_COLUMN)?,
            content: field(self.content, CONTENT_COLUMN)?,
            question: field(self.question, QUESTION_COLUMN)?,
            answer: field(self.answer, ANSWER_COLUMN)?,
        })
    }
}

/// Rows that made it through projection, plus how many did not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvConversion {
    pub records: Vec<CsvRecord>,
    pub skipped: usize,
}

/// Read CSV with a header row from `reader` and project every row.
pub fn convert_rows<R: Read>(reader: R) -> Result<CsvConversion> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true) // short rows are skipped, not fatal
        .from_reader(reader);

    let headers = rdr.headers().context("reading CSV header row")?.clone();
    let columns = QaColumns::from_headers(&headers);

    let mut conversion = CsvConversion::default();
    for (idx, result) in rdr.records().enumerate() {
        let row = result.with_context(|| format!("CSV parse error at record {}", idx))?;

        match columns.project(&row) {
            RowOutcome::Converted(record) => {
                conversion.records.push(record);
                let count = conversion.records.len();
                if count % PROGRESS_INTERVAL == 0 {
                    info!("Processed {} records...", count);
                }
            }
            RowOutcome::Skipped { row_id, missing } => {
                warn!("Missing field '{}' in row {}", missing, row_id);
                conversion.skipped += 1;
            }
        }
    }

    Ok(conversion)
}

/// Read and convert the CSV file at `path`.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.display()))]
pub fn load_qa_csv(path: &Path) -> Result<CsvConversion> {
    info!("Reading CSV from: {}", path.display());

    if !path.exists() {
        bail!("CSV file not found at {}", path.display());
    }

    let file = File::open(path).with_context(|| format!("Failed to open CSV {}", path.display()))?;
    let conversion = convert_rows(BufReader::new(file))
        .with_context(|| format!("Failed to convert CSV {}", path.display()))?;

    info!(
        "converted {} rows, skipped {}",
        conversion.records.len(),
        conversion.skipped
    );
    Ok(conversion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::capture::with_captured_logs;

    const HEADER: &str = "ID,标题,段落,问题,答案\n";

    fn record(id: &str) -> CsvRecord {
        CsvRecord {
            doc_id: id.to_string(),
            title: format!("t{}", id),
            content: format!("c{}", id),
            question: format!("q{}", id),
            answer: format!("a{}", id),
        }
    }

    #[test]
    fn test_complete_rows_convert() -> Result<()> {
        let data = format!("{}1,t1,c1,q1,a1\n2,t2,c2,q2,a2\n", HEADER);

        let conversion = convert_rows(data.as_bytes())?;

        assert_eq!(conversion.records, vec![record("1"), record("2")]);
        assert_eq!(conversion.skipped, 0);
        Ok(())
    }

    #[test]
    fn test_short_row_is_skipped_not_fatal() -> Result<()> {
        let data = format!("{}1,t1,c1,q1,a1\n2,t2\n3,t3,c3,q3,a3\n", HEADER);

        let conversion = convert_rows(data.as_bytes())?;

        assert_eq!(conversion.records, vec![record("1"), record("3")]);
        assert_eq!(conversion.skipped, 1);
        Ok(())
    }

    #[test]
    fn test_missing_header_column_skips_every_row() -> Result<()> {
        let data = "ID,标题,段落,问题\n1,t,c,q\n2,t,c,q\n";

        let conversion = convert_rows(data.as_bytes())?;

        assert!(conversion.records.is_empty());
        assert_eq!(conversion.skipped, 2);
        Ok(())
    }

    #[test]
    fn test_skip_reports_row_id_and_first_missing_column() {
        let headers = StringRecord::from(vec!["ID", "标题", "段落", "问题", "答案"]);
        let columns = QaColumns::from_headers(&headers);

        let outcome = columns.project(&StringRecord::from(vec!["42", "t"]));

        assert_eq!(
            outcome,
            RowOutcome::Skipped {
                row_id: "42".into(),
                missing: CONTENT_COLUMN
            }
        );
    }

    #[test]
    fn test_skip_without_id_column_is_unknown() {
        let headers = StringRecord::from(vec!["标题", "段落", "问题", "答案"]);
        let columns = QaColumns::from_headers(&headers);

        let outcome = columns.project(&StringRecord::from(vec!["t", "c", "q", "a"]));

        assert_eq!(
            outcome,
            RowOutcome::Skipped {
                row_id: "unknown".into(),
                missing: ID_COLUMN
            }
        );
    }

    #[test]
    fn test_columns_found_by_name_in_any_order() -> Result<()> {
        let data = "答案,extra,问题,ID,段落,标题\nཡིན།,x,ཅི།,9,para,title\n";

        let conversion = convert_rows(data.as_bytes())?;

        assert_eq!(
            conversion.records,
            vec![CsvRecord {
                doc_id: "9".into(),
                title: "title".into(),
                content: "para".into(),
                question: "ཅི།".into(),
                answer: "ཡིན།".into(),
            }]
        );
        Ok(())
    }

    #[test]
    fn test_empty_values_are_present() -> Result<()> {
        let data = format!("{}5,,,,\n", HEADER);

        let conversion = convert_rows(data.as_bytes())?;

        assert_eq!(conversion.records.len(), 1);
        assert_eq!(conversion.records[0].doc_id, "5");
        assert_eq!(conversion.records[0].answer, "");
        Ok(())
    }

    #[test]
    fn test_byte_order_mark_and_quoted_fields() -> Result<()> {
        let data = format!("\u{feff}{}1,\"a, b\",\"multi\nline\",q,a\n", HEADER);

        let conversion = convert_rows(data.as_bytes())?;

        assert_eq!(conversion.records.len(), 1);
        assert_eq!(conversion.records[0].doc_id, "1");
        assert_eq!(conversion.records[0].title, "a, b");
        assert_eq!(conversion.records[0].content, "multi\nline");
        Ok(())
    }

    #[test]
    fn test_many_rows_in_order() -> Result<()> {
        let mut data = HEADER.to_string();
        for i in 0..250 {
            data.push_str(&format!("{i},t{i},c{i},q{i},a{i}\n"));
        }

        let conversion = convert_rows(data.as_bytes())?;

        assert_eq!(conversion.records.len(), 250);
        assert_eq!(conversion.records[249], record("249"));
        Ok(())
    }

    #[test]
    fn test_duplicate_header_uses_last_column() -> Result<()> {
        let data = "ID,标题,段落,问题,答案,ID\n1,t,c,q,a,2\n";

        let conversion = convert_rows(data.as_bytes())?;

        assert_eq!(conversion.records.len(), 1);
        assert_eq!(conversion.records[0].doc_id, "2");
        Ok(())
    }

    #[test]
    fn test_progress_and_skip_warnings_are_logged() -> Result<()> {
        let mut data = HEADER.to_string();
        data.push_str("1,t1,c1,q1,a1\n2,t2\n");
        for i in 3..=251 {
            data.push_str(&format!("{i},t{i},c{i},q{i},a{i}\n"));
        }

        let (conversion, logs) = with_captured_logs(|| convert_rows(data.as_bytes()));
        let conversion = conversion?;

        assert_eq!(conversion.records.len(), 250);
        assert_eq!(conversion.skipped, 1);
        assert!(logs.contains("Processed 100 records..."));
        assert!(logs.contains("Processed 200 records..."));
        assert!(!logs.contains("Processed 300 records..."));
        assert_eq!(logs.matches("Processed ").count(), 2);
        assert!(logs.contains("Missing field '段落' in row 2"));
        Ok(())
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_qa_csv(&dir.path().join("absent.csv")).unwrap_err();
        assert!(err.to_string().contains("CSV file not found"));
    }
}
