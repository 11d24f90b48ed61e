use serde::{Deserialize, Serialize};

use crate::medical::QaPair;
use crate::qa_csv::CsvRecord;

pub const MEDICAL_CATEGORY: &str = "tibetan_medicine";
/// Attribution carried by every medical QA document.
pub const MEDICAL_SOURCE: &str = "གསོ་རིག་རྒྱུན་ཤེས།";
pub const QA_CATEGORY: &str = "qa";

/// Document line produced from a text-format [`QaPair`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalQaDocument {
    pub question_number: String,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub source: String,
}

impl MedicalQaDocument {
    /// `position` is the 1-based index of `pair` in the parsed sequence.
    pub fn from_pair(pair: &QaPair, position: usize) -> Self {
        Self {
            question_number: pair.number_or_position(position),
            question: pair.question.clone(),
            answer: pair.answer.clone(),
            category: MEDICAL_CATEGORY.to_string(),
            source: MEDICAL_SOURCE.to_string(),
        }
    }
}

pub fn medical_documents(pairs: &[QaPair]) -> Vec<MedicalQaDocument> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, pair)| MedicalQaDocument::from_pair(pair, i + 1))
        .collect()
}

/// Document line produced from a CSV row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaDocument {
    pub doc_id: String,
    pub title: String,
    pub content: String,
    pub question: String,
    pub answer: String,
    pub category: String,
}

impl From<CsvRecord> for QaDocument {
    fn from(record: CsvRecord) -> Self {
        Self {
            doc_id: record.doc_id,
            title: record.title,
            content: record.content,
            question: record.question,
            answer: record.answer,
            category: QA_CATEGORY.to_string(),
        }
    }
}
