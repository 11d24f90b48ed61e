pub mod bulk;
pub mod layout;
pub mod logging;
pub mod medical;
pub mod pipeline;
pub mod qa_csv;
pub mod report;

pub use bulk::{write_bulk, write_bulk_file, MedicalQaDocument, QaDocument};
pub use layout::ProjectLayout;
pub use medical::{parse_medical_qa, QaPair};
pub use qa_csv::{convert_rows, CsvConversion, CsvRecord, RowOutcome};
pub use report::ConversionSummary;
