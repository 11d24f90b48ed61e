// src/pipeline.rs
//! The two batch jobs: read the whole source, transform it, write NDJSON.

use anyhow::{bail, Result};
use chrono::Utc;
use std::path::Path;
use tracing::{info, warn};

use crate::{
    bulk::{medical_documents, write_bulk_file, QaDocument},
    layout::ProjectLayout,
    medical::{load_medical_qa, QaPair},
    qa_csv::load_qa_csv,
    report::ConversionSummary,
};

/// A finished text-format conversion. The pairs are kept for the preview.
#[derive(Debug)]
pub struct MedicalQaConversion {
    pub summary: ConversionSummary,
    pub pairs: Vec<QaPair>,
}

/// Convert the medical QA text file at `input` into bulk NDJSON at `output`.
/// Fails if `input` is missing or yields no QA pairs; nothing is written then.
#[tracing::instrument(level = "info", skip(input, output), fields(input = %input.display()))]
pub fn convert_medical_qa_file(input: &Path, output: &Path) -> Result<MedicalQaConversion> {
    let started = Utc::now();

    let pairs = load_medical_qa(input)?;
    if pairs.is_empty() {
        warn!("No QA pairs found in the file!");
        bail!("No QA pairs found in {}", input.display());
    }

    info!("Converting {} QA pairs to NDJSON...", pairs.len());
    let docs = medical_documents(&pairs);
    let output_bytes = write_bulk_file(output, &docs)?;

    let summary = ConversionSummary {
        unit: "QA pairs",
        records: docs.len(),
        skipped: 0,
        output_path: output.to_path_buf(),
        output_bytes,
        started,
        finished: Utc::now(),
    };
    info!(
        records = summary.records,
        bytes = summary.output_bytes,
        elapsed_ms = summary.elapsed().num_milliseconds(),
        "medical QA conversion completed"
    );

    Ok(MedicalQaConversion { summary, pairs })
}

/// Convert the QA CSV at `input` into bulk NDJSON at `output`. Rows missing
/// a required column are skipped and counted; an empty result is not an error.
#[tracing::instrument(level = "info", skip(input, output), fields(input = %input.display()))]
pub fn convert_qa_csv_file(input: &Path, output: &Path) -> Result<ConversionSummary> {
    let started = Utc::now();

    let conversion = load_qa_csv(input)?;
    let skipped = conversion.skipped;
    let docs: Vec<QaDocument> = conversion
        .records
        .into_iter()
        .map(QaDocument::from)
        .collect();
    let output_bytes = write_bulk_file(output, &docs)?;

    let summary = ConversionSummary {
        unit: "records",
        records: docs.len(),
        skipped,
        output_path: output.to_path_buf(),
        output_bytes,
        started,
        finished: Utc::now(),
    };
    info!(
        records = summary.records,
        skipped = summary.skipped,
        bytes = summary.output_bytes,
        elapsed_ms = summary.elapsed().num_milliseconds(),
        "QA CSV conversion completed"
    );

    Ok(summary)
}

pub fn run_medical_qa(layout: &ProjectLayout) -> Result<MedicalQaConversion> {
    convert_medical_qa_file(&layout.medical_qa_input(), &layout.medical_qa_output())
}

pub fn run_qa_csv(layout: &ProjectLayout) -> Result<ConversionSummary> {
    convert_qa_csv_file(&layout.qa_csv_input(), &layout.qa_csv_output())
}
