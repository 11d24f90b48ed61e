// src/bulk/mod.rs
//! Bulk-ingestion NDJSON: every document line is preceded by an
//! `{"index":{}}` action line, which asks the index to assign the id.

use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};
use tracing::{debug, info};

pub mod document;

pub use document::{medical_documents, MedicalQaDocument, QaDocument};

/// `{"index":{}}`
#[derive(Debug, Default, Serialize)]
struct BulkAction {
    index: IndexAction,
}

/// No `_id`: the index assigns one.
#[derive(Debug, Default, Serialize)]
struct IndexAction {}

/// Write one action line and one document line per element of `docs`.
/// Non-ASCII text is written as-is. Returns the number of documents.
pub fn write_bulk<W: Write, D: Serialize>(mut out: W, docs: &[D]) -> Result<usize> {
    let action = BulkAction::default();
    for doc in docs {
        serde_json::to_writer(&mut out, &action).context("serializing bulk action")?;
        out.write_all(b"\n")?;
        serde_json::to_writer(&mut out, doc).context("serializing document")?;
        out.write_all(b"\n")?;
    }
    out.flush().context("flushing bulk output")?;
    Ok(docs.len())
}

/// Write `docs` to `path` (creating its directory) and return the file size in bytes.
#[tracing::instrument(level = "debug", skip(path, docs), fields(path = %path.display(), docs = docs.len()))]
pub fn write_bulk_file<D: Serialize>(path: &Path, docs: &[D]) -> Result<u64> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {:?}", parent))?;
    }

    let file = File::create(path).with_context(|| format!("creating output file {:?}", path))?;
    let mut writer = BufWriter::new(file);
    let written = write_bulk(&mut writer, docs)?;
    drop(writer);
    debug!("wrote {} documents", written);

    let bytes = fs::metadata(path)
        .with_context(|| format!("reading size of {:?}", path))?
        .len();
    info!("wrote {} bytes to {}", bytes, path.display());
    Ok(bytes)
}
