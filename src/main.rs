use anyhow::Result;
use std::process::ExitCode;
use tibqa::{logging, pipeline, report, ProjectLayout};
use tracing::info;

/// Runs both conversions in sequence; the first failure stops the run.
fn run() -> Result<()> {
    // ─── 1) resolve fixed paths ──────────────────────────────────────
    let layout = ProjectLayout::from_current_dir()?;
    info!("project root {}", layout.root().display());

    // ─── 2) QA CSV → NDJSON ──────────────────────────────────────────
    let csv_summary = pipeline::run_qa_csv(&layout)?;
    println!("\n{}", csv_summary);

    // ─── 3) medical QA text → NDJSON ─────────────────────────────────
    let medical = pipeline::run_medical_qa(&layout)?;
    println!("\n{}", medical.summary);
    println!("\n{}", report::preview(&medical.pairs, 3));

    info!("all done");
    Ok(())
}

fn main() -> ExitCode {
    // ─── init logging ────────────────────────────────────────────────
    logging::init();
    info!("startup");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => logging::fatal(&e),
    }
}
