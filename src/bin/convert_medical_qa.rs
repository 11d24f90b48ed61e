//! Convert the Tibetan medical QA text file under `test/` into bulk NDJSON
//! under `docker/`. Run from the project root; takes no arguments.
//!
//! Exits non-zero if the source file is missing or holds no QA pairs.

use anyhow::Result;
use std::process::ExitCode;
use tibqa::{logging, pipeline, report, ProjectLayout};

fn run() -> Result<()> {
    let layout = ProjectLayout::from_current_dir()?;
    let converted = pipeline::run_medical_qa(&layout)?;

    println!("\n{}", converted.summary);
    println!("\n{}", report::preview(&converted.pairs, 3));
    Ok(())
}

fn main() -> ExitCode {
    logging::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => logging::fatal(&e),
    }
}
