//! Convert the Tibetan QA CSV export under `test/` into bulk NDJSON under
//! `docker/`. Run from the project root; takes no arguments.

use anyhow::Result;
use std::process::ExitCode;
use tibqa::{logging, pipeline, ProjectLayout};

fn run() -> Result<()> {
    let layout = ProjectLayout::from_current_dir()?;
    let summary = pipeline::run_qa_csv(&layout)?;

    println!("\n{}", summary);
    Ok(())
}

fn main() -> ExitCode {
    logging::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => logging::fatal(&e),
    }
}
