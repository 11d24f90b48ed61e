use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const INPUT_DIR: &str = "test";
const OUTPUT_DIR: &str = "docker";

const MEDICAL_QA_INPUT: &str = "གསོ་རིག་རྒྱུན་ཤེས།.txt";
const QA_CSV_INPUT: &str = "2000_TibetanQA(v2).csv";
const MEDICAL_QA_OUTPUT: &str = "tibetan-medical-qa-data.json";
const QA_CSV_OUTPUT: &str = "tibetan-qa-data.json";

/// Fixed source/destination paths, all relative to one project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory the binary was invoked from is the project root.
    pub fn from_current_dir() -> Result<Self> {
        let root = std::env::current_dir().context("resolving current directory")?;
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn medical_qa_input(&self) -> PathBuf {
        self.root.join(INPUT_DIR).join(MEDICAL_QA_INPUT)
    }

    pub fn qa_csv_input(&self) -> PathBuf {
        self.root.join(INPUT_DIR).join(QA_CSV_INPUT)
    }

    pub fn medical_qa_output(&self) -> PathBuf {
        self.root.join(OUTPUT_DIR).join(MEDICAL_QA_OUTPUT)
    }

    pub fn qa_csv_output(&self) -> PathBuf {
        self.root.join(OUTPUT_DIR).join(QA_CSV_OUTPUT)
    }
}
