//! Run configuration for the dagpath CLI.
//!
//! The command-line arguments are collected into a [`RunConfig`], validated
//! up front, and then drive record loading and report output.

use std::path::PathBuf;

use tracing::info;

use crate::export::{CsvTable, ExportFormat};
use crate::parser::{self, ParseResult, Record};

/// Configuration validation errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The input file does not exist.
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// The output directory path is taken by a file.
    #[error("Output path exists and is not a directory: {0}")]
    OutputNotDirectory(PathBuf),
}

/// Settings for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Record file to read; the built-in sample when `None`
    pub input: Option<PathBuf>,
    /// Format of the report printed to stdout
    pub format: ExportFormat,
    /// CSV table printed when `format` is CSV
    pub table: CsvTable,
    /// Directory for the list/steps/summary files, if any
    pub out_dir: Option<PathBuf>,
}

impl RunConfig {
    /// Checks that the configured paths are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(input) = &self.input {
            if !input.is_file() {
                return Err(ConfigError::InputNotFound(input.clone()));
            }
        }
        if let Some(dir) = &self.out_dir {
            if dir.exists() && !dir.is_dir() {
                return Err(ConfigError::OutputNotDirectory(dir.clone()));
            }
        }
        Ok(())
    }

    /// Loads the configured records.
    pub fn load_records(&self) -> ParseResult<Vec<Record>> {
        match &self.input {
            Some(path) => {
                let records = parser::parse_file(path)?;
                info!(path = %path.display(), records = records.len(), "loaded records");
                Ok(records)
            }
            None => {
                let records = parser::sample_records();
                info!(records = records.len(), "using built-in sample dataset");
                Ok(records)
            }
        }
    }
}
