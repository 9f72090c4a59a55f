//! Export functionality for enumerated paths.
//!
//! This module provides exporters for outputting path enumeration results
//! in various formats: plain text, CSV (steps or summary table), JSON and
//! Markdown.

pub mod csv;
pub mod json;
pub mod markdown;
pub mod text;

use crate::graph::{DagPath, ValidatedDag};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub use self::csv::{CsvExporter, CsvTable};
pub use self::json::JsonExporter;
pub use self::markdown::MarkdownExporter;
pub use self::text::TextExporter;

/// File name of the saved path listing.
pub const LIST_FILE_NAME: &str = "all_paths_list.txt";
/// File name of the saved steps table.
pub const STEPS_FILE_NAME: &str = "all_paths_steps.csv";
/// File name of the saved summary table.
pub const SUMMARY_FILE_NAME: &str = "all_paths_summary.csv";

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Numbered path listing with a summary line
    #[default]
    Text,
    /// CSV format - spreadsheet-friendly
    Csv,
    /// JSON format - machine-readable, full data
    Json,
    /// Markdown format - documentation/reporting
    Markdown,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: text, csv, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Data container for export operations.
///
/// Built from a [`ValidatedDag`], so a report can only describe a graph
/// that passed the cycle check.
#[derive(Debug, Clone, Default)]
pub struct ExportData {
    /// Enumerated paths, in output order
    pub paths: Vec<DagPath>,
    /// Sorted source ids
    pub sources: Vec<String>,
    /// Sorted sink ids
    pub sinks: Vec<String>,
    /// Number of nodes in the graph
    pub node_count: usize,
    /// Number of edges in the graph
    pub edge_count: usize,
}

impl ExportData {
    /// Enumerates the paths of `dag` and collects them for export.
    pub fn new(dag: &ValidatedDag<'_>) -> Self {
        Self::with_paths(dag, dag.enumerate_paths())
    }

    /// Collects already enumerated paths of `dag` for export.
    pub fn with_paths(dag: &ValidatedDag<'_>, paths: Vec<DagPath>) -> Self {
        let graph = dag.graph();
        Self {
            paths,
            sources: dag.sources().into_iter().map(String::from).collect(),
            sinks: dag.sinks().into_iter().map(String::from).collect(),
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
        }
    }

    /// Number of enumerated paths.
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Iterates paths together with their 1-based id.
    pub fn numbered_paths(&self) -> impl Iterator<Item = (usize, &DagPath)> {
        self.paths.iter().enumerate().map(|(i, p)| (i + 1, p))
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the data to the given writer.
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()>;
}

/// Export data in the specified format.
///
/// CSV output uses the steps table; use [`CsvExporter`] directly for the
/// summary table.
pub fn export<W: Write>(
    format: ExportFormat,
    data: &ExportData,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Text => TextExporter::default().export(data, writer),
        ExportFormat::Csv => CsvExporter::default().export(data, writer),
        ExportFormat::Json => JsonExporter.export(data, writer),
        ExportFormat::Markdown => MarkdownExporter.export(data, writer),
    }
}

/// Export data to a string.
pub fn export_to_string(format: ExportFormat, data: &ExportData) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, data, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Writes the path listing, steps table and summary table into `dir`.
///
/// The directory is created if needed. Returns the written file paths.
pub fn write_report_files(dir: &Path, data: &ExportData) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let list_path = dir.join(LIST_FILE_NAME);
    let steps_path = dir.join(STEPS_FILE_NAME);
    let summary_path = dir.join(SUMMARY_FILE_NAME);

    write_file(&list_path, data, &TextExporter::listing_only())?;
    write_file(&steps_path, data, &CsvExporter::new(CsvTable::Steps))?;
    write_file(&summary_path, data, &CsvExporter::new(CsvTable::Summary))?;

    info!(dir = %dir.display(), "wrote report files");
    Ok(vec![list_path, steps_path, summary_path])
}

fn write_file<E: Exporter>(path: &Path, data: &ExportData, exporter: &E) -> io::Result<()> {
    let mut file = io::BufWriter::new(fs::File::create(path)?);
    exporter.export(data, &mut file)?;
    file.flush()
}
