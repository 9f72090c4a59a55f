//! CSV export implementation.
//!
//! Exports enumerated paths in CSV format for spreadsheet use. Two tables
//! are available: one row per step of every path, or one row per path.

use super::{ExportData, Exporter};
use crate::graph::PATH_SEPARATOR;
use std::io::{self, Write};

/// Which CSV table to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CsvTable {
    /// `path_id,step,node,source,sink`, one row per node of every path
    #[default]
    Steps,
    /// `path_id,source,sink,length,path`, one row per path
    Summary,
}

impl std::str::FromStr for CsvTable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "steps" => Ok(CsvTable::Steps),
            "summary" => Ok(CsvTable::Summary),
            _ => Err(format!(
                "Unknown CSV table: '{}'. Valid tables: steps, summary",
                s
            )),
        }
    }
}

/// CSV exporter implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter {
    table: CsvTable,
}

impl CsvExporter {
    /// Creates an exporter for the given table.
    pub fn new(table: CsvTable) -> Self {
        Self { table }
    }

    /// Escape a field value for CSV format.
    ///
    /// Wraps the value in quotes if it contains commas, quotes or line breaks.
    fn escape_field(value: &str) -> String {
        if value.contains([',', '"', '\n', '\r']) {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }

    fn write_steps<W: Write>(data: &ExportData, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "path_id,step,node,source,sink")?;

        for (path_id, path) in data.numbered_paths() {
            let source = Self::escape_field(path.source());
            let sink = Self::escape_field(path.sink());
            for (step, node) in path.nodes().iter().enumerate() {
                writeln!(
                    writer,
                    "{},{},{},{},{}",
                    path_id,
                    step + 1,
                    Self::escape_field(node),
                    source,
                    sink
                )?;
            }
        }

        Ok(())
    }

    fn write_summary<W: Write>(data: &ExportData, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "path_id,source,sink,length,path")?;

        for (path_id, path) in data.numbered_paths() {
            writeln!(
                writer,
                "{},{},{},{},{}",
                path_id,
                Self::escape_field(path.source()),
                Self::escape_field(path.sink()),
                path.len(),
                Self::escape_field(&path.nodes().join(PATH_SEPARATOR))
            )?;
        }

        Ok(())
    }
}

impl Exporter for CsvExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        match self.table {
            CsvTable::Steps => Self::write_steps(data, writer),
            CsvTable::Summary => Self::write_summary(data, writer),
        }
    }
}
