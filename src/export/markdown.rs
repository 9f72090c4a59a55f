//! Markdown export implementation.
//!
//! Exports enumerated paths in Markdown format for documentation and reporting.

use super::{ExportData, Exporter};
use crate::graph::PATH_SEPARATOR;
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

impl MarkdownExporter {
    /// Escape pipe characters so ids cannot break table cells.
    fn escape_cell(value: &str) -> String {
        value.replace('|', "\\|")
    }

    fn id_list(ids: &[String]) -> String {
        if ids.is_empty() {
            return "-".to_string();
        }
        ids.iter()
            .map(|id| format!("`{}`", Self::escape_cell(id)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        // Title
        writeln!(writer, "# Path Enumeration Report")?;
        writeln!(writer)?;

        // Summary section
        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Metric | Value |")?;
        writeln!(writer, "|--------|-------|")?;
        writeln!(writer, "| Nodes | {} |", data.node_count)?;
        writeln!(writer, "| Edges | {} |", data.edge_count)?;
        writeln!(writer, "| Paths | {} |", data.path_count())?;
        writeln!(writer, "| Sources | {} |", Self::id_list(&data.sources))?;
        writeln!(writer, "| Sinks | {} |", Self::id_list(&data.sinks))?;
        writeln!(writer)?;

        // Paths table
        writeln!(writer, "## Paths")?;
        writeln!(writer)?;

        if data.paths.is_empty() {
            writeln!(writer, "No paths found.")?;
            writeln!(writer)?;
        } else {
            writeln!(writer, "| # | Source | Sink | Length | Path |")?;
            writeln!(writer, "|---|--------|------|--------|------|")?;
            for (path_id, path) in data.numbered_paths() {
                writeln!(
                    writer,
                    "| {} | {} | {} | {} | {} |",
                    path_id,
                    Self::escape_cell(path.source()),
                    Self::escape_cell(path.sink()),
                    path.len(),
                    Self::escape_cell(&path.nodes().join(PATH_SEPARATOR))
                )?;
            }
            writeln!(writer)?;
        }

        // Footer
        writeln!(writer, "---")?;
        writeln!(writer, "*Generated by dagpath*")?;

        Ok(())
    }
}
