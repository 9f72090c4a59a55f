//! JSON export implementation.
//!
//! Exports enumerated paths in JSON format for machine-readable output.

use super::{ExportData, Exporter};
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Serializable path for JSON output.
#[derive(Serialize)]
struct JsonPath<'a> {
    path_id: usize,
    source: &'a str,
    sink: &'a str,
    length: usize,
    nodes: &'a [String],
}

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary<'a> {
    paths: usize,
    nodes: usize,
    edges: usize,
    sources: &'a [String],
    sinks: &'a [String],
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport<'a> {
    summary: JsonSummary<'a>,
    paths: Vec<JsonPath<'a>>,
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let paths = data
            .numbered_paths()
            .map(|(path_id, path)| JsonPath {
                path_id,
                source: path.source(),
                sink: path.sink(),
                length: path.len(),
                nodes: path.nodes(),
            })
            .collect();

        let export = JsonExport {
            summary: JsonSummary {
                paths: data.path_count(),
                nodes: data.node_count,
                edges: data.edge_count,
                sources: &data.sources,
                sinks: &data.sinks,
            },
            paths,
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}
