//! Plain text export implementation.
//!
//! One numbered line per path, followed by a blank line and a summary line.
//! An empty listing still gets its own line before the blank one.
//!
//! ```text
//! 01. B000 → B001 → A003 → A004 → B005
//! 02. B000 → B001 → A003 → C003 → B003 → A004 → B005
//!
//! Total: 2 paths  | sources: [B000] | sinks: [B005]
//! ```

use super::{ExportData, Exporter};
use crate::graph::DagPath;
use std::io::{self, Write};

/// Text exporter implementation.
#[derive(Debug, Clone, Copy)]
pub struct TextExporter {
    include_summary: bool,
}

impl Default for TextExporter {
    fn default() -> Self {
        Self {
            include_summary: true,
        }
    }
}

impl TextExporter {
    /// Exporter for the saved listing: path lines only, no trailing newline.
    pub fn listing_only() -> Self {
        Self {
            include_summary: false,
        }
    }

    /// Formats one numbered path line, e.g. `03. a → b`.
    pub fn path_line(path_id: usize, path: &DagPath) -> String {
        format!("{:02}. {}", path_id, path)
    }

    /// Formats the trailing summary line.
    pub fn summary_line(data: &ExportData) -> String {
        format!(
            "Total: {} paths  | sources: [{}] | sinks: [{}]",
            data.path_count(),
            data.sources.join(", "),
            data.sinks.join(", ")
        )
    }
}

impl Exporter for TextExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let lines: Vec<String> = data
            .numbered_paths()
            .map(|(id, path)| Self::path_line(id, path))
            .collect();

        if !self.include_summary {
            return write!(writer, "{}", lines.join("\n"));
        }

        writeln!(writer, "{}", lines.join("\n"))?;
        writeln!(writer)?;
        writeln!(writer, "{}", Self::summary_line(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::diamond_data;
    use crate::graph::DependencyGraph;
    use crate::parser::sample_records;

    fn render(exporter: TextExporter, data: &ExportData) -> String {
        let mut output = Vec::new();
        exporter.export(data, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_text_export_basic() {
        let text = render(TextExporter::default(), &diamond_data());

        assert_eq!(
            text,
            "01. top → left → bottom\n\
             02. top → right → bottom\n\
             \n\
             Total: 2 paths  | sources: [top] | sinks: [bottom]\n"
        );
    }

    #[test]
    fn test_text_listing_only() {
        let text = render(TextExporter::listing_only(), &diamond_data());
        assert_eq!(text, "01. top → left → bottom\n02. top → right → bottom");
    }

    #[test]
    fn test_text_export_no_paths() {
        let text = render(TextExporter::default(), &ExportData::default());
        assert_eq!(text, "\n\nTotal: 0 paths  | sources: [] | sinks: []\n");

        let listing = render(TextExporter::listing_only(), &ExportData::default());
        assert!(listing.is_empty());
    }

    #[test]
    fn test_text_export_sample() {
        let graph = DependencyGraph::from_records(&sample_records());
        let dag = graph.validate().unwrap();
        let data = ExportData::new(&dag);

        let text = render(TextExporter::default(), &data);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 58 + 2);
        assert_eq!(lines[0], "01. B000 → B001 → A003 → A004 → B005");
        assert_eq!(lines[57], "58. C001 → C002 → C003 → C004 → B005");
        assert_eq!(
            lines[59],
            "Total: 58 paths  | sources: [B000, C001] | sinks: [B005]"
        );
    }

    #[test]
    fn test_path_line_padding() {
        let path = DagPath::new(vec!["x".to_string()]);
        assert_eq!(TextExporter::path_line(7, &path), "07. x");
        assert_eq!(TextExporter::path_line(123, &path), "123. x");
    }
}
