//! Parser for JSON record files.
//!
//! A record file is a JSON array of objects, each with an `id` (or `ID`)
//! and an optional `inputs` array:
//!
//! ```json
//! [
//!   {"id": "A001", "inputs": ["C001"]},
//!   {"id": "C001", "inputs": []}
//! ]
//! ```

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use super::types::Record;

/// Errors that can occur while loading records.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read the file from disk.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse JSON content.
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a record file from a file path.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use dagpath::parser::records::parse_file;
///
/// let records = parse_file(Path::new("items.json")).unwrap();
/// println!("Loaded {} records", records.len());
/// ```
pub fn parse_file(path: &Path) -> ParseResult<Vec<Record>> {
    debug!(path = %path.display(), "reading record file");
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parses records from a JSON string.
///
/// Ids are taken as they are: empty or whitespace-only ids, duplicate ids and
/// repeated inputs are all accepted, and the graph builder accumulates their
/// edges.
///
/// # Example
///
/// ```
/// use dagpath::parser::records::parse_str;
///
/// let json = r#"[{"ID": "A001", "inputs": ["C001"]}, {"ID": "C001"}]"#;
/// let records = parse_str(json).unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].inputs, vec!["C001".to_string()]);
/// ```
pub fn parse_str(content: &str) -> ParseResult<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_str(content)?;
    debug!(count = records.len(), "parsed records");
    for record in &records {
        trace!(%record, "record");
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_RECORDS_JSON: &str = r#"[
        {"ID": "A001", "inputs": ["C001"]},
        {"ID": "A002", "inputs": ["A001"]},
        {"id": "B000", "inputs": []},
        {"id": "C001"}
    ]"#;

    #[test]
    fn test_parse_str_valid() {
        let records = parse_str(SAMPLE_RECORDS_JSON).unwrap();

        assert_eq!(records.len(), 4);
        assert_eq!(records[0], Record::new("A001", ["C001"]));
        assert_eq!(records[1], Record::new("A002", ["A001"]));
        assert!(records[2].is_root());
        assert!(records[3].is_root());
    }

    #[test]
    fn test_parse_str_empty_array() {
        let records = parse_str("[]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_str_invalid_json() {
        let result = parse_str("[{ invalid json }]");

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ParseError::JsonError(_)));
    }

    #[test]
    fn test_parse_str_not_an_array() {
        let result = parse_str(r#"{"id": "a"}"#);
        assert!(matches!(result.unwrap_err(), ParseError::JsonError(_)));
    }

    #[test]
    fn test_parse_str_missing_id() {
        let result = parse_str(r#"[{"inputs": ["a"]}]"#);
        assert!(matches!(result.unwrap_err(), ParseError::JsonError(_)));
    }

    #[test]
    fn test_parse_str_keeps_blank_ids() {
        let records = parse_str(r#"[{"id": "ok"}, {"id": "  "}, {"id": ""}]"#).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[1].id, "  ");
        assert_eq!(records[2].id, "");
    }

    #[test]
    fn test_parse_str_keeps_blank_input_ids() {
        let records = parse_str(r#"[{"id": "a", "inputs": ["b", ""]}]"#).unwrap();
        assert_eq!(records[0], Record::new("a", ["b", ""]));
    }

    #[test]
    fn test_duplicate_ids_are_accepted() {
        let json = r#"[{"id": "a", "inputs": ["b"]}, {"id": "a", "inputs": ["c"]}]"#;
        let records = parse_str(json).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_RECORDS_JSON.as_bytes()).unwrap();

        let records = parse_file(file.path()).unwrap();
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file(Path::new("/definitely/not/here.json"));
        assert!(matches!(result.unwrap_err(), ParseError::IoError(_)));
    }

    #[test]
    fn test_parse_error_display() {
        let io_err = ParseError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));
        assert!(io_err.to_string().contains("Failed to read file"));

        let json_err = parse_str("not json").unwrap_err();
        assert!(json_err.to_string().starts_with("Failed to parse JSON"));
    }
}
