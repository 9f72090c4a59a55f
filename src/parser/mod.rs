//! Record sources for dagpath.
//!
//! This module turns external data into the ordered list of [`Record`]s
//! the graph builder consumes.
//!
//! # Supported Sources
//!
//! - **JSON record files** - an array of `{"id", "inputs"}` objects
//! - **Built-in sample** - the fourteen-item demo dataset
//!
//! # Example
//!
//! ```
//! use dagpath::parser::{parse_str, sample_records};
//!
//! let records = parse_str(r#"[{"id": "b", "inputs": ["a"]}]"#).unwrap();
//! assert_eq!(records[0].inputs, vec!["a".to_string()]);
//!
//! assert_eq!(sample_records().len(), 14);
//! ```

pub mod records;
pub mod sample;
pub mod types;

pub use records::{parse_file, parse_str, ParseError, ParseResult};
pub use sample::sample_records;
pub use types::{NodeId, Record};
