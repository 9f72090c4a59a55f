//! Built-in sample dataset.
//!
//! Fourteen items with two sources (`B000`, `C001`) and one sink (`B005`).
//! Used by the CLI when no input file is given.

use super::types::Record;

/// Returns the sample records in their declared order.
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new("A001", ["C001"]),
        Record::new("A002", ["A001"]),
        Record::new("A003", ["A002", "B001"]),
        Record::new("A004", ["A003", "B003"]),
        Record::root("B000"),
        Record::new("B001", ["A001", "C001", "B000"]),
        Record::new("B002", ["A002", "B001", "C002"]),
        Record::new("B003", ["B002", "C003"]),
        Record::new("B004", ["B003"]),
        Record::new("B005", ["A004", "B004", "C004"]),
        Record::root("C001"),
        Record::new("C002", ["B001", "C001", "B000"]),
        Record::new("C003", ["A003", "B001", "C002"]),
        Record::new("C004", ["C003"]),
    ]
}
