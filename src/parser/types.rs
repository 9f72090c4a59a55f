//! Shared types for dependency records.
//!
//! A record names one item and the items it takes as inputs. Records are
//! the only thing the graph layer needs from a data source.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a node in the dependency graph.
pub type NodeId = String;

/// A single item together with the ids it depends on.
///
/// The order of `inputs` is significant: it decides the order in which
/// dependents are attached to each input, which in turn decides the order
/// in which paths are enumerated.
///
/// # Example
///
/// ```
/// use dagpath::parser::types::Record;
///
/// let json = r#"{"ID": "A002", "inputs": ["A001"]}"#;
/// let record: Record = serde_json::from_str(json).unwrap();
/// assert_eq!(record.id, "A002");
/// assert_eq!(record.inputs, vec!["A001".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The item's own id.
    #[serde(alias = "ID")]
    pub id: NodeId,

    /// Ids this item depends on, in declaration order.
    #[serde(default)]
    pub inputs: Vec<NodeId>,
}

impl Record {
    /// Creates a new record.
    pub fn new<I, S>(id: impl Into<String>, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            inputs: inputs.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a record with no inputs.
    pub fn root(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inputs: Vec::new(),
        }
    }

    /// Returns true if this record declares no inputs.
    pub fn is_root(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inputs.is_empty() {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{} <- {}", self.id, self.inputs.join(", "))
        }
    }
}
