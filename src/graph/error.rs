//! Error types for graph validation.

use thiserror::Error;

use super::CycleInfo;

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur while validating a graph.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Topological sorting could not order every node.
    #[error("Cycle detected: not a DAG ({unresolved} node(s) could not be ordered; {})", describe_cycles(.cycles))]
    CycleDetected {
        /// Number of nodes missing from the topological order
        unresolved: usize,
        /// The strongly connected components responsible
        cycles: Vec<CycleInfo>,
    },
}

impl GraphError {
    /// Creates a cycle detected error.
    pub fn cycle(unresolved: usize, cycles: Vec<CycleInfo>) -> Self {
        Self::CycleDetected { unresolved, cycles }
    }

    /// Returns the cycles carried by this error.
    pub fn cycles(&self) -> &[CycleInfo] {
        match self {
            Self::CycleDetected { cycles, .. } => cycles,
        }
    }
}

fn describe_cycles(cycles: &[CycleInfo]) -> String {
    if cycles.is_empty() {
        return "no cycle members found".to_string();
    }
    let paths: Vec<String> = cycles.iter().map(CycleInfo::cycle_path).collect();
    format!("cycles: {}", paths.join("; "))
}
