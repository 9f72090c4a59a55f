//! Acyclicity check using Kahn's algorithm.
//!
//! A copy of the indegree table is seeded into a FIFO queue with every
//! zero-indegree node, in id order. Each node popped from the queue is
//! appended to the order and the indegree of each of its targets is
//! decremented once per edge; targets reaching zero join the queue. The graph
//! is acyclic iff every node ends up in the order.
//!
//! A successful check yields a [`ValidatedDag`], the only handle from which
//! paths can be enumerated.

use petgraph::graph::NodeIndex;
use std::collections::VecDeque;
use tracing::{debug, warn};

use super::error::{GraphError, GraphResult};
use super::paths::{DagPath, PathEnumerator};
use super::DependencyGraph;
use crate::parser::NodeId;

/// Runs Kahn's algorithm and returns the node indices it could order.
fn kahn_order(graph: &DependencyGraph) -> Vec<NodeIndex> {
    let mut in_degree = graph.indegrees().to_vec();
    let mut queue: VecDeque<NodeIndex> = graph.source_indices().into_iter().collect();
    let mut order = Vec::with_capacity(graph.node_count());

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for &target in graph.successor_indices(node) {
            let degree = &mut in_degree[target.index()];
            *degree -= 1;
            if *degree == 0 {
                queue.push_back(target);
            }
        }
    }

    order
}

/// Computes a topological order of `graph`.
///
/// On a cyclic graph the order is partial: nodes on or downstream of a
/// cycle are missing.
///
/// # Example
///
/// ```rust
/// use dagpath::graph::{topological_order, DependencyGraph};
/// use dagpath::parser::Record;
///
/// let graph = DependencyGraph::from_records(&[
///     Record::new("c", ["b"]),
///     Record::new("b", ["a"]),
/// ]);
/// assert_eq!(topological_order(&graph), vec!["a", "b", "c"]);
/// ```
pub fn topological_order(graph: &DependencyGraph) -> Vec<NodeId> {
    kahn_order(graph)
        .into_iter()
        .map(|idx| graph.name(idx).to_string())
        .collect()
}

/// Validates that `graph` is acyclic.
///
/// # Errors
///
/// Returns [`GraphError::CycleDetected`] if any node cannot be ordered.
///
/// # Example
///
/// ```rust
/// use dagpath::graph::{validate, DependencyGraph, GraphError};
/// use dagpath::parser::Record;
///
/// let graph = DependencyGraph::from_records(&[
///     Record::new("a", ["b"]),
///     Record::new("b", ["a"]),
/// ]);
///
/// match validate(&graph) {
///     Err(GraphError::CycleDetected { unresolved, .. }) => assert_eq!(unresolved, 2),
///     Ok(_) => panic!("expected a cycle"),
/// }
/// ```
pub fn validate(graph: &DependencyGraph) -> GraphResult<ValidatedDag<'_>> {
    let order = kahn_order(graph);
    let unresolved = graph.node_count() - order.len();

    if unresolved > 0 {
        let cycles = graph.detect_cycles();
        warn!(unresolved, cycles = cycles.len(), "cycle detected");
        return Err(GraphError::cycle(unresolved, cycles));
    }

    debug!(nodes = order.len(), "graph is acyclic");
    Ok(ValidatedDag { graph, order })
}

impl DependencyGraph {
    /// Validates this graph. See [`validate`].
    pub fn validate(&self) -> GraphResult<ValidatedDag<'_>> {
        validate(self)
    }

    /// Computes a (possibly partial) topological order. See [`topological_order`].
    pub fn topological_order(&self) -> Vec<NodeId> {
        topological_order(self)
    }
}

/// A graph that has passed the acyclicity check.
#[derive(Debug, Clone)]
pub struct ValidatedDag<'g> {
    graph: &'g DependencyGraph,
    order: Vec<NodeIndex>,
}

impl<'g> ValidatedDag<'g> {
    /// The underlying graph.
    pub fn graph(&self) -> &'g DependencyGraph {
        self.graph
    }

    /// The complete topological order.
    pub fn topological_order(&self) -> Vec<&'g str> {
        self.order.iter().map(|&idx| self.graph.name(idx)).collect()
    }

    /// Sorted source ids.
    pub fn sources(&self) -> Vec<&'g str> {
        self.graph.sources()
    }

    /// Sorted sink ids.
    pub fn sinks(&self) -> Vec<&'g str> {
        self.graph.sinks()
    }

    /// Enumerates every source-to-sink path. See [`PathEnumerator`].
    pub fn enumerate_paths(&self) -> Vec<DagPath> {
        PathEnumerator::new(self).enumerate()
    }

    /// Counts source-to-sink paths without materialising them.
    ///
    /// Walks the topological order backwards: a sink contributes one path,
    /// any other node the sum over its outgoing edges.
    pub fn count_paths(&self) -> u64 {
        let mut counts = vec![0u64; self.graph.node_count()];

        for &node in self.order.iter().rev() {
            counts[node.index()] = if self.graph.is_sink_index(node) {
                1
            } else {
                self.graph
                    .successor_indices(node)
                    .iter()
                    .fold(0u64, |acc, child| acc.saturating_add(counts[child.index()]))
            };
        }

        self.graph
            .source_indices()
            .iter()
            .fold(0u64, |acc, source| acc.saturating_add(counts[source.index()]))
    }
}
