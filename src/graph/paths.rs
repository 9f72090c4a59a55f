//! Exhaustive source-to-sink path enumeration.

use petgraph::graph::NodeIndex;
use std::fmt;
use tracing::debug;

use super::validate::ValidatedDag;
use super::DependencyGraph;
use crate::parser::NodeId;

/// Separator used when rendering a path on one line.
pub const PATH_SEPARATOR: &str = " → ";

/// A path from a source to a sink.
///
/// Always holds at least one node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DagPath {
    nodes: Vec<NodeId>,
}

impl DagPath {
    pub(crate) fn new(nodes: Vec<NodeId>) -> Self {
        debug_assert!(!nodes.is_empty());
        Self { nodes }
    }

    /// The node ids in traversal order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// First node of the path.
    pub fn source(&self) -> &str {
        &self.nodes[0]
    }

    /// Last node of the path.
    pub fn sink(&self) -> &str {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Number of nodes on the path.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the path has no nodes (should not happen in practice).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl fmt::Display for DagPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.nodes.join(PATH_SEPARATOR))
    }
}

/// Depth-first enumerator of every path from a source to a sink.
///
/// Sources are visited in sorted order and children in the order their
/// edges were declared. A node with no outgoing edges is a sink: the path
/// ending there is emitted and the branch stops. Nothing is memoized, so the
/// output grows with every diamond in the graph.
///
/// Can only be created from a [`ValidatedDag`].
///
/// # Example
///
/// ```rust
/// use dagpath::graph::{DependencyGraph, PathEnumerator};
/// use dagpath::parser::Record;
///
/// let graph = DependencyGraph::from_records(&[
///     Record::new("left", ["top"]),
///     Record::new("right", ["top"]),
///     Record::new("bottom", ["left", "right"]),
/// ]);
/// let dag = graph.validate().unwrap();
///
/// let paths: Vec<String> = PathEnumerator::new(&dag)
///     .enumerate()
///     .iter()
///     .map(|p| p.to_string())
///     .collect();
/// assert_eq!(paths, vec!["top → left → bottom", "top → right → bottom"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathEnumerator<'g> {
    graph: &'g DependencyGraph,
}

impl<'g> PathEnumerator<'g> {
    /// Creates an enumerator over a validated graph.
    pub fn new(dag: &ValidatedDag<'g>) -> Self {
        Self { graph: dag.graph() }
    }

    /// Enumerates all paths, grouped by source in sorted order.
    pub fn enumerate(&self) -> Vec<DagPath> {
        let mut out = Vec::new();
        for source in self.graph.source_indices() {
            self.walk(source, &mut out);
        }
        debug!(paths = out.len(), "enumerated paths");
        out
    }

    /// Enumerates the paths starting at `source`.
    ///
    /// Returns nothing if `source` is unknown or has incoming edges.
    pub fn paths_from(&self, source: &str) -> Vec<DagPath> {
        let mut out = Vec::new();
        if let Some(idx) = self.graph.index_of(source) {
            if self.graph.is_source(source) {
                self.walk(idx, &mut out);
            }
        }
        out
    }

    /// Iterative DFS that visits children in the same order recursion would.
    fn walk(&self, start: NodeIndex, out: &mut Vec<DagPath>) {
        let mut path = vec![start];
        if self.graph.is_sink_index(start) {
            out.push(self.materialize(&path));
            return;
        }

        // (node, index of the next child to visit)
        let mut stack: Vec<(NodeIndex, usize)> = vec![(start, 0)];

        while let Some(frame) = stack.last_mut() {
            let children = self.graph.successor_indices(frame.0);
            let Some(&child) = children.get(frame.1) else {
                stack.pop();
                path.pop();
                continue;
            };
            frame.1 += 1;

            path.push(child);
            if self.graph.is_sink_index(child) {
                out.push(self.materialize(&path));
                path.pop();
            } else {
                stack.push((child, 0));
            }
        }
    }

    fn materialize(&self, path: &[NodeIndex]) -> DagPath {
        DagPath::new(
            path.iter()
                .map(|&idx| self.graph.name(idx).to_string())
                .collect(),
        )
    }
}
