//! Dependency graph storage using petgraph.
//!
//! Provides the immutable directed graph that the builder produces and the
//! validator and path enumerator read. Edges point from an input to the item
//! that consumes it, so sources are items nobody feeds and sinks are items
//! nobody consumes.

use petgraph::algo::{is_cyclic_directed, tarjan_scc};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet, VecDeque};

use crate::parser::NodeId;

/// A directed graph of items and their input relationships.
///
/// Alongside petgraph's `DiGraph` the graph keeps its own ordered adjacency
/// lists and indegree counts. The adjacency order is the order in which
/// edges were declared, and it decides the order paths are enumerated in.
///
/// Instances are produced by [`GraphBuilder`](super::GraphBuilder) and are
/// read-only afterwards.
///
/// # Example
///
/// ```rust
/// use dagpath::graph::DependencyGraph;
/// use dagpath::parser::Record;
///
/// let graph = DependencyGraph::from_records(&[
///     Record::new("b", ["a"]),
///     Record::new("c", ["a", "b"]),
/// ]);
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.successors("a"), vec!["b", "c"]);
/// assert_eq!(graph.sources(), vec!["a"]);
/// assert_eq!(graph.sinks(), vec!["c"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Mirror of the edges, used for cycle diagnostics
    graph: DiGraph<NodeId, ()>,
    /// Maps node ids to their indices for O(1) lookup
    node_indices: HashMap<NodeId, NodeIndex>,
    /// Outgoing targets per node, in declaration order
    adjacency: Vec<Vec<NodeIndex>>,
    /// Incoming edge count per node
    indegree: Vec<usize>,
}

impl DependencyGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new graph with pre-allocated capacity.
    pub(crate) fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(nodes, edges),
            node_indices: HashMap::with_capacity(nodes),
            adjacency: Vec::with_capacity(nodes),
            indegree: Vec::with_capacity(nodes),
        }
    }

    /// Adds a node, returning the existing index if the id is already known.
    pub(crate) fn add_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(id) {
            return idx;
        }

        let idx = self.graph.add_node(id.to_string());
        self.node_indices.insert(id.to_string(), idx);
        self.adjacency.push(Vec::new());
        self.indegree.push(0);
        idx
    }

    /// Records the edge `from -> to`.
    ///
    /// Repeated calls add parallel edges; each one is counted.
    pub(crate) fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        self.graph.add_edge(from, to, ());
        self.adjacency[from.index()].push(to);
        self.indegree[to.index()] += 1;
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Checks if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Checks if a node exists in the graph.
    pub fn contains(&self, id: &str) -> bool {
        self.node_indices.contains_key(id)
    }

    /// Returns every node id, sorted.
    pub fn node_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.graph.node_weights().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Returns the items that consume `id`, in declaration order.
    ///
    /// Unknown ids have no successors.
    pub fn successors(&self, id: &str) -> Vec<&str> {
        let Some(&idx) = self.node_indices.get(id) else {
            return Vec::new();
        };

        self.adjacency[idx.index()]
            .iter()
            .map(|&target| self.name(target))
            .collect()
    }

    /// Returns the number of incoming edges of `id`.
    pub fn indegree(&self, id: &str) -> Option<usize> {
        self.node_indices
            .get(id)
            .map(|&idx| self.indegree[idx.index()])
    }

    /// Returns the number of outgoing edges of `id`.
    pub fn outdegree(&self, id: &str) -> Option<usize> {
        self.node_indices
            .get(id)
            .map(|&idx| self.adjacency[idx.index()].len())
    }

    /// Checks whether the edge `from -> to` exists.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.node_indices.get(from), self.node_indices.get(to)) {
            (Some(&from), Some(&to)) => self.adjacency[from.index()].contains(&to),
            _ => false,
        }
    }

    /// Returns true if `id` has no incoming edges.
    pub fn is_source(&self, id: &str) -> bool {
        self.indegree(id) == Some(0)
    }

    /// Returns true if `id` has no outgoing edges.
    pub fn is_sink(&self, id: &str) -> bool {
        self.outdegree(id) == Some(0)
    }

    /// Returns the ids of all nodes with indegree 0, sorted.
    pub fn sources(&self) -> Vec<&str> {
        self.sorted_names(self.source_indices())
    }

    /// Returns the ids of all nodes with outdegree 0, sorted.
    pub fn sinks(&self) -> Vec<&str> {
        let sinks = self
            .graph
            .node_indices()
            .filter(|idx| self.adjacency[idx.index()].is_empty())
            .collect();
        self.sorted_names(sinks)
    }

    /// Checks if the graph contains cycles.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dagpath::graph::DependencyGraph;
    /// use dagpath::parser::Record;
    ///
    /// let graph = DependencyGraph::from_records(&[
    ///     Record::new("a", ["b"]),
    ///     Record::new("b", ["a"]),
    /// ]);
    /// assert!(graph.has_cycles());
    /// ```
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Detects and returns all cycles in the graph.
    ///
    /// Each strongly connected component with more than one node, or a single
    /// node with a self-loop, is reported as one cycle. The cycle starts at the
    /// component's smallest id and follows real edges back to it, taking the
    /// shortest way round. Cycles are sorted by their first id.
    pub fn detect_cycles(&self) -> Vec<CycleInfo> {
        let mut cycles: Vec<CycleInfo> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || self.graph.contains_edge(scc[0], scc[0]))
            .map(|scc| CycleInfo {
                nodes: self
                    .trace_cycle(&scc)
                    .into_iter()
                    .map(|idx| self.name(idx).to_string())
                    .collect(),
            })
            .collect();

        cycles.sort_by(|a, b| a.nodes.cmp(&b.nodes));
        cycles
    }

    /// Breadth-first search inside one component for the shortest cycle
    /// through its smallest id.
    fn trace_cycle(&self, component: &[NodeIndex]) -> Vec<NodeIndex> {
        let Some(&start) = component
            .iter()
            .min_by(|&&a, &&b| self.name(a).cmp(self.name(b)))
        else {
            return Vec::new();
        };
        let members: HashSet<NodeIndex> = component.iter().copied().collect();
        let mut parent: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        let mut queue = VecDeque::from([start]);

        while let Some(node) = queue.pop_front() {
            for &next in self.successor_indices(node) {
                if !members.contains(&next) {
                    continue;
                }
                if next == start {
                    let mut cycle = vec![node];
                    let mut current = node;
                    while let Some(&prev) = parent.get(&current) {
                        cycle.push(prev);
                        current = prev;
                    }
                    cycle.reverse();
                    return cycle;
                }
                if !parent.contains_key(&next) {
                    parent.insert(next, node);
                    queue.push_back(next);
                }
            }
        }

        // every member of a strongly connected component lies on a cycle
        vec![start]
    }

    pub(crate) fn name(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.node_indices.get(id).copied()
    }

    pub(crate) fn successor_indices(&self, idx: NodeIndex) -> &[NodeIndex] {
        &self.adjacency[idx.index()]
    }

    pub(crate) fn indegrees(&self) -> &[usize] {
        &self.indegree
    }

    pub(crate) fn is_sink_index(&self, idx: NodeIndex) -> bool {
        self.adjacency[idx.index()].is_empty()
    }

    /// Node indices with indegree 0, sorted by id.
    pub(crate) fn source_indices(&self) -> Vec<NodeIndex> {
        let mut sources: Vec<NodeIndex> = self
            .graph
            .node_indices()
            .filter(|idx| self.indegree[idx.index()] == 0)
            .collect();
        sources.sort_unstable_by(|&a, &b| self.name(a).cmp(self.name(b)));
        sources
    }

    fn sorted_names(&self, indices: Vec<NodeIndex>) -> Vec<&str> {
        let mut names: Vec<&str> = indices.into_iter().map(|idx| self.name(idx)).collect();
        names.sort_unstable();
        names
    }
}

/// Information about a detected cycle.
///
/// Contains the ids along one cycle of a strongly connected component, in
/// edge order. The closing edge from the last id back to the first is implied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleInfo {
    /// The node ids along the cycle
    pub nodes: Vec<String>,
}

impl CycleInfo {
    /// Returns the cycle as a walk that ends where it started.
    ///
    /// For example: "a -> b -> c -> a"
    pub fn cycle_path(&self) -> String {
        let Some(first) = self.nodes.first() else {
            return String::new();
        };
        format!("{} -> {}", self.nodes.join(" -> "), first)
    }

    /// Returns the number of nodes in the cycle.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the cycle is empty (should not happen in practice).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
