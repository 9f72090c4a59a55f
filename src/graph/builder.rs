//! Construction of a [`DependencyGraph`] from records.

use tracing::debug;

use super::DependencyGraph;
use crate::parser::Record;

/// Accumulates records into a [`DependencyGraph`].
///
/// For every input `src` of a record `id` the builder adds the edge
/// `src -> id`. Ids that only ever appear as inputs still become nodes.
/// Malformed data is accepted as-is: a record id declared twice contributes
/// the edges of both declarations, and a repeated input adds a parallel edge.
///
/// # Example
///
/// ```rust
/// use dagpath::graph::GraphBuilder;
/// use dagpath::parser::Record;
///
/// let mut builder = GraphBuilder::new();
/// builder.add_record(&Record::new("app", ["lib"]));
/// let graph = builder.build();
///
/// assert!(graph.contains("lib"));
/// assert_eq!(graph.successors("lib"), vec!["app"]);
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: DependencyGraph,
}

impl GraphBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder sized for `records`.
    pub fn with_capacity(records: usize) -> Self {
        Self {
            graph: DependencyGraph::with_capacity(records, records),
        }
    }

    /// Adds a single record's node and its incoming edges.
    pub fn add_record(&mut self, record: &Record) -> &mut Self {
        let target = self.graph.add_node(&record.id);
        for input in &record.inputs {
            let source = self.graph.add_node(input);
            self.graph.add_edge(source, target);
        }
        self
    }

    /// Adds every record in order.
    ///
    /// All record ids are registered before any edge, so ids that only
    /// appear as inputs are registered after the declared items.
    pub fn add_records(&mut self, records: &[Record]) -> &mut Self {
        for record in records {
            self.graph.add_node(&record.id);
        }
        for record in records {
            self.add_record(record);
        }
        self
    }

    /// Finishes construction.
    pub fn build(self) -> DependencyGraph {
        debug!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "built dependency graph"
        );
        self.graph
    }
}

impl DependencyGraph {
    /// Builds a graph from an ordered list of records.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dagpath::graph::DependencyGraph;
    /// use dagpath::parser::sample_records;
    ///
    /// let graph = DependencyGraph::from_records(&sample_records());
    /// assert_eq!(graph.node_count(), 14);
    /// assert_eq!(graph.sources(), vec!["B000", "C001"]);
    /// assert_eq!(graph.sinks(), vec!["B005"]);
    /// ```
    pub fn from_records(records: &[Record]) -> Self {
        let mut builder = GraphBuilder::with_capacity(records.len());
        builder.add_records(records);
        builder.build()
    }
}
