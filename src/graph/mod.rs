//! Graph module for DAG validation and path enumeration.
//!
//! Records are turned into a [`DependencyGraph`] by the [`GraphBuilder`],
//! checked for cycles with Kahn's algorithm by [`validate`], and the
//! resulting [`ValidatedDag`] hands out every source-to-sink path through the
//! [`PathEnumerator`].
//!
//! # Example
//!
//! ```rust
//! use dagpath::graph::DependencyGraph;
//! use dagpath::parser::Record;
//!
//! let graph = DependencyGraph::from_records(&[
//!     Record::new("b", ["a"]),
//!     Record::new("c", ["b"]),
//! ]);
//!
//! let dag = graph.validate().unwrap();
//! let paths = dag.enumerate_paths();
//!
//! assert_eq!(paths.len(), 1);
//! assert_eq!(paths[0].to_string(), "a → b → c");
//! ```

mod builder;
mod dependency_graph;
mod error;
mod paths;
mod validate;

pub use builder::GraphBuilder;
pub use dependency_graph::{CycleInfo, DependencyGraph};
pub use error::{GraphError, GraphResult};
pub use paths::{DagPath, PathEnumerator, PATH_SEPARATOR};
pub use validate::{topological_order, validate, ValidatedDag};
