//! dagpath - DAG validation and exhaustive path enumeration
//!
//! This crate turns dependency records into a directed graph, checks that the
//! graph is acyclic, and lists every path from a source to a sink, with
//! text, CSV, JSON and Markdown reports.

pub mod config;
pub mod export;
pub mod graph;
pub mod logger;
pub mod parser;
