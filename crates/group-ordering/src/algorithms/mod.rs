//! Algorithms module for group-constrained ordering
//!
//! Contains:
//! - Constraint graph builder
//! - Topological sort with insertion-order tie-break
//! - Merge interleaving

pub mod graph_builder;
pub mod merge_sort;
pub mod topo_sort;

pub use graph_builder::{build_constraint_graph, ConstraintGraph};
pub use merge_sort::merge_entries;
pub use topo_sort::topological_order;
