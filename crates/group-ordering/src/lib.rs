//! # Group Ordering
//!
//! Orders a growing collection of items into one sequence that respects
//! `before`/`after` constraints declared against named groups rather than
//! individual items. Every insertion re-runs a full topological sort, with
//! ties broken by insertion order.
//!
//! ## Architecture
//!
//! - **Domain**: Entries, group labels, add options, errors, invariants
//! - **Algorithms**: Constraint graph construction, topological sort, merge interleaving
//! - **Application**: `OrderingEngine`, which owns the entry log
//!
//! ## Example
//!
//! ```
//! use group_ordering::{AddOptions, OrderingEngine};
//!
//! let mut engine = OrderingEngine::new();
//! engine.add_one("a", AddOptions::new().group("a")).unwrap();
//! let nodes = engine
//!     .add_one("b", AddOptions::new().group("b").before("a"))
//!     .unwrap();
//!
//! assert_eq!(nodes, ["b", "a"]);
//! ```

pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;

pub use application::engine::OrderingEngine;
pub use config::OrderingConfig;
pub use domain::entities::AddOptions;
pub use domain::errors::{ConflictOrigin, ConstraintViolation, OrderingError, UnresolvedEntry};
pub use domain::value_objects::{GroupLabel, Sequence, SortWeight, UNASSOCIATED};
