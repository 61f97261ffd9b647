//! Error types for group-constrained ordering

use super::value_objects::{GroupLabel, Sequence};
use std::fmt;
use thiserror::Error;

/// All errors that can occur while ordering
#[derive(Debug, Error)]
pub enum OrderingError {
    /// Rejected during validation, before any state change
    #[error(transparent)]
    InvalidConstraint(#[from] ConstraintViolation),

    /// The constraints cannot all be satisfied
    #[error("{origin} created a dependencies error")]
    DependencyConflict {
        origin: ConflictOrigin,
        /// Entries left unplaced, empty when diagnostics are disabled
        unresolved: Vec<UnresolvedEntry>,
    },

    /// Entry count exceeded the configured limit
    #[error("Entry count exceeded: {count} > {max}")]
    TooManyEntries { count: usize, max: usize },

    /// Edge count exceeded the configured limit
    #[error("Edge count exceeded: {count} > {max}")]
    TooManyEdges { count: usize, max: usize },
}

impl OrderingError {
    pub fn is_dependency_conflict(&self) -> bool {
        matches!(self, OrderingError::DependencyConflict { .. })
    }

    pub fn is_invalid_constraint(&self) -> bool {
        matches!(self, OrderingError::InvalidConstraint(_))
    }
}

/// Constraint declarations that are rejected outright
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    #[error("Item cannot come before itself: {group}")]
    BeforeSelf { group: GroupLabel },

    #[error("Item cannot come before unassociated items")]
    BeforeUnassociated,

    #[error("Item cannot come after itself: {group}")]
    AfterSelf { group: GroupLabel },

    #[error("Item cannot come after unassociated items")]
    AfterUnassociated,
}

/// Operation that produced a dependency conflict
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictOrigin {
    /// An `add` call; `None` when the entries were unassociated
    Add { group: Option<GroupLabel> },
    Merge,
}

impl fmt::Display for ConflictOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictOrigin::Add { group: Some(group) } => {
                write!(f, "item added into group {group}")
            }
            ConflictOrigin::Add { group: None } => f.write_str("item"),
            ConflictOrigin::Merge => f.write_str("merge"),
        }
    }
}

/// An entry that could not be placed by the sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedEntry {
    pub sequence: Sequence,
    pub group: GroupLabel,
    /// Ancestors that were never placed
    pub waiting_on: Vec<Sequence>,
}

/// Raised by the sort when fewer entries were placed than exist
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cycle detected: {placed} of {total} entries placed")]
pub struct CycleDetected {
    pub placed: usize,
    pub total: usize,
    pub unresolved: Vec<UnresolvedEntry>,
}
