//! Value objects for group-constrained ordering

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Node identity inside the dependency graph.
///
/// Assigned at insertion time and reassigned by merge. After every successful
/// mutation the stored sequences are exactly `0..len`.
pub type Sequence = usize;

/// Merge-only ordering hint.
pub type SortWeight = i64;

/// Label of the default group for entries that did not name one.
pub const UNASSOCIATED: &str = "?";

/// Label identifying a group of entries.
///
/// Constraints target groups, never individual entries. The unassociated
/// label is a valid group for an entry but can never be a constraint target.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupLabel(String);

impl GroupLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The sentinel group used when no group was supplied
    pub fn unassociated() -> Self {
        Self(UNASSOCIATED.to_owned())
    }

    pub fn is_unassociated(&self) -> bool {
        self.0 == UNASSOCIATED
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for GroupLabel {
    fn default() -> Self {
        Self::unassociated()
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for GroupLabel {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl From<&String> for GroupLabel {
    fn from(label: &String) -> Self {
        Self(label.clone())
    }
}

impl Borrow<str> for GroupLabel {
    fn borrow(&self) -> &str {
        &self.0
    }
}
