//! Constraint Graph Builder
//!
//! Turns group-level `before`/`after` declarations into concrete edges
//! between entry sequences. Groups are resolved against the full entry set on
//! every build, so a constraint also binds entries added after it.

use crate::domain::entities::Entry;
use crate::domain::value_objects::{GroupLabel, Sequence};
use std::collections::HashMap;
use tracing::trace;

/// Dependency graph over entry sequences.
///
/// Node `n` is the entry whose sequence is `n`. An edge `from -> to` means
/// `from` must be placed before `to`. Parallel edges are kept.
#[derive(Debug, Clone, Default)]
pub struct ConstraintGraph {
    /// Adjacency list: sequence -> [successor, successor, ...]
    successors: Vec<Vec<Sequence>>,
    /// Group of each node, for diagnostics
    groups: Vec<GroupLabel>,
    edge_count: usize,
}

impl ConstraintGraph {
    pub fn node_count(&self) -> usize {
        self.successors.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn successors(&self, node: Sequence) -> &[Sequence] {
        self.successors.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn group(&self, node: Sequence) -> Option<&GroupLabel> {
        self.groups.get(node)
    }

    /// Check if an edge exists from -> to
    pub fn has_edge(&self, from: Sequence, to: Sequence) -> bool {
        self.successors(from).contains(&to)
    }

    /// Invert the adjacency list: sequence -> nodes that must come first
    pub fn ancestors(&self) -> Vec<Vec<Sequence>> {
        let mut ancestors = vec![Vec::new(); self.successors.len()];
        for (node, children) in self.successors.iter().enumerate() {
            for &child in children {
                ancestors[child].push(node);
            }
        }
        ancestors
    }
}

/// Build the dependency graph for `entries`.
///
/// Entry sequences must be exactly `0..entries.len()`.
pub fn build_constraint_graph<T>(entries: &[Entry<T>]) -> ConstraintGraph {
    let node_count = entries.len();

    // Group membership, plus the symbolic before-edges and the reverse
    // after-map, in one pass
    let mut members: HashMap<&GroupLabel, Vec<Sequence>> = HashMap::new();
    let mut followers: HashMap<&GroupLabel, Vec<Sequence>> = HashMap::new();
    let no_targets: &[GroupLabel] = &[];
    let mut symbolic = vec![no_targets; node_count];
    let mut groups = vec![GroupLabel::unassociated(); node_count];

    for entry in entries {
        let seq = entry.sequence;
        members.entry(&entry.group).or_default().push(seq);
        symbolic[seq] = entry.before.as_slice();
        groups[seq] = entry.group.clone();

        for group in &entry.after {
            followers.entry(group).or_default().push(seq);
        }
    }

    // Expand before-edges into every current member of each named group
    let mut successors: Vec<Vec<Sequence>> = symbolic
        .iter()
        .map(|targets| {
            targets
                .iter()
                .filter_map(|group| members.get(group))
                .flatten()
                .copied()
                .collect()
        })
        .collect();

    // Members of a group precede everything that declared `after` it
    for (group, after_group) in &followers {
        let Some(group_members) = members.get(group) else {
            continue;
        };
        for &member in group_members {
            successors[member].extend_from_slice(after_group);
        }
    }

    let edge_count = successors.iter().map(Vec::len).sum();
    trace!(nodes = node_count, edges = edge_count, "Built constraint graph");

    ConstraintGraph {
        successors,
        groups,
        edge_count,
    }
}
