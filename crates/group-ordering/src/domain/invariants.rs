//! Domain invariants for group-constrained ordering
//!
//! Each check takes the entries in their final order.

use super::entities::Entry;
use super::value_objects::GroupLabel;
use std::collections::HashMap;

/// First and last position of each group in an ordered entry list
fn group_spans<T>(entries: &[Entry<T>]) -> HashMap<&GroupLabel, (usize, usize)> {
    let mut spans: HashMap<&GroupLabel, (usize, usize)> = HashMap::new();
    for (position, entry) in entries.iter().enumerate() {
        spans
            .entry(&entry.group)
            .and_modify(|span| span.1 = position)
            .or_insert((position, position));
    }
    spans
}

/// INVARIANT-1: Before Respected
/// An entry declaring `before: G` precedes every current member of G.
pub fn invariant_before_respected<T>(entries: &[Entry<T>]) -> bool {
    let spans = group_spans(entries);

    entries.iter().enumerate().all(|(position, entry)| {
        entry.before.iter().all(|group| match spans.get(group) {
            Some(&(first, _)) => position < first,
            None => true,
        })
    })
}

/// INVARIANT-2: After Respected
/// An entry declaring `after: G` follows every current member of G.
pub fn invariant_after_respected<T>(entries: &[Entry<T>]) -> bool {
    let spans = group_spans(entries);

    entries.iter().enumerate().all(|(position, entry)| {
        entry.after.iter().all(|group| match spans.get(group) {
            Some(&(_, last)) => position > last,
            None => true,
        })
    })
}

/// INVARIANT-3: Dense Sequences
/// Stored sequences are exactly `0..len`, each appearing once.
pub fn invariant_dense_sequences<T>(entries: &[Entry<T>]) -> bool {
    let mut seen = vec![false; entries.len()];
    for entry in entries {
        match seen.get_mut(entry.sequence) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

/// INVARIANT-4: Valid Constraints
/// No entry targets its own group or the unassociated sentinel.
pub fn invariant_valid_constraints<T>(entries: &[Entry<T>]) -> bool {
    entries.iter().all(|entry| {
        entry
            .before
            .iter()
            .chain(entry.after.iter())
            .all(|group| *group != entry.group && !group.is_unassociated())
    })
}
