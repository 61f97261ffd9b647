//! Topological Sort with insertion-order tie-break
//!
//! Kahn's algorithm where the ready set is a min-heap keyed by sequence: of
//! all entries whose ancestors are placed, the lowest sequence goes next.
//! O((V + E) log V), detects cycles.

use super::graph_builder::ConstraintGraph;
use crate::domain::errors::{CycleDetected, UnresolvedEntry};
use crate::domain::value_objects::{GroupLabel, Sequence};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Order every node of `graph`, or report that a cycle prevents it.
///
/// With `diagnostics` set, the error lists each unplaced node together with
/// the ancestors it was still waiting on.
pub fn topological_order(
    graph: &ConstraintGraph,
    diagnostics: bool,
) -> Result<Vec<Sequence>, CycleDetected> {
    let total = graph.node_count();
    let ancestors = graph.ancestors();

    // Unplaced ancestor count per node, parallel edges included
    let mut remaining: Vec<usize> = ancestors.iter().map(Vec::len).collect();

    let mut ready: BinaryHeap<Reverse<Sequence>> = remaining
        .iter()
        .enumerate()
        .filter(|(_, &count)| count == 0)
        .map(|(node, _)| Reverse(node))
        .collect();

    let mut order = Vec::with_capacity(total);
    let mut placed = vec![false; total];

    while let Some(Reverse(node)) = ready.pop() {
        placed[node] = true;
        order.push(node);

        for &child in graph.successors(node) {
            remaining[child] -= 1;
            if remaining[child] == 0 {
                ready.push(Reverse(child));
            }
        }
    }

    if order.len() < total {
        let unresolved = if diagnostics {
            unresolved_entries(graph, &ancestors, &placed)
        } else {
            Vec::new()
        };
        return Err(CycleDetected {
            placed: order.len(),
            total,
            unresolved,
        });
    }

    Ok(order)
}

fn unresolved_entries(
    graph: &ConstraintGraph,
    ancestors: &[Vec<Sequence>],
    placed: &[bool],
) -> Vec<UnresolvedEntry> {
    placed
        .iter()
        .enumerate()
        .filter(|(_, &done)| !done)
        .map(|(node, _)| {
            let mut waiting_on: Vec<Sequence> = ancestors[node]
                .iter()
                .copied()
                .filter(|&ancestor| !placed[ancestor])
                .collect();
            waiting_on.sort_unstable();
            waiting_on.dedup();

            UnresolvedEntry {
                sequence: node,
                group: graph
                    .group(node)
                    .cloned()
                    .unwrap_or_else(GroupLabel::unassociated),
                waiting_on,
            }
        })
        .collect()
}
