//! Ordering Engine
//!
//! Holds the entry log and re-derives the full ordering on every mutation.

use crate::algorithms::{build_constraint_graph, merge_entries, topological_order};
use crate::config::OrderingConfig;
use crate::domain::entities::{AddOptions, Entry};
use crate::domain::errors::{ConflictOrigin, OrderingError};
use crate::domain::invariants;
use crate::domain::value_objects::Sequence;

use tracing::{debug, warn};

/// Ordering Engine
///
/// Every `add` or `merge`:
/// 1. Validate input
/// 2. Build the constraint graph over all entries
/// 3. Run the topological sort
/// 4. Replace the visible ordering
///
/// Both operations are atomic: on any error the engine is left exactly as it
/// was before the call.
#[derive(Debug, Clone)]
pub struct OrderingEngine<T> {
    config: OrderingConfig,
    /// Entries in their current sorted order
    entries: Vec<Entry<T>>,
    /// Payloads parallel to `entries`
    nodes: Vec<T>,
}

impl<T> OrderingEngine<T> {
    /// Create an empty engine with default config
    pub fn new() -> Self {
        Self::with_config(OrderingConfig::default())
    }

    /// Create an empty engine with custom config
    pub fn with_config(config: OrderingConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
            nodes: Vec::new(),
        }
    }

    pub fn config(&self) -> &OrderingConfig {
        &self.config
    }

    /// Payloads in their current order
    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_capacity(&self, count: usize) -> Result<(), OrderingError> {
        match self.config.max_entries {
            Some(max) if count > max => {
                warn!(count, max, "Entry limit exceeded");
                Err(OrderingError::TooManyEntries { count, max })
            }
            _ => Ok(()),
        }
    }

    /// Sort `entries`, returning their sequences in placement order
    fn resolve(
        &self,
        entries: &[Entry<T>],
        origin: ConflictOrigin,
    ) -> Result<Vec<Sequence>, OrderingError> {
        let graph = build_constraint_graph(entries);

        if let Some(max) = self.config.max_edge_count {
            if graph.edge_count() > max {
                warn!(count = graph.edge_count(), max, "Edge limit exceeded");
                return Err(OrderingError::TooManyEdges {
                    count: graph.edge_count(),
                    max,
                });
            }
        }

        topological_order(&graph, self.config.cycle_diagnostics).map_err(|cycle| {
            warn!(
                placed = cycle.placed,
                total = cycle.total,
                origin = %origin,
                "Dependency conflict"
            );
            OrderingError::DependencyConflict {
                origin,
                unresolved: cycle.unresolved,
            }
        })
    }
}

impl<T: Clone> OrderingEngine<T> {
    /// Add payloads sharing one set of options, then re-sort everything.
    ///
    /// Returns the new ordering. Fails without changing state if the options
    /// are invalid or the new entries make the constraints unsatisfiable.
    pub fn add<I>(&mut self, nodes: I, options: AddOptions) -> Result<&[T], OrderingError>
    where
        I: IntoIterator<Item = T>,
    {
        options.validate()?;

        let nodes: Vec<T> = nodes.into_iter().collect();
        let added = nodes.len();
        let previous_len = self.entries.len();
        self.check_capacity(previous_len + added)?;

        for (offset, node) in nodes.into_iter().enumerate() {
            self.entries
                .push(Entry::new(previous_len + offset, node, &options));
        }

        let origin = ConflictOrigin::Add {
            group: (!options.group.is_unassociated()).then(|| options.group.clone()),
        };
        let order = match self.resolve(&self.entries, origin) {
            Ok(order) => order,
            Err(err) => {
                self.entries.truncate(previous_len);
                return Err(err);
            }
        };

        let entries = std::mem::take(&mut self.entries);
        self.materialize(entries, &order);

        debug!(
            added,
            entries = self.entries.len(),
            group = %options.group,
            "Added entries"
        );
        Ok(&self.nodes)
    }

    /// Add a single payload
    pub fn add_one(&mut self, node: T, options: AddOptions) -> Result<&[T], OrderingError> {
        self.add(std::iter::once(node), options)
    }

    /// Merge copies of other engines' entries into this one.
    ///
    /// Accepts engines or `Option`s of engines; `None` is skipped. Combined
    /// entries are stably interleaved by sort weight and renumbered before
    /// the sort. Sources are never modified.
    pub fn merge<'a, I, E>(&mut self, others: I) -> Result<&[T], OrderingError>
    where
        I: IntoIterator<Item = E>,
        E: Into<Option<&'a OrderingEngine<T>>>,
        T: 'a,
    {
        let sources: Vec<&'a OrderingEngine<T>> = others
            .into_iter()
            .filter_map(Into::<Option<&'a OrderingEngine<T>>>::into)
            .collect();

        let incoming: usize = sources.iter().map(|source| source.len()).sum();
        self.check_capacity(self.entries.len() + incoming)?;

        let merged = merge_entries(
            &self.entries,
            sources.iter().map(|source| source.entries.as_slice()),
        );
        let order = self.resolve(&merged, ConflictOrigin::Merge)?;
        self.materialize(merged, &order);

        debug!(
            sources = sources.len(),
            incoming,
            entries = self.entries.len(),
            "Merged engines"
        );
        Ok(&self.nodes)
    }

    /// Store `entries` in `order` and refresh the payload list
    fn materialize(&mut self, entries: Vec<Entry<T>>, order: &[Sequence]) {
        let mut by_sequence: Vec<Option<Entry<T>>> = (0..entries.len()).map(|_| None).collect();
        for entry in entries {
            let sequence = entry.sequence;
            by_sequence[sequence] = Some(entry);
        }

        self.entries = order
            .iter()
            .filter_map(|&sequence| by_sequence[sequence].take())
            .collect();
        self.nodes = self
            .entries
            .iter()
            .map(|entry| entry.payload.clone())
            .collect();

        debug_assert!(invariants::invariant_dense_sequences(&self.entries));
        debug_assert!(invariants::invariant_before_respected(&self.entries));
        debug_assert!(invariants::invariant_after_respected(&self.entries));
        debug_assert!(invariants::invariant_valid_constraints(&self.entries));
    }
}

impl<T> Default for OrderingEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a OrderingEngine<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
