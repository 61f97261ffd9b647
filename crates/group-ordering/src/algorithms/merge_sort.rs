//! Merge support: weight interleaving and sequence renumbering

use crate::domain::entities::Entry;

/// Combine `base` with copies of every source, interleaved by sort weight.
///
/// Equal weights keep their combined order (base first, then each source in
/// turn). Sequences are reassigned to the resulting positions, so graph
/// identity after a merge follows the weight order.
pub fn merge_entries<'a, T, I>(base: &[Entry<T>], sources: I) -> Vec<Entry<T>>
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a [Entry<T>]>,
{
    let mut combined = base.to_vec();
    for source in sources {
        combined.extend_from_slice(source);
    }

    // `sort_by_key` is stable
    combined.sort_by_key(|entry| entry.sort_weight);
    renumber(&mut combined);
    combined
}

/// Assign each entry its position as sequence
pub fn renumber<T>(entries: &mut [Entry<T>]) {
    for (position, entry) in entries.iter_mut().enumerate() {
        entry.sequence = position;
    }
}
