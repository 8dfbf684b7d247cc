//! Shared mode (most-frequent-value) selection.

use std::collections::HashMap;
use std::hash::Hash;

/// Returns the most frequent value and its count, breaking ties by
/// picking the smallest value under `T`'s own ordering. Returns `None`
/// for empty input.
pub fn mode<T>(values: impl IntoIterator<Item = T>) -> Option<(T, u64)>
where
    T: Eq + Hash + Ord,
{
    let mut counts: HashMap<T, u64> = HashMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .min_by(|(a, ca), (b, cb)| cb.cmp(ca).then_with(|| a.cmp(b)))
}

/// Like [`mode`], but ties are broken on a derived key rather than the
/// value itself. Used where the reported order differs from the value's
/// natural one, e.g. months compared by name instead of calendar position.
pub fn mode_by_key<T, K, F>(values: impl IntoIterator<Item = T>, key: F) -> Option<(T, u64)>
where
    T: Eq + Hash,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut counts: HashMap<T, u64> = HashMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .min_by(|(a, ca), (b, cb)| cb.cmp(ca).then_with(|| key(a).cmp(&key(b))))
}
