//! Stable grouping primitive.
//!
//! Splits a slice into maximal runs of equal key in a single
//! left-to-right pass. Order is never changed, so every run is a
//! contiguous subslice of the input and concatenating the runs
//! reproduces it exactly.

/// Groups consecutive items sharing a key.
///
/// A new run starts whenever `key_fn` yields a key different from the
/// previous item's. O(n), stable, empty input yields no runs.
pub fn group_runs<T, K, F>(items: &[T], key_fn: F) -> Vec<(K, &[T])>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut runs = Vec::new();
    let Some(first) = items.first() else {
        return runs;
    };

    let mut current = key_fn(first);
    let mut start = 0;
    for (i, item) in items.iter().enumerate().skip(1) {
        let key = key_fn(item);
        if key != current {
            runs.push((std::mem::replace(&mut current, key), &items[start..i]));
            start = i;
        }
    }
    runs.push((current, &items[start..]));
    runs
}
