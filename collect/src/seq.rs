//! Order-preserving operations over slices.
//!
//! Closures are invoked exactly once per element, in input order.

use std::collections::HashSet;
use std::hash::Hash;

/// Build a new `Vec` by applying `f` to each element of `items`.
///
/// The output has the same length as the input and `out[i] == f(&items[i])`.
pub fn apply<T, V, F>(items: &[T], f: F) -> Vec<V>
where
    F: FnMut(&T) -> V,
{
    let mut out = Vec::with_capacity(items.len());
    out.extend(items.iter().map(f));
    out
}

/// Like [`apply`], but for transforms that can fail.
///
/// Stops at the first `Err` and returns it unchanged; elements after the
/// failing one are never visited and no partial output is returned.
pub fn try_apply<T, V, E, F>(items: &[T], f: F) -> Result<Vec<V>, E>
where
    F: FnMut(&T) -> Result<V, E>,
{
    items.iter().map(f).collect()
}

/// Keep the elements for which `include` returns `true`, in input order.
pub fn select<T, F>(items: &[T], mut include: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    items.iter().filter(|&item| include(item)).cloned().collect()
}

/// Keep the elements for which `exclude` returns `false`, in input order.
///
/// For the same predicate, `select` and `reject` partition the input.
pub fn reject<T, F>(items: &[T], mut exclude: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    items.iter().filter(|&item| !exclude(item)).cloned().collect()
}

/// Drop repeated elements, keeping each value at its first occurrence.
pub fn unique<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen: HashSet<&T> = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|&item| seen.insert(item))
        .cloned()
        .collect()
}

/// Drop elements whose `key` was already produced by an earlier element.
///
/// Useful when `T` itself is not hashable. `key` is called once per element.
pub fn unique_by<T, K, F>(items: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|&item| seen.insert(key(item)))
        .cloned()
        .collect()
}
