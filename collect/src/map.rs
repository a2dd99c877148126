//! Materialize the keys or values of a `HashMap`.
//!
//! Output order is whatever the map yields and must not be relied upon; only
//! the set of keys (or multiset of values) is guaranteed.

use std::collections::HashMap;

/// Collect every key of `map` into a `Vec`, each exactly once.
pub fn keys<K, V, S>(map: &HashMap<K, V, S>) -> Vec<K>
where
    K: Clone,
{
    map.keys().cloned().collect()
}

/// Collect every value of `map` into a `Vec`, one per entry.
///
/// Equal values stored under different keys are all kept.
pub fn values<K, V, S>(map: &HashMap<K, V, S>) -> Vec<V>
where
    V: Clone,
{
    map.values().cloned().collect()
}
