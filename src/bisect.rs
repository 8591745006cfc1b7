//! Deterministic bisection of ordered containers.
//!
//! Both operations are total and stable: the first half receives
//! `ceil(n / 2)` entries, the second the remainder, and concatenating
//! the halves in order reproduces the input exactly. Inputs are never
//! mutated; the halves are fresh allocations.

use std::collections::BTreeMap;

/// Splits an ordered mapping into two halves by iteration order.
///
/// An empty mapping yields two empty mappings, never an error.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
///
/// let map = BTreeMap::from([("a", 1), ("b", 2), ("c", 3), ("d", 4), ("e", 5)]);
/// let (first, second) = date_kit::split_map(&map);
/// assert_eq!(first.len(), 3);
/// assert_eq!(second.len(), 2);
/// ```
pub fn split_map<K, V>(map: &BTreeMap<K, V>) -> (BTreeMap<K, V>, BTreeMap<K, V>)
where
    K: Ord + Clone,
    V: Clone,
{
    let mid = map.len().div_ceil(2);

    let mut first = BTreeMap::new();
    let mut second = BTreeMap::new();
    for (count, (key, value)) in map.iter().enumerate() {
        if count < mid {
            first.insert(key.clone(), value.clone());
        } else {
            second.insert(key.clone(), value.clone());
        }
    }
    (first, second)
}

/// Splits a sequence into two halves by position.
///
/// Duplicates are preserved positionally. An empty sequence yields two
/// empty sequences, never an error.
///
/// # Example
///
/// ```
/// let (first, second) = date_kit::split_slice(&[1, 2, 3, 4, 5]);
/// assert_eq!(first, vec![1, 2, 3]);
/// assert_eq!(second, vec![4, 5]);
/// ```
pub fn split_slice<T: Clone>(items: &[T]) -> (Vec<T>, Vec<T>) {
    let mid = items.len().div_ceil(2);
    let (first, second) = items.split_at(mid);
    (first.to_vec(), second.to_vec())
}
