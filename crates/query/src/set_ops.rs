//! Keyed set operations over ordered sequences.
//!
//! Results keep the relative order of the input and contain at most one
//! element per key.

use core::hash::Hash;
use std::collections::HashSet;

/// First element seen for each distinct key.
pub fn distinct_by_key<I, K, F>(items: I, key: F) -> Vec<I::Item>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    let mut seen = HashSet::new();
    retain_unseen(items, &mut seen, key)
}

/// Distinct elements of `first`, then elements of `second` whose key has not
/// been seen yet.
pub fn union_by_key<A, B, K, F>(first: A, second: B, mut key: F) -> Vec<A::Item>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    K: Eq + Hash,
    F: FnMut(&A::Item) -> K,
{
    let mut seen = HashSet::new();
    let mut out = retain_unseen(first, &mut seen, &mut key);
    out.extend(retain_unseen(second, &mut seen, &mut key));
    out
}

/// Elements of `items` whose key is one of `keys`.
pub fn intersect_by_key<I, KS, K, F>(items: I, keys: KS, mut key: F) -> Vec<I::Item>
where
    I: IntoIterator,
    KS: IntoIterator<Item = K>,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    let mut wanted: HashSet<K> = keys.into_iter().collect();
    items
        .into_iter()
        .filter(|item| wanted.remove(&key(item)))
        .collect()
}

/// Elements of `items` whose key is none of `keys`.
pub fn except_by_key<I, KS, K, F>(items: I, keys: KS, key: F) -> Vec<I::Item>
where
    I: IntoIterator,
    KS: IntoIterator<Item = K>,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    let mut seen: HashSet<K> = keys.into_iter().collect();
    retain_unseen(items, &mut seen, key)
}

fn retain_unseen<I, K, F>(items: I, seen: &mut HashSet<K>, mut key: F) -> Vec<I::Item>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}
