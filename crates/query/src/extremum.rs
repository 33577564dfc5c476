//! Least / greatest element queries.
//!
//! Ties always resolve to the first occurrence, for minimum and maximum alike.
//! (`Iterator::max_by_key` keeps the *last* maximum, so it is not used here.)

use valuekit_core::{QueryError, QueryResult};

/// Element with the least key.
pub fn min_by_key<I, K, F>(items: I, mut key: F) -> QueryResult<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    pick_by_key(items, &mut key, |candidate, best| candidate < best)
}

/// Element with the greatest key.
pub fn max_by_key<I, K, F>(items: I, mut key: F) -> QueryResult<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    pick_by_key(items, &mut key, |candidate, best| candidate > best)
}

/// Least element.
pub fn min<I>(items: I) -> QueryResult<I::Item>
where
    I: IntoIterator,
    I::Item: Ord + Clone,
{
    min_by_key(items, |item| item.clone())
}

/// Greatest element.
pub fn max<I>(items: I) -> QueryResult<I::Item>
where
    I: IntoIterator,
    I::Item: Ord + Clone,
{
    max_by_key(items, |item| item.clone())
}

fn pick_by_key<I, K, F>(
    items: I,
    key: &mut F,
    replaces: impl Fn(&K, &K) -> bool,
) -> QueryResult<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
{
    let mut iter = items.into_iter();
    let Some(first) = iter.next() else {
        tracing::debug!("extremum requested from an empty sequence");
        return Err(QueryError::empty());
    };

    let mut best_key = key(&first);
    let mut best = first;
    for item in iter {
        let k = key(&item);
        if replaces(&k, &best_key) {
            best_key = k;
            best = item;
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_keep_first_occurrence() {
        let items = [("a", 1), ("b", 3), ("c", 1), ("d", 3)];
        assert_eq!(min_by_key(items, |p| p.1), Ok(("a", 1)));
        assert_eq!(max_by_key(items, |p| p.1), Ok(("b", 3)));
    }

    #[test]
    fn works_over_borrowed_items() {
        let words = vec!["pear".to_string(), "fig".to_string(), "banana".to_string()];
        assert_eq!(min_by_key(&words, |w| w.len()).map(String::as_str), Ok("fig"));
        assert_eq!(max_by_key(&words, |w| w.len()).map(String::as_str), Ok("banana"));
    }

    #[test]
    fn plain_min_and_max() {
        assert_eq!(min([4, 2, 9, 2]), Ok(2));
        assert_eq!(max([4, 2, 9, 2]), Ok(9));
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(min_by_key(&empty, |x| **x), Err(QueryError::EmptySequence));
        assert_eq!(max_by_key(&empty, |x| **x), Err(QueryError::EmptySequence));
        assert_eq!(min(empty.clone()), Err(QueryError::EmptySequence));
        assert_eq!(max(empty), Err(QueryError::EmptySequence));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the chosen element carries the extreme key, and no
            /// earlier element carries the same key.
            #[test]
            fn extremum_is_first_with_extreme_key(
                values in prop::collection::vec(-50i32..50, 1..40)
            ) {
                let lo = min_by_key(values.iter().enumerate(), |(_, v)| **v).unwrap();
                let hi = max_by_key(values.iter().enumerate(), |(_, v)| **v).unwrap();

                prop_assert_eq!(*lo.1, *values.iter().min().unwrap());
                prop_assert_eq!(*hi.1, *values.iter().max().unwrap());
                prop_assert_eq!(Some(lo.0), values.iter().position(|v| v == lo.1));
                prop_assert_eq!(Some(hi.0), values.iter().position(|v| v == hi.1));
            }
        }
    }
}
