//! Stable key ordering for depth compositing.
//!
//! Painter's-algorithm compositing needs the same draw order every frame
//! when geometry does not change, so ties must keep their input order in
//! both directions.

use std::cmp::Ordering;

/// An index into some collection, paired with its sort key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyedIndex {
    pub index: usize,
    pub key: f32,
}

impl KeyedIndex {
    pub fn new(index: usize, key: f32) -> Self {
        Self { index, key }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Stable sort by key.
///
/// Equal keys keep their original relative order for both directions;
/// descending is not an ascending sort reversed. Keys are compared with
/// `f32::total_cmp`, so NaN sorts consistently instead of poisoning the order.
pub fn stable_sort_by_key(entries: &mut [KeyedIndex], order: SortOrder) {
    entries.sort_by(|a, b| compare(a.key, b.key, order));
}

/// Indices of `keys` in sorted order.
pub fn sorted_indices(keys: &[f32], order: SortOrder) -> Vec<usize> {
    let mut entries: Vec<KeyedIndex> = keys
        .iter()
        .enumerate()
        .map(|(index, &key)| KeyedIndex::new(index, key))
        .collect();
    stable_sort_by_key(&mut entries, order);
    entries.into_iter().map(|entry| entry.index).collect()
}

#[inline]
fn compare(a: f32, b: f32, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => a.total_cmp(&b),
        SortOrder::Descending => b.total_cmp(&a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn entries(keys: &[f32]) -> Vec<KeyedIndex> {
        keys.iter()
            .enumerate()
            .map(|(i, &k)| KeyedIndex::new(i, k))
            .collect()
    }

    #[test]
    fn test_descending_keeps_ties_in_order() {
        let mut items = entries(&[1.0, 5.0, 3.0, 5.0, 1.0, 3.0]);
        stable_sort_by_key(&mut items, SortOrder::Descending);

        let indices: Vec<usize> = items.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![1, 3, 2, 5, 0, 4]);
    }

    #[test]
    fn test_ascending_keeps_ties_in_order() {
        let indices = sorted_indices(&[2.0, 1.0, 2.0, 1.0], SortOrder::Ascending);
        assert_eq!(indices, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_random_descending_is_stable_permutation() {
        let mut rng = StdRng::seed_from_u64(11);
        // Few distinct keys so there are plenty of ties
        let keys: Vec<f32> = (0..500).map(|_| rng.gen_range(0..20) as f32).collect();

        let mut items = entries(&keys);
        stable_sort_by_key(&mut items, SortOrder::Descending);

        let mut seen: Vec<usize> = items.iter().map(|e| e.index).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..keys.len()).collect::<Vec<_>>());

        for pair in items.windows(2) {
            assert!(pair[0].key >= pair[1].key);
            if pair[0].key == pair[1].key {
                assert!(pair[0].index < pair[1].index);
            }
        }
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<KeyedIndex> = Vec::new();
        stable_sort_by_key(&mut empty, SortOrder::Descending);
        assert!(empty.is_empty());

        assert_eq!(sorted_indices(&[4.0], SortOrder::Descending), vec![0]);
    }
}
