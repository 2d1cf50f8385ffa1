//! Property tests over the public API.

use std::collections::BTreeSet;

use proptest::prelude::*;

use mbtree::BTree;

proptest! {
    /// Round-trip membership: every inserted key is found exactly once,
    /// keys never inserted are not found, across fan-outs and insertion
    /// orders.
    #[test]
    fn prop_round_trip_membership(
        keys in proptest::collection::vec(-1_000i64..1_000, 1..150),
        fan_out in 2usize..9,
    ) {
        let mut expected = BTreeSet::new();
        let mut iter = keys.iter().copied();
        let first = iter.next().unwrap();
        expected.insert(first);

        let mut tree = BTree::new(fan_out, first).unwrap();
        for key in iter {
            let newly = tree.insert(key);
            prop_assert_eq!(newly, expected.insert(key));
        }

        for key in -1_000i64..1_000 {
            let count = tree.count(key);
            prop_assert!(count <= 1);
            prop_assert_eq!(count, usize::from(expected.contains(&key)));
        }
    }

    /// The height never decreases and grows by at most one per insert (it
    /// grows only when the root itself splits).
    #[test]
    fn prop_height_grows_one_level_at_a_time(
        keys in proptest::collection::vec(0i64..10_000, 1..300),
        fan_out in 2usize..9,
    ) {
        let mut tree = BTree::new(fan_out, keys[0]).unwrap();
        let mut height = tree.height();
        prop_assert_eq!(height, 1);

        for &key in &keys[1..] {
            tree.insert(key);
            let now = tree.height();
            prop_assert!(now == height || now == height + 1);
            height = now;
        }
    }

    /// The rendered layout lists keys in strictly increasing order.
    #[test]
    fn prop_rendering_is_sorted_in_order(
        keys in proptest::collection::vec(0i64..10_000, 1..200),
        fan_out in 3usize..8,
    ) {
        let mut tree = BTree::new(fan_out, keys[0]).unwrap();
        for &key in &keys[1..] {
            tree.insert(key);
        }

        let rendered = tree.to_string();
        let flat: Vec<i64> = rendered
            .split(|c: char| !c.is_ascii_digit())
            .filter(|s| !s.is_empty())
            .map(|s| s.parse().unwrap())
            .collect();
        prop_assert!(flat.windows(2).all(|w| w[0] < w[1]), "layout {} not sorted", rendered);

        let expected: BTreeSet<i64> = keys.iter().copied().collect();
        prop_assert_eq!(flat.len(), expected.len());
    }
}

/// Reverse-sorted insertion is the worst case for the left-of-median split
/// path; make sure it stays correct.
#[test]
fn descending_insertion_order() {
    for fan_out in 2..=8 {
        let mut tree = BTree::new(fan_out, 500i64).unwrap();
        for key in (0..500i64).rev() {
            assert!(tree.insert(key));
        }
        for key in 0..=500i64 {
            assert_eq!(tree.count(key), 1);
        }
        assert_eq!(tree.count(501), 0);
    }
}
