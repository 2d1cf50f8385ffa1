//! Golden-layout scenario tests.
//!
//! A fixed 50-key insertion sequence must produce byte-exact bracketed
//! layouts for several fan-outs. The layouts pin down the exact-median split
//! rule: an approximate-median split produces a different (valid but
//! differently shaped) tree and fails these tests.

use mbtree::BTree;

/// The driver sequence: 34 seeds the tree, the rest are inserted in order.
const KEYS: [i64; 50] = [
    34, 13, 15, 11, 22, 1, 38, 28, 6, 9, 32, 8, 40, 37, 3, 16, 49, 44, 39, 19, 50, 17, 36, 20, 30,
    4, 35, 48, 12, 2, 14, 7, 46, 27, 47, 23, 10, 43, 42, 29, 24, 31, 21, 33, 26, 25, 41, 5, 18, 45,
];

fn build_tree(fan_out: usize) -> BTree<i64> {
    let mut tree = BTree::new(fan_out, KEYS[0]).unwrap();
    for &key in &KEYS[1..] {
        assert!(tree.insert(key), "key {} inserted twice", key);
    }
    tree
}

fn assert_membership(tree: &BTree<i64>) {
    for key in 1..=50i64 {
        assert_eq!(tree.count(key), 1, "didn't find {} but it should be there", key);
    }
    assert_eq!(tree.count(0), 0, "found 0 but it shouldn't be there");
    assert_eq!(tree.count(51), 0, "found 51 but it shouldn't be there");
}

#[test]
fn scenario_fan_out_4() {
    let tree = build_tree(4);
    assert_membership(&tree);
    assert_eq!(
        tree.to_string(),
        "[[[[1], 2, [3, 4, 5], 6, [7, 8], 9, [10, 11, 12]], 13, [[14, 15], 16, [17, 18], 19, \
         [20, 21]]], 22, [[[23], 24, [25, 26], 27, [28], 29, [30, 31]], 32, [[33], 34, [35, 36], \
         37, [38, 39]], 40, [[41, 42, 43], 44, [45, 46, 47], 48, [49, 50]]]]"
    );
}

#[test]
fn scenario_fan_out_5() {
    let tree = build_tree(5);
    assert_membership(&tree);
    assert_eq!(
        tree.to_string(),
        "[[[1, 2, 3], 4, [5, 6, 7, 8], 9, [10, 11], 12, [13, 14]], 15, [[16, 17, 18], 19, \
         [20, 21], 22, [23, 24, 25, 26], 27, [28, 29, 30, 31]], 32, [[33, 34], 35, [36, 37], 38, \
         [39, 40]], 41, [[42, 43], 44, [45, 46, 47], 48, [49, 50]]]"
    );
}

#[test]
fn scenario_fan_out_6() {
    let tree = build_tree(6);
    assert_membership(&tree);
    assert_eq!(
        tree.to_string(),
        "[[[1, 2, 3, 4, 5], 6, [7, 8], 9, [10, 11, 12], 13, [14, 15, 16]], 17, [[18, 19, 20, 21], \
         22, [23, 24, 25, 26, 27], 28, [29, 30, 31]], 32, [[33, 34, 35, 36], 37, [38, 39], 40, \
         [41, 42], 43, [44, 45, 46], 47, [48, 49, 50]]]"
    );
}

#[test]
fn scenario_membership_holds_across_fan_outs() {
    for fan_out in 2..=10 {
        let tree = build_tree(fan_out);
        assert_membership(&tree);
    }
}
