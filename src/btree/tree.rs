//! The tree wrapper: root ownership and root growth.

use std::fmt;

use crate::btree::node::{InsertResult, Node, Promotion};
use crate::common::config::MIN_FAN_OUT;
use crate::common::{Error, Result};

/// An in-memory ordered-key B-tree with exact-median node splits.
///
/// The fan-out (maximum number of children per node, so `fan_out - 1` keys
/// per node) is fixed at construction. When an insertion overflows a node,
/// the node splits at the TRUE median of the keys that would result from the
/// insertion — not an approximate midpoint — which keeps the two halves as
/// balanced as an exact split can make them.
///
/// A tree always holds at least one key: it is constructed around an initial
/// key and never shrinks (there is no delete).
///
/// # Example
/// ```
/// use mbtree::BTree;
///
/// let mut tree = BTree::new(4, 3i64).unwrap();
/// tree.insert(1);
/// tree.insert(2);
/// tree.insert(4);
///
/// assert_eq!(tree.count(2), 1);
/// assert_eq!(tree.count(9), 0);
/// assert_eq!(tree.to_string(), "[[1], 2, [3, 4]]");
/// ```
#[derive(Debug)]
pub struct BTree<T> {
    /// The root node. Replaced (not mutated) only when it splits.
    root: Box<Node<T>>,

    /// Maximum children per node; immutable after construction.
    fan_out: usize,
}

impl<T: Ord> BTree<T> {
    /// Create a tree with the given fan-out, holding one initial key.
    ///
    /// # Errors
    /// `Error::InvalidFanOut` if `fan_out` is below [`MIN_FAN_OUT`].
    pub fn new(fan_out: usize, initial_key: T) -> Result<Self> {
        if fan_out < MIN_FAN_OUT {
            return Err(Error::InvalidFanOut(fan_out));
        }
        Ok(BTree {
            root: Box::new(Node::with_key(fan_out, initial_key)),
            fan_out,
        })
    }

    /// Insert a key.
    ///
    /// Returns `true` if the key was newly added and `false` if it was
    /// already present (the tree is left unchanged), in the style of
    /// `std::collections::BTreeSet::insert`.
    ///
    /// If the insertion bubbles a split all the way out of the root, a brand
    /// new root is allocated with the old root and the promoted sibling as
    /// its two children — the only way the tree ever grows in height.
    pub fn insert(&mut self, key: T) -> bool {
        match self.root.insert(key) {
            InsertResult::Duplicate => false,
            InsertResult::Done => true,
            InsertResult::Split(Promotion { key, right }) => {
                let old_root = std::mem::replace(
                    &mut self.root,
                    Box::new(Node::new(self.fan_out)),
                );
                *self.root = Node::new_root(self.fan_out, key, old_root, right);
                true
            }
        }
    }

    /// Number of occurrences of `key`: always 0 or 1, since duplicate
    /// inserts are rejected.
    pub fn count(&self, key: T) -> usize {
        self.root.count(&key)
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: T) -> bool {
        self.count(key) == 1
    }
}

impl<T> BTree<T> {
    /// The configured fan-out.
    pub fn fan_out(&self) -> usize {
        self.fan_out
    }

    /// Number of levels in the tree. A tree holding only its initial key has
    /// height 1; the height grows by exactly 1 each time the root splits.
    pub fn height(&self) -> usize {
        self.root.height()
    }
}

impl<T: fmt::Display> fmt::Display for BTree<T> {
    /// Bracketed in-order rendering of the whole tree, children nested
    /// between their flanking keys: `[[1, 2, 3], 4, [5, 6]]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
