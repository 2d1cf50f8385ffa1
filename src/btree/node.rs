//! B-tree node: slot array, split logic, and the recursive insert/count paths.
//!
//! A node with fan-out `F` holds up to `F - 1` keys. Each key slot carries the
//! child to its LEFT; the one child not paired with any key lives in
//! `rightmost`. Children are exclusively owned (`Box`), so every split moves
//! ownership of a contiguous run of children into the new sibling via
//! `Option::take` — a child pointer is never duplicated.
//!
//! ```text
//!          slots[0]      slots[1]      slots[2]
//!        ┌──────┬───┐  ┌──────┬───┐  ┌──────┬───┐  ┌───────────┐
//!        │ left │ k0│  │ left │ k1│  │ left │ k2│  │ rightmost │
//!        └──┬───┴───┘  └──┬───┴───┘  └──┬───┴───┘  └─────┬─────┘
//!           ▼             ▼             ▼                 ▼
//!        keys < k0    k0 <= keys    k1 <= keys        keys >= k2
//!                        < k1          < k2
//! ```

use std::fmt;

use crate::common::config::MIN_FAN_OUT;

/// One pivot slot: an optional key plus the (optional) child to its left.
///
/// Present keys always occupy a prefix of the slot array; a present key's
/// left child is present iff the node is internal.
#[derive(Debug)]
pub(crate) struct Slot<T> {
    pub(crate) key: Option<T>,
    pub(crate) left: Option<Box<Node<T>>>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot { key: None, left: None }
    }
}

/// A key and the new right sibling produced by a split, to be absorbed by the
/// parent (or to become a fresh root at the tree level).
#[derive(Debug)]
pub(crate) struct Promotion<T> {
    pub(crate) key: T,
    pub(crate) right: Box<Node<T>>,
}

/// Outcome of an insert at one level of the tree.
#[derive(Debug)]
pub(crate) enum InsertResult<T> {
    /// The key was already present; nothing changed.
    Duplicate,
    /// Inserted without overflowing this node.
    Done,
    /// Inserted; this node split and the caller must absorb the promotion.
    Split(Promotion<T>),
}

/// A single B-tree node.
///
/// `slots.len()` is always `fan_out - 1`; the fan-out is fixed per tree at
/// construction and never changes afterwards.
#[derive(Debug)]
pub(crate) struct Node<T> {
    slots: Vec<Slot<T>>,
    rightmost: Option<Box<Node<T>>>,
}

// ============================================================================
// Structure queries and slot plumbing (no ordering required)
// ============================================================================

impl<T> Node<T> {
    /// Create an empty node for the given fan-out.
    pub(crate) fn new(fan_out: usize) -> Self {
        assert!(fan_out >= MIN_FAN_OUT, "fan_out must be >= {}", MIN_FAN_OUT);
        Node {
            slots: (0..fan_out - 1).map(|_| Slot::default()).collect(),
            rightmost: None,
        }
    }

    /// Create a leaf holding a single key (the initial root).
    pub(crate) fn with_key(fan_out: usize, key: T) -> Self {
        let mut node = Node::new(fan_out);
        node.slots[0].key = Some(key);
        node
    }

    /// Create the replacement root after the old root split.
    ///
    /// The new root holds exactly one key: `child(0)` is the old root,
    /// `child(1)` the promoted right sibling.
    pub(crate) fn new_root(fan_out: usize, key: T, left: Box<Node<T>>, right: Box<Node<T>>) -> Self {
        let mut node = Node::new(fan_out);
        node.slots[0].key = Some(key);
        node.slots[0].left = Some(left);
        *node.child_slot_mut(1) = Some(right);
        node
    }

    /// The fan-out this node was built for.
    fn fan_out(&self) -> usize {
        self.slots.len() + 1
    }

    /// Whether a key is present at slot `index`.
    ///
    /// Indices at or past `fan_out - 1` are simply "not present" rather than
    /// an error, which lets the search loop run off the end of a full node.
    pub(crate) fn pivot_is_present(&self, index: usize) -> bool {
        index < self.slots.len() && self.slots[index].key.is_some()
    }

    /// The key at slot `index`.
    ///
    /// # Panics
    /// Panics if the index is out of range or the slot is empty. Both are
    /// internal logic errors, not runtime conditions.
    pub(crate) fn pivot(&self, index: usize) -> &T {
        self.slots[index].key.as_ref().expect("pivot slot is empty")
    }

    /// The child at `index`, where `fan_out - 1` maps to `rightmost` and any
    /// smaller index to the paired left-child slot.
    pub(crate) fn child(&self, index: usize) -> Option<&Node<T>> {
        if index == self.slots.len() {
            self.rightmost.as_deref()
        } else {
            self.slots[index].left.as_deref()
        }
    }

    /// Mutable ownership slot for the child at `index`.
    ///
    /// # Panics
    /// Panics if `index > fan_out - 1`.
    fn child_slot_mut(&mut self, index: usize) -> &mut Option<Box<Node<T>>> {
        assert!(index <= self.slots.len(), "child index {} out of range", index);
        if index == self.slots.len() {
            &mut self.rightmost
        } else {
            &mut self.slots[index].left
        }
    }

    /// Whether this node must split before it can accept another key.
    pub(crate) fn is_full(&self) -> bool {
        self.pivot_is_present(self.slots.len() - 1)
    }

    /// A node is a leaf iff its first child is absent; leaves have no
    /// children at all.
    pub(crate) fn is_leaf(&self) -> bool {
        self.child(0).is_none()
    }

    /// Number of levels below (and including) this node.
    pub(crate) fn height(&self) -> usize {
        match self.child(0) {
            None => 1,
            Some(child) => 1 + child.height(),
        }
    }

    /// Move every `(key, left-child)` pair from `from` through the last slot,
    /// plus the rightmost child, into a new node starting at position 0.
    ///
    /// This is the "right half becomes a sibling" step of a split. The moved
    /// slots are left empty in `self`, so ownership of the children transfers
    /// rather than being duplicated.
    fn move_tail(&mut self, from: usize) -> Box<Node<T>> {
        let mut node = Box::new(Node::new(self.fan_out()));
        for i in from..self.slots.len() {
            node.slots[i - from] = Slot {
                key: self.slots[i].key.take(),
                left: self.slots[i].left.take(),
            };
        }
        let tail = self.slots.len() - from;
        *node.child_slot_mut(tail) = self.rightmost.take();
        node
    }

    /// Insert `key` at `index` in a node with room to spare, installing
    /// `right` (if any) as the child to the key's right.
    ///
    /// Keys at `index` and beyond step one slot to the right. The new key
    /// takes over the left child already sitting at `index`, so children only
    /// shift from `index + 1` onward.
    fn insert_into_non_full(&mut self, index: usize, key: T, right: Option<Box<Node<T>>>) {
        debug_assert!(!self.is_full());
        for i in ((index + 2)..=self.slots.len()).rev() {
            let moved = self.child_slot_mut(i - 1).take();
            *self.child_slot_mut(i) = moved;
        }
        for i in ((index + 1)..self.slots.len()).rev() {
            self.slots[i].key = self.slots[i - 1].key.take();
        }
        self.slots[index].key = Some(key);
        if let Some(right) = right {
            let slot = self.child_slot_mut(index + 1);
            debug_assert!(slot.is_none());
            *slot = Some(right);
        }
    }

    /// Insert `key` at `index` in a full node by splitting it.
    ///
    /// With `middle = (fan_out - 1) / 2`, the promoted key is always the exact
    /// median of the `fan_out` keys that conceptually exist after the
    /// insertion — three cases on where the new key lands:
    ///
    /// - `index < middle`: the key at `middle - 1` is promoted, the tail from
    ///   `middle` becomes the sibling, and the new key goes into the shrunken
    ///   original node.
    /// - `index == middle`: the new key itself is promoted; a carried right
    ///   child becomes the sibling's first child while the child that split
    ///   stays behind as our last child.
    /// - `index > middle`: the key at `middle` is promoted, the tail from
    ///   `middle + 1` becomes the sibling, and the new key goes into the
    ///   sibling at `index - middle - 1`.
    fn insert_into_full(&mut self, index: usize, key: T, right: Option<Box<Node<T>>>) -> Promotion<T> {
        debug_assert!(self.is_full());
        let middle = self.slots.len() / 2;

        if index < middle {
            let promoted = self.slots[middle - 1].key.take().expect("full node missing pivot");
            let sibling = self.move_tail(middle);
            self.insert_into_non_full(index, key, right);
            Promotion { key: promoted, right: sibling }
        } else if index == middle {
            let mut sibling = self.move_tail(middle);
            let kept = sibling.child_slot_mut(0).take();
            *self.child_slot_mut(middle) = kept;
            if let Some(right) = right {
                *sibling.child_slot_mut(0) = Some(right);
            }
            Promotion { key, right: sibling }
        } else {
            let promoted = self.slots[middle].key.take().expect("full node missing pivot");
            let mut sibling = self.move_tail(middle + 1);
            sibling.insert_into_non_full(index - middle - 1, key, right);
            Promotion { key: promoted, right: sibling }
        }
    }
}

// ============================================================================
// Ordered operations: search, insert, count
// ============================================================================

impl<T: Ord> Node<T> {
    /// Index of the first present key `>= key`; equivalently, the number of
    /// present keys strictly less than `key`. Present keys are sorted, so this
    /// is both the insertion position and the descent child index.
    fn search_index(&self, key: &T) -> usize {
        self.slots
            .iter()
            .take_while(|slot| slot.key.as_ref().is_some_and(|k| key > k))
            .count()
    }

    /// Insert `key` into this subtree.
    ///
    /// A key that is already present leaves the tree unchanged
    /// ([`InsertResult::Duplicate`]). Otherwise the key lands in the correct
    /// leaf; any overflow splits the leaf and bubbles a [`Promotion`] upward,
    /// which each ancestor absorbs in place or splits on in turn.
    pub(crate) fn insert(&mut self, key: T) -> InsertResult<T> {
        let index = self.search_index(&key);
        if self.pivot_is_present(index) && *self.pivot(index) == key {
            return InsertResult::Duplicate;
        }

        if self.is_leaf() {
            return if self.is_full() {
                InsertResult::Split(self.insert_into_full(index, key, None))
            } else {
                self.insert_into_non_full(index, key, None);
                InsertResult::Done
            };
        }

        let child = self
            .child_slot_mut(index)
            .as_mut()
            .expect("internal node missing child on descent");
        match child.insert(key) {
            InsertResult::Split(Promotion { key, right }) => {
                if self.is_full() {
                    InsertResult::Split(self.insert_into_full(index, key, Some(right)))
                } else {
                    self.insert_into_non_full(index, key, Some(right));
                    InsertResult::Done
                }
            }
            other => other,
        }
    }

    /// Number of occurrences of `key` in this subtree: 0 or 1, since
    /// duplicate inserts are rejected.
    pub(crate) fn count(&self, key: &T) -> usize {
        let index = self.search_index(key);
        if self.pivot_is_present(index) && self.pivot(index) == key {
            1
        } else if self.is_leaf() {
            0
        } else {
            self.child(index)
                .expect("internal node missing child on descent")
                .count(key)
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

impl<T: fmt::Display> fmt::Display for Node<T> {
    /// Bracketed in-order rendering: each child appears before the key that
    /// follows it, e.g. `[[1, 2], 3, [4]]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut first = true;
        let mut sep = |f: &mut fmt::Formatter<'_>, first: &mut bool| -> fmt::Result {
            if *first {
                *first = false;
                Ok(())
            } else {
                f.write_str(", ")
            }
        };
        for slot in &self.slots {
            if let Some(child) = &slot.left {
                sep(f, &mut first)?;
                write!(f, "{}", child)?;
            }
            if let Some(key) = &slot.key {
                sep(f, &mut first)?;
                write!(f, "{}", key)?;
            }
        }
        if let Some(child) = &self.rightmost {
            sep(f, &mut first)?;
            write!(f, "{}", child)?;
        }
        f.write_str("]")
    }
}
