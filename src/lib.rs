//! mbtree - An in-memory B-tree index with exact-median node splits.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                       mbtree                        │
//! ├─────────────────────────────────────────────────────┤
//! │  ┌───────────────────────────────────────────────┐  │
//! │  │              BTree (btree/tree)               │  │
//! │  │     root ownership + growth on root split     │  │
//! │  └───────────────────────────────────────────────┘  │
//! │                          ↓                          │
//! │  ┌───────────────────────────────────────────────┐  │
//! │  │              Node (btree/node)                │  │
//! │  │  slot array · median split · insert · count   │  │
//! │  └───────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (config constants, Error, Result)
//! - [`btree`] - The B-tree itself (Node + BTree)
//!
//! # Quick Start
//! ```
//! use mbtree::BTree;
//!
//! // A tree is born holding one key; fan-out 4 means up to 3 keys per node.
//! let mut tree = BTree::new(4, 34i64).unwrap();
//! for key in [13, 15, 11, 22, 1] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.count(15), 1);
//! assert_eq!(tree.count(2), 0);
//! println!("{}", tree); // bracketed in-order layout, e.g. [[1, 11], 13, [15, 22, 34]]
//! ```
//!
//! The tree is single-threaded by design: callers wanting concurrent access
//! wrap it (e.g. in a reader-writer lock) themselves.

pub mod btree;
pub mod common;

// Re-export commonly used items at crate root for convenience
pub use btree::BTree;
pub use common::config::{DEFAULT_FAN_OUT, MIN_FAN_OUT};
pub use common::{Error, Result};
