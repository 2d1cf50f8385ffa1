//! B-tree index structure.
//!
//! Two components, strictly nested by dependency:
//! - [`node`]: a single node — slot array, capacity queries, split logic,
//!   and the recursive insert/count paths.
//! - [`tree`]: owns the root node; handles root growth when the root itself
//!   splits.
//!
//! Control flow for an insert: [`BTree::insert`] calls the root node, which
//! recurses down to the correct leaf, inserts or splits there, and — on
//! split — returns a promoted (key, right-sibling) pair that each ancestor
//! either absorbs or splits on in turn. If the pair bubbles out of the root,
//! a brand-new two-child root is allocated.

mod node;
mod tree;

pub use tree::BTree;
