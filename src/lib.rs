//! A self-balancing (AVL) binary search tree ordered by a caller-supplied
//! three-way comparator.
//!
//! An [`AvlTree`] keeps its height logarithmic in the number of values by
//! rebalancing with at most two O(1) rotations per insert. Ordering is
//! entirely delegated to the caller: a [`Comparator`] returns a strict
//! three-way [`ComparisonResult`] for each (candidate, existing) pair, and
//! the variant alone decides the descent direction. Equal-ranked values are
//! retained rather than replaced, making the tree an ordered multiset.
//!
//! The surface is deliberately small - insertion plus read-only traversal of
//! the node structure from [`AvlTree::root()`]:
//!
//! ```
//! use triavl::{natural_order, AvlTree};
//!
//! let mut t = AvlTree::new(natural_order);
//! for v in [1, 2, 3, 4, 5, 6, 7] {
//!     t.insert(v);
//! }
//!
//! // Rotations along the way balanced the ascending run perfectly.
//! let root = t.root().unwrap();
//! assert_eq!(*root.value(), 4);
//! assert_eq!(root.height(), 3);
//! assert_eq!(root.balance(), 0);
//! ```

#![deny(rustdoc::broken_intra_doc_links, rust_2018_idioms)]
#![warn(
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::todo,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub
)]

mod cmp;
mod node;
mod tree;

#[cfg(test)]
mod test_utils;

pub use cmp::{natural_order, Comparator, ComparisonResult};
pub use node::Node;
pub use tree::AvlTree;
