//! This crate exposes a Binary Search Tree (BST) that is built balanced
//! from a collection of values and can be rebalanced on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is
//! defined as the longest path from the root `Node` to a leaf `Node`). Building
//! the tree by repeatedly splitting the sorted values at their midpoint limits
//! the height to `O(lg N)`. Plain insertions and deletions don't keep it that
//! way, which is what [`Tree::is_balanced`] and [`Tree::rebalance`] are for.
//!
//! # Examples
//!
//! ```
//! use bst::Tree;
//!
//! let mut tree = Tree::default();
//! for x in 1..=7 {
//!     tree.insert(x);
//! }
//!
//! // Ascending inserts leave a chain.
//! assert_eq!(tree.height(), 7);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.level_order(), [&4, &2, &6, &1, &3, &5, &7]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
mod render;
mod tree;


pub use error::{Result, TreeError};
pub use node::{Direction, Node};
pub use tree::Tree;
