//! This crate exposes a small, unbalanced Binary Search Tree (BST) of
//! unique `i32` keys along with a few ways of walking it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as
//! the longest path from the root `Node` to a leaf `Node`). [`OrderedTree`] does
//! no rebalancing, so inserting keys in sorted order produces a tree whose height
//! equals its size. Every walk over the tree uses an explicit stack rather than
//! recursion so such trees are still safe to traverse and drop.
//!
//! BSTs naturally support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree ([`Order::InOrder`]).
//!
//! Trees are used directly through [`OrderedTree`], or through the functions in
//! [`handle`] when the caller may not have a tree at all.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod handle;
mod order;
mod tree;


pub use error::TreeError;
pub use order::Order;
pub use tree::{Emptiness, OrderedTree};
