//! Functions over a tree that might not be there.
//!
//! Some callers hold an `Option<OrderedTree>` and want "no tree" to behave a particular way
//! rather than unwrapping first. These functions settle that behaviour in one place:
//!
//! - [`insert`] reports [`TreeError::InvalidContainer`] and [`is_empty`] answers
//!   [`Emptiness::InvalidContainer`], so "no tree" and "empty tree" can be told apart.
//! - Every read treats a missing tree as an empty one: [`contains`] is `false`, [`traverse`] is
//!   empty, [`sum`] and [`size`] are `0`.
//!
//! # Examples
//!
//! ```
//! use bst::handle;
//! use bst::{Emptiness, Order, TreeError};
//!
//! let mut tree = Some(handle::create());
//! assert_eq!(handle::is_empty(tree.as_ref()), Emptiness::Empty);
//!
//! handle::insert(tree.as_mut(), 40).unwrap();
//! assert!(handle::contains(tree.as_ref(), 40));
//!
//! handle::destroy(tree.take());
//! assert_eq!(handle::insert(tree.as_mut(), 40), Err(TreeError::InvalidContainer));
//! assert_eq!(handle::is_empty(tree.as_ref()), Emptiness::InvalidContainer);
//! assert_eq!(handle::traverse(tree.as_ref(), Order::InOrder), Vec::<i32>::new());
//! ```

use tracing::debug;

use crate::{Emptiness, Order, OrderedTree, TreeError};

/// A new, empty tree.
pub fn create() -> OrderedTree {
    OrderedTree::new()
}

/// Inserts `value`, or fails with [`TreeError::InvalidContainer`] when there is no tree.
pub fn insert(tree: Option<&mut OrderedTree>, value: i32) -> Result<(), TreeError> {
    match tree {
        Some(tree) => tree.insert(value),
        None => {
            debug!(value, "insert without a tree");
            Err(TreeError::InvalidContainer)
        }
    }
}

/// Whether `value` is in the tree. `false` when there is no tree.
pub fn contains(tree: Option<&OrderedTree>, value: i32) -> bool {
    tree.is_some_and(|tree| tree.contains(value))
}

/// Calls `sink` for every key in `order`. Never calls it when there is no tree.
pub fn for_each(tree: Option<&OrderedTree>, order: Order, sink: impl FnMut(i32)) {
    if let Some(tree) = tree {
        tree.for_each(order, sink);
    }
}

/// Every key in `order`. Empty when there is no tree.
pub fn traverse(tree: Option<&OrderedTree>, order: Order) -> Vec<i32> {
    tree.map(|tree| tree.traverse(order)).unwrap_or_default()
}

/// Sum of every key. `0` when there is no tree.
pub fn sum(tree: Option<&OrderedTree>) -> i64 {
    tree.map_or(0, OrderedTree::sum)
}

/// Number of keys. `0` when there is no tree.
pub fn size(tree: Option<&OrderedTree>) -> usize {
    tree.map_or(0, OrderedTree::len)
}

/// The three-way emptiness check: [`Emptiness::InvalidContainer`] when there is no tree,
/// otherwise whatever [`OrderedTree::emptiness`] says.
pub fn is_empty(tree: Option<&OrderedTree>) -> Emptiness {
    tree.map_or(Emptiness::InvalidContainer, OrderedTree::emptiness)
}

/// Releases the tree and all of its nodes. Does nothing when there is no tree.
pub fn destroy(tree: Option<OrderedTree>) {
    if let Some(tree) = tree {
        tree.destroy();
    }
}
