//! Errors reported by [`OrderedTree`][crate::OrderedTree] and the [`handle`][crate::handle]
//! functions.

use thiserror::Error;

/// Everything that can go wrong when talking to a tree. None of these leave the tree modified.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The operation was handed no tree at all.
    #[error("no tree to operate on")]
    InvalidContainer,

    /// The key is already stored. Trees hold each key once so the insert was rejected.
    #[error("key {0} is already in the tree")]
    DuplicateKey(i32),

    /// An integer traversal code other than `-1`, `0` or `1`.
    #[error("unknown traversal order code: {0}")]
    UnknownOrder(i32),
}
