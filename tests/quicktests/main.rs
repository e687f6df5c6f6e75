//! Property tests against the public API of each tree.

#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod ordered_tree;
