//! Traversal orders.

use std::fmt;

use crate::TreeError;

/// Which order [`OrderedTree::traverse`][crate::OrderedTree::traverse] visits keys in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// The node, then its left subtree, then its right subtree.
    PreOrder,
    /// The left subtree, then the node, then the right subtree. Yields keys in ascending order.
    InOrder,
    /// The left subtree, then the right subtree, then the node.
    PostOrder,
}

impl Order {
    /// All orders, in the order the demo prints them by default.
    pub const ALL: [Order; 3] = [Order::InOrder, Order::PreOrder, Order::PostOrder];
}

/// Accepts the integer codes `-1` (pre-order), `0` (in-order) and `1` (post-order).
///
/// # Examples
///
/// ```
/// use bst::{Order, TreeError};
///
/// assert_eq!(Order::try_from(-1), Ok(Order::PreOrder));
/// assert_eq!(Order::try_from(0), Ok(Order::InOrder));
/// assert_eq!(Order::try_from(1), Ok(Order::PostOrder));
/// assert_eq!(Order::try_from(2), Err(TreeError::UnknownOrder(2)));
/// ```
impl TryFrom<i32> for Order {
    type Error = TreeError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(Order::PreOrder),
            0 => Ok(Order::InOrder),
            1 => Ok(Order::PostOrder),
            other => Err(TreeError::UnknownOrder(other)),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Order::PreOrder => "pre-order",
            Order::InOrder => "in-order",
            Order::PostOrder => "post-order",
        };
        f.write_str(name)
    }
}
