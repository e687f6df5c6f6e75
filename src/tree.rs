//! An unbalanced BST of unique `i32` keys. Nodes own their children outright through `Box`es
//! and nothing is ever rebalanced, so the shape of the tree is decided entirely by insertion
//! order.
//!
//! # Examples
//!
//! ```
//! use bst::{Order, OrderedTree, TreeError};
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(1));
//!
//! tree.insert(2).unwrap();
//! tree.insert(1).unwrap();
//! tree.insert(3).unwrap();
//! assert!(tree.contains(1));
//!
//! // Keys are stored once.
//! assert_eq!(tree.insert(1), Err(TreeError::DuplicateKey(1)));
//! assert_eq!(tree.len(), 3);
//!
//! assert_eq!(tree.traverse(Order::InOrder), vec![1, 2, 3]);
//! assert_eq!(tree.traverse(Order::PreOrder), vec![2, 1, 3]);
//! assert_eq!(tree.sum(), 6);
//!
//! // Releases every node. `tree` can't be used after this.
//! tree.destroy();
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::{Order, TreeError};

/// Whether a tree holds anything. [`handle::is_empty`][crate::handle::is_empty] adds a third
/// answer for when there is no tree at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Emptiness {
    /// No keys are stored.
    Empty,
    /// At least one key is stored.
    NonEmpty,
    /// There was no tree to ask.
    InvalidContainer,
}

/// A Binary Search Tree of unique keys. This can be used for inserting keys, checking whether a
/// key is present, and walking the keys in pre-, in- or post-order.
#[derive(Default)]
pub struct OrderedTree {
    root: Link,
    count: usize,
}

type Link = Option<Box<Node>>;

/// A single key and the subtrees hanging off it. Only ever gains children, never loses them,
/// until the whole tree is torn down.
struct Node {
    value: i32,
    left: Link,
    right: Link,
}

impl Node {
    fn new_boxed(value: i32) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }
}

/// One pending step of a traversal. Expanding a node pushes its three parts back onto the stack
/// in reverse of the order they should come out.
enum Step<'a> {
    Expand(&'a Node),
    Emit(i32),
}

impl OrderedTree {
    /// Generate a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            count: 0,
        }
    }

    /// Inserts `value` if it isn't already present. An existing key is rejected with
    /// [`TreeError::DuplicateKey`] and the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::{OrderedTree, TreeError};
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert_eq!(tree.insert(7), Ok(()));
    /// assert_eq!(tree.insert(7), Err(TreeError::DuplicateKey(7)));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: i32) -> Result<(), TreeError> {
        let mut link = &mut self.root;
        let mut depth = 0usize;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    debug!(value, "rejected duplicate key");
                    return Err(TreeError::DuplicateKey(value));
                }
                Ordering::Greater => &mut node.right,
            };
            depth += 1;
        }

        *link = Some(Node::new_boxed(value));
        self.count += 1;
        trace!(value, depth, count = self.count, "attached node");
        Ok(())
    }

    /// Whether `value` is stored in this tree.
    ///
    /// This walks one path from the root so it takes `O(depth)`. Nothing is rebalanced, so
    /// inserting keys in sorted order makes the depth equal to the number of keys.
    pub fn contains(&self, value: i32) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Calls `sink` once for every key, in the given `order`. The tree is not modified so this
    /// can be repeated as often as needed with the same result.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::{Order, OrderedTree};
    ///
    /// let tree: OrderedTree = [2, 1, 3].into_iter().collect();
    ///
    /// let mut seen = Vec::new();
    /// tree.for_each(Order::PostOrder, |key| seen.push(key));
    /// assert_eq!(seen, vec![1, 3, 2]);
    /// ```
    pub fn for_each(&self, order: Order, mut sink: impl FnMut(i32)) {
        let mut stack: Vec<Step<'_>> =
            self.root.as_deref().map(Step::Expand).into_iter().collect();

        while let Some(step) = stack.pop() {
            let node = match step {
                Step::Emit(value) => {
                    sink(value);
                    continue;
                }
                Step::Expand(node) => node,
            };

            let left = node.left.as_deref().map(Step::Expand);
            let right = node.right.as_deref().map(Step::Expand);
            let this = Some(Step::Emit(node.value));
            let pending = match order {
                Order::PreOrder => [right, left, this],
                Order::InOrder => [right, this, left],
                Order::PostOrder => [this, right, left],
            };
            stack.extend(pending.into_iter().flatten());
        }
    }

    /// Collects every key in the given `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::{Order, OrderedTree};
    ///
    /// let tree: OrderedTree = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
    ///
    /// assert_eq!(tree.traverse(Order::InOrder), vec![20, 30, 40, 50, 60, 70, 80]);
    /// assert_eq!(tree.traverse(Order::PreOrder), vec![50, 30, 20, 40, 70, 60, 80]);
    /// assert_eq!(tree.traverse(Order::PostOrder), vec![20, 40, 30, 60, 80, 70, 50]);
    /// ```
    pub fn traverse(&self, order: Order) -> Vec<i32> {
        let mut keys = Vec::with_capacity(self.count);
        self.for_each(order, |value| keys.push(value));
        keys
    }

    /// The sum of every key. Accumulates in an `i64` so it can't overflow for any tree that
    /// fits in memory; past that it wraps rather than panicking.
    pub fn sum(&self) -> i64 {
        let mut total = 0i64;
        self.for_each(Order::PreOrder, |value| {
            total = total.wrapping_add(i64::from(value));
        });
        total
    }

    /// How many keys are stored.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// [`Emptiness::Empty`] or [`Emptiness::NonEmpty`]. A tree that exists can never answer
    /// [`Emptiness::InvalidContainer`].
    pub fn emptiness(&self) -> Emptiness {
        if self.is_empty() {
            Emptiness::Empty
        } else {
            Emptiness::NonEmpty
        }
    }

    /// The number of nodes on the longest path from the root down to a leaf. An empty tree has
    /// a depth of 0 and a single node has a depth of 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&Node, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        deepest
    }

    /// Releases every node and the tree itself. Taking `self` means the compiler rejects any use
    /// of the tree after this.
    pub fn destroy(mut self) {
        let released = self.release_nodes(|_| {});
        debug!(released, "destroyed tree");
    }

    /// Frees every node, children before their parent, and returns how many were freed. Each
    /// node's key is handed to `on_release` just before the node itself is freed.
    ///
    /// The default recursive drop of `Box<Node>` would use one stack frame per level, which is one
    /// per key for a tree built from sorted input. Instead each node is detached from its children
    /// and parked on a heap allocated stack until both subtrees are gone.
    fn release_nodes(&mut self, mut on_release: impl FnMut(i32)) -> usize {
        let mut released = 0;
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();

        while let Some(mut node) = stack.pop() {
            if node.left.is_none() && node.right.is_none() {
                on_release(node.value);
                drop(node);
                released += 1;
                continue;
            }
            let left = node.left.take();
            let right = node.right.take();
            stack.push(node);
            stack.extend(right);
            stack.extend(left);
        }

        self.count = 0;
        released
    }
}

impl Drop for OrderedTree {
    fn drop(&mut self) {
        self.release_nodes(|_| {});
    }
}

/// Inserting the pre-order sequence of a tree into an empty tree rebuilds exactly the same
/// shape, since every key is placed before anything below it.
impl Clone for OrderedTree {
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        self.for_each(Order::PreOrder, |value| {
            // Keys in `self` are unique so this never hits a duplicate.
            let _ = tree.insert(value);
        });
        tree
    }
}

impl fmt::Debug for OrderedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("count", &self.count)
            .field("keys", &self.traverse(Order::InOrder))
            .finish()
    }
}

/// Duplicate keys are skipped, the same as calling [`OrderedTree::insert`] for each one and
/// ignoring the rejections.
impl Extend<i32> for OrderedTree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            // Rejections are already logged by `insert`.
            let _ = self.insert(value);
        }
    }
}

impl FromIterator<i32> for OrderedTree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
