//! A self-balancing BST (specifically, an AVL tree). Structural changes are made by the plain
//! [`search::Tree`] underneath; this layer then walks back up from the point of the change
//! rotating wherever a node's subtrees differ in height by more than one.
//!
//! # Examples
//!
//! ```
//! use avl_bst::avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Sorted inserts would turn a plain BST into a list.
//! for key in 1..=7 {
//!     tree.insert(key).unwrap();
//! }
//!
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.root().map(|n| *n.key()), Some(4));
//!
//! assert_eq!(tree.remove(&4), Ok(4));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 5, 6, 7]);
//! ```

use std::fmt;
use std::iter::FromIterator;

use crate::error::{DuplicateKey, EmptyTree, NotFound};
use crate::node::{Link, Node};
use crate::search;
use crate::traverse::{Iter, Order};
use crate::util::Side;

/// A Binary Search Tree that keeps itself height-balanced: at every node the heights of the two
/// subtrees differ by at most one, so the tree never gets taller than about `1.44 * lg(N)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tree<K> {
    inner: search::Tree<K>,
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            inner: search::Tree::new(),
        }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<&Node<K>> {
        self.inner.root()
    }

    /// Number of levels in the tree. An empty tree has height 0.
    pub fn height(&self) -> usize {
        self.inner.height()
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        self.inner.iter()
    }

    /// Iterates over the keys in the given traversal order.
    pub fn keys(&self, order: Order) -> Iter<'_, K> {
        self.inner.keys(order)
    }

    /// The balanced tree seen as a plain BST, for the read-only queries that live there.
    pub fn as_search_tree(&self) -> &search::Tree<K> {
        &self.inner
    }

    /// Gives up balancing and hands back the underlying BST.
    pub fn into_inner(self) -> search::Tree<K> {
        self.inner
    }
}

impl<K> Tree<K>
where
    K: Ord,
{
    /// Potentially finds the node holding the given key.
    pub fn find(&self, key: &K) -> Option<&Node<K>> {
        self.inner.find(key)
    }

    /// Whether the tree holds `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.inner.contains(key)
    }

    /// The parent of the node holding `key`. `None` if `key` is at the root or isn't in the tree.
    pub fn parent_of(&self, key: &K) -> Option<&Node<K>> {
        self.inner.parent_of(key)
    }

    /// The ancestors of the node holding `key`, root first.
    pub fn path_to(&self, key: &K) -> Option<Vec<&Node<K>>> {
        self.inner.path_to(key)
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Result<&K, EmptyTree> {
        self.inner.min()
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Result<&K, EmptyTree> {
        self.inner.max()
    }

    /// Inserts `key` and rebalances the path from the new leaf up to the root. Inserting a key
    /// that is already present changes nothing and reports [`DuplicateKey`].
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::avl::Tree;
    /// use avl_bst::error::DuplicateKey;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1), Ok(()));
    /// assert_eq!(tree.insert(1), Err(DuplicateKey));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> Result<(), DuplicateKey> {
        let trail = self.inner.attach(key)?;
        self.inner.retrace(&trail, rebalance);
        Ok(())
    }

    /// Removes `key` and returns it, rebalancing the path from the node that was actually
    /// released up to the root. When `key`'s node had two children that is its in-order
    /// predecessor's old spot, somewhere below it.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::avl::Tree;
    /// use avl_bst::error::NotFound;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&2), Ok(2));
    /// assert_eq!(tree.remove(&2), Err(NotFound));
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(1));
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<K, NotFound> {
        let (removed, trail) = self.inner.detach(key)?;
        self.inner.retrace(&trail, rebalance);
        Ok(removed)
    }
}

/// Refreshes the height of the node in `slot` and, if its subtrees now differ in height by two,
/// rotates to fix it. The node's subtrees must themselves already be balanced. See [the
/// Wikipedia page][wiki] for the four cases.
///
/// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Rebalancing
fn rebalance<K>(slot: &mut Link<K>, depth: usize) {
    let Some(node) = slot.as_deref_mut() else {
        return;
    };
    node.fix_height();

    let factor = node.balance_factor();
    if factor > 1 {
        if node.left().map_or(0, Node::balance_factor) >= 0 {
            tracing::trace!(depth, factor, "left heavy, rotating right");
            rotate_right(slot);
        } else {
            tracing::trace!(depth, factor, "left child leans right, rotating left-right");
            rotate_left_right(slot);
        }
    } else if factor < -1 {
        if node.right().map_or(0, Node::balance_factor) <= 0 {
            tracing::trace!(depth, factor, "right heavy, rotating left");
            rotate_left(slot);
        } else {
            tracing::trace!(depth, factor, "right child leans left, rotating right-left");
            rotate_right_left(slot);
        }
    }

    if cfg!(debug_assertions) {
        if let Some(node) = slot.as_deref() {
            let left_height = node.left().map_or(0, Node::height);
            let right_height = node.right().map_or(0, Node::height);
            assert_eq!(node.height(), left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
    }
}

/// Rotate the subtree in `slot` to the right. This moves the left child up vertically and the
/// old root down vertically. Used to rebalance the tree when the left child is too tall. Does
/// nothing without a left child.
///
/// # Diagram
///
/// ```text
///      slot                      slot
///       |                         |
///    old_root                  new_root
///    /     \                   /     \
/// new_root  z     rotate ->   x    old_root
///  / \                               /  \
/// x   y                             y    z
/// ```
fn rotate_right<K>(slot: &mut Link<K>) {
    rotate(slot, Side::Right);
}

/// Mirror image of [`rotate_right`]: the right child moves up and its left child `y` becomes the
/// old root's right child.
///
/// ```text
///    slot                          slot
///     |                             |
///  old_root                      new_root
///   /    \                       /     \
///  x   new_root   rotate ->  old_root   z
///        / \                   /  \
///       y   z                 x    y
/// ```
fn rotate_left<K>(slot: &mut Link<K>) {
    rotate(slot, Side::Left);
}

/// Rotates the left child left, then the whole subtree right. Fixes a left-heavy node whose left
/// child leans right (the "zig-zag" case a single rotation can't fix).
fn rotate_left_right<K>(slot: &mut Link<K>) {
    if let Some(node) = slot.as_deref_mut() {
        rotate_left(&mut node.left);
    }
    rotate_right(slot);
}

/// Mirror image of [`rotate_left_right`].
fn rotate_right_left<K>(slot: &mut Link<K>) {
    if let Some(node) = slot.as_deref_mut() {
        rotate_right(&mut node.right);
    }
    rotate_left(slot);
}

/// Moves the root of the subtree in `slot` down towards `towards`, lifting its child on the
/// other side into its place. Heights of the two nodes that moved are refreshed.
fn rotate<K>(slot: &mut Link<K>, towards: Side) {
    let Some(mut old_root) = slot.take() else {
        return;
    };
    let Some(mut new_root) = old_root.link_mut(!towards).take() else {
        *slot = Some(old_root);
        return;
    };

    *old_root.link_mut(!towards) = new_root.link_mut(towards).take();
    old_root.fix_height();

    *new_root.link_mut(towards) = Some(old_root);
    new_root.fix_height();
    *slot = Some(new_root);
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    /// Builds a tree by inserting keys in iteration order. Repeated keys are skipped.
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            // Keys already in the tree are skipped.
            let _ = self.insert(key);
        }
    }
}

/// Writes the keys in level order, separated by spaces.
impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}
