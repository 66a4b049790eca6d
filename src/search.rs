//! A plain (unbalanced) BST. All the structural work of inserting and removing keys lives here;
//! [`avl::Tree`](crate::avl::Tree) reuses it and only adds rebalancing on top.
//!
//! # Examples
//!
//! ```
//! use avl_bst::search::Tree;
//! use avl_bst::error::{DuplicateKey, NotFound};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert_eq!(tree.insert(1), Ok(()));
//! assert!(tree.contains(&1));
//!
//! // Keys are unique.
//! assert_eq!(tree.insert(1), Err(DuplicateKey));
//! assert_eq!(tree.len(), 1);
//!
//! // Removing a key hands it back.
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.remove(&1), Err(NotFound));
//! ```

use std::fmt;
use std::iter::FromIterator;

use crate::error::{DuplicateKey, EmptyTree, NotFound};
use crate::node::{descend, Link, Node};
use crate::traverse::{Iter, Nodes, Order};
use crate::util::{Search, Side, Trail};

/// A Binary Search Tree of unique keys. Nothing keeps it balanced: inserting keys in sorted
/// order degrades it into a list.
pub struct Tree<K> {
    root: Link<K>,
    size: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Copies the tree bottom-up: a post-order walk finishes both children of a node before the node
/// itself, so their copies are waiting on top of `built` (right above left).
impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        let mut built: Vec<Box<Node<K>>> = Vec::new();
        for node in Nodes::new(self.root(), Order::Post) {
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                key: node.key.clone(),
                left,
                right,
                height: node.height,
            }));
        }
        Self {
            root: built.pop(),
            size: self.size,
        }
    }
}

/// Two trees are equal when they have the same shape with equal keys in the same places.
impl<K> PartialEq for Tree<K>
where
    K: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }
        let mut pairs = vec![(self.root(), other.root())];
        while let Some(pair) = pairs.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) if a.key == b.key => {
                    pairs.push((a.left(), b.left()));
                    pairs.push((a.right(), b.right()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<K> Eq for Tree<K> where K: Eq {}

/// Lists the keys in ascending order, like the std sets do.
impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Number of levels in the tree. An empty tree has height 0.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Removes every key. Nodes are released one at a time so that even a degenerate tree doesn't
    /// recurse once per level.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.size = 0;
    }

    /// Iterates over the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::search::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        self.keys(Order::In)
    }

    /// Iterates over the keys in the given traversal order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::search::Tree;
    /// use avl_bst::traverse::Order;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.keys(Order::Pre).copied().collect::<Vec<_>>(), [2, 1, 3]);
    /// assert_eq!(tree.keys(Order::Post).copied().collect::<Vec<_>>(), [1, 3, 2]);
    /// ```
    pub fn keys(&self, order: Order) -> Iter<'_, K> {
        Iter::new(self.root(), order, self.size)
    }

    /// Walks `trail` from the root down, then back up again calling `fix` on every slot it passed
    /// through, deepest first. `fix` is also told how deep the slot is (the root slot is 0).
    ///
    /// The nodes along the trail are detached from their parents on the way down and reattached on
    /// the way up, so `fix` is free to replace the subtree in the slot it is handed.
    pub(crate) fn retrace<F>(&mut self, trail: &[Side], mut fix: F)
    where
        F: FnMut(&mut Link<K>, usize),
    {
        let mut spine: Vec<(Box<Node<K>>, Side)> = Vec::with_capacity(trail.len());
        let mut current = self.root.take();
        for &side in trail {
            let Some(mut node) = current.take() else {
                break;
            };
            current = node.link_mut(side).take();
            spine.push((node, side));
        }

        fix(&mut current, spine.len());
        while let Some((mut node, side)) = spine.pop() {
            *node.link_mut(side) = current;
            current = Some(node);
            fix(&mut current, spine.len());
        }
        self.root = current;
    }
}

impl<K> Tree<K>
where
    K: Ord,
{
    /// Potentially finds the node holding the given key. If no node has the key, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::search::Tree;
    ///
    /// let tree: Tree<_> = [1].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&1).map(|n| *n.key()), Some(1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>> {
        let mut current = self.root();
        while let Some(node) = current {
            match node.direction(key) {
                None => return Some(node),
                Some(side) => current = node.child(side),
            }
        }
        None
    }

    /// Whether the tree holds `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// The parent of the node holding `key`. `None` if `key` is at the root or isn't in the tree.
    pub fn parent_of(&self, key: &K) -> Option<&Node<K>> {
        let mut parent = None;
        let mut current = self.root();
        while let Some(node) = current {
            match node.direction(key) {
                None => return parent,
                Some(side) => {
                    parent = Some(node);
                    current = node.child(side);
                }
            }
        }
        None
    }

    /// The ancestors of the node holding `key`, root first, not including that node itself.
    /// `None` if `key` isn't in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::search::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 4].into_iter().collect();
    /// let path: Vec<_> = tree.path_to(&4).unwrap().iter().map(|n| *n.key()).collect();
    ///
    /// assert_eq!(path, [5, 3]);
    /// assert_eq!(tree.path_to(&5).map(|p| p.len()), Some(0));
    /// assert!(tree.path_to(&6).is_none());
    /// ```
    pub fn path_to(&self, key: &K) -> Option<Vec<&Node<K>>> {
        let mut path = Vec::new();
        let mut current = self.root();
        while let Some(node) = current {
            match node.direction(key) {
                None => return Some(path),
                Some(side) => {
                    path.push(node);
                    current = node.child(side);
                }
            }
        }
        None
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Result<&K, EmptyTree> {
        self.root().map(|n| n.min().key()).ok_or(EmptyTree)
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Result<&K, EmptyTree> {
        self.root().map(|n| n.max().key()).ok_or(EmptyTree)
    }

    /// Inserts `key` as a new leaf. Inserting a key that is already present changes nothing and
    /// reports [`DuplicateKey`].
    pub fn insert(&mut self, key: K) -> Result<(), DuplicateKey> {
        let trail = self.attach(key)?;
        self.retrace(&trail, refresh_height);
        Ok(())
    }

    /// Removes `key` from the tree and returns it. Removing a key that isn't present changes
    /// nothing and reports [`NotFound`].
    ///
    /// A node with two children keeps its place in the tree and takes over the key of its in-order
    /// predecessor; it is the predecessor's node that gets released.
    pub fn remove(&mut self, key: &K) -> Result<K, NotFound> {
        let (removed, trail) = self.detach(key)?;
        self.retrace(&trail, refresh_height);
        Ok(removed)
    }

    pub(crate) fn search(&self, key: &K) -> Search {
        let mut trail = Trail::new();
        let mut current = self.root();
        while let Some(node) = current {
            match node.direction(key) {
                None => return Search::Found(trail),
                Some(side) => {
                    trail.push(side);
                    current = node.child(side);
                }
            }
        }
        Search::Vacant(trail)
    }

    /// Hangs a new leaf holding `key` off the tree and returns the trail to it. Heights along the
    /// trail are left stale for the caller to fix.
    pub(crate) fn attach(&mut self, key: K) -> Result<Trail, DuplicateKey> {
        let trail = match self.search(&key) {
            Search::Found(_) => {
                tracing::debug!(size = self.size, "insert rejected, key already present");
                return Err(DuplicateKey);
            }
            Search::Vacant(trail) => trail,
        };
        match descend(&mut self.root, &trail) {
            Some(slot) => *slot = Some(Node::new_boxed(key)),
            None => unreachable!("search ended below the bottom of the tree"),
        }
        self.size += 1;
        Ok(trail)
    }

    /// Unlinks the node holding `key` (or its in-order predecessor) and returns `key` together
    /// with the trail to the slot the released node was unlinked from. Heights along the trail are
    /// left stale for the caller to fix.
    pub(crate) fn detach(&mut self, key: &K) -> Result<(K, Trail), NotFound> {
        let mut trail = match self.search(key) {
            Search::Found(trail) => trail,
            Search::Vacant(_) => {
                tracing::debug!(size = self.size, "remove rejected, key not present");
                return Err(NotFound);
            }
        };
        let Some(slot) = descend(&mut self.root, &trail) else {
            unreachable!("search found a node below the bottom of the tree");
        };
        let Some(node) = slot.as_deref_mut() else {
            unreachable!("search found an empty slot");
        };

        let removed = if node.left.is_some() && node.right.is_some() {
            // The predecessor is one step left and then right as far as it goes. It has no right
            // child, so its left child (if any) simply takes its slot.
            let mut tail = vec![Side::Left];
            let mut predecessor = node.left();
            while let Some(right) = predecessor.and_then(Node::right) {
                tail.push(Side::Right);
                predecessor = Some(right);
            }
            let Some(predecessor_slot) = descend(&mut node.left, &tail[1..]) else {
                unreachable!("predecessor trail left the tree");
            };
            let Some(mut predecessor) = predecessor_slot.take() else {
                unreachable!("predecessor slot was empty");
            };
            *predecessor_slot = predecessor.left.take();

            trail.extend(tail);
            std::mem::replace(&mut node.key, predecessor.key)
        } else {
            let Some(mut deleted) = slot.take() else {
                unreachable!("search found an empty slot");
            };
            *slot = deleted.left.take().or_else(|| deleted.right.take());
            deleted.key
        };

        self.size -= 1;
        Ok((removed, trail))
    }
}

/// The only upkeep an unbalanced tree needs after a structural change.
fn refresh_height<K>(slot: &mut Link<K>, _depth: usize) {
    if let Some(node) = slot {
        node.fix_height();
    }
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
        for (i, key) in self.keys(Order::Level).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traverse;

    fn tree_of(keys: &[i32]) -> Tree<i32> {
        let mut tree = Tree::new();
        for &key in keys {
            tree.insert(key).unwrap();
        }
        tree
    }

    fn in_order(tree: &Tree<i32>) -> Vec<i32> {
        tree.iter().copied().collect()
    }

    /// Assert the heights of the root, left child, and right child of a tree.
    macro_rules! assert_heights {
        ($tree:ident, $height:expr, $left_height:expr, $right_height:expr) => {{
            match $tree.root() {
                Some(n) => {
                    assert_eq!(n.height(), $height);
                    assert_eq!(n.left().map_or(0, Node::height), $left_height);
                    assert_eq!(n.right().map_or(0, Node::height), $right_height);
                }
                None => assert_eq!(0, $height),
            }
        }};
    }

    #[test]
    fn insert_into_empty_tree_makes_root() {
        let mut tree = Tree::new();
        assert_eq!(tree.insert(7), Ok(()));

        assert_eq!(tree.root().map(|n| *n.key()), Some(7));
        assert_eq!(tree.len(), 1);
        assert_heights!(tree, 1, 0, 0);
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut tree = tree_of(&[5, 3, 8]);
        let before = tree.clone();

        assert_eq!(tree.insert(3), Err(DuplicateKey));
        assert_eq!(tree, before);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn ascending_inserts_degenerate() {
        let tree = tree_of(&[1, 2, 3, 4, 5]);

        assert_heights!(tree, 5, 0, 4);
        assert_eq!(traverse::depth(tree.root()), 5);
        assert!(!traverse::is_balanced(tree.root()));
    }

    #[test]
    fn find_parent_and_path() {
        let tree = tree_of(&[5, 3, 8, 1, 4, 7, 9]);

        assert_eq!(tree.find(&4).map(|n| *n.key()), Some(4));
        assert!(tree.find(&6).is_none());

        assert_eq!(tree.parent_of(&4).map(|n| *n.key()), Some(3));
        assert_eq!(tree.parent_of(&8).map(|n| *n.key()), Some(5));
        assert!(tree.parent_of(&5).is_none());
        assert!(tree.parent_of(&6).is_none());

        let path: Vec<_> = tree.path_to(&7).unwrap().iter().map(|n| *n.key()).collect();
        assert_eq!(path, [5, 8]);
    }

    #[test]
    fn min_and_max() {
        let mut tree = Tree::new();
        assert_eq!(tree.min(), Err(EmptyTree));
        assert_eq!(tree.max(), Err(EmptyTree));

        tree.extend([5, 3, 8, 1, 9]);
        assert_eq!(tree.min(), Ok(&1));
        assert_eq!(tree.max(), Ok(&9));
    }

    #[test]
    fn delete_with_no_children() {
        let mut tree = tree_of(&[5, 3, 7]);

        assert_eq!(tree.remove(&7), Ok(7));
        assert!(!tree.contains(&7));
        assert_eq!(in_order(&tree), [3, 5]);
        assert_heights!(tree, 2, 1, 0);
    }

    #[test]
    fn delete_with_null_left() {
        let mut tree = tree_of(&[5, 3, 7, 9]);

        assert_eq!(tree.remove(&7), Ok(7));
        assert_eq!(in_order(&tree), [3, 5, 9]);
        assert_eq!(tree.parent_of(&9).map(|n| *n.key()), Some(5));
        assert_heights!(tree, 2, 1, 1);
    }

    #[test]
    fn delete_with_null_right() {
        let mut tree = tree_of(&[5, 3, 7, 6]);

        assert_eq!(tree.remove(&7), Ok(7));
        assert_eq!(in_order(&tree), [3, 5, 6]);
        assert_eq!(tree.parent_of(&6).map(|n| *n.key()), Some(5));
    }

    #[test]
    fn delete_with_deeper_predecessor() {
        let mut tree = tree_of(&[5, 3, 8, 2, 6, 9, 7]);

        assert_eq!(tree.remove(&8), Ok(8));

        // 7 moved up into 8's node, and 6 kept its place.
        assert_eq!(tree.find(&7).and_then(Node::right).map(|n| *n.key()), Some(9));
        assert_eq!(tree.parent_of(&6).map(|n| *n.key()), Some(7));
        assert_eq!(in_order(&tree), [2, 3, 5, 6, 7, 9]);
        assert_eq!(traverse::depth(tree.root()), tree.height());
    }

    #[test]
    fn delete_root() {
        let mut tree = tree_of(&[5]);

        assert_eq!(tree.remove(&5), Ok(5));
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert_eq!(tree.remove(&5), Err(NotFound));
    }

    #[test]
    fn missing_remove_changes_nothing() {
        let mut tree = tree_of(&[5, 3, 8]);
        let before = tree.clone();

        assert_eq!(tree.remove(&4), Err(NotFound));
        assert_eq!(tree, before);
    }

    #[test]
    fn insert_then_remove_restores_shape() {
        let mut tree = tree_of(&[50, 20, 80, 10, 30, 70, 90, 25]);
        let before = tree.clone();

        tree.insert(27).unwrap();
        assert_ne!(tree, before);
        tree.remove(&27).unwrap();

        assert_eq!(tree, before);
    }

    #[test]
    fn display_is_level_order() {
        let tree = tree_of(&[5, 3, 8, 1, 4]);
        assert_eq!(tree.to_string(), "5 3 8 1 4");
        assert_eq!(Tree::<i32>::new().to_string(), "");
    }

    #[test]
    fn deep_tree_drops_without_recursion() {
        let mut tree = Tree::new();
        for key in 0..10_000 {
            tree.insert(key).unwrap();
        }
        assert_eq!(tree.height(), 10_000);
        drop(tree);
    }

    #[test]
    fn deep_tree_clones_and_compares_without_recursion() {
        let tree: Tree<_> = (0..10_000).collect();
        let copy = tree.clone();

        assert_eq!(copy.height(), 10_000);
        assert!(copy == tree);

        let mut shorter = copy.clone();
        assert_eq!(shorter.remove(&9_999), Ok(9_999));
        assert!(shorter != tree);
        assert!(format!("{shorter:?}").starts_with("{0, 1, 2, "));
    }

    #[test]
    fn equality_needs_the_same_shape() {
        let a = tree_of(&[2, 1, 3]);
        let b = tree_of(&[1, 2, 3]);

        assert!(a.iter().eq(b.iter()));
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn delete_with_predecessor_that_has_a_left_child() {
        //       50                   40
        //      /  \                 /  \
        //    30    80      ->     30    80
        //   /  \     \          /  \     \
        //  10   40    90       10   35    90
        //      /
        //     35
        let mut tree = tree_of(&[50, 30, 80, 10, 40, 90, 35]);

        assert_eq!(tree.remove(&50), Ok(50));
        assert_eq!(tree.keys(Order::Pre).copied().collect::<Vec<_>>(), [40, 30, 10, 35, 80, 90]);
        assert_eq!(tree.parent_of(&35).map(|n| *n.key()), Some(30));
        assert_heights!(tree, 3, 2, 2);
        assert_eq!(traverse::depth(tree.root()), tree.height());
    }

    #[test]
    fn clear_empties() {
        let mut tree = tree_of(&[2, 1, 3]);
        tree.clear();

        assert!(tree.is_empty());
        assert_eq!(tree.iter().count(), 0);
        assert_eq!(tree, Tree::new());
    }
}
