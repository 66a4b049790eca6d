//! The tree cell shared by every tree in this crate.

use std::cmp::Ordering;
use std::fmt;

use crate::util::Side;

/// An owned, possibly empty subtree. Every node lives in exactly one of these: either the root
/// slot of a tree or a child slot of its parent.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A `Node` has a key that is used for searching/sorting and up to two children. There is no
/// parent pointer; parents are found by descending from the root again.
///
/// Cloning and comparing happen at the tree level, with an explicit stack, so `Node` implements
/// neither.
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,
}

impl<K> Node<K> {
    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The left child, whose subtree holds only smaller keys.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, whose subtree holds only larger keys.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Number of levels in the subtree rooted here. A lone node has height 1.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Height of the left subtree minus height of the right subtree. See [the Wikipedia
    /// page][wiki] for more details.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Balance_factor
    pub fn balance_factor(&self) -> isize {
        let left_height = self.left().map_or(0, Self::height);
        let right_height = self.right().map_or(0, Self::height);
        left_height as isize - right_height as isize
    }

    /// The node holding the smallest key of this subtree.
    pub fn min(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// The node holding the largest key of this subtree.
    pub fn max(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    pub(crate) fn child(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    pub(crate) fn link_mut(&mut self, side: Side) -> &mut Link<K> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    pub(crate) fn fix_height(&mut self) {
        let left_height = self.left().map_or(0, Self::height);
        let right_height = self.right().map_or(0, Self::height);
        self.height = left_height.max(right_height) + 1;
    }

    /// Which way to go from here to reach `key`, or `None` if this node holds it.
    pub(crate) fn direction(&self, key: &K) -> Option<Side>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => Some(Side::Left),
            Ordering::Equal => None,
            Ordering::Greater => Some(Side::Right),
        }
    }
}

/// Shows the node's own fields and only the keys of its children, so formatting never descends
/// further than one level.
impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("height", &self.height)
            .field("left", &self.left().map(Self::key))
            .field("right", &self.right().map(Self::key))
            .finish()
    }
}

/// Follows `trail` down from `slot`, returning the slot it ends at. `None` if the trail runs off
/// the bottom of the tree before it is exhausted.
pub(crate) fn descend<'a, K>(
    mut slot: &'a mut Link<K>,
    trail: &[Side],
) -> Option<&'a mut Link<K>> {
    for &side in trail {
        slot = slot.as_deref_mut()?.link_mut(side);
    }
    Some(slot)
}
