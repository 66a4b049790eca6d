//! A single ordered-set type whose balancing policy is picked when it is built.
//!
//! # Examples
//!
//! ```
//! use avl_bst::set::{Policy, Set};
//!
//! let mut plain = Set::new(Policy::Plain);
//! let mut balanced = Set::new(Policy::Avl);
//!
//! for key in 0..15 {
//!     plain.insert(key).unwrap();
//!     balanced.insert(key).unwrap();
//! }
//!
//! assert_eq!(plain.height(), 15);
//! assert_eq!(balanced.height(), 4);
//! assert!(plain.iter().eq(balanced.iter()));
//! ```

use crate::error::{DuplicateKey, EmptyTree, NotFound};
use crate::node::Node;
use crate::traverse::{Iter, Order};
use crate::{avl, search};

/// How a [`Set`] keeps its shape.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Policy {
    /// No balancing. Cheapest per operation, but sorted input makes it a list.
    Plain,
    /// AVL balancing. Height stays logarithmic in the number of keys.
    #[default]
    Avl,
}

/// An ordered set of unique keys backed by one of the trees in this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Set<K> {
    /// Backed by an unbalanced [`search::Tree`].
    Plain(search::Tree<K>),
    /// Backed by an [`avl::Tree`].
    Avl(avl::Tree<K>),
}

impl<K> Default for Set<K> {
    fn default() -> Self {
        Self::new(Policy::default())
    }
}

impl<K> Set<K> {
    /// Generate a new, empty `Set` that balances itself according to `policy`.
    pub fn new(policy: Policy) -> Self {
        match policy {
            Policy::Plain => Self::Plain(search::Tree::new()),
            Policy::Avl => Self::Avl(avl::Tree::new()),
        }
    }

    /// The policy this set was built with.
    pub fn policy(&self) -> Policy {
        match self {
            Self::Plain(_) => Policy::Plain,
            Self::Avl(_) => Policy::Avl,
        }
    }

    fn tree(&self) -> &search::Tree<K> {
        match self {
            Self::Plain(t) => t,
            Self::Avl(t) => t.as_search_tree(),
        }
    }

    /// The number of keys in the set.
    pub fn len(&self) -> usize {
        self.tree().len()
    }

    /// Whether the set holds no keys.
    pub fn is_empty(&self) -> bool {
        self.tree().is_empty()
    }

    /// Number of levels in the underlying tree.
    pub fn height(&self) -> usize {
        self.tree().height()
    }

    /// The root node of the underlying tree.
    pub fn root(&self) -> Option<&Node<K>> {
        self.tree().root()
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        match self {
            Self::Plain(t) => t.clear(),
            Self::Avl(t) => t.clear(),
        }
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        self.tree().iter()
    }

    /// Iterates over the keys in the given traversal order.
    pub fn keys(&self, order: Order) -> Iter<'_, K> {
        self.tree().keys(order)
    }
}

impl<K> Set<K>
where
    K: Ord,
{
    /// Adds `key`, failing with [`DuplicateKey`] if it is already there.
    pub fn insert(&mut self, key: K) -> Result<(), DuplicateKey> {
        match self {
            Self::Plain(t) => t.insert(key),
            Self::Avl(t) => t.insert(key),
        }
    }

    /// Takes `key` out of the set, failing with [`NotFound`] if it isn't there.
    pub fn remove(&mut self, key: &K) -> Result<K, NotFound> {
        match self {
            Self::Plain(t) => t.remove(key),
            Self::Avl(t) => t.remove(key),
        }
    }

    /// Whether the set holds `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.tree().contains(key)
    }

    /// The node holding `key`, if any.
    pub fn find(&self, key: &K) -> Option<&Node<K>> {
        self.tree().find(key)
    }

    /// The smallest key in the set.
    pub fn min(&self) -> Result<&K, EmptyTree> {
        self.tree().min()
    }

    /// The largest key in the set.
    pub fn max(&self) -> Result<&K, EmptyTree> {
        self.tree().max()
    }
}

impl<'a, K> IntoIterator for &'a Set<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> Extend<K> for Set<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        match self {
            Self::Plain(t) => t.extend(iter),
            Self::Avl(t) => t.extend(iter),
        }
    }
}
