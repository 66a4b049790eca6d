//! This crate exposes an ordered set of unique keys built as a Binary Search Tree (BST), with an
//! optional AVL balancing layer on top.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
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
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). A plain BST ([`search::Tree`]) does nothing to
//! limit its height. An AVL tree ([`avl::Tree`]) additionally keeps the heights of every
//! `Node`'s two subtrees within one of each other, which limits the height to `O(lg N)`
//! where `N` is the number of nodes in the tree. [`set::Set`] picks one of the two at
//! construction time.
//!
//! Every node is owned by exactly one parent (or by the tree, for the root). Nothing points back
//! up the tree: a node's parent is found by searching down from the root again.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod error;
pub mod node;
pub mod search;
pub mod set;
pub mod traverse;
mod util;


pub use error::Error;
pub use node::Node;
pub use set::{Policy, Set};
pub use traverse::Order;
