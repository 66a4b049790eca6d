//! Read-only walks over a tree: lazy key iterators in the four classic orders and a handful of
//! structural predicates. None of these rely on the heights cached in the nodes, which makes
//! them useful for checking that the cache is right.

use std::collections::VecDeque;
use std::fmt;

use crate::node::Node;

/// The order in which a traversal visits the nodes of a tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    Pre,
    /// Left subtree, then node, then right subtree. Keys come out sorted.
    In,
    /// Left subtree, then right subtree, then node.
    Post,
    /// Breadth first, top to bottom and left to right within a level.
    Level,
}

/// Iterates over the nodes of a subtree using an explicit stack (or queue, for level order) so
/// that no traversal recurses.
pub(crate) struct Nodes<'a, K> {
    order: Order,
    // Depth first orders. The flag says whether the node's children were already pushed.
    stack: Vec<(&'a Node<K>, bool)>,
    // Level order.
    queue: VecDeque<&'a Node<K>>,
}

impl<'a, K> Clone for Nodes<'a, K> {
    fn clone(&self) -> Self {
        Self {
            order: self.order,
            stack: self.stack.clone(),
            queue: self.queue.clone(),
        }
    }
}

impl<'a, K> Nodes<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, order: Order) -> Self {
        let mut nodes = Self {
            order,
            stack: Vec::new(),
            queue: VecDeque::new(),
        };
        match order {
            Order::Level => nodes.queue.extend(root),
            _ => nodes.stack.extend(root.map(|n| (n, false))),
        }
        nodes
    }

    fn push_child(&mut self, child: Option<&'a Node<K>>) {
        self.stack.extend(child.map(|n| (n, false)));
    }
}

impl<'a, K> Iterator for Nodes<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.order == Order::Level {
            let node = self.queue.pop_front()?;
            self.queue.extend(node.left());
            self.queue.extend(node.right());
            return Some(node);
        }

        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node);
            }
            // Push in reverse of the order things should come out.
            match self.order {
                Order::Pre => {
                    self.push_child(node.right());
                    self.push_child(node.left());
                    self.stack.push((node, true));
                }
                Order::In => {
                    self.push_child(node.right());
                    self.stack.push((node, true));
                    self.push_child(node.left());
                }
                Order::Post => {
                    self.stack.push((node, true));
                    self.push_child(node.right());
                    self.push_child(node.left());
                }
                Order::Level => unreachable!("level order uses the queue"),
            }
        }
    }
}

/// A lazy iterator over the keys of a tree in some [`Order`]. Ask the tree for a new one to start
/// over.
pub struct Iter<'a, K> {
    nodes: Nodes<'a, K>,
    remaining: usize,
}

impl<'a, K> Clone for Iter<'a, K> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K> fmt::Debug for Iter<'a, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("order", &self.nodes.order)
            .field("remaining", &self.remaining)
            .finish()
    }
}

impl<'a, K> Iter<'a, K> {
    /// `len` must be the number of nodes under `root`.
    pub(crate) fn new(root: Option<&'a Node<K>>, order: Order, len: usize) -> Self {
        Self {
            nodes: Nodes::new(root, order),
            remaining: len,
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> ExactSizeIterator for Iter<'a, K> {}

/// Folds a subtree from the leaves up: `f` gets a node along with what it returned for the
/// node's left and right subtrees (`empty` standing in for a missing child).
fn fold_up<K, T, F>(root: Option<&Node<K>>, empty: T, mut f: F) -> T
where
    T: Clone,
    F: FnMut(&Node<K>, T, T) -> T,
{
    let mut results: Vec<T> = Vec::new();
    for node in Nodes::new(root, Order::Post) {
        // Post order finishes the right subtree last, so its result is on top.
        let right = match node.right() {
            Some(_) => results.pop().unwrap_or_else(|| empty.clone()),
            None => empty.clone(),
        };
        let left = match node.left() {
            Some(_) => results.pop().unwrap_or_else(|| empty.clone()),
            None => empty.clone(),
        };
        results.push(f(node, left, right));
    }
    results.pop().unwrap_or(empty)
}

/// Number of levels below (and including) `root`, counted from scratch.
pub fn depth<K>(root: Option<&Node<K>>) -> usize {
    fold_up(root, 0, |_, left, right| left.max(right) + 1)
}

/// Whether, at every node, the depths of the two subtrees differ by at most one.
pub fn is_balanced<K>(root: Option<&Node<K>>) -> bool {
    fold_up(root, Some(0usize), |_, left, right| {
        let (left, right) = (left?, right?);
        (left.abs_diff(right) <= 1).then(|| left.max(right) + 1)
    })
    .is_some()
}

/// Whether every node has either no children or two.
pub fn is_full<K>(root: Option<&Node<K>>) -> bool {
    Nodes::new(root, Order::Pre).all(|n| n.left().is_some() == n.right().is_some())
}

/// Whether every level is completely filled.
pub fn is_perfect<K>(root: Option<&Node<K>>) -> bool {
    let count = Nodes::new(root, Order::Pre).count();
    let levels = depth(root);
    levels < usize::BITS as usize && count == (1 << levels) - 1
}

/// Whether every level but the last is filled, and the last is filled from the left.
pub fn is_complete<K>(root: Option<&Node<K>>) -> bool {
    let count = Nodes::new(root, Order::Pre).count();

    // Number the nodes the way an array-backed heap would; a gap pushes some index past the end.
    let mut queue: VecDeque<(&Node<K>, usize)> = root.map(|n| (n, 0)).into_iter().collect();
    while let Some((node, index)) = queue.pop_front() {
        if index >= count {
            return false;
        }
        queue.extend(node.left().map(|n| (n, 2 * index + 1)));
        queue.extend(node.right().map(|n| (n, 2 * index + 2)));
    }
    true
}

/// Whether `right` is the mirror image of `left`, keys included.
pub fn is_mirror<K>(left: Option<&Node<K>>, right: Option<&Node<K>>) -> bool
where
    K: PartialEq,
{
    let mut pairs = vec![(left, right)];
    while let Some(pair) = pairs.pop() {
        match pair {
            (None, None) => {}
            (Some(l), Some(r)) if l.key() == r.key() => {
                pairs.push((l.left(), r.right()));
                pairs.push((l.right(), r.left()));
            }
            _ => return false,
        }
    }
    true
}

/// Whether an in-order walk produces strictly increasing keys, i.e. the BST order invariant holds.
pub fn is_ordered<K>(root: Option<&Node<K>>) -> bool
where
    K: Ord,
{
    let mut keys = Nodes::new(root, Order::In).map(Node::key);
    let Some(mut previous) = keys.next() else {
        return true;
    };
    for key in keys {
        if previous >= key {
            return false;
        }
        previous = key;
    }
    true
}
