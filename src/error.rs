//! Errors reported by the trees. None of them are fatal: a failed operation leaves the tree
//! exactly as it was.

/// An insert was attempted with a key the tree already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("key is already present in the tree")]
pub struct DuplicateKey;

/// A removal (or lookup) was attempted with a key the tree doesn't hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("key was not found in the tree")]
pub struct NotFound;

/// `min` or `max` was asked of a tree with no nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the tree is empty")]
pub struct EmptyTree;

/// Any of the above. Handy when mixing operations behind a single `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// See [`DuplicateKey`].
    #[error(transparent)]
    DuplicateKey(#[from] DuplicateKey),
    /// See [`NotFound`].
    #[error(transparent)]
    NotFound(#[from] NotFound),
    /// See [`EmptyTree`].
    #[error(transparent)]
    EmptyTree(#[from] EmptyTree),
}
