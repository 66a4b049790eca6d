use std::ops::Not;

/// Which child slot of a node to follow.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Not for Side {
    type Output = Side;

    fn not(self) -> Self::Output {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The way from the root slot down to some slot in the tree. An empty trail names the root slot
/// itself.
pub(crate) type Trail = Vec<Side>;

/// Result of descending the tree looking for a key.
pub(crate) enum Search {
    /// The key is held by the node in the slot at the end of this trail.
    Found(Trail),
    /// The key isn't in the tree. The slot at the end of this trail is empty and is where the key
    /// would be inserted.
    Vacant(Trail),
}
