use quickcheck::{Arbitrary, Gen};

mod avl;
mod search;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Insert the K into the data structure
    Insert(K),
    /// Remove the K from the data structure
    Remove(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(K::arbitrary(g))
        } else {
            Op::Remove(K::arbitrary(g))
        }
    }
}
