use avl_bst::avl::Tree;
use avl_bst::traverse::{self, Order};

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                assert_eq!(bst.insert(k.clone()).is_ok(), set.insert(k.clone()));
            }
            Op::Remove(k) => {
                assert_eq!(bst.remove(k).ok(), set.take(k));
            }
        }
    }
}

/// Everything an AVL tree promises, checked without the heights cached in its nodes.
fn well_formed<K: Ord>(tree: &Tree<K>) -> bool {
    traverse::is_ordered(tree.root())
        && traverse::is_balanced(tree.root())
        && traverse::depth(tree.root()) == tree.height()
        && tree.keys(Order::Level).count() == tree.len()
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        well_formed(&tree) && tree.iter().eq(set.iter())
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: BTreeSet<_> = xs.into_iter().collect();

        nots.iter().filter(|x| !added.contains(*x)).all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            let _ = tree.remove(delete);
            if !well_formed(&tree) {
                return false;
            }
        }

        deletes.iter().all(|x| !tree.contains(x))
            && xs.iter().filter(|x| !deletes.contains(*x)).all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn insert_then_remove_restores_keys(xs: Vec<i8>, key: i8) -> bool {
        let mut tree: Tree<_> = xs.into_iter().filter(|x| *x != key).collect();
        let before: Vec<i8> = tree.iter().copied().collect();

        tree.insert(key).is_ok()
            && tree.remove(&key) == Ok(key)
            && tree.iter().copied().eq(before)
            && well_formed(&tree)
    }
}

quickcheck::quickcheck! {
    fn failed_mutations_change_nothing(xs: Vec<i8>, key: i8) -> bool {
        let mut tree: Tree<_> = xs.into_iter().collect();
        let before = tree.clone();

        if tree.contains(&key) {
            tree.insert(key).is_err() && tree == before
        } else {
            tree.remove(&key).is_err() && tree == before
        }
    }
}

quickcheck::quickcheck! {
    fn height_bound(xs: Vec<u32>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let bound = 1.4405 * ((tree.len() + 2) as f64).log2() - 0.3277;

        (tree.height() as f64) <= bound
    }
}
