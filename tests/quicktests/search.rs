use avl_bst::search::Tree;
use avl_bst::traverse;

use std::collections::BTreeSet;

use crate::Op;

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        for op in &ops {
            match op {
                Op::Insert(k) => {
                    if tree.insert(*k).is_ok() != set.insert(*k) {
                        return false;
                    }
                }
                Op::Remove(k) => {
                    if tree.remove(k).ok() != set.take(k) {
                        return false;
                    }
                }
            }
        }

        traverse::is_ordered(tree.root())
            && traverse::depth(tree.root()) == tree.height()
            && tree.len() == set.len()
            && tree.iter().eq(set.iter())
    }
}

quickcheck::quickcheck! {
    fn insert_then_remove_restores_shape(xs: Vec<i8>, key: i8) -> bool {
        let mut tree: Tree<_> = xs.into_iter().filter(|x| *x != key).collect();
        let before = tree.clone();

        tree.insert(key).is_ok() && tree.remove(&key) == Ok(key) && tree == before
    }
}

quickcheck::quickcheck! {
    fn path_ends_at_parent(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| {
            let path = tree.path_to(x);
            let parent = tree.parent_of(x);
            match path.as_ref().and_then(|p| p.last()) {
                Some(last) => parent.map(|p| p.key()) == Some(last.key()),
                None => parent.is_none() && tree.root().map(|r| r.key()) == Some(x),
            }
        })
    }
}
