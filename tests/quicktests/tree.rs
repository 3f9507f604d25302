use bst::{Tree, TreeError};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => assert_eq!(bst.insert(x.clone()), set.insert(x.clone())),
            Op::Delete(x) => assert_eq!(bst.delete(x).is_ok(), set.remove(x)),
            Op::Rebalance => bst.rebalance(),
        }
    }
}

#[test]
fn delete_two_children_keeps_node_in_place() {
    let mut tree = Tree::new([10, 1, 1, 4, 6, 8, 11, 20, 9]);

    tree.delete(&10).unwrap();

    assert_eq!(tree.inorder(), [&1, &4, &6, &8, &9, &11, &20]);
    let right = tree.root().and_then(|root| root.right()).unwrap();
    assert_eq!(right.value(), &11);
}

#[test]
fn depth_of_missing_value() {
    let tree = Tree::new([1, 2, 3]);

    assert_eq!(tree.depth(&4), Err(TreeError::NotFound));
    assert_eq!(Tree::<i32>::default().depth(&4), Err(TreeError::EmptyTree));
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new(xs.iter().copied());
        let mut set: BTreeSet<_> = xs.into_iter().collect();

        do_ops(&ops, &mut tree, &mut set);
        tree.inorder() == set.iter().collect::<Vec<_>>()
    }
}

quickcheck::quickcheck! {
    fn inorder_is_sorted_unique(xs: Vec<i8>) -> bool {
        let tree = Tree::new(xs.iter().copied());
        let expected: BTreeSet<_> = xs.iter().collect();

        tree.inorder() == expected.into_iter().collect::<Vec<_>>()
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree = Tree::new(xs.iter().copied());

        xs.iter().all(|x| tree.find(x).map(|node| node.value()) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = Tree::new(xs.iter().copied());
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none() && tree.depth(x).is_err())
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::new(xs.iter().copied());
        for delete in &deletes {
            let present = tree.contains(delete);
            if tree.delete(delete).is_ok() != present {
                return false;
            }
        }

        let deleted: HashSet<_> = deletes.iter().collect();
        deletes.iter().all(|x| tree.find(x).is_none())
            && xs.iter().filter(|x| !deleted.contains(x)).all(|x| tree.find(x).is_some())
    }
}

quickcheck::quickcheck! {
    fn duplicate_insert_changes_nothing(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new(xs.iter().copied());
        let before: Vec<i8> = tree.preorder().into_iter().copied().collect();

        xs.iter().all(|x| !tree.insert(*x) && !tree.insert_recursive(*x))
            && tree.preorder().into_iter().copied().collect::<Vec<_>>() == before
    }
}

quickcheck::quickcheck! {
    fn rebalance_keeps_values_and_balances(xs: Vec<i8>, inserts: Vec<i8>) -> bool {
        let mut tree = Tree::new(xs);
        for x in inserts {
            tree.insert(x);
        }
        let before: Vec<i8> = tree.inorder().into_iter().copied().collect();

        tree.rebalance();
        let expected_height = match tree.len() {
            0 => 0,
            n => n.ilog2() as usize + 1,
        };

        tree.is_balanced()
            && tree.height() == expected_height
            && tree.inorder().into_iter().copied().collect::<Vec<_>>() == before
    }
}
