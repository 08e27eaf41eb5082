use linked_bst::Tree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set, checking the tree is
/// still a valid BST after each one.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        let agrees = match op {
            Op::Insert(v) => bst.insert(v.clone()) == set.insert(v.clone()),
            Op::Remove(v) => bst.remove(v) == set.take(v),
        };
        if !agrees || !bst.is_valid() || bst.len() != set.len() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set) && tree.inorder() == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.retrieve(x) == Some(*x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.retrieve(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    for delete in &deletes {
        let len = tree.len();
        if tree.remove(delete).is_some() && tree.len() != len - 1 {
            return false;
        }
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.retrieve(x).is_none())
        && still_present.iter().all(|x| tree.retrieve(x).is_some())
        && tree.is_valid()
}

#[quickcheck]
fn reinserting_is_rejected(xs: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    let len = tree.len();

    xs.iter().all(|x| !tree.insert(*x)) && tree.len() == len
}

#[quickcheck]
fn inorder_is_strictly_increasing(xs: Vec<i16>) -> bool {
    let tree: Tree<i16> = xs.into_iter().collect();
    let values = tree.inorder();

    values.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn preorder_starts_and_postorder_ends_at_root(xs: Vec<i16>) -> bool {
    let tree: Tree<i16> = xs.iter().copied().collect();

    match xs.first() {
        Some(root) => {
            tree.preorder().first() == Some(root) && tree.postorder().last() == Some(root)
        }
        None => tree.preorder().is_empty() && tree.postorder().is_empty(),
    }
}

#[quickcheck]
fn levelorder_visits_shallow_values_first(xs: Vec<i16>) -> bool {
    let tree: Tree<i16> = xs.iter().copied().collect();

    // The depth of a value is the number of values passed on the way to it.
    let depth = |value: &i16| {
        let mut depth = 0;
        let mut low = None;
        let mut high = None;
        // Pre-order reaches every ancestor before the value itself. Anything else seen
        // before it sits outside the range the ancestors so far allow.
        for x in tree.preorder() {
            if x == *value {
                break;
            }
            let inside = low.map_or(true, |low| x > low) && high.map_or(true, |high| x < high);
            if !inside {
                continue;
            }
            depth += 1;
            if *value < x {
                high = Some(x);
            } else {
                low = Some(x);
            }
        }
        depth
    };

    let depths: Vec<_> = tree.levelorder().iter().map(depth).collect();
    depths.windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn child_counts_sum_to_len(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.into_iter().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    tree.leaf_count() + tree.one_child_count() + tree.two_child_count() == tree.len()
        && tree.count() == tree.len()
}

#[quickcheck]
fn min_and_max_match_the_model(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let set: BTreeSet<i8> = xs.into_iter().collect();

    tree.min().ok() == set.first().copied()
        && tree.max().ok() == set.last().copied()
        && tree.min() == tree.min_r()
        && tree.max() == tree.max_r()
}

#[quickcheck]
fn identical_to_itself_and_clones(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.into_iter().collect();

    tree.is_identical(&tree) && tree.is_identical(&tree.clone())
}
