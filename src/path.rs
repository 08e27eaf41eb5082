//! Walking down a tree while keeping the way back up.
//!
//! Insertion and removal have to recompute the height of every ancestor of the node they
//! change. Doing that with recursion costs one stack frame per level, and because this tree
//! never rebalances a level exists for every key inserted in sorted order. A [`Path`]
//! instead detaches each node it passes and keeps it in a `Vec` together with the side the
//! walk continued on. [`Path::reattach`] puts the nodes back together bottom-up, fixing
//! heights as it goes.

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::node::{Link, Node, Side};

pub(crate) struct Path<T> {
    steps: Vec<(Box<Node<T>>, Side)>,
}

impl<T> Path<T> {
    fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Walks from `root` towards `key`. Returns the nodes passed on the way along with the
    /// node holding `key`, if there is one. The returned node is detached from its parent; on
    /// a miss the gap it would occupy is empty.
    pub(crate) fn search<Q>(root: Link<T>, key: &Q) -> (Self, Link<T>)
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut path = Self::new();
        let mut link = root;

        while let Some(mut node) = link {
            let side = match key.cmp(node.value.borrow()) {
                Ordering::Less => Side::Left,
                Ordering::Equal => return (path, Some(node)),
                Ordering::Greater => Side::Right,
            };
            link = node.child_mut(side).take();
            path.steps.push((node, side));
        }

        (path, None)
    }

    /// Walks right from `node` until reaching the largest node of its subtree. That node is
    /// returned detached; the path is empty when `node` itself has no right child.
    pub(crate) fn rightmost(node: Box<Node<T>>) -> (Self, Box<Node<T>>) {
        let mut path = Self::new();
        let mut node = node;

        while let Some(right) = node.right.take() {
            path.steps.push((node, Side::Right));
            node = right;
        }

        (path, node)
    }

    /// How many nodes were passed.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.steps.len()
    }

    /// Puts `subtree` into the gap at the bottom of the path and reattaches every detached
    /// node above it, recomputing heights on the way up. Returns the root of the rebuilt
    /// tree.
    pub(crate) fn reattach(self, subtree: Link<T>) -> Link<T>
    where
        T: Ord,
    {
        let mut subtree = subtree;
        for (mut node, side) in self.steps.into_iter().rev() {
            *node.child_mut(side) = subtree;
            node.fix_height();

            if cfg!(debug_assertions) {
                if let Some(left) = node.left() {
                    assert!(node.value > left.value);
                }
                if let Some(right) = node.right() {
                    assert!(node.value < right.value);
                }
            }

            subtree = Some(node);
        }

        subtree
    }
}
