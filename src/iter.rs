//! Iterators over the values of a [`Tree`][crate::Tree].
//!
//! Every traversal keeps its pending work in a heap allocated stack or queue so that walking a
//! degenerate tree (one long chain of children) never recurses.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::{release, Node};

/// The three depth-first orders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Order {
    /// Left subtree, node, right subtree.
    In,
    /// Node, left subtree, right subtree.
    Pre,
    /// Left subtree, right subtree, node.
    Post,
}

/// A pending step of a depth-first walk.
enum Visit<'a, T> {
    /// Expand this subtree into more steps.
    Descend(&'a Node<T>),
    /// Hand out this node.
    Yield(&'a Node<T>),
}

/// Depth-first walk over the nodes of a subtree.
pub(crate) struct DepthFirstNodes<'a, T> {
    work: Vec<Visit<'a, T>>,
    order: Order,
}

impl<'a, T> DepthFirstNodes<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, order: Order) -> Self {
        Self {
            work: root.map(Visit::Descend).into_iter().collect(),
            order,
        }
    }

    fn push_child(&mut self, child: Option<&'a Node<T>>) {
        if let Some(child) = child {
            self.work.push(Visit::Descend(child));
        }
    }
}

impl<'a, T> Clone for DepthFirstNodes<'a, T> {
    fn clone(&self) -> Self {
        let work = self
            .work
            .iter()
            .map(|visit| match visit {
                Visit::Descend(n) => Visit::Descend(*n),
                Visit::Yield(n) => Visit::Yield(*n),
            })
            .collect();
        Self {
            work,
            order: self.order,
        }
    }
}

impl<'a, T> Iterator for DepthFirstNodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = match self.work.pop()? {
                Visit::Yield(node) => return Some(node),
                Visit::Descend(node) => node,
            };

            // The work list is a stack so steps are pushed in reverse.
            match self.order {
                Order::In => {
                    self.push_child(node.right());
                    self.work.push(Visit::Yield(node));
                    self.push_child(node.left());
                }
                Order::Pre => {
                    self.push_child(node.right());
                    self.push_child(node.left());
                    return Some(node);
                }
                Order::Post => {
                    self.work.push(Visit::Yield(node));
                    self.push_child(node.right());
                    self.push_child(node.left());
                }
            }
        }
    }
}

impl<'a, T> FusedIterator for DepthFirstNodes<'a, T> {}

/// Breadth-first walk over the nodes of a subtree.
pub(crate) struct LevelOrderNodes<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrderNodes<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Clone for LevelOrderNodes<'a, T> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue.clone(),
        }
    }
}

impl<'a, T> Iterator for LevelOrderNodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}

impl<'a, T> FusedIterator for LevelOrderNodes<'a, T> {}

/// A depth-first iterator over the values of a [`Tree`][crate::Tree].
///
/// Created by [`Tree::iter_inorder`][crate::Tree::iter_inorder],
/// [`Tree::iter_preorder`][crate::Tree::iter_preorder] and
/// [`Tree::iter_postorder`][crate::Tree::iter_postorder].
pub struct DepthFirst<'a, T> {
    nodes: DepthFirstNodes<'a, T>,
    remaining: usize,
}

impl<'a, T> DepthFirst<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, order: Order, len: usize) -> Self {
        Self {
            nodes: DepthFirstNodes::new(root, order),
            remaining: len,
        }
    }
}

impl<'a, T> Clone for DepthFirst<'a, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for DepthFirst<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.next()?;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for DepthFirst<'a, T> {}
impl<'a, T> FusedIterator for DepthFirst<'a, T> {}

/// A level-order iterator over the values of a [`Tree`][crate::Tree]. This is the default
/// iteration order.
///
/// Created by [`Tree::iter`][crate::Tree::iter].
pub struct Iter<'a, T> {
    nodes: LevelOrderNodes<'a, T>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            nodes: LevelOrderNodes::new(root),
            remaining: len,
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.next()?;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}

/// An owning level-order iterator over the values of a [`Tree`][crate::Tree].
///
/// Created by calling `into_iter` on a `Tree`.
pub struct IntoIter<T> {
    queue: VecDeque<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Option<Box<Node<T>>>, len: usize) -> Self {
        Self {
            queue: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        release(self.queue.drain(..));
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        let Node {
            value, left, right, ..
        } = *node;
        self.queue.extend(left);
        self.queue.extend(right);
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
