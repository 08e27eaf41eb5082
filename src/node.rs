use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use crate::path::Path;

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Which child of a node a walk continued into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// Classification of a node by how many children it has.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Children {
    Zero,
    One,
    Two,
}

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,
}

/// Prints a single node without descending into its children. Use the `Debug` impl of
/// [`Tree`][crate::Tree] to see the whole structure.
impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("height", &self.height)
            .finish()
    }
}

/// Height of a possibly missing node. Missing nodes have a height of 0.
pub(crate) fn height<T>(node: Option<&Node<T>>) -> usize {
    node.map_or(0, |n| n.height)
}

/// Drops every node in the given subtrees using a heap allocated stack. Letting `Box` drop a
/// subtree recurses once per level, which overflows the call stack on long chains.
pub(crate) fn release<T>(subtrees: impl IntoIterator<Item = Box<Node<T>>>) {
    let mut stack: Vec<Box<Node<T>>> = subtrees.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            height: 1,
            left: None,
            right: None,
            value,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Link<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    pub(crate) fn fix_height(&mut self) {
        self.height = self.expected_height();
    }

    fn expected_height(&self) -> usize {
        height(self.left()).max(height(self.right())) + 1
    }

    /// Whether the cached height agrees with the heights of the children.
    pub(crate) fn has_valid_height(&self) -> bool {
        self.height == self.expected_height()
    }

    /// The absolute difference between the heights of the left and right subtrees.
    pub(crate) fn height_difference(&self) -> usize {
        height(self.left()).abs_diff(height(self.right()))
    }

    pub(crate) fn children(&self) -> Children {
        match (&self.left, &self.right) {
            (None, None) => Children::Zero,
            (Some(_), None) | (None, Some(_)) => Children::One,
            (Some(_), Some(_)) => Children::Two,
        }
    }

    /// Recursive search of this subtree.
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match key.cmp(self.value.borrow()) {
            Ordering::Less => self.left().and_then(|n| n.find(key)),
            Ordering::Equal => Some(&self.value),
            Ordering::Greater => self.right().and_then(|n| n.find(key)),
        }
    }

    /// Recursive walk to the smallest value of this subtree.
    pub(crate) fn leftmost(&self) -> &T {
        match self.left() {
            Some(left) => left.leftmost(),
            None => &self.value,
        }
    }

    /// Recursive walk to the largest value of this subtree.
    pub(crate) fn rightmost(&self) -> &T {
        match self.right() {
            Some(right) => right.rightmost(),
            None => &self.value,
        }
    }

    /// Removes this node from the tree, returning its value and the subtree that takes its
    /// place.
    ///
    /// A node with two children is replaced by its in-order predecessor, the largest node of
    /// its left subtree. The predecessor's own left subtree moves into the gap it leaves
    /// behind and every node passed on the way to it has its height recomputed.
    ///
    /// # Diagram
    ///
    /// Removing `d`, whose predecessor is `c`:
    ///
    /// ```text
    ///        d                       c
    ///      /   \                   /   \
    ///     a     e     remove ->   a     e
    ///      \                       \
    ///       c                       b
    ///      /
    ///     b
    /// ```
    pub(crate) fn splice_out(self: Box<Self>) -> (T, Link<T>)
    where
        T: Ord,
    {
        let Node {
            value, left, right, ..
        } = *self;

        let replacement = match (left, right) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let (path, mut predecessor) = Path::rightmost(left);
                // An empty path means the left child is the predecessor and keeps its own left
                // subtree.
                predecessor.left = path.reattach(predecessor.left.take());
                predecessor.right = Some(right);
                predecessor.fix_height();
                Some(predecessor)
            }
        };

        (value, replacement)
    }
}
