//! A plain Binary Search Tree that remembers the height of every node.
//!
//! The tree never rotates, so its shape is decided entirely by the order of insertions and
//! removals. The heights are kept up to date anyway so the shape can be inspected: see
//! [`Tree::height`], [`Tree::is_balanced`] and [`Tree::is_valid`].
//!
//! # Examples
//!
//! ```
//! use linked_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.retrieve(&1), None);
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.retrieve(&1), Some(1));
//!
//! // Inserting an equal value is rejected and the tree is unchanged.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Removing a value hands it back.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert_eq!(tree.retrieve(&1), None);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::error::TreeError;
use crate::iter::{DepthFirst, DepthFirstNodes, IntoIter, Iter, LevelOrderNodes, Order};
use crate::node::{release, Children, Link, Node};
use crate::path::Path;

/// A Binary Search Tree holding unique values. This can be used for inserting, retrieving,
/// and removing values. Values are ordered by their `Ord` implementation, and lookups may use
/// any borrowed form of the value (like [`BTreeSet`][std::collections::BTreeSet]).
///
/// Read accessors return clones or shared references; nothing hands out mutable access to a
/// stored value, so the ordering of stored values can't be disturbed from outside.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        release(self.root.take());
    }
}

/// Copies the shape and cached heights exactly, so the clone is
/// [identical][Tree::is_identical] to the tree it was cloned from.
impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        // In post-order both subtrees of a node are finished (and on top of the stack, right
        // above left) by the time the node itself comes up.
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        for node in DepthFirstNodes::new(self.root(), Order::Post) {
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                height: node.height,
                left,
                right,
                value: node.value.clone(),
            }));
        }

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

/// Lists the nodes in level order along with their cached heights.
impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(LevelOrderNodes::new(self.root()))
            .finish()
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Inserts values in iteration order. Values equal to one already in the tree are dropped.
impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.root.take(), self.len)
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` unless an equal value is already present. Returns whether the value was
    /// inserted; a rejected value is dropped and the stored one is left untouched.
    ///
    /// The new value always becomes a leaf. Nothing is rotated, so inserting sorted values
    /// builds a chain as tall as the tree is long.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(2));
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let (path, found) = Path::search(self.root.take(), &value);
        let inserted = found.is_none();
        let subtree = found.or_else(|| Some(Node::new_boxed(value)));
        self.root = path.reattach(subtree);

        if inserted {
            self.len += 1;
        }
        trace!(inserted, len = self.len, "insert");

        inserted
    }

    /// Removes the value equal to `key` and returns it. If the tree holds no such value,
    /// nothing happens and `None` is returned.
    ///
    /// A removed node with two children is replaced by its in-order predecessor, the largest
    /// value of its left subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<i32> = [5, 3, 8, 1, 4, 7].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Some(5));
    /// assert_eq!(tree.remove(&5), None);
    ///
    /// // 4 was the largest value left of 5 so it took 5's place.
    /// assert_eq!(tree.preorder(), [4, 3, 1, 8, 7]);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        let (path, found) = Path::search(self.root.take(), key);
        let (removed, replacement) = match found {
            Some(node) => {
                let (value, replacement) = node.splice_out();
                (Some(value), replacement)
            }
            None => (None, None),
        };
        self.root = path.reattach(replacement);

        if removed.is_some() {
            self.len -= 1;
        }
        trace!(removed = removed.is_some(), len = self.len, "remove");

        removed
    }

    /// Returns a clone of the value equal to `key`, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert("b".to_string());
    ///
    /// assert_eq!(tree.retrieve("b"), Some("b".to_string()));
    /// assert_eq!(tree.retrieve("z"), None);
    /// ```
    pub fn retrieve<Q>(&self, key: &Q) -> Option<T>
    where
        T: Borrow<Q> + Clone,
        Q: Ord + ?Sized,
    {
        self.get(key).cloned()
    }

    /// Same as [`Tree::retrieve`] but searches recursively.
    pub fn retrieve_r<Q>(&self, key: &Q) -> Option<T>
    where
        T: Borrow<Q> + Clone,
        Q: Ord + ?Sized,
    {
        self.root().and_then(|n| n.find(key)).cloned()
    }

    /// Returns a shared reference to the value equal to `key`, if there is one.
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root();
        while let Some(n) = node {
            node = match key.cmp(n.value.borrow()) {
                Ordering::Less => n.left(),
                Ordering::Equal => return Some(&n.value),
                Ordering::Greater => n.right(),
            };
        }
        None
    }

    /// Whether a value equal to `key` is in the tree.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns a clone of the smallest value.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.min(), Err(TreeError::Empty { operation: "min" }));
    ///
    /// tree.extend([3, 1, 2]);
    /// assert_eq!(tree.min(), Ok(1));
    /// ```
    pub fn min(&self) -> Result<T, TreeError>
    where
        T: Clone,
    {
        let mut node = self.root().ok_or(TreeError::Empty { operation: "min" })?;
        while let Some(left) = node.left() {
            node = left;
        }
        Ok(node.value.clone())
    }

    /// Same as [`Tree::min`] but walks the tree recursively.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] if the tree is empty.
    pub fn min_r(&self) -> Result<T, TreeError>
    where
        T: Clone,
    {
        let root = self.root().ok_or(TreeError::Empty { operation: "min" })?;
        Ok(root.leftmost().clone())
    }

    /// Returns a clone of the largest value.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] if the tree is empty.
    pub fn max(&self) -> Result<T, TreeError>
    where
        T: Clone,
    {
        let mut node = self.root().ok_or(TreeError::Empty { operation: "max" })?;
        while let Some(right) = node.right() {
            node = right;
        }
        Ok(node.value.clone())
    }

    /// Same as [`Tree::max`] but walks the tree recursively.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] if the tree is empty.
    pub fn max_r(&self) -> Result<T, TreeError>
    where
        T: Clone,
    {
        let root = self.root().ok_or(TreeError::Empty { operation: "max" })?;
        Ok(root.rightmost().clone())
    }

    /// The number of levels in the tree. An empty tree has a height of 0 and a tree with a
    /// single value has a height of 1.
    pub fn height(&self) -> usize {
        crate::node::height(self.root())
    }

    /// Counts the nodes reachable from the root. Unlike [`Tree::len`] this walks the whole
    /// tree; the two always agree.
    pub fn count(&self) -> usize {
        self.nodes().count()
    }

    /// The number of nodes without children.
    pub fn leaf_count(&self) -> usize {
        self.count_children(Children::Zero)
    }

    /// The number of nodes with exactly one child.
    pub fn one_child_count(&self) -> usize {
        self.count_children(Children::One)
    }

    /// The number of nodes with two children.
    pub fn two_child_count(&self) -> usize {
        self.count_children(Children::Two)
    }

    fn count_children(&self, children: Children) -> usize {
        self.nodes().filter(|n| n.children() == children).count()
    }

    /// Whether the heights of the two subtrees of every node differ by at most one.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let bushy: Tree<i32> = [3, 1, 5, 0, 2, 4, 6].into_iter().collect();
    /// assert!(bushy.is_balanced());
    ///
    /// let chain: Tree<i32> = (1..=5).collect();
    /// assert!(!chain.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        self.nodes().all(|n| n.height_difference() <= 1)
    }

    /// Checks that every value lies strictly between the bounds set by its ancestors (a node
    /// bounds its left subtree from above and its right subtree from below) and that every
    /// cached height is one more than the taller child's.
    pub fn is_valid(&self) -> bool
    where
        T: Ord,
    {
        struct Bounded<'a, T> {
            node: &'a Node<T>,
            lower: Option<&'a T>,
            upper: Option<&'a T>,
            depth: usize,
        }

        let mut stack: Vec<Bounded<'_, T>> = self
            .root()
            .map(|node| Bounded {
                node,
                lower: None,
                upper: None,
                depth: 0,
            })
            .into_iter()
            .collect();

        while let Some(Bounded {
            node,
            lower,
            upper,
            depth,
        }) = stack.pop()
        {
            let above_lower = lower.map_or(true, |lower| node.value > *lower);
            let below_upper = upper.map_or(true, |upper| node.value < *upper);
            if !(above_lower && below_upper) {
                debug!(depth, "order violation");
                return false;
            }
            if !node.has_valid_height() {
                debug!(depth, height = node.height, "height violation");
                return false;
            }

            if let Some(left) = node.left() {
                stack.push(Bounded {
                    node: left,
                    lower,
                    upper: Some(&node.value),
                    depth: depth + 1,
                });
            }
            if let Some(right) = node.right() {
                stack.push(Bounded {
                    node: right,
                    lower: Some(&node.value),
                    upper,
                    depth: depth + 1,
                });
            }
        }

        true
    }

    /// Whether `other` has exactly the same shape as `self`, with equal values and heights at
    /// every position. Two trees holding the same values are not identical if they were built
    /// in different orders that produced different shapes.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let a: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
    /// let b: Tree<i32> = [5, 8, 3, 1, 4].into_iter().collect();
    /// let c: Tree<i32> = [5, 3, 1, 4, 8].into_iter().collect();
    ///
    /// assert!(a.is_identical(&b));
    /// assert!(a.is_identical(&c));
    ///
    /// let d: Tree<i32> = [4, 3, 5, 1, 8].into_iter().collect();
    /// assert!(!a.is_identical(&d));
    /// ```
    pub fn is_identical(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        if self.len != other.len {
            return false;
        }

        let mut stack = vec![(self.root(), other.root())];
        while let Some(pair) = stack.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) if a.value == b.value && a.height == b.height => {
                    stack.push((a.left(), b.left()));
                    stack.push((a.right(), b.right()));
                }
                _ => return false,
            }
        }

        true
    }

    /// Iterates over the values in level order: the root, then every value one level down
    /// from left to right, and so on.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.len)
    }

    /// Iterates over the values in ascending order.
    pub fn iter_inorder(&self) -> DepthFirst<'_, T> {
        DepthFirst::new(self.root(), Order::In, self.len)
    }

    /// Iterates over the values visiting each node before its left and then its right
    /// subtree.
    pub fn iter_preorder(&self) -> DepthFirst<'_, T> {
        DepthFirst::new(self.root(), Order::Pre, self.len)
    }

    /// Iterates over the values visiting each node after its left and then its right
    /// subtree.
    pub fn iter_postorder(&self) -> DepthFirst<'_, T> {
        DepthFirst::new(self.root(), Order::Post, self.len)
    }

    /// Clones the values in ascending order.
    pub fn inorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter_inorder().cloned().collect()
    }

    /// Clones the values in pre-order. The first value is the root's.
    pub fn preorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter_preorder().cloned().collect()
    }

    /// Clones the values in post-order. The last value is the root's.
    pub fn postorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter_postorder().cloned().collect()
    }

    /// Clones the values in level order.
    pub fn levelorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    fn nodes(&self) -> LevelOrderNodes<'_, T> {
        LevelOrderNodes::new(self.root())
    }
}
