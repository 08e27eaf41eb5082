//! This crate exposes a Binary Search Tree (BST) that tracks the height of
//! every node without ever rebalancing.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` where `height` is the number of
//! `Node`s on the longest path from the root `Node` to a leaf `Node`. The
//! [`Tree`] in this crate does nothing to keep that height down: its shape is
//! whatever the order of insertions and removals made it. Instead every `Node`
//! caches its height so the shape can be inspected cheaply, e.g. with
//! [`Tree::is_balanced`].
//!
//! ## Removal
//!
//! Removing a `Node` with two children replaces it with its in-order
//! predecessor: the largest `Node` of its left subtree.
//!
//! ```
//! use linked_bst::Tree;
//!
//! let mut tree: Tree<i32> = [5, 3, 8, 1, 4, 7].into_iter().collect();
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.inorder(), [1, 3, 4, 5, 7, 8]);
//!
//! assert_eq!(tree.remove(&5), Some(5));
//! assert_eq!(tree.preorder()[0], 4);
//! assert!(tree.is_valid());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod iter;
mod node;
mod path;
mod tree;


pub use error::TreeError;
pub use iter::{DepthFirst, IntoIter, Iter};
pub use tree::Tree;
