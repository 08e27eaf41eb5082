//! Errors returned by [`Tree`][crate::Tree] operations.
//!
//! Looking up a missing key or inserting a duplicate are ordinary outcomes and are reported
//! through `Option` and `bool` results instead. The only error is asking an empty tree for
//! something that only a non-empty tree has.

use thiserror::Error;

/// An operation on a [`Tree`][crate::Tree] that could not be completed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The operation needs at least one node but the tree is empty.
    #[error("cannot find {operation} of an empty tree")]
    Empty {
        /// Name of the operation that was attempted, e.g. `"min"`.
        operation: &'static str,
    },
}
