//! Error type for cursor movement and structural mutation.
//!
//! Running out of child slots on a bounded tree is *not* an error: the adding
//! methods report it as `Ok(false)`. Everything in [TreeError] is a violated
//! precondition and is reported before the tree is touched.

use thiserror::Error;

// =#========================================================================#=
// TREE ERROR
// =#========================================================================#=
/// Errors raised by [Tree](crate::Tree), [Node](crate::Node) and
/// [TreeIterator](crate::TreeIterator) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// An index lies outside the valid range `0..bound` (or `0..=bound` for inserts).
    #[error("index {index} is out of range (bound {bound})")]
    OutOfRange {
        /// The offending index
        index: usize,
        /// The bound the index was checked against
        bound: usize,
    },
    /// The requested sibling, parent, child or next value does not exist.
    #[error("no such element: {0}")]
    NoSuchElement(&'static str),
    /// A null value was given to a tree that does not accept null.
    #[error("tree does not accept null values")]
    NullRejected,
    /// The operation cannot be carried out on this tree or node.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

impl TreeError {
    pub(crate) fn out_of_range(index: usize, bound: usize) -> Self {
        TreeError::OutOfRange { index, bound }
    }
}
