//! Traversals over a [Tree](crate::Tree).
//!
//! - [Traverse]: read-only iterator over values, from [Tree::traverse](crate::Tree::traverse)
//! - [TreeIterator]: mutable traversal with its own position, from
//!   [Tree::tree_iter](crate::Tree::tree_iter)

pub mod traversal;
pub mod tree_iterator;

pub use traversal::TraversalOrder;
pub use traversal::Traverse;
pub use tree_iterator::IterState;
pub use tree_iterator::TreeIterator;
