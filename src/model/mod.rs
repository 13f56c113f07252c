//! Data model of the cursor tree.
//!
//! # Tree representation
//! A [Tree] uses the arena pattern to store [Node]s, referenced by
//! [NodeIndex]. Every node owns the [Edge]s to its children and keeps its
//! own parent edge as a plain back-reference:
//!
//! | Link | Stored at | Role |
//! |------|-----------|------|
//! | child edges | parent | owning, ordered (sibling order) |
//! | parent edge | child | non-owning, answers "who is my parent" |
//!
//! # Building trees
//! - [Tree::new] with default policies
//! - [TreeBuilder] to reject null, disallow duplicates or bound the children
//!
//! # Values
//! Stored values implement [TreeValue] (equality and null check). Bulk
//! adders take any [ChildValues] source.

pub mod edge;
pub mod node;
pub mod tree;
pub mod tree_builder;
pub mod value;

pub use edge::Edge;
pub use node::Node;
pub use tree::NodeIndex;
pub use tree::Tree;
pub use tree_builder::TreeBuilder;
pub use tree_builder::TreeConfig;
pub use value::ChildValues;
pub use value::TreeValue;
