//! Cursortree is a library providing a mutable general tree with a movable
//! cursor.
//!
//! Each node holds a value, at most one parent and an ordered list of
//! children. Reads move a single `current` cursor through the tree, and all
//! structural mutation happens at that cursor.
//! Core functionality provided:
//! - Cursor: move to root, child, parent, next and previous sibling.
//! - Mutation: set values, add/insert children (one or many), remove children
//!   by value or position, remove matching descendants at any depth.
//! - Extraction: [Tree::subtree] copies the subtree at the cursor,
//!   [Tree::split] moves it out into a new tree.
//! - Traversal: pre-order, post-order and breadth-first, either read-only
//!   ([Tree::traverse]) or as a [TreeIterator] with its own position that can
//!   move, write and split mid-traversal.
//! - Policies (see [TreeBuilder]):
//!   - Null acceptance: reject values for which [TreeValue::is_null] holds
//!   - Duplicates: when disallowed, writing a value that already exists
//!     elsewhere *evicts the written-to node* (with its subtree)
//!   - Max children: adding beyond the bound returns `Ok(false)`
//! - The tree uses the arena pattern, so nodes refer to each other only by
//!   [NodeIndex], never by reference.
//!
//! Limitations:
//! - Not thread-safe, not persistent, not balanced
//! - No lookup index: finding a value is a linear search
//!
//! # Usage patterns
//! Build with default policies via [Tree::new], or configure the policies
//! with [TreeBuilder].
//!
//! ## Example Cursor
//! ```
//! use cursortree::Tree;
//!
//! let mut tree = Tree::new("A");
//! tree.add_child("B")?;
//! tree.add_child("C")?;
//! assert_eq!(tree.children_count(), 2);
//!
//! assert_eq!(*tree.move_to_child(0)?, "B");
//! assert_eq!(*tree.move_to_next_sibling()?, "C");
//! assert_eq!(tree.depth(), 1);
//! # Ok::<(), cursortree::TreeError>(())
//! ```
//!
//! ## Example Policies
//! ```
//! use cursortree::{TraversalOrder, TreeBuilder};
//!
//! let mut tree = TreeBuilder::with_root("A")
//!     .without_duplicates()
//!     .with_max_children(2)
//!     .build()?;
//! tree.add_all_children(["B", "C"])?;
//! assert!(!tree.add_child("D")?); // no room left
//!
//! tree.move_to_child(1)?;
//! tree.set("B")?; // "B" exists elsewhere: node "C" is evicted
//! assert_eq!(tree.num_nodes(), 2);
//!
//! let values: Vec<_> = tree.traverse(TraversalOrder::BreadthFirst).collect();
//! assert_eq!(values, [&"A", &"B"]);
//! # Ok::<(), cursortree::TreeError>(())
//! ```

pub mod error;
pub mod iter;
pub mod model;

pub use error::TreeError;
pub use iter::{IterState, TraversalOrder, Traverse, TreeIterator};
pub use model::{ChildValues, Edge, Node, NodeIndex, Tree, TreeBuilder, TreeConfig, TreeValue};
