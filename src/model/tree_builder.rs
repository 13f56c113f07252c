//! Tree-wide policies and the chained builder that sets them.
//!
//! A [Tree] carries three policies, fixed at construction:
//! - **null acceptance**: whether values reporting [TreeValue::is_null] may be stored
//! - **duplicates**: whether a value may occur at more than one node;
//!   when disallowed, writing an existing value evicts the written-to node
//! - **max children**: upper bound on children per node, `0` for unbounded
//!
//! ```text
//! TreeBuilder::with_root(v) ──→ rejecting_null / without_duplicates / with_max_children ──→ build()
//! ```

use crate::error::TreeError;
use crate::model::tree::Tree;
use crate::model::value::TreeValue;

/// Value of `max_children` meaning "no bound".
pub const UNBOUNDED: usize = 0;

// =#========================================================================#=
// TREE CONFIG
// =#========================================================================#=
/// Policies of a [Tree].
///
/// The default accepts null, allows duplicates and does not bound the
/// number of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// Whether null values may be stored
    pub accepts_null: bool,
    /// Whether a value may occur at several nodes
    pub allows_duplicates: bool,
    /// Maximal number of children per node; [UNBOUNDED] for no limit
    pub max_children: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            accepts_null: true,
            allows_duplicates: true,
            max_children: UNBOUNDED,
        }
    }
}

impl TreeConfig {
    /// Returns whether the number of children per node is limited.
    pub fn is_bounded(&self) -> bool {
        self.max_children != UNBOUNDED
    }

    /// Returns whether a node with `count` children can take another one.
    pub fn has_room(&self, count: usize) -> bool {
        !self.is_bounded() || count < self.max_children
    }
}

// =#========================================================================#=
// TREE BUILDER
// =#========================================================================#=
/// Chained construction of a [Tree] with non-default policies.
///
/// # Example
/// ```
/// use cursortree::TreeBuilder;
///
/// let mut tree = TreeBuilder::with_root("A")
///     .without_duplicates()
///     .with_max_children(2)
///     .build()?;
///
/// assert!(tree.add_child("B")?);
/// assert!(tree.add_child("C")?);
/// assert!(!tree.add_child("D")?); // full
/// # Ok::<(), cursortree::TreeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TreeBuilder<T> {
    root: T,
    config: TreeConfig,
}

impl<T> TreeBuilder<T> {
    /// Starts a builder for a tree with the given root value and default policies.
    pub fn with_root(root: T) -> Self {
        TreeBuilder {
            root,
            config: TreeConfig::default(),
        }
    }

    /// Replaces all policies at once.
    pub fn with_config(mut self, config: TreeConfig) -> Self {
        self.config = config;
        self
    }

    /// Configure the tree to reject null values.
    pub fn rejecting_null(mut self) -> Self {
        self.config.accepts_null = false;
        self
    }

    /// Configure the tree to disallow duplicate values.
    pub fn without_duplicates(mut self) -> Self {
        self.config.allows_duplicates = false;
        self
    }

    /// Configure the maximal number of children per node; `0` means unbounded.
    pub fn with_max_children(mut self, max_children: usize) -> Self {
        self.config.max_children = max_children;
        self
    }
}

impl<T: TreeValue> TreeBuilder<T> {
    /// Builds the tree.
    ///
    /// # Errors
    /// [TreeError::NullRejected] if the root value is null and the tree
    /// rejects null.
    pub fn build(self) -> Result<Tree<T>, TreeError> {
        Tree::with_config(self.root, self.config)
    }
}
