//! Directed parent → child link between two nodes of the arena.

use crate::model::tree::NodeIndex;

/// Immutable record of one parent/child relationship.
///
/// An edge carries no lifecycle of its own: it lives exactly as long as the
/// relationship, stored once in the parent's child list and once as the
/// child's parent edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    parent: NodeIndex,
    child: NodeIndex,
}

impl Edge {
    /// Creates the edge `parent → child`.
    pub fn new(parent: NodeIndex, child: NodeIndex) -> Self {
        Edge { parent, child }
    }

    /// Returns the index of the parent end.
    pub fn parent(&self) -> NodeIndex {
        self.parent
    }

    /// Returns the index of the child end.
    pub fn child(&self) -> NodeIndex {
        self.child
    }
}
