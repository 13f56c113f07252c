//! Node module of the tree arena.

use crate::error::TreeError;
use crate::model::edge::Edge;
use crate::model::tree::NodeIndex;

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// A single element of a [Tree](crate::Tree): a value plus its links.
///
/// Nodes live in the tree arena and refer to each other only through
/// [NodeIndex] handles, so parent and child never own each other.
///
/// # Invariants
/// - `index` is the position of this node in the arena
/// - `parent_edge` is `None` exactly for the root; otherwise its child end is `index`
/// - every edge in `child_edges` has `index` as its parent end
/// - the order of `child_edges` is the sibling order
/// - `child_edges` stays `None` until the first child is added
///
/// Outside the crate, nodes are read-only; links change only through the
/// owning [Tree](crate::Tree), which keeps the arena consistent:
/// ```compile_fail
/// let mut tree = cursortree::Tree::new("A");
/// tree.add_child("B").unwrap();
/// let root = tree.root_index();
/// tree[root].remove_child(0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    /// Index of this node in the tree arena
    index: NodeIndex,
    /// Data held by this node
    value: T,
    /// Back-reference to the parent; non-owning
    parent_edge: Option<Edge>,
    /// Owned links to the children, in sibling order
    child_edges: Option<Vec<Edge>>,
}

impl<T> Node<T> {
    /// Creates a new root node.
    ///
    /// # Arguments
    /// * `index` - The index of this node in the tree (arena)
    /// * `value` - Data held by the node
    pub fn new_root(index: NodeIndex, value: T) -> Self {
        Node {
            index,
            value,
            parent_edge: None,
            child_edges: None,
        }
    }

    /// Creates a new node below `parent`.
    ///
    /// Only the back-reference is recorded here; the parent must still
    /// link the new node into its own child list.
    ///
    /// # Arguments
    /// * `index` - The index of this node in the tree (arena)
    /// * `value` - Data held by the node
    /// * `parent` - Index of the parent node
    pub fn new_child(index: NodeIndex, value: T, parent: NodeIndex) -> Self {
        Node {
            index,
            value,
            parent_edge: Some(Edge::new(parent, index)),
            child_edges: None,
        }
    }

    /// Returns the index of this node.
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    /// Returns a reference to the value of this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replaces the value of this node, returning the previous one.
    pub(crate) fn replace_value(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    /// Consumes the node and returns its value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns the edge to the parent, or `None` for the root.
    pub fn parent_edge(&self) -> Option<Edge> {
        self.parent_edge
    }

    /// Returns the index of the parent, or `None` for the root.
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent_edge.map(|edge| edge.parent())
    }

    /// Returns `true` if this node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent_edge.is_none()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.num_children() == 0
    }

    /// Returns the number of children.
    pub fn num_children(&self) -> usize {
        self.child_edges.as_ref().map_or(0, Vec::len)
    }

    /// Returns the edges to the children, in sibling order.
    pub fn child_edges(&self) -> &[Edge] {
        self.child_edges.as_deref().unwrap_or(&[])
    }

    /// Returns an iterator over the child indices, in sibling order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = NodeIndex> + '_ {
        self.child_edges().iter().map(|edge| edge.child())
    }

    /// Returns the index of the child at position `index`.
    ///
    /// # Errors
    /// [TreeError::OutOfRange] if there are no children or `index >= num_children()`.
    pub fn child(&self, index: usize) -> Result<NodeIndex, TreeError> {
        self.child_edges()
            .get(index)
            .map(|edge| edge.child())
            .ok_or_else(|| TreeError::out_of_range(index, self.num_children()))
    }

    /// Returns the sibling position of `child`, if it is a child of this node.
    pub fn position_of(&self, child: NodeIndex) -> Option<usize> {
        self.children().position(|c| c == child)
    }

    /// Appends `child` as the last child, creating the child list on first use.
    ///
    /// No bound is enforced here; the tree checks its `max_children` policy.
    pub(crate) fn add_child(&mut self, child: NodeIndex) {
        let edge = Edge::new(self.index, child);
        self.child_edges.get_or_insert_with(Vec::new).push(edge);
    }

    /// Inserts `child` at sibling position `index`, shifting later children right.
    ///
    /// # Errors
    /// [TreeError::OutOfRange] if `index > num_children()`.
    pub(crate) fn insert_child(&mut self, index: usize, child: NodeIndex) -> Result<(), TreeError> {
        let count = self.num_children();
        if index > count {
            return Err(TreeError::out_of_range(index, count));
        }
        let edge = Edge::new(self.index, child);
        self.child_edges.get_or_insert_with(Vec::new).insert(index, edge);
        Ok(())
    }

    /// Removes the child at sibling position `index` from the child list and
    /// returns its node index.
    ///
    /// Only the link is dropped; the removed child keeps its (now stale)
    /// parent edge and freeing its subtree is up to the tree.
    ///
    /// # Errors
    /// [TreeError::OutOfRange] under the same conditions as [child](Node::child).
    pub(crate) fn remove_child(&mut self, index: usize) -> Result<NodeIndex, TreeError> {
        match self.child_edges.as_mut() {
            Some(edges) if index < edges.len() => Ok(edges.remove(index).child()),
            _ => Err(TreeError::out_of_range(index, self.num_children())),
        }
    }
}
