//! Provides the cursor tree.
//!
//! Core data structure of the crate:
//! * [`Tree<T>`] - General tree using the arena pattern, with a movable
//!   `current` cursor through which reads move and mutations happen
//! * [NodeIndex] as type used to index nodes in the arena

use std::collections::HashMap;
use std::fmt;

use log::{debug, trace};

use crate::error::TreeError;
use crate::iter::traversal::{Frontier, TraversalOrder, Traverse};
use crate::iter::tree_iterator::TreeIterator;
use crate::model::node::Node;
use crate::model::tree_builder::TreeConfig;
use crate::model::value::{ChildValues, TreeValue};

/// Index of a node in a tree (arena).
pub type NodeIndex = usize;

/// Direction of a sibling step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sibling {
    Next,
    Previous,
}

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// A mutable general tree represented using the arena pattern on [Node].
///
/// Nodes are stored in a vector of slots and referenced by [NodeIndex].
/// Removed nodes are freed eagerly; their slots are recycled by later
/// insertions, so an index of a removed node must not be used again.
///
/// # Cursor
/// The tree has a single movable `current` position. The `move_to_*`
/// methods move it, all mutations act on it, and the structural queries
/// ([depth](Tree::depth), [height](Tree::height), ...) are relative to it.
/// If a removal takes the current node with it, the cursor moves to the
/// parent of the removed subtree.
///
/// # Policies
/// Null acceptance, duplicate allowance and the child bound are fixed by the
/// [TreeConfig] given at construction, see [TreeBuilder](crate::TreeBuilder).
///
/// # Structure
/// - The root is created with the tree and can never be removed.
/// - Child order is sibling order; indices are 0-based and contiguous.
/// - Removal always takes the whole subtree; children are never promoted.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    /// Node slots of this tree (arena pattern); `None` marks a freed slot
    nodes: Vec<Option<Node<T>>>,

    /// Freed slots available for reuse
    vacant: Vec<NodeIndex>,

    /// Number of live nodes
    num_nodes: usize,

    /// Index of the root of this tree
    root_index: NodeIndex,

    /// Index of the node the cursor points to
    current_index: NodeIndex,

    /// Policies of this tree
    config: TreeConfig,
}

// ============================================================================
// New, Getters / Accessors, Movement (pub)
// ============================================================================
impl<T> Tree<T> {
    /// Creates a new tree holding only `root`, with default policies:
    /// null accepted, duplicates allowed, unbounded children.
    pub fn new(root: T) -> Self {
        Self::from_root(root, TreeConfig::default())
    }

    fn from_root(root: T, config: TreeConfig) -> Self {
        Tree {
            nodes: vec![Some(Node::new_root(0, root))],
            vacant: Vec::new(),
            num_nodes: 1,
            root_index: 0,
            current_index: 0,
            config,
        }
    }

    /// Returns the policies of this tree.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Returns whether null values may be stored.
    pub fn accepts_null(&self) -> bool {
        self.config.accepts_null
    }

    /// Returns whether a value may occur at more than one node.
    pub fn allows_duplicates(&self) -> bool {
        self.config.allows_duplicates
    }

    /// Returns the maximal number of children per node, `0` if unbounded.
    pub fn max_children(&self) -> usize {
        self.config.max_children
    }

    /// Returns the value of the root. Does not move the cursor.
    pub fn root(&self) -> &T {
        self[self.root_index].value()
    }

    /// Returns the value of the current node. Does not move the cursor.
    pub fn get(&self) -> &T {
        self[self.current_index].value()
    }

    /// Returns the index of the root.
    pub fn root_index(&self) -> NodeIndex {
        self.root_index
    }

    /// Returns the index of the current node.
    pub fn current_index(&self) -> NodeIndex {
        self.current_index
    }

    /// Returns the node at `index`, or `None` if the slot is out of bounds or freed.
    pub fn node(&self, index: NodeIndex) -> Option<&Node<T>> {
        self.nodes.get(index).and_then(Option::as_ref)
    }

    /// Returns the number of nodes in this tree.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Moves the cursor to the root and returns its value.
    pub fn move_to_root(&mut self) -> &T {
        self.current_index = self.root_index;
        self.get()
    }

    /// Moves the cursor to the child at `index` and returns its value.
    ///
    /// # Errors
    /// [TreeError::OutOfRange] if `index >= children_count()`.
    pub fn move_to_child(&mut self, index: usize) -> Result<&T, TreeError> {
        self.current_index = self[self.current_index].child(index)?;
        Ok(self.get())
    }

    /// Moves the cursor to the parent and returns its value.
    ///
    /// # Errors
    /// [TreeError::NoSuchElement] if the cursor is at the root.
    pub fn move_to_parent(&mut self) -> Result<&T, TreeError> {
        self.current_index = self[self.current_index]
            .parent()
            .ok_or(TreeError::NoSuchElement("the root has no parent"))?;
        Ok(self.get())
    }

    /// Moves the cursor to the next sibling and returns its value.
    ///
    /// With `i` the position of the current node among its siblings, the
    /// next sibling is the child at `i + 1` of the parent.
    ///
    /// # Errors
    /// [TreeError::NoSuchElement] if the current node is the last child or the root.
    pub fn move_to_next_sibling(&mut self) -> Result<&T, TreeError> {
        self.current_index = self.sibling_of(self.current_index, Sibling::Next)?;
        Ok(self.get())
    }

    /// Moves the cursor to the previous sibling and returns its value.
    ///
    /// # Errors
    /// [TreeError::NoSuchElement] if the current node is the first child or the root.
    pub fn move_to_previous_sibling(&mut self) -> Result<&T, TreeError> {
        self.current_index = self.sibling_of(self.current_index, Sibling::Previous)?;
        Ok(self.get())
    }

    /// Returns `true` if the current node is the root.
    pub fn is_root(&self) -> bool {
        self[self.current_index].is_root()
    }

    /// Returns `true` if the current node has no children.
    pub fn is_leaf(&self) -> bool {
        self[self.current_index].is_leaf()
    }

    /// Returns the number of children of the current node.
    pub fn children_count(&self) -> usize {
        self[self.current_index].num_children()
    }

    /// Returns the number of edges between the current node and the root (root: 0).
    pub fn depth(&self) -> usize {
        self.depth_of(self.current_index)
    }

    /// Returns the number of edges on the longest path from the current node
    /// down to a leaf (leaf: 0).
    pub fn height(&self) -> usize {
        self.height_of(self.current_index)
    }

    /// Returns the 1-based level of the current node, i.e. `depth() + 1`.
    pub fn level(&self) -> usize {
        self.depth() + 1
    }

    /// Removes the child at `index` together with its subtree.
    ///
    /// # Returns
    /// `false` if there is no child at `index`.
    pub fn remove_child_at(&mut self, index: usize) -> bool {
        match self[self.current_index].child(index) {
            Ok(child) => self.remove_subtree(child).is_ok(),
            Err(_) => false,
        }
    }

    /// Detaches the subtree at the current node and returns it as a new tree
    /// rooted at the former current node. The cursor moves to the former parent.
    ///
    /// Values are moved, not copied; see [subtree](Tree::subtree) for a copy.
    ///
    /// # Errors
    /// [TreeError::UnsupportedOperation] if the cursor is at the root.
    pub fn split(&mut self) -> Result<Tree<T>, TreeError> {
        self.split_at(self.current_index)
    }

    /// Returns an iterator over all values in pre-order.
    pub fn iter(&self) -> Traverse<'_, T> {
        self.traverse(TraversalOrder::PreOrder)
    }

    /// Returns an iterator over all values in the given order, starting at the root.
    pub fn traverse(&self, order: TraversalOrder) -> Traverse<'_, T> {
        Traverse::new(self, Frontier::new(order, self.root_index))
    }

    /// Returns a [TreeIterator] over the whole tree, starting at the root.
    ///
    /// The iterator has its own position; it neither reads nor moves
    /// this tree's cursor.
    pub fn tree_iter(&mut self, order: TraversalOrder) -> TreeIterator<'_, T> {
        let start = self.root_index;
        TreeIterator::new(self, order, start)
    }

    /// Returns a [TreeIterator] over the subtree at the current node.
    pub fn tree_iter_at(&mut self, order: TraversalOrder) -> TreeIterator<'_, T> {
        let start = self.current_index;
        TreeIterator::new(self, order, start)
    }
}

// ============================================================================
// Positional helpers, shared with TreeIterator (crate)
// ============================================================================
impl<T> Tree<T> {
    /// Returns the parent of `index` and the position of `index` among its
    /// siblings, or `None` for the root.
    pub(crate) fn position_in_parent(&self, index: NodeIndex) -> Option<(NodeIndex, usize)> {
        let parent = self[index].parent()?;
        let position = self[parent].position_of(index)?;
        Some((parent, position))
    }

    pub(crate) fn sibling_of(&self, index: NodeIndex, direction: Sibling) -> Result<NodeIndex, TreeError> {
        let (parent, position) = self
            .position_in_parent(index)
            .ok_or(TreeError::NoSuchElement("the root has no siblings"))?;
        let sibling = match direction {
            Sibling::Next => position.checked_add(1),
            Sibling::Previous => position.checked_sub(1),
        };
        sibling
            .and_then(|s| self[parent].child(s).ok())
            .ok_or(match direction {
                Sibling::Next => TreeError::NoSuchElement("no next sibling"),
                Sibling::Previous => TreeError::NoSuchElement("no previous sibling"),
            })
    }

    pub(crate) fn depth_of(&self, index: NodeIndex) -> usize {
        std::iter::successors(self[index].parent(), |&parent| self[parent].parent()).count()
    }

    pub(crate) fn height_of(&self, index: NodeIndex) -> usize {
        let mut height = 0;
        let mut stack = vec![(index, 0)];
        while let Some((node, distance)) = stack.pop() {
            height = height.max(distance);
            stack.extend(self[node].children().map(|child| (child, distance + 1)));
        }
        height
    }

    /// Returns whether `index` lies in the subtree rooted at `ancestor`.
    fn is_in_subtree(&self, index: NodeIndex, ancestor: NodeIndex) -> bool {
        std::iter::successors(Some(index), |&node| self[node].parent()).any(|node| node == ancestor)
    }

    pub(crate) fn split_at(&mut self, index: NodeIndex) -> Result<Tree<T>, TreeError> {
        let removed = self.remove_subtree(index)?;
        debug!("split off {} node(s) at node {index}", removed.len());

        let mut new_indices = HashMap::with_capacity(removed.len());
        let mut nodes = removed.into_iter();
        let root = nodes.next().ok_or(TreeError::NoSuchElement("node to split"))?;
        new_indices.insert(root.index(), 0);
        let mut tree = Tree::from_root(root.into_value(), self.config);

        // Pre-order: a parent is always mapped before its children.
        for node in nodes {
            let old_index = node.index();
            if let Some(&parent) = node.parent().and_then(|p| new_indices.get(&p)) {
                let new_index = tree.push_child(parent, node.into_value());
                new_indices.insert(old_index, new_index);
            }
        }

        Ok(tree)
    }

    /// Unlinks the subtree at `index` from its parent and frees it.
    ///
    /// Moves the cursor to the parent if it pointed into the subtree.
    ///
    /// # Returns
    /// The freed nodes in pre-order, starting with `index`.
    ///
    /// # Errors
    /// [TreeError::UnsupportedOperation] if `index` is the root.
    fn remove_subtree(&mut self, index: NodeIndex) -> Result<Vec<Node<T>>, TreeError> {
        let Some((parent, position)) = self.position_in_parent(index) else {
            return Err(TreeError::UnsupportedOperation("the root cannot be removed"));
        };

        if self.is_in_subtree(self.current_index, index) {
            self.current_index = parent;
        }
        self.node_mut(parent).remove_child(position)?;

        let removed = self.free_subtree(index);
        trace!("freed {} node(s) below node {parent}", removed.len());
        Ok(removed)
    }

    /// Frees the slots of the subtree at `index` in pre-order.
    fn free_subtree(&mut self, index: NodeIndex) -> Vec<Node<T>> {
        let mut removed = Vec::new();
        let mut stack = vec![index];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes[next].take() {
                stack.extend(node.children().rev());
                self.vacant.push(next);
                self.num_nodes -= 1;
                removed.push(node);
            }
        }
        removed
    }

    /// Removes every subtree in `targets`; targets must be pairwise disjoint.
    fn remove_all(&mut self, targets: Vec<NodeIndex>) -> bool {
        let mut removed_any = false;
        for target in targets {
            removed_any |= self.remove_subtree(target).is_ok();
        }
        removed_any
    }

    /// Stores a new node for `value` below `parent`, without linking it.
    fn alloc_child(&mut self, parent: NodeIndex, value: T) -> NodeIndex {
        let index = self.vacant.pop().unwrap_or(self.nodes.len());
        let node = Node::new_child(index, value, parent);
        if index == self.nodes.len() {
            self.nodes.push(Some(node));
        } else {
            self.nodes[index] = Some(node);
        }
        self.num_nodes += 1;
        index
    }

    /// Stores a new node for `value` as last child of `parent`.
    fn push_child(&mut self, parent: NodeIndex, value: T) -> NodeIndex {
        let child = self.alloc_child(parent, value);
        self.node_mut(parent).add_child(child);
        child
    }

    /// Mutable access to a live node; links are only edited through here.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds or its node has been removed.
    fn node_mut(&mut self, index: NodeIndex) -> &mut Node<T> {
        match &mut self.nodes[index] {
            Some(node) => node,
            None => panic!("node {index} has been removed from the tree"),
        }
    }

    fn check_insert_index(&self, index: usize) -> Result<(), TreeError> {
        if self.config.is_bounded() && index > self.config.max_children {
            return Err(TreeError::out_of_range(index, self.config.max_children));
        }
        let count = self.children_count();
        if index > count {
            return Err(TreeError::out_of_range(index, count));
        }
        Ok(())
    }
}

// ============================================================================
// Value-aware operations (pub)
// ============================================================================
impl<T: TreeValue> Tree<T> {
    /// Creates a new tree holding only `root`, with the given policies.
    ///
    /// # Errors
    /// [TreeError::NullRejected] if `root` is null and `config` rejects null.
    pub fn with_config(root: T, config: TreeConfig) -> Result<Self, TreeError> {
        if !config.accepts_null && root.is_null() {
            return Err(TreeError::NullRejected);
        }
        Ok(Self::from_root(root, config))
    }

    /// Returns whether any node holds a value equal to `value` (linear search).
    pub fn contains(&self, value: &T) -> bool {
        self.contains_except(value, None)
    }

    /// Replaces the value of the current node and returns the previous value.
    ///
    /// If the tree disallows duplicates and `value` is already held by some
    /// *other* node, the current node is evicted instead: it is removed with
    /// its subtree, the cursor moves to its parent, and its previous value is
    /// returned.
    ///
    /// # Errors
    /// * [TreeError::NullRejected] if `value` is null and the tree rejects null
    /// * [TreeError::UnsupportedOperation] if the eviction would remove the root
    pub fn set(&mut self, value: T) -> Result<T, TreeError> {
        self.set_at(self.current_index, value)
    }

    /// Appends a child holding `value` to the current node.
    ///
    /// # Returns
    /// * `Ok(true)` if the child was created
    /// * `Ok(false)` if the current node already has `max_children` children,
    ///   or if `value` is a disallowed duplicate, in which case the current
    ///   node was evicted (see [set](Tree::set))
    ///
    /// # Errors
    /// * [TreeError::NullRejected] if `value` is null and the tree rejects null
    /// * [TreeError::UnsupportedOperation] if the eviction would remove the root
    pub fn add_child(&mut self, value: T) -> Result<bool, TreeError> {
        let position = self.children_count();
        self.add_child_at(position, value)
    }

    /// Inserts a child holding `value` at sibling position `index`.
    ///
    /// Same outcomes as [add_child](Tree::add_child).
    ///
    /// # Errors
    /// * [TreeError::OutOfRange] if the tree is bounded and `index > max_children()`,
    ///   or if `index > children_count()`
    /// * [TreeError::NullRejected], [TreeError::UnsupportedOperation] as for `add_child`
    pub fn insert_child(&mut self, index: usize, value: T) -> Result<bool, TreeError> {
        self.check_insert_index(index)?;
        self.add_child_at(index, value)
    }

    /// Appends one child per value to the current node, in order.
    ///
    /// Each value follows the rules of [add_child](Tree::add_child). Values
    /// that do not fit under `max_children` are not added. A borrowed
    /// [Tree] contributes only its root value.
    ///
    /// # Returns
    /// `Ok(true)` if every value was added, `Ok(false)` if capacity ran out
    /// or a duplicate evicted the current node.
    ///
    /// # Errors
    /// As for [add_child](Tree::add_child); null values are rejected before
    /// any child is added.
    pub fn add_all_children<V: ChildValues<T>>(&mut self, values: V) -> Result<bool, TreeError> {
        let position = self.children_count();
        self.add_all_at(position, values.into_child_values())
    }

    /// Inserts one child per value, starting at sibling position `index`.
    ///
    /// # Errors
    /// As for [insert_child](Tree::insert_child).
    pub fn insert_all_children<V: ChildValues<T>>(
        &mut self,
        index: usize,
        values: V,
    ) -> Result<bool, TreeError> {
        self.check_insert_index(index)?;
        self.add_all_at(index, values.into_child_values())
    }

    /// Removes the first child holding `value`, together with its subtree.
    ///
    /// # Returns
    /// `false` if no direct child holds `value`.
    pub fn remove_child(&mut self, value: &T) -> bool {
        let position = self[self.current_index]
            .children()
            .position(|child| self[child].value() == value);
        match position {
            Some(position) => self.remove_child_at(position),
            None => false,
        }
    }

    /// Removes every direct child whose value is in `values`.
    ///
    /// # Returns
    /// `true` if any child was removed.
    pub fn remove_all_children(&mut self, values: &[T]) -> bool {
        let targets: Vec<NodeIndex> = self[self.current_index]
            .children()
            .filter(|&child| values.contains(self[child].value()))
            .collect();
        self.remove_all(targets)
    }

    /// Removes every descendant of the current node, at any depth, whose
    /// value is in `values`. A removed node takes its descendants along.
    ///
    /// # Returns
    /// `true` if any node was removed.
    pub fn remove_all_descendants(&mut self, values: &[T]) -> bool {
        let mut targets = Vec::new();
        let mut stack: Vec<NodeIndex> = self[self.current_index].children().rev().collect();
        while let Some(node) = stack.pop() {
            if values.contains(self[node].value()) {
                targets.push(node);
            } else {
                stack.extend(self[node].children().rev());
            }
        }
        trace!("removing {} matching descendant subtree(s)", targets.len());
        self.remove_all(targets)
    }

    pub(crate) fn set_at(&mut self, index: NodeIndex, value: T) -> Result<T, TreeError> {
        self.check_null(&value)?;
        if self.would_evict(index, &value) {
            return self.evict(index);
        }
        Ok(self.node_mut(index).replace_value(value))
    }

    fn add_child_at(&mut self, position: usize, value: T) -> Result<bool, TreeError> {
        self.check_null(&value)?;
        let parent = self.current_index;
        if !self.config.has_room(self[parent].num_children()) {
            return Ok(false);
        }
        if !self.config.allows_duplicates && self.contains(&value) {
            self.evict(parent)?;
            return Ok(false);
        }

        let child = self.alloc_child(parent, value);
        self.node_mut(parent).insert_child(position, child)?;
        Ok(true)
    }

    fn add_all_at(&mut self, position: usize, values: Vec<T>) -> Result<bool, TreeError> {
        if !self.config.accepts_null && values.iter().any(TreeValue::is_null) {
            return Err(TreeError::NullRejected);
        }

        let parent = self.current_index;
        let count = self[parent].num_children();
        let fitting = if self.config.is_bounded() {
            values.len().min(self.config.max_children.saturating_sub(count))
        } else {
            values.len()
        };

        // Children added before a duplicate would go with the evicted node,
        // so the eviction can happen up front.
        if !self.config.allows_duplicates {
            let has_duplicate = values[..fitting]
                .iter()
                .enumerate()
                .any(|(i, value)| self.contains(value) || values[..i].contains(value));
            if has_duplicate {
                self.evict(parent)?;
                return Ok(false);
            }
        }

        let complete = fitting == values.len();
        for (offset, value) in values.into_iter().take(fitting).enumerate() {
            let child = self.alloc_child(parent, value);
            self.node_mut(parent).insert_child(position + offset, child)?;
        }
        Ok(complete)
    }

    /// Removes the node at `index`, whose value was found elsewhere in a tree
    /// that disallows duplicates, and returns its value.
    fn evict(&mut self, index: NodeIndex) -> Result<T, TreeError> {
        debug!("evicting node {index}: duplicate value while duplicates are disallowed");
        self.remove_subtree(index)?
            .into_iter()
            .next()
            .map(Node::into_value)
            .ok_or(TreeError::NoSuchElement("evicted node"))
    }

    /// Returns whether writing `value` at `index` evicts that node.
    pub(crate) fn would_evict(&self, index: NodeIndex, value: &T) -> bool {
        !self.config.allows_duplicates && self.contains_except(value, Some(index))
    }

    pub(crate) fn check_null(&self, value: &T) -> Result<(), TreeError> {
        if !self.config.accepts_null && value.is_null() {
            return Err(TreeError::NullRejected);
        }
        Ok(())
    }

    fn contains_except(&self, value: &T, except: Option<NodeIndex>) -> bool {
        self.nodes
            .iter()
            .flatten()
            .any(|node| Some(node.index()) != except && node.value() == value)
    }
}

// ============================================================================
// Copying (pub)
// ============================================================================
impl<T: Clone> Tree<T> {
    /// Returns a deep copy of the subtree at the current node as a new tree
    /// with the same policies. This tree is left unchanged.
    pub fn subtree(&self) -> Tree<T> {
        self.subtree_at(self.current_index)
    }

    pub(crate) fn subtree_at(&self, index: NodeIndex) -> Tree<T> {
        let mut tree = Tree::from_root(self[index].value().clone(), self.config);
        let mut stack = vec![(index, tree.root_index)];
        while let Some((original, copy)) = stack.pop() {
            for child in self[original].children() {
                let child_copy = tree.push_child(copy, self[child].value().clone());
                stack.push((child, child_copy));
            }
        }
        tree
    }
}

impl<T> std::ops::Index<NodeIndex> for Tree<T> {
    type Output = Node<T>;

    /// # Panics
    /// Panics if `index` is out of bounds or its node has been removed.
    fn index(&self, index: NodeIndex) -> &Self::Output {
        match &self.nodes[index] {
            Some(node) => node,
            None => panic!("node {index} has been removed from the tree"),
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Traverse<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Printing (pub)
// ============================================================================
/// Visual sketch of the tree, one node per line, current node marked with `*`.
///
/// # Example Output
/// ```text
/// A *
/// ├─ B
/// │  └─ D
/// └─ C
/// ```
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, self.root_index, "", true)
    }
}

impl<T: fmt::Display> Tree<T> {
    /// Helper function to recursively print a node and its children.
    fn fmt_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        index: NodeIndex,
        prefix: &str,
        is_last: bool,
    ) -> fmt::Result {
        let node = &self[index];
        let is_top = index == self.root_index;

        let connector = if is_top {
            ""
        } else if is_last {
            "└─ "
        } else {
            "├─ "
        };
        write!(f, "{prefix}{connector}{}", node.value())?;
        if index == self.current_index {
            write!(f, " *")?;
        }
        writeln!(f)?;

        let child_prefix = if is_top {
            String::new()
        } else {
            format!("{prefix}{}", if is_last { "   " } else { "│  " })
        };
        let count = node.num_children();
        for (position, child) in node.children().enumerate() {
            self.fmt_node(f, child, &child_prefix, position + 1 == count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tree_builder::TreeBuilder;

    fn sample() -> Tree<&'static str> {
        let mut tree = Tree::new("A");
        tree.add_all_children(["B", "C"]).unwrap();
        tree.move_to_child(0).unwrap();
        tree.add_child("D").unwrap();
        tree.move_to_root();
        tree
    }

    #[test]
    fn display_draws_branches() {
        let tree = sample();
        assert_eq!(tree.to_string(), "A *\n├─ B\n│  └─ D\n└─ C\n");
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut tree = sample();
        assert!(tree.remove_child(&"B"));
        assert_eq!(tree.num_nodes(), 2);
        assert_eq!(tree.vacant.len(), 2);

        tree.add_child("E").unwrap();
        assert_eq!(tree.vacant.len(), 1);
        assert_eq!(tree.nodes.len(), 4);
    }

    #[test]
    fn removal_moves_cursor_out_of_removed_subtree() {
        let mut tree = sample();
        tree.move_to_child(0).unwrap();
        tree.move_to_child(0).unwrap();
        assert_eq!(*tree.get(), "D");

        let b = tree[tree.root_index()].child(0).unwrap();
        tree.remove_subtree(b).unwrap();
        assert_eq!(tree.current_index(), tree.root_index());
    }

    #[test]
    fn live_slots_are_exactly_the_reachable_nodes() {
        let mut tree = TreeBuilder::with_root("A").without_duplicates().build().unwrap();
        tree.add_all_children(["B", "C"]).unwrap();
        tree.move_to_child(0).unwrap();
        tree.add_all_children(["D", "E"]).unwrap();
        tree.move_to_root();
        assert!(tree.remove_child(&"C"));
        tree.move_to_child(0).unwrap();
        tree.move_to_child(1).unwrap();
        tree.split().unwrap();

        let live: Vec<&str> = tree.nodes.iter().flatten().map(|node| *node.value()).collect();
        assert_eq!(live.len(), tree.num_nodes());
        assert_eq!(tree.iter().count(), tree.num_nodes());
        assert!(!tree.contains(&"C"));
        assert!(!tree.contains(&"E"));

        // A value freed by removal no longer counts as a duplicate
        tree.move_to_child(0).unwrap();
        assert_eq!(tree.set("C"), Ok("D"));
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), ["A", "B", "C"]);
    }

    #[test]
    fn root_cannot_be_removed() {
        let mut tree = sample();
        let root = tree.root_index();
        assert!(matches!(
            tree.remove_subtree(root),
            Err(TreeError::UnsupportedOperation(_))
        ));
        assert_eq!(tree.num_nodes(), 4);
    }
}
