//! Stateful traversal with its own movable position.
//!
//! A [TreeIterator] pulls values from a [Tree] in a fixed [TraversalOrder]
//! and keeps a *position*: the node visited last, or the start node before
//! the first visit. Sibling, parent and child moves, [set](TreeIterator::set)
//! and the structural queries all act at the position.
//!
//! # Lifecycle
//! ```text
//! NotStarted ──→ try_next() ──→ Iterating ──→ try_next() fails ──→ Exhausted
//! ```
//! Once exhausted, [has_next](TreeIterator::has_next) stays `false` and
//! [try_next](TreeIterator::try_next) keeps failing.
//!
//! # Relation to the tree cursor
//! The position is independent of the tree's own cursor: moving one never
//! moves the other. The iterator borrows the tree mutably, so the tree cannot
//! be changed behind its back. When [set](TreeIterator::set) evicts a node or
//! [split](TreeIterator::split) detaches one, pending visits into the removed
//! subtree are dropped and the position moves to the removed node's parent.
//!
//! The start node acts as the root of the traversal: it can be neither split
//! off nor evicted through the iterator, so the position never ends up
//! outside a [Tree::tree_iter_at] traversal after a removal.

use crate::error::TreeError;
use crate::iter::traversal::{Frontier, TraversalOrder};
use crate::model::tree::{NodeIndex, Sibling, Tree};
use crate::model::value::TreeValue;

/// Lifecycle state of a [TreeIterator].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterState {
    /// No value has been pulled yet.
    NotStarted,
    /// At least one value has been pulled.
    Iterating,
    /// A pull found no further value.
    Exhausted,
}

// =$========================================================================$=
// TREE ITERATOR
// =$========================================================================$=
/// Traversal bound to one [Tree], obtained from [Tree::tree_iter] or
/// [Tree::tree_iter_at].
///
/// # Example
/// ```
/// use cursortree::{Tree, TraversalOrder};
///
/// let mut tree = Tree::new("A");
/// tree.add_all_children(["B", "C"])?;
///
/// let mut iter = tree.tree_iter(TraversalOrder::PostOrder);
/// assert_eq!(*iter.try_next()?, "B");
/// assert!(iter.has_next_sibling());
/// assert_eq!(*iter.next_sibling()?, "C");
/// # Ok::<(), cursortree::TreeError>(())
/// ```
#[derive(Debug)]
pub struct TreeIterator<'a, T> {
    tree: &'a mut Tree<T>,
    order: TraversalOrder,
    frontier: Frontier,
    start: NodeIndex,
    position: NodeIndex,
    state: IterState,
}

impl<'a, T> TreeIterator<'a, T> {
    pub(crate) fn new(tree: &'a mut Tree<T>, order: TraversalOrder, start: NodeIndex) -> Self {
        TreeIterator {
            tree,
            order,
            frontier: Frontier::new(order, start),
            start,
            position: start,
            state: IterState::NotStarted,
        }
    }

    /// Returns the order this iterator was created with.
    pub fn traversal_order(&self) -> TraversalOrder {
        self.order
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> IterState {
        self.state
    }

    /// Returns whether [try_next](TreeIterator::try_next) would yield a value.
    pub fn has_next(&self) -> bool {
        self.state != IterState::Exhausted && !self.frontier.is_empty()
    }

    /// Pulls the next value in traversal order and moves the position to its node.
    ///
    /// # Errors
    /// [TreeError::NoSuchElement] once all nodes have been visited.
    pub fn try_next(&mut self) -> Result<&T, TreeError> {
        if self.state == IterState::Exhausted {
            return Err(TreeError::NoSuchElement("traversal is exhausted"));
        }
        match self.frontier.advance(&*self.tree) {
            Some(index) => {
                self.state = IterState::Iterating;
                self.position = index;
                Ok(self.tree[index].value())
            }
            None => {
                self.state = IterState::Exhausted;
                Err(TreeError::NoSuchElement("traversal is exhausted"))
            }
        }
    }

    /// Calls `action` on every remaining value, in traversal order.
    pub fn for_each_remaining<F: FnMut(&T)>(&mut self, mut action: F) {
        while self.has_next() {
            match self.try_next() {
                Ok(value) => action(value),
                Err(_) => break,
            }
        }
    }

    /// Returns the index of the node at the position.
    pub fn node_index(&self) -> NodeIndex {
        self.position
    }

    /// Returns the value at the position.
    pub fn get(&self) -> &T {
        self.tree[self.position].value()
    }

    /// Returns `true` if the position has a sibling to its right.
    pub fn has_next_sibling(&self) -> bool {
        self.tree.sibling_of(self.position, Sibling::Next).is_ok()
    }

    /// Returns `true` if the position has a sibling to its left.
    pub fn has_previous_sibling(&self) -> bool {
        self.tree.sibling_of(self.position, Sibling::Previous).is_ok()
    }

    /// Returns `true` unless the position is the root of the tree.
    pub fn has_parent(&self) -> bool {
        !self.tree[self.position].is_root()
    }

    /// Returns `true` if the position has at least one child.
    pub fn has_children(&self) -> bool {
        !self.tree[self.position].is_leaf()
    }

    /// Moves the position to the next sibling and returns its value.
    ///
    /// Only the position moves; the pending traversal is unaffected.
    ///
    /// # Errors
    /// [TreeError::NoSuchElement] if [has_next_sibling](TreeIterator::has_next_sibling) is `false`.
    pub fn next_sibling(&mut self) -> Result<&T, TreeError> {
        self.position = self.tree.sibling_of(self.position, Sibling::Next)?;
        Ok(self.get())
    }

    /// Moves the position to the previous sibling and returns its value.
    ///
    /// # Errors
    /// [TreeError::NoSuchElement] if [has_previous_sibling](TreeIterator::has_previous_sibling) is `false`.
    pub fn previous_sibling(&mut self) -> Result<&T, TreeError> {
        self.position = self.tree.sibling_of(self.position, Sibling::Previous)?;
        Ok(self.get())
    }

    /// Moves the position to the parent and returns its value.
    ///
    /// # Errors
    /// [TreeError::NoSuchElement] if the position is the root.
    pub fn parent(&mut self) -> Result<&T, TreeError> {
        self.position = self.tree[self.position]
            .parent()
            .ok_or(TreeError::NoSuchElement("the root has no parent"))?;
        Ok(self.get())
    }

    /// Moves the position to the first child and returns its value.
    ///
    /// # Errors
    /// [TreeError::NoSuchElement] if the position is a leaf.
    pub fn next_child(&mut self) -> Result<&T, TreeError> {
        self.position = self.tree[self.position]
            .child(0)
            .map_err(|_| TreeError::NoSuchElement("a leaf has no children"))?;
        Ok(self.get())
    }

    /// Returns `true` if the position is the root of the tree.
    pub fn is_root(&self) -> bool {
        self.tree[self.position].is_root()
    }

    /// Returns `true` if the position has no children.
    pub fn is_leaf(&self) -> bool {
        self.tree[self.position].is_leaf()
    }

    /// Returns the number of children of the position.
    pub fn children_count(&self) -> usize {
        self.tree[self.position].num_children()
    }

    /// Returns the number of edges between the position and the root of the tree.
    pub fn depth(&self) -> usize {
        self.tree.depth_of(self.position)
    }

    /// Returns the number of edges on the longest path from the position down to a leaf.
    pub fn height(&self) -> usize {
        self.tree.height_of(self.position)
    }

    /// Returns the 1-based level of the position, i.e. `depth() + 1`.
    pub fn level(&self) -> usize {
        self.depth() + 1
    }

    /// Detaches the subtree at the position into a new tree, see [Tree::split].
    ///
    /// # Errors
    /// [TreeError::UnsupportedOperation] if the position is the start node.
    pub fn split(&mut self) -> Result<Tree<T>, TreeError> {
        if self.position == self.start {
            return Err(TreeError::UnsupportedOperation("the start node cannot be split off"));
        }
        let parent = self.tree[self.position].parent();
        let split = self.tree.split_at(self.position)?;
        self.after_removal(parent);
        Ok(split)
    }

    fn after_removal(&mut self, parent: Option<NodeIndex>) {
        if let Some(parent) = parent {
            self.position = parent;
        }
        self.frontier.retain_live(&*self.tree);
    }
}

impl<T: TreeValue> TreeIterator<'_, T> {
    /// Replaces the value at the position, with the rules of [Tree::set].
    ///
    /// If the write evicts the node at the position, the position moves to
    /// its parent and the evicted subtree is skipped by the traversal.
    ///
    /// # Errors
    /// As for [Tree::set]; also [TreeError::UnsupportedOperation] if the
    /// write would evict the start node.
    pub fn set(&mut self, value: T) -> Result<T, TreeError> {
        if self.position == self.start {
            self.tree.check_null(&value)?;
            if self.tree.would_evict(self.start, &value) {
                return Err(TreeError::UnsupportedOperation("the start node cannot be evicted"));
            }
        }
        let parent = self.tree[self.position].parent();
        let previous = self.tree.set_at(self.position, value)?;
        if self.tree.node(self.position).is_none() {
            self.after_removal(parent);
        }
        Ok(previous)
    }
}

impl<T: Clone> TreeIterator<'_, T> {
    /// Returns a deep copy of the subtree at the position, see [Tree::subtree].
    pub fn subtree(&self) -> Tree<T> {
        self.tree.subtree_at(self.position)
    }
}

impl<T: Clone> Iterator for TreeIterator<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok().cloned()
    }
}

impl<T: Clone> std::iter::FusedIterator for TreeIterator<'_, T> {}
