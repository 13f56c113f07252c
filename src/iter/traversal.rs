//! Traversal orders and the read-only value iterator.
//!
//! All orders visit siblings left to right, i.e. in child-list order.

use std::collections::VecDeque;

use crate::model::tree::{NodeIndex, Tree};

// =$========================================================================$=
// TRAVERSAL ORDER
// =$========================================================================$=
/// Order in which a traversal visits the nodes of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraversalOrder {
    /// Parents before children (depth-first).
    #[default]
    PreOrder,
    /// Children before parents (depth-first).
    PostOrder,
    /// Level by level, starting at the top.
    BreadthFirst,
}

// =$========================================================================$=
// FRONTIER
// =$========================================================================$=
/// Pending-visit state of a traversal, independent of any cursor.
///
/// Uses a stack (depth-first orders) or a queue (breadth-first) instead of
/// recursion.
#[derive(Debug, Clone)]
pub(crate) enum Frontier {
    PreOrder(Vec<NodeIndex>),
    PostOrder(Vec<(NodeIndex, bool)>), // (index, children_visited)
    BreadthFirst(VecDeque<NodeIndex>),
}

impl Frontier {
    pub(crate) fn new(order: TraversalOrder, start: NodeIndex) -> Self {
        match order {
            TraversalOrder::PreOrder => Frontier::PreOrder(vec![start]),
            TraversalOrder::PostOrder => Frontier::PostOrder(vec![(start, false)]),
            TraversalOrder::BreadthFirst => Frontier::BreadthFirst(VecDeque::from([start])),
        }
    }

    /// Returns whether no visit is pending.
    ///
    /// Every pending entry yields a node eventually, so a non-empty frontier
    /// always has a next node.
    pub(crate) fn is_empty(&self) -> bool {
        match self {
            Frontier::PreOrder(stack) => stack.is_empty(),
            Frontier::PostOrder(stack) => stack.is_empty(),
            Frontier::BreadthFirst(queue) => queue.is_empty(),
        }
    }

    /// Pops the next node in order, scheduling its children as needed.
    pub(crate) fn advance<T>(&mut self, tree: &Tree<T>) -> Option<NodeIndex> {
        match self {
            Frontier::PreOrder(stack) => {
                let index = stack.pop()?;
                // Push children reversed, so the first child is visited first
                stack.extend(tree[index].children().rev());
                Some(index)
            }
            Frontier::PostOrder(stack) => {
                while let Some((index, children_visited)) = stack.pop() {
                    let node = &tree[index];
                    if children_visited || node.is_leaf() {
                        return Some(index);
                    }
                    stack.push((index, true));
                    stack.extend(node.children().rev().map(|child| (child, false)));
                }
                None
            }
            Frontier::BreadthFirst(queue) => {
                let index = queue.pop_front()?;
                queue.extend(tree[index].children());
                Some(index)
            }
        }
    }

    /// Drops pending entries whose node has been removed from `tree`.
    pub(crate) fn retain_live<T>(&mut self, tree: &Tree<T>) {
        match self {
            Frontier::PreOrder(stack) => stack.retain(|&index| tree.node(index).is_some()),
            Frontier::PostOrder(stack) => stack.retain(|&(index, _)| tree.node(index).is_some()),
            Frontier::BreadthFirst(queue) => queue.retain(|&index| tree.node(index).is_some()),
        }
    }
}

// =$========================================================================$=
// TRAVERSE
// =$========================================================================$=
/// Read-only iterator over the values of a [Tree] in a [TraversalOrder].
///
/// Obtained from [Tree::traverse] or [Tree::iter].
#[derive(Debug, Clone)]
pub struct Traverse<'a, T> {
    tree: &'a Tree<T>,
    frontier: Frontier,
}

impl<'a, T> Traverse<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, frontier: Frontier) -> Self {
        Traverse { tree, frontier }
    }
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.frontier.advance(tree).map(|index| tree[index].value())
    }
}

impl<T> std::iter::FusedIterator for Traverse<'_, T> {}
