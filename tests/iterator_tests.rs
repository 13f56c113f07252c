use cursortree::{IterState, Tree, TreeBuilder, TreeError, TraversalOrder};
use pretty_assertions::assert_eq;

/// ```text
/// 1
/// ├─ 2
/// │  ├─ 4
/// │  └─ 5
/// └─ 3
///    └─ 6
/// ```
fn numbered_tree() -> Tree<u32> {
    let mut tree = Tree::new(1);
    tree.add_all_children([2, 3]).unwrap();
    tree.move_to_child(0).unwrap();
    tree.add_all_children([4, 5]).unwrap();
    tree.move_to_root();
    tree.move_to_child(1).unwrap();
    tree.add_child(6).unwrap();
    tree.move_to_root();
    tree
}

fn drain(tree: &mut Tree<u32>, order: TraversalOrder) -> Vec<u32> {
    tree.tree_iter(order).collect()
}

// ============= Ordering Tests =============

#[test]
fn test_orders_visit_siblings_left_to_right() {
    let mut tree = numbered_tree();
    assert_eq!(drain(&mut tree, TraversalOrder::PreOrder), [1, 2, 4, 5, 3, 6]);
    assert_eq!(drain(&mut tree, TraversalOrder::PostOrder), [4, 5, 2, 6, 3, 1]);
    assert_eq!(drain(&mut tree, TraversalOrder::BreadthFirst), [1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_iteration_at_cursor_covers_subtree_only() {
    let mut tree = numbered_tree();
    tree.move_to_child(0).unwrap();
    let values: Vec<u32> = tree.tree_iter_at(TraversalOrder::PreOrder).collect();
    assert_eq!(values, [2, 4, 5]);
}

#[test]
fn test_order_is_reported() {
    let mut tree = numbered_tree();
    let iter = tree.tree_iter(TraversalOrder::BreadthFirst);
    assert_eq!(iter.traversal_order(), TraversalOrder::BreadthFirst);
}

// ============= State Machine Tests =============

#[test]
fn test_state_transitions() {
    let mut tree = Tree::new(7);
    let mut iter = tree.tree_iter(TraversalOrder::PreOrder);
    assert_eq!(iter.state(), IterState::NotStarted);
    assert!(iter.has_next());
    assert!(iter.has_next());

    assert_eq!(iter.try_next(), Ok(&7));
    assert_eq!(iter.state(), IterState::Iterating);
    assert!(!iter.has_next());

    assert!(matches!(iter.try_next(), Err(TreeError::NoSuchElement(_))));
    assert_eq!(iter.state(), IterState::Exhausted);
}

#[test]
fn test_exhaustion_is_permanent() {
    let mut tree = numbered_tree();
    let mut iter = tree.tree_iter(TraversalOrder::PostOrder);
    while iter.try_next().is_ok() {}

    for _ in 0..3 {
        assert!(!iter.has_next());
        assert!(matches!(iter.try_next(), Err(TreeError::NoSuchElement(_))));
        assert_eq!(iter.next(), None);
    }
}

#[test]
fn test_for_each_remaining_continues_in_order() {
    let mut tree = numbered_tree();
    let mut iter = tree.tree_iter(TraversalOrder::BreadthFirst);
    iter.try_next().unwrap();
    iter.try_next().unwrap();

    let mut rest = Vec::new();
    iter.for_each_remaining(|value| rest.push(*value));
    assert_eq!(rest, [3, 4, 5, 6]);
    assert!(!iter.has_next());
}

// ============= Position Tests =============

#[test]
fn test_position_starts_at_start_node() {
    let mut tree = numbered_tree();
    let iter = tree.tree_iter(TraversalOrder::PreOrder);
    assert_eq!(*iter.get(), 1);
    assert!(iter.is_root());
    assert!(!iter.has_parent());
    assert!(iter.has_children());
    assert!(!iter.has_next_sibling());
    assert!(!iter.has_previous_sibling());
}

#[test]
fn test_relational_moves() {
    let mut tree = numbered_tree();
    let mut iter = tree.tree_iter(TraversalOrder::PreOrder);
    iter.try_next().unwrap();
    iter.try_next().unwrap();
    assert_eq!(*iter.get(), 2);

    assert_eq!(iter.next_sibling(), Ok(&3));
    assert!(!iter.has_next_sibling());
    assert!(matches!(iter.next_sibling(), Err(TreeError::NoSuchElement(_))));
    assert_eq!(iter.previous_sibling(), Ok(&2));
    assert_eq!(iter.next_child(), Ok(&4));
    assert!(!iter.has_children());
    assert!(matches!(iter.next_child(), Err(TreeError::NoSuchElement(_))));
    assert_eq!(iter.parent(), Ok(&2));
    assert_eq!(iter.parent(), Ok(&1));
    assert!(matches!(iter.parent(), Err(TreeError::NoSuchElement(_))));

    // Moves leave the pending traversal alone
    assert_eq!(iter.try_next(), Ok(&4));
}

#[test]
fn test_structural_queries_at_position() {
    let mut tree = numbered_tree();
    let mut iter = tree.tree_iter(TraversalOrder::PostOrder);
    assert_eq!(iter.try_next(), Ok(&4));
    assert!(iter.is_leaf());
    assert_eq!(iter.depth(), 2);
    assert_eq!(iter.level(), 3);
    assert_eq!(iter.height(), 0);

    iter.parent().unwrap();
    assert_eq!(iter.children_count(), 2);
    assert_eq!(iter.height(), 1);
}

#[test]
fn test_iterator_does_not_move_tree_cursor() {
    let mut tree = numbered_tree();
    tree.move_to_child(1).unwrap();
    {
        let mut iter = tree.tree_iter(TraversalOrder::PreOrder);
        iter.try_next().unwrap();
        iter.next_child().unwrap();
        iter.next_child().unwrap();
    }
    assert_eq!(*tree.get(), 3);
}

// ============= Mutation Tests =============

#[test]
fn test_set_at_position() {
    let mut tree = numbered_tree();
    {
        let mut iter = tree.tree_iter(TraversalOrder::PreOrder);
        iter.try_next().unwrap();
        iter.try_next().unwrap();
        assert_eq!(iter.set(20), Ok(2));
        assert_eq!(*iter.get(), 20);
        assert_eq!(iter.try_next(), Ok(&4));
    }
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 20, 4, 5, 3, 6]);
}

#[test]
fn test_set_eviction_skips_evicted_subtree() {
    let mut tree = TreeBuilder::with_root(1).without_duplicates().build().unwrap();
    tree.add_all_children([2, 3]).unwrap();
    tree.move_to_child(0).unwrap();
    tree.add_all_children([4, 5]).unwrap();
    tree.move_to_root();

    let mut iter = tree.tree_iter(TraversalOrder::PreOrder);
    iter.try_next().unwrap();
    assert_eq!(iter.try_next(), Ok(&2));
    assert_eq!(iter.set(3), Ok(2));

    assert_eq!(*iter.get(), 1);
    assert_eq!(iter.try_next(), Ok(&3));
    assert!(!iter.has_next());
}

#[test]
fn test_split_mid_traversal() {
    let mut tree = numbered_tree();
    let split = {
        let mut iter = tree.tree_iter(TraversalOrder::BreadthFirst);
        iter.try_next().unwrap();
        iter.try_next().unwrap();
        let split = iter.split().unwrap();
        assert_eq!(*iter.get(), 1);

        let rest: Vec<u32> = iter.collect();
        assert_eq!(rest, [3, 6]);
        split
    };

    assert_eq!(split.iter().copied().collect::<Vec<_>>(), [2, 4, 5]);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 6]);
    assert!(tree.is_root());
}

#[test]
fn test_split_of_root_position_is_unsupported() {
    let mut tree = numbered_tree();
    let mut iter = tree.tree_iter(TraversalOrder::PreOrder);
    assert!(matches!(iter.split(), Err(TreeError::UnsupportedOperation(_))));
    assert!(iter.has_next());
}

#[test]
fn test_split_moves_tree_cursor_out() {
    let mut tree = numbered_tree();
    tree.move_to_child(1).unwrap();
    tree.move_to_child(0).unwrap();
    {
        let mut iter = tree.tree_iter(TraversalOrder::PostOrder);
        iter.try_next().unwrap();
        iter.try_next().unwrap();
        iter.try_next().unwrap();
        assert_eq!(iter.try_next(), Ok(&6));
        iter.parent().unwrap();
        iter.split().unwrap();
    }
    assert!(tree.is_root());
    assert_eq!(tree.num_nodes(), 4);
}

#[test]
fn test_subtree_at_position() {
    let mut tree = numbered_tree();
    let mut iter = tree.tree_iter(TraversalOrder::PostOrder);
    iter.try_next().unwrap();
    iter.parent().unwrap();

    let copy = iter.subtree();
    assert_eq!(copy.iter().copied().collect::<Vec<_>>(), [2, 4, 5]);
    assert_eq!(iter.try_next(), Ok(&5));
}

#[test]
fn test_start_node_of_subtree_iteration_stays_in_place() {
    let mut tree = numbered_tree();
    tree.move_to_child(1).unwrap();
    {
        let mut iter = tree.tree_iter_at(TraversalOrder::PreOrder);
        assert_eq!(iter.try_next(), Ok(&3));
        assert!(matches!(iter.split(), Err(TreeError::UnsupportedOperation(_))));
        assert_eq!(*iter.get(), 3);

        // Writes that keep the node still go through
        assert_eq!(iter.set(30), Ok(3));
        assert_eq!(iter.try_next(), Ok(&6));
    }
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 4, 5, 30, 6]);
}

#[test]
fn test_start_node_of_subtree_iteration_is_not_evicted() {
    let mut tree = TreeBuilder::with_root(1).without_duplicates().build().unwrap();
    tree.add_all_children([2, 3]).unwrap();
    tree.move_to_child(1).unwrap();
    tree.add_child(6).unwrap();
    {
        let mut iter = tree.tree_iter_at(TraversalOrder::PreOrder);
        iter.try_next().unwrap();
        assert!(matches!(iter.set(2), Err(TreeError::UnsupportedOperation(_))));
        assert_eq!(*iter.get(), 3);
        assert_eq!(iter.try_next(), Ok(&6));
    }
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 6]);
}
