use criterion::{Criterion, criterion_group, criterion_main};
use cursortree::{TraversalOrder, Tree};
use std::hint::black_box;

const TREE_SIZES: &[(&str, usize)] = &[("n1k", 1_000), ("n10k", 10_000)];

/// Builds a tree where every node gets up to `fan_out` children, level by level.
fn build_wide_tree(num_nodes: usize, fan_out: usize) -> Tree<usize> {
    let mut tree = Tree::new(0);
    let mut value = 1;
    let mut frontier = vec![Vec::new()];

    while value < num_nodes {
        let mut next_frontier = Vec::new();
        for path in &frontier {
            tree.move_to_root();
            for &step in path {
                tree.move_to_child(step).unwrap();
            }
            for child in 0..fan_out {
                if value == num_nodes {
                    break;
                }
                tree.add_child(value).unwrap();
                value += 1;
                let mut child_path = path.clone();
                child_path.push(child);
                next_frontier.push(child_path);
            }
        }
        frontier = next_frontier;
    }
    tree.move_to_root();
    tree
}

fn traversal(c: &mut Criterion) {
    for (name, size) in TREE_SIZES {
        let mut tree = build_wide_tree(*size, 4);
        for order in [TraversalOrder::PreOrder, TraversalOrder::PostOrder, TraversalOrder::BreadthFirst] {
            c.bench_function(&format!("traverse {order:?} {name}"), |b| {
                b.iter(|| tree.traverse(order).copied().sum::<usize>());
            });
        }
        c.bench_function(&format!("tree_iter {name}"), |b| {
            b.iter(|| {
                let mut iter = tree.tree_iter(TraversalOrder::PreOrder);
                let mut sum = 0;
                iter.for_each_remaining(|value| sum += value);
                black_box(sum)
            });
        });
    }
}

fn mutation(c: &mut Criterion) {
    for (name, size) in TREE_SIZES {
        let tree = build_wide_tree(*size, 4);
        c.bench_function(&format!("subtree {name}"), |b| {
            b.iter(|| black_box(tree.subtree()));
        });
        c.bench_function(&format!("split {name}"), |b| {
            b.iter_batched(
                || {
                    let mut copy = tree.clone();
                    copy.move_to_child(0).unwrap();
                    copy
                },
                |mut copy| black_box(copy.split().unwrap()),
                criterion::BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(benches, traversal, mutation);
criterion_main!(benches);
