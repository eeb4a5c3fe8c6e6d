use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use search_tree::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting values in ascending order. The tree never rebalances so this is
/// really a linked list.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32> {
    (0..num_nodes_in_full_tree(num_levels) as i32).collect()
}

/// Builds a tree by inserting values so that, without any self-balancing, the resultant tree is
/// still balanced.
///
/// It ensures there are `num_levels` of nodes, all full.
fn get_balanced_tree(num_levels: usize) -> Tree<i32> {
    let xs = (0..num_nodes_in_full_tree(num_levels) as i32).collect::<Vec<_>>();
    let mut tree = Tree::new();
    fill_balanced_tree(&mut tree, &xs);
    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut Tree<i32>, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.insert(xs[mid]);
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs it against balanced and
/// unbalanced trees of various sizes before finishing the group. The closure gets a fresh copy
/// of the tree on every iteration and the largest value in it.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // Unbalanced trees are as deep as they are large and the recursive operations recurse once
    // per level, so stay well clear of the stack limit.
    for num_levels in [3, 7, 11] {
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) as i32 - 1;
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        for (shape, tree) in tree_tests {
            let id = BenchmarkId::new(shape, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree));
                        time += instant.elapsed();
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _node = black_box(tree.find(&i));
    });
    bench_helper(c, "find-recursively", |tree, i| {
        let _node = black_box(tree.find_recursively(&i));
    });
    bench_helper(c, "find-miss", |tree, i| {
        let _node = black_box(tree.find(&(i + 1)));
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });
    bench_helper(c, "insert-recursively", |tree, i| {
        tree.insert_recursively(i + 1);
    });

    bench_helper(c, "remove", |tree, i| {
        let _value = black_box(tree.remove(&i));
    });
    bench_helper(c, "remove-miss", |tree, i| {
        let _value = black_box(tree.remove(&(i + 1)));
    });

    bench_helper(c, "dfs-in-order", |tree, _| {
        let _values = black_box(tree.dfs_in_order());
    });
    bench_helper(c, "bfs", |tree, _| {
        let _values = black_box(tree.bfs());
    });
    bench_helper(c, "is-balanced", |tree, _| {
        let _balanced = black_box(tree.is_balanced());
    });
    bench_helper(c, "second-highest", |tree, _| {
        let _value = black_box(tree.find_second_highest());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
