use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use linked_bst::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: u32) -> i32 {
    2i32.pow(num_levels) - 1
}

/// Builds a tree by inserting values in an ascending manner. Nothing rebalances the tree so
/// this produces a single chain of right children.
fn get_unbalanced_tree(num_levels: u32) -> Tree<i32> {
    (0..num_nodes_in_full_tree(num_levels)).collect()
}

/// Builds a tree by inserting values in a balanced manner. This inserts the middle of every
/// range before either half so that the tree has `num_levels` full levels.
fn get_balanced_tree(num_levels: u32) -> Tree<i32> {
    let xs = (0..num_nodes_in_full_tree(num_levels)).collect::<Vec<_>>();
    let mut tree = Tree::new();
    let mut ranges = vec![xs.as_slice()];
    while let Some(range) = ranges.pop() {
        if range.is_empty() {
            continue;
        }
        let mid = range.len() / 2;
        tree.insert(range[mid]);
        ranges.push(&range[..mid]);
        ranges.push(&range[mid + 1..]);
    }

    tree
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11] {
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) - 1;

        let tree_tests = [
            ("balanced", get_balanced_tree(num_levels)),
            ("unbalanced", get_unbalanced_tree(num_levels)),
        ];
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree));
                        let elapsed = instant.elapsed();
                        time += elapsed;
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "retrieve", |tree, i| {
        let _value = black_box(tree.retrieve(&i));
    });
    bench_helper(c, "remove", |tree, i| {
        tree.remove(&i);
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });

    bench_helper(c, "retrieve-miss", |tree, i| {
        let _value = black_box(tree.retrieve(&(i + 1)));
    });
    bench_helper(c, "remove-miss", |tree, i| {
        tree.remove(&(i + 1));
    });

    bench_helper(c, "inorder", |tree, _| {
        let _values = black_box(tree.inorder());
    });
    bench_helper(c, "is-valid", |tree, _| {
        let _valid = black_box(tree.is_valid());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
