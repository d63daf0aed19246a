use avltree::AvlTree;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

const SEED: u64 = 42;

fn generate_test_data(size: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..size).map(|_| rng.gen_range(0..size as i64 * 2)).collect()
}

fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");
    group.sample_size(50);

    for size in [100, 1_000, 10_000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("avltree", size), size, |b, _| {
            b.iter(|| {
                let mut tree = AvlTree::new();
                for key in &data {
                    black_box(tree.insert(*key));
                }
                black_box(tree)
            })
        });

        group.bench_with_input(BenchmarkId::new("btreeset", size), size, |b, _| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for key in &data {
                    black_box(set.insert(*key));
                }
                black_box(set)
            })
        });
    }
    group.finish();
}

fn bench_sequential_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_insertion");
    group.sample_size(30);

    for size in [1_000, 10_000].iter() {
        // Ascending keys are the rotation-heavy worst case for an AVL tree
        group.bench_with_input(BenchmarkId::new("avltree", size), size, |b, &size| {
            b.iter(|| {
                let mut tree = AvlTree::new();
                for key in 0..size as i64 {
                    black_box(tree.insert(key));
                }
                black_box(tree)
            })
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for size in [1_000, 10_000].iter() {
        let data = generate_test_data(*size);
        let tree = AvlTree::from_keys(data.iter().copied());
        let probes = generate_test_data(1_000);

        group.bench_with_input(BenchmarkId::new("avltree", size), size, |b, _| {
            b.iter(|| {
                for key in &probes {
                    black_box(tree.contains(*key));
                }
            })
        });
    }
    group.finish();
}

fn bench_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("removal");
    group.sample_size(30);

    for size in [1_000, 10_000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("avltree", size), size, |b, _| {
            b.iter(|| {
                let mut tree = AvlTree::from_keys(data.iter().copied());
                for key in &data {
                    black_box(tree.remove(*key));
                }
                black_box(tree)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insertion,
    bench_sequential_insertion,
    bench_lookup,
    bench_removal
);
criterion_main!(benches);
