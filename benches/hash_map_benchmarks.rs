use std::hint::black_box;

use chained_map::{string_hash, HashMap};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

fn keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("key-{}", i)).collect()
}

fn filled_map(keys: &[String]) -> HashMap<usize> {
    let mut map = HashMap::new();
    for (i, key) in keys.iter().enumerate() {
        map.set(key.as_str(), i);
    }
    map
}

fn bench_string_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_hash");
    for len in [4usize, 16, 64, 256] {
        let key = "x".repeat(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &key, |b, key| {
            b.iter(|| string_hash(black_box(key)))
        });
    }
    group.finish();
}

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");
    for size in SIZES {
        let keys = keys(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            b.iter(|| black_box(filled_map(keys)))
        });
    }
    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    for size in SIZES {
        let keys = keys(size);
        let map = filled_map(&keys);
        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(map.get(key));
                }
            })
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    for size in SIZES {
        let keys = keys(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            b.iter_batched(
                || filled_map(keys),
                |mut map| {
                    for key in keys {
                        black_box(map.remove(key));
                    }
                    map
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    hash_map_benches,
    bench_string_hash,
    bench_set,
    bench_get,
    bench_remove
);
criterion_main!(hash_map_benches);
