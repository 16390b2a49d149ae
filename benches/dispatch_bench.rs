//! Benchmarks for the containers and the uniform operations
//!
//! Compares direct method calls with `ops::*` dispatch (which should inline
//! to the same code) and the containers with their std counterparts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use std::collections::{HashMap, LinkedList};
use std::time::Duration;

use zcontainers::hash_map::{default_hash, fast_hash, ordered_cmp};
use zcontainers::{ops, z_foreach, ZList, ZMap, ZStr, ZVec};

// =============================================================================
// BENCHMARK CONFIGURATION
// =============================================================================

const SIZES: &[usize] = &[100, 1_000, 10_000];

// =============================================================================
// VECTOR
// =============================================================================

fn bench_vec_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec_push");
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("std::Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut v = Vec::new();
                for i in 0..size {
                    v.push(black_box(i));
                }
                black_box(v)
            });
        });

        group.bench_with_input(BenchmarkId::new("ZVec::push", size), &size, |b, &size| {
            b.iter(|| {
                let mut v = ZVec::new();
                for i in 0..size {
                    v.push(black_box(i)).unwrap();
                }
                black_box(v)
            });
        });

        group.bench_with_input(BenchmarkId::new("ops::push", size), &size, |b, &size| {
            b.iter(|| {
                let mut v = ZVec::new();
                for i in 0..size {
                    ops::push(&mut v, black_box(i)).unwrap();
                }
                black_box(v)
            });
        });
    }

    group.finish();
}

fn bench_vec_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec_iterate");

    for &size in SIZES {
        let v: ZVec<u64> = (0..size as u64).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("iter", size), &v, |b, v| {
            b.iter(|| black_box(v.iter().sum::<u64>()));
        });

        group.bench_with_input(BenchmarkId::new("z_foreach", size), &v, |b, v| {
            b.iter(|| {
                let mut sum = 0u64;
                z_foreach!(x in v => { sum += *x; });
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// LIST AND STRING
// =============================================================================

fn bench_list_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_push_pop");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("std::LinkedList", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = LinkedList::new();
                for i in 0..size {
                    list.push_back(black_box(i));
                }
                while let Some(x) = list.pop_back() {
                    black_box(x);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("ZList", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = ZList::new();
                for i in 0..size {
                    ops::push(&mut list, black_box(i)).unwrap();
                }
                while let Some(x) = ops::pop(&mut list) {
                    black_box(x);
                }
            });
        });
    }

    group.finish();
}

fn bench_str_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("str_append");

    for &size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("String", size), &size, |b, &size| {
            b.iter(|| {
                let mut s = String::new();
                for _ in 0..size {
                    s.push(black_box('x'));
                }
                black_box(s)
            });
        });

        group.bench_with_input(BenchmarkId::new("ZStr", size), &size, |b, &size| {
            b.iter(|| {
                let mut s = ZStr::new();
                for _ in 0..size {
                    ops::push(&mut s, black_box(b'x')).unwrap();
                }
                black_box(s)
            });
        });
    }

    group.finish();
}

// =============================================================================
// HASH TABLE
// =============================================================================

fn bench_map_insert_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_insert_lookup");
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("std::HashMap", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = HashMap::new();
                for i in 0..size as u64 {
                    map.insert(black_box(i), i);
                }
                for i in 0..size as u64 {
                    black_box(map.get(&i));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("ZMap/default_hash", size), &size, |b, &size| {
            b.iter(|| {
                let mut map: ZMap<u64, u64> = ZMap::with_seed(default_hash, ordered_cmp, 1);
                for i in 0..size as u64 {
                    map.put(black_box(i), i).unwrap();
                }
                for i in 0..size as u64 {
                    black_box(ops::at(&map, &i));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("ZMap/fast_hash", size), &size, |b, &size| {
            b.iter(|| {
                let mut map: ZMap<u64, u64> = ZMap::with_seed(fast_hash, ordered_cmp, 1);
                for i in 0..size as u64 {
                    map.put(black_box(i), i).unwrap();
                }
                for i in 0..size as u64 {
                    black_box(ops::at(&map, &i));
                }
            });
        });
    }

    group.finish();
}

fn bench_map_random_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_random_lookup");
    let mut rng = StdRng::seed_from_u64(42);

    for &size in SIZES {
        let mut keys: Vec<u64> = (0..size).map(|_| rng.gen()).collect();
        let mut map: ZMap<u64, u64> = ZMap::with_seed(fast_hash, ordered_cmp, 7);
        for &k in &keys {
            map.put(k, k).unwrap();
        }
        keys.shuffle(&mut rng);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("hit", size), &keys, |b, keys| {
            b.iter(|| {
                for k in keys {
                    black_box(map.get(k));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("miss", size), &size, |b, &size| {
            b.iter(|| {
                for _ in 0..size {
                    black_box(map.contains_key(&rand::random::<u64>()));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_vec_push,
    bench_vec_iterate,
    bench_list_push_pop,
    bench_str_append,
    bench_map_insert_lookup,
    bench_map_random_lookup
);
criterion_main!(benches);
