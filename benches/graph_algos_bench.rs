// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(missing_docs)]
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graph_algos::{
    sort::count_inversions, DirectedGraph, MinCutConfig, MinHeap, UndirectedGraph,
};

fn chain_graph(n: u64) -> UndirectedGraph {
    let mut g = UndirectedGraph::new(n);
    for v in 1..n {
        g.add_edge(v, v + 1, v % 7 + 1).unwrap();
    }
    g
}

fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");

    for size in [50, 200, 500].iter() {
        let g = chain_graph(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let tree = g.shortest_paths(1).unwrap();
                black_box(tree.settled_count());
            });
        });
    }

    group.finish();
}

fn bench_scc(c: &mut Criterion) {
    let mut group = c.benchmark_group("scc");

    for size in [1_000, 10_000].iter() {
        // Single big cycle plus chords.
        let mut g = DirectedGraph::new(*size);
        for v in 1..*size {
            g.add_edge(v, v + 1).unwrap();
        }
        g.add_edge(*size, 1).unwrap();
        for v in (1..*size).step_by(10) {
            g.add_edge(v + 1, v).unwrap();
        }
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let result = g.strongly_connected_components();
                black_box(result.component_count());
            });
        });
    }

    group.finish();
}

fn bench_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap");

    for size in [1_000, 100_000].iter() {
        group.bench_with_input(
            BenchmarkId::new("push_pop", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut heap = MinHeap::with_capacity(size);
                    let mut x: u64 = 99;
                    for _ in 0..size {
                        x = x.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                        heap.push(x >> 33);
                    }
                    while let Ok(v) = heap.pop() {
                        black_box(v);
                    }
                });
            },
        );
    }

    group.bench_function("heapify_10000", |b| {
        let values: Vec<u64> = (0..10_000).rev().collect();
        b.iter(|| {
            let heap: MinHeap<u64> = MinHeap::heapify(values.clone());
            black_box(heap.len());
        });
    });

    group.finish();
}

fn bench_min_cut(c: &mut Criterion) {
    let mut g = UndirectedGraph::new(20);
    for a in 1..=20u64 {
        for b in (a + 1)..=20 {
            if (a + b) % 3 != 0 {
                g.add_edge(a, b, 1).unwrap();
            }
        }
    }
    let config = MinCutConfig::new().seed(17).trials(100);

    c.bench_function("min_cut_20_vertices_100_trials", |b| {
        b.iter(|| {
            let result = g.min_cut(&config);
            black_box(result.cut_size);
        });
    });
}

fn bench_inversions(c: &mut Criterion) {
    let values: Vec<u64> = (0..10_000).rev().collect();
    c.bench_function("count_inversions_10000", |b| {
        b.iter(|| {
            let (_, count) = count_inversions(&values);
            black_box(count);
        });
    });
}

criterion_group!(
    benches,
    bench_shortest_paths,
    bench_scc,
    bench_heap,
    bench_min_cut,
    bench_inversions
);
criterion_main!(benches);
