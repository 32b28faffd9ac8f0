use criterion::{Criterion, black_box, criterion_group, criterion_main};
use stepviz_algorithms::graph::dijkstra::{self, DijkstraInput};
use stepviz_algorithms::searching::binary_search::{self, BinarySearchInput};

fn bench_binary_search(c: &mut Criterion) {
    let input = BinarySearchInput {
        nums: (0..10_000).map(|i| i * 2).collect(),
        target: 19_998,
    };
    c.bench_function("binary_search_10k", |b| {
        b.iter(|| binary_search::run(black_box(&input)))
    });
}

fn bench_dijkstra(c: &mut Criterion) {
    // ring plus chords, 200 nodes
    let n = 200usize;
    let mut edges = Vec::new();
    for i in 0..n {
        edges.push((i, (i + 1) % n, 1i64));
        edges.push((i, (i + 7) % n, 3i64));
    }
    let input = DijkstraInput {
        n,
        edges,
        source: 0,
        directed: true,
    };
    c.bench_function("dijkstra_ring_200", |b| {
        b.iter(|| dijkstra::run(black_box(&input)).unwrap())
    });
}

criterion_group!(benches, bench_binary_search, bench_dijkstra);
criterion_main!(benches);
