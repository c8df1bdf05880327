//! Criterion benchmarks for wavegraph.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use tempfile::NamedTempFile;

use wavegraph::format::EdgeListReader;
use wavegraph::graph::{GraphOptions, MatrixGraph};
use wavegraph::index::VertexMap;

/// Random undirected weighted graph with about `edges_per_vertex` edges per vertex.
fn make_graph(len: usize, edges_per_vertex: usize) -> MatrixGraph {
    let mut rng = rand::thread_rng();
    let mut graph = MatrixGraph::new(false, true, len);
    for i in 0..len {
        for _ in 0..edges_per_vertex {
            let j = rng.gen_range(0..len);
            if j != i {
                graph.add_weighted_edge(i, j, rng.gen_range(1..20));
            }
        }
    }
    graph
}

/// Same shape as [`make_graph`], serialized as an edge list.
fn make_edge_list(len: usize, edges_per_vertex: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut lines = Vec::with_capacity(len * edges_per_vertex);
    for i in 0..len {
        for _ in 0..edges_per_vertex {
            let j = rng.gen_range(0..len);
            lines.push(format!("{} {} {}", i + 1, j + 1, rng.gen_range(1..20)));
        }
    }
    format!("{} {}\n{}\n", len, lines.len(), lines.join("\n"))
}

fn bench_map_insert_100k(c: &mut Criterion) {
    c.bench_function("map_insert_100k", |b| {
        b.iter(|| {
            let mut map = VertexMap::new();
            for k in 0..100_000u64 {
                map.insert(k, k);
            }
            black_box(map.len())
        })
    });
}

fn bench_map_lookup_100k(c: &mut Criterion) {
    let map: VertexMap<u64> = (0..100_000u64).map(|k| (k, k)).collect();

    c.bench_function("map_lookup_100k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let key = rng.gen_range(0..100_000u64);
            black_box(map.get(key))
        })
    });
}

fn bench_components_1k(c: &mut Criterion) {
    let graph = make_graph(1_000, 2);

    c.bench_function("components_1k", |b| {
        b.iter(|| {
            let mut copy = graph.clone();
            copy.invalidate_cache();
            black_box(copy.connected_components().len())
        })
    });
}

fn bench_shortest_paths_200(c: &mut Criterion) {
    // Duplicate-mode waves branch on every shortest route; keep the graph sparse.
    let graph = make_graph(200, 1);

    c.bench_function("shortest_paths_200", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let sink = rng.gen_range(0..200);
            black_box(graph.shortest_paths(0, sink).len())
        })
    });
}

fn bench_minimum_weight_1k(c: &mut Criterion) {
    let graph = make_graph(1_000, 3);

    c.bench_function("minimum_weight_1k", |b| {
        b.iter(|| black_box(graph.minimum_weight_paths(0, None).len()))
    });
}

fn bench_read_edge_list_1k(c: &mut Criterion) {
    let tmp = NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), make_edge_list(1_000, 5)).unwrap();

    c.bench_function("read_edge_list_1k", |b| {
        b.iter(|| {
            let graph =
                EdgeListReader::read_from_file(tmp.path(), GraphOptions::default()).unwrap();
            black_box(graph.len())
        })
    });
}

criterion_group!(
    benches,
    bench_map_insert_100k,
    bench_map_lookup_100k,
    bench_components_1k,
    bench_shortest_paths_200,
    bench_minimum_weight_1k,
    bench_read_edge_list_1k,
);
criterion_main!(benches);
