use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use treewidth_td::exact::exact_treewidth;
use treewidth_td::graph::{HashMapGraph, MutableGraph};
use treewidth_td::heuristic_elimination_order::{
    DisconnectedStrategy, MinDegreeDecomposer, MinFillDecomposer,
};

fn random_graph(order: usize, p: f64, seed: u64) -> HashMapGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = HashMapGraph::with_capacity(order);
    for u in 0..order {
        graph.add_vertex(u);
        for v in 0..u {
            if rng.gen_bool(p) {
                graph.add_edge(u, v);
            }
        }
    }
    graph
}

fn heuristics(c: &mut Criterion) {
    let graph = random_graph(200, 0.05, 1337);

    c.bench_function("min_degree_200", |b| {
        b.iter(|| {
            MinDegreeDecomposer::with_graph(black_box(&graph))
                .strategy(DisconnectedStrategy::ComponentWise)
                .compute()
        })
    });

    c.bench_function("min_fill_200", |b| {
        b.iter(|| {
            MinFillDecomposer::with_graph(black_box(&graph))
                .strategy(DisconnectedStrategy::ComponentWise)
                .compute()
        })
    });
}

fn exact(c: &mut Criterion) {
    let graph = random_graph(12, 0.3, 42);

    c.bench_function("subset_dp_12", |b| {
        b.iter(|| exact_treewidth(black_box(&graph)))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = heuristics, exact
}
criterion_main!(benches);
