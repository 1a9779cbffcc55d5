use treewidth_td::exact::exact_treewidth;
use treewidth_td::graph::{HashMapGraph, MutableGraph};
use treewidth_td::heuristic_elimination_order::{
    MinDegreeDecomposer, MinFillDecomposer, MinFillDegree,
};
use treewidth_td::tree_decomposition::tree_width_from_decomp;

// a b c d e f g
// 0 1 2 3 4 5 6
fn seven_vertex_graph() -> HashMapGraph {
    HashMapGraph::from_edges(&[
        (0, 1),
        (1, 2),
        (1, 3),
        (2, 4),
        (2, 5),
        (3, 5),
        (3, 6),
        (4, 5),
        (5, 6),
    ])
}

#[test]
fn seven_vertex_graph_has_treewidth_two() {
    let graph = seven_vertex_graph();
    assert_eq!(exact_treewidth(&graph), 2);

    for result in vec![
        MinDegreeDecomposer::with_graph(&graph).compute().unwrap(),
        MinFillDecomposer::with_graph(&graph).compute().unwrap(),
        MinFillDegree::with_graph(&graph).compute().unwrap(),
    ] {
        assert_eq!(result.tree_decomposition.verify(&graph), Ok(()));
        assert!(tree_width_from_decomp(&result.tree_decomposition) >= 2);
    }
}

#[test]
fn cliques_give_one_bag() {
    for k in 1..8 {
        let mut graph = HashMapGraph::new();
        let vertices: Vec<usize> = (0..k).map(|v| v * 10).collect();
        vertices.iter().for_each(|v| graph.add_vertex(*v));
        graph.make_clique(&vertices);

        assert_eq!(exact_treewidth(&graph), k as i64 - 1);

        let td = MinDegreeDecomposer::with_graph(&graph)
            .compute()
            .unwrap()
            .tree_decomposition;
        assert_eq!(td.bags().len(), 1);
        assert_eq!(td.bags()[0].vertex_set.len(), k);
        assert_eq!(tree_width_from_decomp(&td), k as i64 - 1);
    }
}

#[test]
fn empty_graph_convention() {
    let graph = HashMapGraph::new();
    assert_eq!(exact_treewidth(&graph), -1);

    let td = MinFillDecomposer::with_graph(&graph)
        .compute()
        .unwrap()
        .tree_decomposition;
    assert!(td.bags().is_empty());
    assert_eq!(tree_width_from_decomp(&td), -1);
}

#[test]
fn single_vertex() {
    let mut graph = HashMapGraph::new();
    graph.add_vertex(1);
    assert_eq!(exact_treewidth(&graph), 0);

    let td = MinFillDecomposer::with_graph(&graph)
        .compute()
        .unwrap()
        .tree_decomposition;
    assert_eq!(td.bags().len(), 1);
    assert!(td.bags()[0].vertex_set.contains(&1));
    assert_eq!(tree_width_from_decomp(&td), 0);
}

#[test]
fn heuristic_matches_exact_on_series_parallel_graph() {
    // two triangles glued along an edge plus a pendant path
    let graph = HashMapGraph::from_edges(&[(0, 1), (1, 2), (2, 0), (1, 3), (3, 2), (3, 4), (4, 5)]);
    let exact = exact_treewidth(&graph);
    assert_eq!(exact, 2);
    let td = MinFillDecomposer::with_graph(&graph)
        .compute()
        .unwrap()
        .tree_decomposition;
    assert_eq!(td.verify(&graph), Ok(()));
    assert_eq!(td.width(), exact);
}
