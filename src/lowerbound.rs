use crate::graph::{BaseGraph, HashMapGraph, MutableGraph};
use std::cmp::max;

pub trait LowerboundHeuristic {
    fn compute(graph: &HashMapGraph) -> usize;
}

/// Minor-min-width: contracting a minimum degree vertex into its minimum
/// degree neighbor never increases treewidth, so the largest minimum degree
/// seen along the way bounds it from below.
pub struct MinorMinWidth {}

impl LowerboundHeuristic for MinorMinWidth {
    fn compute(graph: &HashMapGraph) -> usize {
        let mut graph = graph.clone();
        let mut lb = 0;
        loop {
            let degree = |v: &usize| graph.degree(*v).unwrap_or(0);
            let v = match graph
                .vertices()
                .filter(|v| degree(v) > 0)
                .min_by_key(|v| (degree(v), *v))
            {
                Some(v) => v,
                None => break,
            };
            lb = max(lb, degree(&v));
            let u = graph.neighborhood(v).min_by_key(|u| (degree(u), *u));
            if let Some(u) = u {
                graph.contract(v, u);
            }
        }
        lb
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{HashMapGraph, MutableGraph};
    use crate::lowerbound::{LowerboundHeuristic, MinorMinWidth};

    #[test]
    fn edgeless_graph() {
        let mut graph = HashMapGraph::new();
        assert_eq!(MinorMinWidth::compute(&graph), 0);
        graph.add_vertex(0);
        graph.add_vertex(1);
        assert_eq!(MinorMinWidth::compute(&graph), 0);
    }

    #[test]
    fn clique_is_tight() {
        let mut graph = HashMapGraph::new();
        graph.make_clique(&[0, 1, 2, 3, 4]);
        assert_eq!(MinorMinWidth::compute(&graph), 4);
    }

    #[test]
    fn cycle() {
        let graph = HashMapGraph::from_edges(&[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)]);
        assert_eq!(MinorMinWidth::compute(&graph), 2);
    }
}
