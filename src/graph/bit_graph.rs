use crate::datastructures::BitSet;
use crate::graph::base_graph::BaseGraph;
use fxhash::FxHashMap;

/// Dense graph on the vertices `0..n`, one adjacency bitset per vertex.
#[derive(Clone, Debug)]
pub struct BitGraph {
    graph: Vec<BitSet>,
}

impl BitGraph {
    /// Relabels `og_graph` through `og_to_self`, which has to map every vertex
    /// of `og_graph` to a distinct index in `0..og_graph.order()`.
    pub fn from_graph<G: BaseGraph>(og_graph: &G, og_to_self: &FxHashMap<usize, usize>) -> Self {
        let mut graph = vec![BitSet::new(og_graph.order()); og_graph.order()];

        for v in og_graph.vertices() {
            for u in og_graph.neighborhood(v) {
                let a = og_to_self[&v];
                let b = og_to_self[&u];
                graph[a].set_bit(b);
            }
        }
        Self { graph }
    }

    /// Vertices outside of `c` adjacent to some vertex of `c`.
    pub fn exterior_border(&self, c: &BitSet) -> BitSet {
        let mut border = BitSet::new(c.len());

        for v in c.iter() {
            border.or(&self.graph[v])
        }
        border.and_not(&c);
        border
    }

    /// Vertices reachable from `start` using only vertices of `within` (and
    /// `start` itself).
    pub fn component_within(&self, start: usize, within: &BitSet) -> BitSet {
        let mut component = BitSet::new(self.graph.len());
        component.set_bit(start);
        loop {
            let mut border = self.exterior_border(&component);
            border.and(within);
            if border.empty() {
                return component;
            }
            component.or(&border);
        }
    }
}

impl BaseGraph for BitGraph {
    fn order(&self) -> usize {
        self.graph.len()
    }

    fn has_vertex(&self, u: usize) -> bool {
        u < self.graph.len()
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        u < self.graph.len() && v < self.graph.len() && self.graph[u][v]
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(0..self.graph.len())
    }

    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        match self.graph.get(u) {
            Some(nb) => Box::new(nb.iter()),
            None => Box::new(std::iter::empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::datastructures::BitSet;
    use crate::graph::{BaseGraph, BitGraph, HashMapGraph};
    use fxhash::FxHashMap;

    fn path_graph() -> BitGraph {
        // 10 - 20 - 30 - 40
        let graph = HashMapGraph::from_edges(&[(10, 20), (20, 30), (30, 40)]);
        let map: FxHashMap<usize, usize> = graph
            .vertices()
            .enumerate()
            .map(|(i, v)| (v, i))
            .collect();
        BitGraph::from_graph(&graph, &map)
    }

    #[test]
    fn relabels_vertices() {
        let graph = path_graph();
        assert_eq!(graph.order(), 4);
        assert!(graph.has_edge(0, 1));
        assert!(graph.has_edge(2, 1));
        assert!(!graph.has_edge(0, 3));
        assert_eq!(graph.neighborhood(1).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(graph.fill_in_count(1), 1);
    }

    #[test]
    fn exterior_border() {
        let graph = path_graph();
        let c = BitSet::from_indices(4, &[1, 2]);
        assert_eq!(graph.exterior_border(&c).iter().collect::<Vec<_>>(), vec![0, 3]);
    }

    #[test]
    fn component_within() {
        let graph = path_graph();
        let within = BitSet::from_indices(4, &[1, 3]);
        let component = graph.component_within(0, &within);
        assert_eq!(component.iter().collect::<Vec<_>>(), vec![0, 1]);
    }
}
