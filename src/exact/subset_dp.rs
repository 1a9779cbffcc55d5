use crate::datastructures::{BitSet, SubsetsOfSize};
use crate::error::{Result, TreewidthError};
use crate::graph::{BaseGraph, BitGraph, HashMapGraph};
use crate::Treewidth;
use fxhash::FxHashMap;
use log::{debug, trace};
use std::cmp::{max, min};

/// Exact treewidth through the dynamic program over all vertex subsets
///
/// `TW(S) = min_{v in S} max(TW(S - v), |Q(S - v, v)|)` with `TW({}) = -1`,
/// where `Q(S, v)` holds every vertex outside of `S + v` that can be reached
/// from `v` through vertices of `S`. `TW(V)` is the treewidth of the graph.
///
/// Runs in `O(2^n * n^2)` time and `O(2^n)` memory, so only graphs with a few
/// dozen vertices are feasible. The table lives as long as the solver value.
pub struct SubsetDp {
    graph: BitGraph,
    table: FxHashMap<BitSet, Treewidth>,
}

impl SubsetDp {
    pub fn with_graph<G: BaseGraph>(graph: &G) -> Self {
        let og_to_self: FxHashMap<usize, usize> = graph
            .vertices()
            .enumerate()
            .map(|(idx, v)| (v, idx))
            .collect();
        Self {
            graph: BitGraph::from_graph(graph, &og_to_self),
            table: FxHashMap::default(),
        }
    }

    /// Like `with_graph`, but refuses graphs with more than `limit` vertices.
    pub fn with_limit<G: BaseGraph>(graph: &G, limit: usize) -> Result<Self> {
        if graph.order() > limit {
            return Err(TreewidthError::GraphTooLarge {
                order: graph.order(),
                limit,
            });
        }
        Ok(Self::with_graph(graph))
    }

    pub fn compute(mut self) -> Treewidth {
        let n = self.graph.order();
        debug!("running subset dynamic program on {} vertices", n);
        self.table.insert(BitSet::new(n), -1);

        for size in 1..=n {
            for subset in SubsetsOfSize::new(n, size) {
                let width = self.best_split(&subset);
                self.table.insert(subset, width);
            }
            trace!("finished subsets of size {}, table has {} entries", size, self.table.len());
        }
        self.table[&BitSet::new_all_set(n)]
    }

    fn best_split(&self, subset: &BitSet) -> Treewidth {
        let mut best = Treewidth::MAX;
        for v in subset.iter() {
            let mut rest = subset.clone();
            rest.unset_bit(v);
            let q = self.q(&rest, v) as Treewidth;
            best = min(best, max(self.table[&rest], q));
        }
        best
    }

    /// Number of vertices outside `subset + v` that are connected to `v` by a
    /// path whose inner vertices all lie in `subset`.
    fn q(&self, subset: &BitSet, v: usize) -> usize {
        let component = self.graph.component_within(v, subset);
        self.graph.exterior_border(&component).cardinality()
    }
}

/// Exact treewidth of `graph`, `-1` for the empty graph.
pub fn exact_treewidth(graph: &HashMapGraph) -> Treewidth {
    SubsetDp::with_graph(graph).compute()
}
