use crate::error::{Result, TreewidthError};
use crate::graph::{BaseGraph, HashMapGraph, MutableGraph};
use crate::tree_decomposition::TreeDecomposition;
use crate::Treewidth;
use fxhash::{FxHashMap, FxHashSet};
use log::{debug, trace};
use std::marker::PhantomData;

/// Vertex selection strategy of an elimination ordering heuristic. The
/// vertex with the smallest `value` is eliminated next, ties are broken by
/// the smaller vertex id.
pub trait Selector {
    type Value: Ord;

    fn value(graph: &HashMapGraph, v: usize) -> Self::Value;

    fn select(graph: &HashMapGraph) -> Option<usize> {
        graph.vertices().min_by_key(|v| (Self::value(graph, *v), *v))
    }
}

pub struct MinDegreeSelector;

impl Selector for MinDegreeSelector {
    type Value = usize;

    fn value(graph: &HashMapGraph, v: usize) -> usize {
        graph.degree(v).unwrap_or(0)
    }
}

pub struct MinFillSelector;

impl Selector for MinFillSelector {
    type Value = usize;

    fn value(graph: &HashMapGraph, v: usize) -> usize {
        graph.fill_in_count(v)
    }
}

/// Min-fill, falling back to the degree on equal fill-in.
pub struct MinFillDegreeSelector;

impl Selector for MinFillDegreeSelector {
    type Value = (usize, usize);

    fn value(graph: &HashMapGraph, v: usize) -> (usize, usize) {
        (graph.fill_in_count(v), graph.degree(v).unwrap_or(0))
    }
}

/// How the decomposer treats graphs with more than one connected component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisconnectedStrategy {
    /// Fail with `DisconnectedGraph` as soon as an isolated vertex is selected
    /// while other vertices remain.
    Strict,
    /// Decompose every component on its own and join the results through an
    /// empty bridging bag.
    ComponentWise,
}

impl Default for DisconnectedStrategy {
    fn default() -> Self {
        Self::Strict
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EliminationOrder {
    data: Vec<usize>,
    width: Treewidth,
}

impl EliminationOrder {
    pub(crate) fn new(data: Vec<usize>, width: Treewidth) -> Self {
        EliminationOrder { data, width }
    }

    pub fn width(&self) -> Treewidth {
        self.width
    }

    pub fn order(&self) -> &[usize] {
        self.data.as_slice()
    }
}

/// Width induced by eliminating the vertices of `graph` in `order`: the
/// largest degree of a vertex at the time it is eliminated.
pub fn get_width<G: MutableGraph>(graph: &G, order: &[usize]) -> Treewidth {
    let mut graph = graph.clone();
    order
        .iter()
        .map(|v| {
            let degree = graph.neighborhood(*v).count() as Treewidth;
            graph.eliminate_vertex(*v);
            degree
        })
        .max()
        .unwrap_or(-1)
}

#[derive(Clone, Debug)]
pub struct HeuristicDecomposition {
    pub tree_decomposition: TreeDecomposition,
    pub elimination_order: EliminationOrder,
    /// Width of every connected component that was decomposed separately, in
    /// order of their smallest vertex. A single entry in strict mode.
    pub component_widths: Vec<Treewidth>,
}

impl HeuristicDecomposition {
    pub fn width(&self) -> Treewidth {
        self.tree_decomposition.width()
    }
}

pub type MinFillDecomposer = HeuristicEliminationDecomposer<MinFillSelector>;
pub type MinDegreeDecomposer = HeuristicEliminationDecomposer<MinDegreeSelector>;
pub type MinFillDegree = HeuristicEliminationDecomposer<MinFillDegreeSelector>;

pub struct HeuristicEliminationDecomposer<S: Selector> {
    graph: HashMapGraph,
    strategy: DisconnectedStrategy,
    _selector: PhantomData<S>,
}

impl<S: Selector> HeuristicEliminationDecomposer<S> {
    pub fn with_graph(graph: &HashMapGraph) -> Self {
        Self {
            graph: graph.clone(),
            strategy: DisconnectedStrategy::default(),
            _selector: PhantomData,
        }
    }

    pub fn strategy(mut self, strategy: DisconnectedStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn compute(self) -> Result<HeuristicDecomposition> {
        match self.strategy {
            DisconnectedStrategy::Strict => {
                let (tree_decomposition, order) = Self::decompose(self.graph)?;
                let width = tree_decomposition.width();
                let component_widths = if order.is_empty() { vec![] } else { vec![width] };
                Ok(HeuristicDecomposition {
                    tree_decomposition,
                    elimination_order: EliminationOrder::new(order, width),
                    component_widths,
                })
            }
            DisconnectedStrategy::ComponentWise => {
                let components = self.graph.connected_components();
                debug!("decomposing {} components separately", components.len());
                let mut parts = Vec::with_capacity(components.len());
                let mut order = Vec::with_capacity(self.graph.order());
                let mut component_widths = Vec::with_capacity(components.len());
                for component in components.iter() {
                    let (td, component_order) =
                        Self::decompose(self.graph.induced_subgraph(component))?;
                    component_widths.push(td.width());
                    order.extend(component_order);
                    parts.push(td);
                }
                let tree_decomposition = TreeDecomposition::join_disjoint(parts);
                let width = tree_decomposition.width();
                Ok(HeuristicDecomposition {
                    tree_decomposition,
                    elimination_order: EliminationOrder::new(order, width),
                    component_widths,
                })
            }
        }
    }

    /// Eliminates vertices until the remaining graph is a clique, then unwinds
    /// the eliminations: each eliminated vertex `v` with neighborhood `N` at
    /// elimination time gets the bag `N + v`, attached to a bag containing `N`.
    fn decompose(mut graph: HashMapGraph) -> Result<(TreeDecomposition, Vec<usize>)> {
        let mut tree_decomposition = TreeDecomposition::default();
        if graph.order() == 0 {
            return Ok((tree_decomposition, vec![]));
        }

        let mut stack: Vec<(usize, FxHashSet<usize>)> = Vec::with_capacity(graph.order());
        while let Some(min_degree) = graph.min_degree() {
            if min_degree + 1 == graph.order() {
                break;
            }
            let v = match S::select(&graph) {
                Some(v) => v,
                None => break,
            };
            let nb = graph.neighbors(v)?.clone();
            if nb.is_empty() {
                return Err(TreewidthError::DisconnectedGraph {
                    vertex: v,
                    remaining: graph.order() - 1,
                });
            }
            trace!("eliminating {} with degree {}", v, nb.len());
            graph.eliminate_vertex(v);
            stack.push((v, nb));
        }

        let clique: Vec<usize> = graph.vertices().collect();
        debug!(
            "eliminated {} vertices, remaining clique has {} vertices",
            stack.len(),
            clique.len()
        );
        let root = tree_decomposition.add_bag(clique.iter().copied().collect());

        // position in the elimination order, vertices of the final clique come last
        let mut eliminated_at: FxHashMap<usize, usize> = stack
            .iter()
            .enumerate()
            .map(|(idx, (v, _))| (*v, idx))
            .collect();
        let mut bag_of: FxHashMap<usize, usize> = FxHashMap::default();
        for v in clique.iter().copied() {
            eliminated_at.insert(v, usize::MAX);
            bag_of.insert(v, root);
        }

        let mut order: Vec<usize> = stack.iter().map(|(v, _)| *v).collect();
        order.extend(clique);

        while let Some((v, nb)) = stack.pop() {
            // the first neighbor eliminated after `v` saw all of `nb` as its neighbors
            let parent = nb
                .iter()
                .min_by_key(|u| (eliminated_at[*u], **u))
                .map_or(root, |u| bag_of[u]);
            debug_assert!(tree_decomposition.bags[parent].vertex_set.is_superset(&nb));

            let mut bag = nb;
            bag.insert(v);
            let id = tree_decomposition.add_bag(bag);
            tree_decomposition.add_edge(parent, id);
            bag_of.insert(v, id);
        }
        Ok((tree_decomposition, order))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::TreewidthError;
    use crate::graph::{BaseGraph, HashMapGraph, MutableGraph};
    use crate::heuristic_elimination_order::{
        get_width, DisconnectedStrategy, MinDegreeDecomposer, MinDegreeSelector, MinFillDecomposer,
        MinFillDegree, MinFillDegreeSelector, MinFillSelector, Selector,
    };
    use test_log::test;

    fn star_with_triangle() -> HashMapGraph {
        // 0 is the center, 1 - 2 - 3 a path among the leaves, 4 a pendant on 3
        HashMapGraph::from_edges(&[(0, 1), (0, 2), (0, 3), (1, 2), (2, 3), (3, 4)])
    }

    #[test]
    fn min_degree_selects_smallest_degree() {
        let graph = star_with_triangle();
        assert_eq!(MinDegreeSelector::select(&graph), Some(4));
        assert_eq!(MinDegreeSelector::value(&graph, 0), 3);
        assert_eq!(MinDegreeSelector::select(&HashMapGraph::new()), None);
    }

    #[test]
    fn min_fill_selects_fewest_fill_edges() {
        let graph = star_with_triangle();
        // 1 and 4 are simplicial, 1 wins the tie
        assert_eq!(MinFillSelector::value(&graph, 1), 0);
        assert_eq!(MinFillSelector::value(&graph, 4), 0);
        assert_eq!(MinFillSelector::value(&graph, 0), 1);
        assert_eq!(MinFillSelector::select(&graph), Some(1));
    }

    #[test]
    fn min_fill_degree_breaks_ties_by_degree() {
        let graph = star_with_triangle();
        assert_eq!(MinFillDegreeSelector::value(&graph, 1), (0, 2));
        assert_eq!(MinFillDegreeSelector::value(&graph, 4), (0, 1));
        assert_eq!(MinFillDegreeSelector::value(&graph, 0), (1, 3));
        assert_eq!(MinFillDegreeSelector::select(&graph), Some(4));
    }

    #[test]
    fn selectors_do_not_mutate() {
        let graph = star_with_triangle();
        let copy = graph.clone();
        MinFillSelector::select(&graph);
        MinDegreeSelector::select(&graph);
        assert_eq!(graph, copy);
    }

    #[test]
    fn decomposes_cycle() {
        let graph = HashMapGraph::from_edges(&[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
        for result in vec![
            MinDegreeDecomposer::with_graph(&graph).compute().unwrap(),
            MinFillDecomposer::with_graph(&graph).compute().unwrap(),
            MinFillDegree::with_graph(&graph).compute().unwrap(),
        ] {
            assert_eq!(result.tree_decomposition.verify(&graph), Ok(()));
            assert_eq!(result.width(), 2);
            assert_eq!(result.elimination_order.order().len(), 5);
            assert_eq!(
                get_width(&graph, result.elimination_order.order()),
                result.width()
            );
        }
    }

    #[test]
    fn clique_is_a_single_bag() {
        let mut graph = HashMapGraph::new();
        graph.make_clique(&[0, 1, 2, 3]);
        let result = MinDegreeDecomposer::with_graph(&graph).compute().unwrap();
        assert_eq!(result.tree_decomposition.bags().len(), 1);
        assert_eq!(result.width(), 3);
    }

    #[test]
    fn trivial_graphs() {
        let result = MinFillDecomposer::with_graph(&HashMapGraph::new())
            .compute()
            .unwrap();
        assert!(result.tree_decomposition.bags().is_empty());
        assert_eq!(result.width(), -1);
        assert!(result.component_widths.is_empty());

        let mut graph = HashMapGraph::new();
        graph.add_vertex(42);
        let result = MinFillDecomposer::with_graph(&graph).compute().unwrap();
        assert_eq!(result.tree_decomposition.bags().len(), 1);
        assert!(result.tree_decomposition.bags()[0].vertex_set.contains(&42));
        assert_eq!(result.width(), 0);
    }

    #[test]
    fn does_not_touch_input() {
        let graph = star_with_triangle();
        let copy = graph.clone();
        MinFillDecomposer::with_graph(&graph).compute().unwrap();
        assert_eq!(graph, copy);
    }

    #[test]
    fn strict_mode_rejects_disconnected_graph() {
        let graph = HashMapGraph::from_edges(&[(0, 1), (1, 2), (5, 6)]);
        let result = MinDegreeDecomposer::with_graph(&graph).compute();
        assert!(matches!(
            result,
            Err(TreewidthError::DisconnectedGraph { .. })
        ));

        let mut graph = HashMapGraph::new();
        graph.add_vertex(0);
        graph.add_vertex(1);
        let result = MinFillDecomposer::with_graph(&graph).compute();
        assert!(matches!(
            result,
            Err(TreewidthError::DisconnectedGraph {
                vertex: 0,
                remaining: 1
            })
        ));
    }

    #[test]
    fn component_wise_mode_joins_components() {
        let mut graph = HashMapGraph::from_edges(&[(0, 1), (1, 2), (2, 0), (5, 6)]);
        graph.add_vertex(9);
        let result = MinDegreeDecomposer::with_graph(&graph)
            .strategy(DisconnectedStrategy::ComponentWise)
            .compute()
            .unwrap();
        assert_eq!(result.tree_decomposition.verify(&graph), Ok(()));
        assert_eq!(result.component_widths, vec![2, 1, 0]);
        assert_eq!(result.width(), 2);
        assert_eq!(result.elimination_order.order().len(), graph.order());
    }
}
