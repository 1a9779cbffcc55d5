use crate::error::Result;
use crate::exact::SubsetDp;
use crate::graph::{BaseGraph, HashMapGraph};
use crate::heuristic_elimination_order::{
    DisconnectedStrategy, EliminationOrder, HeuristicDecomposition,
    HeuristicEliminationDecomposer, MinDegreeSelector, MinFillDegreeSelector, MinFillSelector,
    Selector,
};
use crate::lowerbound::{LowerboundHeuristic, MinorMinWidth};
use crate::tree_decomposition::TreeDecomposition;
use crate::Treewidth;
use log::info;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeuristicType {
    MinDegree,
    MinFill,
    MinFillDegree,
    /// Runs every heuristic and keeps the narrowest decomposition.
    All,
}

impl Default for HeuristicType {
    fn default() -> Self {
        Self::MinFill
    }
}

impl FromStr for HeuristicType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "min-degree" => Ok(Self::MinDegree),
            "min-fill" => Ok(Self::MinFill),
            "min-fill-degree" => Ok(Self::MinFillDegree),
            "all" => Ok(Self::All),
            _ => Err(format!(
                "unknown heuristic '{}', expected one of min-degree, min-fill, min-fill-degree, all",
                s
            )),
        }
    }
}

fn decompose_with<S: Selector>(
    graph: &HashMapGraph,
    strategy: DisconnectedStrategy,
) -> Result<HeuristicDecomposition> {
    HeuristicEliminationDecomposer::<S>::with_graph(graph)
        .strategy(strategy)
        .compute()
}

impl HeuristicType {
    pub fn compute(
        &self,
        graph: &HashMapGraph,
        strategy: DisconnectedStrategy,
    ) -> Result<HeuristicDecomposition> {
        match self {
            HeuristicType::MinDegree => decompose_with::<MinDegreeSelector>(graph, strategy),
            HeuristicType::MinFill => decompose_with::<MinFillSelector>(graph, strategy),
            HeuristicType::MinFillDegree => {
                decompose_with::<MinFillDegreeSelector>(graph, strategy)
            }
            HeuristicType::All => {
                let mut best = decompose_with::<MinFillSelector>(graph, strategy)?;
                for candidate in vec![
                    decompose_with::<MinDegreeSelector>(graph, strategy)?,
                    decompose_with::<MinFillDegreeSelector>(graph, strategy)?,
                ] {
                    if candidate.width() < best.width() {
                        best = candidate;
                    }
                }
                Ok(best)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Heuristic(HeuristicType),
    Exact,
}

#[derive(Clone, Debug)]
pub struct Solution {
    pub width: Treewidth,
    /// Minor-min-width bound on the treewidth. Only computed in heuristic
    /// mode, the exact width makes it redundant.
    pub lowerbound: Option<usize>,
    /// Only computed in heuristic mode.
    pub tree_decomposition: Option<TreeDecomposition>,
    pub elimination_order: Option<EliminationOrder>,
}

macro_rules! impl_setter {
    ($self:ident, $field:ident, $type:ty) => {
        pub fn $field(mut $self, $field: $type) -> Self {
            $self.$field = $field;
            $self
        }
    };
}

#[derive(Clone, Debug)]
pub struct Solver {
    mode: Mode,
    disconnected: DisconnectedStrategy,
    exact_limit: Option<usize>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::default_exact()
    }
}

impl Solver {
    pub fn default_heuristic() -> Self {
        Self {
            mode: Mode::Heuristic(HeuristicType::default()),
            disconnected: DisconnectedStrategy::Strict,
            exact_limit: None,
        }
    }

    pub fn default_exact() -> Self {
        Self {
            mode: Mode::Exact,
            disconnected: DisconnectedStrategy::Strict,
            exact_limit: Some(20),
        }
    }

    impl_setter!(self, mode, Mode);
    impl_setter!(self, disconnected, DisconnectedStrategy);
    impl_setter!(self, exact_limit, Option<usize>);

    pub fn solve(&self, graph: &HashMapGraph) -> Result<Solution> {
        info!(
            "attempting to solve graph with {} vertices and {} edges",
            graph.order(),
            graph.size()
        );
        match self.mode {
            Mode::Exact => {
                let solver = match self.exact_limit {
                    Some(limit) => SubsetDp::with_limit(graph, limit)?,
                    None => SubsetDp::with_graph(graph),
                };
                let width = solver.compute();
                info!("exact treewidth: {}", width);
                Ok(Solution {
                    width,
                    lowerbound: None,
                    tree_decomposition: None,
                    elimination_order: None,
                })
            }
            Mode::Heuristic(heuristic) => {
                let lowerbound = MinorMinWidth::compute(graph);
                info!("minor-min-width lower bound: {}", lowerbound);
                let result = heuristic.compute(graph, self.disconnected)?;
                info!(
                    "{:?} heuristic found decomposition of width {} with {} bags",
                    heuristic,
                    result.width(),
                    result.tree_decomposition.bags().len()
                );
                Ok(Solution {
                    width: result.width(),
                    lowerbound: Some(lowerbound),
                    tree_decomposition: Some(result.tree_decomposition),
                    elimination_order: Some(result.elimination_order),
                })
            }
        }
    }
}
