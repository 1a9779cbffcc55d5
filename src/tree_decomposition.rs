use crate::graph::BaseGraph;
use crate::Treewidth;
use fxhash::FxHashSet;
use std::cmp::max;
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum TreeDecompositionValidationError {
    HasCycle,
    NotConnected,
    MissingVertex(usize),
    MissingEdge((usize, usize)),
    NotInducingSubtree(usize),
}

impl Display for TreeDecompositionValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            TreeDecompositionValidationError::HasCycle => write!(f, "Has Cycle"),
            TreeDecompositionValidationError::NotConnected => write!(f, "Not Connected"),
            TreeDecompositionValidationError::MissingVertex(v) => {
                write!(f, "Missing Vertex: {}", v)
            }
            TreeDecompositionValidationError::MissingEdge((u, v)) => {
                write!(f, "Missing Edge: ({}, {})", u, v)
            }
            TreeDecompositionValidationError::NotInducingSubtree(v) => {
                write!(f, "Not Inducing Subtree: {}", v)
            }
        }
    }
}

impl Error for TreeDecompositionValidationError {}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Bag {
    pub id: usize,
    pub vertex_set: FxHashSet<usize>,
    pub neighbors: FxHashSet<usize>,
}

/// Tree of bags. Bags are identified by their index in `bags`; once added, a
/// bag's vertex set is never changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeDecomposition {
    pub bags: Vec<Bag>,
    pub root: Option<usize>,
    pub max_bag_size: usize,
}

impl TreeDecomposition {
    pub fn with_root(vertex_set: FxHashSet<usize>) -> Self {
        let mut td = Self::default();
        td.add_bag(vertex_set);
        td
    }

    pub fn add_bag(&mut self, vertex_set: FxHashSet<usize>) -> usize {
        let id = self.bags.len();
        if id == 0 {
            self.root = Some(id);
        }
        self.max_bag_size = max(self.max_bag_size, vertex_set.len());
        self.bags.push(Bag {
            id,
            vertex_set,
            neighbors: FxHashSet::default(),
        });
        id
    }

    pub fn add_edge(&mut self, b1: usize, b2: usize) {
        assert!(b1 < self.bags.len());
        assert!(b2 < self.bags.len());
        assert_ne!(b1, b2);
        self.bags[b1].neighbors.insert(b2);
        self.bags[b2].neighbors.insert(b1);
    }

    pub fn bags(&self) -> &[Bag] {
        &self.bags
    }

    /// Size of the largest bag minus one, `-1` without bags.
    pub fn width(&self) -> Treewidth {
        self.max_bag_size as Treewidth - 1
    }

    /// Attaches the bags of `other` below `glue_point`. Only valid if no
    /// vertex of `other` occurs in `self` or the shared vertices are all
    /// contained in `glue_point` and in the root of `other`.
    pub fn combine_with(&mut self, glue_point: usize, mut other: TreeDecomposition) {
        assert!(glue_point < self.bags.len());
        self.max_bag_size = max(self.max_bag_size, other.max_bag_size);
        let offset = self.bags.len();
        for b in other.bags.iter_mut() {
            b.id += offset;
            b.neighbors = b.neighbors.iter().map(|n| *n + offset).collect();
        }
        if let Some(other_root) = other.root {
            self.bags.extend(other.bags.drain(..));
            self.add_edge(glue_point, other_root + offset);
        }
    }

    /// Joins decompositions of vertex-disjoint graphs. With more than one
    /// non-empty part, an empty bridging bag becomes the root and every part
    /// hangs off it.
    pub fn join_disjoint(parts: Vec<TreeDecomposition>) -> Self {
        let mut parts: Vec<_> = parts.into_iter().filter(|td| td.root.is_some()).collect();
        if parts.len() <= 1 {
            return parts.pop().unwrap_or_default();
        }
        let mut td = TreeDecomposition::with_root(FxHashSet::default());
        for part in parts {
            td.combine_with(0, part);
        }
        td
    }

    pub fn dfs(&self) -> TreeDecompositionIterator {
        let mut visited = FxHashSet::default();
        let stack = match self.root {
            Some(root) => {
                visited.insert(root);
                vec![root]
            }
            None => vec![],
        };
        TreeDecompositionIterator {
            td: self,
            stack,
            visited,
        }
    }

    pub fn verify<G: BaseGraph>(&self, graph: &G) -> Result<(), TreeDecompositionValidationError> {
        if !self.is_connected() {
            return Err(TreeDecompositionValidationError::NotConnected);
        }

        if self.is_cyclic() {
            return Err(TreeDecompositionValidationError::HasCycle);
        }

        if let Some(v) = self.get_missing_vertex(graph) {
            return Err(TreeDecompositionValidationError::MissingVertex(v));
        }

        if let Some(e) = self.get_missing_edge(graph) {
            return Err(TreeDecompositionValidationError::MissingEdge(e));
        }

        if let Some(v) = self.get_vertex_not_inducing_subtree(graph) {
            return Err(TreeDecompositionValidationError::NotInducingSubtree(v));
        }

        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.dfs().count() == self.bags.len()
    }

    fn is_cyclic(&self) -> bool {
        match self.root {
            None => false,
            Some(root) => {
                let mut visited = FxHashSet::default();
                self.is_cyclic_rec(&mut visited, root, None)
            }
        }
    }

    fn is_cyclic_rec(&self, visited: &mut FxHashSet<usize>, v: usize, parent: Option<usize>) -> bool {
        visited.insert(v);
        for n in self.bags[v].neighbors.iter().copied() {
            if !visited.contains(&n) {
                if self.is_cyclic_rec(visited, n, Some(v)) {
                    return true;
                }
            } else if parent != Some(n) {
                return true;
            }
        }
        false
    }

    fn get_missing_vertex<G: BaseGraph>(&self, graph: &G) -> Option<usize> {
        graph
            .vertices()
            .find(|v| !self.bags.iter().any(|b| b.vertex_set.contains(v)))
    }

    fn get_missing_edge<G: BaseGraph>(&self, graph: &G) -> Option<(usize, usize)> {
        for u in graph.vertices() {
            for v in graph.neighborhood(u).filter(|v| u < *v) {
                if !self
                    .bags
                    .iter()
                    .any(|b| b.vertex_set.contains(&u) && b.vertex_set.contains(&v))
                {
                    return Some((u, v));
                }
            }
        }
        None
    }

    fn get_vertex_not_inducing_subtree<G: BaseGraph>(&self, graph: &G) -> Option<usize> {
        for u in graph.vertices() {
            let mut inducing_bags: FxHashSet<usize> = self
                .bags
                .iter()
                .filter(|b| b.vertex_set.contains(&u))
                .map(|b| b.id)
                .collect();

            let first = match inducing_bags.iter().next() {
                Some(first) => *first,
                None => continue,
            };
            inducing_bags.remove(&first);
            let mut visited = FxHashSet::default();
            visited.insert(first);
            let mut stack: Vec<usize> = vec![first];
            while let Some(c) = stack.pop() {
                for n in self.bags[c].neighbors.iter().copied() {
                    let bag = &self.bags[n];
                    if !visited.contains(&n) && bag.vertex_set.contains(&u) {
                        inducing_bags.remove(&bag.id);
                        stack.push(n);
                        visited.insert(n);
                    }
                }
            }
            if !inducing_bags.is_empty() {
                return Some(u);
            }
        }
        None
    }
}

/// Width of a decomposition: largest bag size minus one. The decomposition of
/// the empty graph has no bags and width `-1`.
pub fn tree_width_from_decomp(td: &TreeDecomposition) -> Treewidth {
    td.bags
        .iter()
        .map(|b| b.vertex_set.len() as Treewidth)
        .max()
        .unwrap_or(0)
        - 1
}

pub struct TreeDecompositionIterator<'a> {
    td: &'a TreeDecomposition,
    stack: Vec<usize>,
    visited: FxHashSet<usize>,
}

impl<'a> Iterator for TreeDecompositionIterator<'a> {
    type Item = &'a Bag;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        for c in self.td.bags[current].neighbors.iter().copied() {
            if self.visited.insert(c) {
                self.stack.push(c);
            }
        }
        self.td.bags.get(current)
    }
}
