use crate::error::{Result, TreewidthError};
use crate::graph::base_graph::BaseGraph;
use crate::graph::mutable_graph::MutableGraph;
use fxhash::{FxHashMap, FxHashSet};

/// Adjacency-set graph. Vertices are arbitrary `usize` identifiers, not
/// necessarily contiguous.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HashMapGraph {
    data: FxHashMap<usize, FxHashSet<usize>>,
}

impl HashMapGraph {
    pub fn from_edges(edges: &[(usize, usize)]) -> Self {
        let mut graph = Self::new();
        for (u, v) in edges.iter().copied() {
            graph.add_edge(u, v);
        }
        graph
    }

    pub fn neighbors(&self, u: usize) -> Result<&FxHashSet<usize>> {
        self.data.get(&u).ok_or(TreewidthError::UnknownVertex(u))
    }

    pub fn degree(&self, u: usize) -> Result<usize> {
        self.neighbors(u).map(|nb| nb.len())
    }

    pub fn min_degree(&self) -> Option<usize> {
        self.data.values().map(|nb| nb.len()).min()
    }

    /// Number of edges.
    pub fn size(&self) -> usize {
        self.data.values().map(|nb| nb.len()).sum::<usize>() / 2
    }

    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges: Vec<_> = self
            .data
            .iter()
            .flat_map(|(u, nb)| nb.iter().filter(move |v| u < *v).map(move |v| (*u, *v)))
            .collect();
        edges.sort_unstable();
        edges
    }

    pub fn dfs(&self, u: usize) -> Result<HashMapGraphDfs> {
        if !self.data.contains_key(&u) {
            return Err(TreewidthError::UnknownVertex(u));
        }
        let mut visited = FxHashSet::with_capacity_and_hasher(self.data.len(), Default::default());
        visited.insert(u);
        Ok(HashMapGraphDfs {
            graph: self,
            stack: vec![u],
            visited,
        })
    }

    pub fn is_connected(&self) -> bool {
        match self.data.keys().next() {
            None => true,
            Some(u) => self
                .dfs(*u)
                .map_or(false, |dfs| dfs.count() == self.data.len()),
        }
    }

    /// Vertex sets of the connected components, ordered by their smallest
    /// vertex.
    pub fn connected_components(&self) -> Vec<FxHashSet<usize>> {
        self.separate(&FxHashSet::default())
    }

    /// Components of the graph after removing `separator`.
    pub fn separate(&self, separator: &FxHashSet<usize>) -> Vec<FxHashSet<usize>> {
        let mut components: Vec<FxHashSet<_>> = Vec::with_capacity(2);

        let mut stack: Vec<_> = Vec::with_capacity(self.data.len());
        let mut visited = FxHashSet::with_capacity_and_hasher(self.data.len(), Default::default());
        for u in self.vertices() {
            if separator.contains(&u) || visited.contains(&u) {
                continue;
            }
            stack.push(u);
            visited.insert(u);
            let mut component: FxHashSet<_> = FxHashSet::default();
            component.insert(u);
            while let Some(v) = stack.pop() {
                for x in self.data[&v].iter() {
                    if component.contains(x) || separator.contains(x) {
                        continue;
                    }
                    stack.push(*x);
                    component.insert(*x);
                    visited.insert(*x);
                }
            }
            components.push(component);
        }
        components
    }

    /// Graph on the vertices of `vertex_set` that exist in `self`, with every
    /// edge of `self` whose endpoints both lie in `vertex_set`.
    pub fn induced_subgraph(&self, vertex_set: &FxHashSet<usize>) -> Self {
        let data: FxHashMap<usize, FxHashSet<usize>> = self
            .data
            .iter()
            .filter(|(vertex, _)| vertex_set.contains(vertex))
            .map(|(vertex, neighborhood)| {
                (
                    *vertex,
                    neighborhood
                        .iter()
                        .copied()
                        .filter(|x| vertex_set.contains(x))
                        .collect(),
                )
            })
            .collect();
        Self { data }
    }
}

pub struct HashMapGraphDfs<'a> {
    graph: &'a HashMapGraph,
    stack: Vec<usize>,
    visited: FxHashSet<usize>,
}

impl<'a> Iterator for HashMapGraphDfs<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        for c in self.graph.data[&current].iter().copied() {
            if self.visited.insert(c) {
                self.stack.push(c);
            }
        }
        Some(current)
    }
}

impl MutableGraph for HashMapGraph {
    fn add_vertex(&mut self, u: usize) {
        self.data.entry(u).or_insert_with(FxHashSet::default);
    }

    fn remove_vertex(&mut self, u: usize) {
        if let Some(neighbors) = self.data.remove(&u) {
            for i in neighbors.iter() {
                if let Some(nb) = self.data.get_mut(i) {
                    nb.remove(&u);
                }
            }
        }
    }

    fn add_edge(&mut self, u: usize, v: usize) {
        if u == v {
            return;
        }
        self.data.entry(u).or_insert_with(FxHashSet::default).insert(v);
        self.data.entry(v).or_insert_with(FxHashSet::default).insert(u);
    }

    fn remove_edge(&mut self, u: usize, v: usize) {
        if let Some(x) = self.data.get_mut(&u) {
            x.remove(&v);
        }
        if let Some(x) = self.data.get_mut(&v) {
            x.remove(&u);
        }
    }

    fn eliminate_vertex(&mut self, u: usize) {
        let nb = match self.data.remove(&u) {
            Some(nb) => nb,
            None => return,
        };
        for i in &nb {
            if let Some(x) = self.data.get_mut(i) {
                x.remove(&u);
            }
        }
        for i in &nb {
            for j in &nb {
                if i < j {
                    self.add_edge(*i, *j);
                }
            }
        }
    }

    fn contract(&mut self, u: usize, v: usize) {
        if u == v || !self.data.contains_key(&v) {
            return;
        }
        let nb = match self.data.remove(&u) {
            Some(nb) => nb,
            None => return,
        };
        for vertex in nb {
            if let Some(a) = self.data.get_mut(&vertex) {
                a.remove(&u);
            }
            self.add_edge(vertex, v);
        }
    }

    fn new() -> Self {
        HashMapGraph {
            data: FxHashMap::default(),
        }
    }

    fn with_capacity(capacity: usize) -> Self {
        HashMapGraph {
            data: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }
}

impl BaseGraph for HashMapGraph {
    fn order(&self) -> usize {
        self.data.len()
    }

    fn has_vertex(&self, u: usize) -> bool {
        self.data.contains_key(&u)
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.data.get(&u).map_or(false, |nb| nb.contains(&v))
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        let mut keys: Vec<usize> = self.data.keys().copied().collect();
        keys.sort_unstable();
        Box::new(keys.into_iter())
    }

    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.data.get(&u).into_iter().flat_map(|nb| nb.iter().copied()))
    }

    fn fill_in_count(&self, u: usize) -> usize {
        let nb = match self.data.get(&u) {
            Some(nb) => nb,
            None => return 0,
        };
        let mut count = 0;
        for x in nb {
            for y in nb {
                if x < y && !self.has_edge(*x, *y) {
                    count += 1;
                }
            }
        }
        count
    }
}
