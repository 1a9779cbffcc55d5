use std::fmt::Debug;

/// Read-only view on an undirected simple graph whose vertices are `usize`
/// identifiers.
pub trait BaseGraph: Clone + Debug {
    fn order(&self) -> usize;
    fn has_vertex(&self, u: usize) -> bool;
    fn has_edge(&self, u: usize, v: usize) -> bool;

    /// Vertices in ascending order.
    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Neighbors of `u`, empty if `u` is not part of the graph.
    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_>;

    fn is_clique(&self, vertices: &[usize]) -> bool {
        for (i, v) in vertices.iter().enumerate() {
            for u in vertices.iter().skip(i + 1) {
                if !self.has_edge(*u, *v) {
                    return false;
                }
            }
        }
        true
    }

    /// Number of edges that eliminating `u` would add between its neighbors.
    fn fill_in_count(&self, u: usize) -> usize {
        let nb: Vec<usize> = self.neighborhood(u).collect();
        nb.iter()
            .enumerate()
            .map(|(i, x)| nb[i + 1..].iter().filter(|y| !self.has_edge(*x, **y)).count())
            .sum()
    }
}
