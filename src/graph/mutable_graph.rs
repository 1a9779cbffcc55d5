use crate::graph::base_graph::BaseGraph;

pub trait MutableGraph: BaseGraph {
    fn add_vertex(&mut self, u: usize);
    fn remove_vertex(&mut self, u: usize);

    /// Inserts the undirected edge `{u, v}`. Self-loops are ignored.
    fn add_edge(&mut self, u: usize, v: usize);
    fn remove_edge(&mut self, u: usize, v: usize);

    /// Removes `u` and turns its former neighborhood into a clique.
    fn eliminate_vertex(&mut self, u: usize);

    /// Merges `u` into `v`, keeping the union of both neighborhoods on `v`.
    fn contract(&mut self, u: usize, v: usize);
    fn new() -> Self;
    fn with_capacity(capacity: usize) -> Self;
    fn make_clique(&mut self, vertices: &[usize]) {
        for (i, v) in vertices.iter().enumerate() {
            for u in vertices.iter().skip(i + 1) {
                self.add_edge(*u, *v);
            }
        }
    }
}
