use crate::error::TreewidthError;
use crate::graph::{BaseGraph, HashMapGraph, MutableGraph};
use crate::tree_decomposition::TreeDecomposition;
use std::convert::TryFrom;
use std::io;
use std::io::{BufRead, Write};

fn parse_error(line: usize, reason: &str) -> TreewidthError {
    TreewidthError::Parse {
        line,
        reason: String::from(reason),
    }
}

fn parse_nums(line_number: usize, parts: &[&str]) -> Result<Vec<usize>, TreewidthError> {
    parts
        .iter()
        .map(|s| {
            s.parse::<usize>()
                .map_err(|e| parse_error(line_number, &e.to_string()))
        })
        .collect()
}

/// Reads graphs in the PACE `.gr` format: a `p tw <n> <m>` header, `c`
/// comment lines and one `<u> <v>` line per edge with vertices in `1..=n`.
/// Vertex `i` of the file becomes vertex `i - 1` of the graph.
pub struct PaceReader<T: BufRead>(pub T);

impl<T: BufRead> TryFrom<PaceReader<T>> for HashMapGraph {
    type Error = TreewidthError;

    fn try_from(reader: PaceReader<T>) -> Result<Self, Self::Error> {
        let reader = reader.0;
        let mut graph: Option<HashMapGraph> = None;
        let mut order = 0;
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = idx + 1;
            let parts: Vec<&str> = line.split_whitespace().collect();
            match parts.first() {
                None | Some(&"c") => {}
                Some(&"p") => {
                    if graph.is_some() {
                        return Err(parse_error(line_number, "duplicate header"));
                    }
                    if parts.len() != 4 || parts[1] != "tw" {
                        return Err(parse_error(line_number, "expected 'p tw <n> <m>'"));
                    }
                    let nums = parse_nums(line_number, &parts[2..])?;
                    order = nums[0];
                    let mut new_graph = HashMapGraph::with_capacity(order);
                    (0..order).for_each(|v| new_graph.add_vertex(v));
                    graph = Some(new_graph);
                }
                Some(_) => {
                    let graph = graph
                        .as_mut()
                        .ok_or_else(|| parse_error(line_number, "edge before header"))?;
                    if parts.len() != 2 {
                        return Err(parse_error(line_number, "expected '<u> <v>'"));
                    }
                    let nums = parse_nums(line_number, &parts)?;
                    let (u, v) = (nums[0], nums[1]);
                    if u == 0 || v == 0 || u > order || v > order {
                        return Err(parse_error(line_number, "vertex out of range"));
                    }
                    graph.add_edge(u - 1, v - 1);
                }
            }
        }
        graph.ok_or_else(|| parse_error(0, "missing header"))
    }
}

/// Writes a tree decomposition in the PACE `.td` format, using 1-based bag
/// and vertex ids.
pub struct PaceWriter<'a, W: Write> {
    td: &'a TreeDecomposition,
    graph: &'a HashMapGraph,
    writer: W,
}

impl<'a, W: Write> PaceWriter<'a, W> {
    pub fn new(td: &'a TreeDecomposition, graph: &'a HashMapGraph, writer: W) -> Self {
        Self { td, graph, writer }
    }

    pub fn output(mut self) -> io::Result<()> {
        writeln!(
            self.writer,
            "s td {} {} {}",
            self.td.bags().len(),
            self.td.max_bag_size,
            self.graph.order()
        )?;
        for bag in self.td.bags() {
            let mut vertices: Vec<usize> = bag.vertex_set.iter().map(|v| v + 1).collect();
            vertices.sort_unstable();
            let vertices: Vec<String> = vertices.iter().map(|v| v.to_string()).collect();
            if vertices.is_empty() {
                writeln!(self.writer, "b {}", bag.id + 1)?;
            } else {
                writeln!(self.writer, "b {} {}", bag.id + 1, vertices.join(" "))?;
            }
        }
        for bag in self.td.bags() {
            let mut neighbors: Vec<usize> = bag
                .neighbors
                .iter()
                .copied()
                .filter(|n| bag.id < *n)
                .collect();
            neighbors.sort_unstable();
            for n in neighbors {
                writeln!(self.writer, "{} {}", bag.id + 1, n + 1)?;
            }
        }
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::TreewidthError;
    use crate::graph::{BaseGraph, HashMapGraph};
    use crate::io::{PaceReader, PaceWriter};
    use crate::tree_decomposition::TreeDecomposition;
    use std::convert::TryFrom;
    use std::io::Cursor;

    #[test]
    fn read_graph() {
        let input = "c a path with an isolated vertex\np tw 4 2\n1 2\n2 3\n";
        let graph = HashMapGraph::try_from(PaceReader(Cursor::new(input))).unwrap();
        assert_eq!(graph.order(), 4);
        assert_eq!(graph.edges(), vec![(0, 1), (1, 2)]);
        assert!(graph.has_vertex(3));
    }

    #[test]
    fn reject_malformed_input() {
        for input in &["1 2\n", "p tw 2 1\n1 3\n", "p tw 2 1\n1 x\n", "p td 2 1\n", ""] {
            let result = HashMapGraph::try_from(PaceReader(Cursor::new(*input)));
            assert!(matches!(result, Err(TreewidthError::Parse { .. })), "{}", input);
        }
    }

    #[test]
    fn write_decomposition() {
        let graph = HashMapGraph::from_edges(&[(0, 1), (1, 2)]);
        let mut td = TreeDecomposition::default();
        let a = td.add_bag([1, 0].iter().copied().collect());
        let b = td.add_bag([2, 1].iter().copied().collect());
        td.add_edge(a, b);

        let mut buffer = Vec::new();
        PaceWriter::new(&td, &graph, &mut buffer).output().unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "s td 2 2 3\nb 1 1 2\nb 2 2 3\n1 2\n");
    }
}
