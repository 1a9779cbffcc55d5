use std::convert::TryFrom;
use std::fs::{File, OpenOptions};
use std::io::{stdin, stdout, BufReader, Write};
use std::path::PathBuf;
use structopt::StructOpt;
use treewidth_td::error::TreewidthError;
use treewidth_td::graph::HashMapGraph;
use treewidth_td::heuristic_elimination_order::DisconnectedStrategy;
use treewidth_td::io::{PaceReader, PaceWriter};
use treewidth_td::solver::{HeuristicType, Mode, Solution, Solver};

#[cfg(not(target_env = "msvc"))]
use jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "treewidth-cli",
    about = "Computes the treewidth of a graph, exactly or with a heuristic tree decomposition."
)]
struct Opt {
    /// Input file, using the graph format of the PACE challenge.
    /// `stdin` if not specified.
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,

    /// Output file. `stdout` if not specified.
    #[structopt(parse(from_os_str))]
    output: Option<PathBuf>,

    /// Mode. Heuristic or Exact. Defaults to exact.
    #[structopt(long)]
    heuristic: bool,

    /// Elimination heuristic: min-degree, min-fill, min-fill-degree or all.
    #[structopt(short, long, default_value = "min-fill")]
    strategy: HeuristicType,

    /// Decompose connected components separately instead of rejecting
    /// disconnected graphs.
    #[structopt(short, long)]
    component_wise: bool,

    /// Largest graph the exact mode accepts.
    #[structopt(long, default_value = "20")]
    exact_limit: usize,
}

fn write_solution<W: Write>(
    solution: &Solution,
    graph: &HashMapGraph,
    mut writer: W,
) -> Result<(), TreewidthError> {
    match solution.tree_decomposition.as_ref() {
        Some(td) => PaceWriter::new(td, graph, writer).output()?,
        None => writeln!(writer, "c treewidth {}", solution.width)?,
    }
    Ok(())
}

fn main() -> Result<(), TreewidthError> {
    let opt = Opt::from_args();

    #[cfg(feature = "pace-logging")]
    treewidth_td::log::build_pace_logger();

    let graph: HashMapGraph = match opt.input {
        Some(path) => {
            let file = File::open(path)?;
            HashMapGraph::try_from(PaceReader(BufReader::new(file)))?
        }
        None => {
            let stdin = stdin();
            HashMapGraph::try_from(PaceReader(stdin.lock()))?
        }
    };

    let mode = if opt.heuristic {
        Mode::Heuristic(opt.strategy)
    } else {
        Mode::Exact
    };
    let disconnected = if opt.component_wise {
        DisconnectedStrategy::ComponentWise
    } else {
        DisconnectedStrategy::Strict
    };
    let solution = Solver::default()
        .mode(mode)
        .disconnected(disconnected)
        .exact_limit(Some(opt.exact_limit))
        .solve(&graph)?;

    match opt.output {
        Some(path) => {
            let writer = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)?;
            write_solution(&solution, &graph, writer)
        }
        None => write_solution(&solution, &graph, stdout()),
    }
}
