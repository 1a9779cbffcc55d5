pub mod datastructures;

pub mod error;
pub mod exact;
pub mod graph;
pub mod heuristic_elimination_order;
pub mod io;
#[cfg(feature = "pace-logging")]
pub mod log;
pub mod lowerbound;
pub mod solver;
pub mod tree_decomposition;

pub use error::TreewidthError;

/// Signed so that the empty graph can have width `-1`.
pub type Treewidth = i64;
