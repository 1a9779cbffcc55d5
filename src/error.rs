use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreewidthError {
    #[error("vertex {0} is not part of the graph")]
    UnknownVertex(usize),

    /// Raised by the strict heuristic mode when an isolated vertex is selected
    /// while other vertices remain.
    #[error("graph is disconnected: vertex {vertex} is isolated with {remaining} vertices left")]
    DisconnectedGraph { vertex: usize, remaining: usize },

    #[error("graph with {order} vertices exceeds the exact solver limit of {limit}")]
    GraphTooLarge { order: usize, limit: usize },

    #[error("invalid input at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TreewidthError>;
