use thiserror::Error;

/// All possible errors in graph generation and traversal
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Node count must be at least 1, got {0}")]
    InvalidNodeCount(usize),

    #[error("Node {0} has an edge to itself")]
    SelfLoop(usize),

    #[error("Node {node} lists neighbor {neighbor} more than once")]
    DuplicateEdge { node: usize, neighbor: usize },

    #[error("Node {0} is listed more than once")]
    DuplicateNode(usize),

    #[error("Invalid traversal kind: {0} (expected `dfs` or `bfs`)")]
    InvalidKind(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, GraphError>;
