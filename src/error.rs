use thiserror::Error;

/// Errors raised while building or querying a graph.
///
/// Failing to reach the goal is not an error, searches report it as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError<N> {
    #[error("Node {0} is not in the graph")]
    NodeNotFound(N),

    #[error("There is no edge between {0} and {1}")]
    EdgeNotFound(N, N),

    #[error("No heuristic estimate from {node} to goal {goal}")]
    MissingHeuristic { node: N, goal: N },

    #[error("Edges can't loop on {0}")]
    SelfLoop(N),

    #[error("Invalid length between {a} and {b}")]
    InvalidLength { a: N, b: N },

    #[error("Invalid estimate from {node} to goal {goal}")]
    InvalidEstimate { node: N, goal: N },
}

/// Result when a graph query or search might fail.
pub type Result<T, N> = std::result::Result<T, SearchError<N>>;
