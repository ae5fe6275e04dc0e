//! Error types for graph construction, traversal and selection

use thiserror::Error;

use crate::graph::{EdgeId, NodeId};

/// Result type for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur when building, traversing or sampling a graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Selection was attempted with no selectable weight remaining
    #[error("selector empty")]
    SelectorEmpty,

    /// Traversal exhausted the reachable component without the node
    /// predicate accepting
    #[error("target not found")]
    TargetNotFound,

    /// Node id exceeds the maximum addressable slot
    #[error("node id out of range: {0}")]
    NodeIdOutOfRange(NodeId),

    /// Edge id exceeds the maximum addressable slot
    #[error("edge id out of range: {0}")]
    EdgeIdOutOfRange(EdgeId),

    /// Attempt to connect an edge that already has both endpoints bound
    #[error("edge already fully connected")]
    AlreadyConnected,
}

impl GraphError {
    /// Check whether the error acts as a stop condition rather than a
    /// caller mistake. Contraction treats a drained selector as normal
    /// loop exit, and traversal misses are an expected query outcome.
    pub fn is_exhaustion(&self) -> bool {
        matches!(self, GraphError::SelectorEmpty | GraphError::TargetNotFound)
    }
}
