//! Error types for cluster snapshot mutations.

use thiserror::Error;

/// Result type alias for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Errors that can occur while mutating a cluster snapshot.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("node not found: {0}")]
    NodeNotFound(String),

    #[error("node already exists: {0}")]
    NodeAlreadyExists(String),

    #[error("pod {pod} already placed on node {node}")]
    PodAlreadyExists { pod: String, node: String },

    #[error("pod not found: {0}")]
    PodNotFound(String),

    #[error("no fork in progress")]
    NoFork,
}
