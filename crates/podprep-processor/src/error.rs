//! Processor error types.

use thiserror::Error;

use podprep_snapshot::SnapshotError;

/// Coarse category of a [`ProcessorError`], for alerting and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A collaborator outside the pipeline failed.
    Upstream,
    /// The pipeline's own simulation bookkeeping broke.
    Internal,
}

/// Errors that can abort a pod-list processing pass.
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// Failure reported by a collaborator such as the node lister, passed
    /// through as-is.
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),

    #[error("internal error: {0}")]
    Internal(#[source] SnapshotError),
}

impl ProcessorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProcessorError::Upstream(_) => ErrorKind::Upstream,
            ProcessorError::Internal(_) => ErrorKind::Internal,
        }
    }
}

pub type ProcessorResult<T> = Result<T, ProcessorError>;
