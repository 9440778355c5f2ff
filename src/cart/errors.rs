//! Cart store errors.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors raised while persisting cart state.
///
/// Cart operations themselves cannot fail; they are in-memory state
/// transitions. Only the synchronous write-back can.
#[derive(Debug, Error)]
pub enum CartError {
    /// The cart state could not be serialized.
    #[error("serialization error")]
    Serialize(#[from] serde_json::Error),

    /// Underlying storage failure.
    #[error("storage error")]
    Storage(#[from] StorageError),
}
