//! Order store errors.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors raised by the order store.
#[derive(Debug, Error)]
pub enum OrdersError {
    /// No order with the given id.
    #[error("order not found")]
    NotFound,

    /// The order list could not be serialized.
    #[error("serialization error")]
    Serialize(#[from] serde_json::Error),

    /// Underlying storage failure.
    #[error("storage error")]
    Storage(#[from] StorageError),
}
