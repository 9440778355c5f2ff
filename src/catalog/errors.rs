//! Catalog store errors.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors raised by catalog mutations and loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A product with the same slug already exists.
    #[error("product slug already exists")]
    SlugTaken,

    /// No product with the given id.
    #[error("product not found")]
    NotFound,

    /// The embedded seed fixture could not be parsed.
    #[error("seed fixture error")]
    Fixture(#[from] serde_norway::Error),

    /// The persisted catalog could not be serialized.
    #[error("serialization error")]
    Serialize(#[from] serde_json::Error),

    /// Underlying storage failure.
    #[error("storage error")]
    Storage(#[from] StorageError),
}
