//! On-device persistence port.
//!
//! Every store serializes its whole state to JSON and hands the blob to a
//! [`StoragePort`] under a fixed key. The stores depend only on this trait,
//! never on a concrete backend, so the same state containers run against a
//! data directory, an in-memory map, or a mock.

use mockall::automock;
use thiserror::Error;

mod json_file;
mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

/// Storage key for the persisted cart state (lines + drawer flag).
pub const CART_KEY: &str = "cart";

/// Storage key for the persisted order list.
pub const ORDERS_KEY: &str = "orders";

/// Storage key for device-local catalog edits.
pub const CATALOG_KEY: &str = "catalog";

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure.
    #[error("storage i/o error")]
    Io(#[from] std::io::Error),
}

/// Key-value persistence port.
#[automock]
pub trait StoragePort: Send + Sync {
    /// Load the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Persist `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Absent keys are a no-op.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
