//! Cart

pub mod errors;
pub mod models;
pub mod store;

pub use errors::CartError;
pub use models::{CartLine, LineKey, LineUpdate};
pub use store::CartStore;
