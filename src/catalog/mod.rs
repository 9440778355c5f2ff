//! Catalog

pub mod errors;
pub mod fixtures;
pub mod models;
pub mod store;

pub use errors::CatalogError;
pub use models::{ColorVariant, NewProduct, Product, ProductVariant};
pub use store::CatalogStore;
