//! Orders

pub mod errors;
pub mod models;
pub mod store;

pub use errors::OrdersError;
pub use models::{ContactInfo, Order, OrderStatus, PaymentMethod};
pub use store::OrderStore;
