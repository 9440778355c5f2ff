//! Checkout

pub mod errors;
pub mod gateway;
pub mod service;

pub use errors::{CheckoutError, PaymentError};
pub use gateway::{PaymentGateway, PaymentReceipt, PaymentRequest, SimulatedGateway};
pub use service::{Checkout, CheckoutRequest};
