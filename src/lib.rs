//! Emberwick
//!
//! Storefront core for the Emberwick home-fragrance brand: product
//! catalog, cart with merge-on-collision line identity, simulated
//! checkout, on-device JSON persistence, and a read-side admin
//! projection. The stores are explicit injectable containers over a
//! small key-value [`storage`] port; nothing in here is a singleton.

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod share;
pub mod storage;
