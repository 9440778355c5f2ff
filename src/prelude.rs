//! Emberwick prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    admin::{CustomerSummary, LOW_STOCK_THRESHOLD, SalesSummary},
    cart::{CartError, CartLine, CartStore, LineKey, LineUpdate},
    catalog::{CatalogError, CatalogStore, ColorVariant, NewProduct, Product, ProductVariant},
    checkout::{
        Checkout, CheckoutError, CheckoutRequest, PaymentError, PaymentGateway, PaymentReceipt,
        PaymentRequest, SimulatedGateway,
    },
    orders::{ContactInfo, Order, OrderStatus, OrderStore, OrdersError, PaymentMethod},
    pricing::{format_ghs, line_total, resolve_unit_price},
    share::{order_message, whatsapp_order_link},
    storage::{JsonFileStorage, MemoryStorage, StorageError, StoragePort},
};
