//! Checkout service.
//!
//! Orchestrates one checkout attempt: validate and authorize through the
//! payment gateway, snapshot the cart into an order, persist it, then
//! clear the cart. A declined attempt leaves the cart untouched and may
//! be retried without restriction.

use jiff::Timestamp;
use uuid::Uuid;

use crate::{
    cart::CartStore,
    orders::{ContactInfo, Order, OrderStatus, OrderStore, PaymentMethod},
    storage::StoragePort,
};

use super::{
    errors::CheckoutError,
    gateway::{PaymentGateway, PaymentRequest},
};

/// One checkout attempt's input.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub contact: ContactInfo,
    pub method: PaymentMethod,
    /// Card number, required when paying by card.
    pub card_number: Option<String>,
}

/// Checkout orchestration over an injected payment gateway.
#[derive(Debug, Clone)]
pub struct Checkout<G> {
    gateway: G,
}

impl<G: PaymentGateway> Checkout<G> {
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Run one checkout attempt against the given cart and order stores.
    ///
    /// On success the order (status [`OrderStatus::Paid`]) is appended to
    /// the order store, the cart is cleared, and the order is returned.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] for an empty cart, a
    /// [`CheckoutError::Payment`] when the gateway declines (cart is left
    /// as-is), or a persistence error from the stores.
    pub async fn place_order<CS: StoragePort, OS: StoragePort>(
        &self,
        cart: &mut CartStore<CS>,
        orders: &mut OrderStore<OS>,
        request: CheckoutRequest,
    ) -> Result<Order, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let subtotal = cart.total();

        let receipt = self
            .gateway
            .authorize(&PaymentRequest {
                method: request.method,
                card_number: request.card_number,
                phone: Some(request.contact.phone.clone()),
                amount: subtotal,
            })
            .await?;

        let order = Order {
            id: Uuid::now_v7(),
            reference: receipt.reference,
            items: cart.lines().to_vec(),
            subtotal,
            total: subtotal,
            contact: request.contact,
            method: request.method,
            status: OrderStatus::Paid,
            created_at: Timestamp::now(),
        };

        orders.append(order.clone())?;
        cart.clear()?;

        tracing::info!(
            order = %order.id,
            reference = %order.reference,
            total = order.total,
            "order placed"
        );

        Ok(order)
    }
}
