//! Checkout errors.

use thiserror::Error;

use crate::{cart::CartError, orders::OrdersError};

/// Payment validation and authorization failures.
///
/// The messages are surfaced verbatim to the customer; retry is
/// unrestricted and the cart is left untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentError {
    /// Card payment submitted without a card number.
    #[error("invalid card details")]
    InvalidCardDetails,

    /// Mobile-money payment submitted without a phone number.
    #[error("phone number required")]
    PhoneRequired,
}

/// Errors raised by a checkout attempt.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout submitted with an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// The payment simulation declined the attempt.
    #[error(transparent)]
    Payment(#[from] PaymentError),

    /// The cart could not be cleared after the order was placed.
    #[error("cart error")]
    Cart(#[from] CartError),

    /// The order could not be persisted.
    #[error("order error")]
    Orders(#[from] OrdersError),
}
