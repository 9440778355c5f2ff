//! Payment gateway simulation.
//!
//! There is no real payment integration; the gateway validates the
//! method-specific fields, waits a fixed delay standing in for network
//! latency, and hands back a transaction reference.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::orders::PaymentMethod;

use super::errors::PaymentError;

/// Input to one authorization attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    pub method: PaymentMethod,
    pub card_number: Option<String>,
    pub phone: Option<String>,
    /// Amount in minor units.
    pub amount: u64,
}

/// A successful authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    /// Transaction reference recorded on the order.
    pub reference: String,
}

/// Payment authorization seam.
#[automock]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Authorize a payment, returning a transaction reference.
    ///
    /// # Errors
    ///
    /// Returns a [`PaymentError`] when the method's required fields are
    /// missing.
    async fn authorize(&self, request: &PaymentRequest) -> Result<PaymentReceipt, PaymentError>;
}

/// The simulated gateway used by the storefront.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    /// Fixed delay standing in for payment-network latency.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

    /// Gateway with the default simulated latency.
    #[must_use]
    pub fn new() -> Self {
        Self::with_delay(Self::DEFAULT_DELAY)
    }

    /// Gateway with a custom latency; tests use [`Duration::ZERO`].
    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn authorize(&self, request: &PaymentRequest) -> Result<PaymentReceipt, PaymentError> {
        match request.method {
            PaymentMethod::Card => {
                if is_blank(request.card_number.as_deref()) {
                    return Err(PaymentError::InvalidCardDetails);
                }
            }
            PaymentMethod::MobileMoney => {
                if is_blank(request.phone.as_deref()) {
                    return Err(PaymentError::PhoneRequired);
                }
            }
            // A chat hand-off completes immediately, without the simulated
            // network wait.
            PaymentMethod::Whatsapp => return Ok(receipt()),
            // No pre-validation is modelled for pay-on-delivery.
            PaymentMethod::CashOnDelivery => {}
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(receipt())
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|value| value.trim().is_empty())
}

fn receipt() -> PaymentReceipt {
    PaymentReceipt {
        reference: format!("EW-{}", Uuid::now_v7().simple()),
    }
}
