//! Order Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::CartLine;

/// How the customer pays at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    MobileMoney,
    /// Manual hand-off over chat, not a real payment.
    Whatsapp,
    CashOnDelivery,
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let label = match self {
            Self::Card => "card",
            Self::MobileMoney => "mobile money",
            Self::Whatsapp => "whatsapp",
            Self::CashOnDelivery => "cash on delivery",
        };

        f.write_str(label)
    }
}

/// Order lifecycle status.
///
/// Orders are created as [`OrderStatus::Paid`]; every later transition is
/// an explicit admin status update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Paid,
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let label = match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        };

        f.write_str(label)
    }
}

/// Contact details captured with an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Order Model
///
/// An immutable snapshot of a cart plus contact and payment details,
/// created once per completed checkout and never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    /// Transaction reference from the payment simulation.
    pub reference: String,
    pub items: Vec<CartLine>,
    pub subtotal: u64,
    pub total: u64,
    pub contact: ContactInfo,
    pub method: PaymentMethod,
    pub status: OrderStatus,
    pub created_at: Timestamp,
}
