//! Cart Models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pricing;

/// Composite identity of a cart line.
///
/// Two additions configure "the same line" exactly when every component
/// matches. Equality is structural; the identity is deliberately not a
/// formatted string, so ids containing separators cannot collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    pub product_id: Uuid,
    pub variant_id: Option<String>,
    pub color_id: Option<String>,
    pub scent: Option<String>,
}

/// One row in the cart.
///
/// Display fields and the unit price are snapshots captured when the line
/// was added; later catalog edits do not reach into existing carts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub key: LineKey,
    pub title: String,
    pub variant_label: Option<String>,
    pub color_label: Option<String>,
    pub image: Option<String>,
    /// Unit price in minor units, captured at add time.
    pub unit_price: u64,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// This line's contribution to the cart total.
    pub fn line_total(&self) -> u64 {
        pricing::line_total(self.unit_price, self.quantity)
    }
}

/// Partial configuration change for an existing line.
///
/// `None` leaves a component untouched; `Some(None)` clears it. Identity
/// components changed here feed into a recomputed [`LineKey`], which may
/// merge the line into another one.
#[derive(Debug, Clone, Default)]
pub struct LineUpdate {
    pub variant_id: Option<Option<String>>,
    pub color_id: Option<Option<String>>,
    pub scent: Option<Option<String>>,
    pub variant_label: Option<Option<String>>,
    pub color_label: Option<Option<String>>,
    /// Replacement unit price supplied by the caller, typically resolved
    /// against the newly chosen variant/colour.
    pub unit_price: Option<u64>,
}
