//! Pricing
//!
//! Pure resolver composing a cart line's unit price from the chosen
//! variant and colour/finish. Quantity is applied only when totalling a
//! cart, never stored pre-multiplied on a line.

use rusty_money::{Money, iso};

use crate::catalog::Product;

/// Resolve the unit price for a product configuration, in minor units.
///
/// The price is the chosen variant's absolute price plus the chosen
/// colour/finish surcharge. A product without variants (or an unknown
/// variant id) sells at its base price; an unknown colour id carries no
/// surcharge. Inputs are pre-validated by the selection UI, so neither
/// case is an error here.
pub fn resolve_unit_price(
    product: &Product,
    variant_id: Option<&str>,
    color_id: Option<&str>,
) -> u64 {
    let variant_price = variant_id
        .and_then(|id| product.variant(id))
        .map_or(product.base_price, |variant| variant.price);

    let color_delta = color_id
        .and_then(|id| product.color(id))
        .and_then(|color| color.price_delta)
        .unwrap_or(0);

    variant_price + color_delta
}

/// Total for one cart line: unit price × quantity.
pub fn line_total(unit_price: u64, quantity: u32) -> u64 {
    unit_price * u64::from(quantity)
}

/// Format minor units as GHS for display.
pub fn format_ghs(minor: u64) -> String {
    let amount = i64::try_from(minor).unwrap_or(i64::MAX);

    Money::from_minor(amount, iso::GHS).to_string()
}
