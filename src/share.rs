//! WhatsApp order hand-off.
//!
//! Formats the current cart into a pre-filled `wa.me` deep link so the
//! customer can place the order over chat. Nothing is consumed back from
//! the conversation.

use crate::{cart::CartLine, pricing};

/// Build a pre-filled WhatsApp deep link for the given cart.
///
/// `phone` is the shop's number in international format without the
/// leading `+`, as `wa.me` expects.
pub fn whatsapp_order_link(phone: &str, lines: &[CartLine], total: u64) -> String {
    let message = order_message(lines, total);

    format!("https://wa.me/{phone}?text={}", urlencoding::encode(&message))
}

/// The human-readable order summary used as the chat message.
pub fn order_message(lines: &[CartLine], total: u64) -> String {
    let mut message = String::from("Hello Emberwick! I'd like to order:\n");

    for line in lines {
        let mut details = Vec::new();

        if let Some(variant) = &line.variant_label {
            details.push(variant.clone());
        }
        if let Some(color) = &line.color_label {
            details.push(color.clone());
        }
        if let Some(scent) = &line.key.scent {
            details.push(scent.clone());
        }

        message.push_str(&format!("- {} x{}", line.title, line.quantity));

        if !details.is_empty() {
            message.push_str(&format!(" ({})", details.join(", ")));
        }

        message.push('\n');
    }

    message.push_str(&format!("Total: {}", pricing::format_ghs(total)));

    message
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::cart::LineKey;

    use super::*;

    fn line(title: &str, scent: Option<&str>, quantity: u32, unit_price: u64) -> CartLine {
        CartLine {
            key: LineKey {
                product_id: Uuid::now_v7(),
                variant_id: Some("jar".to_string()),
                color_id: None,
                scent: scent.map(ToString::to_string),
            },
            title: title.to_string(),
            variant_label: Some("Classic Jar".to_string()),
            color_label: None,
            image: None,
            unit_price,
            quantity,
        }
    }

    #[test]
    fn message_lists_every_line_with_its_configuration() {
        let lines = [
            line("Amber Glow Candle", Some("Vanilla Ember"), 2, 22_000),
            line("Midnight Reed Diffuser", None, 1, 15_000),
        ];

        let message = order_message(&lines, 59_000);

        assert!(message.contains("Amber Glow Candle x2 (Classic Jar, Vanilla Ember)"));
        assert!(message.contains("Midnight Reed Diffuser x1"));
        assert!(message.contains("Total:"));
    }

    #[test]
    fn link_targets_the_shop_number_and_encodes_the_message() {
        let lines = [line("Amber Glow Candle", None, 1, 22_000)];

        let link = whatsapp_order_link("233201234567", &lines, 22_000);

        assert!(link.starts_with("https://wa.me/233201234567?text="));
        assert!(
            !link.contains(' '),
            "message must be fully percent-encoded"
        );
    }
}
