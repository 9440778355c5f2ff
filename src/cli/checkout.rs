//! `checkout` subcommand.

use std::{path::Path, sync::Arc};

use clap::Args;
use emberwick::{
    cart::CartStore,
    checkout::{Checkout, CheckoutRequest, SimulatedGateway},
    orders::{ContactInfo, OrderStore, PaymentMethod},
    pricing::format_ghs,
    share,
};

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Payment method
    #[arg(long, value_enum)]
    method: PaymentMethod,

    /// Customer name
    #[arg(long)]
    name: String,

    /// Customer email
    #[arg(long)]
    email: String,

    /// Customer phone number
    #[arg(long, default_value = "")]
    phone: String,

    /// Delivery address
    #[arg(long)]
    address: String,

    /// Optional delivery note
    #[arg(long)]
    note: Option<String>,

    /// Card number, required when paying by card
    #[arg(long)]
    card_number: Option<String>,

    /// Shop WhatsApp number, used when handing off over chat
    #[arg(long, env = "EMBERWICK_WHATSAPP", default_value = "233200000000")]
    whatsapp_to: String,
}

pub(crate) async fn run(args: CheckoutArgs, data_dir: &Path) -> Result<(), String> {
    let storage = super::storage(data_dir)?;

    let mut cart = CartStore::open(Arc::clone(&storage))
        .map_err(|error| format!("failed to load cart: {error}"))?;
    let mut orders = OrderStore::open(storage)
        .map_err(|error| format!("failed to load orders: {error}"))?;

    let request = CheckoutRequest {
        contact: ContactInfo {
            name: args.name,
            email: args.email,
            phone: args.phone,
            address: args.address,
            note: args.note,
        },
        method: args.method,
        card_number: args.card_number,
    };

    let order = Checkout::new(SimulatedGateway::new())
        .place_order(&mut cart, &mut orders, request)
        .await
        .map_err(|error| error.to_string())?;

    println!("order placed: {}", order.id);
    println!("reference: {}", order.reference);
    println!("total: {}", format_ghs(order.total));

    if order.method == PaymentMethod::Whatsapp {
        println!(
            "finish over chat: {}",
            share::whatsapp_order_link(&args.whatsapp_to, &order.items, order.total)
        );
    }

    Ok(())
}
