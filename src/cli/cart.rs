//! `cart` subcommands.

use std::{path::Path, sync::Arc};

use clap::{Args, Subcommand};
use emberwick::{
    cart::{CartStore, LineKey},
    catalog::CatalogStore,
    pricing::format_ghs,
    share,
    storage::JsonFileStorage,
};
use tabled::{Table, Tabled};

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

/// Selector for an existing cart line, mirroring its composite identity.
#[derive(Debug, Args)]
struct LineSelector {
    /// Product slug
    slug: String,

    /// Variant id
    #[arg(long)]
    variant: Option<String>,

    /// Colour/finish id
    #[arg(long)]
    color: Option<String>,

    /// Scent name
    #[arg(long)]
    scent: Option<String>,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Add a configured product to the cart
    Add {
        #[command(flatten)]
        selector: LineSelector,

        /// Number of units to add
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    /// Show the cart lines and total
    Show,
    /// Remove a line from the cart
    Remove {
        #[command(flatten)]
        selector: LineSelector,
    },
    /// Replace a line's quantity
    SetQuantity {
        #[command(flatten)]
        selector: LineSelector,

        /// New quantity (values below 1 leave the line unchanged)
        quantity: u32,
    },
    /// Empty the cart
    Clear,
    /// Print a WhatsApp link that places this order over chat
    Share {
        /// Shop number in international format, without the leading +
        #[arg(long, env = "EMBERWICK_WHATSAPP", default_value = "233200000000")]
        to: String,
    },
}

#[derive(Tabled)]
struct LineRow {
    product: String,
    configuration: String,
    #[tabled(rename = "unit price")]
    unit_price: String,
    quantity: u32,
    total: String,
}

pub(crate) fn run(command: CartCommand, data_dir: &Path) -> Result<(), String> {
    let storage = super::storage(data_dir)?;
    let mut cart = CartStore::open(Arc::clone(&storage))
        .map_err(|error| format!("failed to load cart: {error}"))?;

    match command.command {
        CartSubcommand::Add { selector, quantity } => {
            let catalog = open_catalog(&storage)?;
            let product = catalog
                .get_by_slug(&selector.slug)
                .ok_or_else(|| format!("product not found: {}", selector.slug))?;

            cart.add_item(
                product,
                selector.variant.as_deref(),
                selector.color.as_deref(),
                selector.scent.as_deref(),
                quantity,
            )
            .map_err(|error| format!("failed to update cart: {error}"))?;

            println!(
                "added {} x{} ({} in cart)",
                product.title,
                quantity.max(1),
                cart.item_count()
            );
        }
        CartSubcommand::Show => {
            if cart.is_empty() {
                println!("cart is empty");
                return Ok(());
            }

            let rows: Vec<_> = cart
                .lines()
                .iter()
                .map(|line| {
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

                    LineRow {
                        product: line.title.clone(),
                        configuration: details.join(", "),
                        unit_price: format_ghs(line.unit_price),
                        quantity: line.quantity,
                        total: format_ghs(line.line_total()),
                    }
                })
                .collect();

            println!("{}", Table::new(rows));
            println!("total: {}", format_ghs(cart.total()));
        }
        CartSubcommand::Remove { selector } => {
            let catalog = open_catalog(&storage)?;
            let key = line_key(&catalog, &selector)?;

            cart.remove_item(&key)
                .map_err(|error| format!("failed to update cart: {error}"))?;

            println!("removed; {} item(s) remain", cart.item_count());
        }
        CartSubcommand::SetQuantity { selector, quantity } => {
            let catalog = open_catalog(&storage)?;
            let key = line_key(&catalog, &selector)?;

            cart.update_quantity(&key, quantity)
                .map_err(|error| format!("failed to update cart: {error}"))?;

            println!("{} item(s) in cart", cart.item_count());
        }
        CartSubcommand::Clear => {
            cart.clear()
                .map_err(|error| format!("failed to update cart: {error}"))?;

            println!("cart cleared");
        }
        CartSubcommand::Share { to } => {
            if cart.is_empty() {
                println!("cart is empty");
                return Ok(());
            }

            println!(
                "{}",
                share::whatsapp_order_link(&to, cart.lines(), cart.total())
            );
        }
    }

    Ok(())
}

fn open_catalog(
    storage: &Arc<JsonFileStorage>,
) -> Result<CatalogStore<JsonFileStorage>, String> {
    CatalogStore::open(Arc::clone(storage))
        .map_err(|error| format!("failed to load catalog: {error}"))
}

fn line_key(
    catalog: &CatalogStore<JsonFileStorage>,
    selector: &LineSelector,
) -> Result<LineKey, String> {
    let product = catalog
        .get_by_slug(&selector.slug)
        .ok_or_else(|| format!("product not found: {}", selector.slug))?;

    Ok(LineKey {
        product_id: product.id,
        variant_id: selector.variant.clone(),
        color_id: selector.color.clone(),
        scent: selector.scent.clone(),
    })
}
