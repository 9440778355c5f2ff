//! `catalog` subcommands.

use std::path::Path;

use clap::{Args, Subcommand};
use emberwick::{catalog::CatalogStore, pricing::format_ghs};
use tabled::{Table, Tabled};

#[derive(Debug, Args)]
pub(crate) struct CatalogCommand {
    #[command(subcommand)]
    command: CatalogSubcommand,
}

#[derive(Debug, Subcommand)]
enum CatalogSubcommand {
    /// List all products
    List,
    /// Show one product in detail
    Show {
        /// Product slug
        slug: String,
    },
}

#[derive(Tabled)]
struct ProductRow {
    slug: String,
    title: String,
    category: String,
    price: String,
    stock: u32,
    featured: bool,
}

pub(crate) fn run(command: CatalogCommand, data_dir: &Path) -> Result<(), String> {
    let storage = super::storage(data_dir)?;
    let catalog = CatalogStore::open(storage)
        .map_err(|error| format!("failed to load catalog: {error}"))?;

    match command.command {
        CatalogSubcommand::List => {
            let rows: Vec<_> = catalog
                .list()
                .iter()
                .map(|product| ProductRow {
                    slug: product.slug.clone(),
                    title: product.title.clone(),
                    category: product.category.clone(),
                    price: format_ghs(product.base_price),
                    stock: product.stock,
                    featured: product.featured,
                })
                .collect();

            println!("{}", Table::new(rows));
        }
        CatalogSubcommand::Show { slug } => {
            // A missing product is an empty state, not an error.
            let Some(product) = catalog.get_by_slug(&slug) else {
                println!("product not found: {slug}");
                return Ok(());
            };

            println!("{} ({})", product.title, product.slug);
            println!("category: {}", product.category);
            println!("base price: {}", format_ghs(product.base_price));
            println!("stock: {}", product.stock);

            for variant in &product.variants {
                println!(
                    "variant {}: {} - {}",
                    variant.id,
                    variant.label,
                    format_ghs(variant.price)
                );
            }

            for color in &product.colors {
                match color.price_delta {
                    Some(delta) => println!(
                        "color {}: {} (+{})",
                        color.id,
                        color.label,
                        format_ghs(delta)
                    ),
                    None => println!("color {}: {}", color.id, color.label),
                }
            }

            if !product.scents.is_empty() {
                println!("scents: {}", product.scents.join(", "));
            }
        }
    }

    Ok(())
}
