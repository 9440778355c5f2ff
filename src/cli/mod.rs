//! Emberwick CLI definition.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use clap::{Parser, Subcommand};
use emberwick::storage::JsonFileStorage;

mod admin;
mod cart;
mod catalog;
mod checkout;

#[derive(Debug, Parser)]
#[command(name = "emberwick", about = "Emberwick storefront CLI", long_about = None)]
pub(crate) struct Cli {
    /// Directory holding the on-device storefront state
    #[arg(long, env = "EMBERWICK_DATA", default_value = ".emberwick", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Catalog(catalog::CatalogCommand),
    Cart(cart::CartCommand),
    Checkout(checkout::CheckoutArgs),
    Admin(admin::AdminCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Catalog(command) => catalog::run(command, &self.data_dir),
            Commands::Cart(command) => cart::run(command, &self.data_dir),
            Commands::Checkout(args) => checkout::run(args, &self.data_dir).await,
            Commands::Admin(command) => admin::run(command, &self.data_dir),
        }
    }
}

fn storage(data_dir: &Path) -> Result<Arc<JsonFileStorage>, String> {
    JsonFileStorage::open(data_dir)
        .map(Arc::new)
        .map_err(|error| format!("failed to open data directory: {error}"))
}
