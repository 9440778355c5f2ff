//! `admin` subcommands.

use std::{path::Path, sync::Arc};

use clap::{Args, Subcommand};
use emberwick::{
    admin,
    catalog::CatalogStore,
    orders::{OrderStatus, OrderStore},
    pricing::format_ghs,
};
use tabled::{Table, Tabled};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct AdminCommand {
    #[command(subcommand)]
    command: AdminSubcommand,
}

#[derive(Debug, Subcommand)]
enum AdminSubcommand {
    /// Sales, customer and stock overview
    Report,
    /// List all orders
    Orders,
    /// Update an order's status
    SetStatus {
        /// Order id
        order: Uuid,

        /// New status
        #[arg(value_enum)]
        status: OrderStatus,
    },
}

#[derive(Tabled)]
struct OrderRow {
    id: String,
    reference: String,
    customer: String,
    method: String,
    status: String,
    total: String,
}

#[derive(Tabled)]
struct CustomerRow {
    email: String,
    name: String,
    orders: usize,
    spent: String,
}

#[derive(Tabled)]
struct StockRow {
    slug: String,
    title: String,
    stock: u32,
}

pub(crate) fn run(command: AdminCommand, data_dir: &Path) -> Result<(), String> {
    let storage = super::storage(data_dir)?;

    let mut orders = OrderStore::open(Arc::clone(&storage))
        .map_err(|error| format!("failed to load orders: {error}"))?;

    match command.command {
        AdminSubcommand::Report => {
            let catalog = CatalogStore::open(storage)
                .map_err(|error| format!("failed to load catalog: {error}"))?;

            let summary = admin::sales_summary(orders.list());

            println!("revenue: {}", format_ghs(summary.revenue));
            println!("orders: {}", summary.order_count);
            println!(
                "average order value: {}",
                format_ghs(summary.average_order_value)
            );

            let customers: Vec<_> = admin::customer_summaries(orders.list())
                .into_iter()
                .map(|customer| CustomerRow {
                    email: customer.email,
                    name: customer.name,
                    orders: customer.order_count,
                    spent: format_ghs(customer.total_spent),
                })
                .collect();

            if !customers.is_empty() {
                println!("\ncustomers:\n{}", Table::new(customers));
            }

            let low_stock: Vec<_> = admin::low_stock(catalog.list())
                .into_iter()
                .map(|product| StockRow {
                    slug: product.slug.clone(),
                    title: product.title.clone(),
                    stock: product.stock,
                })
                .collect();

            if !low_stock.is_empty() {
                println!("\nlow stock:\n{}", Table::new(low_stock));
            }
        }
        AdminSubcommand::Orders => {
            let rows: Vec<_> = orders
                .list()
                .iter()
                .map(|order| OrderRow {
                    id: order.id.to_string(),
                    reference: order.reference.clone(),
                    customer: order.contact.email.clone(),
                    method: order.method.to_string(),
                    status: order.status.to_string(),
                    total: format_ghs(order.total),
                })
                .collect();

            if rows.is_empty() {
                println!("no orders yet");
            } else {
                println!("{}", Table::new(rows));
            }
        }
        AdminSubcommand::SetStatus { order, status } => {
            orders
                .update_status(order, status)
                .map_err(|error| format!("failed to update order: {error}"))?;

            println!("order {order} is now {status}");
        }
    }

    Ok(())
}
