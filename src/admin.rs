//! Admin reporting.
//!
//! Read-side projection over the order and catalog stores, recomputed on
//! every call. Inputs are small and local, so there is no caching or
//! invalidation to manage.

use jiff::Timestamp;
use rustc_hash::FxHashMap;

use crate::{catalog::Product, orders::Order};

/// Products with stock below this count appear in the low-stock report.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Headline sales figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SalesSummary {
    /// Sum of order totals, in minor units.
    pub revenue: u64,
    pub order_count: usize,
    /// Revenue divided by order count; 0 when there are no orders.
    pub average_order_value: u64,
}

/// A customer derived from their orders; not a persisted entity.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSummary {
    pub email: String,
    /// Name from the customer's most recent order.
    pub name: String,
    pub order_count: usize,
    /// Cumulative spend, in minor units.
    pub total_spent: u64,
    pub last_order_at: Timestamp,
}

/// Compute the headline sales figures.
pub fn sales_summary(orders: &[Order]) -> SalesSummary {
    let revenue = orders.iter().map(|order| order.total).sum::<u64>();
    let order_count = orders.len();

    let average_order_value = match u64::try_from(order_count) {
        Ok(0) | Err(_) => 0,
        Ok(count) => revenue / count,
    };

    SalesSummary {
        revenue,
        order_count,
        average_order_value,
    }
}

/// Group orders into per-customer summaries by contact email, most
/// recently active customer first.
pub fn customer_summaries(orders: &[Order]) -> Vec<CustomerSummary> {
    let mut by_email: FxHashMap<&str, CustomerSummary> = FxHashMap::default();

    for order in orders {
        by_email
            .entry(order.contact.email.as_str())
            .and_modify(|customer| {
                customer.order_count += 1;
                customer.total_spent += order.total;

                if order.created_at > customer.last_order_at {
                    customer.last_order_at = order.created_at;
                    customer.name = order.contact.name.clone();
                }
            })
            .or_insert_with(|| CustomerSummary {
                email: order.contact.email.clone(),
                name: order.contact.name.clone(),
                order_count: 1,
                total_spent: order.total,
                last_order_at: order.created_at,
            });
    }

    let mut customers: Vec<_> = by_email.into_values().collect();
    customers.sort_by(|a, b| b.last_order_at.cmp(&a.last_order_at));

    customers
}

/// Products whose stock has fallen below [`LOW_STOCK_THRESHOLD`].
pub fn low_stock(products: &[Product]) -> Vec<&Product> {
    products
        .iter()
        .filter(|product| product.stock < LOW_STOCK_THRESHOLD)
        .collect()
}
