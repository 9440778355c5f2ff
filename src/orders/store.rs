//! Order store.
//!
//! Append-only persisted list of orders. Orders are never deleted; the
//! only in-place mutation is an explicit status update.

use std::sync::Arc;

use uuid::Uuid;

use crate::storage::{ORDERS_KEY, StoragePort};

use super::{
    errors::OrdersError,
    models::{Order, OrderStatus},
};

/// Order state container.
#[derive(Debug)]
pub struct OrderStore<S> {
    orders: Vec<Order>,
    storage: Arc<S>,
}

impl<S: StoragePort> OrderStore<S> {
    /// Load the order list from storage, starting empty when nothing is
    /// persisted. A corrupt blob is logged and discarded.
    ///
    /// # Errors
    ///
    /// Returns an [`OrdersError`] when storage cannot be read.
    pub fn open(storage: Arc<S>) -> Result<Self, OrdersError> {
        let orders = match storage.load(ORDERS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|error| {
                tracing::warn!(%error, "discarding corrupt order state");
                Vec::new()
            }),
            None => Vec::new(),
        };

        Ok(Self { orders, storage })
    }

    /// All orders, oldest first.
    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    /// Look up an order by id.
    pub fn get(&self, id: Uuid) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Append a completed order.
    ///
    /// # Errors
    ///
    /// Returns an [`OrdersError`] when the updated list cannot be
    /// persisted.
    pub fn append(&mut self, order: Order) -> Result<(), OrdersError> {
        self.orders.push(order);

        self.persist()
    }

    /// Update an order's status in place.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersError::NotFound`] for an unknown id, or a
    /// storage/serialization error from persisting.
    pub fn update_status(&mut self, id: Uuid, status: OrderStatus) -> Result<(), OrdersError> {
        let order = self
            .orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or(OrdersError::NotFound)?;

        order.status = status;

        self.persist()
    }

    fn persist(&self) -> Result<(), OrdersError> {
        let raw = serde_json::to_string(&self.orders)?;

        self.storage.save(ORDERS_KEY, &raw)?;

        Ok(())
    }
}
