//! Cart store.
//!
//! Injectable container for the cart lines and the drawer-open flag.
//! The invariant this store exists to hold: at most one line per
//! [`LineKey`] at any time. Adding a matching configuration increments
//! the existing line, and reconfiguring a line onto another line's
//! identity merges their quantities. Every mutation persists the whole
//! state synchronously.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    catalog::Product,
    pricing,
    storage::{CART_KEY, StoragePort},
};

use super::{
    errors::CartError,
    models::{CartLine, LineKey, LineUpdate},
};

/// Persisted shape: lines plus the drawer-open presentation flag.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CartState {
    lines: Vec<CartLine>,
    #[serde(default)]
    drawer_open: bool,
}

/// Cart state container.
#[derive(Debug)]
pub struct CartStore<S> {
    state: CartState,
    storage: Arc<S>,
}

impl<S: StoragePort> CartStore<S> {
    /// Load the cart from storage, starting empty when nothing is
    /// persisted. A corrupt blob is logged and discarded.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] when storage cannot be read.
    pub fn open(storage: Arc<S>) -> Result<Self, CartError> {
        let state = match storage.load(CART_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|error| {
                tracing::warn!(%error, "discarding corrupt cart state");
                CartState::default()
            }),
            None => CartState::default(),
        };

        Ok(Self { state, storage })
    }

    /// Add a configured product to the cart.
    ///
    /// If a line with the same composite identity exists its quantity is
    /// incremented by `quantity`; otherwise a new line is inserted with
    /// the unit price resolved from the chosen variant and colour. Also
    /// flags the cart drawer to auto-open. Returns the line's key.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] when the updated state cannot be persisted.
    pub fn add_item(
        &mut self,
        product: &Product,
        variant_id: Option<&str>,
        color_id: Option<&str>,
        scent: Option<&str>,
        quantity: u32,
    ) -> Result<LineKey, CartError> {
        let key = LineKey {
            product_id: product.id,
            variant_id: variant_id.map(ToString::to_string),
            color_id: color_id.map(ToString::to_string),
            scent: scent.map(ToString::to_string),
        };
        let quantity = quantity.max(1);

        if let Some(line) = self.line_mut(&key) {
            line.quantity += quantity;
        } else {
            let variant = variant_id.and_then(|id| product.variant(id));
            let color = color_id.and_then(|id| product.color(id));

            self.state.lines.push(CartLine {
                key: key.clone(),
                title: product.title.clone(),
                variant_label: variant.map(|variant| variant.label.clone()),
                color_label: color.map(|color| color.label.clone()),
                image: color.map(|color| color.image.clone()),
                unit_price: pricing::resolve_unit_price(product, variant_id, color_id),
                quantity,
            });
        }

        self.state.drawer_open = true;
        self.persist()?;

        Ok(key)
    }

    /// Remove the line with the given identity. No-op when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] when the updated state cannot be persisted.
    pub fn remove_item(&mut self, key: &LineKey) -> Result<(), CartError> {
        self.state.lines.retain(|line| line.key != *key);

        self.persist()
    }

    /// Replace a line's quantity. Quantities below 1 are a no-op; the
    /// line is never auto-removed.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] when the updated state cannot be persisted.
    pub fn update_quantity(&mut self, key: &LineKey, quantity: u32) -> Result<(), CartError> {
        if quantity < 1 {
            return Ok(());
        }

        if let Some(line) = self.line_mut(key) {
            line.quantity = quantity;
            self.persist()?;
        }

        Ok(())
    }

    /// Apply a partial configuration change to a line and recompute its
    /// identity.
    ///
    /// When the new identity collides with a different existing line, the
    /// quantities are merged into that surviving line (which keeps its own
    /// snapshot) and the mutated line is discarded. Returns the key the
    /// configuration now lives under, or `None` when no line matched.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] when the updated state cannot be persisted.
    pub fn update_line(
        &mut self,
        key: &LineKey,
        update: LineUpdate,
    ) -> Result<Option<LineKey>, CartError> {
        let Some(position) = self.state.lines.iter().position(|line| line.key == *key) else {
            return Ok(None);
        };

        let mut line = self.state.lines.remove(position);

        if let Some(variant_id) = update.variant_id {
            line.key.variant_id = variant_id;
        }
        if let Some(color_id) = update.color_id {
            line.key.color_id = color_id;
        }
        if let Some(scent) = update.scent {
            line.key.scent = scent;
        }
        if let Some(variant_label) = update.variant_label {
            line.variant_label = variant_label;
        }
        if let Some(color_label) = update.color_label {
            line.color_label = color_label;
        }
        if let Some(unit_price) = update.unit_price {
            line.unit_price = unit_price;
        }

        let new_key = line.key.clone();

        if let Some(survivor) = self.line_mut(&new_key) {
            survivor.quantity += line.quantity;
        } else {
            self.state.lines.insert(position, line);
        }

        self.persist()?;

        Ok(Some(new_key))
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] when the updated state cannot be persisted.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.state.lines.clear();

        self.persist()
    }

    /// Cart total: Σ unit price × quantity over all lines.
    pub fn total(&self) -> u64 {
        self.state.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total number of units across all lines: Σ quantity.
    pub fn item_count(&self) -> u32 {
        self.state.lines.iter().map(|line| line.quantity).sum()
    }

    /// All lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.state.lines
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.state.lines.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.state.lines.is_empty()
    }

    /// Whether the cart drawer should be shown open.
    pub fn drawer_open(&self) -> bool {
        self.state.drawer_open
    }

    /// Persist a new drawer-open state.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] when the updated state cannot be persisted.
    pub fn set_drawer_open(&mut self, open: bool) -> Result<(), CartError> {
        self.state.drawer_open = open;

        self.persist()
    }

    fn line_mut(&mut self, key: &LineKey) -> Option<&mut CartLine> {
        self.state.lines.iter_mut().find(|line| line.key == *key)
    }

    fn persist(&self) -> Result<(), CartError> {
        let raw = serde_json::to_string(&self.state)?;

        self.storage.save(CART_KEY, &raw)?;

        Ok(())
    }
}
