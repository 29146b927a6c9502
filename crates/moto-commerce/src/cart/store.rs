//! Persistent cart store.

use moto_cache::Cache;
use serde::{Deserialize, Serialize};

use crate::cart::CartLine;
use crate::catalog::Product;
use crate::ids::{ProductId, SubscriptionId};
use crate::money::Money;
use crate::observe::Observers;

/// Storage key holding the serialized cart lines.
pub const CART_STORAGE_KEY: &str = "motoparts_cart";

/// What changed in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEvent {
    /// A product was added or its quantity incremented.
    Added(ProductId),
    /// A line's quantity was set.
    QuantityChanged { id: ProductId, quantity: u32 },
    /// A line was removed.
    Removed(ProductId),
    /// Every line was removed.
    Cleared,
    /// The cart panel was shown or hidden.
    VisibilityChanged(bool),
}

/// Cart state handed to listeners after a change.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    pub event: CartEvent,
    pub lines: Vec<CartLine>,
    pub total_items: u64,
    pub total_price: Money,
    pub is_open: bool,
}

/// Derived cart totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub total_items: u64,
    pub total_price: Money,
}

/// Owner of the shopper's cart.
///
/// Every mutation writes the full line list to the cache immediately.
/// Write failures are logged and otherwise ignored; the in-memory lines
/// stay authoritative for the session.
pub struct CartStore {
    lines: Vec<CartLine>,
    is_open: bool,
    cache: Cache,
    key: String,
    observers: Observers<CartSnapshot>,
}

impl CartStore {
    /// Restore the cart from the default storage key.
    pub fn open(cache: Cache) -> Self {
        Self::open_with_key(cache, CART_STORAGE_KEY)
    }

    /// Restore the cart from `key`.
    ///
    /// A missing or malformed payload yields an empty cart.
    pub fn open_with_key(cache: Cache, key: impl Into<String>) -> Self {
        let key = key.into();
        let mut lines: Vec<CartLine> = cache.load_or_default(&key);
        lines.retain(|line| line.quantity > 0);
        tracing::debug!(key = %key, lines = lines.len(), "cart restored");
        Self {
            lines,
            is_open: false,
            cache,
            key,
            observers: Observers::new(),
        }
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line, or appends a new line snapshotting
    /// the product's current fields.
    pub fn add_to_cart(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine::from_product(product));
        }
        tracing::debug!(id = %product.id, "added to cart");
        self.commit(CartEvent::Added(product.id));
    }

    /// Set a line's quantity. Zero or less removes the line.
    ///
    /// Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let Some(line) = self.lines.iter_mut().find(|l| l.id == id) else {
            return;
        };
        line.quantity = quantity;
        tracing::debug!(%id, quantity, "cart quantity updated");
        self.commit(CartEvent::QuantityChanged { id, quantity });
    }

    /// Remove a line. Unknown ids are ignored.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.id != id);
        if self.lines.len() < len_before {
            tracing::debug!(%id, "removed from cart");
            self.commit(CartEvent::Removed(id));
        }
    }

    /// Remove every line.
    pub fn clear_cart(&mut self) {
        self.lines.clear();
        tracing::debug!("cart cleared");
        self.commit(CartEvent::Cleared);
    }

    /// Sum of line quantities.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of snapshotted unit price times quantity.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Both totals.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            total_items: self.total_items(),
            total_price: self.total_price(),
        }
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up a line by product id.
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the cart panel is shown. Never persisted.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Show or hide the cart panel.
    pub fn set_is_open(&mut self, open: bool) {
        if self.is_open == open {
            return;
        }
        self.is_open = open;
        self.notify(CartEvent::VisibilityChanged(open));
    }

    /// Flip the cart panel's visibility.
    pub fn toggle_open(&mut self) {
        self.set_is_open(!self.is_open);
    }

    /// Storage key the lines are written under.
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Register a listener called after each change.
    pub fn subscribe(&mut self, listener: impl Fn(&CartSnapshot) + 'static) -> SubscriptionId {
        self.observers.subscribe(listener)
    }

    /// Remove a listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn commit(&mut self, event: CartEvent) {
        self.persist();
        self.notify(event);
    }

    fn persist(&self) {
        if let Err(e) = self.cache.set(&self.key, &self.lines) {
            tracing::warn!(key = %self.key, error = %e, "failed to persist cart");
        }
    }

    fn notify(&self, event: CartEvent) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = CartSnapshot {
            event,
            lines: self.lines.clone(),
            total_items: self.total_items(),
            total_price: self.total_price(),
            is_open: self.is_open,
        };
        self.observers.notify(&snapshot);
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("lines", &self.lines)
            .field("is_open", &self.is_open)
            .field("key", &self.key)
            .field("observers", &self.observers)
            .finish()
    }
}
