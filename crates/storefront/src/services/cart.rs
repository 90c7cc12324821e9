//! Session-keyed cart storage and the cart mutation entry points.
//!
//! Carts live server-side in a map keyed by a per-session `Uuid`; the
//! session cookie only carries the key. All mutations go through the map's
//! write lock, so same-session read-modify-write (the quantity increment)
//! is serialized rather than racy.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use cartwheel_core::{Cart, ProductId};
use uuid::Uuid;

use crate::store::{ProductStore, StoreError};

/// Server-side carts, keyed by the cart key stored in each session.
#[derive(Debug, Default)]
pub struct CartStore {
    carts: RwLock<HashMap<Uuid, Cart>>,
}

impl CartStore {
    /// Create an empty cart store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the cart for `key`, or an empty cart when none exists yet.
    /// Carts are created lazily on first mutation, so a missing entry and
    /// an empty cart are indistinguishable to callers.
    #[must_use]
    pub fn snapshot(&self, key: Uuid) -> Cart {
        self.carts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
            .unwrap_or_default()
    }

    /// Add one unit of `product_id` to the cart for `key`.
    ///
    /// The product is looked up in `products`: an unknown id is a silent
    /// no-op (the cart is left untouched and nothing is surfaced to the
    /// caller); a known id either increments the existing line or appends a
    /// quantity-1 line.
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] when the product store itself fails.
    pub fn add_item(
        &self,
        key: Uuid,
        products: &dyn ProductStore,
        product_id: ProductId,
    ) -> Result<(), StoreError> {
        let Some(product) = products.find_by_id(product_id)? else {
            tracing::debug!(%product_id, "ignoring add-to-cart for unknown product");
            return Ok(());
        };

        self.carts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_default()
            .add(product);
        Ok(())
    }

    /// Remove every line for `product_id` from the cart for `key`.
    /// No-op when the key or the line is absent.
    pub fn remove_item(&self, key: Uuid, product_id: ProductId) {
        if let Some(cart) = self
            .carts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(&key)
        {
            cart.remove(product_id);
        }
    }

    /// Discard the cart for `key`; the next snapshot is a fresh empty cart.
    pub fn clear(&self, key: Uuid) {
        self.carts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&key);
    }
}
