//! Shopping cart model and aggregation rules.
//!
//! A [`Cart`] is an insertion-ordered list of line items, one per distinct
//! product. Adding a product that is already in the cart increments the
//! existing line instead of appending a duplicate. Totals treat an absent
//! product price as zero, never as an error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::money::price_or_zero;
use crate::types::product::Product;

/// One cart line: a product snapshot and how many of it are in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Snapshot of the product as it was when first added.
    pub product: Product,
    /// Units in the cart, always >= 1.
    pub quantity: u32,
}

impl CartItem {
    /// Line total: unit price (zero when absent) times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        price_or_zero(self.product.price) * Decimal::from(self.quantity)
    }
}

/// An insertion-ordered collection of cart lines for one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// True when the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines (not units).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Add one unit of `product`.
    ///
    /// If a line for the same product id already exists its quantity is
    /// incremented in place; otherwise a quantity-1 line is appended,
    /// preserving insertion order.
    pub fn add(&mut self, product: Product) {
        if let Some(item) = self.items.iter_mut().find(|item| item.product.id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem {
                product,
                quantity: 1,
            });
        }
    }

    /// Remove every line for `product_id`. No-op when absent.
    pub fn remove(&mut self, product_id: ProductId) {
        self.items.retain(|item| item.product.id != product_id);
    }

    /// Discard all lines.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Cart total: sum of line totals. Zero for an empty cart, and for any
    /// cart whose products all lack a price.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }
}
