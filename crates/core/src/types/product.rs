//! Catalog product model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::money::{price_or_zero, quantity_or_zero};

/// A catalog entry.
///
/// `price` and `quantity` are optional on purpose: the catalog accepts
/// partially filled-in products, and every aggregation treats the absent
/// value as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier, immutable after creation.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price, absent when not yet priced.
    pub price: Option<Decimal>,
    /// Stock on hand, absent when not yet counted.
    pub quantity: Option<u32>,
}

impl Product {
    /// Value of the stock on hand (`price * quantity`).
    ///
    /// Contributes zero when either field is absent - no partial credit.
    #[must_use]
    pub fn inventory_value(&self) -> Decimal {
        match (self.price, self.quantity) {
            (Some(price), Some(quantity)) => price * Decimal::from(quantity),
            _ => Decimal::ZERO,
        }
    }
}

/// Unsaved product fields. The store assigns the identifier on save.
///
/// Carrying no identifier at all is what makes "the path id always wins"
/// hold for updates: a form submission cannot retarget another record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: Option<Decimal>,
    pub quantity: Option<u32>,
}

impl ProductDraft {
    /// Attach a store-assigned identifier, producing a saved [`Product`].
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: Option<Decimal>, quantity: Option<u32>) -> Product {
        Product {
            id: ProductId::new(1),
            name: "widget".to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn test_inventory_value_requires_both_fields() {
        let full = product(Some(Decimal::new(999, 2)), Some(5));
        assert_eq!(full.inventory_value(), Decimal::new(4995, 2));

        assert_eq!(product(None, Some(5)).inventory_value(), Decimal::ZERO);
        assert_eq!(
            product(Some(Decimal::new(999, 2)), None).inventory_value(),
            Decimal::ZERO
        );
        assert_eq!(product(None, None).inventory_value(), Decimal::ZERO);
    }

    #[test]
    fn test_draft_into_product() {
        let draft = ProductDraft {
            name: "widget".to_string(),
            price: Some(Decimal::new(100, 2)),
            quantity: None,
        };
        let saved = draft.into_product(ProductId::new(7));
        assert_eq!(saved.id, ProductId::new(7));
        assert_eq!(saved.name, "widget");
        assert_eq!(saved.price, Some(Decimal::new(100, 2)));
        assert_eq!(saved.quantity, None);
    }

    #[test]
    fn test_reducers_cover_absent_fields() {
        let p = product(None, None);
        assert_eq!(price_or_zero(p.price), Decimal::ZERO);
        assert_eq!(quantity_or_zero(p.quantity), 0);
    }
}
