//! Catalog orchestration: listing, summary statistics, and CRUD.

use cartwheel_core::{Product, ProductDraft, ProductId, quantity_or_zero};
use rust_decimal::Decimal;

use crate::store::{ProductStore, StoreError};

/// Aggregate statistics over the whole catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSummary {
    /// Number of products in the store.
    pub product_count: usize,
    /// Sum of stock quantities, absent quantities counting as zero.
    pub total_quantity: u64,
    /// Sum of `price * quantity` per product; a product with either field
    /// absent contributes zero.
    pub total_value: Decimal,
}

/// Thin orchestration layer between the routes and the product store.
pub struct CatalogService<'a> {
    store: &'a dyn ProductStore,
}

impl<'a> CatalogService<'a> {
    /// Wrap a product store.
    #[must_use]
    pub const fn new(store: &'a dyn ProductStore) -> Self {
        Self { store }
    }

    /// All products, in store-defined order.
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] from the store.
    pub fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        self.store.find_all()
    }

    /// Look up one product by id.
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] from the store.
    pub fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        self.store.find_by_id(id)
    }

    /// Compute catalog summary statistics.
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] from the store.
    pub fn summarize(&self) -> Result<CatalogSummary, StoreError> {
        let products = self.store.find_all()?;

        let product_count = products.len();
        let total_quantity = products
            .iter()
            .map(|p| u64::from(quantity_or_zero(p.quantity)))
            .sum();
        let total_value = products.iter().map(Product::inventory_value).sum();

        Ok(CatalogSummary {
            product_count,
            total_quantity,
            total_value,
        })
    }

    /// Create a product; the store assigns its id.
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] from the store.
    pub fn create(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        self.store.save(None, draft)
    }

    /// Overwrite the product at `id` with `draft`. The path-supplied id is
    /// the only id in play; a submitted form cannot retarget another record.
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] from the store.
    pub fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Product, StoreError> {
        self.store.save(Some(id), draft)
    }

    /// Delete the product at `id`. No-op when the id does not exist.
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] from the store.
    pub fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        self.store.delete_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryProductStore;

    fn draft(name: &str, price: Option<Decimal>, quantity: Option<u32>) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn test_summary_treats_absent_fields_as_zero() {
        let store = MemoryProductStore::new();
        let catalog = CatalogService::new(&store);

        catalog
            .create(draft("priced", Some(Decimal::new(999, 2)), Some(5)))
            .expect("create");
        catalog
            .create(draft("unpriced", None, Some(2)))
            .expect("create");

        let summary = catalog.summarize().expect("summarize");
        assert_eq!(summary.product_count, 2);
        assert_eq!(summary.total_quantity, 7);
        assert_eq!(summary.total_value, Decimal::new(4995, 2));
    }

    #[test]
    fn test_summary_of_empty_catalog() {
        let store = MemoryProductStore::new();
        let summary = CatalogService::new(&store).summarize().expect("summarize");

        assert_eq!(summary.product_count, 0);
        assert_eq!(summary.total_quantity, 0);
        assert_eq!(summary.total_value, Decimal::ZERO);
    }

    #[test]
    fn test_update_forces_path_id() {
        let store = MemoryProductStore::new();
        let catalog = CatalogService::new(&store);

        let created = catalog
            .create(draft("before", Some(Decimal::new(100, 2)), None))
            .expect("create");

        let updated = catalog
            .update(created.id, draft("after", Some(Decimal::new(200, 2)), Some(1)))
            .expect("update");
        assert_eq!(updated.id, created.id);

        let found = catalog
            .get_by_id(created.id)
            .expect("get")
            .expect("present");
        assert_eq!(found.name, "after");
        assert_eq!(catalog.list_all().expect("list").len(), 1);
    }

    #[test]
    fn test_delete_then_get_is_none() {
        let store = MemoryProductStore::new();
        let catalog = CatalogService::new(&store);

        let created = catalog.create(draft("doomed", None, None)).expect("create");
        catalog.delete(created.id).expect("delete");

        assert!(catalog.get_by_id(created.id).expect("get").is_none());
    }
}
