//! In-memory product store adapter.

use std::collections::BTreeMap;
use std::sync::RwLock;

use cartwheel_core::{Product, ProductDraft, ProductId};

use super::{ProductStore, StoreError};

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<ProductId, Product>,
}

/// Map-backed [`ProductStore`].
///
/// Ids are assigned from a monotonically increasing counter starting at 1.
/// `find_all` iterates the `BTreeMap`, so the store-defined order is id
/// order. Reads and writes go through one `RwLock`, which gives the store
/// its own consistency for concurrent requests.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    inner: RwLock<Inner>,
}

impl MemoryProductStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// A poisoned lock means a writer panicked mid-update; surface it as the
/// store being unavailable rather than panicking the handler.
fn poisoned() -> StoreError {
    StoreError::Unavailable("poisoned lock".to_string())
}

impl ProductStore for MemoryProductStore {
    fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner.rows.values().cloned().collect())
    }

    fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner.rows.get(&id).cloned())
    }

    fn save(&self, id: Option<ProductId>, draft: ProductDraft) -> Result<Product, StoreError> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        let id = match id {
            Some(id) => {
                // Keep the counter ahead of explicitly targeted ids so a
                // later insert cannot collide.
                inner.next_id = inner.next_id.max(id.as_i64());
                id
            }
            None => {
                inner.next_id += 1;
                ProductId::new(inner.next_id)
            }
        };
        let product = draft.into_product(id);
        inner.rows.insert(id, product.clone());
        Ok(product)
    }

    fn delete_by_id(&self, id: ProductId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        inner.rows.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price: Some(Decimal::new(999, 2)),
            quantity: Some(5),
        }
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let store = MemoryProductStore::new();
        let a = store.save(None, draft("a")).expect("save");
        let b = store.save(None, draft("b")).expect("save");

        assert_eq!(a.id, ProductId::new(1));
        assert_eq!(b.id, ProductId::new(2));
    }

    #[test]
    fn test_find_all_in_id_order() {
        let store = MemoryProductStore::new();
        store.save(Some(ProductId::new(3)), draft("c")).expect("save");
        store.save(Some(ProductId::new(1)), draft("a")).expect("save");
        store.save(Some(ProductId::new(2)), draft("b")).expect("save");

        let names: Vec<String> = store
            .find_all()
            .expect("find_all")
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_save_with_id_overwrites() {
        let store = MemoryProductStore::new();
        let original = store.save(None, draft("before")).expect("save");

        let updated = store
            .save(Some(original.id), draft("after"))
            .expect("save");
        assert_eq!(updated.id, original.id);

        let found = store.find_by_id(original.id).expect("find").expect("row");
        assert_eq!(found.name, "after");
        assert_eq!(store.find_all().expect("find_all").len(), 1);
    }

    #[test]
    fn test_counter_stays_ahead_of_explicit_ids() {
        let store = MemoryProductStore::new();
        store.save(Some(ProductId::new(10)), draft("ten")).expect("save");

        let next = store.save(None, draft("next")).expect("save");
        assert_eq!(next.id, ProductId::new(11));
    }

    #[test]
    fn test_find_missing_is_none() {
        let store = MemoryProductStore::new();
        assert!(store.find_by_id(ProductId::new(42)).expect("find").is_none());
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let store = MemoryProductStore::new();
        store.save(None, draft("a")).expect("save");

        store.delete_by_id(ProductId::new(42)).expect("delete");
        assert_eq!(store.find_all().expect("find_all").len(), 1);

        store.delete_by_id(ProductId::new(1)).expect("delete");
        assert!(store.find_all().expect("find_all").is_empty());
    }
}
