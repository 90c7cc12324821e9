//! Product persistence.
//!
//! The catalog and cart only ever talk to the narrow [`ProductStore`]
//! interface; [`MemoryProductStore`] is the concrete adapter this demo
//! ships with. A database-backed adapter would implement the same trait.

pub mod memory;

pub use memory::MemoryProductStore;

use cartwheel_core::{Product, ProductDraft, ProductId};
use thiserror::Error;

/// Store-level failure. These are fatal to the operation that hit them -
/// there is no retry policy at this layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not serve the request.
    #[error("product store unavailable: {0}")]
    Unavailable(String),
}

/// Narrow persistence interface for products.
///
/// Ordering of `find_all` is store-defined; callers must not re-sort.
pub trait ProductStore: Send + Sync {
    /// All products, in store-defined order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing store cannot serve the read.
    fn find_all(&self) -> Result<Vec<Product>, StoreError>;

    /// Look up one product. `Ok(None)` means the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing store cannot serve the read.
    fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// Persist a product: insert with a fresh id when `id` is `None`,
    /// overwrite the record at `id` otherwise. Returns the stored product.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the write cannot be applied.
    fn save(&self, id: Option<ProductId>, draft: ProductDraft) -> Result<Product, StoreError>;

    /// Delete a product. No-op when the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the write cannot be applied.
    fn delete_by_id(&self, id: ProductId) -> Result<(), StoreError>;
}
