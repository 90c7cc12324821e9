//! Business logic over the product store.

pub mod cart;
pub mod catalog;

pub use cart::CartStore;
pub use catalog::{CatalogService, CatalogSummary};
