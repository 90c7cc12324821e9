//! Core type definitions.

pub mod cart;
pub mod id;
pub mod money;
pub mod product;

pub use cart::{Cart, CartItem};
pub use id::ProductId;
pub use money::{format_usd, price_or_zero, quantity_or_zero};
pub use product::{Product, ProductDraft};
