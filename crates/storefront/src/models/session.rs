//! Session-related types.

/// Session keys for per-session state.
pub mod keys {
    /// Key for the `Uuid` that identifies this session's cart in the
    /// server-side cart store.
    pub const CART_KEY: &str = "cart_key";
}
