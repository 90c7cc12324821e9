//! Cart route handlers.
//!
//! The session holds only a `Uuid` cart key; the carts themselves live in
//! the server-side [`crate::services::CartStore`]. Every cart mutation
//! redirects back to `/cart`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::Redirect,
};
use cartwheel_core::{Cart, CartItem, ProductId, format_usd};
use tower_sessions::Session;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::session_keys;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub product_id: i64,
    pub name: String,
    pub price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product.id.as_i64(),
            name: item.product.name.clone(),
            price: item.product.price.map_or_else(|| "-".to_string(), format_usd),
            quantity: item.quantity,
            line_total: format_usd(item.line_total()),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub unit_count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            total: format_usd(cart.total()),
            unit_count: cart.unit_count(),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart key from the session.
async fn get_cart_key(session: &Session) -> Option<Uuid> {
    session
        .get::<Uuid>(session_keys::CART_KEY)
        .await
        .ok()
        .flatten()
}

/// Get the session's cart key, creating and storing one on first use.
async fn ensure_cart_key(session: &Session) -> Result<Uuid> {
    if let Some(key) = get_cart_key(session).await {
        return Ok(key);
    }

    let key = Uuid::new_v4();
    session
        .insert(session_keys::CART_KEY, key)
        .await
        .map_err(|e| AppError::Internal(format!("failed to store cart key in session: {e}")))?;
    Ok(key)
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Display cart contents and total.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> CartShowTemplate {
    let cart = match get_cart_key(&session).await {
        Some(key) => state.carts().snapshot(key),
        None => Cart::new(),
    };

    CartShowTemplate {
        cart: CartView::from(&cart),
    }
}

/// Add one unit of a product to the cart, then redirect to `/cart`.
///
/// An unknown product id leaves the cart untouched; the redirect happens
/// either way.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
) -> Result<Redirect> {
    let key = ensure_cart_key(&session).await?;
    state
        .carts()
        .add_item(key, state.products(), ProductId::new(id))?;

    Ok(Redirect::to("/cart"))
}

/// Remove a product's line from the cart, then redirect to `/cart`.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
) -> Redirect {
    if let Some(key) = get_cart_key(&session).await {
        state.carts().remove_item(key, ProductId::new(id));
    }

    Redirect::to("/cart")
}

/// Empty the cart, then redirect to `/cart`.
#[instrument(skip(state, session))]
pub async fn clear(State(state): State<AppState>, session: Session) -> Redirect {
    if let Some(key) = get_cart_key(&session).await {
        state.carts().clear(key);
    }

    Redirect::to("/cart")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartwheel_core::Product;
    use rust_decimal::Decimal;

    fn product(id: i64, price: Option<Decimal>) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("product-{id}"),
            price,
            quantity: Some(1),
        }
    }

    #[test]
    fn test_cart_view_formats_lines_and_total() {
        let mut cart = Cart::new();
        cart.add(product(1, Some(Decimal::new(999, 2))));
        cart.add(product(1, Some(Decimal::new(999, 2))));
        cart.add(product(2, None));

        let view = CartView::from(&cart);
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].quantity, 2);
        assert_eq!(view.items[0].line_total, "$19.98");
        assert_eq!(view.items[1].price, "-");
        assert_eq!(view.items[1].line_total, "$0.00");
        assert_eq!(view.total, "$19.98");
        assert_eq!(view.unit_count, 3);
    }

    #[test]
    fn test_cart_view_of_empty_cart() {
        let view = CartView::from(&Cart::new());
        assert!(view.items.is_empty());
        assert_eq!(view.total, "$0.00");
        assert_eq!(view.unit_count, 0);
    }
}
