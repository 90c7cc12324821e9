//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Redirect to /products
//! GET  /health                  - Health check
//!
//! # Products
//! GET  /products                - Product listing
//! GET  /products/summary        - Catalog summary statistics
//! GET  /products/new            - Blank create form
//! POST /products                - Create product from submitted fields
//! GET  /products/edit/{id}      - Edit form, or redirect when id absent
//! POST /products/update/{id}    - Update product, id forced from path
//! GET  /products/delete/{id}    - Delete product, redirect to listing
//! GET  /products/{id}           - Product detail, or redirect when id absent
//!
//! # Cart
//! GET  /cart                    - Cart contents and total
//! GET  /cart/add/{id}           - Add to cart, redirect to /cart
//! GET  /cart/remove/{id}        - Remove from cart, redirect to /cart
//! GET  /cart/clear              - Empty the cart, redirect to /cart
//! ```

pub mod cart;
pub mod home;
pub mod products;

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};

use crate::middleware::{create_session_layer, request_log_middleware};
use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/summary", get(products::summary))
        .route("/new", get(products::new_form))
        .route("/edit/{id}", get(products::edit_form))
        .route("/update/{id}", post(products::update))
        .route("/delete/{id}", get(products::delete))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add/{id}", get(cart::add))
        .route("/remove/{id}", get(cart::remove))
        .route("/clear", get(cart::clear))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home redirect
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Build the full application router: routes, session layer, request
/// logging (outermost, so it observes every request).
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .layer(create_session_layer())
        .layer(from_fn(request_log_middleware))
        .with_state(state)
}
