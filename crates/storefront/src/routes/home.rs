//! Home page route handler.

use axum::response::Redirect;
use tracing::instrument;

/// Redirect the bare domain to the product listing.
#[instrument]
pub async fn home() -> Redirect {
    Redirect::to("/products")
}
