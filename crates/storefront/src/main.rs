//! Cartwheel Storefront - Server-rendered catalog and cart demo.
//!
//! # Architecture
//!
//! - Axum web framework with Askama templates for server-side rendering
//! - Products behind the narrow `ProductStore` trait, served here by the
//!   in-memory adapter
//! - Session-backed carts: tower-sessions holds a cart key, the carts live
//!   in a server-side store keyed by it
//! - Request logging middleware observing every request

#![cfg_attr(not(test), forbid(unsafe_code))]

use cartwheel_core::ProductDraft;
use cartwheel_storefront::config::StorefrontConfig;
use cartwheel_storefront::routes;
use cartwheel_storefront::state::AppState;
use cartwheel_storefront::store::{MemoryProductStore, ProductStore, StoreError};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cartwheel_storefront=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Build the product store, optionally seeded with demo data
    let products = MemoryProductStore::new();
    if config.seed_demo_data {
        seed_demo_products(&products).expect("Failed to seed demo products");
        tracing::info!("Seeded demo products");
    }

    // Build application state and router
    let state = AppState::new(config.clone(), Box::new(products));
    let app = routes::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Seed a handful of sample products so the demo has something to show.
fn seed_demo_products(store: &dyn ProductStore) -> Result<(), StoreError> {
    let drafts = [
        ProductDraft {
            name: "Mechanical Keyboard".to_string(),
            price: Some(Decimal::new(8950, 2)),
            quantity: Some(12),
        },
        ProductDraft {
            name: "USB-C Dock".to_string(),
            price: Some(Decimal::new(4999, 2)),
            quantity: Some(30),
        },
        ProductDraft {
            name: "Desk Mat".to_string(),
            price: Some(Decimal::new(1895, 2)),
            quantity: None,
        },
        ProductDraft {
            name: "Sample Sticker Pack".to_string(),
            price: None,
            quantity: Some(200),
        },
    ];

    for draft in drafts {
        store.save(None, draft)?;
    }
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
