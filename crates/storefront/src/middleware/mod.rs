//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Request logging (observe every request, start and finish)
//! 2. Session layer (tower-sessions with in-memory store)

pub mod request_log;
pub mod session;

pub use request_log::request_log_middleware;
pub use session::create_session_layer;
