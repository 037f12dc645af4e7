//! API route configuration.

use crate::api::handlers::{
    create_short_url_handler, health_handler, index_handler, redirect_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `GET  /`                 - Welcome message
/// - `GET  /health`           - Store connectivity check
/// - `POST /create-short-url` - Create a short link
/// - `GET  /{code}`           - Redirect to the stored URL
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/create-short-url", post(create_short_url_handler))
        .route("/{code}", get(redirect_handler))
}
