//! Handler for the service root.

use axum::Json;

use crate::api::dto::index::WelcomeResponse;

/// Confirms the API is up.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the URL Shortener API",
    })
}
