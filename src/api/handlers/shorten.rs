//! Handler for short link creation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{CreateShortUrlRequest, CreateShortUrlResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_addr::ClientAddr;
use crate::utils::url_normalizer::validate_target;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /create-short-url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "message": "short url created successfully",
///   "short_url": "http://localhost:8080/cWeetHYM"
/// }
/// ```
///
/// The code depends on the URL and on the client's address, so the same
/// client shortening the same URL again gets the same link.
///
/// # Errors
///
/// - 400 if the body is not JSON, lacks `url`, or `url` is blank or malformed
/// - 409 if no collision-free code could be found
/// - 500 if the mapping could not be stored
pub async fn create_short_url_handler(
    State(state): State<AppState>,
    ClientAddr(client_addr): ClientAddr,
    payload: Result<Json<CreateShortUrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateShortUrlResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    validate_target(&payload.url).map_err(|e| {
        AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
    })?;

    let mapping = state
        .shortener
        .create_short_link(&payload.url, &client_addr)
        .await?;

    let short_url = state.shortener.short_url(&mapping.short_code);

    Ok((
        StatusCode::CREATED,
        Json(CreateShortUrlResponse::created(short_url)),
    ))
}
