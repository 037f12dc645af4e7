//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use serde_json::json;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_normalizer::redirect_target;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The stored URL is trimmed and given an `https://` scheme if it has none,
/// then returned as a `308 Permanent Redirect`.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown, expired, or the store could
/// not be read.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let long_url = state.shortener.resolve(&code).await?;

    let Some(target) = redirect_target(&long_url) else {
        warn!("Stored URL for {} is not a valid redirect target", code);
        return Err(AppError::not_found(
            "Short link not found",
            json!({ "code": code }),
        ));
    };

    debug!("Redirecting {} -> {}", code, target);
    Ok(Redirect::permanent(&target))
}
