//! DTOs for the short link creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Message returned with every successfully created link.
pub const CREATED_MESSAGE: &str = "short url created successfully";

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShortUrlRequest {
    /// The original URL. A missing scheme defaults to `https` on redirect.
    #[validate(length(min = 1, max = 2048, message = "URL must be 1-2048 characters"))]
    pub url: String,
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
pub struct CreateShortUrlResponse {
    pub message: String,
    pub short_url: String,
}

impl CreateShortUrlResponse {
    pub fn created(short_url: String) -> Self {
        Self {
            message: CREATED_MESSAGE.to_string(),
            short_url,
        }
    }
}
