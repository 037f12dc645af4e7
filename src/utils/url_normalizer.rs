//! Normalisation of stored redirect targets.
//!
//! Long URLs are stored exactly as submitted. Before redirecting, incidental
//! whitespace is trimmed and a missing scheme defaults to `https://`.

use url::Url;

/// Scheme prepended to targets that do not carry one.
pub const DEFAULT_SCHEME: &str = "https";

/// Errors that can occur while validating a submitted URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),
}

/// Returns the redirect target for a stored long URL.
///
/// # Examples
///
/// ```
/// use url_shortener::utils::url_normalizer::with_scheme;
///
/// assert_eq!(with_scheme("  example.com/a "), "https://example.com/a");
/// assert_eq!(with_scheme("http://example.com"), "http://example.com");
/// ```
pub fn with_scheme(raw: &str) -> String {
    let trimmed = raw.trim();
    if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{}://{}", DEFAULT_SCHEME, trimmed)
    }
}

/// Returns a `Location`-safe redirect target for a stored long URL.
///
/// The stored text is kept verbatim (plus scheme) whenever it is already a
/// valid header value; otherwise it is re-serialised through [`Url`], which
/// percent-encodes what headers cannot carry. `None` if neither works.
pub fn redirect_target(raw: &str) -> Option<String> {
    let target = with_scheme(raw);
    if target.bytes().all(|b| b >= 0x20 && b != 0x7f) {
        return Some(target);
    }

    Url::parse(&target).ok().map(String::from)
}

/// Checks that a submitted URL will produce a usable redirect target.
///
/// The input itself is what gets stored; this only rejects values that
/// would still be malformed after [`with_scheme`].
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Empty`] for blank input and
/// [`UrlNormalizationError::InvalidFormat`] when the target does not parse.
pub fn validate_target(raw: &str) -> Result<(), UrlNormalizationError> {
    if raw.trim().is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let target = with_scheme(raw);
    let url = Url::parse(&target).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    if url.cannot_be_a_base() {
        return Err(UrlNormalizationError::InvalidFormat(
            "URL has no host".to_string(),
        ));
    }

    Ok(())
}

/// `scheme://` prefix with an RFC 3986 scheme name.
fn has_scheme(value: &str) -> bool {
    match value.split_once("://") {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}
