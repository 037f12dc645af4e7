//! Mapping entity from a short code to the URL it stands for.

use crate::utils::code_generator::ShortCode;

/// A live short code → long URL association.
///
/// Mappings are written once per creation request and expire with the
/// store's global TTL. There is no deletion path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub short_code: ShortCode,
    pub long_url: String,
    /// Identity of the client that created the mapping. Only used as
    /// generator input, never persisted.
    pub owner_identity: String,
}

impl UrlMapping {
    /// Creates a new mapping.
    pub fn new(short_code: ShortCode, long_url: String, owner_identity: String) -> Self {
        Self {
            short_code,
            long_url,
            owner_identity,
        }
    }
}
