//! Short code generation and validation utilities.
//!
//! Codes are derived deterministically from the long URL and the caller's
//! identity, so the same client shortening the same URL always gets the same
//! code back while two clients shortening the same URL get different ones.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;

/// Number of characters in every short code.
pub const CODE_LENGTH: usize = 8;

/// Bitcoin base-58 alphabet (no `0`, `O`, `I`, `l`).
pub const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Errors raised while turning a digest into a short code.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CodeGenError {
    #[error("base58 encoding produced {0} characters, at least {CODE_LENGTH} required")]
    EncodingTooShort(usize),
}

/// A validated short code: exactly [`CODE_LENGTH`] base-58 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    /// Parses an untrusted code, e.g. a path segment.
    ///
    /// Returns `None` when the input cannot have been produced by
    /// [`generate_code`].
    pub fn parse(raw: &str) -> Option<Self> {
        let valid = raw.len() == CODE_LENGTH && raw.chars().all(|c| BASE58_ALPHABET.contains(c));
        valid.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Generates the short code for `long_url` submitted by `identity`.
///
/// # Algorithm
///
/// 1. SHA-256 over `long_url` immediately followed by `identity`
/// 2. The digest, read as a big-endian unsigned integer, is reduced to its
///    low-order 64 bits
/// 3. That number is written in base 58 (Bitcoin alphabet)
/// 4. The first [`CODE_LENGTH`] characters are kept
///
/// Truncation throws entropy away, so distinct inputs may collide. Callers
/// that persist codes must decide what to do about it.
///
/// # Errors
///
/// Returns [`CodeGenError::EncodingTooShort`] when the 64-bit value is small
/// enough to encode in fewer than [`CODE_LENGTH`] characters (below `58^7`).
///
/// # Examples
///
/// ```
/// use url_shortener::utils::code_generator::generate_code;
///
/// let code = generate_code(
///     "https://www.youtube.com/@drunkleen/",
///     "d3b07384-fc8c-4a1b-b11c-364a29dd0f45",
/// )
/// .unwrap();
/// assert_eq!(code.as_str(), "cWeetHYM");
/// ```
pub fn generate_code(long_url: &str, identity: &str) -> Result<ShortCode, CodeGenError> {
    let mut hasher = Sha256::new();
    hasher.update(long_url.as_bytes());
    hasher.update(identity.as_bytes());
    let digest = hasher.finalize();

    let mut low = [0u8; 8];
    low.copy_from_slice(&digest[digest.len() - 8..]);
    let number = u64::from_be_bytes(low);

    let encoded = encode_number(number);
    if encoded.len() < CODE_LENGTH {
        return Err(CodeGenError::EncodingTooShort(encoded.len()));
    }

    Ok(ShortCode(encoded[..CODE_LENGTH].to_string()))
}

/// Writes `number` in base 58.
///
/// `bs58` treats every leading zero byte as a literal `1`, so those bytes are
/// dropped first to get the plain positional encoding of the value.
fn encode_number(number: u64) -> String {
    let bytes = number.to_be_bytes();
    let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    bs58::encode(&bytes[first..]).into_string()
}
