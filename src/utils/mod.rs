//! Utility functions for code generation, identities, and request handling.
//!
//! - [`code_generator`] - Deterministic short code generation and validation
//! - [`identity`] - Pseudo-identities derived from client addresses
//! - [`client_addr`] - Client address extraction from HTTP requests
//! - [`url_normalizer`] - Redirect target normalisation and validation

pub mod client_addr;
pub mod code_generator;
pub mod identity;
pub mod url_normalizer;
