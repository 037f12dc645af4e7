//! Storage trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::store`; mock
//! implementations are generated via `mockall` for unit tests.
//!
//! - [`UrlStore`] - Short code → long URL mappings with a global TTL

pub mod url_store;

pub use url_store::{StoreError, StoreResult, UrlStore};

#[cfg(test)]
pub use url_store::MockUrlStore;
