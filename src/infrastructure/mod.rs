//! Infrastructure layer for external integrations.
//!
//! Provides concrete implementations of the storage traits defined by the
//! domain layer.
//!
//! - [`store`] - Redis and in-memory mapping stores

pub mod store;
