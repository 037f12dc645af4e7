//! # URL Shortener
//!
//! Maps long URLs to short, shareable codes and redirects those codes back to
//! the original URL. Built with Axum and Redis.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and the mapping store trait
//! - **Application Layer** ([`application`]) - Link creation and resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## How codes are made
//!
//! The client's address is turned into a pseudo-identity
//! ([`utils::identity`]); the URL and the identity are hashed and encoded
//! into an 8-character base-58 code ([`utils::code_generator`]). Mappings live
//! in Redis and expire after a single global TTL.
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_HOST="localhost"
//! export CACHE_DURATION="1440"   # minutes
//!
//! cargo run -- --port 8080 --host localhost
//! ```
//!
//! ## Configuration
//!
//! Flags override environment variables, which override defaults. See
//! [`config`] for the full list.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod cli;
pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::entities::UrlMapping;
    pub use crate::domain::repositories::{StoreError, UrlStore};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryUrlStore, RedisUrlStore};
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::{ShortCode, generate_code};
    pub use crate::utils::identity::IdentityDeriver;
}
