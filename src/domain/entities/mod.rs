//! Core domain entities.
//!
//! - [`UrlMapping`] - A short code and the long URL it resolves to

pub mod url_mapping;

pub use url_mapping::UrlMapping;
