//! Domain layer containing business entities and storage contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage trait definitions
//!
//! The domain layer has no dependency on infrastructure or presentation.
//! Storage traits are implemented in [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
