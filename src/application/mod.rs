//! Application layer services implementing business logic.
//!
//! Services orchestrate the identity deriver, the code generator and the
//! mapping store, and give HTTP handlers a narrow API.
//!
//! - [`services::shortener_service::ShortenerService`] - Short link creation and resolution

pub mod services;
