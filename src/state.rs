//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::domain::repositories::UrlStore;
use crate::utils::identity::IdentityDeriver;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
}

impl AppState {
    pub fn new(shortener: Arc<ShortenerService>) -> Self {
        Self { shortener }
    }

    /// Wires the services for `config` on top of an existing store.
    pub fn from_config(config: &Config, store: Arc<dyn UrlStore>) -> Self {
        let shortener = ShortenerService::new(
            store,
            IdentityDeriver::new(&config.host),
            config.short_link_base(),
        );

        Self::new(Arc::new(shortener))
    }
}
