#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;
use url_shortener::application::services::ShortenerService;
use url_shortener::domain::repositories::{StoreError, StoreResult, UrlStore};
use url_shortener::infrastructure::store::MemoryUrlStore;
use url_shortener::state::AppState;
use url_shortener::utils::identity::IdentityDeriver;

pub const PUBLIC_HOST: &str = "localhost";
pub const LINK_BASE: &str = "http://localhost:8080";
pub const DAY: Duration = Duration::from_secs(24 * 60 * 60);

pub fn memory_store(ttl: Duration) -> Arc<MemoryUrlStore> {
    Arc::new(MemoryUrlStore::new(ttl))
}

pub fn create_test_state(store: Arc<dyn UrlStore>) -> AppState {
    let shortener = ShortenerService::new(store, IdentityDeriver::new(PUBLIC_HOST), LINK_BASE);
    AppState::new(Arc::new(shortener))
}

pub fn identity_of(client: &str) -> String {
    IdentityDeriver::new(PUBLIC_HOST).derive(client)
}

/// Store whose backend is permanently unreachable.
pub struct DownStore;

#[async_trait]
impl UrlStore for DownStore {
    async fn put(&self, _short_code: &str, _long_url: &str) -> StoreResult<()> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn put_if_absent(&self, _short_code: &str, _long_url: &str) -> StoreResult<bool> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn get(&self, _short_code: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn ping(&self) -> bool {
        false
    }
}

/// Injects a fixed peer address, standing in for `into_make_service_with_connect_info`.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
