//! Short link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::UrlStore;
use crate::error::AppError;
use crate::utils::code_generator::{ShortCode, generate_code};
use crate::utils::identity::IdentityDeriver;
use serde_json::json;
use tracing::{debug, info, warn};

/// Generation attempts before a creation request gives up on collisions.
const MAX_ATTEMPTS: usize = 3;

/// Service for creating and resolving short links.
///
/// Codes are deterministic per (URL, client identity), so repeating a request
/// returns the same code and refreshes its TTL. When a code is already held by
/// a different URL the identity is salted with the attempt number and the code
/// regenerated.
pub struct ShortenerService {
    store: Arc<dyn UrlStore>,
    identities: IdentityDeriver,
    link_base: String,
}

impl ShortenerService {
    /// Creates a new shortener service.
    ///
    /// - `store` - mapping store shared by all requests
    /// - `identities` - deriver namespaced by the public host
    /// - `link_base` - prefix of every short link, e.g. `http://localhost:8080`
    pub fn new(
        store: Arc<dyn UrlStore>,
        identities: IdentityDeriver,
        link_base: impl Into<String>,
    ) -> Self {
        Self {
            store,
            identities,
            link_base: link_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Creates (or refreshes) the short link for `long_url` requested from
    /// `client_addr`.
    ///
    /// At most one mapping is written per call.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if code generation or the store write
    /// fails, and [`AppError::Conflict`] if every attempt collided with a
    /// different URL.
    pub async fn create_short_link(
        &self,
        long_url: &str,
        client_addr: &str,
    ) -> Result<UrlMapping, AppError> {
        let identity = self.identities.derive(client_addr);
        debug!("Client {} has identity {}", client_addr, identity);

        for attempt in 0..MAX_ATTEMPTS {
            let code = generate_code(long_url, &salted(&identity, attempt))?;

            if self.store.put_if_absent(code.as_str(), long_url).await? {
                info!("Created short link {} -> {}", code, long_url);
                return Ok(UrlMapping::new(code, long_url.to_string(), identity));
            }

            match self.store.get(code.as_str()).await? {
                Some(existing) if existing != long_url => {
                    warn!(
                        "Short code {} already maps to a different URL (attempt {})",
                        code,
                        attempt + 1
                    );
                }
                _ => {
                    self.store.put(code.as_str(), long_url).await?;
                    debug!("Refreshed short link {} -> {}", code, long_url);
                    return Ok(UrlMapping::new(code, long_url.to_string(), identity));
                }
            }
        }

        Err(AppError::conflict(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions", "attempts": MAX_ATTEMPTS }),
        ))
    }

    /// Resolves a short code to the stored long URL.
    ///
    /// Read failures are logged and reported like a miss.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is malformed, unknown,
    /// expired, or the store could not be read.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let not_found = || AppError::not_found("Short link not found", json!({ "code": code }));

        let Some(code) = ShortCode::parse(code) else {
            debug!("Rejected malformed short code {:?}", code);
            return Err(not_found());
        };

        match self.store.get(code.as_str()).await {
            Ok(Some(long_url)) => Ok(long_url),
            Ok(None) => Err(not_found()),
            Err(e) => {
                warn!("Store read failed for {}: {}", code, e);
                Err(not_found())
            }
        }
    }

    /// Full short link for `code`.
    pub fn short_url(&self, code: &ShortCode) -> String {
        format!("{}/{}", self.link_base, code)
    }

    /// Checks if the mapping store is reachable.
    pub async fn store_healthy(&self) -> bool {
        self.store.ping().await
    }
}

/// First attempt uses the bare identity so codes stay stable across versions.
fn salted(identity: &str, attempt: usize) -> String {
    if attempt == 0 {
        identity.to_string()
    } else {
        format!("{}:{}", identity, attempt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockUrlStore, StoreError};
    use mockall::predicate::eq;

    const CLIENT: &str = "192.168.1.1";

    fn service(store: MockUrlStore) -> ShortenerService {
        ShortenerService::new(
            Arc::new(store),
            IdentityDeriver::new("localhost"),
            "http://localhost:8080/",
        )
    }

    fn expected_code(url: &str, attempt: usize) -> String {
        let identity = IdentityDeriver::new("localhost").derive(CLIENT);
        generate_code(url, &salted(&identity, attempt))
            .unwrap()
            .into_string()
    }

    #[tokio::test]
    async fn test_create_writes_new_mapping() {
        let url = "https://example.com";
        let code = expected_code(url, 0);

        let mut store = MockUrlStore::new();
        store
            .expect_put_if_absent()
            .with(eq(code.clone()), eq(url.to_string()))
            .times(1)
            .returning(|_, _| Ok(true));
        store.expect_put().never();

        let mapping = service(store).create_short_link(url, CLIENT).await.unwrap();

        assert_eq!(mapping.short_code.as_str(), code);
        assert_eq!(mapping.long_url, url);
        assert_eq!(
            mapping.owner_identity,
            IdentityDeriver::new("localhost").derive(CLIENT)
        );
    }

    #[tokio::test]
    async fn test_create_same_url_refreshes_ttl() {
        let url = "https://example.com";
        let code = expected_code(url, 0);

        let mut store = MockUrlStore::new();
        store
            .expect_put_if_absent()
            .times(1)
            .returning(|_, _| Ok(false));
        store
            .expect_get()
            .with(eq(code.clone()))
            .returning(|_| Ok(Some("https://example.com".to_string())));
        store
            .expect_put()
            .with(eq(code.clone()), eq(url.to_string()))
            .times(1)
            .returning(|_, _| Ok(()));

        let mapping = service(store).create_short_link(url, CLIENT).await.unwrap();
        assert_eq!(mapping.short_code.as_str(), code);
    }

    #[tokio::test]
    async fn test_create_retries_with_salt_on_collision() {
        let url = "https://example.com";
        let first = expected_code(url, 0);
        let second = expected_code(url, 1);
        assert_ne!(first, second);

        let mut store = MockUrlStore::new();
        store
            .expect_put_if_absent()
            .with(eq(first.clone()), eq(url.to_string()))
            .times(1)
            .returning(|_, _| Ok(false));
        store
            .expect_get()
            .with(eq(first.clone()))
            .returning(|_| Ok(Some("https://other.example".to_string())));
        store
            .expect_put_if_absent()
            .with(eq(second.clone()), eq(url.to_string()))
            .times(1)
            .returning(|_, _| Ok(true));
        store.expect_put().never();

        let mapping = service(store).create_short_link(url, CLIENT).await.unwrap();
        assert_eq!(mapping.short_code.as_str(), second);
    }

    #[tokio::test]
    async fn test_create_gives_up_after_max_attempts() {
        let mut store = MockUrlStore::new();
        store
            .expect_put_if_absent()
            .times(MAX_ATTEMPTS)
            .returning(|_, _| Ok(false));
        store
            .expect_get()
            .times(MAX_ATTEMPTS)
            .returning(|_| Ok(Some("https://other.example".to_string())));
        store.expect_put().never();

        let result = service(store)
            .create_short_link("https://example.com", CLIENT)
            .await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_create_store_failure_is_internal() {
        let mut store = MockUrlStore::new();
        store
            .expect_put_if_absent()
            .returning(|_, _| Err(StoreError::Operation("connection reset".to_string())));

        let result = service(store)
            .create_short_link("https://example.com", CLIENT)
            .await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_create_different_clients_get_different_codes() {
        let mut store = MockUrlStore::new();
        store.expect_put_if_absent().returning(|_, _| Ok(true));
        let service = service(store);

        let a = service
            .create_short_link("https://example.com", "10.0.0.1")
            .await
            .unwrap();
        let b = service
            .create_short_link("https://example.com", "10.0.0.2")
            .await
            .unwrap();

        assert_ne!(a.short_code, b.short_code);
    }

    #[tokio::test]
    async fn test_resolve_found() {
        let mut store = MockUrlStore::new();
        store
            .expect_get()
            .with(eq("cWeetHYM".to_string()))
            .returning(|_| Ok(Some("https://example.com".to_string())));

        let url = service(store).resolve("cWeetHYM").await.unwrap();
        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_missing() {
        let mut store = MockUrlStore::new();
        store.expect_get().returning(|_| Ok(None));

        let result = service(store).resolve("cWeetHYM").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_resolve_read_error_is_not_found() {
        let mut store = MockUrlStore::new();
        store
            .expect_get()
            .returning(|_| Err(StoreError::Timeout(std::time::Duration::from_secs(2))));

        let result = service(store).resolve("cWeetHYM").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_resolve_malformed_code_skips_store() {
        let mut store = MockUrlStore::new();
        store.expect_get().never();

        let result = service(store).resolve("favicon.ico").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[test]
    fn test_short_url() {
        let service = service(MockUrlStore::new());
        let code = ShortCode::parse("cWeetHYM").unwrap();

        assert_eq!(service.short_url(&code), "http://localhost:8080/cWeetHYM");
    }

    #[test]
    fn test_salted_keeps_first_attempt_bare() {
        assert_eq!(salted("id", 0), "id");
        assert_eq!(salted("id", 2), "id:2");
    }
}
