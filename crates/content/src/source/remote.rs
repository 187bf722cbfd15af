//! Content API client.
//!
//! Fetches collections from the GEDUC content API over plain JSON/REST,
//! with a request timeout, retry with linear backoff on transient
//! failures, and a small in-memory response cache (capacity + TTL bounded).

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error, warn};
use url::Url;

use geduc_core::Collection;

use super::{CollectionPayload, ContentSource, FetchError};
use crate::text;

/// Status codes worth retrying: timeouts, throttling, and server errors.
const RETRYABLE_STATUSES: [u16; 6] = [408, 429, 500, 502, 503, 504];

/// Content API configuration.
///
/// Implements `Debug` manually to redact the API token.
#[derive(Clone)]
pub struct ApiConfig {
    /// Base URL of the content API (e.g. `https://api.geduc.org.br/v1`).
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Extra attempts after the first failure.
    pub retries: u32,
    /// Base delay between attempts; grows linearly with the attempt number.
    pub retry_delay: Duration,
    /// Optional bearer token for authenticated deployments.
    pub api_token: Option<SecretString>,
    /// How long cached responses stay fresh.
    pub cache_ttl: Duration,
    /// Maximum number of cached responses.
    pub cache_capacity: u64,
}

impl ApiConfig {
    /// Configuration with the default timeout/retry/cache values.
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(10),
            retries: 3,
            retry_delay: Duration::from_secs(1),
            api_token: None,
            cache_ttl: Duration::from_secs(300),
            cache_capacity: 100,
        }
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("retries", &self.retries)
            .field("retry_delay", &self.retry_delay)
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("cache_ttl", &self.cache_ttl)
            .field("cache_capacity", &self.cache_capacity)
            .finish()
    }
}

/// Content source backed by the real content API.
pub struct RemoteSource {
    client: reqwest::Client,
    config: ApiConfig,
    cache: Cache<Collection, CollectionPayload>,
}

impl RemoteSource {
    /// Create a new API-backed source.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self {
            client,
            config,
            cache,
        })
    }

    /// Drop all cached responses.
    pub async fn invalidate_all(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
    }

    fn endpoint_url(&self, collection: Collection) -> String {
        format!(
            "{}{}",
            self.config.base_url.as_str().trim_end_matches('/'),
            collection.endpoint()
        )
    }

    async fn fetch_cached(&self, collection: Collection) -> Result<CollectionPayload, FetchError> {
        if let Some(hit) = self.cache.get(&collection).await {
            debug!(%collection, "content cache hit");
            return Ok(hit);
        }

        let payload = self.fetch_with_retry(collection).await?;
        self.cache.insert(collection, payload.clone()).await;
        Ok(payload)
    }

    async fn fetch_with_retry(&self, collection: Collection) -> Result<CollectionPayload, FetchError> {
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            match self.fetch_once(collection).await {
                Ok(payload) => return Ok(payload),
                Err(err) if attempt <= self.config.retries && is_retryable(&err) => {
                    warn!(%collection, attempt, error = %err, "retrying content fetch");
                    tokio::time::sleep(self.config.retry_delay * attempt).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn fetch_once(&self, collection: Collection) -> Result<CollectionPayload, FetchError> {
        let url = self.endpoint_url(collection);

        let mut request = self.client.get(&url).header("Accept", "application/json");
        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        // Read the body as text first so decode failures can be diagnosed
        let body = response.text().await?;
        decode_payload(collection, &body).map_err(|err| {
            error!(
                %collection,
                body = %text::truncate(&body, 200),
                "failed to decode content response"
            );
            err
        })
    }
}

#[async_trait]
impl ContentSource for RemoteSource {
    async fn fetch(&self, collection: Collection) -> Result<CollectionPayload, FetchError> {
        self.fetch_cached(collection).await
    }
}

fn decode_payload(collection: Collection, body: &str) -> Result<CollectionPayload, FetchError> {
    let payload = match collection {
        Collection::TeamMembers => CollectionPayload::TeamMembers(serde_json::from_str(body)?),
        Collection::Initiatives => CollectionPayload::Initiatives(serde_json::from_str(body)?),
        Collection::Testimonials => CollectionPayload::Testimonials(serde_json::from_str(body)?),
        Collection::FaqItems => CollectionPayload::FaqItems(serde_json::from_str(body)?),
        Collection::FeaturedMedia => CollectionPayload::FeaturedMedia(serde_json::from_str(body)?),
        Collection::Partners => CollectionPayload::Partners(serde_json::from_str(body)?),
    };
    Ok(payload)
}

fn is_retryable(error: &FetchError) -> bool {
    match error {
        FetchError::Http(err) => err.is_timeout() || err.is_connect(),
        FetchError::Status { status } => RETRYABLE_STATUSES.contains(status),
        FetchError::Decode(_) | FetchError::Simulated => false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> ApiConfig {
        ApiConfig::new(Url::parse("https://api.geduc.org.br/v1").unwrap())
    }

    #[test]
    fn test_endpoint_url_joins_base_and_path() {
        let source = RemoteSource::new(test_config()).unwrap();
        assert_eq!(
            source.endpoint_url(Collection::TeamMembers),
            "https://api.geduc.org.br/v1/team-members"
        );

        // Trailing slash on the base must not double up
        let mut config = test_config();
        config.base_url = Url::parse("https://api.geduc.org.br/v1/").unwrap();
        let source = RemoteSource::new(config).unwrap();
        assert_eq!(
            source.endpoint_url(Collection::FaqItems),
            "https://api.geduc.org.br/v1/faq"
        );
    }

    #[test]
    fn test_retryable_status_classification() {
        for status in RETRYABLE_STATUSES {
            assert!(is_retryable(&FetchError::Status { status }));
        }
        for status in [400, 401, 403, 404, 422] {
            assert!(!is_retryable(&FetchError::Status { status }));
        }
        assert!(!is_retryable(&FetchError::Simulated));
    }

    #[test]
    fn test_decode_payload_rejects_mismatched_shape() {
        let result = decode_payload(Collection::Partners, r#"{"not": "an array"}"#);
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_decode_payload_accepts_entity_arrays() {
        let body = r#"[{
            "id": "partner-1",
            "name": "Fundação Lemann",
            "logo": "https://example.org/logo.svg",
            "category": "nonprofit",
            "featured": true
        }]"#;

        let payload = decode_payload(Collection::Partners, body).unwrap();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload.collection(), Collection::Partners);
    }

    #[test]
    fn test_api_config_debug_redacts_token() {
        let mut config = test_config();
        config.api_token = Some(SecretString::from("super-secret-token"));

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super-secret-token"));
    }
}
