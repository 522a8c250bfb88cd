/*
[INPUT]:  HTTP configuration (base URL, origin, timeouts)
[OUTPUT]: Configured reqwest client bound to one challenge service
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::header::{HeaderValue, ORIGIN};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use tracing::debug;

use crate::http::{MemoAuthError, Result};
use crate::types::ChallengeService;

/// Base URLs and origins of the challenge services
pub const MIDDLEWARE_BASE_URL: &str = "http://localhost:8081";
pub const MIDDLEWARE_ORIGIN: &str = "https://memo.io";
pub const LENS_BASE_URL: &str = "https://api.lens.dev";
pub const LENS_ORIGIN: &str = "memo.io";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for a single challenge-issuing service
///
/// Every request carries the configured `Origin` header. Each service gets
/// its own `reqwest::Client`, so nothing is pooled across services.
#[derive(Debug)]
pub struct MemoClient {
    http_client: Client,
    base_url: Url,
    origin: HeaderValue,
    service: ChallengeService,
}

impl MemoClient {
    /// Create a client for `service` rooted at `base_url`
    pub fn new(
        service: ChallengeService,
        base_url: &str,
        origin: &str,
        config: ClientConfig,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| MemoAuthError::Config(format!("Failed to build HTTP client: {e}")))?;

        let origin = HeaderValue::from_str(origin)
            .map_err(|e| MemoAuthError::Config(format!("Invalid origin header {origin:?}: {e}")))?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            origin,
            service,
        })
    }

    pub fn service(&self) -> ChallengeService {
        self.service
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL with `segment` appended as a path segment
    ///
    /// Any path on the base URL is kept: `http://host/api` + `challenge`
    /// gives `http://host/api/challenge`.
    pub(crate) fn endpoint_url(&self, segment: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                MemoAuthError::Config(format!("Base URL {} cannot take a path", self.base_url))
            })?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    /// Build request builder with the service origin attached
    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http_client
            .request(method, url)
            .header(ORIGIN, self.origin.clone())
    }

    /// Send a request and read the whole body as text
    ///
    /// Transport failures (including body read errors) become
    /// [`MemoAuthError::Network`]; the status is left to the caller.
    pub(crate) async fn send_raw(&self, builder: RequestBuilder) -> Result<(StatusCode, String)> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(
            service = %self.service,
            status = status.as_u16(),
            body_len = body.len(),
            "challenge service responded"
        );

        Ok((status, body))
    }
}
