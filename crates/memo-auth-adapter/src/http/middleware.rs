/*
[INPUT]:  Wallet address and middleware base URL
[OUTPUT]: Plaintext challenge issued by the MEMO middleware
[POS]:    HTTP layer - middleware challenge endpoint
[UPDATE]: When the middleware challenge endpoint changes
*/

use reqwest::{Method, StatusCode};
use tracing::debug;

use crate::http::client::{MIDDLEWARE_BASE_URL, MIDDLEWARE_ORIGIN};
use crate::http::{ClientConfig, MemoAuthError, MemoClient, Result};
use crate::types::ChallengeService;

/// Client for the MEMO middleware login challenge
#[derive(Debug)]
pub struct MiddlewareClient {
    client: MemoClient,
}

impl MiddlewareClient {
    /// Create a client against the default local middleware
    pub fn new() -> Result<Self> {
        Self::with_config_and_base_url(ClientConfig::default(), MIDDLEWARE_BASE_URL, MIDDLEWARE_ORIGIN)
    }

    pub fn with_config_and_base_url(
        config: ClientConfig,
        base_url: &str,
        origin: &str,
    ) -> Result<Self> {
        let client = MemoClient::new(ChallengeService::Middleware, base_url, origin, config)?;
        Ok(Self { client })
    }

    pub fn base_url(&self) -> &reqwest::Url {
        self.client.base_url()
    }

    /// Fetch the challenge text for `address`
    ///
    /// GET /challenge?address={address}
    ///
    /// The body of a 200 reply is the challenge itself, not JSON.
    pub async fn challenge(&self, address: &str) -> Result<String> {
        let mut url = self.client.endpoint_url("challenge")?;
        url.query_pairs_mut().append_pair("address", address);

        debug!(url = %url, "requesting middleware challenge");
        let builder = self.client.request(Method::GET, url);
        let (status, body) = self.client.send_raw(builder).await?;

        if status != StatusCode::OK {
            return Err(MemoAuthError::status_error(
                ChallengeService::Middleware,
                status,
                body,
            ));
        }

        Ok(body)
    }
}
