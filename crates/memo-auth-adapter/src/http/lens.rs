/*
[INPUT]:  Wallet address and Lens API base URL
[OUTPUT]: Challenge text issued by the Lens GraphQL API
[POS]:    HTTP layer - Lens `challenge` query
[UPDATE]: When the Lens challenge schema changes
*/

use crate::http::client::{LENS_BASE_URL, LENS_ORIGIN};
use crate::http::graphql::GraphqlRequest;
use crate::http::{ClientConfig, MemoAuthError, MemoClient, Result};
use crate::types::{ChallengeData, ChallengeService, ChallengeVariables};

pub const CHALLENGE_QUERY: &str = r#"query Challenge($request: ChallengeRequest!) {
  challenge(request: $request) {
    text
  }
}"#;

/// Client for the Lens login challenge
#[derive(Debug)]
pub struct LensClient {
    client: MemoClient,
}

impl LensClient {
    /// Create a client against the public Lens API
    pub fn new() -> Result<Self> {
        Self::with_config_and_base_url(ClientConfig::default(), LENS_BASE_URL, LENS_ORIGIN)
    }

    pub fn with_config_and_base_url(
        config: ClientConfig,
        base_url: &str,
        origin: &str,
    ) -> Result<Self> {
        let client = MemoClient::new(ChallengeService::Lens, base_url, origin, config)?;
        Ok(Self { client })
    }

    pub fn base_url(&self) -> &reqwest::Url {
        self.client.base_url()
    }

    /// Fetch the challenge text for `address`
    ///
    /// POST / `challenge(request: {address})`
    pub async fn challenge(&self, address: &str) -> Result<String> {
        let request = GraphqlRequest::new(CHALLENGE_QUERY, ChallengeVariables::for_address(address))
            .with_operation_name("Challenge");

        let data: ChallengeData = self
            .client
            .send_graphql(self.client.base_url().clone(), &request)
            .await?;

        data.challenge
            .and_then(|challenge| challenge.text)
            .ok_or_else(|| {
                MemoAuthError::malformed(ChallengeService::Lens, "response is missing challenge.text")
            })
    }
}
