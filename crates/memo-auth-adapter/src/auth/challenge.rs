/*
[INPUT]:  Wallet address
[OUTPUT]: Challenge text from any challenge-issuing service
[POS]:    Auth layer - capability seam between login flow and services
[UPDATE]: When adding a new challenge-issuing service
*/

use async_trait::async_trait;

use crate::http::{LensClient, MiddlewareClient, Result};
use crate::types::ChallengeService;

/// A service that issues a login challenge bound to an address
#[async_trait]
pub trait ChallengeSource: Send + Sync {
    /// Service label used for output and errors
    fn service(&self) -> ChallengeService;

    /// Fetch the challenge text for `address`
    async fn fetch_challenge(&self, address: &str) -> Result<String>;
}

#[async_trait]
impl ChallengeSource for MiddlewareClient {
    fn service(&self) -> ChallengeService {
        ChallengeService::Middleware
    }

    async fn fetch_challenge(&self, address: &str) -> Result<String> {
        self.challenge(address).await
    }
}

#[async_trait]
impl ChallengeSource for LensClient {
    fn service(&self) -> ChallengeService {
        ChallengeService::Lens
    }

    async fn fetch_challenge(&self, address: &str) -> Result<String> {
        self.challenge(address).await
    }
}
