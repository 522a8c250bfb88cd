/*
[INPUT]:  Wallet signer and ordered challenge sources
[OUTPUT]: Signed challenges in source order
[POS]:    Auth layer - orchestrates the challenge/sign flow
[UPDATE]: When flow steps or fetch scheduling change
*/

use std::fmt;

use futures_util::future::try_join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::http::{LensClient, MemoAuthError, MiddlewareClient, Result};
use crate::types::{Challenge, SignedChallenge};

use super::{ChallengeSource, EvmWalletSigner, WalletSigner};

/// How challenges are fetched from the configured sources
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    /// One source at a time; the first failure skips the rest
    #[default]
    Sequential,
    /// All sources at once; results keep source order
    Concurrent,
}

/// Runs fetch → sign for each challenge source
pub struct LoginManager {
    sources: Vec<Box<dyn ChallengeSource>>,
    fetch_mode: FetchMode,
}

impl LoginManager {
    /// Create a manager over `sources`, signed and reported in this order
    pub fn new(sources: Vec<Box<dyn ChallengeSource>>) -> Self {
        Self {
            sources,
            fetch_mode: FetchMode::default(),
        }
    }

    /// Middleware then Lens, against their default endpoints
    pub fn with_default_services() -> Result<Self> {
        Ok(Self::new(vec![
            Box::new(MiddlewareClient::new()?),
            Box::new(LensClient::new()?),
        ]))
    }

    pub fn with_fetch_mode(mut self, fetch_mode: FetchMode) -> Self {
        self.fetch_mode = fetch_mode;
        self
    }

    pub fn fetch_mode(&self) -> FetchMode {
        self.fetch_mode
    }

    pub fn services(&self) -> Vec<crate::types::ChallengeService> {
        self.sources.iter().map(|source| source.service()).collect()
    }

    /// Derive the wallet from `private_key` and sign every challenge
    ///
    /// Key parsing happens before any request is built, so an invalid key
    /// never reaches the network.
    pub async fn login_with_private_key(&self, private_key: &str) -> Result<Vec<SignedChallenge>> {
        let wallet = EvmWalletSigner::new(private_key)?;
        info!(address = wallet.address(), "derived wallet address");
        self.sign_challenges(&wallet).await
    }

    /// Fetch and sign a challenge from every source
    ///
    /// 1. Fetch challenge for the wallet address
    /// 2. Sign it with the EIP-191 prefix
    ///
    /// Any error aborts the whole flow; there is no partial result.
    pub async fn sign_challenges(&self, wallet: &dyn WalletSigner) -> Result<Vec<SignedChallenge>> {
        let address = wallet.address();
        let mut signed = Vec::with_capacity(self.sources.len());

        match self.fetch_mode {
            FetchMode::Sequential => {
                for source in &self.sources {
                    let challenge = fetch_challenge(source.as_ref(), address).await?;
                    signed.push(sign_challenge(wallet, challenge).await?);
                }
            }
            FetchMode::Concurrent => {
                let challenges = try_join_all(
                    self.sources
                        .iter()
                        .map(|source| fetch_challenge(source.as_ref(), address)),
                )
                .await?;
                for challenge in challenges {
                    signed.push(sign_challenge(wallet, challenge).await?);
                }
            }
        }

        Ok(signed)
    }
}

impl fmt::Debug for LoginManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginManager")
            .field("services", &self.services())
            .field("fetch_mode", &self.fetch_mode)
            .finish()
    }
}

async fn fetch_challenge(source: &dyn ChallengeSource, address: &str) -> Result<Challenge> {
    let service = source.service();
    debug!(service = %service, address, "fetching challenge");

    let text = source.fetch_challenge(address).await?;
    if text.is_empty() {
        return Err(MemoAuthError::malformed(service, "challenge text is empty"));
    }

    Ok(Challenge::new(service, text))
}

async fn sign_challenge(wallet: &dyn WalletSigner, challenge: Challenge) -> Result<SignedChallenge> {
    let signature = wallet.sign_message(&challenge.text).await?;
    info!(service = %challenge.service, "challenge signed");
    Ok(challenge.into_signed(signature))
}
