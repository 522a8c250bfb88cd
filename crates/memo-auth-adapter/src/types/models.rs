/*
[INPUT]:  Fetched challenge texts and signatures
[OUTPUT]: Domain models passed from the login flow to output
[POS]:    Data layer - challenge and signature models
[UPDATE]: When the login flow produces new artifacts
*/

use serde::{Deserialize, Serialize};

use super::enums::ChallengeService;

/// Challenge text issued by a service for one address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub service: ChallengeService,
    pub text: String,
}

/// Challenge together with its `0x`-prefixed EIP-191 signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedChallenge {
    pub service: ChallengeService,
    pub text: String,
    pub signature: String,
}

impl Challenge {
    pub fn new(service: ChallengeService, text: impl Into<String>) -> Self {
        Self {
            service,
            text: text.into(),
        }
    }

    pub fn into_signed(self, signature: String) -> SignedChallenge {
        SignedChallenge {
            service: self.service,
            text: self.text,
            signature,
        }
    }
}
