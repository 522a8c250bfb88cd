/*
[INPUT]:  Derived wallet address
[OUTPUT]: Serializable request payloads for challenge endpoints
[POS]:    Data layer - type definitions for challenge communication
[UPDATE]: When request schema changes
*/

use serde::{Deserialize, Serialize};

/// `ChallengeRequest` input object of the Lens schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeRequest {
    pub address: String,
}

/// Variables for the Lens `challenge` query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeVariables {
    pub request: ChallengeRequest,
}

impl ChallengeVariables {
    pub fn for_address(address: &str) -> Self {
        Self {
            request: ChallengeRequest {
                address: address.to_string(),
            },
        }
    }
}
