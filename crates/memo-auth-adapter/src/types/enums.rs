/*
[INPUT]:  Service identifiers used across the login flow
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for challenge communication
[UPDATE]: When a new challenge-issuing service is added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Service that issued a challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeService {
    Middleware,
    Lens,
}

impl fmt::Display for ChallengeService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChallengeService::Middleware => f.write_str("middleware"),
            ChallengeService::Lens => f.write_str("lens"),
        }
    }
}
