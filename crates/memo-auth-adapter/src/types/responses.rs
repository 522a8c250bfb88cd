/*
[INPUT]:  Lens GraphQL `data` payload
[OUTPUT]: Typed challenge response structs
[POS]:    Data layer - type definitions for challenge communication
[UPDATE]: When response schema changes
*/

use serde::{Deserialize, Serialize};

/// `data` object returned by the Lens `challenge` query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeData {
    pub challenge: Option<ChallengeText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeText {
    pub text: Option<String>,
}
