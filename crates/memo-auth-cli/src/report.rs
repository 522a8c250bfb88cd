/*
[INPUT]:  Signed challenges or a signed login hash
[OUTPUT]: Text written to stdout
[POS]:    Output layer - report formatting
[UPDATE]: When output labels or layout change
*/

use alloy_primitives::B256;
use memo_auth_adapter::{ChallengeService, SignedChallenge};

fn labels(service: ChallengeService) -> (&'static str, &'static str) {
    match service {
        ChallengeService::Middleware => ("message", "login sig"),
        ChallengeService::Lens => ("Lens message", "lens login sig"),
    }
}

/// One block per challenge, separated by a blank line
pub fn challenge_report(signed: &[SignedChallenge]) -> String {
    signed
        .iter()
        .map(|entry| {
            let (message_label, sig_label) = labels(entry.service);
            format!(
                "{message_label}:\n {}\n{sig_label}:\n {}\n",
                entry.text, entry.signature
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn login_hash_report(hash: &B256, signature: &str) -> String {
    format!("login hash:\n {hash:#x}\nlogin hash sig:\n {signature}\n")
}
