/*
[INPUT]:  Private key material and challenge sources
[OUTPUT]: Signed challenges, login hashes, and auth errors
[POS]:    Auth layer - identity derivation and challenge signing
[UPDATE]: When auth flow or signature methods change
*/

pub mod challenge;
pub mod evm_wallet;
pub mod login_hash;
pub mod manager;
pub mod wallet;

pub use challenge::ChallengeSource;
pub use evm_wallet::{EvmWalletSigner, eip191_digest};
pub use login_hash::login_hash;
pub use manager::{FetchMode, LoginManager};
pub use wallet::WalletSigner;
