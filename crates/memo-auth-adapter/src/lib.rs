/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public MEMO auth adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    ChallengeSource,
    EvmWalletSigner,
    FetchMode,
    LoginManager,
    WalletSigner,
    eip191_digest,
    login_hash,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    LensClient,
    MemoAuthError,
    MemoClient,
    MiddlewareClient,
    Result,
};

// Re-export all types
pub use types::*;
