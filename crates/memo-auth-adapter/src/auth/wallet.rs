/*
[INPUT]:  Challenge text handed over by the login flow
[OUTPUT]: Address and personal-message signature for that text
[POS]:    Auth layer - signing seam between LoginManager and key material
[UPDATE]: When the login flow needs more from a signer than address + signature
*/

use async_trait::async_trait;

use crate::http::Result;

/// Signing half of the challenge/sign flow
///
/// [`LoginManager`](crate::auth::LoginManager) only sees this trait: the
/// address goes to every challenge source, and each challenge text comes
/// back through `sign_message`.
#[async_trait]
pub trait WalletSigner: Send + Sync {
    /// Lowercase `0x` address sent to challenge services
    fn address(&self) -> &str;

    /// EIP-191 signature over `message`, `0x` + 65 bytes of hex
    async fn sign_message(&self, message: &str) -> Result<String>;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Wallet whose signature is `sig(<message>)`; remembers what it signed
    #[derive(Debug)]
    pub(crate) struct RecordingWallet {
        address: String,
        signed: Mutex<Vec<String>>,
    }

    impl RecordingWallet {
        pub(crate) fn new(address: &str) -> Self {
            Self {
                address: address.to_string(),
                signed: Mutex::default(),
            }
        }

        pub(crate) fn signed(&self) -> Vec<String> {
            self.signed.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WalletSigner for RecordingWallet {
        fn address(&self) -> &str {
            &self.address
        }

        async fn sign_message(&self, message: &str) -> Result<String> {
            self.signed.lock().unwrap().push(message.to_string());
            Ok(format!("sig({message})"))
        }
    }

    #[tokio::test]
    async fn test_recording_wallet_tracks_messages() {
        let wallet = RecordingWallet::new("0x2c7536e3605d9c16a7a3d7b1898e529396a65c23");

        assert_eq!(wallet.sign_message("first").await.unwrap(), "sig(first)");
        assert_eq!(wallet.sign_message("second").await.unwrap(), "sig(second)");
        assert_eq!(wallet.signed(), ["first", "second"]);
    }
}
