/*
[INPUT]:  EVM private key (hex string)
[OUTPUT]: Derived address and EIP-191 signatures over challenge texts
[POS]:    Auth layer - EVM wallet implementation
[UPDATE]: When signing logic or EVM address formatting changes
*/

use alloy_primitives::{B256, Signature, keccak256};
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;

use crate::auth::WalletSigner;
use crate::http::{MemoAuthError, Result};

const PERSONAL_MESSAGE_PREFIX: &str = "\x19Ethereum Signed Message:\n";

/// EIP-191 personal-message digest of `message`
///
/// `keccak256("\x19Ethereum Signed Message:\n" + len(message) + message)`,
/// where the length is the decimal byte length.
pub fn eip191_digest(message: impl AsRef<[u8]>) -> B256 {
    let message = message.as_ref();
    let prefix = format!("{PERSONAL_MESSAGE_PREFIX}{}", message.len());
    keccak256([prefix.as_bytes(), message].concat())
}

/// `0x` + hex of `r || s || recovery id`, recovery id being 0 or 1
fn encode_signature(signature: &Signature) -> String {
    let mut bytes = signature.as_bytes();
    // as_bytes() writes 27 + parity
    bytes[64] = signature.v() as u8;
    format!("0x{}", hex::encode(bytes))
}

/// Signer for EVM wallets
pub struct EvmWalletSigner {
    signer: PrivateKeySigner,
    address: String,
}

impl EvmWalletSigner {
    /// Create a new EVM wallet signer from a hex-encoded private key
    ///
    /// Supports both "0x"-prefixed and non-prefixed hex strings. The key must
    /// be exactly 32 bytes and a valid non-zero secp256k1 scalar.
    pub fn new(private_key_hex: &str) -> Result<Self> {
        let private_key_hex = private_key_hex.trim();
        let private_key_hex = private_key_hex
            .strip_prefix("0x")
            .or_else(|| private_key_hex.strip_prefix("0X"))
            .unwrap_or(private_key_hex);

        let bytes = hex::decode(private_key_hex)
            .map_err(|e| MemoAuthError::InvalidKey(format!("not a hex string: {e}")))?;
        let bytes: [u8; 32] = bytes.as_slice().try_into().map_err(|_| {
            MemoAuthError::InvalidKey(format!("expected 32 bytes, got {}", bytes.len()))
        })?;

        let signer = PrivateKeySigner::from_bytes(&B256::from(bytes))
            .map_err(|e| MemoAuthError::InvalidKey(format!("not a secp256k1 scalar: {e}")))?;

        let address = format!("{:#x}", signer.address());

        Ok(Self { signer, address })
    }

    /// EIP-55 checksummed form of the address
    pub fn checksum_address(&self) -> String {
        self.signer.address().to_checksum(None)
    }

    /// Sign a 32-byte hash as-is, without the personal-message prefix
    pub async fn sign_hash(&self, hash: &B256) -> Result<String> {
        let signature = self
            .signer
            .sign_hash(hash)
            .await
            .map_err(|e| MemoAuthError::Signing(format!("Failed to sign digest: {e}")))?;

        Ok(encode_signature(&signature))
    }
}

impl std::fmt::Debug for EvmWalletSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvmWalletSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl WalletSigner for EvmWalletSigner {
    fn address(&self) -> &str {
        &self.address
    }

    async fn sign_message(&self, message: &str) -> Result<String> {
        self.sign_hash(&eip191_digest(message)).await
    }
}
