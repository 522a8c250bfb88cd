/*
[INPUT]:  Account address, nonce, and login domain
[OUTPUT]: keccak256 login hash for the experimental login-hash mode
[POS]:    Auth layer - alternate login hash (no challenge fetch)
[UPDATE]: When the login-hash preimage layout is confirmed or changed
*/

use std::str::FromStr;

use alloy_primitives::{Address, B256, keccak256};

use crate::http::{MemoAuthError, Result};

pub const DEFAULT_LOGIN_DOMAIN: &str = "memo.io";

/// `keccak256(address(20 bytes) || nonce bytes || utf8(domain))`
///
/// Address and nonce are hex, `0x` prefix optional.
pub fn login_hash(address: &str, nonce: &str, domain: &str) -> Result<B256> {
    let address = Address::from_str(address.trim())
        .map_err(|e| MemoAuthError::Config(format!("Invalid address {address:?}: {e}")))?;

    let nonce = nonce.trim();
    let nonce_hex = nonce
        .strip_prefix("0x")
        .or_else(|| nonce.strip_prefix("0X"))
        .unwrap_or(nonce);
    if nonce_hex.is_empty() {
        return Err(MemoAuthError::Config("Nonce must not be empty".to_string()));
    }
    let nonce_bytes = hex::decode(nonce_hex)
        .map_err(|e| MemoAuthError::Config(format!("Invalid nonce {nonce:?}: {e}")))?;

    let mut preimage = Vec::with_capacity(20 + nonce_bytes.len() + domain.len());
    preimage.extend_from_slice(address.as_slice());
    preimage.extend_from_slice(&nonce_bytes);
    preimage.extend_from_slice(domain.as_bytes());

    Ok(keccak256(&preimage))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0x2c7536E3605D9C16a7a3D7b1898e529396a65c23";

    #[test]
    fn test_login_hash_preimage_layout() {
        let hash = login_hash(ADDRESS, "0x0102", DEFAULT_LOGIN_DOMAIN).unwrap();

        let mut preimage = hex::decode("2c7536e3605d9c16a7a3d7b1898e529396a65c23").unwrap();
        preimage.extend_from_slice(&[0x01, 0x02]);
        preimage.extend_from_slice(b"memo.io");
        assert_eq!(hash, keccak256(&preimage));
    }

    #[test]
    fn test_login_hash_ignores_address_case_and_prefix() {
        let a = login_hash(ADDRESS, "ab", "memo.io").unwrap();
        let b = login_hash(&ADDRESS[2..].to_ascii_lowercase(), "0xab", "memo.io").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_login_hash_domain_changes_hash() {
        let a = login_hash(ADDRESS, "ab", "memo.io").unwrap();
        let b = login_hash(ADDRESS, "ab", "example.org").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_login_hash_rejects_bad_input() {
        assert!(matches!(
            login_hash("0x1234", "ab", "memo.io"),
            Err(MemoAuthError::Config(_))
        ));
        assert!(matches!(
            login_hash(ADDRESS, "xyz", "memo.io"),
            Err(MemoAuthError::Config(_))
        ));
        assert!(matches!(
            login_hash(ADDRESS, "0x", "memo.io"),
            Err(MemoAuthError::Config(_))
        ));
    }
}
