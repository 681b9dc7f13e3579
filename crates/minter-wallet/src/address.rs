use minter_crypto::hash::{keccak256, sha256};
use minter_util::prefix;

use crate::error::WalletError;

/// Formats an uncompressed public key (X ‖ Y) as `Mp` + 128 hex chars.
pub fn format_public_key(xy: &[u8; 64]) -> String {
    format!("{}{}", prefix::PUBLIC_KEY, hex::encode(xy))
}

/// Parses an `Mp`-prefixed wallet public key into its 64 raw bytes.
pub fn parse_public_key(public_key: &str) -> Result<[u8; 64], WalletError> {
    let hex_part = prefix::require(public_key, prefix::PUBLIC_KEY)?;
    let bytes = hex::decode(hex_part)
        .map_err(|e| WalletError::InvalidPublicKey(format!("invalid hex: {e}")))?;
    bytes
        .try_into()
        .map_err(|_| WalletError::InvalidPublicKey("expected 64 bytes of X and Y".into()))
}

/// Derives the wallet address from raw public-key bytes: the last 20 bytes
/// of Keccak-256(X ‖ Y), formatted as `Mx` + lower-case hex.
pub fn address_from_key_bytes(xy: &[u8; 64]) -> String {
    let digest = keccak256(xy);
    format!("{}{}", prefix::ADDRESS, hex::encode(&digest[12..]))
}

/// Derives the wallet address from an `Mp`-prefixed public key.
pub fn address_from_public_key(public_key: &str) -> Result<String, WalletError> {
    let xy = parse_public_key(public_key)?;
    Ok(address_from_key_bytes(&xy))
}

/// Parses an `Mx`-prefixed address into its 20 raw bytes.
pub fn parse_address(address: &str) -> Result<[u8; 20], WalletError> {
    let hex_part = prefix::require(address, prefix::ADDRESS)?;
    if hex_part.len() != 40 {
        return Err(WalletError::InvalidAddress(format!(
            "expected 40 hex characters, got {}",
            hex_part.len()
        )));
    }
    let bytes = hex::decode(hex_part)
        .map_err(|e| WalletError::InvalidAddress(format!("invalid hex: {e}")))?;

    let mut addr = [0u8; 20];
    addr.copy_from_slice(&bytes);
    Ok(addr)
}

/// Formats 20 raw address bytes as `Mx` + lower-case hex.
pub fn format_address(addr: &[u8; 20]) -> String {
    format!("{}{}", prefix::ADDRESS, hex::encode(addr))
}

/// Checks whether a string is a well-formed `Mx` address.
pub fn validate_address(address: &str) -> bool {
    parse_address(address).is_ok()
}

/// Derives the validator address used in block signing: the first 20 bytes
/// of SHA-256 over the `Mp` payload bytes, upper-case hex unless `upper` is
/// false.
pub fn validator_address(public_key: &str, upper: bool) -> Result<String, WalletError> {
    let hex_part = prefix::require(public_key, prefix::PUBLIC_KEY)?;
    let bytes = hex::decode(hex_part)
        .map_err(|e| WalletError::InvalidPublicKey(format!("invalid hex: {e}")))?;

    let digest = sha256(&bytes);
    let addr = hex::encode(&digest[..20]);
    Ok(if upper { addr.to_ascii_uppercase() } else { addr })
}
