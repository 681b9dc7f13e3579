use sha2::Sha256;
use sha3::{Digest, Keccak256};

/// Keccak-256 digest with the original Keccak padding (not SHA3-256).
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

/// SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}
