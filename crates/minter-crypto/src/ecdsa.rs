use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use zeroize::Zeroize;

use crate::error::CryptoError;

/// A recoverable ECDSA signature with `v` in Ethereum-style {27, 28} form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoverableSignature {
    pub v: u8,
    pub r: [u8; 32],
    pub s: [u8; 32],
}

impl RecoverableSignature {
    /// Serializes as the 65-byte `r ‖ s ‖ v` form used by check locks and
    /// redeem proofs, with `v` remapped 27 → `0x00`, 28 → `0x01`.
    pub fn to_lock_bytes(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v - 27;
        out
    }

    /// Parses the 65-byte lock form back into a signature.
    pub fn from_lock_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != 65 {
            return Err(CryptoError::InvalidSignature(format!(
                "lock must be 65 bytes, got {}",
                bytes.len()
            )));
        }
        if bytes[64] > 1 {
            return Err(CryptoError::InvalidSignature(format!(
                "lock recovery byte {} out of range",
                bytes[64]
            )));
        }
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        Ok(Self { v: bytes[64] + 27, r, s })
    }
}

/// Parses a 64-character hex private key into raw bytes.
pub fn parse_private_key(hex_key: &str) -> Result<[u8; 32], CryptoError> {
    let bytes = hex::decode(hex_key)
        .map_err(|e| CryptoError::InvalidPrivateKey(format!("invalid hex: {e}")))?;
    let key: [u8; 32] = bytes
        .try_into()
        .map_err(|_| CryptoError::InvalidKeyLength)?;
    Ok(key)
}

/// Signs a 32-byte prehash with the given secp256k1 private key.
///
/// The returned signature is low-S normalized; `v` is 27 or 28.
pub fn sign_prehash(
    digest: &[u8; 32],
    private_key: &[u8; 32],
) -> Result<RecoverableSignature, CryptoError> {
    let mut key_bytes = *private_key;
    let signing_key = SigningKey::from_bytes((&key_bytes).into())
        .map_err(|e| CryptoError::InvalidPrivateKey(e.to_string()))?;
    key_bytes.zeroize();

    let (signature, recovery_id): (Signature, RecoveryId) = signing_key
        .sign_prehash(digest)
        .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;

    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&signature.r().to_bytes());
    s.copy_from_slice(&signature.s().to_bytes());

    Ok(RecoverableSignature {
        v: 27 + recovery_id.is_y_odd() as u8,
        r,
        s,
    })
}

/// Recovers the uncompressed public key (64 bytes, X ‖ Y) that produced
/// `signature` over `digest`.
pub fn recover(
    digest: &[u8; 32],
    signature: &RecoverableSignature,
) -> Result<[u8; 64], CryptoError> {
    if signature.v != 27 && signature.v != 28 {
        return Err(CryptoError::InvalidSignature(format!(
            "recovery byte {} out of range",
            signature.v
        )));
    }

    let mut rs = [0u8; 64];
    rs[..32].copy_from_slice(&signature.r);
    rs[32..].copy_from_slice(&signature.s);
    let sig = Signature::from_slice(&rs)
        .map_err(|e| CryptoError::InvalidSignature(e.to_string()))?;
    let recid = RecoveryId::from_byte(signature.v - 27)
        .ok_or_else(|| CryptoError::InvalidSignature("invalid recovery id".into()))?;

    let recovered = VerifyingKey::recover_from_prehash(digest, &sig, recid)
        .map_err(|e| CryptoError::InvalidSignature(format!("recovery failed: {e}")))?;

    let point = recovered.to_encoded_point(false);
    let mut xy = [0u8; 64];
    xy.copy_from_slice(&point.as_bytes()[1..]);
    Ok(xy)
}

/// Derives the uncompressed public key (64 bytes, X ‖ Y) from a private key.
pub fn public_from_private(private_key: &[u8; 32]) -> Result<[u8; 64], CryptoError> {
    let mut key_bytes = *private_key;
    let signing_key = SigningKey::from_bytes((&key_bytes).into())
        .map_err(|e| CryptoError::InvalidPrivateKey(e.to_string()))?;
    key_bytes.zeroize();

    let point = signing_key.verifying_key().to_encoded_point(false);
    let mut xy = [0u8; 64];
    xy.copy_from_slice(&point.as_bytes()[1..]);
    Ok(xy)
}
