//! # minter-crypto
//!
//! Cryptographic substrate for the Minter SDK:
//! - Keccak-256 (original padding, not NIST SHA-3) and SHA-256 digests
//! - recoverable secp256k1 ECDSA over 32-byte prehashes
//! - public-key recovery and derivation

pub mod ecdsa;
pub mod error;
pub mod hash;

pub use ecdsa::RecoverableSignature;
pub use error::CryptoError;
