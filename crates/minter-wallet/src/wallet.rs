use serde::{Deserialize, Serialize};

use crate::address;
use crate::error::WalletError;
use crate::hd_derivation;
use crate::mnemonic;

/// A derived wallet: the mnemonic, its seed, and the key material along
/// `m/44'/60'/0'/0/0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    pub mnemonic: String,
    /// 64-byte BIP-39 seed.
    pub seed: Vec<u8>,
    /// Private key as 64 hex characters.
    pub private_key: String,
    /// Public key as `Mp` + 128 hex characters (X ‖ Y).
    pub public_key: String,
    /// Address as `Mx` + 40 hex characters.
    pub address: String,
}

impl Wallet {
    /// Creates a wallet from fresh OS entropy (12 words).
    pub fn create() -> Result<Self, WalletError> {
        let phrase = mnemonic::generate_mnemonic()?;
        Self::from_mnemonic(&phrase)
    }

    /// Restores a wallet from an existing 12-word mnemonic.
    pub fn from_mnemonic(phrase: &str) -> Result<Self, WalletError> {
        let seed = mnemonic::mnemonic_to_seed(phrase)?;
        let key = hd_derivation::derive_key(&seed)?;

        Ok(Wallet {
            mnemonic: phrase.to_string(),
            seed: seed.to_vec(),
            private_key: hex::encode(key.private_key),
            public_key: address::format_public_key(&key.public_key),
            address: address::address_from_key_bytes(&key.public_key),
        })
    }
}
