use bip32::{DerivationPath, XPrv};
use zeroize::Zeroize;

use crate::error::WalletError;

/// BIP-44 derivation path used for every wallet. The network reuses the
/// Ethereum coin type, so the path is fixed rather than parameterized.
pub const DERIVATION_PATH: &str = "m/44'/60'/0'/0/0";

/// A derived secp256k1 key pair. The private key is zeroized on drop.
pub struct DerivedKey {
    pub private_key: [u8; 32],
    /// Uncompressed public key as X ‖ Y (64 bytes, no 0x04 prefix).
    pub public_key: [u8; 64],
    pub derivation_path: String,
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

/// Derives the wallet key from a 64-byte BIP-39 seed along
/// [`DERIVATION_PATH`].
pub fn derive_key(seed: &[u8]) -> Result<DerivedKey, WalletError> {
    let path: DerivationPath = DERIVATION_PATH
        .parse()
        .map_err(|e: bip32::Error| WalletError::DerivationFailed(e.to_string()))?;

    let xprv = XPrv::derive_from_path(seed, &path)
        .map_err(|e| WalletError::DerivationFailed(e.to_string()))?;

    let private_key: [u8; 32] = xprv.to_bytes().into();
    let public_key = minter_crypto::ecdsa::public_from_private(&private_key)?;

    Ok(DerivedKey {
        private_key,
        public_key,
        derivation_path: DERIVATION_PATH.to_string(),
    })
}
