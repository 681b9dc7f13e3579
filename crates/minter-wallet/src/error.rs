use thiserror::Error;

/// Wallet derivation and formatting errors.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("invalid key length")]
    InvalidKeyLength,

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid prefix: {0}")]
    InvalidPrefix(String),
}

impl From<minter_util::UtilError> for WalletError {
    fn from(e: minter_util::UtilError) -> Self {
        WalletError::InvalidPrefix(e.to_string())
    }
}

impl From<minter_crypto::CryptoError> for WalletError {
    fn from(e: minter_crypto::CryptoError) -> Self {
        match e {
            minter_crypto::CryptoError::InvalidKeyLength => WalletError::InvalidKeyLength,
            other => WalletError::DerivationFailed(other.to_string()),
        }
    }
}
