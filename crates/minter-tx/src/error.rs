use thiserror::Error;

/// Transaction, check, and deeplink errors.
#[derive(Debug, Error)]
pub enum TxError {
    #[error("invalid rlp: {0}")]
    InvalidRlp(String),

    #[error("unknown transaction type: {0}")]
    UnknownTxType(u8),

    #[error("conflicting signer input: {0}")]
    ConflictingSignerInput(String),

    #[error("multisig transaction required")]
    MultisigRequired,

    #[error("passphrase must not be empty")]
    EmptyPassphrase,

    #[error("invalid multisig config: {0}")]
    InvalidMultisigConfig(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid proof: {0}")]
    InvalidProof(String),

    #[error("transaction is not signed")]
    NotSigned,

    #[error(transparent)]
    Util(#[from] minter_util::UtilError),

    #[error(transparent)]
    Crypto(#[from] minter_crypto::CryptoError),

    #[error(transparent)]
    Wallet(#[from] minter_wallet::WalletError),
}
