use thiserror::Error;

/// Errors from the leaf helper modules.
#[derive(Debug, Error)]
pub enum UtilError {
    #[error("unknown prefix: {0}")]
    InvalidPrefix(String),

    #[error("invalid coin symbol: {0}")]
    InvalidCoinSymbol(String),

    #[error("invalid amount: {0}")]
    InvalidAmountKind(String),
}
