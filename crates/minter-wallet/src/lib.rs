//! # minter-wallet
//!
//! BIP-39/BIP-32 wallet derivation and address formatting for the Minter
//! network:
//! - 12-word English mnemonics and their 64-byte seeds
//! - secp256k1 key derivation along the fixed path `m/44'/60'/0'/0/0`
//! - `Mx` wallet addresses (Keccak-256), `Mp` public keys, and validator
//!   addresses (SHA-256)

pub mod address;
pub mod error;
pub mod hd_derivation;
pub mod mnemonic;
pub mod wallet;

pub use error::WalletError;
pub use wallet::Wallet;
