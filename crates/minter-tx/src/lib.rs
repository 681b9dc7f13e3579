//! # minter-tx
//!
//! The transaction and check pipeline of the Minter SDK:
//! - the RLP envelope with fourteen typed data shapes
//! - single-signature and multisig signing with sender recovery
//! - offline redeemable checks with passphrase locks and redeem proofs
//! - the reduced-transaction deeplink blob
//!
//! All amounts cross this API as PIP integers ([`alloy_primitives::U256`]);
//! `minter_util::units` converts to and from decimal BIP at the edges.

pub mod check;
pub mod data;
pub mod deeplink;
pub mod error;
pub mod payload;
pub mod rlp;
pub mod signature;
pub mod transaction;

pub use check::{Check, DecodedCheck};
pub use data::{MultisendRecipient, TxData};
pub use deeplink::Deeplink;
pub use error::TxError;
pub use payload::Payload;
pub use signature::SignatureData;
pub use transaction::{DecodedTransaction, Transaction, MAINNET_CHAIN_ID, TESTNET_CHAIN_ID};
