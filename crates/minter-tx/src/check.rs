use alloy_primitives::U256;

use minter_crypto::ecdsa;
use minter_crypto::hash::{keccak256, sha256};
use minter_crypto::RecoverableSignature;
use minter_util::{coin, prefix};
use minter_wallet::address;

use crate::error::TxError;
use crate::rlp::RlpItem;
use crate::signature::signature_to_rlp;

/// An offline redeemable coin voucher.
///
/// The check body is RLP of `[nonce, chain_id, due_block, coin, value,
/// gas_coin]` where the nonce is the ASCII bytes of its decimal form. A
/// 65-byte "lock" signature by the passphrase-derived key binds the body to
/// the passphrase holder; the issuer then signs the body including the lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    /// Check nonce as a decimal string; goes on the wire as ASCII bytes.
    pub nonce: String,
    pub chain_id: u8,
    /// Block height after which the check expires.
    pub due_block: u64,
    pub coin: String,
    /// Amount in PIP.
    pub value: U256,
    pub gas_coin: String,
}

/// A check decoded from its `Mc` wire form.
#[derive(Debug, Clone)]
pub struct DecodedCheck {
    pub check: Check,
    /// The 65-byte passphrase lock.
    pub lock: Vec<u8>,
    /// The issuer's signature over the locked body.
    pub signature: RecoverableSignature,
    /// Issuer address recovered from the signature (`Mx` + hex).
    pub owner: String,
}

impl Check {
    pub fn new(
        nonce: &str,
        chain_id: u8,
        due_block: u64,
        coin: &str,
        value: U256,
        gas_coin: &str,
    ) -> Self {
        Check {
            nonce: nonce.to_string(),
            chain_id,
            due_block,
            coin: coin.to_ascii_uppercase(),
            value,
            gas_coin: gas_coin.to_ascii_uppercase(),
        }
    }

    /// The six body fields that precede the lock.
    fn body_items(&self) -> Result<Vec<RlpItem>, TxError> {
        Ok(vec![
            RlpItem::string(&self.nonce),
            RlpItem::uint(self.chain_id),
            RlpItem::uint(self.due_block),
            RlpItem::bytes(coin::encode_coin_name(&self.coin)?.to_vec()),
            RlpItem::uint(self.value),
            RlpItem::bytes(coin::encode_coin_name(&self.gas_coin)?.to_vec()),
        ])
    }

    /// Signs the check and returns its `Mc` wire form.
    ///
    /// The lock is produced by the key `SHA-256(passphrase)` over the body
    /// digest; the issuer's key then signs the digest of the locked body.
    pub fn sign(&self, private_key: &str, passphrase: &str) -> Result<String, TxError> {
        if passphrase.is_empty() {
            return Err(TxError::EmptyPassphrase);
        }

        let mut items = self.body_items()?;

        let digest = keccak256(&RlpItem::list(items.clone()).encode());
        let lock_key = sha256(passphrase.as_bytes());
        let lock = ecdsa::sign_prehash(&digest, &lock_key)?.to_lock_bytes();
        items.push(RlpItem::bytes(lock.to_vec()));

        let digest = keccak256(&RlpItem::list(items.clone()).encode());
        let signature = ecdsa::sign_prehash(&digest, &ecdsa::parse_private_key(private_key)?)?;

        let signature_items = signature_to_rlp(&signature);
        items.extend(signature_items.as_list()?.to_vec());

        Ok(prefix::add(
            &RlpItem::list(items).encode_hex(),
            prefix::CHECK,
        )?)
    }

    /// Builds the 65-byte redeem proof for `address`: the passphrase-derived
    /// key signs Keccak-256(RLP([address_bytes])).
    pub fn proof(address: &str, passphrase: &str) -> Result<String, TxError> {
        let addr_bytes = address::parse_address(address)?;
        let digest = keccak256(&RlpItem::list(vec![RlpItem::bytes(addr_bytes.to_vec())]).encode());

        let key = sha256(passphrase.as_bytes());
        Ok(hex::encode(ecdsa::sign_prehash(&digest, &key)?.to_lock_bytes()))
    }

    /// Decodes an `Mc` check and recovers its issuer.
    pub fn from_raw(raw_check: &str) -> Result<DecodedCheck, TxError> {
        let hex_part = prefix::require(raw_check, prefix::CHECK)?;
        let bytes = hex::decode(hex_part)
            .map_err(|e| TxError::InvalidRlp(format!("invalid hex: {e}")))?;
        let decoded = RlpItem::decode(&bytes)?;
        let fields = decoded.as_list()?;
        if fields.len() != 10 {
            return Err(TxError::InvalidRlp(format!(
                "check has {} fields, expected 10",
                fields.len()
            )));
        }

        let nonce = String::from_utf8(fields[0].as_bytes()?.to_vec())
            .map_err(|_| TxError::InvalidRlp("check nonce is not UTF-8".into()))?;
        let check = Check {
            nonce,
            chain_id: u8::try_from(fields[1].as_u64()?)
                .map_err(|_| TxError::InvalidRlp("chain id out of range".into()))?,
            due_block: fields[2].as_u64()?,
            coin: coin::decode_coin_name(fields[3].as_bytes()?)?,
            value: fields[4].as_u256()?,
            gas_coin: coin::decode_coin_name(fields[5].as_bytes()?)?,
        };

        let lock = fields[6].as_bytes()?.to_vec();
        if lock.len() != 65 {
            return Err(TxError::InvalidRlp(format!(
                "check lock is {} bytes, expected 65",
                lock.len()
            )));
        }

        let signature = RecoverableSignature {
            v: u8::try_from(fields[7].as_u64()?)
                .map_err(|_| TxError::InvalidRlp("signature v out of range".into()))?,
            r: fields[8].as_u256()?.to_be_bytes(),
            s: fields[9].as_u256()?.to_be_bytes(),
        };

        let mut items = check.body_items()?;
        items.push(RlpItem::bytes(lock.clone()));
        let digest = keccak256(&RlpItem::list(items).encode());
        let public_key = ecdsa::recover(&digest, &signature)?;
        let owner = address::address_from_key_bytes(&public_key);

        Ok(DecodedCheck {
            check,
            lock,
            signature,
            owner,
        })
    }
}
