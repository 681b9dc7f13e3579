use alloy_primitives::U256;

use minter_crypto::ecdsa;
use minter_crypto::hash::{keccak256, sha256};
use minter_crypto::RecoverableSignature;
use minter_util::{coin, prefix};
use minter_wallet::address;

use crate::data::TxData;
use crate::error::TxError;
use crate::payload::Payload;
use crate::rlp::RlpItem;
use crate::signature::{
    signature_from_rlp, signature_to_rlp, SignatureData, SIGNATURE_MULTI_TYPE,
    SIGNATURE_SINGLE_TYPE,
};

/// Main network chain id.
pub const MAINNET_CHAIN_ID: u8 = 1;

/// Test network chain id.
pub const TESTNET_CHAIN_ID: u8 = 2;

/// One fee unit in PIP (10^15).
const FEE_UNIT: u64 = 1_000_000_000_000_000;

/// Fee units charged per payload or service-data byte.
const PAYLOAD_BYTE_UNITS: u64 = 2;

/// Extra fee units per multisend recipient beyond the first.
const MULTISEND_RECIPIENT_UNITS: u64 = 5;

/// A transaction envelope.
///
/// The envelope is RLP-encoded as the ten-element list
/// `[nonce, chain_id, gas_price, gas_coin, type, data, payload,
/// service_data, signature_type, signature_data]`; the signature covers the
/// Keccak-256 digest of the first nine elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub nonce: u64,
    pub chain_id: u8,
    pub gas_price: u64,
    pub gas_coin: String,
    pub data: TxData,
    pub payload: Payload,
    pub service_data: Payload,
    pub signature: Option<SignatureData>,
}

/// A transaction decoded from its signed wire form.
#[derive(Debug, Clone)]
pub struct DecodedTransaction {
    pub transaction: Transaction,
    /// Sender recovered from the signature block (`Mx` + hex).
    pub from: String,
    /// The raw signed hex as supplied.
    pub raw: String,
}

impl Transaction {
    /// Builds an unsigned transaction with gas price 1 and empty payloads.
    pub fn new(nonce: u64, chain_id: u8, gas_coin: &str, data: TxData) -> Self {
        Transaction {
            nonce,
            chain_id,
            gas_price: 1,
            gas_coin: gas_coin.to_ascii_uppercase(),
            data,
            payload: Payload::empty(),
            service_data: Payload::empty(),
            signature: None,
        }
    }

    pub fn with_payload(mut self, payload: impl Into<Payload>) -> Self {
        self.payload = payload.into();
        self
    }

    pub fn with_service_data(mut self, service_data: impl Into<Payload>) -> Self {
        self.service_data = service_data.into();
        self
    }

    /// The nine envelope fields that precede the signature block.
    fn presign_items(&self, signature_type: u8) -> Result<Vec<RlpItem>, TxError> {
        Ok(vec![
            RlpItem::uint(self.nonce),
            RlpItem::uint(self.chain_id),
            RlpItem::uint(self.gas_price),
            RlpItem::bytes(coin::encode_coin_name(&self.gas_coin)?.to_vec()),
            RlpItem::uint(self.data.tx_type()),
            RlpItem::bytes(self.data.to_rlp()?.encode()),
            RlpItem::bytes(self.payload.as_bytes().to_vec()),
            RlpItem::bytes(self.service_data.as_bytes().to_vec()),
            RlpItem::uint(signature_type),
        ])
    }

    /// Keccak-256 over the RLP of the nine pre-sign fields.
    fn signing_digest(&self, signature_type: u8) -> Result<[u8; 32], TxError> {
        let encoded = RlpItem::list(self.presign_items(signature_type)?).encode();
        Ok(keccak256(&encoded))
    }

    /// Signs the pre-sign digest and returns the RLP `[v, r, s]` hex, for
    /// later use through a signature-input signing path.
    pub fn generate_signature(
        &self,
        private_key: &str,
        signature_type: u8,
    ) -> Result<String, TxError> {
        if signature_type != SIGNATURE_SINGLE_TYPE && signature_type != SIGNATURE_MULTI_TYPE {
            return Err(TxError::InvalidRlp(format!(
                "unknown signature type {signature_type}"
            )));
        }
        let key = ecdsa::parse_private_key(private_key)?;
        let digest = self.signing_digest(signature_type)?;
        let signature = ecdsa::sign_prehash(&digest, &key)?;
        Ok(signature_to_rlp(&signature).encode_hex())
    }

    /// Signs as a single-signature transaction and returns the signed hex.
    ///
    /// Exactly one signer input must be supplied: a raw hex private key, or
    /// a precomputed RLP `[v, r, s]` signature from [`generate_signature`].
    ///
    /// [`generate_signature`]: Transaction::generate_signature
    pub fn sign(
        &mut self,
        private_key: Option<&str>,
        signature: Option<&str>,
    ) -> Result<String, TxError> {
        let digest = self.signing_digest(SIGNATURE_SINGLE_TYPE)?;

        let signature = match (private_key, signature) {
            (Some(_), Some(_)) => {
                return Err(TxError::ConflictingSignerInput(
                    "both a private key and a signature were supplied".into(),
                ))
            }
            (None, None) => {
                return Err(TxError::ConflictingSignerInput(
                    "no signer input supplied".into(),
                ))
            }
            (Some(key), None) => ecdsa::sign_prehash(&digest, &ecdsa::parse_private_key(key)?)?,
            (None, Some(sig_hex)) => parse_signature_hex(sig_hex)?,
        };

        self.signature = Some(SignatureData::Single(signature));
        self.signed_hex()
    }

    /// Signs as a multisig transaction on behalf of `ms_address`.
    ///
    /// Signatures produced from `private_keys` come first, then the
    /// precomputed `signatures`, preserving the supplied order. Ownership of
    /// the keys is not checked here; the chain validates the owner set.
    pub fn sign_multisig(
        &mut self,
        ms_address: &str,
        private_keys: &[&str],
        signatures: &[&str],
    ) -> Result<String, TxError> {
        if private_keys.is_empty() && signatures.is_empty() {
            return Err(TxError::ConflictingSignerInput(
                "no signer input supplied for multisig".into(),
            ));
        }

        let ms_address = address::parse_address(ms_address)?;
        let digest = self.signing_digest(SIGNATURE_MULTI_TYPE)?;

        let mut parts = Vec::with_capacity(private_keys.len() + signatures.len());
        for key in private_keys {
            parts.push(ecdsa::sign_prehash(&digest, &ecdsa::parse_private_key(key)?)?);
        }
        for sig_hex in signatures {
            parts.push(parse_signature_hex(sig_hex)?);
        }

        self.signature = Some(SignatureData::Multi {
            address: ms_address,
            signatures: parts,
        });
        self.signed_hex()
    }

    /// Appends one more owner signature to an already signed multisig
    /// transaction and returns the new signed hex.
    pub fn add_signature(signed_tx: &str, private_key: &str) -> Result<String, TxError> {
        let decoded = Self::from_raw(signed_tx)?;
        let mut tx = decoded.transaction;

        let Some(SignatureData::Multi {
            address,
            mut signatures,
        }) = tx.signature.take()
        else {
            return Err(TxError::MultisigRequired);
        };

        let digest = tx.signing_digest(SIGNATURE_MULTI_TYPE)?;
        signatures.push(ecdsa::sign_prehash(
            &digest,
            &ecdsa::parse_private_key(private_key)?,
        )?);

        tx.signature = Some(SignatureData::Multi {
            address,
            signatures,
        });
        tx.signed_hex()
    }

    /// The full ten-field envelope bytes; requires a signature.
    pub fn signed_bytes(&self) -> Result<Vec<u8>, TxError> {
        let signature = self.signature.as_ref().ok_or(TxError::NotSigned)?;
        let mut items = self.presign_items(signature.signature_type())?;
        items.push(RlpItem::bytes(signature.to_rlp().encode()));
        Ok(RlpItem::list(items).encode())
    }

    /// Lower-case hex of the signed envelope.
    pub fn signed_hex(&self) -> Result<String, TxError> {
        Ok(hex::encode(self.signed_bytes()?))
    }

    /// Transaction hash: `Mt` + first 20 bytes of SHA-256 over the signed
    /// envelope bytes.
    pub fn hash(&self) -> Result<String, TxError> {
        let digest = sha256(&self.signed_bytes()?);
        Ok(prefix::add(&hex::encode(&digest[..20]), prefix::TRANSACTION)?)
    }

    /// Total fee in PIP at gas price 1.
    pub fn fee(&self) -> U256 {
        let mut units = self.data.commission_units()
            + PAYLOAD_BYTE_UNITS * self.payload.len() as u64
            + PAYLOAD_BYTE_UNITS * self.service_data.len() as u64;

        if let TxData::Multisend { recipients } = &self.data {
            units += MULTISEND_RECIPIENT_UNITS * recipients.len().saturating_sub(1) as u64;
        }

        U256::from(units) * U256::from(FEE_UNIT)
    }

    /// Decodes a signed transaction and recovers its sender.
    ///
    /// For multisig envelopes the sender is the embedded multisig address;
    /// for single signatures it is recovered from the signature over the
    /// rebuilt pre-sign digest.
    pub fn from_raw(raw_tx: &str) -> Result<DecodedTransaction, TxError> {
        let bytes = hex::decode(raw_tx)
            .map_err(|e| TxError::InvalidRlp(format!("invalid hex: {e}")))?;
        let envelope = RlpItem::decode(&bytes)?;
        let fields = envelope.as_list()?;
        if fields.len() != 10 {
            return Err(TxError::InvalidRlp(format!(
                "envelope has {} fields, expected 10",
                fields.len()
            )));
        }

        let tx_type = u8::try_from(fields[4].as_u64()?)
            .map_err(|_| TxError::InvalidRlp("type tag out of range".into()))?;
        let data_item = RlpItem::decode(fields[5].as_bytes()?)?;
        let data = TxData::from_rlp(tx_type, &data_item)?;

        let signature_type = u8::try_from(fields[8].as_u64()?)
            .map_err(|_| TxError::InvalidRlp("signature type out of range".into()))?;
        let signature_item = RlpItem::decode(fields[9].as_bytes()?)?;
        let signature = SignatureData::from_rlp(&signature_item, signature_type)?;

        let mut tx = Transaction {
            nonce: fields[0].as_u64()?,
            chain_id: u8::try_from(fields[1].as_u64()?)
                .map_err(|_| TxError::InvalidRlp("chain id out of range".into()))?,
            gas_price: fields[2].as_u64()?,
            gas_coin: coin::decode_coin_name(fields[3].as_bytes()?)?,
            data,
            payload: Payload::from_wire(fields[6].as_bytes()?.to_vec()),
            service_data: Payload::from_wire(fields[7].as_bytes()?.to_vec()),
            signature: None,
        };

        let from = match &signature {
            SignatureData::Multi { address, .. } => address::format_address(address),
            SignatureData::Single(sig) => {
                let digest = tx.signing_digest(SIGNATURE_SINGLE_TYPE)?;
                let public_key = ecdsa::recover(&digest, sig)?;
                address::address_from_key_bytes(&public_key)
            }
        };
        tx.signature = Some(signature);

        Ok(DecodedTransaction {
            transaction: tx,
            from,
            raw: raw_tx.to_string(),
        })
    }
}

fn parse_signature_hex(signature: &str) -> Result<RecoverableSignature, TxError> {
    signature_from_rlp(&RlpItem::decode_hex(signature)?)
}
