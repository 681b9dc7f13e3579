use alloy_primitives::U256;
use minter_crypto::RecoverableSignature;

use crate::error::TxError;
use crate::rlp::RlpItem;

/// Single-signature envelope marker.
pub const SIGNATURE_SINGLE_TYPE: u8 = 1;

/// Multisig envelope marker.
pub const SIGNATURE_MULTI_TYPE: u8 = 2;

/// The signature block of a transaction envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureData {
    Single(RecoverableSignature),
    Multi {
        /// 20-byte multisig wallet address the signatures act for.
        address: [u8; 20],
        /// Owner signatures in the order they were supplied.
        signatures: Vec<RecoverableSignature>,
    },
}

impl SignatureData {
    pub fn signature_type(&self) -> u8 {
        match self {
            SignatureData::Single(_) => SIGNATURE_SINGLE_TYPE,
            SignatureData::Multi { .. } => SIGNATURE_MULTI_TYPE,
        }
    }

    pub fn to_rlp(&self) -> RlpItem {
        match self {
            SignatureData::Single(sig) => signature_to_rlp(sig),
            SignatureData::Multi {
                address,
                signatures,
            } => RlpItem::list(vec![
                RlpItem::bytes(address.to_vec()),
                RlpItem::list(signatures.iter().map(signature_to_rlp).collect()),
            ]),
        }
    }

    pub fn from_rlp(item: &RlpItem, signature_type: u8) -> Result<Self, TxError> {
        match signature_type {
            SIGNATURE_SINGLE_TYPE => Ok(SignatureData::Single(signature_from_rlp(item)?)),
            SIGNATURE_MULTI_TYPE => {
                let fields = item.as_list()?;
                if fields.len() != 2 {
                    return Err(TxError::InvalidRlp(format!(
                        "multisig block must have 2 fields, got {}",
                        fields.len()
                    )));
                }
                let address: [u8; 20] = fields[0]
                    .as_bytes()?
                    .try_into()
                    .map_err(|_| TxError::InvalidRlp("multisig address must be 20 bytes".into()))?;
                let signatures = fields[1]
                    .as_list()?
                    .iter()
                    .map(signature_from_rlp)
                    .collect::<Result<Vec<_>, _>>()?;
                if signatures.is_empty() {
                    return Err(TxError::InvalidRlp(
                        "multisig block carries no signatures".into(),
                    ));
                }
                Ok(SignatureData::Multi {
                    address,
                    signatures,
                })
            }
            other => Err(TxError::InvalidRlp(format!(
                "unknown signature type {other}"
            ))),
        }
    }
}

/// Encodes one `[v, r, s]` triple; r and s are minimal big-endian integers.
pub(crate) fn signature_to_rlp(sig: &RecoverableSignature) -> RlpItem {
    RlpItem::list(vec![
        RlpItem::uint(sig.v),
        RlpItem::uint(U256::from_be_bytes(sig.r)),
        RlpItem::uint(U256::from_be_bytes(sig.s)),
    ])
}

pub(crate) fn signature_from_rlp(item: &RlpItem) -> Result<RecoverableSignature, TxError> {
    let fields = item.as_list()?;
    if fields.len() != 3 {
        return Err(TxError::InvalidRlp(format!(
            "signature must have 3 fields, got {}",
            fields.len()
        )));
    }
    let v = u8::try_from(fields[0].as_u64()?)
        .map_err(|_| TxError::InvalidRlp("signature v out of range".into()))?;
    Ok(RecoverableSignature {
        v,
        r: fields[1].as_u256()?.to_be_bytes(),
        s: fields[2].as_u256()?.to_be_bytes(),
    })
}
