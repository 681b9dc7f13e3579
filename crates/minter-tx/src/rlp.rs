use alloy_primitives::U256;
use alloy_rlp::{Encodable, Header};

use crate::error::TxError;

/// An RLP value: a byte string or a nested list.
///
/// The wire protocol mixes integers, fixed-width byte fields, and nested
/// lists inside one envelope, so transactions and checks are built and
/// decoded as dynamic trees rather than derive-encoded structs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RlpItem {
    Bytes(Vec<u8>),
    List(Vec<RlpItem>),
}

impl RlpItem {
    /// The RLP empty string (also how zero integers encode).
    pub fn empty() -> Self {
        RlpItem::Bytes(Vec::new())
    }

    /// An unsigned integer as its minimal big-endian byte string.
    pub fn uint(value: impl TryInto<U256>) -> Self {
        let value: U256 = value
            .try_into()
            .unwrap_or_else(|_| unreachable!("integer type always fits in U256"));
        RlpItem::Bytes(value.to_be_bytes_trimmed_vec())
    }

    pub fn bytes(value: impl Into<Vec<u8>>) -> Self {
        RlpItem::Bytes(value.into())
    }

    pub fn string(value: &str) -> Self {
        RlpItem::Bytes(value.as_bytes().to_vec())
    }

    pub fn list(items: Vec<RlpItem>) -> Self {
        RlpItem::List(items)
    }

    /// Serializes the tree.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.length());
        self.encode_into(&mut out);
        out
    }

    /// Serializes the tree as lower-case hex.
    pub fn encode_hex(&self) -> String {
        hex::encode(self.encode())
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        match self {
            RlpItem::Bytes(bytes) => bytes.as_slice().encode(out),
            RlpItem::List(items) => {
                Header {
                    list: true,
                    payload_length: items.iter().map(Self::length).sum(),
                }
                .encode(out);
                for item in items {
                    item.encode_into(out);
                }
            }
        }
    }

    /// Total encoded length, header included.
    fn length(&self) -> usize {
        match self {
            RlpItem::Bytes(bytes) => bytes.as_slice().length(),
            RlpItem::List(items) => {
                let payload: usize = items.iter().map(Self::length).sum();
                payload + alloy_rlp::length_of_length(payload)
            }
        }
    }

    /// Decodes a complete RLP blob; trailing bytes are rejected.
    pub fn decode(mut buf: &[u8]) -> Result<Self, TxError> {
        let item = Self::decode_item(&mut buf)?;
        if !buf.is_empty() {
            return Err(TxError::InvalidRlp(format!(
                "{} trailing bytes after value",
                buf.len()
            )));
        }
        Ok(item)
    }

    /// Decodes a complete hex-encoded RLP blob.
    pub fn decode_hex(value: &str) -> Result<Self, TxError> {
        let bytes =
            hex::decode(value).map_err(|e| TxError::InvalidRlp(format!("invalid hex: {e}")))?;
        Self::decode(&bytes)
    }

    fn decode_item(buf: &mut &[u8]) -> Result<Self, TxError> {
        let header = Header::decode(buf).map_err(rlp_err)?;
        if header.payload_length > buf.len() {
            return Err(TxError::InvalidRlp("input too short".into()));
        }
        let (payload, rest) = buf.split_at(header.payload_length);
        *buf = rest;

        if header.list {
            let mut payload = payload;
            let mut items = Vec::new();
            while !payload.is_empty() {
                items.push(Self::decode_item(&mut payload)?);
            }
            Ok(RlpItem::List(items))
        } else {
            Ok(RlpItem::Bytes(payload.to_vec()))
        }
    }

    pub fn as_bytes(&self) -> Result<&[u8], TxError> {
        match self {
            RlpItem::Bytes(bytes) => Ok(bytes),
            RlpItem::List(_) => Err(TxError::InvalidRlp(
                "expected byte string, found list".into(),
            )),
        }
    }

    pub fn as_list(&self) -> Result<&[RlpItem], TxError> {
        match self {
            RlpItem::List(items) => Ok(items),
            RlpItem::Bytes(_) => Err(TxError::InvalidRlp(
                "expected list, found byte string".into(),
            )),
        }
    }

    /// Big-endian integer view of a byte-string item.
    pub fn as_u256(&self) -> Result<U256, TxError> {
        let bytes = self.as_bytes()?;
        U256::try_from_be_slice(bytes)
            .ok_or_else(|| TxError::InvalidRlp("integer wider than 256 bits".into()))
    }

    pub fn as_u64(&self) -> Result<u64, TxError> {
        let value = self.as_u256()?;
        u64::try_from(value).map_err(|_| TxError::InvalidRlp("integer wider than 64 bits".into()))
    }
}

fn rlp_err(e: alloy_rlp::Error) -> TxError {
    TxError::InvalidRlp(e.to_string())
}
