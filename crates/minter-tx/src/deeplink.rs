use minter_util::coin;

use crate::error::TxError;
use crate::payload::Payload;
use crate::rlp::RlpItem;
use crate::transaction::Transaction;

/// The reduced transaction subset carried inside a wallet deeplink.
///
/// Encodes as `[type, data, payload, nonce, gas_price, gas_coin]`; absent
/// trailing fields encode as the RLP empty string so the receiving wallet
/// fills them in. URL assembly around this blob lives outside the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deeplink {
    pub tx_type: u8,
    /// RLP blob of the transaction data list.
    pub data: Vec<u8>,
    pub payload: Payload,
    pub nonce: Option<u64>,
    pub gas_price: Option<u64>,
    pub gas_coin: Option<String>,
}

impl Deeplink {
    /// Captures the full transaction: nonce, gas price, and gas coin
    /// included.
    pub fn from_transaction(tx: &Transaction) -> Result<Self, TxError> {
        Ok(Deeplink {
            tx_type: tx.data.tx_type(),
            data: tx.data.to_rlp()?.encode(),
            payload: tx.payload.clone(),
            nonce: Some(tx.nonce),
            gas_price: Some(tx.gas_price),
            gas_coin: Some(tx.gas_coin.clone()),
        })
    }

    /// Captures only the transaction data; the receiving wallet supplies
    /// everything else.
    pub fn data_only(tx: &Transaction) -> Result<Self, TxError> {
        Ok(Deeplink {
            tx_type: tx.data.tx_type(),
            data: tx.data.to_rlp()?.encode(),
            payload: Payload::empty(),
            nonce: None,
            gas_price: None,
            gas_coin: None,
        })
    }

    /// Encodes the six-field deeplink blob.
    pub fn encode(&self) -> Result<Vec<u8>, TxError> {
        let nonce = match self.nonce {
            Some(nonce) => RlpItem::uint(nonce),
            None => RlpItem::empty(),
        };
        let gas_price = match self.gas_price {
            Some(gas_price) => RlpItem::uint(gas_price),
            None => RlpItem::empty(),
        };
        let gas_coin = match &self.gas_coin {
            Some(symbol) => RlpItem::bytes(coin::encode_coin_name(symbol)?.to_vec()),
            None => RlpItem::empty(),
        };

        Ok(RlpItem::list(vec![
            RlpItem::uint(self.tx_type),
            RlpItem::bytes(self.data.clone()),
            RlpItem::bytes(self.payload.as_bytes().to_vec()),
            nonce,
            gas_price,
            gas_coin,
        ])
        .encode())
    }

    /// Lower-case hex of the blob, ready for the URL `d` parameter.
    pub fn encode_hex(&self) -> Result<String, TxError> {
        Ok(hex::encode(self.encode()?))
    }
}
