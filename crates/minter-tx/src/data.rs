use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use minter_util::{coin, prefix};
use minter_wallet::address;

use crate::error::TxError;
use crate::rlp::RlpItem;

/// Candidate public keys are 32 raw bytes behind the `Mp` prefix.
const CANDIDATE_KEY_BYTES: usize = 32;

/// Redeem proofs are 65-byte recoverable signatures.
const PROOF_BYTES: usize = 65;

/// Weights in a multisig wallet are 10-bit values.
const MAX_MULTISIG_WEIGHT: u16 = 1023;

/// One entry of a multisend transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultisendRecipient {
    pub coin: String,
    /// `Mx`-prefixed recipient address.
    pub to: String,
    /// Amount in PIP.
    pub value: U256,
}

/// Typed transaction payloads, one variant per wire type tag.
///
/// Amounts are PIP integers; coins are bare symbols; addresses and public
/// keys keep their `Mx`/`Mp` textual form and are converted to raw bytes at
/// the wire boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxData {
    Send {
        coin: String,
        to: String,
        value: U256,
    },
    Sell {
        coin_to_sell: String,
        value_to_sell: U256,
        coin_to_buy: String,
        min_value_to_buy: U256,
    },
    SellAll {
        coin_to_sell: String,
        coin_to_buy: String,
        min_value_to_buy: U256,
    },
    Buy {
        coin_to_buy: String,
        value_to_buy: U256,
        coin_to_sell: String,
        max_value_to_sell: U256,
    },
    CreateCoin {
        name: String,
        symbol: String,
        initial_amount: U256,
        initial_reserve: U256,
        crr: u32,
        max_supply: U256,
    },
    DeclareCandidacy {
        address: String,
        pub_key: String,
        commission: u32,
        coin: String,
        stake: U256,
    },
    Delegate {
        pub_key: String,
        coin: String,
        stake: U256,
    },
    Unbond {
        pub_key: String,
        coin: String,
        value: U256,
    },
    RedeemCheck {
        /// `Mc`-prefixed check.
        check: String,
        /// 130 hex characters (65 bytes).
        proof: String,
    },
    SetCandidateOn {
        pub_key: String,
    },
    SetCandidateOff {
        pub_key: String,
    },
    CreateMultisig {
        threshold: u16,
        weights: Vec<u16>,
        addresses: Vec<String>,
    },
    Multisend {
        recipients: Vec<MultisendRecipient>,
    },
    EditCandidate {
        pub_key: String,
        reward_address: String,
        owner_address: String,
    },
}

impl TxData {
    /// Wire type tag.
    pub fn tx_type(&self) -> u8 {
        match self {
            TxData::Send { .. } => 1,
            TxData::Sell { .. } => 2,
            TxData::SellAll { .. } => 3,
            TxData::Buy { .. } => 4,
            TxData::CreateCoin { .. } => 5,
            TxData::DeclareCandidacy { .. } => 6,
            TxData::Delegate { .. } => 7,
            TxData::Unbond { .. } => 8,
            TxData::RedeemCheck { .. } => 9,
            TxData::SetCandidateOn { .. } => 10,
            TxData::SetCandidateOff { .. } => 11,
            TxData::CreateMultisig { .. } => 12,
            TxData::Multisend { .. } => 13,
            TxData::EditCandidate { .. } => 14,
        }
    }

    /// Base commission in fee units (multiplied by 10^15 PIP).
    pub fn commission_units(&self) -> u64 {
        match self {
            TxData::Send { .. } => 10,
            TxData::Sell { .. } => 100,
            TxData::SellAll { .. } => 100,
            TxData::Buy { .. } => 100,
            TxData::CreateCoin { .. } => 1000,
            TxData::DeclareCandidacy { .. } => 10000,
            TxData::Delegate { .. } => 200,
            TxData::Unbond { .. } => 100,
            TxData::RedeemCheck { .. } => 30,
            TxData::SetCandidateOn { .. } => 100,
            TxData::SetCandidateOff { .. } => 100,
            TxData::CreateMultisig { .. } => 100,
            TxData::Multisend { .. } => 10,
            TxData::EditCandidate { .. } => 10000,
        }
    }

    /// Builds the type-specific RLP data list.
    pub fn to_rlp(&self) -> Result<RlpItem, TxError> {
        self.validate()?;

        let items = match self {
            TxData::Send { coin, to, value } => {
                vec![coin_item(coin)?, address_item(to)?, RlpItem::uint(*value)]
            }
            TxData::Sell {
                coin_to_sell,
                value_to_sell,
                coin_to_buy,
                min_value_to_buy,
            } => vec![
                coin_item(coin_to_sell)?,
                RlpItem::uint(*value_to_sell),
                coin_item(coin_to_buy)?,
                RlpItem::uint(*min_value_to_buy),
            ],
            TxData::SellAll {
                coin_to_sell,
                coin_to_buy,
                min_value_to_buy,
            } => vec![
                coin_item(coin_to_sell)?,
                coin_item(coin_to_buy)?,
                RlpItem::uint(*min_value_to_buy),
            ],
            TxData::Buy {
                coin_to_buy,
                value_to_buy,
                coin_to_sell,
                max_value_to_sell,
            } => vec![
                coin_item(coin_to_buy)?,
                RlpItem::uint(*value_to_buy),
                coin_item(coin_to_sell)?,
                RlpItem::uint(*max_value_to_sell),
            ],
            TxData::CreateCoin {
                name,
                symbol,
                initial_amount,
                initial_reserve,
                crr,
                max_supply,
            } => vec![
                RlpItem::string(name),
                coin_item(symbol)?,
                RlpItem::uint(*initial_amount),
                RlpItem::uint(*initial_reserve),
                RlpItem::uint(*crr),
                RlpItem::uint(*max_supply),
            ],
            TxData::DeclareCandidacy {
                address,
                pub_key,
                commission,
                coin,
                stake,
            } => vec![
                address_item(address)?,
                pub_key_item(pub_key)?,
                RlpItem::uint(*commission),
                coin_item(coin)?,
                RlpItem::uint(*stake),
            ],
            TxData::Delegate {
                pub_key,
                coin,
                stake,
            } => vec![
                pub_key_item(pub_key)?,
                coin_item(coin)?,
                RlpItem::uint(*stake),
            ],
            TxData::Unbond {
                pub_key,
                coin,
                value,
            } => vec![
                pub_key_item(pub_key)?,
                coin_item(coin)?,
                RlpItem::uint(*value),
            ],
            TxData::RedeemCheck { check, proof } => {
                let check_hex = prefix::require(check, prefix::CHECK)?;
                let check_bytes = hex::decode(check_hex)
                    .map_err(|e| TxError::InvalidRlp(format!("invalid check hex: {e}")))?;
                vec![RlpItem::bytes(check_bytes), RlpItem::bytes(proof_bytes(proof)?)]
            }
            TxData::SetCandidateOn { pub_key } => vec![pub_key_item(pub_key)?],
            TxData::SetCandidateOff { pub_key } => vec![pub_key_item(pub_key)?],
            TxData::CreateMultisig {
                threshold,
                weights,
                addresses,
            } => vec![
                RlpItem::uint(*threshold),
                RlpItem::list(weights.iter().map(|w| RlpItem::uint(*w)).collect()),
                RlpItem::list(
                    addresses
                        .iter()
                        .map(|a| address_item(a))
                        .collect::<Result<Vec<_>, _>>()?,
                ),
            ],
            TxData::Multisend { recipients } => {
                let entries = recipients
                    .iter()
                    .map(|r| {
                        Ok(RlpItem::list(vec![
                            coin_item(&r.coin)?,
                            address_item(&r.to)?,
                            RlpItem::uint(r.value),
                        ]))
                    })
                    .collect::<Result<Vec<_>, TxError>>()?;
                vec![RlpItem::list(entries)]
            }
            TxData::EditCandidate {
                pub_key,
                reward_address,
                owner_address,
            } => vec![
                pub_key_item(pub_key)?,
                address_item(reward_address)?,
                address_item(owner_address)?,
            ],
        };

        Ok(RlpItem::list(items))
    }

    /// Reconstructs typed data from a decoded data list.
    pub fn from_rlp(tx_type: u8, item: &RlpItem) -> Result<Self, TxError> {
        let fields = item.as_list()?;

        match tx_type {
            1 => {
                expect_fields(fields, 3)?;
                Ok(TxData::Send {
                    coin: decode_coin(&fields[0])?,
                    to: decode_address(&fields[1])?,
                    value: fields[2].as_u256()?,
                })
            }
            2 => {
                expect_fields(fields, 4)?;
                Ok(TxData::Sell {
                    coin_to_sell: decode_coin(&fields[0])?,
                    value_to_sell: fields[1].as_u256()?,
                    coin_to_buy: decode_coin(&fields[2])?,
                    min_value_to_buy: fields[3].as_u256()?,
                })
            }
            3 => {
                expect_fields(fields, 3)?;
                Ok(TxData::SellAll {
                    coin_to_sell: decode_coin(&fields[0])?,
                    coin_to_buy: decode_coin(&fields[1])?,
                    min_value_to_buy: fields[2].as_u256()?,
                })
            }
            4 => {
                expect_fields(fields, 4)?;
                Ok(TxData::Buy {
                    coin_to_buy: decode_coin(&fields[0])?,
                    value_to_buy: fields[1].as_u256()?,
                    coin_to_sell: decode_coin(&fields[2])?,
                    max_value_to_sell: fields[3].as_u256()?,
                })
            }
            5 => {
                expect_fields(fields, 6)?;
                Ok(TxData::CreateCoin {
                    name: decode_utf8(&fields[0])?,
                    symbol: decode_coin(&fields[1])?,
                    initial_amount: fields[2].as_u256()?,
                    initial_reserve: fields[3].as_u256()?,
                    crr: decode_u32(&fields[4])?,
                    max_supply: fields[5].as_u256()?,
                })
            }
            6 => {
                expect_fields(fields, 5)?;
                Ok(TxData::DeclareCandidacy {
                    address: decode_address(&fields[0])?,
                    pub_key: decode_pub_key(&fields[1])?,
                    commission: decode_u32(&fields[2])?,
                    coin: decode_coin(&fields[3])?,
                    stake: fields[4].as_u256()?,
                })
            }
            7 => {
                expect_fields(fields, 3)?;
                Ok(TxData::Delegate {
                    pub_key: decode_pub_key(&fields[0])?,
                    coin: decode_coin(&fields[1])?,
                    stake: fields[2].as_u256()?,
                })
            }
            8 => {
                expect_fields(fields, 3)?;
                Ok(TxData::Unbond {
                    pub_key: decode_pub_key(&fields[0])?,
                    coin: decode_coin(&fields[1])?,
                    value: fields[2].as_u256()?,
                })
            }
            9 => {
                expect_fields(fields, 2)?;
                let proof = fields[1].as_bytes()?;
                if proof.len() != PROOF_BYTES {
                    return Err(TxError::InvalidProof(format!(
                        "expected {PROOF_BYTES} bytes, got {}",
                        proof.len()
                    )));
                }
                Ok(TxData::RedeemCheck {
                    check: prefix::add(&hex::encode(fields[0].as_bytes()?), prefix::CHECK)?,
                    proof: hex::encode(proof),
                })
            }
            10 => {
                expect_fields(fields, 1)?;
                Ok(TxData::SetCandidateOn {
                    pub_key: decode_pub_key(&fields[0])?,
                })
            }
            11 => {
                expect_fields(fields, 1)?;
                Ok(TxData::SetCandidateOff {
                    pub_key: decode_pub_key(&fields[0])?,
                })
            }
            12 => {
                expect_fields(fields, 3)?;
                let weights = fields[1]
                    .as_list()?
                    .iter()
                    .map(decode_u16)
                    .collect::<Result<Vec<_>, _>>()?;
                let addresses = fields[2]
                    .as_list()?
                    .iter()
                    .map(decode_address)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(TxData::CreateMultisig {
                    threshold: decode_u16(&fields[0])?,
                    weights,
                    addresses,
                })
            }
            13 => {
                expect_fields(fields, 1)?;
                let recipients = fields[0]
                    .as_list()?
                    .iter()
                    .map(|entry| {
                        let parts = entry.as_list()?;
                        expect_fields(parts, 3)?;
                        Ok(MultisendRecipient {
                            coin: decode_coin(&parts[0])?,
                            to: decode_address(&parts[1])?,
                            value: parts[2].as_u256()?,
                        })
                    })
                    .collect::<Result<Vec<_>, TxError>>()?;
                Ok(TxData::Multisend { recipients })
            }
            14 => {
                expect_fields(fields, 3)?;
                Ok(TxData::EditCandidate {
                    pub_key: decode_pub_key(&fields[0])?,
                    reward_address: decode_address(&fields[1])?,
                    owner_address: decode_address(&fields[2])?,
                })
            }
            other => Err(TxError::UnknownTxType(other)),
        }
    }

    fn validate(&self) -> Result<(), TxError> {
        match self {
            TxData::CreateMultisig {
                threshold: _,
                weights,
                addresses,
            } => {
                if addresses.is_empty() || weights.len() != addresses.len() {
                    return Err(TxError::InvalidMultisigConfig(format!(
                        "{} weights for {} addresses",
                        weights.len(),
                        addresses.len()
                    )));
                }
                if let Some(weight) = weights.iter().find(|w| **w > MAX_MULTISIG_WEIGHT) {
                    return Err(TxError::InvalidMultisigConfig(format!(
                        "weight {weight} exceeds {MAX_MULTISIG_WEIGHT}"
                    )));
                }
                let mut seen = addresses.clone();
                seen.sort();
                seen.dedup();
                if seen.len() != addresses.len() {
                    return Err(TxError::InvalidMultisigConfig(
                        "duplicate owner addresses".into(),
                    ));
                }
            }
            TxData::CreateCoin { symbol, .. } => {
                if symbol.len() < 3 {
                    return Err(TxError::Util(minter_util::UtilError::InvalidCoinSymbol(
                        format!("'{symbol}' must be at least 3 characters"),
                    )));
                }
            }
            _ => {}
        }
        Ok(())
    }
}

fn expect_fields(fields: &[RlpItem], expected: usize) -> Result<(), TxError> {
    if fields.len() != expected {
        return Err(TxError::InvalidRlp(format!(
            "data list has {} fields, expected {expected}",
            fields.len()
        )));
    }
    Ok(())
}

fn coin_item(symbol: &str) -> Result<RlpItem, TxError> {
    Ok(RlpItem::bytes(coin::encode_coin_name(symbol)?.to_vec()))
}

fn address_item(addr: &str) -> Result<RlpItem, TxError> {
    Ok(RlpItem::bytes(address::parse_address(addr)?.to_vec()))
}

fn pub_key_item(pub_key: &str) -> Result<RlpItem, TxError> {
    Ok(RlpItem::bytes(candidate_key(pub_key)?.to_vec()))
}

/// Parses an `Mp`-prefixed 32-byte candidate public key.
fn candidate_key(pub_key: &str) -> Result<[u8; CANDIDATE_KEY_BYTES], TxError> {
    let hex_part = prefix::require(pub_key, prefix::PUBLIC_KEY)?;
    let bytes = hex::decode(hex_part)
        .map_err(|e| TxError::InvalidPublicKey(format!("invalid hex: {e}")))?;
    bytes.try_into().map_err(|_| {
        TxError::InvalidPublicKey(format!("expected {CANDIDATE_KEY_BYTES} bytes"))
    })
}

fn proof_bytes(proof: &str) -> Result<Vec<u8>, TxError> {
    let bytes =
        hex::decode(proof).map_err(|e| TxError::InvalidProof(format!("invalid hex: {e}")))?;
    if bytes.len() != PROOF_BYTES {
        return Err(TxError::InvalidProof(format!(
            "expected {PROOF_BYTES} bytes, got {}",
            bytes.len()
        )));
    }
    Ok(bytes)
}

fn decode_coin(item: &RlpItem) -> Result<String, TxError> {
    Ok(coin::decode_coin_name(item.as_bytes()?)?)
}

fn decode_address(item: &RlpItem) -> Result<String, TxError> {
    let bytes: [u8; 20] = item
        .as_bytes()?
        .try_into()
        .map_err(|_| TxError::InvalidRlp("address must be 20 bytes".into()))?;
    Ok(address::format_address(&bytes))
}

fn decode_pub_key(item: &RlpItem) -> Result<String, TxError> {
    let bytes = item.as_bytes()?;
    if bytes.len() != CANDIDATE_KEY_BYTES {
        return Err(TxError::InvalidRlp(format!(
            "public key must be {CANDIDATE_KEY_BYTES} bytes"
        )));
    }
    Ok(prefix::add(&hex::encode(bytes), prefix::PUBLIC_KEY)?)
}

fn decode_utf8(item: &RlpItem) -> Result<String, TxError> {
    String::from_utf8(item.as_bytes()?.to_vec())
        .map_err(|_| TxError::InvalidRlp("expected UTF-8 text".into()))
}

fn decode_u32(item: &RlpItem) -> Result<u32, TxError> {
    u32::try_from(item.as_u64()?)
        .map_err(|_| TxError::InvalidRlp("integer wider than 32 bits".into()))
}

fn decode_u16(item: &RlpItem) -> Result<u16, TxError> {
    u16::try_from(item.as_u64()?)
        .map_err(|_| TxError::InvalidRlp("integer wider than 16 bits".into()))
}
