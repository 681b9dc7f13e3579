use crate::error::UtilError;

/// Wire length of a coin symbol: shorter symbols are NUL-padded up to this.
pub const SYMBOL_BYTES: usize = 10;

/// Encodes a coin symbol into its fixed 10-byte wire form.
///
/// The symbol is upper-cased, then padded with `0x00` to exactly
/// [`SYMBOL_BYTES`]. Symbols longer than 10 bytes or containing
/// non-alphanumeric ASCII are rejected.
pub fn encode_coin_name(symbol: &str) -> Result<[u8; SYMBOL_BYTES], UtilError> {
    let upper = symbol.to_ascii_uppercase();

    if upper.is_empty() || upper.len() > SYMBOL_BYTES {
        return Err(UtilError::InvalidCoinSymbol(format!(
            "'{symbol}' must be 1 to {SYMBOL_BYTES} bytes"
        )));
    }
    if !upper.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(UtilError::InvalidCoinSymbol(format!(
            "'{symbol}' contains non-alphanumeric characters"
        )));
    }

    let mut out = [0u8; SYMBOL_BYTES];
    out[..upper.len()].copy_from_slice(upper.as_bytes());
    Ok(out)
}

/// Decodes a wire coin symbol by stripping the trailing NUL padding.
pub fn decode_coin_name(raw: &[u8]) -> Result<String, UtilError> {
    if raw.len() > SYMBOL_BYTES {
        return Err(UtilError::InvalidCoinSymbol(format!(
            "wire symbol is {} bytes, expected at most {SYMBOL_BYTES}",
            raw.len()
        )));
    }

    let end = raw.iter().rposition(|&b| b != 0).map_or(0, |p| p + 1);
    let stripped = &raw[..end];

    if !stripped.is_ascii() {
        return Err(UtilError::InvalidCoinSymbol(
            "wire symbol contains non-ASCII bytes".into(),
        ));
    }

    Ok(String::from_utf8_lossy(stripped).into_owned())
}
