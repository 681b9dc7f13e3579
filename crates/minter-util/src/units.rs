use alloy_primitives::U256;

use crate::error::UtilError;

/// Number of PIP in one BIP (10^18).
pub const PIP: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Decimal places of the base unit.
const BIP_DECIMALS: i64 = 18;

/// Converts a decimal BIP amount into an integer number of PIP.
///
/// Accepts integer strings (`"10"`), decimal strings (`"1.23456789"`), and
/// exponent notation as produced by shortest-exact float formatting
/// (`"1e-07"`). Fractional digits beyond the 18th are truncated toward zero.
/// Negative amounts are rejected.
pub fn to_pip(value: &str) -> Result<U256, UtilError> {
    let input = value.trim();
    let invalid = || UtilError::InvalidAmountKind(format!("'{value}' is not a valid BIP amount"));

    let rest = input.strip_prefix('+').unwrap_or(input);
    if rest.starts_with('-') {
        return Err(UtilError::InvalidAmountKind(format!(
            "'{value}' is negative"
        )));
    }

    let (mantissa, exponent) = match rest.find(['e', 'E']) {
        Some(pos) => {
            let exp: i64 = rest[pos + 1..].parse().map_err(|_| invalid())?;
            (&rest[..pos], exp)
        }
        None => (rest, 0),
    };

    let (int_part, frac_part) = match mantissa.find('.') {
        Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
        None => (mantissa, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    // Trailing fraction zeros carry no value; dropping them keeps the scaled
    // integer small for inputs like "1.000000000000000000000000".
    let frac = frac_part.trim_end_matches('0');
    let shift = (frac.len() as i64)
        .checked_sub(exponent)
        .ok_or_else(invalid)?;

    let digits = format!("{}{}", int_part.trim_start_matches('0'), frac);
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }
    let scaled = U256::from_str_radix(&digits, 10).map_err(|_| {
        UtilError::InvalidAmountKind(format!("'{value}' does not fit in 256 bits"))
    })?;

    if shift <= BIP_DECIMALS {
        let scale = pow10((BIP_DECIMALS - shift) as u64)
            .ok_or_else(|| UtilError::InvalidAmountKind(format!("'{value}' overflows")))?;
        scaled
            .checked_mul(scale)
            .ok_or_else(|| UtilError::InvalidAmountKind(format!("'{value}' overflows")))
    } else {
        match pow10((shift - BIP_DECIMALS) as u64) {
            // Integer division truncates toward zero.
            Some(divisor) => Ok(scaled / divisor),
            // The whole value sits below one PIP.
            None => Ok(U256::ZERO),
        }
    }
}

/// Converts a whole number of BIP into PIP.
pub fn to_pip_int(value: u128) -> U256 {
    U256::from(value) * PIP
}

/// Converts an integer number of PIP into its decimal BIP representation.
///
/// The conversion is exact; the result is a plain decimal string with
/// trailing fraction zeros removed (`"1.23456789"`, never `"1.23e0"`).
pub fn to_bip(value: U256) -> String {
    let int = value / PIP;
    let frac = value % PIP;

    if frac.is_zero() {
        return int.to_string();
    }

    let mut frac_str = format!("{:0>18}", frac.to_string());
    while frac_str.ends_with('0') {
        frac_str.pop();
    }
    format!("{int}.{frac_str}")
}

/// Converts a PIP digit-string into its decimal BIP representation.
///
/// Anything but an unsigned integer string is rejected.
pub fn to_bip_str(value: &str) -> Result<String, UtilError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UtilError::InvalidAmountKind(format!(
            "'{value}' is not a valid PIP amount"
        )));
    }
    let pip = U256::from_str_radix(value, 10).map_err(|_| {
        UtilError::InvalidAmountKind(format!("'{value}' does not fit in 256 bits"))
    })?;
    Ok(to_bip(pip))
}

fn pow10(exp: u64) -> Option<U256> {
    U256::from(10u64).checked_pow(U256::from(exp))
}
