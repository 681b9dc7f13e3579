use crate::error::UtilError;

/// Wallet address prefix.
pub const ADDRESS: &str = "Mx";

/// Public key prefix.
pub const PUBLIC_KEY: &str = "Mp";

/// Redeemable check prefix.
pub const CHECK: &str = "Mc";

/// Transaction hash prefix.
pub const TRANSACTION: &str = "Mt";

const KNOWN_PREFIXES: [&str; 4] = [ADDRESS, PUBLIC_KEY, CHECK, TRANSACTION];

/// Prepends one of the four known prefixes to `value`.
///
/// Any other prefix is rejected.
pub fn add(value: &str, prefix: &str) -> Result<String, UtilError> {
    if !KNOWN_PREFIXES.contains(&prefix) {
        return Err(UtilError::InvalidPrefix(prefix.to_string()));
    }
    Ok(format!("{prefix}{value}"))
}

/// Strips a leading known prefix from `value`, if present.
///
/// Idempotent: un-prefixed input is returned unchanged.
pub fn strip(value: &str) -> &str {
    for prefix in KNOWN_PREFIXES {
        if let Some(rest) = value.strip_prefix(prefix) {
            return rest;
        }
    }
    value
}

/// Strips `prefix` from `value`, failing if the prefix is absent.
pub fn require<'a>(value: &'a str, prefix: &str) -> Result<&'a str, UtilError> {
    value
        .strip_prefix(prefix)
        .ok_or_else(|| UtilError::InvalidPrefix(format!("expected '{prefix}' in '{value}'")))
}
