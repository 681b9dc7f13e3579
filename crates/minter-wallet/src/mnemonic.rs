use bip39::{Language, Mnemonic};
use rand::RngCore;
use zeroize::Zeroize;

use crate::error::WalletError;

/// Wallets always use 12-word mnemonics (128 bits of entropy).
pub const MNEMONIC_WORDS: usize = 12;

/// Generates a new 12-word BIP-39 mnemonic from OS entropy.
pub fn generate_mnemonic() -> Result<String, WalletError> {
    let mut entropy = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut entropy);
    let mnemonic = Mnemonic::from_entropy_in(Language::English, &entropy)
        .map_err(|e| WalletError::InvalidMnemonic(e.to_string()))?;
    entropy.zeroize();
    Ok(mnemonic.to_string())
}

/// Validates a mnemonic phrase: word list, checksum, and the 12-word count.
pub fn validate_mnemonic(phrase: &str) -> bool {
    match Mnemonic::parse_in_normalized(Language::English, phrase) {
        Ok(mnemonic) => mnemonic.word_count() == MNEMONIC_WORDS,
        Err(_) => false,
    }
}

/// Derives the 64-byte seed from a 12-word mnemonic.
///
/// The BIP-39 passphrase is always empty for this network.
pub fn mnemonic_to_seed(phrase: &str) -> Result<[u8; 64], WalletError> {
    let mnemonic = Mnemonic::parse_in_normalized(Language::English, phrase)
        .map_err(|e| WalletError::InvalidMnemonic(e.to_string()))?;

    if mnemonic.word_count() != MNEMONIC_WORDS {
        return Err(WalletError::InvalidMnemonic(format!(
            "expected {MNEMONIC_WORDS} words, got {}",
            mnemonic.word_count()
        )));
    }

    Ok(mnemonic.to_seed(""))
}

/// The full BIP-39 English word list, for client-side autocomplete.
pub fn word_list() -> &'static [&'static str] {
    Language::English.word_list()
}

/// Validates a single word against the BIP-39 English word list.
pub fn is_valid_word(word: &str) -> bool {
    Language::English.find_word(word).is_some()
}
