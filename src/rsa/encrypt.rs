// RSA Encryption Implementation
// Textbook RSA applied code by code: c = m^e mod n

use super::bigint::mod_pow;
use super::keygen::RsaPublicKey;
use crate::error::{Error, Result};

/// Raise every value to `key` modulo `modulus`.
///
/// This is both RSA formulas: m^e mod n to encrypt and c^d mod n to decrypt.
pub fn apply(codes: &[u64], key: u64, modulus: u64) -> Vec<u64> {
    codes.iter().map(|&code| mod_pow(code, key, modulus)).collect()
}

/// Unicode scalar values of the characters in `message`
pub fn message_codes(message: &str) -> Result<Vec<u64>> {
    if message.is_empty() {
        return Err(Error::Message("message is empty".to_string()));
    }
    Ok(message.chars().map(|c| u64::from(u32::from(c))).collect())
}

/// Encrypt character codes with a public key
pub fn encrypt_codes(codes: &[u64], public_key: &RsaPublicKey) -> Vec<u64> {
    apply(codes, public_key.e, public_key.n)
}

/// Encrypt a string using an RSA public key
pub fn encrypt_string(message: &str, public_key: &RsaPublicKey) -> Result<Vec<u64>> {
    Ok(encrypt_codes(&message_codes(message)?, public_key))
}
