// RSA Decryption Implementation
// m = c^d mod n, then back to text

use super::encrypt::apply;
use super::keygen::RsaPrivateKey;
use crate::error::{Error, Result};

/// Decrypt ciphertext values with a private key
pub fn decrypt_codes(codes: &[u64], private_key: &RsaPrivateKey) -> Vec<u64> {
    apply(codes, private_key.d, private_key.n)
}

/// Turn character codes back into a string
pub fn codes_to_string(codes: &[u64]) -> Result<String> {
    codes
        .iter()
        .map(|&code| {
            u32::try_from(code)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| Error::Message(format!("{} is not a character code", code)))
        })
        .collect()
}

/// Decrypt ciphertext values to a string
pub fn decrypt_to_string(codes: &[u64], private_key: &RsaPrivateKey) -> Result<String> {
    codes_to_string(&decrypt_codes(codes, private_key))
}
