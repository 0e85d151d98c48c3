// RSA Key Generation
// Totient and brute-force derivation of the public and private exponents

use tracing::trace;

use super::primes::relatively_prime;
use crate::error::{Error, Result};

/// RSA Public Key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub n: u64, // Modulus
    pub e: u64, // Public exponent
}

/// RSA Private Key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub n: u64, // Modulus (same as public)
    pub d: u64, // Private exponent
}

impl RsaPublicKey {
    /// Encrypt a sequence of character codes with this key
    pub fn encrypt(&self, codes: &[u64]) -> Vec<u64> {
        super::encrypt::encrypt_codes(codes, self)
    }
}

impl RsaPrivateKey {
    /// Decrypt a sequence of ciphertext values with this key
    pub fn decrypt(&self, codes: &[u64]) -> Vec<u64> {
        super::decrypt::decrypt_codes(codes, self)
    }
}

/// Euler's totient of `p * q` for primes `p` and `q`: (p-1)(q-1)
pub fn totient(p: u64, q: u64) -> u64 {
    (p - 1) * (q - 1)
}

/// Smallest e in [3, phi) that is relatively prime to phi.
pub fn generate_public(phi: u64) -> Result<u64> {
    let e = (3..phi)
        .find(|candidate| relatively_prime(*candidate, phi))
        .ok_or(Error::PublicKey { phi })?;
    trace!(phi, e, "derived public exponent");
    Ok(e)
}

/// Derives d from `(phi * k + 1) / e` for the first k in
/// `3..=maximum_coefficient` that divides exactly, so that e * d ≡ 1 (mod phi).
///
/// The bound keeps d small: d is later used as an exponent. A candidate that
/// would overflow ends the search as well.
pub fn generate_private(e: u64, phi: u64, maximum_coefficient: u64) -> Result<u64> {
    let failure = Error::PrivateKey {
        e,
        phi,
        maximum_coefficient,
    };
    if e == 0 {
        return Err(failure);
    }

    for coefficient in 3..=maximum_coefficient {
        let Some(attempt) = phi.checked_mul(coefficient).and_then(|x| x.checked_add(1)) else {
            break;
        };
        if attempt % e == 0 {
            let d = attempt / e;
            trace!(e, phi, coefficient, d, "derived private exponent");
            return Ok(d);
        }
    }

    Err(failure)
}
