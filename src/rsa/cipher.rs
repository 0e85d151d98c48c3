// RSA Cipher
// Full key generation and encryption for one message, restarting on failure

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;

use super::bigint::ceil_sqrt;
use super::decrypt::{codes_to_string, decrypt_codes};
use super::encrypt::{encrypt_codes, message_codes};
use super::keygen::{generate_private, generate_public, totient, RsaPrivateKey, RsaPublicKey};
use super::primes::{primes_between, random_prime};
use crate::config::CipherConfig;
use crate::error::{Error, Result};

/// Prime pools up to this size are checked pair by pair before sampling.
const EXHAUSTIVE_POOL: usize = 8;

/// Runs `attempt` until it succeeds or fails with an unrecoverable error.
///
/// The closure receives the 1-based attempt number. With `max_attempts` set,
/// gives up with [`Error::AttemptsExhausted`] once that many attempts failed.
pub fn retry<T, F>(max_attempts: Option<usize>, mut attempt: F) -> Result<T>
where
    F: FnMut(usize) -> Result<T>,
{
    let mut attempts = 0;
    loop {
        if max_attempts.is_some_and(|max| attempts >= max) {
            return Err(Error::AttemptsExhausted { attempts });
        }
        attempts += 1;

        match attempt(attempts) {
            Err(err) if err.is_recoverable() => {
                debug!(attempt = attempts, error = %err, "discarding attempt");
            }
            result => return result,
        }
    }
}

/// An RSA key pair generated for, and applied to, a single message.
///
/// Every field is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cipher {
    m: Vec<u64>,
    p: u64,
    q: u64,
    n: u64,
    phi: u64,
    e: u64,
    d: u64,
    c: Vec<u64>,
}

impl Cipher {
    /// Build a cipher for `message` with default limits and the OS random source.
    pub fn new(message: &str) -> Result<Self> {
        Self::with_config(message, &CipherConfig::default())
    }

    pub fn with_config(message: &str, config: &CipherConfig) -> Result<Self> {
        Self::with_rng(message, config, &mut OsRng)
    }

    /// Build a cipher drawing primes from `rng`.
    ///
    /// # Errors
    ///
    /// - [`Error::Message`] if the message is empty, its largest code leaves
    ///   fewer than two primes to choose from, or no pair from a small pool
    ///   can encrypt it.
    /// - [`Error::AttemptsExhausted`] if `config.max_attempts` runs out.
    pub fn with_rng<R>(message: &str, config: &CipherConfig, rng: &mut R) -> Result<Self>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let m = message_codes(message)?;
        let largest = m.iter().copied().max().unwrap_or_default();

        // p, q ≥ ⌈√largest⌉ keeps n = p·q above every code
        let minimum = ceil_sqrt(largest);
        let maximum = largest;
        let pool = primes_between(minimum, maximum)?;
        if pool.len() < 2 {
            return Err(Error::Message(format!(
                "fewer than two primes in [{}, {})",
                minimum, maximum
            )));
        }
        if pool.len() <= EXHAUSTIVE_POOL && !Self::any_pair_works(&m, &pool, config) {
            return Err(Error::Message(format!(
                "no prime pair in [{}, {}) can encrypt the message",
                minimum, maximum
            )));
        }

        let cipher = retry(config.max_attempts, |_| {
            Self::attempt(&m, minimum, maximum, config.maximum_coefficient, &mut *rng)
        })?;
        debug!(p = cipher.p, q = cipher.q, e = cipher.e, d = cipher.d, "cipher ready");
        Ok(cipher)
    }

    /// Whether some pair of distinct primes from `pool` yields a cipher.
    ///
    /// Without one, the retry loop could never finish.
    fn any_pair_works(m: &[u64], pool: &[u64], config: &CipherConfig) -> bool {
        pool.iter().enumerate().any(|(index, &p)| {
            pool[index + 1..]
                .iter()
                .any(|&q| Self::from_primes(m, p, q, config.maximum_coefficient).is_ok())
        })
    }

    /// One pass from prime sampling to the identity check.
    fn attempt<R>(
        m: &[u64],
        minimum: u64,
        maximum: u64,
        maximum_coefficient: u64,
        rng: &mut R,
    ) -> Result<Self>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let p = random_prime(rng, minimum, maximum, &[])?;
        let q = random_prime(rng, minimum, maximum, &[p])?;
        Self::from_primes(m, p, q, maximum_coefficient)
    }

    /// Derives keys and ciphertext from a fixed prime pair.
    fn from_primes(m: &[u64], p: u64, q: u64, maximum_coefficient: u64) -> Result<Self> {
        let n = p * q;
        let phi = totient(p, q);

        let e = generate_public(phi)?;
        let d = generate_private(e, phi, maximum_coefficient)?;
        let c = encrypt_codes(m, &RsaPublicKey { n, e });

        if c == m {
            return Err(Error::IdentityCiphertext);
        }

        Ok(Self {
            m: m.to_vec(),
            p,
            q,
            n,
            phi,
            e,
            d,
            c,
        })
    }

    /// Plaintext character codes
    pub fn m(&self) -> &[u64] {
        &self.m
    }

    pub fn p(&self) -> u64 {
        self.p
    }

    pub fn q(&self) -> u64 {
        self.q
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn phi(&self) -> u64 {
        self.phi
    }

    pub fn e(&self) -> u64 {
        self.e
    }

    pub fn d(&self) -> u64 {
        self.d
    }

    /// Ciphertext values, one per plaintext code
    pub fn c(&self) -> &[u64] {
        &self.c
    }

    pub fn public_key(&self) -> RsaPublicKey {
        RsaPublicKey {
            n: self.n,
            e: self.e,
        }
    }

    pub fn private_key(&self) -> RsaPrivateKey {
        RsaPrivateKey {
            n: self.n,
            d: self.d,
        }
    }

    /// Recover the plaintext codes from the ciphertext.
    pub fn decrypt(&self) -> Vec<u64> {
        decrypt_codes(&self.c, &self.private_key())
    }

    pub fn decrypt_to_string(&self) -> Result<String> {
        codes_to_string(&self.decrypt())
    }
}
