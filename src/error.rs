// Error types
// One error enum for the whole crate

/// Errors raised while building a cipher.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Message is blank or uninterpretable: {0}")]
    Message(String),

    #[error("No prime candidates in [{minimum}, {maximum})")]
    EmptySelection { minimum: u64, maximum: u64 },

    #[error("Could not generate e for phi = {phi}")]
    PublicKey { phi: u64 },

    #[error("Private key calculation for e = {e}, phi = {phi} reached coefficient {maximum_coefficient} before succeeding")]
    PrivateKey {
        e: u64,
        phi: u64,
        maximum_coefficient: u64,
    },

    #[error("Ciphertext is identical to plaintext")]
    IdentityCiphertext,

    #[error("Key generation gave up after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },
}

impl Error {
    /// Whether a fresh set of primes may fix this failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::PublicKey { .. } | Error::PrivateKey { .. } | Error::IdentityCiphertext
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
