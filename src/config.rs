// Configuration
// Tunable limits for key generation and settings for the interactive shell

/// Largest phi multiplier tried when deriving the private exponent.
pub const MAXIMUM_COEFFICIENT: u64 = 10;

/// Attempts made before key generation gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Command that ends the interactive loop.
pub const EXIT_COMMAND: &str = "/e";

/// Configuration for building a cipher
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CipherConfig {
    /// Upper bound (inclusive) on k in `(phi * k + 1) / e`.
    /// Larger values find more private keys but produce larger exponents.
    pub maximum_coefficient: u64,
    /// `None` retries forever.
    pub max_attempts: Option<usize>,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            maximum_coefficient: MAXIMUM_COEFFICIENT,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }
}

impl CipherConfig {
    pub fn with_maximum_coefficient(mut self, coefficient: u64) -> Self {
        self.maximum_coefficient = coefficient;
        self
    }

    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Retry until a key is found.
    pub fn unbounded(mut self) -> Self {
        self.max_attempts = None;
        self
    }
}

/// Configuration for the interactive shell
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    pub exit_command: String,
    /// Print ciphertext values as hex instead of decimal.
    pub hex: bool,
    pub cipher: CipherConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            exit_command: EXIT_COMMAND.to_string(),
            hex: false,
            cipher: CipherConfig::default(),
        }
    }
}

impl ShellConfig {
    pub fn with_exit_command(mut self, command: impl Into<String>) -> Self {
        self.exit_command = command.into();
        self
    }

    pub fn with_hex(mut self, hex: bool) -> Self {
        self.hex = hex;
        self
    }

    pub fn with_cipher(mut self, cipher: CipherConfig) -> Self {
        self.cipher = cipher;
        self
    }
}
