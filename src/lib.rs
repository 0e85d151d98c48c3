//! Textbook RSA over small integers.
//!
//! Primes are sized to the largest character code of the message, so every
//! value stays in a `u64` and the whole pipeline can be printed and checked by
//! hand. This is a teaching aid, not secure cryptography.
//!
//! ```rust,no_run
//! use easy_rsa::rsa::Cipher;
//!
//! let cipher = Cipher::new("hello").expect("message is not empty");
//! assert_eq!(cipher.decrypt_to_string().unwrap(), "hello");
//! ```

pub mod config;
pub mod error;
pub mod rsa;
pub mod ui;

pub use config::{CipherConfig, ShellConfig};
pub use error::{Error, Result};
pub use rsa::Cipher;
