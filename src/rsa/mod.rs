// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod cipher;
pub mod decrypt;
pub mod encrypt;
pub mod keygen;
pub mod primes;

pub use cipher::{retry, Cipher};
pub use decrypt::{codes_to_string, decrypt_codes, decrypt_to_string};
pub use encrypt::{apply, encrypt_codes, encrypt_string, message_codes};
pub use keygen::{generate_private, generate_public, totient, RsaPrivateKey, RsaPublicKey};
pub use primes::{
    is_prime, primes_between, primes_in, random_prime, relatively_prime, sieve, Sieve,
};
