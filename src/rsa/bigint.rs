// RSA Integer Helpers
// Modular exponentiation over num-bigint, integer roots and byte conversion

use num_bigint::BigUint;
use num_integer::{Integer, Roots};
use num_traits::{One, ToPrimitive};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Minimal big-endian bytes of a value (zero is a single 0x00)
pub fn to_bytes(n: u64) -> Vec<u8> {
    from_u64(n).to_bytes_be()
}

/// Square-and-multiply: base^exp mod modulus
///
/// The running square is a `BigUint`, so any `u64` modulus is safe.
/// A zero or unit modulus yields zero.
pub fn mod_pow(base: u64, mut exp: u64, modulus: u64) -> u64 {
    if modulus <= 1 {
        return 0;
    }

    let modulus = from_u64(modulus);
    let mut square = from_u64(base) % &modulus;
    let mut result = RsaBigInt::one();

    while exp > 0 {
        if exp.is_odd() {
            result = result * &square % &modulus;
        }
        square = &square * &square % &modulus;
        exp >>= 1;
    }

    result
        .to_u64()
        .unwrap_or_else(|| unreachable!("residue is below a u64 modulus"))
}

/// ⌊√n⌋
pub fn floor_sqrt(n: u64) -> u64 {
    n.sqrt()
}

/// ⌈√n⌉
pub fn ceil_sqrt(n: u64) -> u64 {
    let root = n.sqrt();
    if root * root < n {
        root + 1
    } else {
        root
    }
}
