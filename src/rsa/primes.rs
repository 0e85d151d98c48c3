// Prime Number Utilities
// Trial-division primality, coprimality, a lazy sieve and random prime selection

use rand::seq::SliceRandom;
use rand::{CryptoRng, RngCore};

use super::bigint::floor_sqrt;
use crate::error::{Error, Result};

/// Returns whether `number` is prime.
///
/// Primality is not defined for values below 2, so those are never prime.
pub fn is_prime(number: u64) -> bool {
    if number < 2 {
        return false;
    }
    (2..=floor_sqrt(number)).all(|factor| number % factor != 0)
}

/// Returns whether `a` and `b` share no factor other than 1.
///
/// Every candidate up to `min(a, b)` is tried directly.
pub fn relatively_prime(a: u64, b: u64) -> bool {
    !(2..=a.min(b)).any(|factor| a % factor == 0 && b % factor == 0)
}

/// Lazy sieve of Eratosthenes over `[0, limit)`.
///
/// Composites are struck from the square of each prime as that prime is
/// reached, so the marking array is only complete once iteration finishes.
#[derive(Debug, Clone)]
pub struct Sieve {
    marks: Vec<bool>,
    cursor: usize,
}

impl Sieve {
    fn new(limit: usize) -> Self {
        let mut marks = vec![true; limit];
        // 0 and 1
        marks.iter_mut().take(2).for_each(|mark| *mark = false);
        Self { marks, cursor: 0 }
    }

    fn strike_multiples(&mut self, prime: usize) {
        let Some(square) = prime.checked_mul(prime) else {
            return;
        };
        for index in (square..self.marks.len()).step_by(prime) {
            self.marks[index] = false;
        }
    }
}

impl Iterator for Sieve {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        while self.cursor < self.marks.len() {
            let number = self.cursor;
            self.cursor += 1;
            if self.marks[number] {
                self.strike_multiples(number);
                return Some(number as u64);
            }
        }
        None
    }
}

/// Primes strictly below `limit`, in increasing order.
pub fn sieve(limit: usize) -> Sieve {
    Sieve::new(limit)
}

/// Candidate primes in `[minimum, maximum)` that are not excluded.
fn candidates(minimum: u64, maximum: u64, exclusions: &[u64]) -> Result<Vec<u64>> {
    let limit =
        usize::try_from(maximum).map_err(|_| Error::EmptySelection { minimum, maximum })?;
    Ok(sieve(limit)
        .filter(|prime| *prime >= minimum && !exclusions.contains(prime))
        .collect())
}

/// Every prime in `[minimum, maximum)`, in increasing order.
pub fn primes_between(minimum: u64, maximum: u64) -> Result<Vec<u64>> {
    candidates(minimum, maximum, &[])
}

/// Number of primes in `[minimum, maximum)`.
pub fn primes_in(minimum: u64, maximum: u64) -> Result<usize> {
    Ok(primes_between(minimum, maximum)?.len())
}

/// Picks a prime uniformly from `[minimum, maximum)` that is not in `exclusions`.
///
/// # Errors
///
/// [`Error::EmptySelection`] if no prime is left to choose from.
pub fn random_prime<R>(rng: &mut R, minimum: u64, maximum: u64, exclusions: &[u64]) -> Result<u64>
where
    R: RngCore + CryptoRng + ?Sized,
{
    candidates(minimum, maximum, exclusions)?
        .choose(rng)
        .copied()
        .ok_or(Error::EmptySelection { minimum, maximum })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn trial_division(n: u64) -> bool {
        n >= 2 && (2..n).all(|d| n % d != 0)
    }

    #[test]
    fn test_is_prime() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(!is_prime(9));
        assert!(!is_prime(49));
        assert!(is_prime(65_537));

        for n in 0..2_000 {
            assert_eq!(is_prime(n), trial_division(n), "disagreement at {}", n);
        }
    }

    #[test]
    fn test_relatively_prime() {
        assert!(relatively_prime(3, 8));
        assert!(relatively_prime(9, 28));
        assert!(!relatively_prime(6, 9));
        assert!(!relatively_prime(5, 60));
        assert!(relatively_prime(1, 12));
    }

    #[test]
    fn test_sieve_matches_primality() {
        let primes: Vec<u64> = sieve(30).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);

        let primes: Vec<u64> = sieve(5_000).collect();
        let expected: Vec<u64> = (0..5_000).filter(|n| is_prime(*n)).collect();
        assert_eq!(primes, expected);
        assert!(primes.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_sieve_small_limits() {
        assert_eq!(sieve(0).count(), 0);
        assert_eq!(sieve(1).count(), 0);
        assert_eq!(sieve(2).count(), 0);
        assert_eq!(sieve(3).collect::<Vec<_>>(), vec![2]);
        // limit itself is excluded
        assert_eq!(sieve(7).last(), Some(5));
    }

    #[test]
    fn test_sieve_is_restartable() {
        let first: Vec<u64> = sieve(100).collect();
        let second: Vec<u64> = sieve(100).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 25);
    }

    #[test]
    fn test_random_prime_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let prime = random_prime(&mut rng, 9, 65, &[]).unwrap();
            assert!(is_prime(prime));
            assert!((9..65).contains(&prime));
        }
    }

    #[test]
    fn test_random_prime_exclusions() {
        let mut rng = StdRng::seed_from_u64(11);
        // [4, 11) holds 5 and 7 only
        for _ in 0..50 {
            assert_eq!(random_prime(&mut rng, 4, 11, &[5]).unwrap(), 7);
        }
    }

    #[test]
    fn test_random_prime_empty_selection() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            random_prime(&mut rng, 3, 5, &[3]),
            Err(Error::EmptySelection {
                minimum: 3,
                maximum: 5
            })
        );
        assert!(random_prime(&mut rng, 24, 29, &[]).is_err());
    }

    #[test]
    fn test_primes_in() {
        assert_eq!(primes_in(9, 65).unwrap(), 14);
        assert_eq!(primes_in(3, 5).unwrap(), 1);
        assert_eq!(primes_in(0, 0).unwrap(), 0);
        assert_eq!(primes_between(3, 6).unwrap(), vec![3, 5]);
        assert_eq!(primes_between(2, 4).unwrap(), vec![2, 3]);
    }
}
