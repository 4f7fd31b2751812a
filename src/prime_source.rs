//! Sources of probable primes for key generation.

use num_bigint::{BigUint, RandPrime};
use rand_core::CryptoRngCore;

/// A strategy for drawing the prime factors of a new modulus.
///
/// Key generation asks the source for one prime at a time and does its own
/// rejection (duplicate factors, totients sharing a factor with the public
/// exponent) by simply asking again. Tests can substitute a fixed sequence.
pub trait PrimeSource {
    /// Returns a probable prime of exactly `bit_size` bits.
    fn next_prime(&mut self, bit_size: usize) -> BigUint;
}

/// Draws primes from a cryptographically secure random number generator.
///
/// Candidates have their two most significant bits set, so the product of
/// two `b`-bit primes is always `2b` bits long, and are accepted after 20
/// Miller-Rabin rounds plus a Baillie-PSW test.
pub struct RandomPrimes<'a, R: CryptoRngCore + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: CryptoRngCore + ?Sized> RandomPrimes<'a, R> {
    /// Wraps the given random source.
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: CryptoRngCore + ?Sized> PrimeSource for RandomPrimes<'_, R> {
    fn next_prime(&mut self, bit_size: usize) -> BigUint {
        self.rng.gen_prime(bit_size)
    }
}

impl<S: PrimeSource + ?Sized> PrimeSource for &mut S {
    fn next_prime(&mut self, bit_size: usize) -> BigUint {
        (**self).next_prime(bit_size)
    }
}
