//! Key pair generation with a pluggable prime source.

use num_bigint::BigUint;

use crate::algorithms::generate::generate_key_with_exp;
use crate::errors::Result;
use crate::key::KeyPair;
use crate::observer::{NoopObserver, Observer};
use crate::prime_source::PrimeSource;
use crate::PUBLIC_EXPONENT;

/// Builds [`KeyPair`]s from primes supplied by a [`PrimeSource`].
///
/// ```
/// use rsa_envelope::{KeyGenerator, RandomPrimes, TracingObserver};
/// use rsa_envelope::traits::PublicKeyParts;
///
/// let mut rng = rand::thread_rng();
/// let mut generator = KeyGenerator::new(RandomPrimes::new(&mut rng))
///     .with_observer(TracingObserver);
/// let key_pair = generator.generate(1024).unwrap();
/// assert_eq!(key_pair.size(), 128);
/// ```
#[derive(Debug)]
pub struct KeyGenerator<S, O = NoopObserver> {
    source: S,
    observer: O,
}

impl<S: PrimeSource> KeyGenerator<S> {
    /// Generator drawing primes from `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            observer: NoopObserver,
        }
    }
}

impl<S: PrimeSource, O: Observer> KeyGenerator<S, O> {
    /// Report generation events to `observer`.
    pub fn with_observer<P: Observer>(self, observer: P) -> KeyGenerator<S, P> {
        KeyGenerator {
            source: self.source,
            observer,
        }
    }

    /// Generate a key pair whose modulus has `bit_size` bits, with `e = 65537`.
    ///
    /// `bit_size` must be even and at least [`MIN_BITS`](crate::MIN_BITS).
    pub fn generate(&mut self, bit_size: usize) -> Result<KeyPair> {
        let components = generate_key_with_exp(
            &mut self.source,
            &self.observer,
            bit_size,
            BigUint::from(PUBLIC_EXPONENT),
        )?;
        KeyPair::from_components(components.n, components.e, components.d)
    }

    /// Consume the generator, returning its prime source.
    pub fn into_source(self) -> S {
        self.source
    }
}
