//! RSA public keys and key pairs.

use core::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{Error, Result};
use crate::keygen::KeyGenerator;
use crate::pkcs1v15;
use crate::prime_source::RandomPrimes;
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Represents the public part of an RSA key.
///
/// Safe to share freely.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPublicKey"))]
pub struct PublicKey {
    /// Modulus
    n: BigUint,
    /// Public exponent
    e: BigUint,
}

/// Represents a whole RSA key pair: modulus, public and private exponents.
///
/// Immutable once built. The private exponent is wiped when the value is dropped.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawKeyPair"))]
pub struct KeyPair {
    /// Modulus
    n: BigUint,
    /// Public exponent
    e: BigUint,
    /// Private exponent
    d: BigUint,
}

/// Unvalidated components, checked on the way into [`PublicKey`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPublicKey {
    n: BigUint,
    e: BigUint,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPublicKey> for PublicKey {
    type Error = Error;

    fn try_from(raw: RawPublicKey) -> Result<Self> {
        PublicKey::new(raw.n, raw.e)
    }
}

/// Unvalidated components, checked on the way into [`KeyPair`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawKeyPair {
    n: BigUint,
    e: BigUint,
    d: BigUint,
}

#[cfg(feature = "serde")]
impl TryFrom<RawKeyPair> for KeyPair {
    type Error = Error;

    fn try_from(raw: RawKeyPair) -> Result<Self> {
        KeyPair::from_components(raw.n, raw.e, raw.d)
    }
}

impl PublicKeyParts for PublicKey {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn e(&self) -> &BigUint {
        &self.e
    }
}

impl PublicKey {
    /// Create a new public key from its components.
    pub fn new(n: BigUint, e: BigUint) -> Result<Self> {
        check_public(&n, &e)?;
        Ok(Self { n, e })
    }

    /// Encrypt a short message (at most `size() - 11` bytes) with PKCS#1 v1.5 padding.
    ///
    /// The output is exactly [`PublicKeyParts::size`] bytes.
    pub fn encrypt<R: CryptoRngCore + ?Sized>(&self, rng: &mut R, msg: &[u8]) -> Result<Vec<u8>> {
        pkcs1v15::encrypt(rng, self, msg)
    }
}

impl From<&KeyPair> for PublicKey {
    fn from(key_pair: &KeyPair) -> Self {
        PublicKey {
            n: key_pair.n.clone(),
            e: key_pair.e.clone(),
        }
    }
}

impl From<KeyPair> for PublicKey {
    fn from(key_pair: KeyPair) -> Self {
        (&key_pair).into()
    }
}

impl PublicKeyParts for KeyPair {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn e(&self) -> &BigUint {
        &self.e
    }
}

impl PrivateKeyParts for KeyPair {
    fn d(&self) -> &BigUint {
        &self.d
    }
}

impl KeyPair {
    /// Generate a new key pair of the given bit size, drawing both primes from `rng`.
    ///
    /// See [`KeyGenerator`] for custom prime sources or observers.
    pub fn new<R: CryptoRngCore + ?Sized>(rng: &mut R, bit_size: usize) -> Result<KeyPair> {
        KeyGenerator::new(RandomPrimes::new(rng)).generate(bit_size)
    }

    /// Rebuilds a key pair from previously generated components.
    ///
    /// Only checks that the values are in range; it cannot confirm that `d` is
    /// the inverse of `e` without the prime factors.
    pub fn from_components(n: BigUint, e: BigUint, d: BigUint) -> Result<KeyPair> {
        check_public(&n, &e)?;
        if d.is_zero() || d >= n {
            return Err(Error::InvalidParameter("private exponent out of range"));
        }

        Ok(KeyPair { n, e, d })
    }

    /// Get the public half of this key pair.
    pub fn to_public_key(&self) -> PublicKey {
        self.into()
    }

    /// Decrypt a block produced by [`PublicKey::encrypt`].
    ///
    /// Every failure is reported as [`Error::Decryption`].
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        pkcs1v15::decrypt(self, ciphertext)
    }
}

/// Checks `n > 1` and `1 < e < n`.
fn check_public(n: &BigUint, e: &BigUint) -> Result<()> {
    if n <= &BigUint::one() {
        return Err(Error::InvalidParameter("modulus too small"));
    }
    if e <= &BigUint::one() || e >= n {
        return Err(Error::InvalidParameter("public exponent out of range"));
    }

    Ok(())
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("n", &self.n)
            .field("e", &self.e)
            .field("d", &"[REDACTED]")
            .finish()
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.d.zeroize();
    }
}

impl ZeroizeOnDrop for KeyPair {}
