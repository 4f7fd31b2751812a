#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Layers
//!
//! - [`KeyGenerator`] and [`KeyPair::new`]: textbook two-prime RSA key
//!   generation with `e = 65537`.
//! - [`PublicKey::encrypt`] / [`KeyPair::decrypt`]: PKCS#1 v1.5 encryption of
//!   a single short message.
//! - [`envelope`]: hybrid encryption of arbitrary-length messages under a
//!   caller-supplied [`OneTimeKey`].
//!
//! Raw RSA and the padding primitives are exposed under `hazmat` when the
//! feature of the same name is enabled.
//!
//! ## PKCS#1 v1.5 encryption
//!
//! ```
//! use rsa_envelope::{KeyPair, PublicKey};
//!
//! let mut rng = rand::thread_rng(); // rand@0.8
//!
//! let private_key = KeyPair::new(&mut rng, 1024).expect("failed to generate a key");
//! let public_key = PublicKey::from(&private_key);
//!
//! let data = b"hello world";
//! let enc_data = public_key.encrypt(&mut rng, &data[..]).expect("failed to encrypt");
//! assert_ne!(&data[..], &enc_data[..]);
//!
//! let dec_data = private_key.decrypt(&enc_data).expect("failed to decrypt");
//! assert_eq!(&data[..], &dec_data[..]);
//! ```
//!
//! ## Observing key generation
//!
//! ```
//! use rsa_envelope::{Event, KeyGenerator, RandomPrimes};
//!
//! let mut rng = rand::thread_rng();
//! let retries = std::cell::Cell::new(0);
//! let mut generator = KeyGenerator::new(RandomPrimes::new(&mut rng)).with_observer(|e: &Event| {
//!     if matches!(e, Event::DuplicatePrimeRejected | Event::TotientNotCoprime) {
//!         retries.set(retries.get() + 1);
//!     }
//! });
//! let _key_pair = generator.generate(1024).unwrap();
//! ```

#[cfg(doctest)]
pub struct ReadmeDoctests;

pub use num_bigint::BigUint;
pub use rand_core;

mod algorithms;
pub mod envelope;
pub mod errors;
mod key;
pub mod keygen;
pub mod observer;
mod pkcs1v15;
pub mod prime_source;
pub mod traits;

#[cfg(feature = "hazmat")]
pub mod hazmat;

pub use crate::{
    envelope::{Envelope, HybridEnvelope, OneTimeKey, SymmetricKeySize},
    errors::{Error, Result},
    key::{KeyPair, PublicKey},
    keygen::KeyGenerator,
    observer::{Event, NoopObserver, Observer, TracingObserver},
    prime_source::{PrimeSource, RandomPrimes},
};

/// Smallest modulus size, in bits, that key generation accepts.
pub const MIN_BITS: usize = 512;

/// Suggested modulus size, in bits, for new keys.
pub const DEFAULT_BITS: usize = 2048;

/// Public exponent of every generated key.
pub const PUBLIC_EXPONENT: u64 = 65_537;

/// Length of the CBC initialization vector carried in an envelope.
pub const IV_LEN: usize = 16;

/// Bytes of PKCS#1 v1.5 framing around a message: `0x00 0x02`, at least
/// eight padding bytes and the `0x00` separator.
pub const PKCS1_OVERHEAD: usize = 11;
