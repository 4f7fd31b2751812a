//! Optional observability hook.
//!
//! Nothing in this crate prints or logs on its own. Callers that want to
//! follow key generation or envelope processing pass an [`Observer`]; the
//! default [`NoopObserver`] discards every event.
//!
//! Events never carry key material, and a rejected decryption is reported as
//! a single [`Event::DecryptionRejected`] regardless of which step failed.

/// Something that happened inside key generation or envelope processing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Event {
    /// A candidate prime factor was drawn from the prime source.
    PrimeDrawn {
        /// Requested size of the prime.
        bits: usize,
    },
    /// The second factor equalled the first and was redrawn.
    DuplicatePrimeRejected,
    /// The totient shared a factor with the public exponent; a factor was redrawn.
    TotientNotCoprime,
    /// A key pair was produced.
    KeyPairGenerated {
        /// Bit length of the resulting modulus.
        modulus_bits: usize,
    },
    /// The payload was encrypted under the one-time key.
    PayloadEncrypted {
        /// Length of the plaintext.
        plaintext_len: usize,
        /// Length of the symmetric ciphertext.
        ciphertext_len: usize,
    },
    /// The one-time key was padded and wrapped with RSA.
    KeyWrapped {
        /// Length of the wrapped key block.
        block_len: usize,
    },
    /// A complete envelope was produced.
    EnvelopeSealed {
        /// Total envelope length.
        len: usize,
    },
    /// An envelope was decrypted successfully.
    EnvelopeOpened {
        /// Length of the recovered plaintext.
        plaintext_len: usize,
    },
    /// An envelope was rejected during decryption.
    DecryptionRejected,
}

/// Receives [`Event`]s.
pub trait Observer {
    /// Called synchronously for every event.
    fn observe(&self, event: &Event);
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    #[inline]
    fn observe(&self, _event: &Event) {}
}

impl<F: Fn(&Event)> Observer for F {
    fn observe(&self, event: &Event) {
        self(event)
    }
}

/// Observer that forwards events to [`tracing`] at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn observe(&self, event: &Event) {
        match *event {
            Event::PrimeDrawn { bits } => {
                tracing::debug!(target: "rsa_envelope", bits, "prime drawn")
            }
            Event::DuplicatePrimeRejected => {
                tracing::debug!(target: "rsa_envelope", "duplicate prime rejected")
            }
            Event::TotientNotCoprime => {
                tracing::debug!(target: "rsa_envelope", "totient not coprime to e, redrawing")
            }
            Event::KeyPairGenerated { modulus_bits } => {
                tracing::debug!(target: "rsa_envelope", modulus_bits, "key pair generated")
            }
            Event::PayloadEncrypted {
                plaintext_len,
                ciphertext_len,
            } => tracing::debug!(
                target: "rsa_envelope",
                plaintext_len,
                ciphertext_len,
                "payload encrypted"
            ),
            Event::KeyWrapped { block_len } => {
                tracing::debug!(target: "rsa_envelope", block_len, "one-time key wrapped")
            }
            Event::EnvelopeSealed { len } => {
                tracing::debug!(target: "rsa_envelope", len, "envelope sealed")
            }
            Event::EnvelopeOpened { plaintext_len } => {
                tracing::debug!(target: "rsa_envelope", plaintext_len, "envelope opened")
            }
            Event::DecryptionRejected => {
                tracing::debug!(target: "rsa_envelope", "envelope rejected")
            }
        }
    }
}
