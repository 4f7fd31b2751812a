//! Hybrid RSA + AES-CBC envelope.
//!
//! A one-time symmetric key encrypts the payload; the key itself is
//! PKCS#1 v1.5 padded and wrapped with RSA. The wire format is
//!
//! ```text
//! EK (k bytes) || IV (16 bytes) || C (multiple of 16 bytes)
//! ```
//!
//! where `k` is the modulus size in bytes.
//!
//! # ⚠️ No integrity protection
//!
//! There is no MAC. The CBC padding check is the only thing standing between
//! a corrupted envelope and garbage output, and a mismatched key pair can,
//! rarely, yield a well-formed but wrong one-time key and plaintext.

mod cipher;
mod one_time_key;

pub use self::one_time_key::{OneTimeKey, SymmetricKeySize};

use rand_core::CryptoRngCore;

use crate::algorithms::pkcs1v15::{pkcs1v15_encrypt_pad, pkcs1v15_encrypt_unpad};
use crate::algorithms::rsa::{decrypt_block, encrypt_block};
use crate::errors::{Error, Result};
use crate::observer::{Event, NoopObserver, Observer};
use crate::traits::{PrivateKeyParts, PublicKeyParts};
use crate::IV_LEN;

/// Borrowed view over the three parts of a serialized envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Envelope<'a> {
    wrapped_key: &'a [u8],
    iv: &'a [u8; IV_LEN],
    ciphertext: &'a [u8],
}

impl<'a> Envelope<'a> {
    /// Split `bytes` for a modulus of `k` bytes.
    ///
    /// Fails with [`Error::MalformedEnvelope`] if fewer than `k + 16` bytes are given.
    pub fn parse(bytes: &'a [u8], k: usize) -> Result<Self> {
        let header_len = k.checked_add(IV_LEN).ok_or(Error::MalformedEnvelope)?;
        if bytes.len() < header_len {
            return Err(Error::MalformedEnvelope);
        }

        let (wrapped_key, rest) = bytes.split_at(k);
        let (iv, ciphertext) = rest.split_at(IV_LEN);
        let iv = iv.try_into().map_err(|_| Error::MalformedEnvelope)?;

        Ok(Self {
            wrapped_key,
            iv,
            ciphertext,
        })
    }

    /// RSA-wrapped, PKCS#1-padded one-time key.
    pub fn wrapped_key(&self) -> &'a [u8] {
        self.wrapped_key
    }

    /// CBC initialization vector.
    pub fn iv(&self) -> &'a [u8; IV_LEN] {
        self.iv
    }

    /// Symmetric ciphertext.
    pub fn ciphertext(&self) -> &'a [u8] {
        self.ciphertext
    }
}

/// Encrypts and decrypts envelopes, reporting progress to an [`Observer`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HybridEnvelope<O = NoopObserver> {
    observer: O,
}

impl HybridEnvelope {
    /// Envelope processing without observation.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: Observer> HybridEnvelope<O> {
    /// Envelope processing that reports [`Event`]s to `observer`.
    pub fn with_observer(observer: O) -> Self {
        Self { observer }
    }

    /// Encrypt `msg` for the holder of `pub_key`'s private half.
    ///
    /// A fresh IV and fresh padding bytes are drawn from `rng` on every call,
    /// so encrypting the same message twice gives different envelopes.
    pub fn encrypt<R, K>(
        &self,
        rng: &mut R,
        pub_key: &K,
        one_time_key: &OneTimeKey,
        msg: &[u8],
    ) -> Result<Vec<u8>>
    where
        R: CryptoRngCore + ?Sized,
        K: PublicKeyParts,
    {
        let k = pub_key.size();

        let mut iv = [0u8; IV_LEN];
        rng.fill_bytes(&mut iv);

        let ciphertext = cipher::encrypt(one_time_key, &iv, msg)?;
        self.observer.observe(&Event::PayloadEncrypted {
            plaintext_len: msg.len(),
            ciphertext_len: ciphertext.len(),
        });

        let em = pkcs1v15_encrypt_pad(rng, one_time_key.as_bytes(), k)?;
        let wrapped_key = encrypt_block(pub_key, &em)?;
        self.observer.observe(&Event::KeyWrapped {
            block_len: wrapped_key.len(),
        });

        let mut out = Vec::with_capacity(k + IV_LEN + ciphertext.len());
        out.extend_from_slice(&wrapped_key);
        out.extend_from_slice(&iv);
        out.extend_from_slice(&ciphertext);

        self.observer
            .observe(&Event::EnvelopeSealed { len: out.len() });
        Ok(out)
    }

    /// Decrypt an envelope produced by [`HybridEnvelope::encrypt`].
    ///
    /// Too-short input is [`Error::MalformedEnvelope`]. Anything else that goes
    /// wrong, from key unwrapping to the final padding check, is
    /// [`Error::Decryption`].
    pub fn decrypt<K: PrivateKeyParts>(&self, priv_key: &K, envelope: &[u8]) -> Result<Vec<u8>> {
        let envelope = Envelope::parse(envelope, priv_key.size())?;

        match open(priv_key, &envelope) {
            Ok(plaintext) => {
                self.observer.observe(&Event::EnvelopeOpened {
                    plaintext_len: plaintext.len(),
                });
                Ok(plaintext)
            }
            Err(_) => {
                self.observer.observe(&Event::DecryptionRejected);
                Err(Error::Decryption)
            }
        }
    }
}

fn open<K: PrivateKeyParts>(priv_key: &K, envelope: &Envelope<'_>) -> Result<Vec<u8>> {
    let k = priv_key.size();
    let em = decrypt_block(priv_key, envelope.wrapped_key())?;
    let key_bytes = zeroize::Zeroizing::new(pkcs1v15_encrypt_unpad(&em, k)?);
    let one_time_key = OneTimeKey::from_slice(&key_bytes)?;
    cipher::decrypt(&one_time_key, envelope.iv(), envelope.ciphertext())
}

/// Encrypt `msg` into an envelope. See [`HybridEnvelope::encrypt`].
pub fn encrypt<R, K>(
    rng: &mut R,
    pub_key: &K,
    one_time_key: &OneTimeKey,
    msg: &[u8],
) -> Result<Vec<u8>>
where
    R: CryptoRngCore + ?Sized,
    K: PublicKeyParts,
{
    HybridEnvelope::new().encrypt(rng, pub_key, one_time_key, msg)
}

/// Decrypt an envelope. See [`HybridEnvelope::decrypt`].
pub fn decrypt<K: PrivateKeyParts>(priv_key: &K, envelope: &[u8]) -> Result<Vec<u8>> {
    HybridEnvelope::new().decrypt(priv_key, envelope)
}
