//! PKCS#1 v1.5 encryption of single blocks, as described in [RFC8017 § 7.2].
//!
//! Suitable for short secrets such as symmetric keys; use the
//! [envelope](crate::envelope) for arbitrary-length messages.
//!
//! [RFC8017 § 7.2]: https://datatracker.ietf.org/doc/html/rfc8017#section-7.2

use rand_core::CryptoRngCore;

use crate::algorithms::pkcs1v15::{pkcs1v15_encrypt_pad, pkcs1v15_encrypt_unpad};
use crate::algorithms::rsa::{decrypt_block, encrypt_block};
use crate::errors::{Error, Result};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Encrypts the given message with RSA and the padding
/// scheme from PKCS#1 v1.5.  The message must be no longer than the
/// length of the public modulus minus 11 bytes.
#[inline]
pub(crate) fn encrypt<R: CryptoRngCore + ?Sized, K: PublicKeyParts>(
    rng: &mut R,
    pub_key: &K,
    msg: &[u8],
) -> Result<Vec<u8>> {
    let em = pkcs1v15_encrypt_pad(rng, msg, pub_key.size())?;
    encrypt_block(pub_key, &em)
}

/// Decrypts a plaintext using RSA and the padding scheme from PKCS#1 v1.5.
///
/// Whether the RSA step or the padding check rejected the input is not
/// revealed: both surface as [`Error::Decryption`].
#[inline]
pub(crate) fn decrypt<K: PrivateKeyParts>(priv_key: &K, ciphertext: &[u8]) -> Result<Vec<u8>> {
    let k = priv_key.size();
    if ciphertext.len() != k {
        return Err(Error::Decryption);
    }

    let em = decrypt_block(priv_key, ciphertext).map_err(|_| Error::Decryption)?;
    pkcs1v15_encrypt_unpad(&em, k).map_err(|_| Error::Decryption)
}
