//! Generic RSA implementation

use num_bigint::BigUint;
use num_traits::Zero;
use zeroize::Zeroizing;

use crate::algorithms::pad::{uint_to_be_pad, uint_to_zeroizing_be_pad};
use crate::errors::{Error, Result};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// ⚠️ Raw RSA encryption of m with the public key. No padding is performed.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// scheme. See the [module-level documentation][crate::hazmat] for more information.
#[inline]
pub fn rsa_encrypt<K: PublicKeyParts>(key: &K, m: &BigUint) -> Result<BigUint> {
    if key.n().is_zero() {
        return Err(Error::InvalidParameter("modulus is zero"));
    }

    Ok(m.modpow(key.e(), key.n()))
}

/// ⚠️ Performs raw RSA decryption with no padding or error checking.
///
/// Plain square-and-multiply over `d`: no CRT speed-up and no blinding.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// scheme. See the [module-level documentation][crate::hazmat] for more information.
#[inline]
pub fn rsa_decrypt(priv_key: &impl PrivateKeyParts, c: &BigUint) -> Result<BigUint> {
    if priv_key.n().is_zero() {
        return Err(Error::Decryption);
    }

    if c >= priv_key.n() {
        return Err(Error::Decryption);
    }

    Ok(c.modpow(priv_key.d(), priv_key.n()))
}

/// ⚠️ Interprets `plaintext` as an unsigned big-endian integer, raises it to `e`
/// mod `n` and returns the result as exactly `key.size()` bytes.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// See the [module-level documentation][crate::hazmat] for more information.
pub fn encrypt_block<K: PublicKeyParts>(key: &K, plaintext: &[u8]) -> Result<Vec<u8>> {
    let m = Zeroizing::new(BigUint::from_bytes_be(plaintext));
    let c = rsa_encrypt(key, &m)?;
    Ok(uint_to_be_pad(c, key.size()))
}

/// ⚠️ Inverse of [`encrypt_block`]: computes `c^d mod n` and canonicalizes the
/// result to exactly `key.size()` bytes, restoring the leading zero bytes the
/// integer form drops.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// See the [module-level documentation][crate::hazmat] for more information.
pub fn decrypt_block<K: PrivateKeyParts>(key: &K, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    let c = BigUint::from_bytes_be(ciphertext);
    let m = rsa_decrypt(key, &c)?;
    Ok(uint_to_zeroizing_be_pad(m, key.size()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeyPair;
    use hex_literal::hex;

    // 512-bit key built from fixed primes (see keygen tests for its derivation).
    fn test_key() -> KeyPair {
        let n = BigUint::from_bytes_be(&hex!(
            "d1cb72464644ee8d7c34f9e0677633e08626c7192bdbf8d95a6aa96719b32e6a"
            "f7c98ab36ed4f0a5289232c328688d568897e0141508f6e255360f98b3a0b901"
        ));
        let d = BigUint::from_bytes_be(&hex!(
            "be014f26dc5f73da4a42c4887bcbaf224afd75d693456f7493120508ee5abcce"
            "d99a6788528c94c1b777d71206f25176655da4e7bc8ee22a6bc2426746f9c001"
        ));
        KeyPair::from_components(n, BigUint::from(65_537u64), d).unwrap()
    }

    #[test]
    fn test_raw_roundtrip() {
        let key = test_key();
        let m = BigUint::from_bytes_be(b"textbook");
        let c = rsa_encrypt(&key, &m).unwrap();
        assert_ne!(c, m);
        assert_eq!(rsa_decrypt(&key, &c).unwrap(), m);
    }

    #[test]
    fn test_decrypt_rejects_out_of_range() {
        let key = test_key();
        let c = key.n().clone();
        assert_eq!(rsa_decrypt(&key, &c), Err(Error::Decryption));
    }

    #[test]
    fn test_block_roundtrip_keeps_leading_zeros() {
        let key = test_key();
        let k = key.size();
        assert_eq!(k, 64);

        let mut block = vec![0u8; k];
        block[1] = 2;
        block[k - 1] = 0x42;

        let c = encrypt_block(&key, &block).unwrap();
        assert_eq!(c.len(), k);

        let m = decrypt_block(&key, &c).unwrap();
        assert_eq!(m.as_slice(), block.as_slice());
    }
}
