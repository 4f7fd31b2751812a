//! AES-CBC with PKCS#7 padding, keyed by a [`OneTimeKey`].

use cbc::cipher::{
    block_padding::Pkcs7, BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit,
};

use super::one_time_key::{OneTimeKey, SymmetricKeySize};
use crate::errors::{Error, Result};
use crate::IV_LEN;

fn cbc_encrypt<C: BlockEncryptMut + BlockCipher + KeyInit>(
    key: &[u8],
    iv: &[u8; IV_LEN],
    msg: &[u8],
) -> Result<Vec<u8>> {
    Ok(cbc::Encryptor::<C>::new_from_slices(key, iv)
        .map_err(|_| Error::InvalidKeyLength(key.len()))?
        .encrypt_padded_vec_mut::<Pkcs7>(msg))
}

fn cbc_decrypt<C: BlockDecryptMut + BlockCipher + KeyInit>(
    key: &[u8],
    iv: &[u8; IV_LEN],
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    cbc::Decryptor::<C>::new_from_slices(key, iv)
        .map_err(|_| Error::Decryption)?
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| Error::Decryption)
}

/// Encrypts `msg`; the output is a non-empty multiple of 16 bytes.
pub(crate) fn encrypt(key: &OneTimeKey, iv: &[u8; IV_LEN], msg: &[u8]) -> Result<Vec<u8>> {
    let key_bytes = key.as_bytes();
    match key.size() {
        SymmetricKeySize::Aes128 => cbc_encrypt::<aes::Aes128>(key_bytes, iv, msg),
        SymmetricKeySize::Aes192 => cbc_encrypt::<aes::Aes192>(key_bytes, iv, msg),
        SymmetricKeySize::Aes256 => cbc_encrypt::<aes::Aes256>(key_bytes, iv, msg),
    }
}

/// Decrypts and unpads. A misaligned ciphertext or bad padding is [`Error::Decryption`].
pub(crate) fn decrypt(key: &OneTimeKey, iv: &[u8; IV_LEN], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let key_bytes = key.as_bytes();
    match key.size() {
        SymmetricKeySize::Aes128 => cbc_decrypt::<aes::Aes128>(key_bytes, iv, ciphertext),
        SymmetricKeySize::Aes192 => cbc_decrypt::<aes::Aes192>(key_bytes, iv, ciphertext),
        SymmetricKeySize::Aes256 => cbc_decrypt::<aes::Aes256>(key_bytes, iv, ciphertext),
    }
}
