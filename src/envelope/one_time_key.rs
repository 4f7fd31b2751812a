//! Caller-owned symmetric keys for a single envelope.

use core::fmt;

use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

use crate::errors::{Error, Result};

/// Length of a one-time key, which also selects the AES variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SymmetricKeySize {
    /// 16-byte key, AES-128.
    #[default]
    Aes128,
    /// 24-byte key, AES-192.
    Aes192,
    /// 32-byte key, AES-256.
    Aes256,
}

impl SymmetricKeySize {
    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        match self {
            SymmetricKeySize::Aes128 => 16,
            SymmetricKeySize::Aes192 => 24,
            SymmetricKeySize::Aes256 => 32,
        }
    }

    fn from_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(SymmetricKeySize::Aes128),
            24 => Some(SymmetricKeySize::Aes192),
            32 => Some(SymmetricKeySize::Aes256),
            _ => None,
        }
    }
}

/// Raw symmetric key for a single message.
///
/// Owned by the caller; the envelope never stores it. Wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct OneTimeKey {
    bytes: Zeroizing<Vec<u8>>,
    size: SymmetricKeySize,
}

impl OneTimeKey {
    /// Draw a fresh key of the given size.
    pub fn generate<R: CryptoRngCore + ?Sized>(rng: &mut R, size: SymmetricKeySize) -> Self {
        let mut bytes = Zeroizing::new(vec![0u8; size.key_len()]);
        rng.fill_bytes(&mut bytes);
        Self { bytes, size }
    }

    /// Wrap existing key bytes. Only 16, 24 and 32 byte keys are accepted.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let size = SymmetricKeySize::from_len(bytes.len())
            .ok_or(Error::InvalidKeyLength(bytes.len()))?;
        Ok(Self {
            bytes: Zeroizing::new(bytes.to_vec()),
            size,
        })
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The key size.
    pub fn size(&self) -> SymmetricKeySize {
        self.size
    }
}

impl fmt::Debug for OneTimeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneTimeKey")
            .field("size", &self.size)
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
