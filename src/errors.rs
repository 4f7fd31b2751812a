//! Error types.

use thiserror::Error;

/// Alias for [`core::result::Result`] with the `rsa-envelope` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key generation was asked for an unsupported size, or key components are inconsistent.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// Payload does not fit in a single PKCS#1 v1.5 block.
    #[error("message too long")]
    MessageTooLong,

    /// Malformed PKCS#1 v1.5 encryption block.
    #[error("invalid padding")]
    InvalidPadding,

    /// Envelope is shorter than the wrapped key plus the IV.
    #[error("malformed envelope")]
    MalformedEnvelope,

    /// Decryption failed. Deliberately carries no detail about which stage rejected the input.
    #[error("decryption error")]
    Decryption,

    /// The private exponent could not be derived.
    #[error("key generation failed")]
    KeyGenerationFailure,

    /// One-time key is not a valid AES key length.
    #[error("invalid one-time key length: {0} bytes")]
    InvalidKeyLength(usize),
}
