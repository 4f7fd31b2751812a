//! ⚠️ Low-level "hazmat" RSA functions.
//!
//! # ☢️️ WARNING: HAZARDOUS API ☢️
//!
//! This module holds functions that apply RSA's core encryption and decryption
//! primitives to raw data without adding or removing appropriate padding, and
//! the padding routines on their own. The RSA functions here are unblinded,
//! and the length checks in front of every routine branch.
//!
//! Use [`PublicKey::encrypt`](crate::PublicKey::encrypt) or the
//! [envelope](crate::envelope) instead unless you are building something those
//! cannot express.

pub use crate::algorithms::pad::uint_to_be_pad;
pub use crate::algorithms::pkcs1v15::{pkcs1v15_encrypt_pad, pkcs1v15_encrypt_unpad};
pub use crate::algorithms::rsa::{decrypt_block, encrypt_block, rsa_decrypt, rsa_encrypt};
