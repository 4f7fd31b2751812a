//! Special handling for converting the BigUint to u8 vectors

use num_bigint::BigUint;
use zeroize::Zeroizing;

/// Returns a new vector of exactly `padded_len` bytes: shorter inputs are left
/// padded with zeros, longer inputs keep only their trailing `padded_len` bytes.
#[inline]
fn fit_to_len(input: &[u8], padded_len: usize) -> Vec<u8> {
    if input.len() > padded_len {
        return input[input.len() - padded_len..].to_vec();
    }

    let mut out = vec![0u8; padded_len];
    out[padded_len - input.len()..].copy_from_slice(input);
    out
}

/// Converts input to the new vector of the given length, using BE and with 0s left padded.
///
/// Every value handed in here is reduced mod `n`, so its natural encoding is
/// never longer than `padded_len` and truncation only ever removes zero bytes.
#[inline]
pub fn uint_to_be_pad(input: BigUint, padded_len: usize) -> Vec<u8> {
    fit_to_len(&input.to_bytes_be(), padded_len)
}

/// Same as [`uint_to_be_pad`], wiping the intermediate encodings.
#[inline]
pub(crate) fn uint_to_zeroizing_be_pad(input: BigUint, padded_len: usize) -> Zeroizing<Vec<u8>> {
    let m = Zeroizing::new(input);
    let m = Zeroizing::new(m.to_bytes_be());
    Zeroizing::new(fit_to_len(&m, padded_len))
}
