//! Generate prime components for an RSA key pair

use num_bigint::{BigUint, IntoBigUint, ModInverse};
use num_integer::Integer;
use num_traits::One;

use crate::{
    errors::{Error, Result},
    observer::{Event, Observer},
    prime_source::PrimeSource,
    MIN_BITS,
};

pub(crate) struct KeyComponents {
    pub n: BigUint,
    pub e: BigUint,
    pub d: BigUint,
}

/// Generates a two-prime RSA key of `bit_size` bits with public exponent `exp`.
///
/// Both factors are drawn at `bit_size / 2` bits. A factor whose predecessor
/// shares a factor with `exp` can never yield a coprime totient, so it is
/// discarded and redrawn, as is a second factor equal to the first.
pub(crate) fn generate_key_with_exp<S, O>(
    source: &mut S,
    observer: &O,
    bit_size: usize,
    exp: BigUint,
) -> Result<KeyComponents>
where
    S: PrimeSource + ?Sized,
    O: Observer + ?Sized,
{
    if bit_size < MIN_BITS {
        return Err(Error::InvalidParameter("bit length must be at least 512"));
    }
    if bit_size % 2 != 0 {
        return Err(Error::InvalidParameter("bit length must be even"));
    }

    let half = bit_size / 2;

    let p = loop {
        let p = source.next_prime(half);
        observer.observe(&Event::PrimeDrawn { bits: half });

        if exp.gcd(&(&p - BigUint::one())).is_one() {
            break p;
        }
        observer.observe(&Event::TotientNotCoprime);
    };

    loop {
        let q = source.next_prime(half);
        observer.observe(&Event::PrimeDrawn { bits: half });

        // Full-width comparison: factors agreeing in their low limbs are still distinct.
        if q == p {
            observer.observe(&Event::DuplicatePrimeRejected);
            continue;
        }

        let totient = (&p - BigUint::one()) * (&q - BigUint::one());
        if !exp.gcd(&totient).is_one() {
            observer.observe(&Event::TotientNotCoprime);
            continue;
        }

        let d = compute_private_exponent(&exp, &totient)?;
        let n = &p * &q;
        observer.observe(&Event::KeyPairGenerated {
            modulus_bits: n.bits(),
        });

        return Ok(KeyComponents { n, e: exp, d });
    }
}

/// Computes `d = e⁻¹ mod φ` with the extended Euclidean algorithm.
pub(crate) fn compute_private_exponent(exp: &BigUint, totient: &BigUint) -> Result<BigUint> {
    exp.mod_inverse(totient)
        .and_then(|d| d.into_biguint())
        .ok_or(Error::KeyGenerationFailure)
}
