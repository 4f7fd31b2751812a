//! End-to-end tests of the hybrid envelope.

use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};
use rsa_envelope::{
    envelope::{self, Envelope},
    traits::PublicKeyParts,
    Error, HybridEnvelope, KeyPair, OneTimeKey, SymmetricKeySize, TracingObserver, IV_LEN,
};

fn setup(bits: usize) -> (ChaCha8Rng, KeyPair) {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    let key_pair = KeyPair::new(&mut rng, bits).unwrap();
    (rng, key_pair)
}

#[test]
fn roundtrip_message_lengths() {
    let (mut rng, key_pair) = setup(512);
    let public_key = key_pair.to_public_key();
    let k = public_key.size();

    for len in [0, 1, 15, 16, 17, k - 11, k, 1000] {
        let one_time_key = OneTimeKey::generate(&mut rng, SymmetricKeySize::Aes128);
        let mut msg = vec![0u8; len];
        rng.fill_bytes(&mut msg);

        let sealed = envelope::encrypt(&mut rng, &public_key, &one_time_key, &msg).unwrap();
        assert_eq!(sealed.len(), k + IV_LEN + (len / 16 + 1) * 16, "len = {len}");
        assert_eq!(envelope::decrypt(&key_pair, &sealed).unwrap(), msg);
    }
}

#[test]
fn encryption_is_not_deterministic() {
    let (mut rng, key_pair) = setup(512);
    let one_time_key = OneTimeKey::generate(&mut rng, SymmetricKeySize::Aes128);

    let a = envelope::encrypt(&mut rng, &key_pair, &one_time_key, b"HELLO").unwrap();
    let b = envelope::encrypt(&mut rng, &key_pair, &one_time_key, b"HELLO").unwrap();
    assert_ne!(a, b);

    let (a, b) = (Envelope::parse(&a, 64).unwrap(), Envelope::parse(&b, 64).unwrap());
    assert_ne!(a.wrapped_key(), b.wrapped_key());
    assert_ne!(a.iv(), b.iv());
}

#[test]
fn envelope_2048_has_expected_layout() {
    let (mut rng, key_pair) = setup(2048);
    let public_key = key_pair.to_public_key();
    assert_eq!(public_key.size(), 256);

    let one_time_key = OneTimeKey::generate(&mut rng, SymmetricKeySize::Aes128);
    let msg = b"attack at dawn, bring snacks";
    assert!((17..32).contains(&msg.len()));

    let sealed = HybridEnvelope::with_observer(TracingObserver)
        .encrypt(&mut rng, &public_key, &one_time_key, msg)
        .unwrap();
    assert_eq!(sealed.len(), 304);

    let parsed = Envelope::parse(&sealed, 256).unwrap();
    assert_eq!(parsed.wrapped_key().len(), 256);
    assert_eq!(parsed.ciphertext().len(), 32);

    assert_eq!(envelope::decrypt(&key_pair, &sealed).unwrap(), msg);

    // Corrupting the wrapped key spoils the 0x00 0x02 header after unwrapping.
    let mut corrupted = sealed.clone();
    corrupted[100] ^= 0x80;
    assert_eq!(
        envelope::decrypt(&key_pair, &corrupted),
        Err(Error::Decryption)
    );
}

#[test]
fn iv_tamper_breaks_final_padding() {
    let (mut rng, key_pair) = setup(512);
    let one_time_key = OneTimeKey::generate(&mut rng, SymmetricKeySize::Aes128);
    // Five bytes of data leave eleven bytes of 0x0b padding in the only block.
    let sealed = envelope::encrypt(&mut rng, &key_pair, &one_time_key, b"HELLO").unwrap();
    assert_eq!(sealed.len(), 64 + 16 + 16);

    for i in 5..16 {
        let mut corrupted = sealed.clone();
        corrupted[64 + i] ^= 0x01;
        assert_eq!(
            envelope::decrypt(&key_pair, &corrupted),
            Err(Error::Decryption),
            "iv byte {i}"
        );
    }
}

#[test]
fn ciphertext_tamper_is_rejected() {
    let (mut rng, key_pair) = setup(512);
    let one_time_key = OneTimeKey::generate(&mut rng, SymmetricKeySize::Aes256);
    let msg = b"seventeen bytes!!";
    let sealed = envelope::encrypt(&mut rng, &key_pair, &one_time_key, msg).unwrap();
    let c_start = 64 + IV_LEN;
    assert_eq!(sealed.len(), c_start + 32);

    // First-block flips land on the padding bytes of the second block.
    for i in 1..16 {
        let mut corrupted = sealed.clone();
        corrupted[c_start + i] ^= 0x01;
        assert_eq!(
            envelope::decrypt(&key_pair, &corrupted),
            Err(Error::Decryption),
            "ciphertext byte {i}"
        );
    }

    // Last-block flips scramble the whole block; valid padding is then a ~1/256 event.
    let mut rejected = 0;
    for i in 16..32 {
        let mut corrupted = sealed.clone();
        corrupted[c_start + i] ^= 0x01;
        match envelope::decrypt(&key_pair, &corrupted) {
            Err(Error::Decryption) => rejected += 1,
            Ok(plaintext) => assert_ne!(plaintext, msg),
            Err(e) => panic!("unexpected error {e:?}"),
        }
    }
    assert!(rejected >= 14, "only {rejected} of 16 rejected");
}

#[test]
fn wrong_key_is_rejected() {
    let (mut rng, key_pair) = setup(512);
    let other = KeyPair::new(&mut rng, 512).unwrap();
    let one_time_key = OneTimeKey::generate(&mut rng, SymmetricKeySize::Aes128);

    let sealed = envelope::encrypt(&mut rng, &key_pair, &one_time_key, b"HELLO").unwrap();
    assert_eq!(envelope::decrypt(&other, &sealed), Err(Error::Decryption));
}

#[test]
fn truncated_envelopes() {
    let (mut rng, key_pair) = setup(512);
    let one_time_key = OneTimeKey::generate(&mut rng, SymmetricKeySize::Aes192);
    let sealed = envelope::encrypt(&mut rng, &key_pair, &one_time_key, b"HELLO").unwrap();

    assert_eq!(envelope::decrypt(&key_pair, &[]), Err(Error::MalformedEnvelope));
    assert_eq!(
        envelope::decrypt(&key_pair, &sealed[..64 + IV_LEN - 1]),
        Err(Error::MalformedEnvelope)
    );
    // Header intact but no ciphertext, or a misaligned one.
    assert_eq!(
        envelope::decrypt(&key_pair, &sealed[..64 + IV_LEN]),
        Err(Error::Decryption)
    );
    assert_eq!(
        envelope::decrypt(&key_pair, &sealed[..sealed.len() - 1]),
        Err(Error::Decryption)
    );
}

#[test]
fn caller_supplied_key_bytes() {
    let (mut rng, key_pair) = setup(512);
    let one_time_key = OneTimeKey::from_slice(&[0x5a; 32]).unwrap();
    assert_eq!(one_time_key.size(), SymmetricKeySize::Aes256);

    let sealed = envelope::encrypt(&mut rng, &key_pair, &one_time_key, b"persisted secret").unwrap();
    assert_eq!(
        envelope::decrypt(&key_pair, &sealed).unwrap(),
        b"persisted secret"
    );

    // The wrapped key unwraps to the caller's bytes through the single-block API.
    let parsed = Envelope::parse(&sealed, 64).unwrap();
    assert_eq!(key_pair.decrypt(parsed.wrapped_key()).unwrap(), [0x5a; 32]);
}
