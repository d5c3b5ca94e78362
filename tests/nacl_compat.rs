//! Cross-crate properties of the NaCl construction stack
//!
//! These tests exercise the facade crate the way a consumer would: keys
//! exchanged with X25519 drive secretbox, and signatures attest to
//! ciphertexts. The per-crate unit tests pin the algorithm vectors; this
//! suite pins the seams between the crates.

use halite::algorithms::types::Nonce;
use halite::prelude::*;
use rand::rngs::OsRng;

#[test]
fn exchanged_secret_opens_secretbox_on_both_sides() {
    let mut rng = OsRng;

    let (public_a, secret_a) = X25519::keypair(&mut rng).unwrap();
    let (public_b, secret_b) = X25519::keypair(&mut rng).unwrap();

    let key_a = X25519::exchange(&secret_a, &public_b).unwrap();
    let key_b = X25519::exchange(&secret_b, &public_a).unwrap();

    let mut key_bytes = [0u8; 32];
    key_bytes.copy_from_slice(key_a.as_bytes());
    let sender = XSalsa20Poly1305::new(&key_bytes);

    let nonce = XSalsa20Poly1305::generate_nonce(&mut rng).unwrap();
    let boxed = sender.encrypt(&nonce, b"session payload").unwrap();

    let mut key_bytes = [0u8; 32];
    key_bytes.copy_from_slice(key_b.as_bytes());
    let receiver = XSalsa20Poly1305::new(&key_bytes);

    let opened = receiver.decrypt(&nonce, &boxed).unwrap();
    assert_eq!(opened, b"session payload");
}

#[test]
fn signature_over_ciphertext_survives_transport() {
    let mut rng = OsRng;

    let key = XSalsa20Poly1305::generate_key(&mut rng).unwrap();
    let nonce = XSalsa20Poly1305::generate_nonce(&mut rng).unwrap();
    let cipher = XSalsa20Poly1305::new(&key);
    let boxed = cipher.encrypt(&nonce, b"attested payload").unwrap();

    let (public, secret) = Ed25519::keypair(&mut rng).unwrap();
    let signature = Ed25519::sign(&boxed, &secret).unwrap();

    assert!(Ed25519::verify(&boxed, &signature, &public).is_ok());

    // Any transport corruption invalidates both layers
    let mut corrupted = boxed.clone();
    corrupted[0] ^= 1;
    assert!(Ed25519::verify(&corrupted, &signature, &public).is_err());
    assert!(cipher.decrypt(&nonce, &corrupted).is_err());
}

#[test]
fn sha512_fingerprints_are_stable_across_entry_points() {
    use halite::algorithms::hash::HashFunction;

    let data = b"fingerprint input";

    let one_shot = Sha512::digest(data).unwrap();

    let mut hasher = Sha512::new();
    hasher.update(&data[..5]).unwrap();
    hasher.update(&data[5..]).unwrap();
    let streamed = hasher.finalize().unwrap();

    assert_eq!(one_shot.as_ref(), streamed.as_ref());
    assert_eq!(one_shot.to_hex().len(), 128);
}

#[test]
fn wipe_erases_exchanged_key_material() {
    let mut rng = OsRng;
    let (public_a, _) = X25519::keypair(&mut rng).unwrap();
    let (_, secret_b) = X25519::keypair(&mut rng).unwrap();

    let shared = X25519::exchange(&secret_b, &public_a).unwrap();
    let mut working_copy = [0u8; 32];
    working_copy.copy_from_slice(shared.as_bytes());

    wipe(&mut working_copy);
    assert_eq!(working_copy, [0u8; 32]);
}

#[test]
fn nonce_type_round_trips_through_slices() {
    let raw = [7u8; 24];
    let nonce = Nonce::<24>::from_slice(&raw).unwrap();
    assert_eq!(nonce.as_ref(), &raw);

    assert!(Nonce::<24>::from_slice(&raw[..23]).is_err());
}
