use super::*;
use rand::rngs::OsRng;

fn hex_to_32(s: &str) -> [u8; 32] {
    let bytes = hex::decode(s).unwrap();
    let mut out = [0u8; 32];
    out.copy_from_slice(&bytes);
    out
}

// RFC 7748 section 6.1 Diffie-Hellman vectors
const ALICE_SECRET: &str = "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a";
const ALICE_PUBLIC: &str = "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a";
const BOB_SECRET: &str = "5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb";
const BOB_PUBLIC: &str = "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f";

// HSalsa20(raw RFC 7748 shared point, zero) — the NaCl "firstkey"
const NACL_SHARED: &str = "1b27556473e985d462cd51197a9a46c76009549eac6474f206c4ee0844f68389";

#[test]
fn test_x25519_rfc7748_public_keys() {
    let alice = X25519SecretKey::from_bytes(&hex_to_32(ALICE_SECRET)).unwrap();
    let bob = X25519SecretKey::from_bytes(&hex_to_32(BOB_SECRET)).unwrap();

    assert_eq!(
        X25519::derive_public(&alice).unwrap().to_bytes(),
        hex_to_32(ALICE_PUBLIC)
    );
    assert_eq!(
        X25519::derive_public(&bob).unwrap().to_bytes(),
        hex_to_32(BOB_PUBLIC)
    );
}

#[test]
fn test_x25519_nacl_hashed_shared_secret() {
    // The returned secret is the HSalsa20-hashed value, not the raw curve
    // point from RFC 7748
    let alice = X25519SecretKey::from_bytes(&hex_to_32(ALICE_SECRET)).unwrap();
    let bob_public = X25519PublicKey::from_bytes(&hex_to_32(BOB_PUBLIC)).unwrap();

    let shared = X25519::exchange(&alice, &bob_public).unwrap();
    assert_eq!(shared.as_bytes(), &hex_to_32(NACL_SHARED)[..]);
}

#[test]
fn test_x25519_shared_secret_symmetry_fixed_vectors() {
    let alice = X25519SecretKey::from_bytes(&hex_to_32(ALICE_SECRET)).unwrap();
    let bob = X25519SecretKey::from_bytes(&hex_to_32(BOB_SECRET)).unwrap();
    let alice_public = X25519PublicKey::from_bytes(&hex_to_32(ALICE_PUBLIC)).unwrap();
    let bob_public = X25519PublicKey::from_bytes(&hex_to_32(BOB_PUBLIC)).unwrap();

    let from_alice = X25519::exchange(&alice, &bob_public).unwrap();
    let from_bob = X25519::exchange(&bob, &alice_public).unwrap();

    assert_eq!(from_alice.as_bytes(), from_bob.as_bytes());
}

#[test]
fn test_x25519_shared_secret_symmetry_random_keys() {
    let mut rng = OsRng;

    for _ in 0..8 {
        let (public_a, secret_a) = X25519::keypair(&mut rng).unwrap();
        let (public_b, secret_b) = X25519::keypair(&mut rng).unwrap();

        let ab = X25519::exchange(&secret_a, &public_b).unwrap();
        let ba = X25519::exchange(&secret_b, &public_a).unwrap();

        assert_eq!(ab.as_bytes(), ba.as_bytes());
    }
}

#[test]
fn test_x25519_keypair_roundtrip_through_bytes() {
    let mut rng = OsRng;
    let (public, secret) = X25519::keypair(&mut rng).unwrap();

    let secret_again = X25519SecretKey::from_bytes(&secret.to_bytes()).unwrap();
    assert_eq!(
        X25519::derive_public(&secret_again).unwrap().to_bytes(),
        public.to_bytes()
    );
}

#[test]
fn test_x25519_clamping_is_applied() {
    // Two scalars that differ only in clamped bits produce the same public
    // key
    let mut raw = hex_to_32(ALICE_SECRET);
    let public_a = X25519::derive_public(&X25519SecretKey::from_bytes(&raw).unwrap()).unwrap();

    raw[0] |= 0b0000_0111; // bits cleared by clamping
    raw[31] |= 0b1000_0000; // bit cleared by clamping
    let public_b = X25519::derive_public(&X25519SecretKey::from_bytes(&raw).unwrap()).unwrap();

    assert_eq!(public_a.to_bytes(), public_b.to_bytes());
}

#[test]
fn test_x25519_rejects_low_order_peer_point() {
    let mut rng = OsRng;
    let (_, secret) = X25519::keypair(&mut rng).unwrap();

    // The identity point (u = 0) is the canonical low-order input
    let identity = X25519PublicKey::from_bytes(&[0u8; 32]).unwrap();
    assert!(X25519::exchange(&secret, &identity).is_err());
}

#[test]
fn test_x25519_length_validation() {
    assert!(X25519PublicKey::from_bytes(&[0u8; 31]).is_err());
    assert!(X25519PublicKey::from_bytes(&[0u8; 33]).is_err());
    assert!(X25519SecretKey::from_bytes(&[0u8; 16]).is_err());
}

#[test]
fn test_x25519_keypair_accessors() {
    let mut rng = OsRng;
    let keypair = X25519::keypair(&mut rng).unwrap();

    let public = X25519::public_key(&keypair);
    let secret = X25519::secret_key(&keypair);

    assert_eq!(
        X25519::derive_public(&secret).unwrap().to_bytes(),
        public.to_bytes()
    );
}
