use super::*;
use rand::rngs::OsRng;

fn hex_to_32(hex_str: &str) -> [u8; 32] {
    let bytes = hex::decode(hex_str).expect("invalid hex");
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&bytes);
    arr
}

fn hex_to_64(hex_str: &str) -> [u8; 64] {
    let bytes = hex::decode(hex_str).expect("invalid hex");
    let mut arr = [0u8; 64];
    arr.copy_from_slice(&bytes);
    arr
}

#[test]
fn test_ed25519_rfc8032_test1_empty_message() {
    // RFC 8032 section 7.1, TEST 1
    let seed = hex_to_32("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60");
    let expected_public =
        hex_to_32("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a");
    let expected_sig = hex_to_64(
        "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e06522490155\
         5fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b",
    );

    let secret = Ed25519SecretKey::from_seed(&seed).unwrap();
    let public = secret.public_key().unwrap();
    assert_eq!(public.to_bytes(), expected_public);

    let signature = Ed25519::sign(b"", &secret).unwrap();
    assert_eq!(signature.to_bytes(), expected_sig);

    assert!(Ed25519::verify(b"", &signature, &public).is_ok());
}

#[test]
fn test_ed25519_rfc8032_test2_one_byte() {
    // RFC 8032 section 7.1, TEST 2
    let seed = hex_to_32("4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb");
    let expected_public =
        hex_to_32("3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c");
    let message = [0x72u8];
    let expected_sig = hex_to_64(
        "92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da\
         085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00",
    );

    let secret = Ed25519SecretKey::from_seed(&seed).unwrap();
    let public = secret.public_key().unwrap();
    assert_eq!(public.to_bytes(), expected_public);

    let signature = Ed25519::sign(&message, &secret).unwrap();
    assert_eq!(signature.to_bytes(), expected_sig);

    assert!(Ed25519::verify(&message, &signature, &public).is_ok());
}

#[test]
fn test_ed25519_rfc8032_test3_two_bytes() {
    // RFC 8032 section 7.1, TEST 3
    let seed = hex_to_32("c5aa8df43f9f837bedb7442f31dcb7b166d38535076f094b85ce3a2e0b4458f7");
    let expected_public =
        hex_to_32("fc51cd8e6218a1a38da47ed00230f0580816ed13ba3303ac5deb911548908025");
    let message = [0xafu8, 0x82];
    let expected_sig = hex_to_64(
        "6291d657deec24024827e69c3abe01a30ce548a284743a445e3680d7db5ac3ac\
         18ff9b538d16f290ae67f760984dc6594a7c15e9716ed28dc027beceea1ec40a",
    );

    let secret = Ed25519SecretKey::from_seed(&seed).unwrap();
    let public = secret.public_key().unwrap();
    assert_eq!(public.to_bytes(), expected_public);

    let signature = Ed25519::sign(&message, &secret).unwrap();
    assert_eq!(signature.to_bytes(), expected_sig);

    assert!(Ed25519::verify(&message, &signature, &public).is_ok());
}

#[test]
fn test_ed25519_keypair_generation() {
    let mut rng = OsRng;
    let result = Ed25519::keypair(&mut rng);
    assert!(
        result.is_ok(),
        "Keypair generation failed: {:?}",
        result.err()
    );

    let (public_key, secret_key) = result.unwrap();
    assert_eq!(public_key.0.len(), ED25519_PUBLIC_KEY_SIZE);
    assert_eq!(secret_key.seed.len(), ED25519_SECRET_KEY_SIZE);
    assert_eq!(secret_key.expanded.len(), ED25519_EXPANDED_KEY_SIZE);

    // Verify clamping was applied correctly
    assert_eq!(
        secret_key.expanded[0] & 7,
        0,
        "Low 3 bits should be cleared"
    );
    assert_eq!(
        secret_key.expanded[31] & 128,
        0,
        "Bit 255 should be cleared"
    );
    assert_eq!(secret_key.expanded[31] & 64, 64, "Bit 254 should be set");
}

#[test]
fn test_ed25519_sign_verify_cycle() {
    let mut rng = OsRng;
    let (public_key, secret_key) = Ed25519::keypair(&mut rng).unwrap();

    let message = b"Complete test message for Ed25519 sign/verify cycle";

    let signature = Ed25519::sign(message, &secret_key).expect("Signing should succeed");
    assert_eq!(signature.0.len(), ED25519_SIGNATURE_SIZE);

    let result = Ed25519::verify(message, &signature, &public_key);
    assert!(result.is_ok(), "Verification failed: {:?}", result.err());
}

#[test]
fn test_ed25519_deterministic_signatures() {
    let mut rng = OsRng;
    let (_, secret_key) = Ed25519::keypair(&mut rng).unwrap();

    let message = b"Test for deterministic signatures";

    let sig1 = Ed25519::sign(message, &secret_key).unwrap();
    let sig2 = Ed25519::sign(message, &secret_key).unwrap();

    assert_eq!(sig1.0, sig2.0, "Ed25519 signatures must be deterministic");
}

#[test]
fn test_ed25519_verify_rejects_tampered_message() {
    let mut rng = OsRng;
    let (public_key, secret_key) = Ed25519::keypair(&mut rng).unwrap();

    let signature = Ed25519::sign(b"original message", &secret_key).unwrap();
    assert!(Ed25519::verify(b"tampered message", &signature, &public_key).is_err());
}

#[test]
fn test_ed25519_verify_rejects_tampered_signature() {
    let mut rng = OsRng;
    let (public_key, secret_key) = Ed25519::keypair(&mut rng).unwrap();

    let message = b"bit flips must not survive verification";
    let signature = Ed25519::sign(message, &secret_key).unwrap();

    for byte in [0usize, 15, 31, 32, 47, 63] {
        let mut tampered = signature.0;
        tampered[byte] ^= 0x01;
        let tampered_sig = Ed25519Signature(tampered);
        assert!(
            Ed25519::verify(message, &tampered_sig, &public_key).is_err(),
            "flip at byte {} accepted",
            byte
        );
    }
}

#[test]
fn test_ed25519_verify_rejects_wrong_public_key() {
    let mut rng = OsRng;
    let (_, secret_key) = Ed25519::keypair(&mut rng).unwrap();
    let (other_public, _) = Ed25519::keypair(&mut rng).unwrap();

    let message = b"signed under a different key";
    let signature = Ed25519::sign(message, &secret_key).unwrap();

    assert!(Ed25519::verify(message, &signature, &other_public).is_err());
}

#[test]
fn test_ed25519_public_key_length_validation() {
    assert!(Ed25519PublicKey::from_bytes(&[0u8; 31]).is_err());
    assert!(Ed25519PublicKey::from_bytes(&[0u8; 33]).is_err());
    assert!(Ed25519Signature::from_bytes(&[0u8; 63]).is_err());
    assert!(Ed25519Signature::from_bytes(&[0u8; 65]).is_err());
}

#[test]
fn test_ed25519_from_expanded_matches_seed_key() {
    let seed = hex_to_32("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60");
    let from_seed = Ed25519SecretKey::from_seed(&seed).unwrap();

    let expanded = from_seed.export_expanded();
    let from_expanded = Ed25519SecretKey::from_expanded(&expanded).unwrap();

    let message = b"expanded keys sign identically";
    let sig_a = Ed25519::sign(message, &from_seed).unwrap();
    let sig_b = Ed25519::sign(message, &from_expanded).unwrap();
    assert_eq!(sig_a.0, sig_b.0);

    assert_eq!(
        from_seed.public_key().unwrap().to_bytes(),
        from_expanded.public_key().unwrap().to_bytes()
    );

    assert!(Ed25519SecretKey::from_expanded(&[0u8; 32]).is_err());
}

#[test]
fn test_ed25519_signature_derive_trait() {
    use halite_api::SignatureDerive;

    let seed = [7u8; 32];
    let (public_a, secret_a) = Ed25519::derive_keypair(&seed).unwrap();
    let (public_b, _) = Ed25519::derive_keypair(&seed).unwrap();

    assert_eq!(public_a.to_bytes(), public_b.to_bytes());
    assert_eq!(
        <Ed25519 as SignatureDerive>::derive_public_key(&secret_a)
            .unwrap()
            .to_bytes(),
        public_a.to_bytes()
    );

    assert!(Ed25519::derive_keypair(&[0u8; 16]).is_err());
}
