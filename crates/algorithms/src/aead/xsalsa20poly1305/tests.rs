use super::*;
use crate::stream::salsa::salsa20::hsalsa20;
use crate::types::Nonce;
use hex;

fn fixed_key() -> [u8; XSALSA20POLY1305_KEY_SIZE] {
    let bytes = hex::decode("1b27556473e985d462cd51197a9a46c76009549eac6474f206c4ee0844f68389")
        .unwrap();
    let mut key = [0u8; XSALSA20POLY1305_KEY_SIZE];
    key.copy_from_slice(&bytes);
    key
}

fn fixed_nonce() -> [u8; XSALSA20POLY1305_NONCE_SIZE] {
    let bytes = hex::decode("69696ee955b62b73cd62bda875fc73d68219e0036b7a0b37").unwrap();
    let mut nonce = [0u8; XSALSA20POLY1305_NONCE_SIZE];
    nonce.copy_from_slice(&bytes);
    nonce
}

#[test]
fn test_secretbox_round_trip() {
    let cipher = XSalsa20Poly1305::new(&fixed_key());
    let nonce = Nonce::<XSALSA20POLY1305_NONCE_SIZE>::new(fixed_nonce());

    let plaintext = b"The extended nonce makes random nonces safe for long-lived keys";

    let ciphertext = cipher.encrypt(&nonce, plaintext).expect("encryption failed");
    assert_eq!(ciphertext.len(), plaintext.len() + XSALSA20POLY1305_TAG_SIZE);

    let decrypted = cipher.decrypt(&nonce, &ciphertext).expect("decryption failed");
    assert_eq!(decrypted, plaintext);
}

#[test]
fn test_secretbox_round_trip_assorted_lengths() {
    let cipher = XSalsa20Poly1305::new(&fixed_key());
    let nonce = Nonce::<XSALSA20POLY1305_NONCE_SIZE>::new(fixed_nonce());

    // Lengths straddling the split between keystream block 0 and block 1,
    // and the 64-byte block boundary
    for len in [0usize, 1, 31, 32, 33, 63, 64, 65, 131, 257] {
        let plaintext: Vec<u8> = (0..len).map(|i| (i * 13 % 256) as u8).collect();
        let ciphertext = cipher.encrypt(&nonce, &plaintext).unwrap();
        assert_eq!(ciphertext.len(), len + XSALSA20POLY1305_TAG_SIZE);

        let decrypted = cipher.decrypt(&nonce, &ciphertext).unwrap();
        assert_eq!(decrypted, plaintext, "length {} diverged", len);
    }
}

#[test]
fn test_secretbox_is_deterministic_under_fixed_inputs() {
    let cipher = XSalsa20Poly1305::new(&fixed_key());
    let nonce = Nonce::<XSALSA20POLY1305_NONCE_SIZE>::new(fixed_nonce());

    let a = cipher.encrypt(&nonce, b"same input").unwrap();
    let b = cipher.encrypt(&nonce, b"same input").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_secretbox_matches_manual_construction() {
    // Rebuild the secretbox pipeline from its published parts: the HSalsa20
    // sub-key, the first Salsa20 keystream block split 32/32, and Poly1305
    // over the ciphertext body. The composed cipher must agree byte-for-byte.
    let key = fixed_key();
    let nonce = fixed_nonce();
    let plaintext: Vec<u8> = (0u32..100).map(|i| (i * 31 % 256) as u8).collect();

    let cipher = XSalsa20Poly1305::new(&key);
    let out = cipher.encrypt_with_nonce(&nonce, &plaintext).unwrap();

    // Sub-key from the nonce prefix
    let mut prefix = [0u8; 16];
    prefix.copy_from_slice(&nonce[..16]);
    let subkey = hsalsa20(&key, &prefix);

    // Keystream for block 0 and beyond
    let salsa_nonce = Nonce::<8>::from_slice(&nonce[16..]).unwrap();
    let mut keystream = vec![0u8; 64 + plaintext.len()];
    Salsa20::new(&subkey, &salsa_nonce).keystream(&mut keystream);

    // Body: head XORed with block0[32..], tail with subsequent blocks
    let mut body = plaintext.clone();
    for (i, byte) in body.iter_mut().enumerate() {
        if i < 32 {
            *byte ^= keystream[32 + i];
        } else {
            *byte ^= keystream[64 + i - 32];
        }
    }

    // One-time key is block0[..32]
    let mut poly_key = [0u8; 32];
    poly_key.copy_from_slice(&keystream[..32]);
    let tag = Poly1305::mac(&poly_key, &body).unwrap();

    assert_eq!(&out[..16], tag.as_ref());
    assert_eq!(&out[16..], &body[..]);
}

#[test]
fn test_secretbox_rejects_any_flipped_bit() {
    let cipher = XSalsa20Poly1305::new(&fixed_key());
    let nonce = Nonce::<XSALSA20POLY1305_NONCE_SIZE>::new(fixed_nonce());

    let ciphertext = cipher.encrypt(&nonce, b"tamper detection works").unwrap();

    for byte in 0..ciphertext.len() {
        for bit in 0..8 {
            let mut tampered = ciphertext.clone();
            tampered[byte] ^= 1 << bit;
            assert!(
                cipher.decrypt(&nonce, &tampered).is_err(),
                "flip at byte {} bit {} accepted",
                byte,
                bit
            );
        }
    }
}

#[test]
fn test_secretbox_rejects_truncated_input() {
    let cipher = XSalsa20Poly1305::new(&fixed_key());
    let nonce = Nonce::<XSALSA20POLY1305_NONCE_SIZE>::new(fixed_nonce());

    for len in 0..XSALSA20POLY1305_TAG_SIZE {
        let short = vec![0u8; len];
        assert!(matches!(
            cipher.decrypt(&nonce, &short),
            Err(Error::Length { .. })
        ));
    }
}

#[test]
fn test_secretbox_empty_message_is_tag_only() {
    let cipher = XSalsa20Poly1305::new(&fixed_key());
    let nonce = Nonce::<XSALSA20POLY1305_NONCE_SIZE>::new(fixed_nonce());

    let ciphertext = cipher.encrypt(&nonce, b"").unwrap();
    assert_eq!(ciphertext.len(), XSALSA20POLY1305_TAG_SIZE);
    assert_eq!(cipher.decrypt(&nonce, &ciphertext).unwrap(), b"");
}

#[test]
fn test_secretbox_wrong_key_or_nonce_fails() {
    let cipher = XSalsa20Poly1305::new(&fixed_key());
    let nonce = Nonce::<XSALSA20POLY1305_NONCE_SIZE>::new(fixed_nonce());
    let ciphertext = cipher.encrypt(&nonce, b"secret payload").unwrap();

    let mut other_key = fixed_key();
    other_key[0] ^= 1;
    let wrong_key = XSalsa20Poly1305::new(&other_key);
    assert!(wrong_key.decrypt(&nonce, &ciphertext).is_err());

    let mut other_nonce = fixed_nonce();
    other_nonce[23] ^= 1;
    let wrong_nonce = Nonce::<XSALSA20POLY1305_NONCE_SIZE>::new(other_nonce);
    assert!(cipher.decrypt(&wrong_nonce, &ciphertext).is_err());
}

#[test]
fn test_secretbox_tag_of_matches_prefix() {
    let cipher = XSalsa20Poly1305::new(&fixed_key());
    let nonce = Nonce::<XSALSA20POLY1305_NONCE_SIZE>::new(fixed_nonce());
    let ciphertext = cipher.encrypt(&nonce, b"inspect me").unwrap();

    let tag = XSalsa20Poly1305::tag_of(&ciphertext).unwrap();
    assert_eq!(tag.as_ref(), &ciphertext[..16]);
}

#[test]
fn test_secretbox_operation_builders() {
    use halite_api::traits::symmetric::{DecryptOperation, EncryptOperation};
    use halite_api::traits::SymmetricCipher;

    let cipher = XSalsa20Poly1305::new(&fixed_key());
    let nonce = Nonce::<XSALSA20POLY1305_NONCE_SIZE>::new(fixed_nonce());

    let ciphertext = SymmetricCipher::encrypt(&cipher)
        .with_nonce(&nonce)
        .encrypt(b"builder flow")
        .unwrap();

    let plaintext = SymmetricCipher::decrypt(&cipher)
        .with_nonce(&nonce)
        .decrypt(&ciphertext)
        .unwrap();

    assert_eq!(plaintext, b"builder flow");
}

#[test]
fn test_secretbox_operation_requires_nonce() {
    use halite_api::traits::symmetric::EncryptOperation;
    use halite_api::traits::SymmetricCipher;

    let cipher = XSalsa20Poly1305::new(&fixed_key());
    let result = SymmetricCipher::encrypt(&cipher).encrypt(b"no nonce set");
    assert!(result.is_err());
}

#[test]
fn test_secretbox_generated_keys_round_trip() {
    use halite_api::traits::SymmetricCipher;
    use rand::rngs::OsRng;

    let mut rng = OsRng;
    let key = XSalsa20Poly1305::generate_key(&mut rng).unwrap();
    let nonce = XSalsa20Poly1305::generate_nonce(&mut rng).unwrap();

    let key_array: [u8; XSALSA20POLY1305_KEY_SIZE] = *key;
    let cipher = XSalsa20Poly1305::new(&key_array);

    let ciphertext = cipher.encrypt(&nonce, b"fresh keys").unwrap();
    assert_eq!(cipher.decrypt(&nonce, &ciphertext).unwrap(), b"fresh keys");
}
