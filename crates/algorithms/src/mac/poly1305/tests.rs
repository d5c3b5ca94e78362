use super::*;
use hex;

fn key_from_hex(s: &str) -> [u8; POLY1305_KEY_SIZE] {
    let bytes = hex::decode(s).unwrap();
    let mut key = [0u8; POLY1305_KEY_SIZE];
    key.copy_from_slice(&bytes);
    key
}

#[test]
fn test_poly1305_rfc8439_vector() {
    // RFC 8439 section 2.5.2
    let key = key_from_hex("85d6be7857556d337f4452fe42d506a80103808afb0db2fd4abff6af4149f51b");
    let message = b"Cryptographic Forum Research Group";
    let expected = "a8061dc1305136c6c22b8baf0c0127a9";

    let tag = Poly1305::mac(&key, message).unwrap();
    assert_eq!(hex::encode(tag.as_ref()), expected);
}

#[test]
fn test_poly1305_zero_key_gives_zero_tag() {
    // RFC 8439 appendix A.3, test vector 1: with r = 0 and s = 0 the tag is
    // zero whatever the message says
    let key = [0u8; POLY1305_KEY_SIZE];
    let tag = Poly1305::mac(&key, b"arbitrary message content").unwrap();
    assert_eq!(tag.as_ref(), &[0u8; POLY1305_TAG_SIZE]);
}

#[test]
fn test_poly1305_zero_r_tag_equals_s() {
    // RFC 8439 appendix A.3, test vector 2 shape: r = 0 makes the
    // accumulator vanish, so the tag is exactly the s half of the key
    let key = key_from_hex("0000000000000000000000000000000036e5f6b5c5e06070f0efca96227a863e");
    let tag = Poly1305::mac(&key, b"whatever the message happens to be").unwrap();
    assert_eq!(hex::encode(tag.as_ref()), "36e5f6b5c5e06070f0efca96227a863e");
}

#[test]
fn test_poly1305_streaming_matches_one_shot() {
    let key = key_from_hex("85d6be7857556d337f4452fe42d506a80103808afb0db2fd4abff6af4149f51b");
    let message: Vec<u8> = (0u32..530).map(|i| (i * 7 % 256) as u8).collect();

    let one_shot = Poly1305::mac(&key, &message).unwrap();

    for chunk_size in [1usize, 5, 15, 16, 17, 100] {
        let mut poly = Poly1305::new(&key).unwrap();
        for chunk in message.chunks(chunk_size) {
            poly.update(chunk).unwrap();
        }
        let tag = poly.finalize().unwrap();
        assert_eq!(tag, one_shot, "chunk size {} diverged", chunk_size);
    }
}

#[test]
fn test_poly1305_block_boundary_lengths() {
    // The final-block padding path differs for partial and exact blocks
    let key = key_from_hex("85d6be7857556d337f4452fe42d506a80103808afb0db2fd4abff6af4149f51b");
    for len in [0usize, 1, 15, 16, 17, 31, 32, 33] {
        let message = vec![0xABu8; len];
        let tag = Poly1305::mac(&key, &message).unwrap();
        assert!(Poly1305::verify(&key, &message, tag.as_ref()).unwrap());
    }
}

#[test]
fn test_poly1305_verify_rejects_any_flipped_bit() {
    let key = key_from_hex("85d6be7857556d337f4452fe42d506a80103808afb0db2fd4abff6af4149f51b");
    let message = b"Cryptographic Forum Research Group";
    let tag = Poly1305::mac(&key, message).unwrap();

    for byte in 0..POLY1305_TAG_SIZE {
        for bit in 0..8 {
            let mut tampered = *tag;
            tampered[byte] ^= 1 << bit;
            assert!(
                !Poly1305::verify(&key, message, &tampered[..]).unwrap(),
                "flip at byte {} bit {} accepted",
                byte,
                bit
            );
        }
    }
}

#[test]
fn test_poly1305_verify_rejects_wrong_length_tag() {
    let key = [0x24u8; POLY1305_KEY_SIZE];
    let message = b"length check";
    let tag = Poly1305::mac(&key, message).unwrap();

    assert!(Poly1305::verify(&key, message, tag.as_ref()).unwrap());
    assert!(!Poly1305::verify(&key, message, &tag.as_ref()[..15]).unwrap());
    assert!(!Poly1305::verify(&key, message, &[]).unwrap());
}

#[test]
fn test_poly1305_verify_rejects_different_message() {
    let key = [0x52u8; POLY1305_KEY_SIZE];
    let tag = Poly1305::mac(&key, b"message one").unwrap();
    assert!(!Poly1305::verify(&key, b"message two", tag.as_ref()).unwrap());
}

#[test]
fn test_poly1305_update_after_finalize_rejected() {
    let key = [0x10u8; POLY1305_KEY_SIZE];
    let mut poly = Poly1305::new(&key).unwrap();
    poly.update(b"body").unwrap();
    let _ = poly.finalize().unwrap();

    assert!(poly.update(b"more").is_err());
    assert!(poly.finalize().is_err());
}
