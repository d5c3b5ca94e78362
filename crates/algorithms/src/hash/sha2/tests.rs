use super::*;
use hex;

#[test]
fn test_sha512_empty() {
    // NIST test vector: Empty string
    let expected = "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e";

    let hash = Sha512::digest(&[]).unwrap();
    assert_eq!(hex::encode(hash.as_ref()), expected);
}

#[test]
fn test_sha512_abc() {
    // NIST test vector: "abc"
    let expected = "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f";

    let hash = Sha512::digest(b"abc").unwrap();
    assert_eq!(hex::encode(hash.as_ref()), expected);
}

#[test]
fn test_sha512_two_blocks() {
    // NIST test vector: 896-bit message spanning two compression blocks
    let msg = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";
    let expected = "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909";

    let hash = Sha512::digest(msg).unwrap();
    assert_eq!(hex::encode(hash.as_ref()), expected);
}

#[test]
fn test_sha512_streaming_matches_one_shot() {
    let data: Vec<u8> = (0u32..1000).map(|i| (i % 251) as u8).collect();
    let one_shot = Sha512::digest(&data).unwrap();

    // Feed the same input in irregular chunk sizes
    for chunk_size in [1usize, 3, 64, 127, 128, 129, 500] {
        let mut hasher = Sha512::new();
        for chunk in data.chunks(chunk_size) {
            hasher.update(chunk).unwrap();
        }
        let streamed = hasher.finalize().unwrap();
        assert_eq!(
            streamed.as_ref(),
            one_shot.as_ref(),
            "chunk size {} diverged",
            chunk_size
        );
    }
}

#[test]
fn test_sha512_boundary_lengths() {
    // Padding edge cases: around the 112-byte length-field boundary and the
    // 128-byte block boundary. Cross-checked against the one-shot digest of
    // the same input built through a fresh hasher fed byte-by-byte.
    for len in [111usize, 112, 113, 127, 128, 129, 255, 256] {
        let data = vec![0x5Au8; len];
        let one_shot = Sha512::digest(&data).unwrap();

        let mut hasher = Sha512::new();
        for byte in &data {
            hasher.update(core::slice::from_ref(byte)).unwrap();
        }
        assert_eq!(hasher.finalize().unwrap().as_ref(), one_shot.as_ref());
    }
}

#[test]
fn test_sha512_update_after_finalize_rejected() {
    let mut hasher = Sha512::new();
    hasher.update(b"input").unwrap();
    let _ = hasher.finalize().unwrap();

    assert!(hasher.update(b"more").is_err());
    assert!(hasher.finalize().is_err());
}

#[test]
fn test_sha512_algorithm_parameters() {
    assert_eq!(Sha512::output_size(), 64);
    assert_eq!(Sha512::block_size(), 128);
    assert_eq!(Sha512::name(), "SHA-512");

    let digest = Sha512::digest(b"x").unwrap();
    assert_eq!(digest.as_ref().len(), 64);
}

#[test]
fn test_sha512_digest_hex_round_trip() {
    let digest = Sha512::digest(b"abc").unwrap();
    let parsed = Digest::<64>::from_hex(&digest.to_hex()).unwrap();
    assert_eq!(parsed, digest);
}
