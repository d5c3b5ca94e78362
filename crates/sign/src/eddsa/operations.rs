//! Curve arithmetic operations used by the Ed25519 signature scheme
//!
//! This module is the only place the signature layer touches point or
//! scalar arithmetic. The operations delegate to curve25519-dalek, which
//! provides the Edwards-curve group law, base-point tables, and scalar
//! reduction; everything above this module works purely on byte arrays.

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;
use halite_internal::constant_time::ct_eq;
use zeroize::Zeroize;

/// Scalar multiplication with the Ed25519 base point
pub fn scalar_mult_base(scalar_bytes: &[u8; 32]) -> [u8; 32] {
    let scalar = Scalar::from_bytes_mod_order(*scalar_bytes);
    EdwardsPoint::mul_base(&scalar).compress().to_bytes()
}

/// Derive public key from secret scalar
pub fn derive_public_key(scalar_bytes: &[u8], output: &mut [u8; 32]) -> Result<(), &'static str> {
    if scalar_bytes.len() < 32 {
        return Err("Invalid scalar length");
    }

    let mut scalar_array = [0u8; 32];
    scalar_array.copy_from_slice(&scalar_bytes[0..32]);

    *output = scalar_mult_base(&scalar_array);
    scalar_array.zeroize();
    Ok(())
}

/// Reduce a 512-bit hash to a scalar mod the group order L
pub fn reduce_512_to_scalar(hash: &[u8], output: &mut [u8; 32]) {
    let mut wide = [0u8; 64];
    wide.copy_from_slice(&hash[0..64]);
    *output = Scalar::from_bytes_mod_order_wide(&wide).to_bytes();
    wide.zeroize();
}

/// Compute s = (r + k*a) mod L
pub fn compute_s(r: &[u8; 32], k: &[u8; 32], a: &[u8], s: &mut [u8; 32]) {
    let mut a_array = [0u8; 32];
    a_array.copy_from_slice(&a[0..32]);

    let r_scalar = Scalar::from_bytes_mod_order(*r);
    let k_scalar = Scalar::from_bytes_mod_order(*k);
    let a_scalar = Scalar::from_bytes_mod_order(a_array);
    a_array.zeroize();

    *s = (r_scalar + k_scalar * a_scalar).to_bytes();
}

/// Verify the signature equation \[s\]B = R + \[k\]A
///
/// `check` is filled with ones when the equation holds and zeros otherwise,
/// so the caller can compare in constant time.
pub fn verify_equation(
    s_bytes: &[u8],
    r_bytes: &[u8],
    k: &[u8; 32],
    a_bytes: &[u8],
    check: &mut [u8; 32],
) -> Result<(), &'static str> {
    let mut r_array = [0u8; 32];
    let mut a_array = [0u8; 32];
    r_array.copy_from_slice(&r_bytes[0..32]);
    a_array.copy_from_slice(&a_bytes[0..32]);

    let a_point = CompressedEdwardsY(a_array)
        .decompress()
        .ok_or("Invalid A point")?;

    // s must be a canonical scalar below L; a malleable encoding is rejected
    // outright rather than reduced
    let mut s_array = [0u8; 32];
    s_array.copy_from_slice(&s_bytes[0..32]);
    let s_scalar: Option<Scalar> = Scalar::from_canonical_bytes(s_array).into();
    let s_scalar = s_scalar.ok_or("Non-canonical s value")?;

    let k_scalar = Scalar::from_bytes_mod_order(*k);

    // R' = [s]B - [k]A; the equation holds iff R' encodes to the signature's
    // R bytes
    let r_prime = EdwardsPoint::vartime_double_scalar_mul_basepoint(&-k_scalar, &a_point, &s_scalar);
    let r_prime_compressed = r_prime.compress().to_bytes();

    if ct_eq(r_prime_compressed, r_array) {
        check.fill(1);
    } else {
        check.fill(0);
    }

    Ok(())
}
