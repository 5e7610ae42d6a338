//! Scalar arithmetic modulo the Ed25519 group order
//!
//! L = 2^252 + 27742317777372353535851937790883648493.

/// The group order as four little-endian 64-bit limbs.
const L: [u64; 4] = [
    0x5812_631a_5cf5_d3ed,
    0x14de_f9de_a2f7_9cd6,
    0x0000_0000_0000_0000,
    0x1000_0000_0000_0000,
];

/// Reduce a 512-bit little-endian value mod L, returning the canonical
/// 32-byte little-endian scalar (< L).
///
/// Bitwise shift-and-subtract: the accumulator stays below L between
/// steps, so doubling never overflows 256 bits.
pub fn reduce(input: &[u8; 64]) -> [u8; 32] {
    let mut r = [0u64; 4];

    for byte in input.iter().rev() {
        for bit in (0..8).rev() {
            let mut incoming = (byte >> bit) & 1;
            for limb in r.iter_mut() {
                let outgoing = (*limb >> 63) as u8;
                *limb = (*limb << 1) | incoming as u64;
                incoming = outgoing;
            }
            conditional_sub_l(&mut r);
        }
    }

    let mut out = [0u8; 32];
    for (chunk, limb) in out.chunks_exact_mut(8).zip(r.iter()) {
        chunk.copy_from_slice(&limb.to_le_bytes());
    }
    out
}

/// Reduce a 32-byte scalar mod L.
pub fn reduce32(input: &[u8; 32]) -> [u8; 32] {
    let mut wide = [0u8; 64];
    wide[..32].copy_from_slice(input);
    reduce(&wide)
}

/// r -= L if r >= L, without branching on the comparison.
fn conditional_sub_l(r: &mut [u64; 4]) {
    let mut diff = [0u64; 4];
    let mut borrow = 0u64;
    for i in 0..4 {
        let (d1, b1) = r[i].overflowing_sub(L[i]);
        let (d2, b2) = d1.overflowing_sub(borrow);
        diff[i] = d2;
        borrow = (b1 | b2) as u64;
    }
    // borrow == 0 means r >= L; keep the difference in that case.
    let keep_diff = borrow.wrapping_sub(1);
    for i in 0..4 {
        r[i] = (diff[i] & keep_diff) | (r[i] & !keep_diff);
    }
}

/// X25519-style clamping: clear the low 3 bits, clear bit 255, set
/// bit 254.
pub fn clamp(scalar: &mut [u8; 32]) {
    scalar[0] &= 248;
    scalar[31] &= 127;
    scalar[31] |= 64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_zero() {
        assert_eq!(reduce(&[0u8; 64]), [0u8; 32]);
    }

    #[test]
    fn test_reduce_below_l_is_identity() {
        let mut input = [0u8; 64];
        input[0] = 0xec;
        input[31] = 0x0f;
        let mut expected = [0u8; 32];
        expected[0] = 0xec;
        expected[31] = 0x0f;
        assert_eq!(reduce(&input), expected);
    }

    #[test]
    fn test_reduce_l_is_zero() {
        let mut input = [0u8; 64];
        input[..32].copy_from_slice(
            &hex::decode("edd3f55c1a631258d69cf7a2def9de1400000000000000000000000000000010")
                .unwrap(),
        );
        assert_eq!(reduce(&input), [0u8; 32]);
    }

    #[test]
    fn test_reduce_all_ones() {
        assert_eq!(
            hex::encode(reduce(&[0xffu8; 64])),
            "000f9c44e31106a447938568a71b0ed065bef517d273ecce3d9a307c1b419903"
        );
    }

    #[test]
    fn test_reduce_counting_bytes() {
        let mut input = [0u8; 64];
        for (i, b) in input.iter_mut().enumerate() {
            *b = i as u8;
        }
        assert_eq!(
            hex::encode(reduce(&input)),
            "7a3c6282f02d37a05023b60d5428e6cc5961d4c31221937adae0b574e4d07205"
        );
    }

    #[test]
    fn test_reduce32_known_seed() {
        let mut seed = [0u8; 32];
        for (i, b) in seed.iter_mut().enumerate() {
            *b = 0xe0 + i as u8;
        }
        assert_eq!(
            hex::encode(reduce32(&seed)),
            "fd767b715917d3be59b9685fe149deb6eff1f2f3f4f5f6f7f8f9fafbfcfdfe0f"
        );
    }

    #[test]
    fn test_clamp() {
        let mut scalar = [0xffu8; 32];
        clamp(&mut scalar);
        assert_eq!(scalar[0], 0xf8);
        assert_eq!(scalar[31], 0x7f);
        let mut zero = [0u8; 32];
        clamp(&mut zero);
        assert_eq!(zero[31], 0x40);
    }
}
