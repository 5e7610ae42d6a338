//! Arithmetic in GF(2^255 - 19)
//!
//! Field elements are five 64-bit limbs of 51 bits each, little-endian.
//! Limbs stay below 2^52 between reductions; multiplication tolerates
//! inputs with excess up to 2^54, so additions can defer their carries
//! to the next multiply.

use subtle::{Choice, ConditionallySelectable};
use zeroize::Zeroize;

const LOW_51_BIT_MASK: u64 = (1u64 << 51) - 1;

#[derive(Clone, Copy, Debug, Zeroize)]
pub struct FieldElement(pub(crate) [u64; 5]);

impl FieldElement {
    pub const ZERO: FieldElement = FieldElement([0, 0, 0, 0, 0]);
    pub const ONE: FieldElement = FieldElement([1, 0, 0, 0, 0]);

    /// Edwards curve constant d = -121665/121666
    pub const D: FieldElement = FieldElement([
        0x0003_4dca_1359_78a3,
        0x0001_a828_3b15_6ebd,
        0x0005_e7a2_6001_c029,
        0x0007_39c6_63a0_3cbb,
        0x0005_2036_cee2_b6ff,
    ]);

    /// 2*d
    pub const D2: FieldElement = FieldElement([
        0x0006_9b94_26b2_f159,
        0x0003_5050_762a_dd7a,
        0x0003_cf44_c003_8052,
        0x0006_738c_c740_7977,
        0x0002_406d_9dc5_6dff,
    ]);

    /// Affine x of the Ed25519 basepoint
    pub const BASE_X: FieldElement = FieldElement([
        0x0006_2d60_8f25_d51a,
        0x0004_12a4_b4f6_592a,
        0x0007_5b71_71a4_b31d,
        0x0001_ff60_5271_18fe,
        0x0002_1693_6d3c_d6e5,
    ]);

    /// Affine y of the Ed25519 basepoint
    pub const BASE_Y: FieldElement = FieldElement([
        0x0006_6666_6666_6658,
        0x0004_cccc_cccc_cccc,
        0x0001_9999_9999_9999,
        0x0003_3333_3333_3333,
        0x0006_6666_6666_6666,
    ]);

    /// Carry the excess above 51 bits in each limb, folding the top
    /// carry back in at weight 19.
    fn weak_reduce(mut limbs: [u64; 5]) -> FieldElement {
        let c0 = limbs[0] >> 51;
        let c1 = limbs[1] >> 51;
        let c2 = limbs[2] >> 51;
        let c3 = limbs[3] >> 51;
        let c4 = limbs[4] >> 51;

        limbs[0] &= LOW_51_BIT_MASK;
        limbs[1] &= LOW_51_BIT_MASK;
        limbs[2] &= LOW_51_BIT_MASK;
        limbs[3] &= LOW_51_BIT_MASK;
        limbs[4] &= LOW_51_BIT_MASK;

        limbs[0] += c4 * 19;
        limbs[1] += c0;
        limbs[2] += c1;
        limbs[3] += c2;
        limbs[4] += c3;

        FieldElement(limbs)
    }

    /// Parse 32 little-endian bytes; the top bit of byte 31 is ignored.
    pub fn from_bytes(bytes: &[u8; 32]) -> FieldElement {
        let load8 = |input: &[u8]| -> u64 {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(&input[..8]);
            u64::from_le_bytes(buf)
        };

        FieldElement([
            load8(&bytes[0..8]) & LOW_51_BIT_MASK,
            (load8(&bytes[6..14]) >> 3) & LOW_51_BIT_MASK,
            (load8(&bytes[12..20]) >> 6) & LOW_51_BIT_MASK,
            (load8(&bytes[19..27]) >> 1) & LOW_51_BIT_MASK,
            (load8(&bytes[24..32]) >> 12) & LOW_51_BIT_MASK,
        ])
    }

    /// Serialize to the unique canonical little-endian encoding (< p).
    pub fn to_bytes(self) -> [u8; 32] {
        let mut limbs = FieldElement::weak_reduce(self.0).0;

        // Compute q = floor(h/p) (0, 1 or 2) by propagating h + 19
        // through the carry chain, then subtract q*p as an add of 19q
        // followed by masking off bit 255.
        let mut q = (limbs[0] + 19) >> 51;
        q = (limbs[1] + q) >> 51;
        q = (limbs[2] + q) >> 51;
        q = (limbs[3] + q) >> 51;
        q = (limbs[4] + q) >> 51;

        limbs[0] += 19 * q;

        limbs[1] += limbs[0] >> 51;
        limbs[0] &= LOW_51_BIT_MASK;
        limbs[2] += limbs[1] >> 51;
        limbs[1] &= LOW_51_BIT_MASK;
        limbs[3] += limbs[2] >> 51;
        limbs[2] &= LOW_51_BIT_MASK;
        limbs[4] += limbs[3] >> 51;
        limbs[3] &= LOW_51_BIT_MASK;
        limbs[4] &= LOW_51_BIT_MASK;

        let mut out = [0u8; 32];
        out[0] = limbs[0] as u8;
        out[1] = (limbs[0] >> 8) as u8;
        out[2] = (limbs[0] >> 16) as u8;
        out[3] = (limbs[0] >> 24) as u8;
        out[4] = (limbs[0] >> 32) as u8;
        out[5] = (limbs[0] >> 40) as u8;
        out[6] = ((limbs[0] >> 48) | (limbs[1] << 3)) as u8;
        out[7] = (limbs[1] >> 5) as u8;
        out[8] = (limbs[1] >> 13) as u8;
        out[9] = (limbs[1] >> 21) as u8;
        out[10] = (limbs[1] >> 29) as u8;
        out[11] = (limbs[1] >> 37) as u8;
        out[12] = ((limbs[1] >> 45) | (limbs[2] << 6)) as u8;
        out[13] = (limbs[2] >> 2) as u8;
        out[14] = (limbs[2] >> 10) as u8;
        out[15] = (limbs[2] >> 18) as u8;
        out[16] = (limbs[2] >> 26) as u8;
        out[17] = (limbs[2] >> 34) as u8;
        out[18] = (limbs[2] >> 42) as u8;
        out[19] = ((limbs[2] >> 50) | (limbs[3] << 1)) as u8;
        out[20] = (limbs[3] >> 7) as u8;
        out[21] = (limbs[3] >> 15) as u8;
        out[22] = (limbs[3] >> 23) as u8;
        out[23] = (limbs[3] >> 31) as u8;
        out[24] = (limbs[3] >> 39) as u8;
        out[25] = ((limbs[3] >> 47) | (limbs[4] << 4)) as u8;
        out[26] = (limbs[4] >> 4) as u8;
        out[27] = (limbs[4] >> 12) as u8;
        out[28] = (limbs[4] >> 20) as u8;
        out[29] = (limbs[4] >> 28) as u8;
        out[30] = (limbs[4] >> 36) as u8;
        out[31] = (limbs[4] >> 44) as u8;
        out
    }

    pub fn add(&self, rhs: &FieldElement) -> FieldElement {
        FieldElement([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
            self.0[3] + rhs.0[3],
            self.0[4] + rhs.0[4],
        ])
    }

    pub fn sub(&self, rhs: &FieldElement) -> FieldElement {
        // Add 16p before subtracting so limbs never underflow.
        FieldElement::weak_reduce([
            (self.0[0] + 36028797018963664) - rhs.0[0],
            (self.0[1] + 36028797018963952) - rhs.0[1],
            (self.0[2] + 36028797018963952) - rhs.0[2],
            (self.0[3] + 36028797018963952) - rhs.0[3],
            (self.0[4] + 36028797018963952) - rhs.0[4],
        ])
    }

    pub fn negate(&self) -> FieldElement {
        FieldElement::weak_reduce([
            36028797018963664 - self.0[0],
            36028797018963952 - self.0[1],
            36028797018963952 - self.0[2],
            36028797018963952 - self.0[3],
            36028797018963952 - self.0[4],
        ])
    }

    pub fn mul(&self, rhs: &FieldElement) -> FieldElement {
        #[inline(always)]
        fn m(x: u64, y: u64) -> u128 {
            (x as u128) * (y as u128)
        }

        let a = &self.0;
        let b = &rhs.0;

        // Limbs at index 1..4 of b wrap around at weight 19.
        let b1_19 = b[1] * 19;
        let b2_19 = b[2] * 19;
        let b3_19 = b[3] * 19;
        let b4_19 = b[4] * 19;

        let c0 = m(a[0], b[0]) + m(a[4], b1_19) + m(a[3], b2_19) + m(a[2], b3_19) + m(a[1], b4_19);
        let mut c1 =
            m(a[1], b[0]) + m(a[0], b[1]) + m(a[4], b2_19) + m(a[3], b3_19) + m(a[2], b4_19);
        let mut c2 =
            m(a[2], b[0]) + m(a[1], b[1]) + m(a[0], b[2]) + m(a[4], b3_19) + m(a[3], b4_19);
        let mut c3 =
            m(a[3], b[0]) + m(a[2], b[1]) + m(a[1], b[2]) + m(a[0], b[3]) + m(a[4], b4_19);
        let mut c4 =
            m(a[4], b[0]) + m(a[3], b[1]) + m(a[2], b[2]) + m(a[1], b[3]) + m(a[0], b[4]);

        let mut out = [0u64; 5];

        c1 += (c0 >> 51) as u64 as u128;
        out[0] = (c0 as u64) & LOW_51_BIT_MASK;
        c2 += (c1 >> 51) as u64 as u128;
        out[1] = (c1 as u64) & LOW_51_BIT_MASK;
        c3 += (c2 >> 51) as u64 as u128;
        out[2] = (c2 as u64) & LOW_51_BIT_MASK;
        c4 += (c3 >> 51) as u64 as u128;
        out[3] = (c3 as u64) & LOW_51_BIT_MASK;
        let carry = (c4 >> 51) as u64;
        out[4] = (c4 as u64) & LOW_51_BIT_MASK;

        out[0] += carry * 19;
        out[1] += out[0] >> 51;
        out[0] &= LOW_51_BIT_MASK;

        FieldElement(out)
    }

    pub fn square(&self) -> FieldElement {
        self.mul(self)
    }

    /// Raise to the 2^k-th power by repeated squaring.
    fn pow2k(&self, k: u32) -> FieldElement {
        let mut result = *self;
        for _ in 0..k {
            result = result.square();
        }
        result
    }

    /// Multiplicative inverse via Fermat's little theorem (x^(p-2)).
    pub fn invert(&self) -> FieldElement {
        // Addition chain for p - 2 = 2^255 - 21.
        let z2 = self.square(); // 2
        let z9 = z2.square().square().mul(self); // 9
        let z11 = z9.mul(&z2); // 11
        let z2_5_0 = z11.square().mul(&z9); // 2^5 - 1
        let z2_10_0 = z2_5_0.pow2k(5).mul(&z2_5_0); // 2^10 - 1
        let z2_20_0 = z2_10_0.pow2k(10).mul(&z2_10_0); // 2^20 - 1
        let z2_40_0 = z2_20_0.pow2k(20).mul(&z2_20_0); // 2^40 - 1
        let z2_50_0 = z2_40_0.pow2k(10).mul(&z2_10_0); // 2^50 - 1
        let z2_100_0 = z2_50_0.pow2k(50).mul(&z2_50_0); // 2^100 - 1
        let z2_200_0 = z2_100_0.pow2k(100).mul(&z2_100_0); // 2^200 - 1
        let z2_250_0 = z2_200_0.pow2k(50).mul(&z2_50_0); // 2^250 - 1
        z2_250_0.pow2k(5).mul(&z11) // 2^255 - 21
    }

    /// Sign of the canonical representative (low bit).
    pub fn is_negative(&self) -> u8 {
        self.to_bytes()[0] & 1
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        FieldElement([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
            u64::conditional_select(&a.0[4], &b.0[4], choice),
        ])
    }
}
