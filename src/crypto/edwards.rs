//! Group operations on the Ed25519 twisted Edwards curve
//!
//! -x^2 + y^2 = 1 + d x^2 y^2 over GF(2^255 - 19).
//!
//! Points move between five representations: extended (X:Y:Z:T with
//! XY = ZT), projective (X:Y:Z), completed (a pair of projective
//! points, the output of the addition formulas), cached
//! (Y+X, Y-X, Z, 2dT) for readdition, and affine Niels
//! (y+x, y-x, 2dxy) for table entries.

use lazy_static::lazy_static;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::field::FieldElement;
use super::scalar;

/// Point in extended coordinates (X:Y:Z:T), XY = ZT.
#[derive(Clone, Copy, Debug)]
pub struct EdwardsPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

/// Point in projective coordinates (X:Y:Z).
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
}

/// Output of the addition and doubling formulas: ((X:Z), (Y:T)).
#[derive(Clone, Copy, Debug)]
pub struct CompletedPoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
    t: FieldElement,
}

/// Readdition-ready form of an extended point.
#[derive(Clone, Copy, Debug)]
pub struct ProjectiveNielsPoint {
    y_plus_x: FieldElement,
    y_minus_x: FieldElement,
    z: FieldElement,
    t2d: FieldElement,
}

/// Precomputed affine point for the fixed-base table.
#[derive(Clone, Copy, Debug)]
pub struct AffineNielsPoint {
    y_plus_x: FieldElement,
    y_minus_x: FieldElement,
    xy2d: FieldElement,
}

impl EdwardsPoint {
    pub const IDENTITY: EdwardsPoint = EdwardsPoint {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
        t: FieldElement::ZERO,
    };

    /// The Ed25519 basepoint B.
    pub fn basepoint() -> EdwardsPoint {
        EdwardsPoint {
            x: FieldElement::BASE_X,
            y: FieldElement::BASE_Y,
            z: FieldElement::ONE,
            t: FieldElement::BASE_X.mul(&FieldElement::BASE_Y),
        }
    }

    pub fn to_projective(self) -> ProjectivePoint {
        ProjectivePoint {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }

    pub fn to_cached(self) -> ProjectiveNielsPoint {
        ProjectiveNielsPoint {
            y_plus_x: self.y.add(&self.x),
            y_minus_x: self.y.sub(&self.x),
            z: self.z,
            t2d: self.t.mul(&FieldElement::D2),
        }
    }

    pub fn to_affine_niels(self) -> AffineNielsPoint {
        let zinv = self.z.invert();
        let x = self.x.mul(&zinv);
        let y = self.y.mul(&zinv);
        AffineNielsPoint {
            y_plus_x: y.add(&x),
            y_minus_x: y.sub(&x),
            xy2d: x.mul(&y).mul(&FieldElement::D2),
        }
    }

    /// Unified addition against a cached point.
    pub fn add_cached(&self, other: &ProjectiveNielsPoint) -> CompletedPoint {
        let pp = self.y.add(&self.x).mul(&other.y_plus_x);
        let mm = self.y.sub(&self.x).mul(&other.y_minus_x);
        let tt2d = self.t.mul(&other.t2d);
        let zz = self.z.mul(&other.z);
        let zz2 = zz.add(&zz);
        CompletedPoint {
            x: pp.sub(&mm),
            y: pp.add(&mm),
            z: zz2.add(&tt2d),
            t: zz2.sub(&tt2d),
        }
    }

    /// Mixed addition against an affine Niels point (Z2 = 1).
    pub fn add_affine_niels(&self, other: &AffineNielsPoint) -> CompletedPoint {
        let pp = self.y.add(&self.x).mul(&other.y_plus_x);
        let mm = self.y.sub(&self.x).mul(&other.y_minus_x);
        let txy2d = self.t.mul(&other.xy2d);
        let z2 = self.z.add(&self.z);
        CompletedPoint {
            x: pp.sub(&mm),
            y: pp.add(&mm),
            z: z2.add(&txy2d),
            t: z2.sub(&txy2d),
        }
    }

    pub fn double(&self) -> CompletedPoint {
        self.to_projective().double()
    }

    /// Multiply by 2^k, k >= 1.
    pub fn mul_by_pow_2(&self, k: u32) -> EdwardsPoint {
        let mut s = self.to_projective();
        for _ in 0..(k - 1) {
            s = s.double().to_projective();
        }
        s.double().to_extended()
    }

    /// Compress to the 32-byte encoding: canonical y with the sign of
    /// x in bit 255.
    pub fn compress(&self) -> [u8; 32] {
        let zinv = self.z.invert();
        let x = self.x.mul(&zinv);
        let y = self.y.mul(&zinv);
        let mut bytes = y.to_bytes();
        bytes[31] ^= x.is_negative() << 7;
        bytes
    }
}

impl ProjectivePoint {
    pub fn to_extended(self) -> EdwardsPoint {
        EdwardsPoint {
            x: self.x.mul(&self.z),
            y: self.y.mul(&self.z),
            z: self.z.square(),
            t: self.x.mul(&self.y),
        }
    }

    pub fn double(&self) -> CompletedPoint {
        let xx = self.x.square();
        let yy = self.y.square();
        let zz = self.z.square();
        let zz2 = zz.add(&zz);
        let xy = self.x.add(&self.y);
        let xy2 = xy.square();
        let yy_plus_xx = yy.add(&xx);
        let yy_minus_xx = yy.sub(&xx);
        CompletedPoint {
            x: xy2.sub(&yy_plus_xx),
            y: yy_plus_xx,
            z: yy_minus_xx,
            t: zz2.sub(&yy_minus_xx),
        }
    }
}

impl CompletedPoint {
    pub fn to_extended(self) -> EdwardsPoint {
        EdwardsPoint {
            x: self.x.mul(&self.t),
            y: self.y.mul(&self.z),
            z: self.z.mul(&self.t),
            t: self.x.mul(&self.y),
        }
    }

    pub fn to_projective(self) -> ProjectivePoint {
        ProjectivePoint {
            x: self.x.mul(&self.t),
            y: self.y.mul(&self.z),
            z: self.z.mul(&self.t),
        }
    }
}

impl AffineNielsPoint {
    const IDENTITY: AffineNielsPoint = AffineNielsPoint {
        y_plus_x: FieldElement::ONE,
        y_minus_x: FieldElement::ONE,
        xy2d: FieldElement::ZERO,
    };

    /// Constant-time lookup of x*P from a row of [1P, 2P, ..., 8P],
    /// for x in -8..=8 (negative x selects the negated entry).
    fn select(row: &[AffineNielsPoint; 8], x: i8) -> AffineNielsPoint {
        let xnegative = Choice::from((x as u8 >> 7) & 1);
        let xmask = x >> 7;
        let xabs = ((x + xmask) ^ xmask) as u8;

        let mut t = AffineNielsPoint::IDENTITY;
        for (j, entry) in row.iter().enumerate() {
            t.conditional_assign(entry, xabs.ct_eq(&(j as u8 + 1)));
        }

        let minus_t = AffineNielsPoint {
            y_plus_x: t.y_minus_x,
            y_minus_x: t.y_plus_x,
            xy2d: t.xy2d.negate(),
        };
        t.conditional_assign(&minus_t, xnegative);
        t
    }
}

impl ConditionallySelectable for AffineNielsPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        AffineNielsPoint {
            y_plus_x: FieldElement::conditional_select(&a.y_plus_x, &b.y_plus_x, choice),
            y_minus_x: FieldElement::conditional_select(&a.y_minus_x, &b.y_minus_x, choice),
            xy2d: FieldElement::conditional_select(&a.xy2d, &b.xy2d, choice),
        }
    }
}

lazy_static! {
    /// Row i holds [1, 2, ..., 8] * 16^(2i) * B in affine Niels form.
    static ref BASEPOINT_TABLE: Box<[[AffineNielsPoint; 8]; 32]> = build_basepoint_table();
}

fn build_basepoint_table() -> Box<[[AffineNielsPoint; 8]; 32]> {
    let mut table = Box::new([[AffineNielsPoint::IDENTITY; 8]; 32]);
    let mut row_base = EdwardsPoint::basepoint();
    for row in table.iter_mut() {
        let cached = row_base.to_cached();
        let mut multiple = row_base;
        for entry in row.iter_mut() {
            *entry = multiple.to_affine_niels();
            multiple = multiple.add_cached(&cached).to_extended();
        }
        row_base = row_base.mul_by_pow_2(8);
    }
    table
}

/// Fixed-base scalar multiplication a*B.
///
/// The scalar is first reduced mod the group order, so unreduced
/// 32-byte inputs (top bit set) are accepted; the result equals
/// (a mod L)*B.
pub fn scalar_mul_base(scalar_bytes: &[u8; 32]) -> EdwardsPoint {
    let a = scalar::reduce32(scalar_bytes);

    // Signed radix-16 digits, -8..=7 per nibble with carry; the final
    // digit stays <= 8 because the reduced scalar's top nibble is at
    // most 1.
    let mut e = [0i8; 64];
    for (i, byte) in a.iter().enumerate() {
        e[2 * i] = (byte & 15) as i8;
        e[2 * i + 1] = ((byte >> 4) & 15) as i8;
    }
    let mut carry = 0i8;
    for digit in e.iter_mut().take(63) {
        *digit += carry;
        carry = (*digit + 8) >> 4;
        *digit -= carry << 4;
    }
    e[63] += carry;

    let mut h = EdwardsPoint::IDENTITY;
    for i in (1..64).step_by(2) {
        let t = AffineNielsPoint::select(&BASEPOINT_TABLE[i / 2], e[i]);
        h = h.add_affine_niels(&t).to_extended();
    }

    h = h.mul_by_pow_2(4);

    for i in (0..64).step_by(2) {
        let t = AffineNielsPoint::select(&BASEPOINT_TABLE[i / 2], e[i]);
        h = h.add_affine_niels(&t).to_extended();
    }

    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_compresses_to_one() {
        let mut expected = [0u8; 32];
        expected[0] = 1;
        assert_eq!(EdwardsPoint::IDENTITY.compress(), expected);
    }

    #[test]
    fn test_basepoint_compression() {
        // The canonical encoding of B: y = 4/5, x positive.
        assert_eq!(
            hex::encode(EdwardsPoint::basepoint().compress()),
            "5866666666666666666666666666666666666666666666666666666666666666"
        );
    }

    #[test]
    fn test_scalar_one_gives_basepoint() {
        let mut one = [0u8; 32];
        one[0] = 1;
        assert_eq!(
            scalar_mul_base(&one).compress(),
            EdwardsPoint::basepoint().compress()
        );
    }

    #[test]
    fn test_scalar_two_matches_doubling() {
        let mut two = [0u8; 32];
        two[0] = 2;
        let doubled = EdwardsPoint::basepoint().double().to_extended();
        assert_eq!(scalar_mul_base(&two).compress(), doubled.compress());
    }

    #[test]
    fn test_group_order_times_base_is_identity() {
        // L*B = identity.
        let l: [u8; 32] = [
            0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9,
            0xde, 0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x10,
        ];
        assert_eq!(
            scalar_mul_base(&l).compress(),
            EdwardsPoint::IDENTITY.compress()
        );
    }

    #[test]
    fn test_unreduced_scalar_matches_reduced() {
        let seed: [u8; 32] = {
            let mut s = [0u8; 32];
            for (i, b) in s.iter_mut().enumerate() {
                *b = 0xe0 + i as u8;
            }
            s
        };
        let reduced = scalar::reduce32(&seed);
        assert_eq!(
            scalar_mul_base(&seed).compress(),
            scalar_mul_base(&reduced).compress()
        );
    }

    #[test]
    fn test_known_public_spend_key() {
        let mut seed = [0u8; 32];
        seed.copy_from_slice(
            &hex::decode("4e25d92060638d875517575c5bd285f2208c86390fa29f597c31f5ee3bccae0e")
                .unwrap(),
        );
        assert_eq!(
            hex::encode(scalar_mul_base(&seed).compress()),
            "1e40e628f2195b5a9a1757b55951933c707b3b397425a57f737985347fc4afa6"
        );
    }
}
