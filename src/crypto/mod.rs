//! Curve and field arithmetic for key derivation
//!
//! Self-contained Ed25519 group arithmetic: the derivation pipeline
//! only ever multiplies the basepoint, so no decompression or general
//! scalar multiplication is carried.

pub mod edwards;
pub mod field;
pub mod scalar;

pub use edwards::{scalar_mul_base, EdwardsPoint};
pub use field::FieldElement;
