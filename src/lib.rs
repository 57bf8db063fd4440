//! Arbitrary precision real arithmetic with explicit precision tracking.
//!
//! ## Introduction
//!
//! **Numbers**
//!
//! The library builds three value types on top of each other. [`BigUint`] is
//! an unsigned magnitude stored as a vector of 64-bit words. [`BigInt`] pairs
//! a magnitude with a sign. [`BigFloat`] represents the real number
//! `significand * 2^exponent` together with the number of *reliable* bits of
//! the significand.
//!
//! Instead of a fixed working width, every [`BigFloat`] operation propagates
//! the precision through the computation: addition recomputes it from the
//! operands' lowest reliable bits (so catastrophic cancellation is accounted
//! for), multiplication keeps the smaller of the two, and shifts are exact.
//! The Newton iterations for the reciprocal and the square root double the
//! tracked precision every step and stop when it reaches the precision of the
//! input.
//!
//! **Multiplication**
//!
//! Products dispatch by operand size: schoolbook multiplication for small
//! operands, Karatsuba for medium ones, and Schönhage-Strassen over the ring
//! `Z/(2^n+1)` when both operands are large. In that ring the principal root
//! of unity is a power of two, so every transform twiddle is a shift followed
//! by a cheap reduction.
//!
//! **Decimal output**
//!
//! Values convert to decimal strings by scaling with the reciprocal of a
//! power of ten and reading the digits off the fraction, splitting the
//! requested digit count recursively.
//!
//! ## Examples
//!
//! ```rust
//! use tracked_float::compute_pi;
//!
//! // 100 digits of pi with a margin for the series truncation
//! let pi = compute_pi(120).unwrap();
//!
//! assert!(pi.to_string().starts_with("3.141592653589793238462643383279"));
//! ```

#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::collapsible_else_if)]

mod bigfloat;
mod bigint;
mod biguint;
mod common;
mod defs;
mod mul;
mod pi;
mod strop;

pub use crate::bigfloat::inverse;
pub use crate::bigfloat::sqrt;
pub use crate::bigfloat::sqrt_inverse;
pub use crate::bigfloat::BigFloat;
pub use crate::bigint::BigInt;
pub use crate::biguint::BigUint;
pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::Sign;
pub use crate::defs::Word;
pub use crate::mul::multiply;
pub use crate::mul::Gf2n1;
pub use crate::pi::compute_pi;
pub use crate::strop::log10_int;

pub use crate::defs::WORD_BASE;
pub use crate::defs::WORD_BIT_SIZE;
pub use crate::defs::WORD_MAX;
pub use crate::defs::WORD_SIGNIFICANT_BIT;
