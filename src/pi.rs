//! Chudnovsky series driver.
//!
//! The series for `1/pi` converges by about 14.18 decimal digits per term.
//! The partial sums are folded into the three integers `(P, Q, T)` by binary
//! splitting, so that no big-rational reductions are needed along the way.

use crate::bigfloat::sqrt_inverse;
use crate::bigfloat::BigFloat;
use crate::bigint::BigInt;
use crate::biguint::BigUint;
use crate::defs::Error;
use crate::defs::Sign;

const A: u64 = 13591409;
const B: u64 = 545140134;
const C: u64 = 640320;
const C3_OVER_24: u64 = C * C * C / 24;

const LOG2_10: f64 = 3.321928094887362;

// a(k) = (A + B*k) * (-1)^k
fn term_a(k: u64) -> BigInt {
    let value = BigUint::from_word(A).add(&BigUint::from_word(B).mul(&BigUint::from_word(k)));
    let sign = if k % 2 == 0 { Sign::Pos } else { Sign::Neg };

    BigInt::new(value, sign)
}

// p(k) = (2k-1)(6k-5)(6k-1)
fn term_p(k: u64) -> BigInt {
    BigInt::from_word(2 * k - 1)
        .mul(&BigInt::from_word(6 * k - 5))
        .mul(&BigInt::from_word(6 * k - 1))
}

// q(k) = k^3 * C^3/24
fn term_q(k: u64) -> Result<BigInt, Error> {
    let value = BigUint::from_word(k).pow(3)?.mul(&BigUint::from_word(C3_OVER_24));

    Ok(BigInt::from(value))
}

// (P, Q, T) over the term range [n1, n2):
// P is the product of p(k), Q the product of q(k), T the sum of a(k)
// multiplied by the partial products of p up to k.
fn compute_pqt(n1: u64, n2: u64) -> Result<(BigInt, BigInt, BigInt), Error> {
    if n1 + 1 == n2 {
        let p = term_p(n2);
        let q = term_q(n2)?;
        let t = term_a(n2).mul(&p);

        Ok((p, q, t))
    } else {
        let m = (n1 + n2) / 2;

        let (p1, q1, t1) = compute_pqt(n1, m)?;
        let (p2, q2, t2) = compute_pqt(m, n2)?;

        let t = t1.mul(&q2).add(&t2.mul(&p1));
        let p = p1.mul(&p2);
        let q = q1.mul(&q2);

        Ok((p, q, t))
    }
}

/// Computes pi to about `digit_len` decimal digits.
///
/// The internal precision is `digit_len * log2(10) + 1` bits, and one series
/// term is taken per 14 requested digits.
pub fn compute_pi(digit_len: u64) -> Result<BigFloat, Error> {
    let terms = (digit_len / 14).max(1);
    let precision = (digit_len as f64 * LOG2_10) as i64 + 1;

    let (_p, q, t) = compute_pqt(0, terms)?;

    let sqrt_c_inv = sqrt_inverse(&BigFloat::from_word(precision, C))?;

    let numerator = BigFloat::from_int(precision, BigInt::from_word(C * C).mul(&q));
    let denominator = BigFloat::from_int(
        precision,
        BigInt::from_word(12).mul(&BigInt::from_word(A).mul(&q).add(&t)),
    );

    numerator.mul(&sqrt_c_inv).div(&denominator)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_pqt_single_term() {
        let (p, q, t) = compute_pqt(0, 1).unwrap();

        // p(1) = 1 * 1 * 5, a(1) = -(A + B)
        assert_eq!(p, BigInt::from_word(5));
        assert_eq!(q, BigInt::from_word(C3_OVER_24));
        assert_eq!(t, BigInt::new(BigUint::from_word((A + B) * 5), Sign::Neg));
    }

    #[test]
    fn test_pqt_split_matches_direct_sum() {
        // T(0, n) folded by the splitting tree equals the directly built sum
        // of a(k) * p(1..k) * q(k+1..n)
        let (_, q, t) = compute_pqt(0, 4).unwrap();

        let mut q_acc = BigInt::from_word(1);
        for k in 1..5 {
            q_acc = q_acc.mul(&term_q(k).unwrap());
        }

        let mut direct = BigInt::default();
        let mut p_run = BigInt::from_word(1);
        for k in 1..5 {
            p_run = p_run.mul(&term_p(k));
            let mut rest = BigInt::from_word(1);
            for j in k + 1..5 {
                rest = rest.mul(&term_q(j).unwrap());
            }
            direct = direct.add(&term_a(k).mul(&p_run).mul(&rest));
        }

        assert_eq!(q, q_acc);
        assert_eq!(t, direct);
    }

    #[test]
    fn test_pi_digits() {
        // four terms cover 40 digits with a margin
        let pi = compute_pi(56).unwrap();
        let s = pi.to_string();

        assert_eq!(&s[..42], "3.1415926535897932384626433832795028841971");
    }
}
