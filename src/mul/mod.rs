//! Multiplication of big integers.

mod ssa;

pub use ssa::Gf2n1;

use crate::biguint::BigUint;
use crate::defs::DoubleWord;
use crate::defs::Word;
use crate::defs::WORD_BIT_SIZE;

// largest size of the smaller operand in words for which the schoolbook
// algorithm is used
const NAIVE_MAX_WORDS: usize = 64;

// smallest size of the smaller operand in bits for which the transform-based
// algorithm is used
const SSA_MIN_BITS: usize = 1 << 15;

/// Returns `lhs * rhs` using an algorithm chosen by the operand sizes:
/// schoolbook multiplication for small operands, Karatsuba for medium ones,
/// and Schönhage-Strassen when both operands are large.
pub fn multiply(lhs: &BigUint, rhs: &BigUint) -> BigUint {
    let min_len = lhs.words().len().min(rhs.words().len());

    if min_len <= NAIVE_MAX_WORDS {
        mul_naive(lhs, rhs)
    } else if lhs.bit_len().min(rhs.bit_len()) >= SSA_MIN_BITS {
        ssa::mul_ssa(lhs, rhs)
    } else {
        mul_karatsuba(lhs, rhs)
    }
}

// schoolbook multiplication, each inner product is 128-bit wide
pub(crate) fn mul_naive(lhs: &BigUint, rhs: &BigUint) -> BigUint {
    let s1 = lhs.words();
    let s2 = rhs.words();

    let mut ans = vec![0 as Word; s1.len() + s2.len()];

    for (i, d1) in s1.iter().enumerate() {
        let d1 = *d1 as DoubleWord;
        if d1 == 0 {
            continue;
        }

        let mut k = 0;
        for (d2, r) in s2.iter().zip(ans[i..].iter_mut()) {
            let m = d1 * (*d2 as DoubleWord) + *r as DoubleWord + k;

            *r = m as Word;
            k = m >> WORD_BIT_SIZE;
        }
        ans[i + s2.len()] += k as Word;
    }

    BigUint::from_words(ans)
}

// split the operands at half of the larger one and recurse into the three
// half-sized products
pub(crate) fn mul_karatsuba(lhs: &BigUint, rhs: &BigUint) -> BigUint {
    let max_len = lhs.words().len().max(rhs.words().len());
    let min_len = lhs.words().len().min(rhs.words().len());

    if min_len <= NAIVE_MAX_WORDS {
        return mul_naive(lhs, rhs);
    }

    let shift = (max_len + 1) / 2 * WORD_BIT_SIZE;

    let lhs_high = lhs.shr(shift);
    let rhs_high = rhs.shr(shift);
    let lhs_low = lhs.shr_mod_pow2(0, shift);
    let rhs_low = rhs.shr_mod_pow2(0, shift);

    let k1 = mul_karatsuba(&lhs_low, &rhs_low);
    let k2 = mul_karatsuba(&lhs_high, &rhs_high);
    let k3 = mul_karatsuba(&lhs_low.add(&lhs_high), &rhs_low.add(&rhs_high));

    // k3 >= k1 + k2 holds for any operands
    let mut mid = k3;
    mid.sub_assign_unchecked(&k1);
    mid.sub_assign_unchecked(&k2);

    let mut ret = k1;
    ret.shl_add(&k2, 2 * shift);
    ret.shl_add(&mid, shift);
    ret
}
