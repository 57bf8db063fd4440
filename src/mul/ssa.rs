//! Schönhage-Strassen multiplication over the ring `Z/(2^n+1)`.

use crate::biguint::BigUint;
use crate::defs::Error;
use crate::mul::multiply;
use smallvec::SmallVec;

/// Residue of the ring `Z/(2^n+1)`.
///
/// The stored value lies in `[0, 2^n]`; `2^n` represents `-1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gf2n1 {
    n: usize,
    value: BigUint,
}

impl Gf2n1 {
    /// Creates the zero residue of `Z/(2^n+1)`.
    pub fn new(n: usize) -> Self {
        Gf2n1 { n, value: BigUint::default() }
    }

    /// Wraps `value` as a residue of `Z/(2^n+1)`. The value is stored as given.
    pub fn from_uint(n: usize, value: BigUint) -> Self {
        Gf2n1 { n, value }
    }

    /// Returns `2^p mod (2^n+1)`.
    ///
    /// Since `2^n = -1` and `2^(2n) = 1` in the ring, `p` is first taken
    /// modulo `2n`, and a single reduction pass handles `p > n`.
    pub fn make_2pow(p: usize, n: usize) -> Self {
        let p = p % (2 * n);

        let mut value = BigUint::from_word(1);
        value.shl_assign(p);

        let mut ret = Gf2n1 { n, value };
        if p > n {
            ret.reduce();
        }

        ret
    }

    /// The residue value.
    #[inline]
    pub fn get(&self) -> &BigUint {
        &self.value
    }

    /// Computes `self + rhs` in the ring.
    ///
    /// ## Errors
    ///
    ///  - ModulusMismatch: the operands belong to rings with different `n`.
    pub fn add_assign(&mut self, rhs: &Self) -> Result<(), Error> {
        if self.n != rhs.n {
            return Err(Error::ModulusMismatch);
        }

        self.add_assign_impl(rhs);
        Ok(())
    }

    /// Computes `self - rhs` in the ring.
    ///
    /// ## Errors
    ///
    ///  - ModulusMismatch: the operands belong to rings with different `n`.
    pub fn sub_assign(&mut self, rhs: &Self) -> Result<(), Error> {
        if self.n != rhs.n {
            return Err(Error::ModulusMismatch);
        }

        self.sub_assign_impl(rhs);
        Ok(())
    }

    /// Computes `self * rhs` in the ring.
    ///
    /// ## Errors
    ///
    ///  - ModulusMismatch: the operands belong to rings with different `n`.
    pub fn mul_assign(&mut self, rhs: &Self) -> Result<(), Error> {
        if self.n != rhs.n {
            return Err(Error::ModulusMismatch);
        }

        self.mul_assign_impl(rhs);
        Ok(())
    }

    fn add_assign_impl(&mut self, rhs: &Self) {
        debug_assert_eq!(self.n, rhs.n);

        self.value.add_assign(&rhs.value);
        self.reduce();
    }

    fn sub_assign_impl(&mut self, rhs: &Self) {
        debug_assert_eq!(self.n, rhs.n);

        if self.value < rhs.value {
            self.add_modulus();
        }
        self.value.sub_assign_unchecked(&rhs.value);
        self.reduce();
    }

    fn mul_assign_impl(&mut self, rhs: &Self) {
        debug_assert_eq!(self.n, rhs.n);

        self.value = multiply(&self.value, &rhs.value);
        self.reduce();
    }

    // If the value is q*2^n + r with 0 <= q,r < 2^n+1, then it is congruent
    // to r - q. A single pass is enough for any value not exceeding 2^(2n).
    fn reduce(&mut self) {
        let q = self.value.shr(self.n);
        if q.is_zero() {
            return;
        }

        self.value.mod_pow2(self.n);

        if self.value < q {
            self.add_modulus();
        }
        self.value.sub_assign_unchecked(&q);
    }

    fn add_modulus(&mut self) {
        self.value.add_pow2(self.n);
        self.value.increment();
    }
}

// ring width n of the transform for the split parameter k
fn ring_width(k: usize) -> usize {
    1 << (k - 1)
}

// width of a single digit in bits for the split parameter k
fn digit_width(k: usize) -> usize {
    (ring_width(k) - k) / 2
}

// Smallest k in [1, 32] such that an operand of bit_len bits occupies at most
// half of the 2^k digits. The low half then covers the whole product, and the
// digit products of two halves fit in Z/(2^n+1) without wrapping.
fn best_k(bit_len: u64) -> usize {
    let mut l: usize = 0;
    let mut r: usize = 32;

    while r - l > 1 {
        let m = (l + r) / 2;
        let max_len = digit_width(m) as u64 * (1 << (m - 1));
        if max_len >= bit_len {
            r = m;
        } else {
            l = m;
        }
    }

    r
}

// An integer split into 2^k digits of digit_width(k) bits, each held as a
// residue of Z/(2^n+1).
struct SplitInteger {
    values: SmallVec<[Gf2n1; 4]>,
    k: usize,
    n: usize,
    m: usize,
}

impl SplitInteger {
    fn new(num: &BigUint, k: usize) -> Self {
        let n = ring_width(k);
        let m = digit_width(k);
        let count = 1usize << k;

        let mut values: SmallVec<[Gf2n1; 4]> = SmallVec::with_capacity(count);
        for i in 0..count {
            let x = num.shr_mod_pow2(i * m, m);
            values.push(Gf2n1::from_uint(n, x));
        }

        SplitInteger { values, k, n, m }
    }

    // recombine the digits; ring residues can exceed the digit width, the
    // carries spill into the neighbouring positions
    fn get(&self) -> BigUint {
        let mut ans = BigUint::default();

        for (i, x) in self.values.iter().enumerate() {
            ans.shl_add(x.get(), i * self.m);
        }

        ans
    }

    // radix-2 decimation in time with the principal 2N-th root of unity
    // w = 2, so every twiddle is a shift followed by a reduction
    fn ntt(&mut self) {
        let len = self.values.len();

        let mut q = len / 2;
        while q > 0 {
            let p = len / q / 2;

            for i in 0..q {
                let w = Gf2n1::make_2pow(i * p, self.n);

                let mut j = i;
                while j < len {
                    let (lo, hi) = self.values.split_at_mut(j + q);
                    let a = &mut lo[j];
                    let b = &mut hi[0];

                    let mut tmp = a.clone();
                    tmp.sub_assign_impl(b);
                    a.add_assign_impl(b);
                    tmp.mul_assign_impl(&w);
                    *b = tmp;

                    j += 2 * q;
                }
            }

            q /= 2;
        }

        // bit-reversal permutation
        let mut i = 0;
        for j in 1..len {
            let mut l = len / 2;
            i ^= l;
            while i < l {
                l /= 2;
                i ^= l;
            }
            if j < i {
                self.values.swap(i, j);
            }
        }
    }

    // inverse transform: forward pass, index reversal, and scaling by
    // N^(-1) = 2^(2n-k)
    fn intt(&mut self) {
        self.ntt();

        let len = self.values.len();
        for i in 1..len / 2 {
            self.values.swap(i, len - i);
        }

        let w = Gf2n1::make_2pow(2 * self.n - self.k, self.n);
        for v in self.values.iter_mut() {
            v.mul_assign_impl(&w);
        }
    }

    fn pointwise_mul(&mut self, rhs: &Self) {
        debug_assert_eq!(self.k, rhs.k);

        for (a, b) in self.values.iter_mut().zip(rhs.values.iter()) {
            a.mul_assign_impl(b);
        }
    }
}

// multiply two integers via the number-theoretic transform
pub(crate) fn mul_ssa(lhs: &BigUint, rhs: &BigUint) -> BigUint {
    let bit_len = lhs.bit_len().max(rhs.bit_len());
    let k = best_k(bit_len as u64);

    let mut l = SplitInteger::new(lhs, k);
    let mut r = SplitInteger::new(rhs, k);

    l.ntt();
    r.ntt();
    l.pointwise_mul(&r);
    l.intt();

    l.get()
}
