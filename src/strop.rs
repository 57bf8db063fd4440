//! Decimal string conversion.

use crate::bigfloat::inverse;
use crate::bigfloat::BigFloat;
use crate::bigint::BigInt;
use crate::biguint::BigUint;
use crate::defs::Error;
use core::fmt;

const LOG2_10: f64 = 3.321928094887362;

// 10^n
fn pow10(n: u64) -> Result<BigUint, Error> {
    BigUint::from_word(10).pow(n)
}

/// Returns the floor of the base 10 logarithm of `num`.
///
/// ## Errors
///
///  - OutOfDomain: `num` is zero.
pub fn log10_int(num: &BigUint) -> Result<i64, Error> {
    if num.is_zero() {
        return Err(Error::OutOfDomain);
    }

    // grow the range by doubling until 10^r exceeds num, then bisect
    let mut r: i64 = 1;
    while pow10(r as u64)? <= *num {
        r *= 2;
    }

    let mut l = r / 2;
    while r - l > 1 {
        let m = (l + r) / 2;
        if pow10(m as u64)? <= *num {
            l = m;
        } else {
            r = m;
        }
    }

    Ok(l)
}

// digits of value in a field of len characters, zero padded on the left
fn padded_digits(mut value: u64, len: usize) -> String {
    let mut digits = String::with_capacity(len);

    while value > 0 {
        digits.push(char::from(b'0' + (value % 10) as u8));
        value /= 10;
    }

    while digits.len() < len {
        digits.push('0');
    }

    digits.chars().rev().collect()
}

// The first digit_len decimal digits of the fractional value num in [0, 1).
// A request of up to 19 digits goes through a single word; larger requests
// split in half, the lower half continuing from the fractional part left
// after scaling out the upper digits.
fn fractional_to_string(num: BigFloat, digit_len: i64) -> Result<String, Error> {
    let precision = num.precision();

    if digit_len <= 0 {
        return Ok(String::new());
    }

    if digit_len <= 19 {
        // 10^19 still fits in a word
        let scale = BigFloat::from_int(precision, BigInt::from(pow10(digit_len as u64)?));
        let value = num.mul(&scale).integer_part().magnitude().to_word()?;

        return Ok(padded_digits(value, digit_len as usize));
    }

    let upper_len = digit_len / 2;
    let lower_len = digit_len - upper_len;

    let upper = fractional_to_string(num.clone(), upper_len)?;

    let scale = BigFloat::from_int(precision, BigInt::from(pow10(upper_len as u64)?));
    let lower = fractional_to_string(num.mul(&scale).fractional_part(), lower_len)?;

    Ok(upper + &lower)
}

// Decimal digits of an unsigned integer. The integer is scaled into [0, 1)
// by the reciprocal of the closest larger power of ten, and the digits are
// read off the fraction.
fn uint_to_string(num: &BigUint) -> Result<String, Error> {
    if num.is_zero() {
        return Ok("0".to_string());
    }

    let digit_len = log10_int(num)? + 1;
    let bit_len = num.bit_len() as i64;

    let b = BigFloat::from_int(bit_len + 10, BigInt::from(pow10(digit_len as u64)?));
    let inv_b = inverse(&b)?;

    let f = BigFloat::from_int(bit_len + 10, BigInt::from(num.clone())).mul(&inv_b);
    // add half of the scale unit to round to nearest
    let f = f.add(inv_b.shr(1));

    fractional_to_string(f, digit_len)
}

fn int_to_string(num: &BigInt) -> Result<String, Error> {
    let abs = uint_to_string(num.magnitude())?;
    let sign = if num.sign().is_negative() { "-" } else { "" };

    Ok(format!("{}{}", sign, abs))
}

fn float_to_string(num: &BigFloat) -> Result<String, Error> {
    let integer_part = num.integer_part();
    let fractional_part = num.fractional_part();

    let digit_len = (fractional_part.fractional_precision() as f64 / LOG2_10) as i64;

    let integer = int_to_string(&integer_part)?;
    let fractional = fractional_to_string(fractional_part, digit_len)?;

    Ok(integer + "." + &fractional)
}

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = uint_to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = int_to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl fmt::Display for BigFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = float_to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::Sign;
    use crate::defs::Word;
    use rand::random;

    #[test]
    fn test_log10_int() {
        assert_eq!(log10_int(&BigUint::default()).unwrap_err(), Error::OutOfDomain);
        assert_eq!(log10_int(&BigUint::from_word(1)).unwrap(), 0);
        assert_eq!(log10_int(&BigUint::from_word(9)).unwrap(), 0);
        assert_eq!(log10_int(&BigUint::from_word(10)).unwrap(), 1);
        assert_eq!(log10_int(&BigUint::from_word(999)).unwrap(), 2);
        assert_eq!(log10_int(&BigUint::from_word(1000)).unwrap(), 3);
        assert_eq!(log10_int(&pow10(40).unwrap()).unwrap(), 40);
    }

    #[test]
    fn test_uint_display() {
        assert_eq!(BigUint::default().to_string(), "0");
        assert_eq!(BigUint::from_word(1).to_string(), "1");
        assert_eq!(BigUint::from_word(334334334334).to_string(), "334334334334");

        // more than 19 digits exercises the recursive split
        let mut expected = String::from("1");
        for _ in 0..25 {
            expected.push('0');
        }
        assert_eq!(pow10(25).unwrap().to_string(), expected);
    }

    #[test]
    fn test_uint_display_random() {
        for _ in 0..100 {
            let v = random::<Word>();
            assert_eq!(BigUint::from_word(v).to_string(), v.to_string());
        }
    }

    #[test]
    fn test_int_display() {
        assert_eq!(BigInt::from_word(334).to_string(), "334");
        assert_eq!(BigInt::new(BigUint::from_word(334), Sign::Neg).to_string(), "-334");
        assert_eq!(BigInt::default().to_string(), "0");
    }

    #[test]
    fn test_float_display_round_trip() {
        let x = BigFloat::from_int(128, BigInt::from_word(334334334334))
            .div(&BigFloat::from_int(128, BigInt::from_word(1000000000000)))
            .unwrap();

        let s = x.to_string();
        assert!(
            &s[..20] == "0.334334334334000000" || &s[..20] == "0.334334334333999999",
            "{}",
            s
        );
    }
}
