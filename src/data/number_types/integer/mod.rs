//! # Integers
//!
//! Helpers on the integer types that back a rational number.
use num::{Integer, Signed};

/// Euclid's remainder loop, without normalizing the sign of the result.
///
/// The result divides both inputs and its absolute value is their greatest common divisor. Unlike
/// that absolute value, it is representable for all inputs: `signed_gcd(0, i32::MIN)` is
/// `i32::MIN`.
pub fn signed_gcd<I: Integer + Signed + Clone>(mut a: I, mut b: I) -> I {
    while !b.is_zero() {
        // `MIN % -1` overflows, although every integer is a multiple of a unit.
        let remainder = if b == -I::one() { I::zero() } else { a % b.clone() };
        a = b;
        b = remainder;
    }

    a
}

/// Greatest common divisor through Euclid's remainder loop.
///
/// Works on signed inputs; the result is always non-negative. `gcd(0, 0)` is `0`, which callers
/// that divide by the result need to rule out themselves.
///
/// # Panics
///
/// On overflow, when the greatest common divisor doesn't fit in `I`, as for `gcd(0, i32::MIN)`.
/// Use [`signed_gcd`] to reduce fractions.
pub fn gcd<I: Integer + Signed + Clone>(a: I, b: I) -> I {
    signed_gcd(a, b).abs()
}

#[cfg(test)]
mod test {
    use num::BigInt;

    use super::{gcd, signed_gcd};

    #[test]
    fn coprime() {
        assert_eq!(gcd(3, 7), 1);
        assert_eq!(gcd(1, 1), 1);
        assert_eq!(gcd(42_i64, 79), 1);
    }

    #[test]
    fn common_factor() {
        assert_eq!(gcd(4, 2), 2);
        assert_eq!(gcd(2, 4), 2);
        assert_eq!(gcd(12_i128, 18), 6);
    }

    #[test]
    fn signs() {
        assert_eq!(gcd(-4, 2), 2);
        assert_eq!(gcd(4, -2), 2);
        assert_eq!(gcd(-4, -2), 2);
        assert_eq!(gcd(-1, 3), 1);
    }

    #[test]
    fn zero() {
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(0, -5), 5);
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(signed_gcd(0, i32::MIN), i32::MIN);
        assert_eq!(signed_gcd(i64::MIN, 0), i64::MIN);
    }

    #[test]
    fn extremes() {
        assert_eq!(signed_gcd(i64::MIN, i64::MIN), i64::MIN);
        assert_eq!(signed_gcd(i64::MIN, -1).abs(), 1);
        assert_eq!(signed_gcd(i32::MIN, 1).abs(), 1);
        assert_eq!(signed_gcd(i128::MIN, 2).abs(), 2);
        assert_eq!(gcd(i64::MIN, 6), 2);
        assert_eq!(gcd(i32::MAX, i32::MIN), 1);
        assert_eq!(gcd(i64::MAX, i64::MAX), i64::MAX);
    }

    #[test]
    fn big() {
        let a = BigInt::from(2).pow(100) * 3;
        let b = BigInt::from(2).pow(90) * 5;
        assert_eq!(gcd(a, b), BigInt::from(2).pow(90));
    }
}
