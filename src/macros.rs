//! # Literal constructors
//!
//! `R32!(numerator, denominator)`, or `R32!(integer)`, and the same for the other backings.
//!
//! These panic on a zero denominator, they're meant for literals.

/// Shorthand for creating a [`Rational32`](crate::data::number_types::rational::Rational32).
#[macro_export]
macro_rules! R32 {
    ($value:expr) => {
        $crate::data::number_types::rational::Rational32::from($value)
    };
    ($numerator:expr, $denominator:expr) => {
        match $crate::data::number_types::rational::Rational32::new($numerator, $denominator) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    };
}

/// Shorthand for creating a [`Rational64`](crate::data::number_types::rational::Rational64).
#[macro_export]
macro_rules! R64 {
    ($value:expr) => {
        $crate::data::number_types::rational::Rational64::from($value)
    };
    ($numerator:expr, $denominator:expr) => {
        match $crate::data::number_types::rational::Rational64::new($numerator, $denominator) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    };
}

/// Shorthand for creating a [`Rational128`](crate::data::number_types::rational::Rational128).
#[macro_export]
macro_rules! R128 {
    ($value:expr) => {
        $crate::data::number_types::rational::Rational128::from($value)
    };
    ($numerator:expr, $denominator:expr) => {
        match $crate::data::number_types::rational::Rational128::new($numerator, $denominator) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    };
}

/// Shorthand for creating a [`RationalBig`](crate::data::number_types::rational::RationalBig).
///
/// Any primitive integer is accepted for both parts.
#[macro_export]
macro_rules! RB {
    ($value:expr) => {
        $crate::data::number_types::rational::RationalBig::from($crate::num::BigInt::from($value))
    };
    ($numerator:expr, $denominator:expr) => {
        match $crate::data::number_types::rational::RationalBig::new(
            $crate::num::BigInt::from($numerator),
            $crate::num::BigInt::from($denominator),
        ) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    };
}

#[cfg(test)]
mod test {
    // Shadows the `num` dependency at the call site.
    #[allow(dead_code)]
    mod num {}

    use crate::{R64, RB};

    #[test]
    fn expansion_goes_through_crate_root() {
        assert_eq!(RB!(6, -4).to_string(), "-3/2");
        assert_eq!(RB!(7_u64).to_string(), "7/1");
        assert_eq!(R64!(6, -4).to_string(), "-3/2");
    }
}
