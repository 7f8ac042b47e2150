//! # Operators
//!
//! `std::ops` implementations, all delegating to the named operations on [`Ratio`]. Owned and
//! borrowed operands are accepted on both sides.
use std::ops::{Add, Div, Mul, Neg, Sub};

use num::{Integer, Signed};

use super::Ratio;

/// The only operation without a fallible counterpart in the operator traits.
///
/// # Panics
///
/// When `right` is zero; use [`Ratio::divide`] to handle that case.
fn divide_or_panic<I: Integer + Signed + Clone>(left: &Ratio<I>, right: &Ratio<I>) -> Ratio<I> {
    match left.divide(right) {
        Ok(quotient) => quotient,
        Err(error) => panic!("{}", error),
    }
}

macro_rules! forward_binary {
    ($trait:ident, $method:ident, $function:path) => {
        impl<I: Integer + Signed + Clone> $trait for Ratio<I> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                $function(&self, &rhs)
            }
        }

        impl<'a, I: Integer + Signed + Clone> $trait<&'a Ratio<I>> for Ratio<I> {
            type Output = Self;

            fn $method(self, rhs: &'a Ratio<I>) -> Self::Output {
                $function(&self, rhs)
            }
        }

        impl<'a, I: Integer + Signed + Clone> $trait<Ratio<I>> for &'a Ratio<I> {
            type Output = Ratio<I>;

            fn $method(self, rhs: Ratio<I>) -> Self::Output {
                $function(self, &rhs)
            }
        }

        impl<'a, 'b, I: Integer + Signed + Clone> $trait<&'b Ratio<I>> for &'a Ratio<I> {
            type Output = Ratio<I>;

            fn $method(self, rhs: &'b Ratio<I>) -> Self::Output {
                $function(self, rhs)
            }
        }
    };
}

forward_binary!(Add, add, Ratio::add);
forward_binary!(Sub, sub, Ratio::subtract);
forward_binary!(Mul, mul, Ratio::multiply);
forward_binary!(Div, div, divide_or_panic);

impl<I: Integer + Signed + Clone> Neg for Ratio<I> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<'a, I: Integer + Signed + Clone> Neg for &'a Ratio<I> {
    type Output = Ratio<I>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
