//! # Rational numbers
//!
//! Exact fractions, always stored in lowest terms with a positive denominator.
//!
//! The backing integer is a type parameter. Intermediate products of the operations are computed
//! in that same type, so the fixed width aliases are only exact while those products fit; use
//! [`RationalBig`] when inputs can't be bounded.
use std::cmp::Ordering;
use std::fmt;

use num::{BigInt, Integer, One, Signed, Zero};
use thiserror::Error;

use crate::data::number_types::integer::signed_gcd;

mod ops;
mod with_primitive;

/// Rational backed by `i32`.
pub type Rational32 = Ratio<i32>;
/// Rational backed by `i64`.
pub type Rational64 = Ratio<i64>;
/// Rational backed by `i128`.
pub type Rational128 = Ratio<i128>;
/// Rational of arbitrary precision.
pub type RationalBig = Ratio<BigInt>;

/// Access to the parts of a fraction.
pub trait Rational {
    /// Integer type of the numerator.
    type Numerator;
    /// Integer type of the denominator.
    type Denominator;

    /// Numerator, carries the sign.
    fn numerator(&self) -> &Self::Numerator;
    /// Denominator, always positive.
    fn denominator(&self) -> &Self::Denominator;
}

/// A zero denominator, either given directly or reached through a reciprocal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("division by zero")]
pub struct DivisionByZero;

/// Fraction `numerator / denominator` in lowest terms.
///
/// Only constructed through [`Ratio::new`], so two values are equal exactly when their fields
/// are.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Ratio<I> {
    numerator: I,
    denominator: I,
}

impl<I: Integer + Signed + Clone> Ratio<I> {
    /// Create a new rational number in lowest terms.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when `denominator` is zero.
    pub fn new(numerator: I, denominator: I) -> Result<Self, DivisionByZero> {
        if denominator.is_zero() {
            log::trace!("rejecting a zero denominator");
            return Err(DivisionByZero);
        }

        Ok(Self::reduce(numerator, denominator))
    }

    /// Divide both parts by their greatest common divisor, carrying the sign of the denominator.
    ///
    /// Both quotients are then representable, unless the reduced value itself isn't.
    fn reduce(numerator: I, denominator: I) -> Self {
        debug_assert!(!denominator.is_zero());

        let mut common = signed_gcd(numerator.clone(), denominator.clone());
        if common.is_negative() != denominator.is_negative() {
            common = -common;
        }

        Self::new_unchecked(numerator / common.clone(), denominator / common)
    }

    /// Fields are trusted to be in lowest terms with a positive denominator.
    fn new_unchecked(numerator: I, denominator: I) -> Self {
        debug_assert!(denominator.is_positive());
        debug_assert!(signed_gcd(numerator.clone(), denominator.clone()).abs().is_one());

        Self { numerator, denominator }
    }

    /// The same value with the opposite sign.
    pub fn negate(&self) -> Self {
        Self::reduce(-self.numerator.clone(), self.denominator.clone())
    }

    /// `1 / self`.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when `self` is zero.
    pub fn reciprocal(&self) -> Result<Self, DivisionByZero> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Sum of `self` and `other`.
    pub fn add(&self, other: &Self) -> Self {
        let numerator = self.numerator.clone() * other.denominator.clone()
            + other.numerator.clone() * self.denominator.clone();
        let denominator = self.denominator.clone() * other.denominator.clone();

        Self::reduce(numerator, denominator)
    }

    /// `other` subtracted from `self`.
    pub fn subtract(&self, other: &Self) -> Self {
        self.add(&other.negate())
    }

    /// Product of `self` and `other`.
    pub fn multiply(&self, other: &Self) -> Self {
        let numerator = self.numerator.clone() * other.numerator.clone();
        let denominator = self.denominator.clone() * other.denominator.clone();

        Self::reduce(numerator, denominator)
    }

    /// `self` divided by `other`.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when `other` is zero.
    pub fn divide(&self, other: &Self) -> Result<Self, DivisionByZero> {
        Ok(self.multiply(&other.reciprocal()?))
    }

    /// Whether `self` is strictly smaller than `other`.
    pub fn less_than(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Less
    }

    /// The larger of the two, `self` on a tie.
    pub fn max(self, other: Self) -> Self {
        if self.less_than(&other) {
            other
        } else {
            self
        }
    }
}

impl<I> Rational for Ratio<I> {
    type Numerator = I;
    type Denominator = I;

    fn numerator(&self) -> &Self::Numerator {
        &self.numerator
    }

    fn denominator(&self) -> &Self::Denominator {
        &self.denominator
    }
}

impl<I: Integer + Signed + Clone> From<I> for Ratio<I> {
    fn from(value: I) -> Self {
        Self::new_unchecked(value, I::one())
    }
}

impl<I: Integer + Signed + Clone> Zero for Ratio<I> {
    fn zero() -> Self {
        Self::new_unchecked(I::zero(), I::one())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl<I: Integer + Signed + Clone> One for Ratio<I> {
    fn one() -> Self {
        Self::new_unchecked(I::one(), I::one())
    }
}

impl<I: Integer + Signed + Clone> Ord for Ratio<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Both denominators are positive, so cross multiplication preserves the order.
        let left = self.numerator.clone() * other.denominator.clone();
        let right = other.numerator.clone() * self.denominator.clone();

        left.cmp(&right)
    }
}

impl<I: Integer + Signed + Clone> PartialOrd for Ratio<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I: fmt::Display> fmt::Display for Ratio<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
