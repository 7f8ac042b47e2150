//! # Interactions with fixed size integers
//!
//! Mixing [`RationalBig`] with primitive integers without first building a rational out of them.
use std::ops::{Add, Mul};

use num::{BigInt, One};

use super::{Ratio, RationalBig};

macro_rules! define_interactions {
    ($t:ident) => {
        mod $t {
            use super::*;

            mod creation {
                use super::*;

                impl From<$t> for RationalBig {
                    fn from(value: $t) -> Self {
                        Ratio::from(BigInt::from(value))
                    }
                }

                impl From<&$t> for RationalBig {
                    fn from(value: &$t) -> Self {
                        Self::from(*value)
                    }
                }
            }

            mod compare {
                use super::*;

                impl PartialEq<$t> for RationalBig {
                    fn eq(&self, other: &$t) -> bool {
                        self.denominator.is_one() && self.numerator == BigInt::from(*other)
                    }
                }
            }

            mod field {
                use super::*;

                impl Add<$t> for RationalBig {
                    type Output = Self;

                    fn add(self, rhs: $t) -> Self::Output {
                        // The denominator is unchanged and shares no factor with the new numerator.
                        let numerator = self.numerator + &self.denominator * BigInt::from(rhs);
                        Ratio::new_unchecked(numerator, self.denominator)
                    }
                }

                impl Add<$t> for &RationalBig {
                    type Output = RationalBig;

                    fn add(self, rhs: $t) -> Self::Output {
                        self.clone() + rhs
                    }
                }

                impl Mul<$t> for RationalBig {
                    type Output = Self;

                    fn mul(self, rhs: $t) -> Self::Output {
                        self.multiply(&RationalBig::from(rhs))
                    }
                }

                impl Mul<$t> for &RationalBig {
                    type Output = RationalBig;

                    fn mul(self, rhs: $t) -> Self::Output {
                        self.multiply(&RationalBig::from(rhs))
                    }
                }
            }
        }
    };
}

define_interactions!(i32);
define_interactions!(i64);
define_interactions!(i128);
define_interactions!(isize);
define_interactions!(u32);
define_interactions!(u64);
define_interactions!(u128);
define_interactions!(usize);

#[cfg(test)]
mod test {
    use num::{BigInt, Zero};

    use crate::data::number_types::rational::RationalBig;
    use crate::RB;

    #[test]
    fn creation() {
        assert_eq!(RationalBig::from(7_u64), RB!(7));
        assert_eq!(RationalBig::from(&-3_i32), RB!(-3, 1));
        assert_eq!(RationalBig::from(0_usize), RationalBig::zero());
        assert_eq!(RationalBig::from(u128::MAX), RationalBig::from(BigInt::from(u128::MAX)));
    }

    #[test]
    fn compare() {
        assert_eq!(RB!(4, 2), 2_i32);
        assert_ne!(RB!(1, 2), 0_u32);
        assert_ne!(RB!(-2), 2_i64);
    }

    #[test]
    fn add() {
        assert_eq!(RB!(1, 3) + 1_i32, RB!(4, 3));
        assert_eq!(&RB!(-1, 3) + 1_u32, RB!(2, 3));
        assert_eq!(RB!(5, 7) + -1_isize, RB!(-2, 7));
    }

    #[test]
    fn mul() {
        assert_eq!(RB!(1, 6) * 3_i64, RB!(1, 2));
        assert_eq!(&RB!(5, 7) * 0_usize, RationalBig::zero());
        assert_eq!(RB!(-1, 3) * -3_i128, RB!(1));
    }
}
