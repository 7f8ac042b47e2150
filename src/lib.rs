//! # exact-rational
//!
//! Exact arithmetic on fractions that are always kept in lowest terms, with the sign on the
//! numerator.
//!
//! ```
//! use exact_rational::data::number_types::rational::{Rational, Rational64};
//!
//! let x = Rational64::new(1, 3).unwrap();
//! let y = Rational64::new(5, 7).unwrap();
//! let z = Rational64::new(3, 2).unwrap();
//!
//! assert_eq!(x.subtract(&y).subtract(&z).to_string(), "-79/42");
//! assert_eq!(*Rational64::new(1, -3).unwrap().denominator(), 3);
//! ```
#![warn(missing_docs)]

pub mod data;
mod macros;

#[doc(hidden)]
pub use num;
