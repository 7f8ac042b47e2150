//! # Number types
//!
//! Integer helpers and the rational numbers built on top of them.
pub mod integer;
pub mod rational;
