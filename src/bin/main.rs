//! # Rational demo
//!
//! Without arguments, prints a few reference computations. Otherwise folds the given fractions,
//! written as `numerator denominator` pairs, with one operation.
use std::process::exit;

use clap::{CommandFactory, ErrorKind, Parser, ValueEnum};
use itertools::Itertools;
use num::BigInt;

use exact_rational::data::number_types::rational::{DivisionByZero, RationalBig};

#[derive(Parser)]
#[clap(version = "0.1.0", author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
#[clap(allow_negative_numbers = true)]
struct Opts {
    /// How to combine the fractions, from left to right
    #[clap(short, long, value_enum, default_value = "add")]
    operation: Operation,
    /// Integers, taken in pairs as numerator and denominator
    values: Vec<i64>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Max,
}

impl Operation {
    fn apply(self, left: RationalBig, right: &RationalBig) -> Result<RationalBig, DivisionByZero> {
        Ok(match self {
            Operation::Add => left.add(right),
            Operation::Subtract => left.subtract(right),
            Operation::Multiply => left.multiply(right),
            Operation::Divide => left.divide(right)?,
            Operation::Max => left.max(right.clone()),
        })
    }
}

fn main() {
    let opts: Opts = Opts::parse();

    if opts.values.is_empty() {
        if let Err(error) = reference() {
            eprintln!("{}", error);
            exit(1);
        }
        return;
    }

    if opts.values.len() % 2 != 0 {
        Opts::command()
            .error(ErrorKind::WrongNumberOfValues, "values come in numerator denominator pairs")
            .exit();
    }

    let (first, rest) = opts.values.split_at(2);
    match fold(opts.operation, (first[0], first[1]), rest) {
        Ok(result) => println!("{}", result),
        Err(error) => {
            eprintln!("{}", error);
            exit(1);
        }
    }
}

fn fold(
    operation: Operation,
    (numerator, denominator): (i64, i64),
    rest: &[i64],
) -> Result<RationalBig, DivisionByZero> {
    let mut total = RationalBig::new(BigInt::from(numerator), BigInt::from(denominator))?;
    for (&numerator, &denominator) in rest.iter().tuples() {
        let fraction = RationalBig::new(BigInt::from(numerator), BigInt::from(denominator))?;
        total = operation.apply(total, &fraction)?;
    }

    Ok(total)
}

fn reference() -> Result<(), DivisionByZero> {
    let x = RationalBig::new(BigInt::from(1), BigInt::from(3))?;
    let y = RationalBig::new(BigInt::from(5), BigInt::from(7))?;
    let z = RationalBig::new(BigInt::from(3), BigInt::from(2))?;

    println!("{}", x.subtract(&y).subtract(&z));
    println!("{}", y.add(&y));
    println!("{}", x.multiply(&z));

    Ok(())
}

#[cfg(test)]
mod test {
    use exact_rational::data::number_types::rational::DivisionByZero;
    use exact_rational::RB;

    use super::{fold, Operation};

    #[test]
    fn single_fraction() {
        assert_eq!(fold(Operation::Add, (4, 2), &[]), Ok(RB!(2)));
    }

    #[test]
    fn left_to_right() {
        assert_eq!(fold(Operation::Subtract, (1, 3), &[5, 7, 3, 2]), Ok(RB!(-79, 42)));
        assert_eq!(fold(Operation::Add, (5, 7), &[5, 7]), Ok(RB!(10, 7)));
        assert_eq!(fold(Operation::Multiply, (1, 3), &[3, 2]), Ok(RB!(1, 2)));
        assert_eq!(fold(Operation::Divide, (1, 3), &[1, -6]), Ok(RB!(-2)));
        assert_eq!(fold(Operation::Max, (1, 3), &[-5, 7, 1, 2]), Ok(RB!(1, 2)));
    }

    #[test]
    fn zero_denominators() {
        assert_eq!(fold(Operation::Add, (1, 0), &[]), Err(DivisionByZero));
        assert_eq!(fold(Operation::Add, (1, 3), &[2, 0]), Err(DivisionByZero));
        assert_eq!(fold(Operation::Divide, (1, 3), &[0, 5]), Err(DivisionByZero));
    }
}
