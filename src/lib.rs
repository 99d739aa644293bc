#![deny(unused_imports)]

//! Immutable fractions of arbitrary-precision integers.
//!
//! A `Rational` is always stored in lowest terms. There's no separate
//! representation for an exact zero: if either the numerator or the denominator
//! is 0, the value collapses to the degenerate form `0 / 0`, which is also what
//! invalid operations (e.g. dividing by a degenerate value) produce. Nothing in
//! this crate panics or returns an error for bad math.

use hmath::{BigInt, gcd_bi};
use log::{debug, trace};
use std::borrow::Borrow;

mod cmp;
mod convert;
mod error;
mod fmt;
mod int;
mod op;


pub use error::ConvertError;

// The constructor does not canonicalize the sign: `(5, -10)` is stored as `(1, -2)`.
// Only `negate` moves the sign out of the denominator.
#[derive(Clone)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// `numer / denom` in lowest terms, or the degenerate form if either is 0.
    pub fn new(numer: BigInt, denom: BigInt) -> Self {
        if numer.is_zero() || denom.is_zero() {
            trace!("Rational::new: zero operand, collapsing to 0 / 0");
            return Rational::degenerate();
        }

        let r = gcd_bi(&numer, &denom);

        // unreachable once both operands are non-zero, but `gcd` may return 0
        if r.is_zero() {
            Rational { numer, denom }
        }

        else {
            Rational {
                numer: numer.div_bi(&r),
                denom: denom.div_bi(&r),
            }
        }
    }

    pub fn from_int(n: BigInt) -> Self {
        Rational::new(n, BigInt::one())
    }

    pub fn from_i64(n: i64) -> Self {
        Rational::from_int(BigInt::from(n))
    }

    pub fn from_i64s(numer: i64, denom: i64) -> Self {
        Rational::new(BigInt::from(numer), BigInt::from(denom))
    }

    /// `0 / 0`
    pub fn degenerate() -> Self {
        Rational {
            numer: BigInt::zero(),
            denom: BigInt::zero(),
        }
    }

    pub fn one() -> Self {
        Rational {
            numer: BigInt::one(),
            denom: BigInt::one(),
        }
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// (numer, denom)
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numer, self.denom)
    }

    pub fn is_degenerate(&self) -> bool {
        self.denom.is_zero()
    }

    /// It adds up the absolute values of the numerators and the denominators
    /// separately, then builds a single fraction from the two totals. This is
    /// NOT fraction addition: `sum_all([1/2, 1/3])` is `2/5`.
    ///
    /// An empty input gives `0 / 0`. If any element is `None`, the result is `None`.
    /// Elements can be borrowed or owned.
    pub fn sum_all<R, I>(values: I) -> Option<Rational>
    where
        R: Borrow<Rational>,
        I: IntoIterator<Item = Option<R>>,
    {
        let mut numer = BigInt::zero();
        let mut denom = BigInt::zero();

        for value in values {
            match value {
                Some(value) => {
                    let value: &Rational = value.borrow();
                    numer = numer.add_bi(&value.numer.abs());
                    denom = denom.add_bi(&value.denom.abs());
                },
                None => {
                    debug!("Rational::sum_all: found a missing element");
                    return None;
                },
            }
        }

        Some(Rational::new(numer, denom))
    }
}

impl<'a> std::iter::Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        // every element is present, so it's never `None`
        Rational::sum_all(iter.map(Some)).unwrap_or_else(Rational::degenerate)
    }
}

impl std::iter::Sum<Rational> for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        Rational::sum_all(iter.map(Some)).unwrap_or_else(Rational::degenerate)
    }
}
