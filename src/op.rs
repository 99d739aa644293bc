use crate::Rational;
use crate::int;
use log::debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Rational {
    /// a/b + c/d = (a*d + b*c) / (b*d)
    pub fn add<'a>(&self, other: impl Into<Option<&'a Rational>>) -> Option<Rational> {
        let other = other.into()?;

        Some(Rational::new(
            self.numer.mul_bi(&other.denom).add_bi(&self.denom.mul_bi(&other.numer)),
            self.denom.mul_bi(&other.denom),
        ))
    }

    /// a/b - c/d = (a*d - b*c) / (b*d)
    pub fn subtract<'a>(&self, other: impl Into<Option<&'a Rational>>) -> Option<Rational> {
        let other = other.into()?;

        Some(Rational::new(
            self.numer.mul_bi(&other.denom).sub_bi(&self.denom.mul_bi(&other.numer)),
            self.denom.mul_bi(&other.denom),
        ))
    }

    /// a/b * c/d = (a*c) / (b*d)
    pub fn multiply<'a>(&self, other: impl Into<Option<&'a Rational>>) -> Option<Rational> {
        let other = other.into()?;

        Some(Rational::new(
            self.numer.mul_bi(&other.numer),
            self.denom.mul_bi(&other.denom),
        ))
    }

    /// a/b / c/d = (a*d) / (b*c)
    ///
    /// The divisor has to have a strictly positive denominator. Otherwise (a missing
    /// divisor, a degenerate one, or a valid one whose sign lives in the denominator),
    /// the result is `0 / 0`.
    pub fn divide<'a>(&self, other: impl Into<Option<&'a Rational>>) -> Rational {
        match other.into() {
            Some(other) if int::is_positive(&other.denom) => Rational::new(
                self.numer.mul_bi(&other.denom),
                self.denom.mul_bi(&other.numer),
            ),
            _ => {
                debug!("Rational::divide: divisor is missing or its denominator is not positive");
                Rational::degenerate()
            },
        }
    }

    // Which half carries the sign afterwards depends on the branch:
    // (-a)/(-b) -> a/b
    // a/(-b) -> a/b
    // otherwise the numerator flips
    pub fn negate(&self) -> Rational {
        let numer_neg = self.numer.is_neg();
        let denom_neg = self.denom.is_neg();

        if numer_neg && denom_neg {
            Rational::new(self.numer.neg(), self.denom.neg())
        }

        else if denom_neg {
            Rational::new(self.numer.clone(), self.denom.neg())
        }

        else {
            Rational::new(self.numer.neg(), self.denom.clone())
        }
    }

    /// `1 / self`. Only values with a strictly positive denominator can be inverted.
    /// Anything else becomes `0 / 0`.
    pub fn invert(&self) -> Rational {
        if int::is_positive(&self.denom) {
            Rational::new(self.denom.clone(), self.numer.clone())
        }

        else {
            debug!("Rational::invert: denominator is not positive");
            Rational::degenerate()
        }
    }

    /// `a^0` is `1/1` (even for `0 / 0`), and `a^-e` is `(denom^e) / (numer^e)`.
    /// Unlike `invert`, a negative exponent does not look at the sign of the denominator.
    pub fn pow(&self, exp: i32) -> Rational {
        match exp {
            0 => Rational::one(),
            1 => self.clone(),
            exp if exp < 0 => {
                let exp = exp.unsigned_abs();

                Rational::new(
                    self.denom.pow_u32(exp),
                    self.numer.pow_u32(exp),
                )
            },
            _ => {
                let exp = exp as u32;

                Rational::new(
                    self.numer.pow_u32(exp),
                    self.denom.pow_u32(exp),
                )
            },
        }
    }
}

// The operator impls always have an operand, so `None` can't come out of
// the named methods here.
macro_rules! forward_binary_op {
    ($trait: ident, $method: ident, |$lhs: ident, $rhs: ident| $body: expr) => {
        impl<'a> $trait<&'a Rational> for &'a Rational {
            type Output = Rational;

            fn $method(self, rhs: &'a Rational) -> Rational {
                let ($lhs, $rhs) = (self, rhs);
                $body
            }
        }

        impl $trait<Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                $trait::$method(&self, &rhs)
            }
        }

        impl<'a> $trait<&'a Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &'a Rational) -> Rational {
                $trait::$method(&self, rhs)
            }
        }
    };
}

forward_binary_op!(Add, add, |lhs, rhs| {
    lhs.add(rhs).unwrap_or_else(Rational::degenerate)
});
forward_binary_op!(Sub, sub, |lhs, rhs| {
    lhs.subtract(rhs).unwrap_or_else(Rational::degenerate)
});
forward_binary_op!(Mul, mul, |lhs, rhs| {
    lhs.multiply(rhs).unwrap_or_else(Rational::degenerate)
});
forward_binary_op!(Div, div, |lhs, rhs| lhs.divide(rhs));

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        self.negate()
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        self.negate()
    }
}
