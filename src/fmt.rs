use crate::Rational;
use hmath::BigInt;
use std::fmt;

// `0 / 0` -> "0"
// `n / 1` -> "n"
// otherwise "(n / d)", signs as stored
impl fmt::Display for Rational {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        if self.denom.is_zero() {
            write!(fmt, "0")
        }

        else if self.denom.eq_bi(&BigInt::one()) {
            write!(fmt, "{}", self.numer.to_string())
        }

        else {
            write!(fmt, "({} / {})", self.numer.to_string(), self.denom.to_string())
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            fmt,
            "Rational({} / {})",
            self.numer.to_string(),
            self.denom.to_string(),
        )
    }
}
