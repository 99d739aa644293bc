use crate::Rational;
use crate::int;
use std::cmp::Ordering;

impl Rational {
    /// Sign of the numerator. The denominator is not looked at, so `2 / -3` is positive here.
    pub fn signum(&self) -> i32 {
        int::signum(&self.numer)
    }

    /// A negative value if `self` is smaller, 0 if they're equal, a positive value otherwise.
    /// A missing operand compares equal.
    ///
    /// When the signs differ, it returns the difference of the signs, which can be
    /// -2 or 2. Since `signum` only sees the numerator, values whose sign lives in
    /// the denominator are ordered by their numerator's sign, not by their value.
    pub fn compare_to<'a>(&self, other: impl Into<Option<&'a Rational>>) -> i32 {
        let other = match other.into() {
            Some(other) => other,
            None => {
                return 0;
            },
        };

        let (sign_self, sign_other) = (self.signum(), other.signum());

        if sign_self != sign_other {
            sign_self - sign_other
        }

        else if self.denom.eq_bi(&other.denom) {
            ordering_to_i32(self.numer.comp_bi(&other.numer))
        }

        else {
            ordering_to_i32(
                self.numer.mul_bi(&other.denom).comp_bi(&self.denom.mul_bi(&other.numer)),
            )
        }
    }

    /// Exact match of the stored numerator and denominator. `2 / 3` and `-2 / -3`
    /// are different here.
    pub fn is_equal_to<'a>(&self, other: impl Into<Option<&'a Rational>>) -> bool {
        match other.into() {
            Some(other) => self.numer.eq_bi(&other.numer) && self.denom.eq_bi(&other.denom),
            None => false,
        }
    }

    pub fn abs(&self) -> Rational {
        if self.signum() < 0 {
            self.negate()
        }

        else {
            self.clone()
        }
    }

    /// `self` wins ties.
    pub fn max<'a>(&'a self, other: impl Into<Option<&'a Rational>>) -> Option<&'a Rational> {
        let other = other.into()?;

        if self.compare_to(other) >= 0 {
            Some(self)
        }

        else {
            Some(other)
        }
    }

    /// `self` wins ties.
    pub fn min<'a>(&'a self, other: impl Into<Option<&'a Rational>>) -> Option<&'a Rational> {
        let other = other.into()?;

        if self.compare_to(other) <= 0 {
            Some(self)
        }

        else {
            Some(other)
        }
    }
}

fn ordering_to_i32(o: Ordering) -> i32 {
    match o {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Rational) -> bool {
        self.is_equal_to(other)
    }
}

impl Eq for Rational {}
