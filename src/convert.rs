use crate::{ConvertError, Rational};
use hmath::BigInt;

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Rational::from_i64(n)
    }
}

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Rational::from_int(n)
    }
}

// (numer, denom)
impl From<(i64, i64)> for Rational {
    fn from((numer, denom): (i64, i64)) -> Self {
        Rational::from_i64s(numer, denom)
    }
}

// (numer, denom)
impl From<(BigInt, BigInt)> for Rational {
    fn from((numer, denom): (BigInt, BigInt)) -> Self {
        Rational::new(numer, denom)
    }
}

// works only when the denominator is 1 or -1
impl TryFrom<&Rational> for BigInt {
    type Error = ConvertError;

    fn try_from(n: &Rational) -> Result<BigInt, ConvertError> {
        if n.is_degenerate() {
            Err(ConvertError::Degenerate)
        }

        else if n.denom.eq_bi(&BigInt::one()) {
            Ok(n.numer.clone())
        }

        else if n.denom.eq_bi(&BigInt::one().neg()) {
            Ok(n.numer.neg())
        }

        else {
            Err(ConvertError::NotInteger)
        }
    }
}

impl TryFrom<&Rational> for i64 {
    type Error = ConvertError;

    fn try_from(n: &Rational) -> Result<i64, ConvertError> {
        let n = BigInt::try_from(n)?;
        i64::try_from(&n).map_err(|_| ConvertError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ConvertError, Rational};
    use hmath::BigInt;

    #[test]
    fn from_test() {
        assert_eq!(Rational::from(3i64), Rational::from_i64s(3, 1));
        assert_eq!(Rational::from((6i64, -4i64)), Rational::from_i64s(3, -2));
        assert_eq!(Rational::from(BigInt::from(-9i64)), Rational::from_i64(-9));
        assert_eq!(
            Rational::from((BigInt::from(10i64), BigInt::from(4i64))),
            Rational::from_i64s(5, 2),
        );
        assert!(Rational::from(0i64).is_degenerate());
    }

    #[test]
    fn to_int_test() {
        let samples = vec![
            ((4, 2), Ok(2)),
            ((-7, 1), Ok(-7)),
            ((3, -1), Ok(-3)),
            ((-3, -1), Ok(3)),
            ((1, 2), Err(ConvertError::NotInteger)),
            ((0, 5), Err(ConvertError::Degenerate)),
        ];

        for ((numer, denom), expected) in samples.into_iter() {
            assert_eq!(i64::try_from(&Rational::from_i64s(numer, denom)), expected);
        }

        assert_eq!(i64::try_from(&Rational::from_i64(i64::MAX)), Ok(i64::MAX));
        assert_eq!(i64::try_from(&Rational::from_i64s(i64::MAX, -1)), Ok(-i64::MAX));

        let big = Rational::from_i64(i64::MAX).multiply(&Rational::from_i64(2)).unwrap();
        assert_eq!(i64::try_from(&big), Err(ConvertError::Overflow));
        assert_eq!(
            BigInt::try_from(&big).unwrap().to_string(),
            "18446744073709551614",
        );
    }
}
