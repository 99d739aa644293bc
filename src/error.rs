use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConvertError {
    // `0 / 0` has no integer value
    Degenerate,

    // the stored denominator is neither 1 nor -1
    NotInteger,

    // it's an integer, but doesn't fit in the target type
    Overflow,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            ConvertError::Degenerate => "cannot convert a degenerate fraction (0 / 0) to an integer",
            ConvertError::NotInteger => "the fraction is not an integer",
            ConvertError::Overflow => "the integer is too big for the target type",
        };

        write!(fmt, "{s}")
    }
}

impl std::error::Error for ConvertError {}
