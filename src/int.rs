use hmath::BigInt;

// -1, 0 or 1
pub fn signum(n: &BigInt) -> i32 {
    if n.is_zero() {
        0
    }

    else if n.is_neg() {
        -1
    }

    else {
        1
    }
}

pub fn is_positive(n: &BigInt) -> bool {
    signum(n) > 0
}
