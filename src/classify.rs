//! Classification by bit masks and the NaN ordering policies.
//!
//! Each predicate is a pure function of the raw encoding.

use crate::{
    bid::Bid64,
    masks::{
        MASK_INFINITY_AND_NAN, MASK_INFINITY_NAN, MASK_SIGN, MASK_SIGN_INFINITY_NAN,
        NEGATIVE_INFINITY, POSITIVE_INFINITY,
    },
};

/// Reports whether `bits` is a quiet or signaling NaN.
pub const fn is_nan(bits: u64) -> bool {
    bits & MASK_INFINITY_NAN == MASK_INFINITY_NAN
}

/// Reports whether `bits` is an infinity of either sign.
pub const fn is_infinity(bits: u64) -> bool {
    bits & MASK_INFINITY_NAN == POSITIVE_INFINITY
}

/// Reports whether `bits` is positive infinity.
pub const fn is_positive_infinity(bits: u64) -> bool {
    bits & MASK_SIGN_INFINITY_NAN == POSITIVE_INFINITY
}

/// Reports whether `bits` is negative infinity.
pub const fn is_negative_infinity(bits: u64) -> bool {
    bits & MASK_SIGN_INFINITY_NAN == NEGATIVE_INFINITY
}

/// Reports whether `bits` is neither infinite nor NaN.
pub const fn is_finite(bits: u64) -> bool {
    bits & MASK_INFINITY_AND_NAN != MASK_INFINITY_AND_NAN
}

/// Reports whether `bits` is finite, non-zero and not
/// subnormal.
pub const fn is_normal(bits: u64) -> bool {
    // Zeros and subnormals need the coefficient and exponent,
    // which the masks alone can't provide.
    is_finite(bits) && Bid64::from_bits(bits).is_normal()
}

/// Reports whether the sign bit of `bits` is set.
pub const fn sign_bit(bits: u64) -> bool {
    bits & MASK_SIGN == MASK_SIGN
}

/// Where NaN sorts relative to every number in a three-way
/// comparison.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NanOrder {
    /// NaN compares below everything, like .NET's
    /// `Double.CompareTo`.
    Least,
    /// NaN compares above everything, like Java's
    /// `Double.compare`.
    Greatest,
}

impl NanOrder {
    /// Breaks a tie between two operands that are unordered, so
    /// at least one of them is NaN.
    ///
    /// Two NaNs compare equal.
    pub const fn tie_break(self, lhs_nan: bool, rhs_nan: bool) -> i32 {
        let (lhs, rhs) = (lhs_nan as i32, rhs_nan as i32);
        match self {
            Self::Least => rhs - lhs,
            Self::Greatest => lhs - rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::random;

    use super::*;

    #[test]
    fn test_predicates() {
        const SNAN: u64 = 0x7E00_0000_0000_0000;
        const NEG_ZERO: u64 = 0xB1C0_0000_0000_0000;
        const SUBNORMAL: u64 = 0x0000_0000_0000_0001;
        // 0E+369
        const BIG_ZERO: u64 = 0x5FE0_0000_0000_0000;

        #[rustfmt::skip]
        let tests = [
            // bits => (nan, inf, +inf, -inf, finite, normal, sign)
            (crate::masks::NAN, (true, false, false, false, false, false, false)),
            (crate::masks::NAN | MASK_SIGN, (true, false, false, false, false, false, true)),
            (SNAN, (true, false, false, false, false, false, false)),
            (POSITIVE_INFINITY, (false, true, true, false, false, false, false)),
            (NEGATIVE_INFINITY, (false, true, false, true, false, false, true)),
            (crate::masks::ZERO, (false, false, false, false, true, false, false)),
            (NEG_ZERO, (false, false, false, false, true, false, true)),
            (BIG_ZERO, (false, false, false, false, true, false, false)),
            (SUBNORMAL, (false, false, false, false, true, false, false)),
            (SUBNORMAL | MASK_SIGN, (false, false, false, false, true, false, true)),
            (crate::masks::MAX_VALUE, (false, false, false, false, true, true, false)),
            (crate::masks::MIN_VALUE, (false, false, false, false, true, true, true)),
            (Bid64::ONE.to_bits(), (false, false, false, false, true, true, false)),
        ];
        for (i, (bits, want)) in tests.into_iter().enumerate() {
            let got = (
                is_nan(bits),
                is_infinity(bits),
                is_positive_infinity(bits),
                is_negative_infinity(bits),
                is_finite(bits),
                is_normal(bits),
                sign_bit(bits),
            );
            assert_eq!(got, want, "#{i}: {bits:#018x}");
        }
    }

    #[test]
    fn test_predicates_match_decode() {
        for _ in 0..100_000 {
            let bits: u64 = random();
            let d = Bid64::from_bits(bits);
            assert_eq!(is_nan(bits), d.is_nan(), "{bits:#018x}");
            assert_eq!(is_infinity(bits), d.is_infinite(), "{bits:#018x}");
            assert_eq!(is_finite(bits), d.is_finite(), "{bits:#018x}");
            assert_eq!(sign_bit(bits), d.is_sign_negative(), "{bits:#018x}");
            assert_eq!(
                is_positive_infinity(bits),
                d.is_infinite() && d.is_sign_positive(),
                "{bits:#018x}"
            );
        }
    }

    #[test]
    fn test_tie_break() {
        let tests = [
            // (lhs_nan, rhs_nan) => (least, greatest)
            ((true, false), (-1, 1)),
            ((false, true), (1, -1)),
            ((true, true), (0, 0)),
        ];
        for (i, ((lhs, rhs), (least, greatest))) in tests.into_iter().enumerate() {
            assert_eq!(NanOrder::Least.tie_break(lhs, rhs), least, "#{i}");
            assert_eq!(NanOrder::Greatest.tie_break(lhs, rhs), greatest, "#{i}");
        }
    }
}
