use core::cmp::Ordering;

use super::Decimal64Ops;
use crate::{bid::Bid64, classify, fatal, scale};

/// The builtin backend.
///
/// Arithmetic and comparisons use the [`Bid64`] operators,
/// classification uses the raw bit masks from [`classify`],
/// and [`scale`][Decimal64Ops::scale] uses the
/// repeated-squaring algorithm from [`scale`][crate::scale].
///
/// `next_up`, `next_down` and the directed roundings are not
/// available: calling them stops the process.
#[derive(Copy, Clone, Debug, Default)]
pub struct Fallback;

impl Decimal64Ops for Fallback {
    const NAME: &'static str = "fallback";

    fn is_nan(x: Bid64) -> bool {
        classify::is_nan(x.to_bits())
    }

    fn is_infinite(x: Bid64) -> bool {
        classify::is_infinity(x.to_bits())
    }

    fn is_finite(x: Bid64) -> bool {
        classify::is_finite(x.to_bits())
    }

    fn is_normal(x: Bid64) -> bool {
        classify::is_normal(x.to_bits())
    }

    fn signbit(x: Bid64) -> bool {
        classify::sign_bit(x.to_bits())
    }

    fn is_positive_infinity(x: Bid64) -> bool {
        classify::is_positive_infinity(x.to_bits())
    }

    fn is_negative_infinity(x: Bid64) -> bool {
        classify::is_negative_infinity(x.to_bits())
    }

    fn partial_cmp(lhs: Bid64, rhs: Bid64) -> Option<Ordering> {
        lhs.partial_cmp(&rhs)
    }

    fn from_i64(v: i64) -> Bid64 {
        Bid64::from_i64(v)
    }

    fn from_u64(v: u64) -> Bid64 {
        Bid64::from_u64(v)
    }

    fn to_i64(x: Bid64) -> i64 {
        x.to_i64()
    }

    fn to_u64(x: Bid64) -> u64 {
        x.to_u64()
    }

    fn add(lhs: Bid64, rhs: Bid64) -> Bid64 {
        lhs + rhs
    }

    fn sub(lhs: Bid64, rhs: Bid64) -> Bid64 {
        lhs - rhs
    }

    fn mul(lhs: Bid64, rhs: Bid64) -> Bid64 {
        lhs * rhs
    }

    fn div(lhs: Bid64, rhs: Bid64) -> Bid64 {
        lhs / rhs
    }

    fn mul_add(x: Bid64, y: Bid64, z: Bid64) -> Bid64 {
        x.const_mul_add(y, z)
    }

    fn scale(x: Bid64, n: i32) -> Bid64 {
        scale::scale(x, n)
    }

    fn max(lhs: Bid64, rhs: Bid64) -> Bid64 {
        if lhs > rhs {
            lhs
        } else {
            rhs
        }
    }

    fn min(lhs: Bid64, rhs: Bid64) -> Bid64 {
        if lhs < rhs {
            lhs
        } else {
            rhs
        }
    }

    fn next_up(_: Bid64) -> Bid64 {
        fatal::unsupported("nextUp", Self::NAME)
    }

    fn next_down(_: Bid64) -> Bid64 {
        fatal::unsupported("nextDown", Self::NAME)
    }

    fn round_ceiling(_: Bid64) -> Bid64 {
        fatal::unsupported("roundTowardsPositiveInfinity", Self::NAME)
    }

    fn round_floor(_: Bid64) -> Bid64 {
        fatal::unsupported("roundTowardsNegativeInfinity", Self::NAME)
    }

    fn round_down(_: Bid64) -> Bid64 {
        fatal::unsupported("roundTowardsZero", Self::NAME)
    }

    fn round_half_up(_: Bid64) -> Bid64 {
        fatal::unsupported("roundToNearestTiesAwayFromZero", Self::NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max_ties_pick_rhs() {
        // 1.0 and 1 are equal, so `rhs` wins.
        let (a, b) = (Bid64::new(10, -1), Bid64::new(1, 0));
        assert_eq!(Fallback::max(a, b).to_bits(), b.to_bits());
        assert_eq!(Fallback::min(a, b).to_bits(), b.to_bits());
        assert_eq!(Fallback::max(b, a).to_bits(), a.to_bits());

        let (lo, hi) = (Bid64::new(-3, 0), Bid64::new(2, 0));
        assert_eq!(Fallback::max(lo, hi).to_bits(), hi.to_bits());
        assert_eq!(Fallback::min(lo, hi).to_bits(), lo.to_bits());
    }

    #[test]
    fn test_classification_uses_masks() {
        let sub = Bid64::from_bits(1);
        assert!(Fallback::is_finite(sub));
        assert!(!Fallback::is_normal(sub));
        assert!(Fallback::is_positive_infinity(Bid64::INFINITY));
        assert!(Fallback::is_negative_infinity(Bid64::NEG_INFINITY));
        assert!(!Fallback::is_negative_infinity(Bid64::NAN.copy_neg()));
    }
}
