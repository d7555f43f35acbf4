//! The operation catalog.
//!
//! Every exported operation has exactly one body here, written
//! in terms of a backend `B` and the calling runtime `R`. The
//! generator in [`export`][crate::export] instantiates each body
//! once per entry point, so the entry points cannot drift apart.
//!
//! Multi-operand arithmetic reduces strictly left to right:
//! `add3(a, b, c)` is `(a + b) + c`. Decimal addition is not
//! associative, so the order is part of the contract.

use core::{cmp::Ordering, marker::PhantomData};

use crate::{backend::Decimal64Ops, bid::Bid64, export::Runtime, version::NATIVE_API_VERSION};

/// The operation bodies for backend `B` called from runtime
/// `R`.
///
/// `Catalog` is never constructed.
#[derive(Debug)]
pub struct Catalog<B, R>(PhantomData<fn() -> (B, R)>);

/// Narrows `v`, saturating at `min` and `max`.
fn saturate<T: TryFrom<i64>>(v: i64, min: T, max: T) -> T {
    T::try_from(v).unwrap_or(if v < 0 { min } else { max })
}

/// Narrows `v`, saturating at `max`.
fn saturate_unsigned<T: TryFrom<u64>>(v: u64, max: T) -> T {
    T::try_from(v).unwrap_or(max)
}

#[allow(missing_docs)]
impl<B: Decimal64Ops, R: Runtime> Catalog<B, R> {
    /// Returns the native API version.
    pub const fn version() -> i32 {
        NATIVE_API_VERSION
    }

    // Conversion and rounding.

    /// Returns `value * 10^-digits`.
    pub fn from_fixed_point64(value: i64, digits: i32) -> Bid64 {
        B::scale(B::from_i64(value), digits.saturating_neg())
    }

    /// Returns `value * 10^-digits`.
    pub fn from_fixed_point32(value: i32, digits: i32) -> Bid64 {
        Self::from_fixed_point64(i64::from(value), digits)
    }

    /// Returns `value * 10^-digits`.
    pub fn from_fixed_point_u32(value: u32, digits: i32) -> Bid64 {
        Self::from_fixed_point64(i64::from(value), digits)
    }

    /// Returns `value * 10^digits`, truncated to an integer.
    pub fn to_fixed_point(value: Bid64, digits: i32) -> i64 {
        B::to_i64(B::scale(value, digits))
    }

    pub fn from_int64(value: i64) -> Bid64 {
        B::from_i64(value)
    }

    /// Truncates towards zero. NaN converts to zero and
    /// out-of-range values saturate.
    pub fn to_int64(value: Bid64) -> i64 {
        B::to_i64(value)
    }

    pub fn from_uint64(value: u64) -> Bid64 {
        B::from_u64(value)
    }

    /// Like [`to_int64`][Self::to_int64], but negative values
    /// saturate to zero.
    pub fn to_uint64(value: Bid64) -> u64 {
        B::to_u64(value)
    }

    pub fn from_int32(value: i32) -> Bid64 {
        B::from_i64(i64::from(value))
    }

    pub fn to_int32(value: Bid64) -> i32 {
        saturate(B::to_i64(value), i32::MIN, i32::MAX)
    }

    pub fn from_uint32(value: u32) -> Bid64 {
        B::from_u64(u64::from(value))
    }

    pub fn to_uint32(value: Bid64) -> u32 {
        saturate_unsigned(B::to_u64(value), u32::MAX)
    }

    pub fn from_int16(value: i16) -> Bid64 {
        B::from_i64(i64::from(value))
    }

    pub fn to_int16(value: Bid64) -> i16 {
        saturate(B::to_i64(value), i16::MIN, i16::MAX)
    }

    pub fn from_uint16(value: u16) -> Bid64 {
        B::from_u64(u64::from(value))
    }

    pub fn to_uint16(value: Bid64) -> u16 {
        saturate_unsigned(B::to_u64(value), u16::MAX)
    }

    pub fn from_int8(value: i8) -> Bid64 {
        B::from_i64(i64::from(value))
    }

    pub fn to_int8(value: Bid64) -> i8 {
        saturate(B::to_i64(value), i8::MIN, i8::MAX)
    }

    pub fn from_uint8(value: u8) -> Bid64 {
        B::from_u64(u64::from(value))
    }

    pub fn to_uint8(value: Bid64) -> u8 {
        saturate_unsigned(B::to_u64(value), u8::MAX)
    }

    /// Rounds `value` to 16 significant digits.
    pub fn from_float64(value: f64) -> Bid64 {
        B::from_f64(value)
    }

    pub fn to_float64(value: Bid64) -> f64 {
        B::to_f64(value)
    }

    /// Widens `value` to `f64`, then rounds it to 16
    /// significant digits.
    pub fn from_float32(value: f32) -> Bid64 {
        B::from_f32(value)
    }

    pub fn to_float32(value: Bid64) -> f32 {
        B::to_f32(value)
    }

    pub fn round_towards_positive_infinity(a: Bid64) -> Bid64 {
        B::round_ceiling(a)
    }

    pub fn round_towards_negative_infinity(a: Bid64) -> Bid64 {
        B::round_floor(a)
    }

    pub fn round_towards_zero(a: Bid64) -> Bid64 {
        B::round_down(a)
    }

    pub fn round_to_nearest_ties_away_from_zero(a: Bid64) -> Bid64 {
        B::round_half_up(a)
    }

    // Classification.

    pub fn is_nan(a: Bid64) -> bool {
        B::is_nan(a)
    }

    pub fn is_infinity(a: Bid64) -> bool {
        B::is_infinite(a)
    }

    pub fn is_positive_infinity(a: Bid64) -> bool {
        B::is_positive_infinity(a)
    }

    pub fn is_negative_infinity(a: Bid64) -> bool {
        B::is_negative_infinity(a)
    }

    pub fn is_finite(a: Bid64) -> bool {
        B::is_finite(a)
    }

    pub fn is_normal(a: Bid64) -> bool {
        B::is_normal(a)
    }

    pub fn sign_bit(a: Bid64) -> bool {
        B::signbit(a)
    }

    // Comparison.

    /// Returns -1, 0 or 1 as `a` is less than, equal to or
    /// greater than `b`.
    ///
    /// Unordered operands are resolved by the runtime's
    /// [`NanOrder`][crate::classify::NanOrder].
    pub fn compare(a: Bid64, b: Bid64) -> i32 {
        match B::partial_cmp(a, b) {
            Some(Ordering::Less) => -1,
            Some(Ordering::Equal) => 0,
            Some(Ordering::Greater) => 1,
            None => R::NAN_ORDER.tie_break(B::is_nan(a), B::is_nan(b)),
        }
    }

    pub fn is_equal(a: Bid64, b: Bid64) -> bool {
        B::partial_cmp(a, b) == Some(Ordering::Equal)
    }

    /// The only relation that holds for unordered operands.
    pub fn is_not_equal(a: Bid64, b: Bid64) -> bool {
        B::partial_cmp(a, b) != Some(Ordering::Equal)
    }

    pub fn is_less(a: Bid64, b: Bid64) -> bool {
        matches!(B::partial_cmp(a, b), Some(Ordering::Less))
    }

    pub fn is_less_or_equal(a: Bid64, b: Bid64) -> bool {
        matches!(
            B::partial_cmp(a, b),
            Some(Ordering::Less | Ordering::Equal)
        )
    }

    pub fn is_greater(a: Bid64, b: Bid64) -> bool {
        matches!(B::partial_cmp(a, b), Some(Ordering::Greater))
    }

    pub fn is_greater_or_equal(a: Bid64, b: Bid64) -> bool {
        matches!(
            B::partial_cmp(a, b),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }

    pub fn is_zero(a: Bid64) -> bool {
        Self::is_equal(a, Bid64::ZERO)
    }

    /// True for NaN.
    pub fn is_non_zero(a: Bid64) -> bool {
        Self::is_not_equal(a, Bid64::ZERO)
    }

    pub fn is_positive(a: Bid64) -> bool {
        Self::is_greater(a, Bid64::ZERO)
    }

    pub fn is_negative(a: Bid64) -> bool {
        Self::is_less(a, Bid64::ZERO)
    }

    pub fn is_non_positive(a: Bid64) -> bool {
        Self::is_less_or_equal(a, Bid64::ZERO)
    }

    pub fn is_non_negative(a: Bid64) -> bool {
        Self::is_greater_or_equal(a, Bid64::ZERO)
    }

    // Minimum and maximum.

    /// Returns the larger of `a` and `b`, or the canonical NaN
    /// if either is NaN.
    pub fn max2(a: Bid64, b: Bid64) -> Bid64 {
        if B::is_nan(a) || B::is_nan(b) {
            Bid64::NAN
        } else {
            B::max(a, b)
        }
    }

    pub fn max3(a: Bid64, b: Bid64, c: Bid64) -> Bid64 {
        Self::max2(Self::max2(a, b), c)
    }

    pub fn max4(a: Bid64, b: Bid64, c: Bid64, d: Bid64) -> Bid64 {
        Self::max2(Self::max2(a, b), Self::max2(c, d))
    }

    /// Returns the smaller of `a` and `b`, or the canonical NaN
    /// if either is NaN.
    pub fn min2(a: Bid64, b: Bid64) -> Bid64 {
        if B::is_nan(a) || B::is_nan(b) {
            Bid64::NAN
        } else {
            B::min(a, b)
        }
    }

    pub fn min3(a: Bid64, b: Bid64, c: Bid64) -> Bid64 {
        Self::min2(Self::min2(a, b), c)
    }

    pub fn min4(a: Bid64, b: Bid64, c: Bid64, d: Bid64) -> Bid64 {
        Self::min2(Self::min2(a, b), Self::min2(c, d))
    }

    // Arithmetic.

    /// Flips the sign bit, NaNs included.
    pub fn negate(a: Bid64) -> Bid64 {
        a.copy_neg()
    }

    /// Clears the sign bit, NaNs included.
    pub fn abs(a: Bid64) -> Bid64 {
        a.copy_abs()
    }

    pub fn add2(a: Bid64, b: Bid64) -> Bid64 {
        B::add(a, b)
    }

    pub fn add3(a: Bid64, b: Bid64, c: Bid64) -> Bid64 {
        B::add(B::add(a, b), c)
    }

    pub fn add4(a: Bid64, b: Bid64, c: Bid64, d: Bid64) -> Bid64 {
        B::add(B::add(B::add(a, b), c), d)
    }

    pub fn subtract(a: Bid64, b: Bid64) -> Bid64 {
        B::sub(a, b)
    }

    pub fn multiply2(a: Bid64, b: Bid64) -> Bid64 {
        B::mul(a, b)
    }

    pub fn multiply3(a: Bid64, b: Bid64, c: Bid64) -> Bid64 {
        B::mul(B::mul(a, b), c)
    }

    pub fn multiply4(a: Bid64, b: Bid64, c: Bid64, d: Bid64) -> Bid64 {
        B::mul(B::mul(B::mul(a, b), c), d)
    }

    pub fn multiply_by_int32(a: Bid64, b: i32) -> Bid64 {
        B::mul(a, B::from_i64(i64::from(b)))
    }

    pub fn multiply_by_int64(a: Bid64, b: i64) -> Bid64 {
        B::mul(a, B::from_i64(b))
    }

    pub fn divide(a: Bid64, b: Bid64) -> Bid64 {
        B::div(a, b)
    }

    pub fn divide_by_int32(a: Bid64, b: i32) -> Bid64 {
        B::div(a, B::from_i64(i64::from(b)))
    }

    pub fn divide_by_int64(a: Bid64, b: i64) -> Bid64 {
        B::div(a, B::from_i64(b))
    }

    /// Returns `(a * b) + c`.
    pub fn multiply_and_add(a: Bid64, b: Bid64, c: Bid64) -> Bid64 {
        B::mul_add(a, b, c)
    }

    /// Returns `a * 10^n`.
    pub fn scale_by_power_of_ten(a: Bid64, n: i32) -> Bid64 {
        B::scale(a, n)
    }

    /// Returns `(a + b) / 2`.
    pub fn mean2(a: Bid64, b: Bid64) -> Bid64 {
        B::div(B::add(a, b), B::from_i64(2))
    }

    pub fn next_up(a: Bid64) -> Bid64 {
        B::next_up(a)
    }

    pub fn next_down(a: Bid64) -> Bid64 {
        B::next_down(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        backend::Fallback,
        export::{Clr, Jvm},
    };

    type Net = Catalog<Fallback, Clr>;
    type Java = Catalog<Fallback, Jvm>;

    fn bits(x: Bid64) -> u64 {
        x.to_bits()
    }

    #[test]
    fn test_compare_nan_order() {
        let one = Bid64::ONE;
        let nan = Bid64::NAN;
        let tests = [
            // (a, b) => (clr, jvm)
            ((nan, one), (-1, 1)),
            ((one, nan), (1, -1)),
            ((nan, nan), (0, 0)),
            ((nan.copy_neg(), one), (-1, 1)),
            ((one, Bid64::new(2, 0)), (-1, -1)),
            ((Bid64::new(10, -1), one), (0, 0)),
            ((Bid64::INFINITY, Bid64::MAX), (1, 1)),
        ];
        for (i, ((a, b), (clr, jvm))) in tests.into_iter().enumerate() {
            assert_eq!(Net::compare(a, b), clr, "#{i}: clr compare({a}, {b})");
            assert_eq!(Java::compare(a, b), jvm, "#{i}: jvm compare({a}, {b})");
        }
    }

    #[test]
    fn test_quiet_comparisons() {
        let one = Bid64::ONE;
        let two = Bid64::new(2, 0);
        let nan = Bid64::NAN;
        #[rustfmt::skip]
        let tests = [
            // (a, b) => (==, !=, <, <=, >, >=)
            ((one, two), (false, true, true, true, false, false)),
            ((two, one), (false, true, false, false, true, true)),
            ((one, Bid64::new(100, -2)), (true, false, false, true, false, true)),
            ((nan, one), (false, true, false, false, false, false)),
            ((one, nan), (false, true, false, false, false, false)),
            ((nan, nan), (false, true, false, false, false, false)),
        ];
        for (i, ((a, b), want)) in tests.into_iter().enumerate() {
            let got = (
                Net::is_equal(a, b),
                Net::is_not_equal(a, b),
                Net::is_less(a, b),
                Net::is_less_or_equal(a, b),
                Net::is_greater(a, b),
                Net::is_greater_or_equal(a, b),
            );
            assert_eq!(got, want, "#{i}: ({a}, {b})");
        }
    }

    #[test]
    fn test_zero_comparisons() {
        let neg_zero = Bid64::ZERO.copy_neg();
        #[rustfmt::skip]
        let tests = [
            // a => (zero, non-zero, >0, <0, <=0, >=0)
            (Bid64::ZERO, (true, false, false, false, true, true)),
            (neg_zero, (true, false, false, false, true, true)),
            (Bid64::new(0, 300), (true, false, false, false, true, true)),
            (Bid64::ONE, (false, true, true, false, false, true)),
            (Bid64::new(-1, -398), (false, true, false, true, true, false)),
            (Bid64::NEG_INFINITY, (false, true, false, true, true, false)),
            (Bid64::NAN, (false, true, false, false, false, false)),
        ];
        for (i, (a, want)) in tests.into_iter().enumerate() {
            let got = (
                Net::is_zero(a),
                Net::is_non_zero(a),
                Net::is_positive(a),
                Net::is_negative(a),
                Net::is_non_positive(a),
                Net::is_non_negative(a),
            );
            assert_eq!(got, want, "#{i}: {a}");
        }
    }

    #[test]
    fn test_min_max_nan() {
        let one = Bid64::ONE;
        let two = Bid64::new(2, 0);
        let snan = Bid64::from_bits(0xFE00_0000_0000_0007);
        let nans = [Bid64::NAN, Bid64::NAN.copy_neg(), snan];
        for (i, nan) in nans.into_iter().enumerate() {
            assert_eq!(bits(Net::max2(one, nan)), crate::masks::NAN, "#{i}");
            assert_eq!(bits(Net::max2(nan, one)), crate::masks::NAN, "#{i}");
            assert_eq!(bits(Net::min2(one, nan)), crate::masks::NAN, "#{i}");
            assert_eq!(bits(Net::min3(one, two, nan)), crate::masks::NAN, "#{i}");
            assert_eq!(bits(Net::max4(one, two, one, nan)), crate::masks::NAN, "#{i}");
        }
    }

    #[test]
    fn test_min_max_reduce() {
        let d = |c| Bid64::new(c, 0);
        let tests = [
            ([d(1), d(2), d(3), d(4)], (4, 1)),
            ([d(4), d(3), d(2), d(1)], (4, 1)),
            ([d(-7), d(9), d(0), d(3)], (9, -7)),
        ];
        for (i, ([a, b, c, e], (max, min))) in tests.into_iter().enumerate() {
            assert_eq!(Net::max4(a, b, c, e).to_i64(), max, "#{i}");
            assert_eq!(Net::min4(a, b, c, e).to_i64(), min, "#{i}");
            assert_eq!(
                bits(Net::max3(a, b, c)),
                bits(Net::max2(Net::max2(a, b), c)),
                "#{i}"
            );
        }
    }

    #[test]
    fn test_reduction_order() {
        // (1E16 + 1) rounds back to 1E16, so the sum cancels to
        // zero. Summing right to left would produce 1.
        let a = Bid64::new(1_000_000_000_000_000, 1);
        let b = Bid64::ONE;
        let c = a.copy_neg();
        assert!(Net::add3(a, b, c).is_zero());
        assert_eq!(Net::add3(b, c, a).to_i64(), 1);
        assert!(Net::add4(a, b, c, Bid64::ZERO).is_zero());
    }

    #[test]
    fn test_fixed_point() {
        let tests = [
            // (mantissa, digits) => (coefficient, exponent)
            ((12345, 2), (12345, -2)),
            ((5, -3), (5, 3)),
            ((-1, 0), (1, 0)),
            ((i64::MAX, 0), (9_223_372_036_854_776, 3)),
        ];
        for (i, ((m, k), (coeff, exp))) in tests.into_iter().enumerate() {
            let got = Net::from_fixed_point64(m, k);
            assert_eq!((got.coeff(), got.unbiased_exp()), (coeff, exp), "#{i}: {got}");
            assert_eq!(got.signbit(), m < 0, "#{i}");
        }

        for (i, (m, k)) in [(12345, 2), (-987_654_321, 8), (0, 5), (42, -2)]
            .into_iter()
            .enumerate()
        {
            let d = Net::from_fixed_point64(m, k);
            assert_eq!(Net::to_fixed_point(d, k), m, "#{i}");
        }
        assert_eq!(
            bits(Net::from_fixed_point32(-25, 1)),
            bits(Bid64::new(-25, -1))
        );
        assert_eq!(
            bits(Net::from_fixed_point_u32(u32::MAX, 0)),
            bits(Bid64::new(i64::from(u32::MAX), 0))
        );
        // 1.999 with two digits truncates.
        assert_eq!(Net::to_fixed_point(Bid64::new(1999, -3), 2), 199);
    }

    #[test]
    fn test_narrowing() {
        let big = Bid64::new(1, 20);
        let tests = [
            // x => (i32, u32, i16, u16, i8, u8)
            (Bid64::new(-129, 0), (-129, 0, -129, 0, i8::MIN, 0)),
            (Bid64::new(300, 0), (300, 300, 300, 300, i8::MAX, u8::MAX)),
            (Bid64::new(-75, -1), (-7, 0, -7, 0, -7, 0)),
            (big, (i32::MAX, u32::MAX, i16::MAX, u16::MAX, i8::MAX, u8::MAX)),
            (big.copy_neg(), (i32::MIN, 0, i16::MIN, 0, i8::MIN, 0)),
            (Bid64::NAN, (0, 0, 0, 0, 0, 0)),
        ];
        for (i, (x, want)) in tests.into_iter().enumerate() {
            let got = (
                Net::to_int32(x),
                Net::to_uint32(x),
                Net::to_int16(x),
                Net::to_uint16(x),
                Net::to_int8(x),
                Net::to_uint8(x),
            );
            assert_eq!(got, want, "#{i}: {x}");
        }
        assert_eq!(Net::to_int64(Net::from_int8(-8)), -8);
        assert_eq!(Net::to_uint64(Net::from_uint16(u16::MAX)), u64::from(u16::MAX));
        assert_eq!(Net::to_int64(Net::from_int16(i16::MIN)), i64::from(i16::MIN));
        assert_eq!(Net::to_uint64(Net::from_uint8(200)), 200);
        assert_eq!(Net::to_uint64(Net::from_uint64(u64::MAX)), 18_446_744_073_709_550_000);
    }

    #[test]
    fn test_arithmetic() {
        let d = Bid64::new;
        let tests = [
            (Net::add2(d(2, 0), d(3, 0)), (5, 0)),
            (Net::subtract(d(2, 0), d(3, 0)), (-1, 0)),
            (Net::multiply3(d(2, 0), d(3, 0), d(4, -1)), (24, -1)),
            (Net::multiply_by_int32(d(15, -1), -2), (-30, -1)),
            (Net::multiply_by_int64(d(15, -1), 4), (60, -1)),
            (Net::divide_by_int32(d(1, 0), 4), (25, -2)),
            (Net::divide_by_int64(d(9, 0), 3), (3, 0)),
            (Net::mean2(d(3, 0), d(4, 0)), (35, -1)),
            (Net::multiply_and_add(d(2, 0), d(3, 0), d(1, -1)), (61, -1)),
            (Net::scale_by_power_of_ten(d(7, 0), 3), (7, 3)),
            (Net::scale_by_power_of_ten(d(123, 0), -2), (123, -2)),
            (Net::divide(d(1, 0), d(8, 0)), (125, -3)),
            (Net::add2(d(1, 0), Net::from_fixed_point64(1, 30)), (1_000_000_000_000_000, -15)),
        ];
        for (i, (got, (coeff, exp))) in tests.into_iter().enumerate() {
            assert_eq!(bits(got), bits(d(coeff, exp)), "#{i}: {got}");
        }
        assert!(Net::is_nan(Net::divide(Bid64::ZERO, Bid64::ZERO)));
    }

    #[test]
    fn test_sign_ops() {
        let nan = Bid64::NAN;
        assert_eq!(bits(Net::negate(nan)), crate::masks::NAN | crate::masks::MASK_SIGN);
        assert_eq!(bits(Net::abs(Net::negate(nan))), crate::masks::NAN);
        assert_eq!(bits(Net::negate(Bid64::ZERO)), 0xB1C0_0000_0000_0000);
        assert!(Net::sign_bit(Net::negate(Bid64::ONE)));
        assert!(!Net::sign_bit(Net::abs(Bid64::MIN)));
    }

    #[test]
    fn test_runtimes_agree() {
        // Only `compare` depends on the runtime.
        let xs = [Bid64::ONE, Bid64::NAN, Bid64::new(-5, 2), Bid64::INFINITY];
        for (i, &a) in xs.iter().enumerate() {
            for &b in &xs {
                assert_eq!(bits(Net::max2(a, b)), bits(Java::max2(a, b)), "#{i}");
                assert_eq!(bits(Net::add2(a, b)), bits(Java::add2(a, b)), "#{i}");
                assert_eq!(Net::is_less(a, b), Java::is_less(a, b), "#{i}");
            }
        }
        assert_eq!(Net::version(), Java::version());
    }

    #[cfg(feature = "vendor")]
    #[test]
    fn test_vendor_only_ops() {
        use crate::backend::Vendor;

        type V = Catalog<Vendor, Clr>;
        let x = Bid64::new(-25, -1);
        assert_eq!(V::to_int64(V::round_towards_positive_infinity(x)), -2);
        assert_eq!(V::to_int64(V::round_towards_negative_infinity(x)), -3);
        assert_eq!(V::to_int64(V::round_towards_zero(x)), -2);
        assert_eq!(V::to_int64(V::round_to_nearest_ties_away_from_zero(x)), -3);
        assert!(V::is_greater(V::next_up(Bid64::ONE), Bid64::ONE));
        assert!(V::is_less(V::next_down(Bid64::ONE), Bid64::ONE));
        assert_eq!(bits(V::max2(Bid64::ONE, Bid64::NAN)), crate::masks::NAN);
        assert_eq!(V::compare(Bid64::NAN, Bid64::ONE), -1);
    }
}
