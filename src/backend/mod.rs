//! The arithmetic backends.
//!
//! A backend is a zero-sized type implementing
//! [`Decimal64Ops`]. The exported surface is monomorphized
//! against [`Selected`], which the Cargo features pick at build
//! time:
//!
//! - `fallback` selects [`Fallback`], the builtin BID
//! arithmetic with bit-mask classification. It wins when both
//! features are enabled.
//! - `vendor` (the default) selects `Vendor`, which forwards to
//! the decNumber library.

use core::cmp::Ordering;

use crate::bid::Bid64;

mod fallback;
#[cfg(feature = "vendor")]
mod vendor;

pub use fallback::Fallback;
#[cfg(feature = "vendor")]
#[cfg_attr(docsrs, doc(cfg(feature = "vendor")))]
pub use vendor::Vendor;

/// The backend the exported entry points use.
#[cfg(feature = "fallback")]
pub type Selected = Fallback;

/// The backend the exported entry points use.
#[cfg(all(feature = "vendor", not(feature = "fallback")))]
pub type Selected = Vendor;

#[cfg(not(any(feature = "vendor", feature = "fallback")))]
compile_error!("enable either the `vendor` or the `fallback` feature");

/// The primitive decimal64 operations the catalog is written
/// in terms of.
///
/// Every method is a pure function of its arguments.
/// Implementations never allocate, block or log, except for
/// the fatal stop of an operation the backend does not
/// provide.
pub trait Decimal64Ops {
    /// A short, human readable name.
    const NAME: &'static str;

    /// Reports whether `x` is a NaN.
    fn is_nan(x: Bid64) -> bool;
    /// Reports whether `x` is an infinity.
    fn is_infinite(x: Bid64) -> bool;
    /// Reports whether `x` is neither infinite nor NaN.
    fn is_finite(x: Bid64) -> bool;
    /// Reports whether `x` is finite, non-zero and not
    /// subnormal.
    fn is_normal(x: Bid64) -> bool;
    /// Reports whether the sign bit of `x` is set.
    fn signbit(x: Bid64) -> bool;

    /// Reports whether `x` is positive infinity.
    fn is_positive_infinity(x: Bid64) -> bool {
        Self::is_infinite(x) && !Self::signbit(x)
    }

    /// Reports whether `x` is negative infinity.
    fn is_negative_infinity(x: Bid64) -> bool {
        Self::is_infinite(x) && Self::signbit(x)
    }

    /// Orders `lhs` and `rhs`, or returns `None` if either is
    /// NaN.
    fn partial_cmp(lhs: Bid64, rhs: Bid64) -> Option<Ordering>;

    /// Converts `v` to the nearest decimal.
    fn from_i64(v: i64) -> Bid64;
    /// Converts `v` to the nearest decimal.
    fn from_u64(v: u64) -> Bid64;
    /// Converts `v` to the nearest decimal.
    fn from_f64(v: f64) -> Bid64 {
        Bid64::from_f64(v)
    }
    /// Converts `v` to the nearest decimal.
    fn from_f32(v: f32) -> Bid64 {
        Bid64::from_f32(v)
    }

    /// Truncates `x` to an `i64`, saturating.
    fn to_i64(x: Bid64) -> i64;
    /// Truncates `x` to a `u64`, saturating.
    fn to_u64(x: Bid64) -> u64;
    /// Converts `x` to the nearest `f64`.
    fn to_f64(x: Bid64) -> f64 {
        x.to_f64()
    }
    /// Converts `x` to the nearest `f32`.
    fn to_f32(x: Bid64) -> f32 {
        x.to_f32()
    }

    /// Returns `lhs + rhs`.
    fn add(lhs: Bid64, rhs: Bid64) -> Bid64;
    /// Returns `lhs - rhs`.
    fn sub(lhs: Bid64, rhs: Bid64) -> Bid64;
    /// Returns `lhs * rhs`.
    fn mul(lhs: Bid64, rhs: Bid64) -> Bid64;
    /// Returns `lhs / rhs`.
    fn div(lhs: Bid64, rhs: Bid64) -> Bid64;
    /// Returns `(x * y) + z`.
    fn mul_add(x: Bid64, y: Bid64, z: Bid64) -> Bid64;
    /// Returns `x * 10^n`. NaNs and infinities are returned
    /// unchanged.
    fn scale(x: Bid64, n: i32) -> Bid64;

    /// Returns the larger operand. Neither operand is NaN.
    fn max(lhs: Bid64, rhs: Bid64) -> Bid64;
    /// Returns the smaller operand. Neither operand is NaN.
    fn min(lhs: Bid64, rhs: Bid64) -> Bid64;

    /// Returns the least number greater than `x`.
    fn next_up(x: Bid64) -> Bid64;
    /// Returns the greatest number less than `x`.
    fn next_down(x: Bid64) -> Bid64;

    /// Rounds `x` to an integral value towards +∞.
    fn round_ceiling(x: Bid64) -> Bid64;
    /// Rounds `x` to an integral value towards −∞.
    fn round_floor(x: Bid64) -> Bid64;
    /// Rounds `x` to an integral value towards zero.
    fn round_down(x: Bid64) -> Bid64;
    /// Rounds `x` to the nearest integral value, with ties away
    /// from zero.
    fn round_half_up(x: Bid64) -> Bid64;
}
