//! Arithmetic on [`Bid64`].
//!
//! Every operation is correctly rounded (round half even) and
//! follows IEEE 754-2008 for special values, signed zeros and
//! preferred exponents.

use super::{arith64, bid64::Bid64};
use crate::macros::{binop_impl, neg_impl};

/// The widest coefficient the adders will build before
/// rounding, in digits.
///
/// One more digit for the sticky digit must still fit in a
/// `u128`.
const WIDE_DIGITS: u32 = 37;

impl Bid64 {
    /// Returns `self + rhs`.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn const_add(self, rhs: Self) -> Self {
        if self.is_special() || rhs.is_special() {
            return self.add_special(rhs);
        }
        Self::add_finite(self, rhs)
    }

    /// Returns `self - rhs`.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn const_sub(self, rhs: Self) -> Self {
        if rhs.is_nan() {
            // Keep the NaN's sign as it came in.
            return self.add_special(rhs);
        }
        self.const_add(rhs.copy_neg())
    }

    /// Returns `self * rhs`.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn const_mul(self, rhs: Self) -> Self {
        let sign = self.signbit() ^ rhs.signbit();
        if self.is_special() || rhs.is_special() {
            if self.is_nan() || rhs.is_nan() {
                return Self::select_nan(self, rhs);
            }
            // inf * 0 is invalid.
            if self.is_zero() || rhs.is_zero() {
                return Self::NAN;
            }
            return Self::inf(sign);
        }
        // Both coefficients are below 10^16, so the product fits
        // in 32 digits.
        let coeff = self.coeff() as u128 * rhs.coeff() as u128;
        let exp = self.unbiased_exp() as i32 + rhs.unbiased_exp() as i32;
        Self::rounded(sign, exp, coeff)
    }

    /// Returns `self / rhs`.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn const_div(self, rhs: Self) -> Self {
        let sign = self.signbit() ^ rhs.signbit();
        if self.is_special() || rhs.is_special() {
            if self.is_nan() || rhs.is_nan() {
                return Self::select_nan(self, rhs);
            }
            if self.is_infinite() {
                if rhs.is_infinite() {
                    // inf / inf is invalid.
                    return Self::NAN;
                }
                return Self::inf(sign);
            }
            // x / inf
            return Self::zero(sign, Self::ETINY);
        }
        if rhs.is_zero() {
            if self.is_zero() {
                // 0 / 0 is invalid.
                return Self::NAN;
            }
            // NB: This is where we'd signal division by zero.
            return Self::inf(sign);
        }

        let ideal = self.unbiased_exp() as i32 - rhs.unbiased_exp() as i32;
        if self.is_zero() {
            return Self::rounded(sign, ideal, 0);
        }

        // Widen the dividend so that the quotient carries more
        // than 16 digits, then fold the remainder into a sticky
        // digit.
        let lhs = self.coeff();
        let k = WIDE_DIGITS - arith64::digits(lhs);
        let n = arith64::shl(lhs, k);
        let d = rhs.coeff() as u128;
        let q = n / d;
        let r = n % d;

        let exp = ideal - k as i32 - 1;
        let (z, inexact) = Self::rounded_exact(sign, exp, q * 10 + (r != 0) as u128);
        if inexact || r != 0 || !z.is_finite() {
            return z;
        }

        // The quotient is exact, so strip trailing zeros until we
        // reach the ideal exponent.
        let mut coeff = z.coeff();
        let mut exp = z.unbiased_exp() as i32;
        let limit = if ideal < Self::EMAX_LESS_PREC as i32 {
            ideal
        } else {
            Self::EMAX_LESS_PREC as i32
        };
        while exp < limit && coeff != 0 && coeff % 10 == 0 {
            coeff /= 10;
            exp += 1;
        }
        // `exp` only moved towards `limit`, which is in range.
        #[allow(clippy::cast_possible_truncation)]
        let exp = exp as i16;
        Self::from_parts(sign, exp, coeff)
    }

    /// Returns `(self * a) + b`.
    ///
    /// The product is rounded before the addition.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn const_mul_add(self, a: Self, b: Self) -> Self {
        self.const_mul(a).const_add(b)
    }

    /// Returns `-self`.
    ///
    /// This is a quiet operation.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn const_neg(self) -> Self {
        self.copy_neg()
    }

    /// Addition where at least one operand is infinite or NaN.
    const fn add_special(self, rhs: Self) -> Self {
        debug_assert!(self.is_special() || rhs.is_special());

        if self.is_nan() || rhs.is_nan() {
            return Self::select_nan(self, rhs);
        }
        if self.is_infinite() {
            if rhs.is_infinite() && self.signbit() != rhs.signbit() {
                // inf - inf is invalid.
                return Self::NAN;
            }
            return Self::inf(self.signbit());
        }
        Self::inf(rhs.signbit())
    }

    /// Addition where both operands are finite.
    const fn add_finite(lhs: Self, rhs: Self) -> Self {
        // Order the operands so that `a` has the larger exponent.
        let (a, b) = if lhs.unbiased_exp() >= rhs.unbiased_exp() {
            (lhs, rhs)
        } else {
            (rhs, lhs)
        };
        let (ea, eb) = (a.unbiased_exp() as i32, b.unbiased_exp() as i32);
        let (ca, cb) = (a.coeff(), b.coeff());

        if ca == 0 && cb == 0 {
            // -0 + -0 = -0, otherwise +0.
            return Self::zero(a.signbit() && b.signbit(), b.unbiased_exp());
        }
        if ca == 0 {
            return b;
        }

        // `ea - eb` is at most `LIMIT`, so it is non-negative and
        // fits a `u32`.
        #[allow(clippy::cast_sign_loss)]
        let diff = (ea - eb) as u32;
        let da = arith64::digits(ca);
        if cb == 0 {
            // Pad `a` towards the ideal exponent, `eb`.
            let s = arith64::min_u32(diff, Bid64::DIGITS - da);
            let coeff = arith64::shl(ca, s);
            return Self::rounded(a.signbit(), ea - s as i32, coeff);
        }

        // Align `a` with `b` as far as the wide coefficient allows.
        let s = arith64::min_u32(diff, WIDE_DIGITS - da);
        let wide = arith64::shl(ca, s);
        let exp = ea - s as i32;
        let rest = diff - s;

        if rest == 0 {
            // Exact alignment.
            let cb = cb as u128;
            return if a.signbit() == b.signbit() {
                Self::rounded(a.signbit(), exp, wide + cb)
            } else if wide > cb {
                Self::rounded(a.signbit(), exp, wide - cb)
            } else if wide < cb {
                Self::rounded(b.signbit(), exp, cb - wide)
            } else {
                // Exact cancellation is +0.
                Self::rounded(false, exp, 0)
            };
        }

        // `a` has `WIDE_DIGITS` digits, so `b` only matters
        // through its high digits and whether anything lies
        // below them.
        let (high, sticky) = if rest > 19 {
            (0, true)
        } else {
            let p = arith64::pow10(rest);
            (cb / p, cb % p != 0)
        };
        let high = high as u128;
        let coeff = if a.signbit() == b.signbit() {
            (wide + high) * 10 + sticky as u128
        } else {
            (wide - high) * 10 - sticky as u128
        };
        Self::rounded(a.signbit(), exp - 1, coeff)
    }
}

binop_impl! {
    Add, add, AddAssign, add_assign => const_add for Bid64;
    Sub, sub, SubAssign, sub_assign => const_sub for Bid64;
    Mul, mul, MulAssign, mul_assign => const_mul for Bid64;
    Div, div, DivAssign, div_assign => const_div for Bid64;
}

neg_impl! { const_neg for Bid64 }

#[cfg(test)]
mod tests {
    use super::*;

    fn d(coeff: i64, exp: i16) -> Bid64 {
        Bid64::new(coeff, exp)
    }

    fn parts(x: Bid64) -> (bool, u64, i16) {
        (x.signbit(), x.coeff(), x.unbiased_exp())
    }

    #[test]
    fn test_add() {
        let tests = [
            // (lhs, rhs) => (sign, coeff, exp)
            ((d(2, 0), d(3, 0)), (false, 5, 0)),
            ((d(12, -1), d(7, 0)), (false, 82, -1)),
            ((d(-12, -1), d(7, 0)), (false, 58, -1)),
            ((d(12, -1), d(-7, 0)), (true, 58, -1)),
            ((d(5, 0), d(-5, 0)), (false, 0, 0)),
            ((d(1, 0), d(0, -3)), (false, 1000, -3)),
            ((d(0, 5), d(3, 0)), (false, 3, 0)),
            ((d(-0, 2), d(-0, -2)), (false, 0, -2)),
            // Rounds half even on the 17th digit.
            ((d(Bid64::MAX_COEFF, 0), d(1, 0)), (false, 1_000_000_000_000_000, 1)),
            ((d(1_000_000_000_000_000, 0), d(5, -1)), (false, 1_000_000_000_000_000, 0)),
            ((d(1_000_000_000_000_001, 0), d(5, -1)), (false, 1_000_000_000_000_002, 0)),
            // A tiny operand only breaks ties.
            ((d(1_000_000_000_000_000, 0), d(500_000_000_000_001, -30)), (false, 1_000_000_000_000_000, 0)),
            ((d(1_000_000_000_000_000, 0), d(-1, -40)), (false, 1_000_000_000_000_000, 0)),
            ((d(1_000_000_000_000_000, 0), d(-6, -1)), (false, 9_999_999_999_999_994, -1)),
            ((d(1, 300), d(1, -300)), (false, 1_000_000_000_000_000, 285)),
        ];
        for (i, ((x, y), want)) in tests.into_iter().enumerate() {
            let got = x + y;
            assert_eq!(parts(got), want, "#{i}: {x} + {y} = {got}");
            let got = y + x;
            assert_eq!(parts(got), want, "#{i}: {y} + {x} = {got}");
        }
    }

    #[test]
    fn test_add_zeros() {
        let nz = Bid64::ZERO.copy_neg();
        assert!((nz + nz).signbit());
        assert!(!(nz + Bid64::ZERO).signbit());
        assert!(!(Bid64::ZERO + nz).signbit());
    }

    #[test]
    fn test_add_special() {
        let one = Bid64::ONE;
        let tests = [
            (Bid64::INFINITY, one, Bid64::INFINITY),
            (one, Bid64::NEG_INFINITY, Bid64::NEG_INFINITY),
            (Bid64::INFINITY, Bid64::INFINITY, Bid64::INFINITY),
            (Bid64::INFINITY, Bid64::NEG_INFINITY, Bid64::NAN),
            (Bid64::NAN, one, Bid64::NAN),
            (one, Bid64::NAN, Bid64::NAN),
            (Bid64::MAX, Bid64::MAX, Bid64::INFINITY),
            (Bid64::MIN, Bid64::MIN, Bid64::NEG_INFINITY),
        ];
        for (i, (x, y, want)) in tests.into_iter().enumerate() {
            let got = x + y;
            assert_eq!(got.to_bits(), want.to_bits(), "#{i}: {x} + {y}");
        }
    }

    #[test]
    fn test_sub() {
        let tests = [
            ((d(5, 0), d(3, 0)), (false, 2, 0)),
            ((d(3, 0), d(5, 0)), (true, 2, 0)),
            ((d(1, 0), d(1, 0)), (false, 0, 0)),
            ((d(1, 0), d(1, -16)), (false, 9_999_999_999_999_999, -16)),
            ((d(-2, 0), d(-2, 0)), (false, 0, 0)),
        ];
        for (i, ((x, y), want)) in tests.into_iter().enumerate() {
            let got = x - y;
            assert_eq!(parts(got), want, "#{i}: {x} - {y} = {got}");
        }
        let nan = Bid64::NAN.copy_neg();
        assert!((Bid64::ONE - nan).signbit());
        assert!((Bid64::ONE - nan).is_nan());
    }

    #[test]
    fn test_mul() {
        let tests = [
            ((d(2, 0), d(3, 0)), (false, 6, 0)),
            ((d(-12, -1), d(12, -1)), (true, 144, -2)),
            ((Bid64::zero(true, 0), d(5, 0)), (true, 0, 0)),
            ((d(1_234_567_890_123_456, 0), d(10, 0)), (false, 1_234_567_890_123_456, 1)),
            ((d(Bid64::MAX_COEFF, 0), d(Bid64::MAX_COEFF, 0)), (false, 9_999_999_999_999_998, 16)),
            ((d(1, -300), d(1, -300)), (false, 0, -398)),
            ((d(0, 300), d(0, 300)), (false, 0, 369)),
        ];
        for (i, ((x, y), want)) in tests.into_iter().enumerate() {
            let got = x * y;
            assert_eq!(parts(got), want, "#{i}: {x} * {y} = {got}");
        }
        assert!((Bid64::INFINITY * Bid64::ZERO).is_nan());
        assert!((Bid64::INFINITY * d(-2, 0)).signbit());
        assert!((d(1, 300) * d(1, 300)).is_infinite());
    }

    #[test]
    fn test_div() {
        let tests = [
            ((d(6, 0), d(2, 0)), (false, 3, 0)),
            ((d(1, 0), d(8, 0)), (false, 125, -3)),
            ((d(1, 0), d(3, 0)), (false, 3_333_333_333_333_333, -16)),
            ((d(2, 0), d(3, 0)), (false, 6_666_666_666_666_667, -16)),
            ((d(-1, 0), d(4, 0)), (true, 25, -2)),
            ((d(100, 0), d(4, 0)), (false, 25, 0)),
            ((d(1000, 0), d(1, 1)), (false, 1000, -1)),
            ((d(0, 5), d(3, 0)), (false, 0, 5)),
            ((d(12, 0), d(12, 0)), (false, 1, 0)),
            ((d(1, 369), d(1, -10)), (false, 10_000_000_000, 369)),
        ];
        for (i, ((x, y), want)) in tests.into_iter().enumerate() {
            let got = x / y;
            assert_eq!(parts(got), want, "#{i}: {x} / {y} = {got}");
        }
    }

    #[test]
    fn test_div_special() {
        let tests = [
            (Bid64::ZERO, Bid64::ZERO, FpKind::Nan),
            (Bid64::ONE, Bid64::ZERO, FpKind::Inf(false)),
            (Bid64::ONE.copy_neg(), Bid64::ZERO, FpKind::Inf(true)),
            (Bid64::INFINITY, Bid64::INFINITY, FpKind::Nan),
            (Bid64::INFINITY, Bid64::ONE, FpKind::Inf(false)),
            (Bid64::ONE, Bid64::NEG_INFINITY, FpKind::Zero(true)),
            (Bid64::NAN, Bid64::ONE, FpKind::Nan),
        ];
        for (i, (x, y, want)) in tests.into_iter().enumerate() {
            let got = x / y;
            let kind = if got.is_nan() {
                FpKind::Nan
            } else if got.is_infinite() {
                FpKind::Inf(got.signbit())
            } else {
                FpKind::Zero(got.signbit())
            };
            assert_eq!(kind, want, "#{i}: {x} / {y} = {got}");
        }
    }

    #[derive(Debug, PartialEq)]
    enum FpKind {
        Nan,
        Inf(bool),
        Zero(bool),
    }

    #[test]
    fn test_nan_payload() {
        let x = Bid64::nan(false, 42);
        let y = Bid64::snan(true, 7);
        let got = x + y;
        assert!(got.is_qnan(), "{got}");
        assert!(got.signbit(), "{got}");
        assert_eq!(got.payload(), 7);

        let got = x * Bid64::ONE;
        assert_eq!(got.payload(), 42);
    }

    #[test]
    fn test_ops_refs() {
        let mut x = d(1, 0);
        x += d(2, 0);
        x *= &d(4, 0);
        x -= d(2, 0);
        x /= d(5, 0);
        assert_eq!(x, d(2, 0));
        assert_eq!(-&x, d(-2, 0));
        assert_eq!(&x + &x, d(4, 0));
    }
}
