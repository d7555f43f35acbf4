use core::cmp::Ordering;

use dec::{Context, Decimal64, Rounding};

use super::Decimal64Ops;
use crate::bid::Bid64;

/// `scaleb` rejects scales past `2 * (emax + precision)`.
/// Every finite result has already saturated by then.
const MAX_SCALEB: i32 = 2 * (384 + 16);

/// The decNumber backend.
///
/// decNumber stores decimal64 values in the densely packed
/// decimal encoding, so every call converts its operands from
/// BID (by coefficient and exponent) and converts the result
/// back. The library works in a fresh default context: round
/// half even with 16 digits of precision.
///
/// NaN payloads are not carried across the conversion.
#[derive(Copy, Clone, Debug, Default)]
pub struct Vendor;

impl Vendor {
    /// Converts `x` into decNumber's encoding.
    fn to_dec(cx: &mut Context<Decimal64>, x: Bid64) -> Decimal64 {
        let sign = x.signbit();
        if x.is_nan() {
            return special(if x.is_snan() { 0x7E } else { 0x7C }, sign);
        }
        if x.is_infinite() {
            return special(0x78, sign);
        }
        // The coefficient has at most 16 digits, so it is both
        // exact and positive as an `i64`.
        #[allow(clippy::cast_possible_wrap)]
        let mut d = cx.from_i64(x.coeff() as i64);
        cx.set_exponent(&mut d, i32::from(x.unbiased_exp()));
        if sign {
            let mut bytes = d.to_be_bytes();
            bytes[0] |= 0x80;
            d = Decimal64::from_be_bytes(bytes);
        }
        d
    }

    /// Converts `d` from decNumber's encoding.
    fn from_dec(d: Decimal64) -> Bid64 {
        let sign = d.is_signed();
        if d.is_nan() {
            return if d.is_signaling_nan() {
                Bid64::snan(sign, 0)
            } else {
                Bid64::nan(sign, 0)
            };
        }
        if d.is_infinite() {
            return Bid64::inf(sign);
        }
        let coeff = d.coefficient().unsigned_abs();
        Bid64::rounded(sign, d.exponent(), u128::from(coeff))
    }

    fn unary<F>(x: Bid64, f: F) -> Bid64
    where
        F: FnOnce(&mut Context<Decimal64>, Decimal64) -> Decimal64,
    {
        let mut cx = Context::<Decimal64>::default();
        let x = Self::to_dec(&mut cx, x);
        Self::from_dec(f(&mut cx, x))
    }

    fn binary<F>(lhs: Bid64, rhs: Bid64, f: F) -> Bid64
    where
        F: FnOnce(&mut Context<Decimal64>, Decimal64, Decimal64) -> Decimal64,
    {
        let mut cx = Context::<Decimal64>::default();
        let lhs = Self::to_dec(&mut cx, lhs);
        let rhs = Self::to_dec(&mut cx, rhs);
        Self::from_dec(f(&mut cx, lhs, rhs))
    }

    fn test<F>(x: Bid64, f: F) -> bool
    where
        F: FnOnce(&Decimal64) -> bool,
    {
        let mut cx = Context::<Decimal64>::default();
        f(&Self::to_dec(&mut cx, x))
    }

    /// Rounds to an integral value using `mode`.
    fn round_with(x: Bid64, mode: Rounding) -> Bid64 {
        Self::unary(x, |cx, x| {
            cx.set_rounding(mode);
            cx.round(x)
        })
    }
}

/// Builds an infinity or NaN from the top byte of its encoding,
/// which decNumber shares with BID.
fn special(top: u8, sign: bool) -> Decimal64 {
    let mut bytes = [0u8; 8];
    bytes[0] = top | (u8::from(sign) << 7);
    Decimal64::from_be_bytes(bytes)
}

impl Decimal64Ops for Vendor {
    const NAME: &'static str = "vendor";

    fn is_nan(x: Bid64) -> bool {
        Self::test(x, Decimal64::is_nan)
    }

    fn is_infinite(x: Bid64) -> bool {
        Self::test(x, Decimal64::is_infinite)
    }

    fn is_finite(x: Bid64) -> bool {
        Self::test(x, Decimal64::is_finite)
    }

    fn is_normal(x: Bid64) -> bool {
        Self::test(x, Decimal64::is_normal)
    }

    fn signbit(x: Bid64) -> bool {
        Self::test(x, Decimal64::is_signed)
    }

    fn partial_cmp(lhs: Bid64, rhs: Bid64) -> Option<Ordering> {
        let mut cx = Context::<Decimal64>::default();
        let lhs = Self::to_dec(&mut cx, lhs);
        let rhs = Self::to_dec(&mut cx, rhs);
        cx.partial_cmp(lhs, rhs)
    }

    fn from_i64(v: i64) -> Bid64 {
        let mut cx = Context::<Decimal64>::default();
        Self::from_dec(cx.from_i64(v))
    }

    fn from_u64(v: u64) -> Bid64 {
        let mut cx = Context::<Decimal64>::default();
        Self::from_dec(cx.from_u64(v))
    }

    fn to_i64(x: Bid64) -> i64 {
        Self::round_down(x).to_i64()
    }

    fn to_u64(x: Bid64) -> u64 {
        Self::round_down(x).to_u64()
    }

    fn add(lhs: Bid64, rhs: Bid64) -> Bid64 {
        Self::binary(lhs, rhs, |cx, lhs, rhs| cx.add(lhs, rhs))
    }

    fn sub(lhs: Bid64, rhs: Bid64) -> Bid64 {
        Self::binary(lhs, rhs, |cx, lhs, rhs| cx.sub(lhs, rhs))
    }

    fn mul(lhs: Bid64, rhs: Bid64) -> Bid64 {
        Self::binary(lhs, rhs, |cx, lhs, rhs| cx.mul(lhs, rhs))
    }

    fn div(lhs: Bid64, rhs: Bid64) -> Bid64 {
        Self::binary(lhs, rhs, |cx, lhs, rhs| cx.div(lhs, rhs))
    }

    fn mul_add(x: Bid64, y: Bid64, z: Bid64) -> Bid64 {
        let mut cx = Context::<Decimal64>::default();
        let x = Self::to_dec(&mut cx, x);
        let y = Self::to_dec(&mut cx, y);
        let z = Self::to_dec(&mut cx, z);
        Self::from_dec(cx.fma(x, y, z))
    }

    fn scale(x: Bid64, n: i32) -> Bid64 {
        // The round trip through decNumber would drop payloads
        // and quiet signaling NaNs.
        if !x.is_finite() {
            return x;
        }
        let n = Decimal64::from(n.clamp(-MAX_SCALEB, MAX_SCALEB));
        Self::unary(x, |cx, x| cx.scaleb(x, n))
    }

    fn max(lhs: Bid64, rhs: Bid64) -> Bid64 {
        Self::binary(lhs, rhs, |cx, lhs, rhs| cx.max(lhs, rhs))
    }

    fn min(lhs: Bid64, rhs: Bid64) -> Bid64 {
        Self::binary(lhs, rhs, |cx, lhs, rhs| cx.min(lhs, rhs))
    }

    fn next_up(x: Bid64) -> Bid64 {
        Self::unary(x, |cx, x| cx.next_plus(x))
    }

    fn next_down(x: Bid64) -> Bid64 {
        Self::unary(x, |cx, x| cx.next_minus(x))
    }

    fn round_ceiling(x: Bid64) -> Bid64 {
        Self::round_with(x, Rounding::Ceiling)
    }

    fn round_floor(x: Bid64) -> Bid64 {
        Self::round_with(x, Rounding::Floor)
    }

    fn round_down(x: Bid64) -> Bid64 {
        Self::round_with(x, Rounding::Down)
    }

    fn round_half_up(x: Bid64) -> Bid64 {
        Self::round_with(x, Rounding::HalfUp)
    }
}
