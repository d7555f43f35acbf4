//! Multiplication by a power of ten.

use crate::bid::Bid64;

/// The largest power of ten a decimal64 holds exactly, both
/// as `10^k` and as `10^-k`.
const MAX_EXACT_POW: u32 = 384;

/// Every finite result saturates (or underflows to zero) well
/// before this exponent.
const MAX_SCALE: u32 = 1024;

/// Returns `10^k`, or `10^-k` if `recip` is set.
///
/// The power is built by repeated squaring from `10` (or
/// `10^-1`), so this costs O(log k) multiplications. Every
/// partial product is an exact power of ten, so the result is
/// exact.
fn pow10(mut k: u32, recip: bool) -> Bid64 {
    debug_assert!(k <= MAX_EXACT_POW);

    let mut pow = Bid64::new(1, if recip { -1 } else { 1 });
    let mut acc = Bid64::ONE;
    while k != 0 {
        if k & 1 != 0 {
            acc = acc * pow;
        }
        k >>= 1;
        // 10^512 does not fit.
        if k != 0 {
            pow = pow * pow;
        }
    }
    acc
}

/// Returns `x * 10^n`, rounded once.
///
/// NaNs and infinities are returned unchanged.
pub fn scale(x: Bid64, n: i32) -> Bid64 {
    if !x.is_finite() {
        return x;
    }

    let mut rem = n.unsigned_abs().min(MAX_SCALE);
    let mut result = x;
    if n >= 0 {
        // The factors are exact and the product only rounds
        // once it overflows, which sticks.
        while rem != 0 {
            let k = rem.min(MAX_EXACT_POW);
            result = result * pow10(k, false);
            rem -= k;
        }
        return result;
    }

    // Lower the exponent as far as it goes without dropping
    // digits, then round the rest off in one step.
    let room = u32::from(x.unbiased_exp().abs_diff(Bid64::ETINY));
    let mut exact = rem.min(room);
    rem -= exact;
    while exact != 0 {
        let k = exact.min(MAX_EXACT_POW);
        result = result * pow10(k, true);
        exact -= k;
    }
    if rem != 0 {
        // Past 17 digits everything rounds to zero anyway.
        result = result * pow10(rem.min(MAX_EXACT_POW), true);
    }
    result
}
