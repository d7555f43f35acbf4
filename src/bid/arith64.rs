use core::cmp::Ordering;

/// Shift `x` to the left by `n` digits.
///
/// The result must fit in 38 digits.
pub(super) const fn shl(x: u64, n: u32) -> u128 {
    debug_assert!(digits(x) + n <= MAX_POW10_128);

    x as u128 * pow10_128(n)
}

/// Compares `lhs` and `rhs`.
pub(super) const fn const_cmp_u8(lhs: u8, rhs: u8) -> Ordering {
    match lhs.checked_sub(rhs) {
        Some(0) => Ordering::Equal,
        Some(_) => Ordering::Greater,
        None => Ordering::Less,
    }
}

/// Compares `lhs` and `rhs`.
pub(super) const fn const_cmp(lhs: u64, rhs: u64) -> Ordering {
    match lhs.checked_sub(rhs) {
        Some(0) => Ordering::Equal,
        Some(_) => Ordering::Greater,
        None => Ordering::Less,
    }
}

/// Orders `(lhs * 10^shift)` and `rhs`.
pub(super) const fn const_cmp_shifted(lhs: u64, rhs: u64, shift: u32) -> Ordering {
    match shl(lhs, shift).checked_sub(rhs as u128) {
        Some(0) => Ordering::Equal,
        Some(_) => Ordering::Greater,
        None => Ordering::Less,
    }
}

/// Returns the smaller of `a` and `b`.
pub(super) const fn min_u32(a: u32, b: u32) -> u32 {
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the number of decimal digits in `x`.
///
/// The result will be in [1, 20].
pub(super) const fn digits(mut x: u64) -> u32 {
    // Ensure that `x` is non-zero so that `digits(0) == 1`.
    //
    // This cannot cause an incorrect result because:
    //
    // - `x|1` sets the lowest bit, so it cannot increase the bit
    // length for a non-zero `x`.
    // - `x >= p` remains correct because the largest integer
    // less than `p` is 999...999, which is odd, meaning `x|1` is
    // a no-op.
    x |= 1;

    let r = ((bitlen(x) + 1) * 1233) / 4096;
    if r as usize >= POW10.len() {
        return r;
    }
    let p = POW10[r as usize];
    r + (x >= p) as u32
}

/// Returns the number of decimal digits in `x`.
///
/// The result will be in [1, 39].
pub(super) const fn digits128(mut x: u128) -> u32 {
    // See `digits` for why `x|1` is harmless.
    x |= 1;

    let r = ((bitlen128(x) + 1) * 1233) / 4096;
    if r >= MAX_POW10_128 + 1 {
        return r;
    }
    r + (x >= pow10_128(r)) as u32
}

/// Returns the minimum number of bits required to represent `x`.
///
/// It returns 0 for `x == 0`.
pub(super) const fn bitlen(x: u64) -> u32 {
    u64::BITS - x.leading_zeros()
}

/// Returns the minimum number of bits required to represent `x`.
///
/// It returns 0 for `x == 0`.
pub(super) const fn bitlen128(x: u128) -> u32 {
    u128::BITS - x.leading_zeros()
}

/// Returns 10^n.
///
/// `n` must be in [0, 19].
pub(super) const fn pow10(n: u32) -> u64 {
    debug_assert!(n <= 19);

    POW10[n as usize]
}

/// The largest `n` such that `10^n` fits in a `u128`.
pub(super) const MAX_POW10_128: u32 = 38;

/// Returns 10^n.
///
/// `n` must be in [0, 38].
pub(super) const fn pow10_128(n: u32) -> u128 {
    debug_assert!(n <= MAX_POW10_128);

    POW10_128[n as usize]
}

/// The result of dropping low digits from a coefficient.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) struct Shifted {
    /// The retained high digits, rounded half-even.
    pub coeff: u128,
    /// Whether any non-zero digit was discarded.
    pub inexact: bool,
}

/// Drops the low `n` digits of `x`, rounding half-even.
///
/// Dropping more digits than `x` has yields zero; the
/// discarded value is then below one half and never rounds
/// up.
pub(super) const fn shr_round(x: u128, n: u32) -> Shifted {
    if n == 0 {
        return Shifted {
            coeff: x,
            inexact: false,
        };
    }
    if n > MAX_POW10_128 {
        // x < 10^39/2, so the whole of `x` is under one half
        // of the dropped unit.
        return Shifted {
            coeff: 0,
            inexact: x != 0,
        };
    }
    let p = pow10_128(n);
    let mut q = x / p;
    let r = x % p;
    let half = p / 2;
    if r > half || (r == half && q % 2 != 0) {
        q += 1;
    }
    Shifted {
        coeff: q,
        inexact: r != 0,
    }
}

/// All 64-bit powers of 10.
const POW10: [u64; 20] = {
    let mut tab = [0u64; 20];
    let mut i = 0;
    while i < tab.len() {
        tab[i] = 10u64.pow(i as u32);
        i += 1;
    }
    tab
};

/// All 128-bit powers of 10.
const POW10_128: [u128; 39] = {
    let mut tab = [0u128; 39];
    let mut i = 0;
    while i < tab.len() {
        tab[i] = 10u128.pow(i as u32);
        i += 1;
    }
    tab
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shl() {
        let tests = [
            (9_999_999_999_999_999, 22),
            (999_999_999_999_999, 23),
            (1, 36),
            (9, 37),
            (123, 35),
            (0, 37),
        ];
        for (x, max) in tests {
            for n in 0..=max {
                let got = shl(x, n);
                let want = (x as u128) * 10u128.pow(n);
                assert_eq!(got, want, "shl({x}, {n})");
            }
        }
    }

    #[test]
    fn test_digits() {
        let mut buf = itoa::Buffer::new();
        for x in (0..u32::MAX).step_by(997) {
            let got = digits(x as u64);
            let want = buf.format(x).len() as u32;
            assert_eq!(got, want, "{x}");
        }
        assert_eq!(digits(u64::MAX), 20);
        for n in 1..20 {
            let x = 10u64.pow(n);
            assert_eq!(digits(x - 1), n, "{x}-1");
            assert_eq!(digits(x), n + 1, "{x}");
        }
    }

    #[test]
    fn test_digits128() {
        assert_eq!(digits128(0), 1);
        assert_eq!(digits128(u128::MAX), 39);
        for n in 1..=38 {
            let x = 10u128.pow(n);
            assert_eq!(digits128(x - 1), n, "{x}-1");
            assert_eq!(digits128(x), n + 1, "{x}");
        }
    }

    #[test]
    fn test_shr_round() {
        let tests = [
            (1234, 1, 123, true),
            (1235, 1, 124, true),
            (1245, 1, 124, true),
            (1246, 1, 125, true),
            (1240, 1, 124, false),
            (15, 1, 2, true),
            (25, 1, 2, true),
            (5, 1, 0, true),
            (6, 1, 1, true),
            (999, 5, 0, true),
            (0, 40, 0, false),
            (7, 40, 0, true),
            (12_345, 0, 12_345, false),
        ];
        for (i, (x, n, coeff, inexact)) in tests.into_iter().enumerate() {
            let got = shr_round(x, n);
            assert_eq!(got, Shifted { coeff, inexact }, "#{i}: shr_round({x}, {n})");
        }
    }
}
