//! Conversions between [`Bid64`] and the primitive integer and
//! binary floating point types.

use core::fmt::Write;

use super::{arith64, bid64::Bid64};
use crate::util::StackBuf;

// Integers.
impl Bid64 {
    /// Creates a number from an `i64`, rounding to 16 digits if
    /// needed.
    pub const fn from_i64(v: i64) -> Self {
        Self::rounded(v < 0, 0, v.unsigned_abs() as u128)
    }

    /// Creates a number from a `u64`, rounding to 16 digits if
    /// needed.
    pub const fn from_u64(v: u64) -> Self {
        Self::rounded(false, 0, v as u128)
    }

    /// Truncates towards zero.
    ///
    /// Values outside of an `i128` saturate. NaN is zero.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    const fn to_i128(self) -> i128 {
        if self.is_nan() {
            return 0;
        }
        if self.is_infinite() {
            return if self.signbit() { i128::MIN } else { i128::MAX };
        }
        let coeff = self.coeff();
        let exp = self.unbiased_exp();
        let v = if coeff == 0 {
            0
        } else if exp >= 0 {
            // `coeff < 10^16`, so anything past 10^22 no longer
            // fits in 38 digits.
            if exp > 22 {
                i128::MAX
            } else {
                arith64::shl(coeff, exp as u32) as i128
            }
        } else if exp < -19 {
            0
        } else {
            (coeff / arith64::pow10((-exp) as u32)) as i128
        };
        if self.signbit() {
            -v
        } else {
            v
        }
    }
}

macro_rules! from_int_impl {
    ($($name:ident($t:ty) => $via:ident($wide:ty)),* $(,)?) => ($(
        impl Bid64 {
            #[doc = concat!("Creates a number from a `", stringify!($t), "`.")]
            pub const fn $name(v: $t) -> Self {
                Self::$via(v as $wide)
            }
        }

        impl From<$t> for Bid64 {
            fn from(v: $t) -> Self {
                Self::$name(v)
            }
        }
    )*)
}
from_int_impl! {
    from_i32(i32) => from_i64(i64),
    from_i16(i16) => from_i64(i64),
    from_i8(i8) => from_i64(i64),
    from_u32(u32) => from_u64(u64),
    from_u16(u16) => from_u64(u64),
    from_u8(u8) => from_u64(u64),
}

impl From<i64> for Bid64 {
    fn from(v: i64) -> Self {
        Self::from_i64(v)
    }
}

impl From<u64> for Bid64 {
    fn from(v: u64) -> Self {
        Self::from_u64(v)
    }
}

macro_rules! to_int_impl {
    ($($name:ident -> $t:ty),* $(,)?) => ($(
        impl Bid64 {
            #[doc = concat!("Converts the number to a `", stringify!($t), "`.")]
            ///
            /// The fractional part is truncated. Out of range values
            /// and infinities saturate, and NaN converts to zero.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            pub const fn $name(self) -> $t {
                let v = self.to_i128();
                if v > <$t>::MAX as i128 {
                    <$t>::MAX
                } else if v < <$t>::MIN as i128 {
                    <$t>::MIN
                } else {
                    v as $t
                }
            }
        }
    )*)
}
to_int_impl! {
    to_i64 -> i64,
    to_i32 -> i32,
    to_i16 -> i16,
    to_i8 -> i8,
    to_u64 -> u64,
    to_u32 -> u32,
    to_u16 -> u16,
    to_u8 -> u8,
}

/// Enough for `-1.234567890123456e-324` and `9999999999999999e-398`.
const FLOAT_BUF: usize = 32;

// Binary floating point.
impl Bid64 {
    /// Creates a number from an `f64`.
    ///
    /// The exact binary value is rounded to 16 significant
    /// digits. Trailing zeros after the decimal point are
    /// dropped, so `0.1` becomes `1E-1`.
    pub fn from_f64(f: f64) -> Self {
        if f.is_nan() {
            return Self::NAN;
        }
        let sign = f.is_sign_negative();
        if f.is_infinite() {
            return Self::inf(sign);
        }
        if f == 0.0 {
            return Self::zero(sign, 0);
        }

        // `{:.15e}` prints the correctly rounded, 16 digit
        // mantissa, e.g. `1.000000000000000e-1`.
        let mut buf = StackBuf::<FLOAT_BUF>::new();
        if write!(buf, "{:.15e}", f.abs()).is_err() {
            return Self::NAN;
        }
        let Some((coeff, exp)) = parse_sci(buf.as_bytes()) else {
            return Self::NAN;
        };

        let (mut coeff, mut exp) = (coeff, exp - 15);
        while exp < 0 && coeff % 10 == 0 {
            coeff /= 10;
            exp += 1;
        }
        Self::rounded(sign, exp, coeff as u128)
    }

    /// Creates a number from an `f32`.
    ///
    /// The value is widened to an `f64` (exactly) first.
    pub fn from_f32(f: f32) -> Self {
        Self::from_f64(f64::from(f))
    }
}

/// Parses `d.ddde[-]x` into its digits and exponent.
fn parse_sci(s: &[u8]) -> Option<(u64, i32)> {
    let mut coeff: u64 = 0;
    let mut iter = s.iter();
    for &c in iter.by_ref() {
        match c {
            b'0'..=b'9' => {
                coeff = coeff.checked_mul(10)?.checked_add(u64::from(c - b'0'))?;
            }
            b'.' => {}
            b'e' => break,
            _ => return None,
        }
    }
    let exp = core::str::from_utf8(iter.as_slice()).ok()?.parse::<i32>().ok()?;
    Some((coeff, exp))
}

macro_rules! to_float_impl {
    ($($name:ident -> $t:ty, $mant_bits:expr, $pow10:ident);* $(;)?) => ($(
        impl Bid64 {
            #[doc = concat!("Converts the number to the nearest `", stringify!($t), "`.")]
            pub fn $name(self) -> $t {
                if self.is_nan() {
                    return if self.signbit() { -<$t>::NAN } else { <$t>::NAN };
                }
                if self.is_infinite() {
                    return if self.signbit() { <$t>::NEG_INFINITY } else { <$t>::INFINITY };
                }
                let coeff = self.coeff();
                let exp = self.unbiased_exp();
                let idx = exp.unsigned_abs() as usize;
                let v = match $pow10.get(idx) {
                    _ if coeff == 0 => 0.0,
                    // Both operands are exact, so a single operation
                    // rounds correctly.
                    #[allow(clippy::cast_precision_loss)]
                    Some(&p) if coeff < (1 << $mant_bits) => {
                        let c = coeff as $t;
                        if exp >= 0 { c * p } else { c / p }
                    }
                    _ => {
                        let mut buf = StackBuf::<FLOAT_BUF>::new();
                        match write!(buf, "{coeff}e{exp}") {
                            Ok(()) => buf
                                .as_str()
                                .and_then(|s| s.parse::<$t>().ok())
                                .unwrap_or(<$t>::NAN),
                            Err(_) => <$t>::NAN,
                        }
                    }
                };
                if self.signbit() { -v } else { v }
            }
        }
    )*)
}
to_float_impl! {
    to_f64 -> f64, 53, POW10_F64;
    to_f32 -> f32, 24, POW10_F32;
}

/// Powers of ten that are exact in an `f64`.
const POW10_F64: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

/// Powers of ten that are exact in an `f32`.
const POW10_F32: [f32; 11] = [1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10];
