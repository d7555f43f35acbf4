//! Named bit patterns of the decimal64 interchange encoding.
//!
//! Every value crosses the FFI boundary as a raw `u64`. The
//! masks here let callers classify that raw handle without
//! decoding it.

use crate::bid::Bid64;

/// The sign bit.
pub const MASK_SIGN: u64 = 0x8000_0000_0000_0000;

/// The top five combination bits. All set means NaN, the top
/// four alone mean infinity.
pub const MASK_INFINITY_NAN: u64 = 0x7C00_0000_0000_0000;

/// [`MASK_INFINITY_NAN`] plus the sign bit.
pub const MASK_SIGN_INFINITY_NAN: u64 = MASK_SIGN | MASK_INFINITY_NAN;

/// The top four combination bits, shared by infinities and
/// NaNs.
pub const MASK_INFINITY_AND_NAN: u64 = 0x7800_0000_0000_0000;

/// The canonical positive infinity.
pub const POSITIVE_INFINITY: u64 = 0x7800_0000_0000_0000;

/// The canonical negative infinity.
pub const NEGATIVE_INFINITY: u64 = 0xF800_0000_0000_0000;

/// The canonical quiet NaN.
pub const NAN: u64 = 0x7C00_0000_0000_0000;

/// Positive zero with an exponent of zero.
pub const ZERO: u64 = 0x31C0_0000_0000_0000;

/// The largest finite value.
pub const MAX_VALUE: u64 = 0x77FB_86F2_6FC0_FFFF;

/// The smallest (most negative) finite value.
pub const MIN_VALUE: u64 = 0xF7FB_86F2_6FC0_FFFF;

/// Reinterprets a raw handle as a decimal.
///
/// This never converts: every bit pattern maps to itself.
pub const fn from_bits(bits: u64) -> Bid64 {
    Bid64::from_bits(bits)
}

/// Reinterprets a decimal as its raw handle.
pub const fn to_bits(d: Bid64) -> u64 {
    d.to_bits()
}
