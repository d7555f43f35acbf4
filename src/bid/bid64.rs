use core::{cmp::Ordering, fmt, mem::size_of, num::FpCategory};

use super::arith64::{self, Shifted};
use crate::util::const_assert;

/// A 64-bit decimal floating point number with a binary
/// integer significand.
///
/// (–1)^sign * coefficient * 10^exp
///
/// The wrapped `u64` is the interchange encoding, so a `Bid64`
/// is freely reinterpreted as the raw handle the managed
/// runtimes pass around and back.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Bid64(
    /// ## Form 1
    ///
    /// s 00eeeeeeee   (0)ttt tttttttttt tttttttttt tttttttttt tttttttttt tttttttttt
    /// s 01eeeeeeee   (0)ttt tttttttttt tttttttttt tttttttttt tttttttttt tttttttttt
    /// s 10eeeeeeee   (0)ttt tttttttttt tttttttttt tttttttttt tttttttttt tttttttttt
    ///
    /// ## Form 2
    ///
    /// s 1100eeeeeeee (100)t tttttttttt tttttttttt tttttttttt tttttttttt tttttttttt
    /// s 1101eeeeeeee (100)t tttttttttt tttttttttt tttttttttt tttttttttt tttttttttt
    /// s 1110eeeeeeee (100)t tttttttttt tttttttttt tttttttttt tttttttttt tttttttttt
    u64,
);
const_assert!(size_of::<Bid64>() == 64 / 8);

// Internal stuff.
impl Bid64 {
    /// The storage width in bits.
    pub(crate) const K: u32 = (size_of::<Bid64>() * 8) as u32;
    /// The size of the sign bit in bits.
    const S: u32 = 1;
    /// The width of the exponent in bits.
    const W: u32 = Self::K / 16 + 4;
    /// The width of the trailing significand in bits.
    const T: u32 = 15 * (Self::K / 16) - 10;
    /// The number of digits of precision.
    const P: u32 = 9 * (Self::K / 32) - 2;

    /// The bias added to the encoded exponent in order to
    /// convert it to the "actual" exponent.
    pub(crate) const BIAS: i16 = Self::EMAX + (Self::P as i16) - 2;

    /// The maxmimum value of the biased encoded exponent.
    pub(crate) const LIMIT: u16 = (3 * (1 << Self::W)) - 1;

    /// The maximum allowed adjusted exponent.
    pub(crate) const EMAX: i16 = 3 * (1 << (Self::W - 1));

    /// The minimum allowed adjusted exponent for a normal
    /// value.
    pub(crate) const EMIN: i16 = 1 - Self::EMAX;

    /// The minimum unbiased exponent for a subnormal value.
    pub(crate) const ETINY: i16 = Self::EMIN - ((Self::P as i16) - 1);

    /// The maximum unbiased exponent for a full-length
    /// coefficient.
    pub(crate) const EMAX_LESS_PREC: i16 = Self::EMAX - ((Self::P as i16) - 1);

    /// The shift needed to set the sign bit.
    pub(crate) const SIGN_SHIFT: u32 = Self::K - Self::S;
    /// Masks just the sign bit.
    pub(crate) const SIGN_MASK: u64 = 1 << Self::SIGN_SHIFT;

    // Top N bits of the combination field.
    //
    // - Top 2 set: form two
    // - Top 4 set: inf
    // - Top 5 set: qnan
    // - Top 6 set: snan
    pub(crate) const COMB_TOP2: u64 = 0x3 << (Self::SIGN_SHIFT - 2);
    pub(crate) const COMB_TOP4: u64 = 0xf << (Self::SIGN_SHIFT - 4);
    pub(crate) const COMB_TOP5: u64 = 0x1f << (Self::SIGN_SHIFT - 5);
    pub(crate) const COMB_TOP6: u64 = 0x3f << (Self::SIGN_SHIFT - 6);

    /// The number of bits in the exponent.
    const EXP_BITS: u32 = Self::W + 2;
    /// Masks only the used bits in an exponent.
    const EXP_MASK: u16 = (1 << Self::EXP_BITS) - 1;

    /// Masks the exponent in the combination field for a form
    /// one number.
    const FORM1_EXP_MASK: u64 = (Self::EXP_MASK as u64) << Self::FORM1_EXP_SHIFT;
    /// The shift to set the exponent for a form one number.
    const FORM1_EXP_SHIFT: u32 = Self::SIGN_SHIFT - Self::EXP_BITS;

    /// Masks the exponent in the combination field for a form
    /// two number.
    const FORM2_EXP_MASK: u64 = Self::FORM1_EXP_MASK >> 2;
    /// The shift to set the exponent for a form two number.
    const FORM2_EXP_SHIFT: u32 = Self::FORM1_EXP_SHIFT - 2;

    /// The number of bits in the form one coefficient.
    const FORM1_COEFF_BITS: u32 = 3 + Self::T;
    /// Gathers the bits in the form one coefficient.
    const FORM1_COEFF_MASK: u64 = (1 << Self::FORM1_COEFF_BITS) - 1;

    /// The number of bits in the form two coefficient.
    const FORM2_COEFF_BITS: u32 = 1 + Self::T;
    /// Gathers the bits in the form two coefficient.
    const FORM2_COEFF_MASK: u64 = (1 << Self::FORM2_COEFF_BITS) - 1;
    /// The implicit bits in the form two coefficient.
    const FORM2_IMPLICIT_COEFF_BITS: u64 = 0x8 << Self::T;

    /// Masks a NaN's payload.
    pub(crate) const PAYLOAD_MASK: u64 = (1 << Self::T) - 1;
    /// The maximum allowed NaN payload.
    const PAYLOAD_MAX: u64 = 10u64.pow(Self::P - 1) - 1;

    pub(crate) const fn signbit(self) -> bool {
        (self.0 & Self::SIGN_MASK) != 0
    }

    /// Is this form one?
    const fn is_form1(self) -> bool {
        self.0 & Self::COMB_TOP2 != Self::COMB_TOP2
    }

    /// Reports whether the number is infinite or NaN.
    pub(crate) const fn is_special(self) -> bool {
        // When the first (top) four bits of the combination
        // field are set, the number is either an infinity or
        // a NaN.
        self.0 & Self::COMB_TOP4 == Self::COMB_TOP4
    }

    /// Returns the top six bits in the combination field with
    /// the following ordering:
    ///
    /// ```text
    /// qNaN > sNaN > inf > finite
    /// ```
    const fn special_ord(self) -> u8 {
        //   sNaN = 0b00111111
        //   qNaN = 0b00111110
        //    inf = 0b00111100
        // finite = 0b00xxxxyy
        //
        // Flipping the LSB reverses sNaN and qNaN without
        // violating the ordering.
        (((self.0 & Self::COMB_TOP6) >> (Self::SIGN_SHIFT - 6)) as u8) ^ 1
    }

    /// Returns the biased exponent.
    ///
    /// If the number is finite, the result is in [0,
    /// [`LIMIT`][Self::LIMIT]].
    const fn biased_exp(self) -> u16 {
        // The exponent only has meaning for finite numbers.
        debug_assert!(self.is_finite());

        if self.is_form1() {
            // exp = G[0:w+1]
            ((self.0 & Self::FORM1_EXP_MASK) >> Self::FORM1_EXP_SHIFT) as u16
        } else {
            // exp = G[2:w+3]
            ((self.0 & Self::FORM2_EXP_MASK) >> Self::FORM2_EXP_SHIFT) as u16
        }
    }

    /// Returns the unbiased exponent.
    ///
    /// If the number is finite, the result is in
    /// [[`ETINY`][Self::ETINY], `LIMIT - BIAS`].
    pub(crate) const fn unbiased_exp(self) -> i16 {
        // `biased_exp` is at most 0x3ff, so the cast cannot
        // wrap.
        #[allow(clippy::cast_possible_wrap)]
        let exp = self.biased_exp() as i16;
        exp - Self::BIAS
    }

    /// Returns the adjusted exponent.
    ///
    /// This is `exp + digits - 1`.
    const fn adjusted_exp(self) -> i16 {
        self.unbiased_exp() + (arith64::digits(self.coeff()) as i16) - 1
    }

    /// Returns the full coefficient.
    ///
    /// NB: This may be out of range.
    const fn raw_coeff(self) -> u64 {
        // The coefficient only has meaning for finite numbers.
        debug_assert!(self.is_finite());

        if self.is_form1() {
            // G[w+2:w+4] || T
            self.0 & Self::FORM1_COEFF_MASK
        } else {
            // 100 || G[w+4] || T
            Self::FORM2_IMPLICIT_COEFF_BITS | (self.0 & Self::FORM2_COEFF_MASK)
        }
    }

    /// Returns the full coefficient.
    pub(crate) const fn coeff(self) -> u64 {
        let coeff = self.raw_coeff();

        // Non-canonical coefficients are treated as zero.
        if coeff > Self::MAX_COEFF as u64 {
            0
        } else {
            coeff
        }
    }

    /// Returns a NaN's diagnostic information.
    pub(crate) const fn payload(self) -> u64 {
        debug_assert!(self.is_nan());

        let payload = self.0 & Self::PAYLOAD_MASK;
        if payload > Self::PAYLOAD_MAX {
            0
        } else {
            payload
        }
    }

    /// Creates a canonical finite number from the sign,
    /// unbiased exponent, and coefficient.
    ///
    /// The result is exact and unrounded.
    pub(crate) const fn from_parts(sign: bool, exp: i16, coeff: u64) -> Self {
        debug_assert!(coeff <= Self::MAX_COEFF as u64);
        debug_assert!(exp >= Self::ETINY);
        debug_assert!(exp <= Self::EMAX_LESS_PREC);

        // `exp >= ETINY == -BIAS`, so the sum is non-negative.
        #[allow(clippy::cast_sign_loss)]
        let biased = (exp + Self::BIAS) as u64;

        // Form one is 3+T bits with an implicit leading 0b0.
        // Form two is 1+T bits with an implicit leading 0b100.
        let mut bits = (sign as u64) << Self::SIGN_SHIFT;
        if coeff > Self::FORM1_COEFF_MASK {
            // s 11eeeeeeee (100)t tttttttttt ...
            bits |= Self::COMB_TOP2;
            bits |= biased << Self::FORM2_EXP_SHIFT;
            bits |= coeff & Self::FORM2_COEFF_MASK;
        } else {
            // s eeeeeeeeee (0)ttt tttttttttt ...
            bits |= biased << Self::FORM1_EXP_SHIFT;
            bits |= coeff;
        }
        Self(bits)
    }

    /// Creates a number from a wide coefficient and exponent,
    /// rounding half-even to 16 digits.
    ///
    /// Overflow yields an infinity; results below the smallest
    /// subnormal round towards zero.
    pub(crate) const fn rounded(sign: bool, exp: i32, coeff: u128) -> Self {
        Self::rounded_exact(sign, exp, coeff).0
    }

    /// Like [`rounded`][Self::rounded], but also reports whether
    /// any digits were lost.
    pub(crate) const fn rounded_exact(sign: bool, mut exp: i32, coeff: u128) -> (Self, bool) {
        const P: i32 = Bid64::P as i32;
        const ETINY: i32 = Bid64::ETINY as i32;
        const EMAX_LESS_PREC: i32 = Bid64::EMAX_LESS_PREC as i32;

        // Figure out how many digits we need to drop.
        let digits = arith64::digits128(coeff) as i32;
        let mut drop = digits - P;
        if ETINY - exp > drop {
            drop = ETINY - exp;
        }

        let mut coeff = coeff;
        let mut inexact = false;
        if drop > 0 {
            // `drop > 0`, so there isn't any sign to lose.
            #[allow(clippy::cast_sign_loss)]
            let Shifted { coeff: c, inexact: lost } = arith64::shr_round(coeff, drop as u32);
            coeff = c;
            inexact = lost;
            exp += drop;
            if coeff > Self::MAX_COEFF as u128 {
                // We went from 999... to 100..., so chop off
                // a trailing zero.
                coeff /= 10;
                exp += 1;
            }
        }
        debug_assert!(coeff <= Self::MAX_COEFF as u128);

        if exp > EMAX_LESS_PREC {
            if coeff == 0 {
                // Clamped.
                exp = EMAX_LESS_PREC;
            } else {
                let room = P - arith64::digits128(coeff) as i32;
                let shift = exp - EMAX_LESS_PREC;
                if shift > room {
                    // NB: This is where we'd mark overflow.
                    return (Self::inf(sign), true);
                }
                // `0 < shift <= room <= 15`.
                #[allow(clippy::cast_sign_loss)]
                let p = arith64::pow10_128(shift as u32);
                coeff *= p;
                exp = EMAX_LESS_PREC;
            }
        }

        // `exp` is in [ETINY, EMAX_LESS_PREC] and `coeff` is at
        // most `MAX_COEFF`.
        #[allow(clippy::cast_possible_truncation)]
        let d = Self::from_parts(sign, exp as i16, coeff as u64);
        (d, inexact)
    }

    /// Creates a canonical infinity.
    pub(crate) const fn inf(sign: bool) -> Self {
        Self(((sign as u64) << Self::SIGN_SHIFT) | Self::COMB_TOP4)
    }

    /// Creates a canonical quiet NaN.
    pub(crate) const fn nan(sign: bool, payload: u64) -> Self {
        debug_assert!(payload <= Self::PAYLOAD_MAX);

        Self(((sign as u64) << Self::SIGN_SHIFT) | Self::COMB_TOP5 | payload)
    }

    /// Creates a canonical signaling NaN.
    pub(crate) const fn snan(sign: bool, payload: u64) -> Self {
        debug_assert!(payload <= Self::PAYLOAD_MAX);

        Self(((sign as u64) << Self::SIGN_SHIFT) | Self::COMB_TOP6 | payload)
    }

    /// Creates a canonical zero with the given sign and exponent.
    pub(crate) const fn zero(sign: bool, exp: i16) -> Self {
        Self::from_parts(sign, exp, 0)
    }

    /// Creates a quiet NaN from either `lhs` or `rhs` per the
    /// usual arithmetic rules: signaling NaNs win, then the
    /// left operand.
    ///
    /// One of the two arguments *must* be NaN.
    pub(crate) const fn select_nan(lhs: Self, rhs: Self) -> Self {
        debug_assert!(lhs.is_nan() || rhs.is_nan());

        let nan = if lhs.is_snan() {
            lhs
        } else if rhs.is_snan() {
            rhs
        } else if lhs.is_nan() {
            lhs
        } else {
            rhs
        };
        Self::nan(nan.signbit(), nan.payload())
    }
}

// Constants.
impl Bid64 {
    /// The largest value that can be represented by this type.
    pub const MAX: Self = Self::from_parts(false, Self::EMAX_LESS_PREC, Self::MAX_COEFF as u64);

    /// The smallest value that can be represented by this type.
    pub const MIN: Self = Self::from_parts(true, Self::EMAX_LESS_PREC, Self::MAX_COEFF as u64);

    /// The smallest positive normal value.
    pub const MIN_POSITIVE: Self = Self::from_parts(false, Self::EMIN, 1);

    /// The largest allowed coefficient.
    pub const MAX_COEFF: i64 = 10i64.pow(Self::DIGITS) - 1;

    /// The number of base 10 significant digits.
    pub const DIGITS: u32 = Self::P;

    /// Not a Number (NaN).
    ///
    /// # Note
    ///
    /// Do not use this constant to determine whether a number
    /// is NaN. Use [`is_nan`][Self::is_nan] instead.
    pub const NAN: Self = Self::nan(false, 0);

    /// Infinity (∞).
    pub const INFINITY: Self = Self::inf(false);

    /// Negative infinity (−∞).
    pub const NEG_INFINITY: Self = Self::inf(true);

    /// Positive zero with an exponent of zero.
    pub const ZERO: Self = Self::zero(false, 0);

    /// One with an exponent of zero.
    pub const ONE: Self = Self::from_parts(false, 0, 1);
}

// To/from reprs.
impl Bid64 {
    /// Creates a number from its coefficient and exponent.
    ///
    /// The result is rounded if the coefficient has more than
    /// [`DIGITS`][Self::DIGITS] digits or the exponent is out
    /// of range.
    pub const fn new(coeff: i64, exp: i16) -> Self {
        Self::rounded(coeff < 0, exp as i32, coeff.unsigned_abs() as u128)
    }

    /// Creates a number from its raw bits.
    ///
    /// This is a pure reinterpretation; any bit pattern is
    /// accepted.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Raw transmutation to the number's raw bit
    /// representation.
    pub const fn to_bits(self) -> u64 {
        self.0
    }

    /// Returns the unbiased exponent.
    ///
    /// If the number is infinite or NaN, it returns `None`.
    pub const fn exponent(self) -> Option<i16> {
        if self.is_finite() {
            Some(self.unbiased_exp())
        } else {
            None
        }
    }

    /// Returns the coefficient.
    ///
    /// If the number is infinite or NaN, it returns `None`.
    pub const fn coefficient(self) -> Option<u64> {
        if self.is_finite() {
            Some(self.coeff())
        } else {
            None
        }
    }
}

// Classification.
impl Bid64 {
    /// Returns the floating point category for the number.
    pub const fn classify(self) -> FpCategory {
        if self.is_nan() {
            FpCategory::Nan
        } else if self.is_infinite() {
            FpCategory::Infinite
        } else if self.is_zero() {
            FpCategory::Zero
        } else if self.is_normal() {
            FpCategory::Normal
        } else {
            FpCategory::Subnormal
        }
    }

    /// Reports whether the number is neither infinite nor NaN.
    pub const fn is_finite(self) -> bool {
        !self.is_special()
    }

    /// Reports whether the number is either positive or
    /// negative infinity.
    pub const fn is_infinite(self) -> bool {
        // When the first (top) four bits of the combination
        // field are set, the number is either an infinity or
        // a NaN. The fifth bit signals NaN.
        self.0 & Self::COMB_TOP5 == Self::COMB_TOP4
    }

    /// Reports whether the number is a NaN.
    pub const fn is_nan(self) -> bool {
        self.0 & Self::COMB_TOP5 == Self::COMB_TOP5
    }

    /// Reports whether the number is a quiet NaN.
    pub const fn is_qnan(self) -> bool {
        // When the number is a NaN, the sixth combination bit
        // signals whether the NaN is signaling.
        self.0 & Self::COMB_TOP6 == Self::COMB_TOP5
    }

    /// Reports whether the number is a signaling NaN.
    pub const fn is_snan(self) -> bool {
        self.0 & Self::COMB_TOP6 == Self::COMB_TOP6
    }

    /// Reports whether the number is neither zero, infinite,
    /// subnormal, or NaN.
    pub const fn is_normal(self) -> bool {
        if self.is_special() || self.is_zero() {
            return false;
        }
        self.adjusted_exp() >= Self::EMIN
    }

    /// Reports whether the number is `-0.0` or `+0.0`.
    pub const fn is_zero(self) -> bool {
        // A number is zero if it is finite and the coefficient
        // is zero. A coefficient greater than `MAX_COEFF` is
        // treated as if it were zero.
        self.is_finite() && self.coeff() == 0
    }

    /// Reports whether the number is negative, including `-0.0`
    /// and NaNs with the sign bit set.
    pub const fn is_sign_negative(self) -> bool {
        self.signbit()
    }

    /// Reports whether the number is positive, including
    /// `+0.0`.
    pub const fn is_sign_positive(self) -> bool {
        !self.is_sign_negative()
    }
}

// Sign manipulation.
impl Bid64 {
    /// Returns the absolute value of `self`.
    ///
    /// This is a quiet operation that only clears the sign bit.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn copy_abs(self) -> Self {
        Self(self.0 & !Self::SIGN_MASK)
    }

    /// Returns `-self`.
    ///
    /// This is a quiet operation that only flips the sign bit.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub const fn copy_neg(self) -> Self {
        Self(self.0 ^ Self::SIGN_MASK)
    }

}

// Comparison.
impl Bid64 {
    /// Reports whether `self == other`.
    ///
    /// - If either number is NaN, it returns `false`.
    /// - +0.0 and -0.0 are considered equal.
    pub const fn const_eq(self, other: Self) -> bool {
        matches!(self.const_partial_cmp(other), Some(Ordering::Equal))
    }

    /// Returns the ordering between `self` and `rhs`.
    ///
    /// - If either number is NaN, it returns `None`.
    /// - +0.0 and -0.0 are considered equal.
    ///
    /// This is a const version of [`PartialOrd`].
    pub const fn const_partial_cmp(self, rhs: Self) -> Option<Ordering> {
        if self.is_nan() || rhs.is_nan() {
            // NaN != NaN
            return None;
        }
        Some(self.partial_cmp_numeric(rhs))
    }

    const fn partial_cmp_numeric(self, rhs: Self) -> Ordering {
        if self.is_zero() && rhs.is_zero() {
            // ±0 == ±0
            return Ordering::Equal;
        }
        if self.signbit() != rhs.signbit() {
            return if self.signbit() {
                // -x < +x
                Ordering::Less
            } else {
                // +x > -x
                Ordering::Greater
            };
        }
        // Signs are the same.
        let ord = self.partial_cmp_numeric_abs(rhs);
        if self.signbit() {
            ord.reverse()
        } else {
            ord
        }
    }

    const fn partial_cmp_numeric_abs(self, rhs: Self) -> Ordering {
        if self.is_infinite() || rhs.is_infinite() {
            return arith64::const_cmp_u8(self.special_ord(), rhs.special_ord());
        }
        // Both are finite.
        if self.is_zero() || rhs.is_zero() {
            return if !self.is_zero() {
                // x > 0
                Ordering::Greater
            } else if !rhs.is_zero() {
                // 0 < x
                Ordering::Less
            } else {
                Ordering::Equal
            };
        }
        // Both are non-zero.
        let lhs_adj = self.adjusted_exp();
        let rhs_adj = rhs.adjusted_exp();
        if lhs_adj != rhs_adj {
            // The most significant digits sit at different
            // powers of ten, so the larger adjusted exponent is
            // the larger number.
            return if lhs_adj < rhs_adj {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        // Same adjusted exponent, so the exponents differ by
        // less than `DIGITS` and the shifted coefficients fit in
        // 128 bits.
        let (lhs_exp, rhs_exp) = (self.unbiased_exp(), rhs.unbiased_exp());
        let shift = lhs_exp.abs_diff(rhs_exp) as u32;
        if shift == 0 {
            arith64::const_cmp(self.coeff(), rhs.coeff())
        } else if lhs_exp > rhs_exp {
            arith64::const_cmp_shifted(self.coeff(), rhs.coeff(), shift)
        } else {
            arith64::const_cmp_shifted(rhs.coeff(), self.coeff(), shift).reverse()
        }
    }

}

impl PartialEq for Bid64 {
    fn eq(&self, other: &Self) -> bool {
        self.const_eq(*other)
    }
}

impl PartialOrd for Bid64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.const_partial_cmp(*other)
    }
}

impl fmt::Debug for Bid64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self} ({:#018x})", self.0)
    }
}

/// Scientific notation without normalization: `[-]coeffEexp`.
impl fmt::Display for Bid64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.signbit() {
            f.write_str("-")?;
        }
        if self.is_snan() {
            f.write_str("sNaN")
        } else if self.is_nan() {
            f.write_str("NaN")
        } else if self.is_infinite() {
            f.write_str("Infinity")
        } else {
            write!(f, "{}E{:+}", self.coeff(), self.unbiased_exp())
        }
    }
}
