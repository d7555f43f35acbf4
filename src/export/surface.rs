// The generated modules see this module's imports.
#![allow(clippy::wildcard_imports)]

use super::multiapi;
use crate::bid::Bid64;

multiapi! {
    fn version as "version"() -> i32;

    // Conversion and rounding.
    fn from_fixed_point64 as "fromFixedPoint64"(value: i64, digits: i32) -> Bid64;
    fn from_fixed_point32 as "fromFixedPoint32"(value: i32, digits: i32) -> Bid64;
    fn from_fixed_point_u32 as "fromFixedPointU32"(value: u32, digits: i32) -> Bid64;
    fn to_fixed_point as "toFixedPoint"(value: Bid64, digits: i32) -> i64;
    fn from_int64 as "fromInt64"(value: i64) -> Bid64;
    fn to_int64 as "toInt64"(value: Bid64) -> i64;
    fn from_uint64 as "fromUInt64"(value: u64) -> Bid64;
    fn to_uint64 as "toUInt64"(value: Bid64) -> u64;
    fn from_int32 as "fromInt32"(value: i32) -> Bid64;
    fn to_int32 as "toInt32"(value: Bid64) -> i32;
    fn from_uint32 as "fromUInt32"(value: u32) -> Bid64;
    fn to_uint32 as "toUInt32"(value: Bid64) -> u32;
    fn from_int16 as "fromInt16"(value: i16) -> Bid64;
    fn to_int16 as "toInt16"(value: Bid64) -> i16;
    fn from_uint16 as "fromUInt16"(value: u16) -> Bid64;
    fn to_uint16 as "toUInt16"(value: Bid64) -> u16;
    fn from_int8 as "fromInt8"(value: i8) -> Bid64;
    fn to_int8 as "toInt8"(value: Bid64) -> i8;
    fn from_uint8 as "fromUInt8"(value: u8) -> Bid64;
    fn to_uint8 as "toUInt8"(value: Bid64) -> u8;
    fn from_float64 as "fromFloat64"(value: f64) -> Bid64;
    fn to_float64 as "toFloat64"(value: Bid64) -> f64;
    fn from_float32 as "fromFloat32"(value: f32) -> Bid64;
    fn to_float32 as "toFloat32"(value: Bid64) -> f32;
    fn round_towards_positive_infinity as "roundTowardsPositiveInfinity"(a: Bid64) -> Bid64;
    fn round_towards_negative_infinity as "roundTowardsNegativeInfinity"(a: Bid64) -> Bid64;
    fn round_towards_zero as "roundTowardsZero"(a: Bid64) -> Bid64;
    fn round_to_nearest_ties_away_from_zero as "roundToNearestTiesAwayFromZero"(a: Bid64) -> Bid64;

    // Classification.
    fn is_nan as "isNaN"(a: Bid64) -> bool;
    fn is_infinity as "isInfinity"(a: Bid64) -> bool;
    fn is_positive_infinity as "isPositiveInfinity"(a: Bid64) -> bool;
    fn is_negative_infinity as "isNegativeInfinity"(a: Bid64) -> bool;
    fn is_finite as "isFinite"(a: Bid64) -> bool;
    fn is_normal as "isNormal"(a: Bid64) -> bool;
    fn sign_bit as "signBit"(a: Bid64) -> bool;

    // Comparison.
    fn compare as "compare"(a: Bid64, b: Bid64) -> i32;
    fn is_equal as "isEqual"(a: Bid64, b: Bid64) -> bool;
    fn is_not_equal as "isNotEqual"(a: Bid64, b: Bid64) -> bool;
    fn is_less as "isLess"(a: Bid64, b: Bid64) -> bool;
    fn is_less_or_equal as "isLessOrEqual"(a: Bid64, b: Bid64) -> bool;
    fn is_greater as "isGreater"(a: Bid64, b: Bid64) -> bool;
    fn is_greater_or_equal as "isGreaterOrEqual"(a: Bid64, b: Bid64) -> bool;
    fn is_zero as "isZero"(a: Bid64) -> bool;
    fn is_non_zero as "isNonZero"(a: Bid64) -> bool;
    fn is_positive as "isPositive"(a: Bid64) -> bool;
    fn is_negative as "isNegative"(a: Bid64) -> bool;
    fn is_non_positive as "isNonPositive"(a: Bid64) -> bool;
    fn is_non_negative as "isNonNegative"(a: Bid64) -> bool;

    // Minimum and maximum.
    fn max2 as "max2"(a: Bid64, b: Bid64) -> Bid64;
    fn max3 as "max3"(a: Bid64, b: Bid64, c: Bid64) -> Bid64;
    fn max4 as "max4"(a: Bid64, b: Bid64, c: Bid64, d: Bid64) -> Bid64;
    fn min2 as "min2"(a: Bid64, b: Bid64) -> Bid64;
    fn min3 as "min3"(a: Bid64, b: Bid64, c: Bid64) -> Bid64;
    fn min4 as "min4"(a: Bid64, b: Bid64, c: Bid64, d: Bid64) -> Bid64;

    // Arithmetic.
    fn negate as "negate"(a: Bid64) -> Bid64;
    fn abs as "abs"(a: Bid64) -> Bid64;
    fn add2 as "add2"(a: Bid64, b: Bid64) -> Bid64;
    fn add3 as "add3"(a: Bid64, b: Bid64, c: Bid64) -> Bid64;
    fn add4 as "add4"(a: Bid64, b: Bid64, c: Bid64, d: Bid64) -> Bid64;
    fn subtract as "subtract"(a: Bid64, b: Bid64) -> Bid64;
    fn multiply2 as "multiply2"(a: Bid64, b: Bid64) -> Bid64;
    fn multiply3 as "multiply3"(a: Bid64, b: Bid64, c: Bid64) -> Bid64;
    fn multiply4 as "multiply4"(a: Bid64, b: Bid64, c: Bid64, d: Bid64) -> Bid64;
    fn multiply_by_int32 as "multiplyByInt32"(a: Bid64, b: i32) -> Bid64;
    fn multiply_by_int64 as "multiplyByInt64"(a: Bid64, b: i64) -> Bid64;
    fn divide as "divide"(a: Bid64, b: Bid64) -> Bid64;
    fn divide_by_int32 as "divideByInt32"(a: Bid64, b: i32) -> Bid64;
    fn divide_by_int64 as "divideByInt64"(a: Bid64, b: i64) -> Bid64;
    fn multiply_and_add as "multiplyAndAdd"(a: Bid64, b: Bid64, c: Bid64) -> Bid64;
    fn scale_by_power_of_ten as "scaleByPowerOfTen"(a: Bid64, n: i32) -> Bid64;
    fn mean2 as "mean2"(a: Bid64, b: Bid64) -> Bid64;
    fn next_up as "nextUp"(a: Bid64) -> Bid64;
    fn next_down as "nextDown"(a: Bid64) -> Bid64;
}
