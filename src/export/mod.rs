//! The exported entry points.
//!
//! Every operation in the [`Catalog`][crate::catalog::Catalog]
//! is exported three times:
//!
//! - `ddfp_<op>`, the plain native export, called by .NET
//! through P/Invoke.
//! - `Java_com_epam_deltix_dfp_NativeImpl_<op>`, the standard
//! JNI export. It takes the `JNIEnv*` and `jclass` handles
//! first and never reads them.
//! - `JavaCritical_com_epam_deltix_dfp_NativeImpl_<op>`, the
//! JNI critical export, with the same parameters as the native
//! export.
//!
//! All three forward to the same catalog body, monomorphized
//! for [`Selected`][crate::backend::Selected]. They differ only
//! in symbol name, leading parameters and [`Runtime`], and only
//! `compare` consults the runtime.
//!
//! Each operation gets its own module holding the three
//! functions, e.g. [`add2::native`], [`add2::java`] and
//! [`add2::java_critical`]. [`CATALOG`] describes the whole
//! surface.

use bitflags::bitflags;

use crate::{bid::Bid64, classify::NanOrder};

mod surface;

#[allow(clippy::wildcard_imports)]
pub use surface::*;

/// A managed runtime that calls into the library.
pub trait Runtime {
    /// A short, human readable name.
    const NAME: &'static str;
    /// How `compare` orders NaN.
    const NAN_ORDER: NanOrder;
}

/// The .NET runtime, through the native export.
#[derive(Copy, Clone, Debug)]
pub enum Clr {}

impl Runtime for Clr {
    const NAME: &'static str = "clr";
    const NAN_ORDER: NanOrder = NanOrder::Least;
}

/// The Java runtime, through either JNI export.
#[derive(Copy, Clone, Debug)]
pub enum Jvm {}

impl Runtime for Jvm {
    const NAME: &'static str = "jvm";
    const NAN_ORDER: NanOrder = NanOrder::Greatest;
}

/// The kind of a parameter or result as it crosses the
/// boundary.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Kind {
    /// A decimal64, passed as its `u64` encoding.
    Decimal64,
    /// A boolean, passed as a `u8` (`jboolean`).
    Bool,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

/// Converts a catalog type to and from its representation at
/// the boundary.
pub trait Marshal: Sized {
    /// The FFI-safe representation.
    type Raw: Copy;
    /// Describes `Raw`.
    const KIND: Kind;

    /// Converts from the boundary representation.
    fn from_raw(raw: Self::Raw) -> Self;
    /// Converts to the boundary representation.
    fn into_raw(self) -> Self::Raw;
}

impl Marshal for Bid64 {
    type Raw = u64;
    const KIND: Kind = Kind::Decimal64;

    #[inline]
    fn from_raw(raw: u64) -> Self {
        Self::from_bits(raw)
    }

    #[inline]
    fn into_raw(self) -> u64 {
        self.to_bits()
    }
}

impl Marshal for bool {
    type Raw = u8;
    const KIND: Kind = Kind::Bool;

    #[inline]
    fn from_raw(raw: u8) -> Self {
        raw != 0
    }

    #[inline]
    fn into_raw(self) -> u8 {
        u8::from(self)
    }
}

macro_rules! marshal_impl {
    ($($t:ty => $kind:ident),* $(,)?) => ($(
        impl Marshal for $t {
            type Raw = $t;
            const KIND: Kind = Kind::$kind;

            #[inline]
            fn from_raw(raw: $t) -> Self {
                raw
            }

            #[inline]
            fn into_raw(self) -> $t {
                self
            }
        }
    )*)
}
marshal_impl! {
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

bitflags! {
    /// A set of entry-point shapes.
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    pub struct Abi: u8 {
        /// `ddfp_<op>`.
        const NATIVE = 1 << 0;
        /// `Java_<namespace>_<op>`, with the two leading JNI
        /// handles.
        const JNI = 1 << 1;
        /// `JavaCritical_<namespace>_<op>`.
        const JNI_CRITICAL = 1 << 2;
    }
}

impl Abi {
    /// Returns the symbol prefix of a single shape.
    pub const fn prefix(self) -> Option<&'static str> {
        let bits = self.bits();
        if bits == Self::NATIVE.bits() {
            Some("ddfp_")
        } else if bits == Self::JNI.bits() {
            Some("Java_com_epam_deltix_dfp_NativeImpl_")
        } else if bits == Self::JNI_CRITICAL.bits() {
            Some("JavaCritical_com_epam_deltix_dfp_NativeImpl_")
        } else {
            None
        }
    }

    /// Returns the number of leading opaque handles a single
    /// shape takes.
    pub const fn handles(self) -> usize {
        if self.bits() == Self::JNI.bits() {
            2
        } else {
            0
        }
    }
}

/// Describes an exported operation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct OpInfo {
    /// The exported name, e.g. `isLessOrEqual`.
    pub name: &'static str,
    /// The result kind.
    pub result: Kind,
    /// The parameter kinds, not counting JNI handles.
    pub params: &'static [Kind],
    /// The generated entry-point shapes.
    pub abi: Abi,
}

impl OpInfo {
    /// Returns the symbol of the `abi` entry point, or `None`
    /// if `abi` is not a single generated shape.
    pub fn symbol(&self, abi: Abi) -> Option<String> {
        if !self.abi.contains(abi) {
            return None;
        }
        let prefix = abi.prefix()?;
        Some(format!("{prefix}{}", self.name))
    }

    /// Returns the symbols of every generated entry point.
    pub fn symbols(&self) -> impl Iterator<Item = String> + '_ {
        self.abi.iter().filter_map(|abi| self.symbol(abi))
    }

    /// Reports whether the operation reads or produces a
    /// decimal64.
    pub fn is_decimal(&self) -> bool {
        self.result == Kind::Decimal64 || self.params.contains(&Kind::Decimal64)
    }
}

/// Looks up an operation by its exported name.
pub fn find(name: &str) -> Option<&'static OpInfo> {
    CATALOG.iter().find(|op| op.name == name)
}

// Generates the three entry points for each operation and the
// `CATALOG` table describing them.
//
//    fn snake_name as "exportedName"(arg: Type, ...) -> Type;
//
// Each `Type` must implement `Marshal`.
macro_rules! multiapi {
    ($(
        fn $op:ident as $name:literal ($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty;
    )*) => {
        $(
            #[doc = concat!("The `", $name, "` entry points.")]
            pub mod $op {
                use core::ffi::c_void;

                #[allow(unused_imports)]
                use super::*;

                #[doc = concat!("`ddfp_", $name, "`.")]
                #[export_name = concat!("ddfp_", $name)]
                pub extern "system" fn native(
                    $($arg: <$ty as $crate::export::Marshal>::Raw),*
                ) -> <$ret as $crate::export::Marshal>::Raw {
                    <$ret as $crate::export::Marshal>::into_raw(
                        $crate::catalog::Catalog::<
                            $crate::backend::Selected,
                            $crate::export::Clr,
                        >::$op($(<$ty as $crate::export::Marshal>::from_raw($arg)),*),
                    )
                }

                #[doc = concat!("`Java_com_epam_deltix_dfp_NativeImpl_", $name, "`.")]
                #[export_name = concat!("Java_com_epam_deltix_dfp_NativeImpl_", $name)]
                pub extern "system" fn java(
                    _env: *mut c_void,
                    _class: *mut c_void,
                    $($arg: <$ty as $crate::export::Marshal>::Raw),*
                ) -> <$ret as $crate::export::Marshal>::Raw {
                    <$ret as $crate::export::Marshal>::into_raw(
                        $crate::catalog::Catalog::<
                            $crate::backend::Selected,
                            $crate::export::Jvm,
                        >::$op($(<$ty as $crate::export::Marshal>::from_raw($arg)),*),
                    )
                }

                #[doc = concat!("`JavaCritical_com_epam_deltix_dfp_NativeImpl_", $name, "`.")]
                #[export_name = concat!("JavaCritical_com_epam_deltix_dfp_NativeImpl_", $name)]
                pub extern "system" fn java_critical(
                    $($arg: <$ty as $crate::export::Marshal>::Raw),*
                ) -> <$ret as $crate::export::Marshal>::Raw {
                    <$ret as $crate::export::Marshal>::into_raw(
                        $crate::catalog::Catalog::<
                            $crate::backend::Selected,
                            $crate::export::Jvm,
                        >::$op($(<$ty as $crate::export::Marshal>::from_raw($arg)),*),
                    )
                }
            }
        )*

        /// Every exported operation, in export order.
        pub static CATALOG: &[$crate::export::OpInfo] = &[$(
            $crate::export::OpInfo {
                name: $name,
                result: <$ret as $crate::export::Marshal>::KIND,
                params: &[$(<$ty as $crate::export::Marshal>::KIND),*],
                abi: $crate::export::Abi::all(),
            },
        )*];
    };
}
pub(crate) use multiapi;
