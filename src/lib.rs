//! `ddfp` exports IEEE 754-2008 decimal64 arithmetic to managed
//! runtimes.
//!
//! Decimal64 values cross the boundary as the `u64` bits of
//! their binary integer decimal (BID) encoding. Each operation
//! is written once, in the [`catalog`], and exported three
//! times by [`export`]: as a plain native symbol for .NET and
//! as standard and critical JNI symbols for Java. The three
//! entry points share one body, so they return bit-identical
//! results. The one difference is where `compare` sorts NaN,
//! which follows each runtime's convention (see
//! [`NanOrder`][classify::NanOrder]).
//!
//! Hosts should call `version` before anything else and refuse
//! to continue if it does not match [`NATIVE_API_VERSION`].
//!
//! # Cargo Features
//!
//! - `vendor` (default): use the decNumber library, through
//! the [`dec`] crate, for arithmetic.
//!
//! - `fallback`: use the builtin BID arithmetic and bit-mask
//! classification instead. This takes precedence over
//! `vendor`. `nextUp`, `nextDown` and the directed roundings
//! abort the process under this backend.
//!
//! - `bench`: build the criterion benchmarks.
//!
//! [`dec`]: https://crates.io/crates/dec

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::cast_lossless)]
#![deny(clippy::expect_used)]
#![deny(clippy::implicit_saturating_sub)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::panic)]
#![deny(clippy::ptr_as_ptr)]
#![deny(clippy::string_slice)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::wildcard_imports)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(unused_lifetimes)]
#![deny(unused_qualifications)]

pub mod backend;
pub mod bid;
pub mod catalog;
pub mod classify;
mod error;
pub mod export;
mod fatal;
mod macros;
pub mod masks;
pub mod scale;
mod util;
mod version;

#[doc(inline)]
#[allow(non_camel_case_types)]
pub use bid::Bid64 as d64;
pub use error::Error;
pub use version::{check_version, NATIVE_API_VERSION};

/// Simplifies importing common items.
pub mod prelude {
    pub use super::{
        backend::{Decimal64Ops, Selected},
        catalog::Catalog,
        d64,
        export::{Clr, Jvm, Runtime},
    };
}
