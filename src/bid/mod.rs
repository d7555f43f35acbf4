//! IEEE 754-2008 decimal64 numbers with binary integer
//! significands.

mod arith64;
mod bid64;
mod conv;
mod ops;

pub use bid64::Bid64;
