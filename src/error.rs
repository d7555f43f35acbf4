//! Error types.

use thiserror::Error;

/// An error reported by the library's host-facing checks.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The host was built against a different native API
    /// version.
    #[error("native API version mismatch: expected {expected}, found {found}")]
    VersionMismatch {
        /// The version the host expects.
        expected: i32,
        /// The version this library reports.
        found: i32,
    },
    /// The selected backend does not provide an operation.
    #[error("operation `{operation}` is not supported by the {backend} backend")]
    Unsupported {
        /// The exported name of the operation.
        operation: &'static str,
        /// The backend's [`NAME`][crate::backend::Decimal64Ops::NAME].
        backend: &'static str,
    },
}
