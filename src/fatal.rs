//! Stopping the process from inside an entry point.
//!
//! An exported function has no way to report an error to its
//! caller and must not unwind across the boundary, so the only
//! safe response to an unsupported operation is to abort.

use tracing::error;

use crate::error::Error;

/// Logs that `backend` does not provide `operation`, then
/// aborts the process.
#[cold]
#[inline(never)]
pub(crate) fn unsupported(operation: &'static str, backend: &'static str) -> ! {
    let err = Error::Unsupported { operation, backend };
    error!(operation, backend, "{err}");
    std::process::abort()
}
