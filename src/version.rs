//! The native API version probe.

use tracing::{debug, error};

use crate::error::Error;

/// The version of the exported entry points.
///
/// It changes whenever an existing entry point changes its
/// signature or observable behavior. Hosts compare it against
/// the version they were built for before making any other
/// call.
pub const NATIVE_API_VERSION: i32 = 3;

/// Checks that a host built for `expected` can use this
/// library.
pub fn check_version(expected: i32) -> Result<(), Error> {
    if expected == NATIVE_API_VERSION {
        debug!(version = expected, "native API version matches");
        return Ok(());
    }
    let err = Error::VersionMismatch {
        expected,
        found: NATIVE_API_VERSION,
    };
    error!(expected, found = NATIVE_API_VERSION, "{err}");
    Err(err)
}
