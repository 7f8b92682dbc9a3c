//! Client-side size gate.
//!
//! Runs before any content byte is read. Oversized input is rejected up
//! front so the pipeline never pays for a read or a classifier round-trip
//! it cannot use.

use crate::MAX_FILE_SIZE_BYTES;
use crate::error::OversizeError;

/// Pure predicate over the candidate's byte size.
///
/// Succeeds silently for anything up to and including the limit.
pub fn check_size(actual: u64) -> Result<(), OversizeError> {
    if actual > MAX_FILE_SIZE_BYTES {
        return Err(OversizeError {
            limit: MAX_FILE_SIZE_BYTES,
            actual,
        });
    }
    Ok(())
}
