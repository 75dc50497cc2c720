//! NanoID: compact URL-friendly string identifiers.
//!
//! 21 characters by default over the alphabet `A-Za-z0-9_-`, drawn from a
//! cryptographically secure source, e.g. `V1StGXR8_Z5jdHi6B-myT`.

use crate::error::{Algorithm, Error, Result};

/// Generates a new NanoID.
pub fn generate_nanoid() -> Result<String> {
    Err(Error::unimplemented(Algorithm::NanoId))
}

/// Generates `count` NanoIDs.
pub fn generate_nanoid_batch(_count: usize) -> Result<Vec<String>> {
    Err(Error::unimplemented(Algorithm::NanoId))
}
