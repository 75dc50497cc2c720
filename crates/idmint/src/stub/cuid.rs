//! CUID: collision-resistant unique identifiers.
//!
//! Format: `c` + timestamp (base36) + counter (base36) + host fingerprint +
//! random block (base36), e.g. `cjld2cjxh0000qzrmn831i7rn`. Horizontally
//! scalable, offline-friendly and URL-safe.

use crate::error::{Algorithm, Error, Result};

/// Generates a new CUID.
pub fn generate_cuid() -> Result<String> {
    Err(Error::unimplemented(Algorithm::Cuid))
}

/// Generates `count` CUIDs.
pub fn generate_cuid_batch(_count: usize) -> Result<Vec<String>> {
    Err(Error::unimplemented(Algorithm::Cuid))
}
