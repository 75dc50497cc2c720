//! ULID: universally unique lexicographically sortable identifiers.
//!
//! 128 bits — a 48-bit millisecond timestamp followed by 80 bits of
//! randomness — rendered as 26 Crockford base32 characters, e.g.
//! `01AN4Z07BY79KA1307SR9X4MV3`. Case-insensitive, URL-safe, and
//! monotonically increasing within one millisecond.

use crate::error::{Algorithm, Error, Result};

/// Generates a new ULID.
pub fn generate_ulid() -> Result<String> {
    Err(Error::unimplemented(Algorithm::Ulid))
}

/// Generates `count` ULIDs.
pub fn generate_ulid_batch(_count: usize) -> Result<Vec<String>> {
    Err(Error::unimplemented(Algorithm::Ulid))
}
