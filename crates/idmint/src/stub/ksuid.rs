//! KSUID: K-sortable unique identifiers.
//!
//! 160 bits — a 32-bit second-precision timestamp against a custom epoch
//! followed by 128 random bits — rendered as 27 base62 characters, e.g.
//! `0ujtsYcgvSTl8PAuAdqWYSMnLOv`. Naturally ordered by creation time with
//! about 134 years of range from the epoch.

use crate::error::{Algorithm, Error, Result};

/// The KSUID epoch (2014-05-13T16:53:20Z), in seconds since the Unix epoch.
pub const KSUID_EPOCH: i64 = 1_400_000_000;

/// Generates a new KSUID.
pub fn generate_ksuid() -> Result<String> {
    Err(Error::unimplemented(Algorithm::Ksuid))
}

/// Generates `count` KSUIDs.
pub fn generate_ksuid_batch(_count: usize) -> Result<Vec<String>> {
    Err(Error::unimplemented(Algorithm::Ksuid))
}
