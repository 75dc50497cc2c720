//! ShortID: short non-sequential URL-friendly identifiers.
//!
//! 7-14 characters over a 64-symbol alphabet, non-sequential so ids do not
//! leak creation order, e.g. `PPBqWA9`.

use crate::error::{Algorithm, Error, Result};

/// Generates a new ShortID.
pub fn generate_shortid() -> Result<String> {
    Err(Error::unimplemented(Algorithm::ShortId))
}

/// Generates `count` ShortIDs.
pub fn generate_shortid_batch(_count: usize) -> Result<Vec<String>> {
    Err(Error::unimplemented(Algorithm::ShortId))
}
