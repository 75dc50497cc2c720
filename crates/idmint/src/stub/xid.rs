//! xid: globally unique, sortable 12-byte identifiers.
//!
//! 4-byte second-precision timestamp, 3-byte machine id, 2-byte process id
//! and a 3-byte counter, rendered as 20 base32-hex characters, e.g.
//! `9m4e2mr0ui3e8a215n4g`.

use crate::error::{Algorithm, Error, Result};

/// Generates a new xid.
pub fn generate_xid() -> Result<String> {
    Err(Error::unimplemented(Algorithm::Xid))
}

/// Generates `count` xids.
pub fn generate_xid_batch(_count: usize) -> Result<Vec<String>> {
    Err(Error::unimplemented(Algorithm::Xid))
}
