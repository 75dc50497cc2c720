//! Reserved identifier algorithms.
//!
//! Each module documents the target format and deterministically fails with
//! its own [`Error::Unimplemented`] discriminant until the algorithm lands,
//! so callers can tell exactly which capability is missing.
//!
//! [`Error::Unimplemented`]: crate::Error::Unimplemented

mod cuid;
mod ksuid;
mod nanoid;
mod shortid;
mod sonyflake;
mod ulid;
mod xid;

pub use cuid::*;
pub use ksuid::*;
pub use nanoid::*;
pub use shortid::*;
pub use sonyflake::*;
pub use ulid::*;
pub use xid::*;
