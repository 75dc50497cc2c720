#[cfg(feature = "serde")]
mod serde;
mod snowflake;
mod uuid;

pub use snowflake::*;
pub use uuid::*;
