mod global;
mod snowflake;
mod uuid;

pub use global::*;
pub use snowflake::*;
pub use uuid::*;
