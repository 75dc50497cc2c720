//! Sonyflake: Sony's Snowflake variant.
//!
//! 63 bits — a 39-bit timestamp at 10 ms precision (~174 years of range), an
//! 8-bit sequence and a 16-bit machine id — so it trades resolution and
//! per-tick throughput for lifetime and a much larger machine space than the
//! 41/5/5/12 layout of [`SnowflakeId`].
//!
//! [`SnowflakeId`]: crate::SnowflakeId

use crate::error::{Algorithm, Error, Result};

/// Reserved Sonyflake generator.
///
/// Construction fails with [`Error::Unimplemented`] until the algorithm
/// lands; the type exists so the eventual implementation slots into a stable
/// surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sonyflake {
    machine_id: u16,
}

impl Sonyflake {
    /// Creates a generator for the given machine id.
    pub fn new(machine_id: u16) -> Result<Self> {
        let _ = machine_id;
        Err(Error::unimplemented(Algorithm::Sonyflake))
    }

    /// The machine id this generator would encode into every id.
    pub const fn machine_id(&self) -> u16 {
        self.machine_id
    }

    /// Generates a new Sonyflake id.
    pub fn generate(&self) -> Result<i64> {
        Err(Error::unimplemented(Algorithm::Sonyflake))
    }

    /// Generates `count` Sonyflake ids.
    pub fn generate_batch(&self, _count: usize) -> Result<Vec<i64>> {
        Err(Error::unimplemented(Algorithm::Sonyflake))
    }
}

/// Generates a new Sonyflake id rendered as a string.
pub fn generate_sonyflake() -> Result<String> {
    Err(Error::unimplemented(Algorithm::Sonyflake))
}

/// Generates `count` Sonyflake ids rendered as strings.
pub fn generate_sonyflake_batch(_count: usize) -> Result<Vec<String>> {
    Err(Error::unimplemented(Algorithm::Sonyflake))
}
