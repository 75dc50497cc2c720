use core::fmt;

/// A 64-bit Snowflake-style identifier.
///
/// Five fixed-width fields, packed most-significant-first:
///
/// ```text
/// ┌─────────┬──────────────┬────────────┬───────────┬──────────┐
/// │ Sign    │  Timestamp   │ Process ID │ Worker ID │ Sequence │
/// │ 1 bit   │   41 bits    │   5 bits   │  5 bits   │ 12 bits  │
/// │ (unused)│              │  (0-31)    │  (0-31)   │ (0-4095) │
/// └─────────┴──────────────┴────────────┴───────────┴──────────┘
/// ```
///
/// - Sign bit: 0 whenever the epoch lies in the past, keeping the raw value
///   positive.
/// - Timestamp: milliseconds elapsed since the generator epoch (~69 years of
///   range).
/// - Process ID / Worker ID: caller-assigned slots identifying a deployment
///   unit and a concurrent unit within it.
/// - Sequence: per-millisecond counter, reset on millisecond rollover.
///
/// Ordering, equality and hashing all follow the raw integer, so ids sort by
/// creation time first.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SnowflakeId {
    id: i64,
}

const _: () = {
    // The five fields must fill the backing integer exactly; anything else
    // would alias neighboring fields on encode.
    assert!(
        1 + SnowflakeId::TIMESTAMP_BITS
            + SnowflakeId::PROCESS_ID_BITS
            + SnowflakeId::WORKER_ID_BITS
            + SnowflakeId::SEQUENCE_BITS
            == i64::BITS,
        "Snowflake layout must fill the underlying integer type"
    );
};

impl SnowflakeId {
    pub const TIMESTAMP_BITS: u32 = 41;
    pub const PROCESS_ID_BITS: u32 = 5;
    pub const WORKER_ID_BITS: u32 = 5;
    pub const SEQUENCE_BITS: u32 = 12;

    pub const SEQUENCE_SHIFT: u32 = 0;
    pub const WORKER_ID_SHIFT: u32 = Self::SEQUENCE_BITS;
    pub const PROCESS_ID_SHIFT: u32 = Self::SEQUENCE_BITS + Self::WORKER_ID_BITS;
    pub const TIMESTAMP_SHIFT: u32 =
        Self::SEQUENCE_BITS + Self::WORKER_ID_BITS + Self::PROCESS_ID_BITS;

    pub const MAX_TIMESTAMP: i64 = (1 << Self::TIMESTAMP_BITS) - 1;
    pub const MAX_PROCESS_ID: i64 = (1 << Self::PROCESS_ID_BITS) - 1;
    pub const MAX_WORKER_ID: i64 = (1 << Self::WORKER_ID_BITS) - 1;
    pub const MAX_SEQUENCE: i64 = (1 << Self::SEQUENCE_BITS) - 1;

    /// Packs the four fields into an id.
    ///
    /// The timestamp delta is shifted without masking: a generator built with
    /// an epoch in the future emits negative deltas, which produce a negative
    /// raw id and decode back to the same negative delta. The remaining
    /// fields are masked to their widths.
    pub const fn from_parts(timestamp: i64, process_id: i64, worker_id: i64, sequence: i64) -> Self {
        debug_assert!(
            process_id >= 0 && process_id <= Self::MAX_PROCESS_ID,
            "process id overflow"
        );
        debug_assert!(
            worker_id >= 0 && worker_id <= Self::MAX_WORKER_ID,
            "worker id overflow"
        );
        debug_assert!(
            sequence >= 0 && sequence <= Self::MAX_SEQUENCE,
            "sequence overflow"
        );

        Self {
            id: (timestamp << Self::TIMESTAMP_SHIFT)
                | ((process_id & Self::MAX_PROCESS_ID) << Self::PROCESS_ID_SHIFT)
                | ((worker_id & Self::MAX_WORKER_ID) << Self::WORKER_ID_SHIFT)
                | (sequence & Self::MAX_SEQUENCE),
        }
    }

    /// Milliseconds elapsed since the generator epoch.
    ///
    /// Arithmetic right shift, so a negative delta survives the round trip.
    /// For the absolute Unix-millisecond timestamp, use
    /// [`SnowflakeGenerator::extract_timestamp`], which adds the epoch back.
    ///
    /// [`SnowflakeGenerator::extract_timestamp`]: crate::SnowflakeGenerator::extract_timestamp
    pub const fn timestamp(&self) -> i64 {
        self.id >> Self::TIMESTAMP_SHIFT
    }

    /// The process slot encoded into this id.
    pub const fn process_id(&self) -> i64 {
        (self.id >> Self::PROCESS_ID_SHIFT) & Self::MAX_PROCESS_ID
    }

    /// The worker slot encoded into this id.
    pub const fn worker_id(&self) -> i64 {
        (self.id >> Self::WORKER_ID_SHIFT) & Self::MAX_WORKER_ID
    }

    /// The per-millisecond sequence number encoded into this id.
    pub const fn sequence(&self) -> i64 {
        self.id & Self::MAX_SEQUENCE
    }

    /// Converts this id into its raw integer representation.
    pub const fn to_raw(&self) -> i64 {
        self.id
    }

    /// Converts a raw integer into an id.
    pub const fn from_raw(raw: i64) -> Self {
        Self { id: raw }
    }
}

impl From<SnowflakeId> for i64 {
    fn from(id: SnowflakeId) -> Self {
        id.to_raw()
    }
}

impl fmt::Display for SnowflakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for SnowflakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowflakeId")
            .field("id", &format_args!("{} (0x{:x})", self.id, self.id))
            .field("timestamp", &self.timestamp())
            .field("process_id", &self.process_id())
            .field("worker_id", &self.worker_id())
            .field("sequence", &self.sequence())
            .finish()
    }
}
