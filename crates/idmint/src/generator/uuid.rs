use std::sync::LazyLock;

use jiff::Timestamp;
use parking_lot::Mutex;
use rand::RngCore;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    id::Uuid,
    time::{TimeSource, WallClock},
};

/// Widest value of the 12-bit v7 disambiguation counter.
const MAX_V7_SEQUENCE: u16 = 0x0fff;

/// Process-wide v7 generator backing [`Uuid::new_v7`].
static V7_GENERATOR: LazyLock<UuidV7Generator> = LazyLock::new(UuidV7Generator::new);

impl Uuid {
    /// Generates a random (version 4) UUID.
    ///
    /// 122 bits of randomness from the thread-local RNG, with the version
    /// nibble set to 4 and the RFC 4122 variant bits set.
    pub fn new_v4() -> Self {
        let mut bytes = [0u8; 16];
        rand::rng().fill_bytes(&mut bytes);

        bytes[6] = (bytes[6] & 0x0f) | 0x40; // version 4
        bytes[8] = (bytes[8] & 0x3f) | 0x80; // RFC 4122 variant

        Self::from_bytes(bytes)
    }

    /// Generates a time-ordered (version 7) UUID from the process-wide
    /// generator.
    pub fn new_v7() -> Self {
        V7_GENERATOR.generate()
    }
}

/// Generator for time-ordered (version 7) UUIDs.
///
/// Layout, most-significant byte first:
///
/// ```text
/// bytes 0..6    48-bit Unix timestamp in milliseconds
/// byte  6       version nibble (7) | counter bits 8..12
/// byte  7       counter bits 0..8
/// bytes 8..16   randomness, with the RFC 4122 variant bits in byte 8
/// ```
///
/// The 12-bit counter disambiguates ids minted within one millisecond (or
/// while the clock is catching up after a regression), keeping v7 output
/// time-ordered without coordination. On counter exhaustion the generator
/// waits out the millisecond, like the Snowflake core.
///
/// Most callers want [`Uuid::new_v7`], which shares one instance per
/// process; a dedicated instance only matters if you need your own clock.
pub struct UuidV7Generator<C: TimeSource = WallClock> {
    clock: C,
    state: Mutex<V7State>,
}

#[derive(Debug, Default)]
struct V7State {
    last_timestamp: i64,
    sequence: u16,
}

impl UuidV7Generator<WallClock> {
    /// Creates a generator reading the system wall clock.
    pub fn new() -> Self {
        Self::with_clock(WallClock)
    }
}

impl Default for UuidV7Generator<WallClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TimeSource> UuidV7Generator<C> {
    /// Creates a generator reading time from an explicit [`TimeSource`].
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            state: Mutex::new(V7State::default()),
        }
    }

    /// Generates one v7 UUID.
    ///
    /// Blocking and infallible, like [`SnowflakeGenerator::generate`]; the
    /// only wait is the rare counter exhaustion within one millisecond.
    ///
    /// [`SnowflakeGenerator::generate`]: crate::SnowflakeGenerator::generate
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self) -> Uuid {
        let mut state = self.state.lock();

        let mut now = self.clock.current_millis();

        if now <= state.last_timestamp {
            // Same millisecond, or a regressed clock: hold the previous
            // window open and disambiguate with the counter.
            now = state.last_timestamp;
            state.sequence += 1;
            if state.sequence > MAX_V7_SEQUENCE {
                self.clock.wait_until(state.last_timestamp + 1);
                now = self.clock.current_millis();
                state.sequence = 0;
            }
        } else {
            state.sequence = 0;
        }

        state.last_timestamp = now;

        let mut bytes = [0u8; 16];
        bytes[..6].copy_from_slice(&(now as u64).to_be_bytes()[2..]);
        rand::rng().fill_bytes(&mut bytes[8..]);

        bytes[6] = 0x70 | (state.sequence >> 8) as u8; // version 7 | counter high
        bytes[7] = (state.sequence & 0xff) as u8; // counter low
        bytes[8] = (bytes[8] & 0x3f) | 0x80; // RFC 4122 variant

        Uuid::from_bytes(bytes)
    }
}

/// Generates a random (version 4) UUID rendered as its canonical string.
pub fn generate_uuid_v4() -> String {
    Uuid::new_v4().to_string()
}

/// Generates `count` v4 UUIDs rendered as canonical strings.
pub fn generate_uuid_v4_batch(count: usize) -> Vec<String> {
    (0..count).map(|_| generate_uuid_v4()).collect()
}

/// Generates a time-ordered (version 7) UUID rendered as its canonical
/// string.
pub fn generate_uuid_v7() -> String {
    Uuid::new_v7().to_string()
}

/// Generates `count` v7 UUIDs rendered as canonical strings.
pub fn generate_uuid_v7_batch(count: usize) -> Vec<String> {
    (0..count).map(|_| generate_uuid_v7()).collect()
}

/// Recovers the 48-bit millisecond timestamp embedded in a v7 UUID.
pub fn extract_timestamp_from_uuid_v7(uuid: Uuid) -> i64 {
    let mut buf = [0u8; 8];
    buf[2..].copy_from_slice(&uuid.as_bytes()[..6]);
    i64::from_be_bytes(buf)
}

/// Recovers the creation time of a v7 UUID as a UTC calendar instant.
pub fn extract_time_from_uuid_v7(uuid: Uuid) -> Timestamp {
    Timestamp::from_millisecond(extract_timestamp_from_uuid_v7(uuid))
        .expect("v7 timestamps minted by this process stay in Timestamp range")
}
