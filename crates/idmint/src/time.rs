use core::time::Duration;
use std::thread;

use jiff::Timestamp;

/// Default epoch: Wednesday, January 1, 2025 00:00:00 UTC, in milliseconds
/// since the Unix epoch.
///
/// Subtracting it from wall-clock time before encoding stretches the 41-bit
/// timestamp field to roughly the year 2094. The epoch must lie in the past
/// relative to the current clock; a future epoch produces negative deltas
/// (see [`SnowflakeId::from_parts`]).
///
/// [`SnowflakeId::from_parts`]: crate::SnowflakeId::from_parts
pub const DEFAULT_EPOCH: i64 = 1_735_689_600_000;

/// Poll interval used by the default [`TimeSource::wait_until`] loop.
const WAIT_POLL: Duration = Duration::from_micros(100);

/// A source of wall-clock time in whole milliseconds.
///
/// This abstraction sits between a generator and the clock so tests can
/// script time: drive rollover, hold a millisecond open, or rewind the clock
/// deterministically.
///
/// # Example
///
/// ```
/// use idmint::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> i64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
pub trait TimeSource: Send + Sync {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn current_millis(&self) -> i64;

    /// Blocks the calling thread until [`current_millis`] reports at least
    /// `target`.
    ///
    /// The provided implementation sleeps in short fixed increments and
    /// re-checks the clock after every sleep, so a clock that regresses
    /// again mid-wait cannot end the wait early. Scripted test clocks may
    /// override this to advance instantly.
    ///
    /// [`current_millis`]: TimeSource::current_millis
    fn wait_until(&self, target: i64) {
        while self.current_millis() < target {
            thread::sleep(WAIT_POLL);
        }
    }
}

/// The system wall clock.
///
/// Readings come from the real-time clock and can move backwards under NTP
/// adjustment or manual changes. [`SnowflakeGenerator`] compensates by
/// stalling until the clock catches back up to its last emission.
///
/// [`SnowflakeGenerator`]: crate::SnowflakeGenerator
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl TimeSource for WallClock {
    fn current_millis(&self) -> i64 {
        Timestamp::now().as_millisecond()
    }
}
