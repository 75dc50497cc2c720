use jiff::Timestamp;
use parking_lot::Mutex;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    error::{Error, Result},
    id::SnowflakeId,
    time::{DEFAULT_EPOCH, TimeSource, WallClock},
};

/// A lock-based Snowflake ID generator suitable for multi-threaded
/// environments.
///
/// The generator owns an immutable identity (`process_id`, `worker_id`,
/// `epoch`) and mutable clock state (last emission millisecond plus the
/// per-millisecond sequence counter) guarded by a mutex. [`generate`] is a
/// blocking, infallible call: sequence exhaustion and clock regression are
/// absorbed by stalling inside the call, never surfaced as errors.
///
/// Ids from one instance are unique and their timestamps never decrease.
/// Uniqueness *across* instances rests entirely on the caller assigning a
/// distinct `(process_id, worker_id)` pair to every concurrently-live
/// generator; no cross-instance coordination happens here. In multi-worker
/// deployments, give each worker its own instance rather than sharing one —
/// emission is serialized per instance.
///
/// # Example
///
/// ```
/// use idmint::SnowflakeGenerator;
///
/// let generator = SnowflakeGenerator::new(5, 12).unwrap();
///
/// let id = generator.generate();
/// assert_eq!(generator.extract_process_id(id), 5);
/// assert_eq!(generator.extract_worker_id(id), 12);
/// ```
///
/// [`generate`]: SnowflakeGenerator::generate
#[derive(Debug)]
pub struct SnowflakeGenerator<C: TimeSource = WallClock> {
    epoch: i64,
    process_id: i64,
    worker_id: i64,
    clock: C,
    state: Mutex<ClockState>,
}

#[derive(Debug, Default)]
struct ClockState {
    last_timestamp: i64,
    sequence: i64,
}

impl SnowflakeGenerator<WallClock> {
    /// Creates a generator using the library [`DEFAULT_EPOCH`] and the
    /// system wall clock.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProcessId`] or [`Error::InvalidWorkerId`] if
    /// the corresponding slot falls outside `0..=31`. Construction performs
    /// no I/O and cannot fail for any other reason.
    pub fn new(process_id: i64, worker_id: i64) -> Result<Self> {
        Self::with_epoch(process_id, worker_id, DEFAULT_EPOCH)
    }

    /// Creates a generator with a custom epoch, given in milliseconds since
    /// the Unix epoch.
    ///
    /// The epoch is expected to lie in the past; an epoch ahead of the clock
    /// is accepted but yields negative timestamp deltas (and negative raw
    /// ids) until the clock passes it. That trade-off belongs to the caller
    /// and is not validated here.
    ///
    /// # Errors
    ///
    /// Same as [`SnowflakeGenerator::new`].
    pub fn with_epoch(process_id: i64, worker_id: i64, epoch: i64) -> Result<Self> {
        Self::with_clock(process_id, worker_id, epoch, WallClock)
    }
}

impl<C: TimeSource> SnowflakeGenerator<C> {
    /// Creates a generator reading time from an explicit [`TimeSource`].
    ///
    /// Useful for tests that need to script the clock, or for deployments
    /// with their own notion of wall time.
    ///
    /// # Errors
    ///
    /// Same as [`SnowflakeGenerator::new`].
    pub fn with_clock(process_id: i64, worker_id: i64, epoch: i64, clock: C) -> Result<Self> {
        if !(0..=SnowflakeId::MAX_PROCESS_ID).contains(&process_id) {
            return Err(Error::invalid_process_id(process_id));
        }
        if !(0..=SnowflakeId::MAX_WORKER_ID).contains(&worker_id) {
            return Err(Error::invalid_worker_id(worker_id));
        }

        Ok(Self {
            epoch,
            process_id,
            worker_id,
            clock,
            state: Mutex::new(ClockState::default()),
        })
    }

    /// Mints one id.
    ///
    /// Safe to call concurrently from any number of threads against the same
    /// instance; the whole operation runs under the generator's internal
    /// lock. The call may block — while a regressed clock catches back up to
    /// the last emission, or while waiting out a millisecond whose 4096
    /// sequence values are spent — but it always eventually returns.
    ///
    /// For a fixed instance the emitted timestamp deltas are non-decreasing
    /// and no two ids within one millisecond share a sequence value, so no
    /// two ids from the same instance are ever equal.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self) -> SnowflakeId {
        let mut state = self.state.lock();

        let mut now = self.clock.current_millis();

        if now < state.last_timestamp {
            // Clock moved backwards. Stall until it catches up so no id is
            // ever emitted with a timestamp below one already handed out.
            self.clock.wait_until(state.last_timestamp);
            now = self.clock.current_millis();
        }

        if now == state.last_timestamp {
            state.sequence = (state.sequence + 1) & SnowflakeId::MAX_SEQUENCE;
            if state.sequence == 0 {
                // 4096 ids minted in this millisecond; the wrapped sequence
                // of 0 becomes the first sequence of the next tick.
                self.clock.wait_until(state.last_timestamp + 1);
                now = self.clock.current_millis();
            }
        } else {
            state.sequence = 0;
        }

        state.last_timestamp = now;

        SnowflakeId::from_parts(
            now - self.epoch,
            self.process_id,
            self.worker_id,
            state.sequence,
        )
    }

    /// Mints `count` ids via `count` sequential [`generate`] calls.
    ///
    /// No atomicity beyond the per-call guarantee: ids from concurrent
    /// batches interleave. `count == 0` yields an empty vector.
    ///
    /// [`generate`]: SnowflakeGenerator::generate
    pub fn generate_batch(&self, count: usize) -> Vec<SnowflakeId> {
        (0..count).map(|_| self.generate()).collect()
    }

    /// Recovers the absolute creation time of `id` in milliseconds since the
    /// Unix epoch.
    ///
    /// Only meaningful for ids produced with this generator's epoch;
    /// decoding an id minted against a different epoch silently yields a
    /// shifted timestamp.
    pub fn extract_timestamp(&self, id: SnowflakeId) -> i64 {
        id.timestamp() + self.epoch
    }

    /// Recovers the process slot encoded in `id`.
    pub fn extract_process_id(&self, id: SnowflakeId) -> i64 {
        id.process_id()
    }

    /// Recovers the worker slot encoded in `id`.
    pub fn extract_worker_id(&self, id: SnowflakeId) -> i64 {
        id.worker_id()
    }

    /// Recovers the per-millisecond sequence number encoded in `id`.
    pub fn extract_sequence(&self, id: SnowflakeId) -> i64 {
        id.sequence()
    }

    /// Recovers the creation time of `id` as a UTC calendar instant.
    ///
    /// Same epoch caveat as [`extract_timestamp`].
    ///
    /// [`extract_timestamp`]: SnowflakeGenerator::extract_timestamp
    pub fn extract_time(&self, id: SnowflakeId) -> Timestamp {
        Timestamp::from_millisecond(self.extract_timestamp(id))
            .expect("a 41-bit delta from a Unix-era epoch stays in Timestamp range")
    }

    /// The process slot this generator encodes into every id.
    pub const fn process_id(&self) -> i64 {
        self.process_id
    }

    /// The worker slot this generator encodes into every id.
    pub const fn worker_id(&self) -> i64 {
        self.worker_id
    }

    /// The epoch this generator subtracts before encoding, in milliseconds
    /// since the Unix epoch.
    pub const fn epoch(&self) -> i64 {
        self.epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::thread::scope;

    /// Clock driven by hand. `wait_until` jumps straight to the target
    /// instead of sleeping, so waits resolve instantly in tests.
    #[derive(Clone, Default)]
    struct TestClock {
        now: Arc<AtomicI64>,
    }

    impl TestClock {
        fn at(millis: i64) -> Self {
            let clock = Self::default();
            clock.set(millis);
            clock
        }

        fn set(&self, millis: i64) {
            self.now.store(millis, Ordering::SeqCst);
        }
    }

    impl TimeSource for TestClock {
        fn current_millis(&self) -> i64 {
            self.now.load(Ordering::SeqCst)
        }

        fn wait_until(&self, target: i64) {
            self.now.fetch_max(target, Ordering::SeqCst);
        }
    }

    fn scripted(process_id: i64, worker_id: i64, start: i64) -> (SnowflakeGenerator<TestClock>, TestClock) {
        let clock = TestClock::at(start);
        let generator = SnowflakeGenerator::with_clock(process_id, worker_id, 0, clock.clone())
            .expect("slots in range");
        (generator, clock)
    }

    #[test]
    fn construction_validates_each_slot_distinctly() {
        assert!(SnowflakeGenerator::new(0, 0).is_ok());
        assert!(SnowflakeGenerator::new(31, 31).is_ok());

        let err = SnowflakeGenerator::new(-1, 0).unwrap_err();
        assert_eq!(err, Error::invalid_process_id(-1));

        let err = SnowflakeGenerator::new(32, 0).unwrap_err();
        assert_eq!(err, Error::invalid_process_id(32));

        let err = SnowflakeGenerator::new(0, -1).unwrap_err();
        assert_eq!(err, Error::invalid_worker_id(-1));

        let err = SnowflakeGenerator::new(0, 32).unwrap_err();
        assert_eq!(err, Error::invalid_worker_id(32));
    }

    #[test]
    fn accessors_report_construction_parameters() {
        let generator = SnowflakeGenerator::with_epoch(10, 20, 1_600_000_000_000).unwrap();
        assert_eq!(generator.process_id(), 10);
        assert_eq!(generator.worker_id(), 20);
        assert_eq!(generator.epoch(), 1_600_000_000_000);
    }

    #[test]
    fn sequence_increments_within_one_millisecond() {
        let (generator, _clock) = scripted(1, 2, 42);

        let id1 = generator.generate();
        let id2 = generator.generate();
        let id3 = generator.generate();

        assert_eq!(id1.timestamp(), 42);
        assert_eq!(id2.timestamp(), 42);
        assert_eq!(id3.timestamp(), 42);
        assert_eq!(id1.sequence(), 0);
        assert_eq!(id2.sequence(), 1);
        assert_eq!(id3.sequence(), 2);
        assert!(id1 < id2 && id2 < id3);
    }

    #[test]
    fn new_millisecond_resets_the_sequence() {
        let (generator, clock) = scripted(1, 2, 42);

        let id = generator.generate();
        assert_eq!((id.timestamp(), id.sequence()), (42, 0));
        let id = generator.generate();
        assert_eq!((id.timestamp(), id.sequence()), (42, 1));

        clock.set(43);
        let id = generator.generate();
        assert_eq!((id.timestamp(), id.sequence()), (43, 0));
    }

    #[test]
    fn sequence_exhaustion_rolls_into_the_next_millisecond() {
        let (generator, _clock) = scripted(7, 8, 42);

        // Drain the full window for tick 42.
        for expected in 0..=SnowflakeId::MAX_SEQUENCE {
            let id = generator.generate();
            assert_eq!(id.timestamp(), 42);
            assert_eq!(id.sequence(), expected);
        }

        // Call 4097 wraps the sequence to 0 and waits out the tick; the
        // wrapped value restarts the window at the new millisecond.
        let id = generator.generate();
        assert_eq!(id.timestamp(), 43);
        assert_eq!(id.sequence(), 0);
    }

    #[test]
    fn exhaustion_burst_stays_unique() {
        let (generator, _clock) = scripted(7, 8, 42);

        let total = (SnowflakeId::MAX_SEQUENCE as usize + 1) * 2;
        let ids: HashSet<_> = (0..total).map(|_| generator.generate()).collect();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn regressed_clock_never_emits_a_stale_timestamp() {
        let (generator, clock) = scripted(1, 2, 100);

        let id = generator.generate();
        assert_eq!(id.timestamp(), 100);

        // Rewind the clock; generation must stall until it is back at 100
        // and then keep counting inside that millisecond.
        clock.set(50);
        let id = generator.generate();
        assert_eq!(id.timestamp(), 100);
        assert_eq!(id.sequence(), 1);

        // Timestamps remain non-decreasing afterwards.
        clock.set(101);
        let id = generator.generate();
        assert_eq!(id.timestamp(), 101);
        assert_eq!(id.sequence(), 0);
    }

    #[test]
    fn decoded_timestamps_are_non_decreasing_across_regressions() {
        let (generator, clock) = scripted(1, 2, 1_000);

        let mut last = i64::MIN;
        for (step, millis) in [1_000, 400, 1_002, 30, 1_003].into_iter().enumerate() {
            clock.set(millis);
            let id = generator.generate();
            assert!(
                id.timestamp() >= last,
                "step {step}: timestamp {} went below {last}",
                id.timestamp()
            );
            last = id.timestamp();
        }
    }

    #[test]
    fn batch_generates_count_unique_ids() {
        let generator = SnowflakeGenerator::new(2, 3).unwrap();

        let ids = generator.generate_batch(100);
        assert_eq!(ids.len(), 100);

        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(unique.len(), 100);
    }

    #[test]
    fn batch_of_zero_is_empty() {
        let generator = SnowflakeGenerator::new(2, 3).unwrap();
        assert!(generator.generate_batch(0).is_empty());
    }

    #[test]
    fn five_thousand_ids_stay_unique_and_consistent() {
        let generator = SnowflakeGenerator::new(7, 8).unwrap();

        let ids = generator.generate_batch(5000);
        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(unique.len(), 5000);

        for id in ids {
            assert_eq!(id.process_id(), 7);
            assert_eq!(id.worker_id(), 8);
        }
    }

    #[test]
    fn generated_id_decodes_to_construction_parameters() {
        let generator = SnowflakeGenerator::with_epoch(5, 12, 1_735_689_600_000).unwrap();

        let before = WallClock.current_millis();
        let id = generator.generate();
        let after = WallClock.current_millis();

        assert!(id.to_raw() > 0);
        assert_eq!(generator.extract_process_id(id), 5);
        assert_eq!(generator.extract_worker_id(id), 12);
        assert!((0..=SnowflakeId::MAX_SEQUENCE).contains(&generator.extract_sequence(id)));

        let timestamp = generator.extract_timestamp(id);
        assert!(timestamp >= before - 1_000 && timestamp <= after + 1_000);
    }

    #[test]
    fn extract_time_matches_extract_timestamp() {
        let generator = SnowflakeGenerator::new(1, 1).unwrap();
        let id = generator.generate();

        let time = generator.extract_time(id);
        assert_eq!(time.as_millisecond(), generator.extract_timestamp(id));
    }

    #[test]
    fn concurrent_generation_on_one_instance_stays_unique() {
        const THREADS: usize = 8;
        const IDS_PER_THREAD: usize = 2_000;

        let generator = Arc::new(SnowflakeGenerator::new(3, 4).unwrap());
        let mut all = HashSet::with_capacity(THREADS * IDS_PER_THREAD);

        scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    let generator = Arc::clone(&generator);
                    s.spawn(move || generator.generate_batch(IDS_PER_THREAD))
                })
                .collect();

            for handle in handles {
                for id in handle.join().expect("worker thread panicked") {
                    assert!(all.insert(id), "duplicate id {id}");
                }
            }
        });

        assert_eq!(all.len(), THREADS * IDS_PER_THREAD);
    }

    #[test]
    fn distinct_slot_pairs_never_collide() {
        const PROCESSES: i64 = 3;
        const WORKERS: i64 = 3;
        const IDS_PER_PAIR: usize = 500;

        let mut all: HashMap<SnowflakeId, (i64, i64)> = HashMap::new();

        scope(|s| {
            let handles: Vec<_> = (0..PROCESSES)
                .flat_map(|p| (0..WORKERS).map(move |w| (p, w)))
                .map(|(p, w)| {
                    s.spawn(move || {
                        let generator = SnowflakeGenerator::new(p, w).unwrap();
                        (p, w, generator.generate_batch(IDS_PER_PAIR))
                    })
                })
                .collect();

            for handle in handles {
                let (p, w, ids) = handle.join().expect("worker thread panicked");
                for id in ids {
                    assert_eq!(id.process_id(), p);
                    assert_eq!(id.worker_id(), w);
                    if let Some(other) = all.insert(id, (p, w)) {
                        panic!("id {id} emitted by both {other:?} and {:?}", (p, w));
                    }
                }
            }
        });

        assert_eq!(all.len(), (PROCESSES * WORKERS) as usize * IDS_PER_PAIR);
    }

    #[test]
    fn custom_epoch_shifts_the_encoded_delta() {
        let epoch = 1_577_836_800_000; // 2020-01-01T00:00:00Z
        let generator = SnowflakeGenerator::with_epoch(5, 6, epoch).unwrap();
        assert_eq!(generator.epoch(), epoch);

        let id = generator.generate();
        assert!(id.to_raw() > 0);
        assert_eq!(generator.extract_timestamp(id), id.timestamp() + epoch);
    }
}
