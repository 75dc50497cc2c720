use std::sync::Arc;

use parking_lot::RwLock;

use crate::{error::Result, generator::SnowflakeGenerator, id::SnowflakeId};

/// The process-wide default generator.
///
/// The `RwLock` guards only the slot holding the handle; each generator
/// serializes its own emission behind its internal lock. Swapping the slot
/// while other threads are mid-call is safe: those calls finish against the
/// instance they captured, and calls that start after the swap observe the
/// new instance.
static DEFAULT_GENERATOR: RwLock<Option<Arc<SnowflakeGenerator>>> = RwLock::new(None);

/// Builds a generator for `(process_id, worker_id)` with the default epoch
/// and installs it as the process-wide default, replacing any prior
/// instance.
///
/// Call once at application startup, before any [`generate_snowflake`]
/// call.
///
/// # Errors
///
/// Returns [`Error::InvalidProcessId`] or [`Error::InvalidWorkerId`] if the
/// corresponding slot falls outside `0..=31`; the previously installed
/// instance (if any) is left in place.
///
/// [`Error::InvalidProcessId`]: crate::Error::InvalidProcessId
/// [`Error::InvalidWorkerId`]: crate::Error::InvalidWorkerId
pub fn configure_default_generator(process_id: i64, worker_id: i64) -> Result<()> {
    let generator = SnowflakeGenerator::new(process_id, worker_id)?;
    set_default_generator(Arc::new(generator));
    Ok(())
}

/// Installs an already-constructed generator as the process-wide default.
///
/// Useful for custom epochs or for swapping in a scripted generator under
/// test.
pub fn set_default_generator(generator: Arc<SnowflakeGenerator>) {
    *DEFAULT_GENERATOR.write() = Some(generator);
}

/// Returns a handle to the currently installed default generator, or `None`
/// if none has been installed yet.
pub fn default_generator() -> Option<Arc<SnowflakeGenerator>> {
    DEFAULT_GENERATOR.read().as_ref().map(Arc::clone)
}

/// Mints one id from the process-wide default generator.
///
/// # Panics
///
/// Panics if no default generator is installed. Generating before setup is
/// a missing initialization step, not a recoverable runtime condition;
/// configure a generator at startup first.
pub fn generate_snowflake() -> SnowflakeId {
    required_default().generate()
}

/// Mints `count` ids from the process-wide default generator.
///
/// # Panics
///
/// Panics if no default generator is installed, like
/// [`generate_snowflake`].
pub fn generate_snowflake_batch(count: usize) -> Vec<SnowflakeId> {
    required_default().generate_batch(count)
}

fn required_default() -> Arc<SnowflakeGenerator> {
    // Clone the handle out of the read guard before generating so the lock
    // is held only for the lookup, never across the emission itself.
    default_generator().unwrap_or_else(|| {
        panic!(
            "default snowflake generator is not configured; \
             call configure_default_generator(process_id, worker_id) first"
        )
    })
}
