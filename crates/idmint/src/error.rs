use core::fmt;

use crate::id::SnowflakeId;

/// Convenience alias used across `idmint` APIs.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Identifier algorithms whose surface is reserved but not yet implemented.
///
/// Carried inside [`Error::Unimplemented`] so callers can tell exactly which
/// capability is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Cuid,
    Ksuid,
    NanoId,
    ShortId,
    Ulid,
    Xid,
    Sonyflake,
}

impl Algorithm {
    /// Canonical spelling of the algorithm name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Cuid => "CUID",
            Self::Ksuid => "KSUID",
            Self::NanoId => "NanoID",
            Self::ShortId => "ShortID",
            Self::Ulid => "ULID",
            Self::Xid => "xid",
            Self::Sonyflake => "Sonyflake",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All error variants that `idmint` can emit.
///
/// Construction failures are ordinary values returned to the caller; there is
/// no error path in steady-state generation. Misusing the process-wide
/// default generator before configuring it is a panic, not an [`Error`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The process slot passed at construction is outside the encodable
    /// range.
    #[error("process id {process_id} out of range; expected 0..={max_process_id}")]
    InvalidProcessId {
        process_id: i64,
        max_process_id: i64,
    },

    /// The worker slot passed at construction is outside the encodable range.
    #[error("worker id {worker_id} out of range; expected 0..={max_worker_id}")]
    InvalidWorkerId { worker_id: i64, max_worker_id: i64 },

    /// The requested algorithm is reserved but has no implementation yet.
    #[error("{algorithm} generation is not implemented")]
    Unimplemented { algorithm: Algorithm },
}

impl Error {
    pub(crate) fn invalid_process_id(process_id: i64) -> Self {
        Self::InvalidProcessId {
            process_id,
            max_process_id: SnowflakeId::MAX_PROCESS_ID,
        }
    }

    pub(crate) fn invalid_worker_id(worker_id: i64) -> Self {
        Self::InvalidWorkerId {
            worker_id,
            max_worker_id: SnowflakeId::MAX_WORKER_ID,
        }
    }

    pub(crate) const fn unimplemented(algorithm: Algorithm) -> Self {
        Self::Unimplemented { algorithm }
    }
}
