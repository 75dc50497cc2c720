use core::fmt;

/// A 16-byte universally unique identifier.
///
/// This is the passive value type: bytes plus the canonical lowercase
/// hyphenated rendering (`xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`). The
/// version-specific constructors live with the generators: [`Uuid::new_v4`]
/// draws random bytes, [`Uuid::new_v7`] goes through the process-wide
/// [`UuidV7Generator`].
///
/// [`UuidV7Generator`]: crate::UuidV7Generator
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Wraps raw bytes without touching version or variant bits.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Borrows the underlying bytes.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Consumes the id, returning the underlying bytes.
    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    /// The version number recorded in the version nibble (high four bits of
    /// byte 6).
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7], b[8], b[9], b[10], b[11], b[12], b[13],
            b[14], b[15],
        )
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uuid({self})")
    }
}
