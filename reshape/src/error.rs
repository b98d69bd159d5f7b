#[derive(thiserror::Error)]
pub enum Error {
    // std errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // crate errors
    #[error("header bytes {0:02x?} match no known layout")]
    UnrecognizedHeader([u8; 4]),

    #[error("unsupported shapes version {0} (supported: 2-7)")]
    UnsupportedVersion(u16),

    /// A wrong seed decrypts to plausible-looking garbage; the format has no
    /// integrity check, so an absurd count, a read past end-of-file and an
    /// out-of-range allocation all collapse into this one condition.
    #[error("decryption failure (wrong seed, or file is corrupt)")]
    Decryption,

    #[error("payload truncated: entry declares {size} bytes but only {available} remain")]
    TruncatedPayload { size: u32, available: u64 },
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}
