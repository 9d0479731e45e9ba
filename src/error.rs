use thiserror::Error;

/// Errors that can occur while talking to a DualShock 3 over hidraw.
///
/// Session-level operations do not surface these to the caller; they are
/// logged and folded into the session's sticky health flag. Enumeration
/// returns them directly so the host can decide whether to retry.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from the underlying character-device I/O.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A completed read returned fewer bytes than one full input report.
    #[error("short read from device ({got} of {expected} bytes)")]
    ShortRead { got: usize, expected: usize },
    /// A completed write sent fewer bytes than one full output report.
    #[error("short write to device ({got} of {expected} bytes)")]
    ShortWrite { got: usize, expected: usize },
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
