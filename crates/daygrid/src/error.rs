//! Error types for daygrid operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaygridError {
    /// The requested resolution does not evenly divide a day.
    #[error("Invalid resolution: {0} does not evenly divide 1440 minutes")]
    InvalidResolution(u32),

    /// A wire string decoded to a different bit count than the schedule needs.
    #[error("Resolution mismatch: wire string carries {decoded} bits, schedule needs {expected}")]
    ResolutionMismatch { expected: usize, decoded: usize },

    /// A range argument failed validation (format, bounds, or ordering).
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// The timezone name is not a valid IANA identifier.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// A wire string or bit string could not be parsed.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The bit count cannot be rendered as whole 32-bit wire chunks.
    #[error("Encode error: bit count {0} is not a multiple of 32")]
    Encode(usize),
}

pub type Result<T> = std::result::Result<T, DaygridError>;
