//! Error types for avsample

use thiserror::Error;

/// Result type alias for avsample operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for avsample
///
/// The descriptor core itself is sentinel-based and never fails: unmapped
/// external codes degrade to `SampleFormat::Unknown` or
/// `ChannelLayout::Unsupported` and calculators return 0 for invalid formats.
/// Errors only arise at the textual boundary, when parsing format or layout
/// names supplied by callers.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unsupported feature
    #[error("Unsupported: {0}")]
    Unsupported(String),
}

impl Error {
    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Create an unsupported error
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        Error::Unsupported(msg.into())
    }
}
