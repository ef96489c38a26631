// emvtap/src/error.rs

use thiserror::Error;

/// Crate-wide error type. Every variant is terminal for the session that
/// produced it; nothing is retried at this layer.
#[derive(Error, Debug)]
pub enum Error {
    /// The transceive operation itself failed at the driver level.
    #[error("transport error: {0}")]
    Transport(String),

    /// The bounded wait for a card response elapsed.
    #[error("operation timed out")]
    Timeout,

    /// PPSE selection response did not carry the success trailer.
    #[error("card rejected PPSE selection")]
    PpseSelectionFailed,

    /// PPSE response was accepted but no AID marker was located in it.
    #[error("no application identifier found in PPSE response")]
    AidNotFound,

    /// Application selection response was malformed or rejected.
    #[error("application selection rejected or malformed response")]
    ApplicationSelectionFailed,

    /// All candidate records were scanned without a checksum-valid PAN.
    #[error("no checksum-valid PAN in any candidate record")]
    PanNotFound,

    /// Checksum validator input was empty or contained a non-digit.
    #[error("invalid checksum input: {0}")]
    InvalidInput(String),

    /// A buffer or field did not have the length the protocol requires.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Length the protocol requires.
        expected: usize,
        /// Length actually seen.
        actual: usize,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
