// emvtap/src/prelude.rs

//! Convenience re-exports for consumers of the crate.

pub use crate::protocol::Command;
pub use crate::session::{CardSession, SessionState};
pub use crate::transport::{MockTransport, TargetAcquisition, Transport};
pub use crate::{Aid, CardData, Error, Pan, RecordAddress, Result, TargetDescriptor};

// Re-export small utilities for convenience
pub use crate::utils::{
    DEFAULT_EXCHANGE_TIMEOUT_MS, bytes_to_hex, bytes_to_hex_spaced, default_exchange_timeout, ms,
};
