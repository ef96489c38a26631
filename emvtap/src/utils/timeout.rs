//! Timeout helpers used across the crate.
//!
//! Keep these minimal: they centralize the single per-exchange timeout the
//! session applies and provide a small conversion helper so tests and code
//! can express timeouts in milliseconds clearly.

use std::time::Duration;

/// Bounded wait applied to every transceive attempt, in milliseconds.
pub const DEFAULT_EXCHANGE_TIMEOUT_MS: u64 = 500;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default exchange timeout as Duration.
pub fn default_exchange_timeout() -> Duration {
    ms(DEFAULT_EXCHANGE_TIMEOUT_MS)
}
