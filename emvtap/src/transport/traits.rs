// emvtap/src/transport/traits.rs

use crate::Result;
use crate::types::TargetDescriptor;

/// Transport trait abstracts the proximity-card driver away from session
/// logic. Implementations own the device handle; the session only ever sees
/// byte buffers.
pub trait Transport {
    /// Perform one blocking command/response exchange with the card,
    /// waiting at most `timeout_ms` for the reply. An error return is
    /// terminal for the session in progress.
    fn transceive(&mut self, command: &[u8], timeout_ms: u64) -> Result<Vec<u8>>;
}

/// Target acquisition, separate from the exchange path: the caller polls
/// until a card is present before a session starts. The polling loop itself
/// belongs to the caller, not the core.
pub trait TargetAcquisition {
    /// Ask the driver for a passive target. `None` means no card is in the
    /// field right now; the caller decides whether to keep polling.
    fn select_passive_target(&mut self) -> Result<Option<TargetDescriptor>>;
}
