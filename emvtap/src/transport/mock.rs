// emvtap/src/transport/mock.rs

use crate::transport::traits::{TargetAcquisition, Transport};
use crate::types::TargetDescriptor;
use crate::{Error, Result};

/// Mock transport for unit tests. It records transmitted commands and
/// replays queued responses in order; a drained queue behaves like a card
/// that stopped answering.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Commands transmitted so far, oldest first.
    pub sent: Vec<Vec<u8>>,
    /// Responses still queued for replay.
    pub responses: Vec<Vec<u8>>,
    /// Targets still queued for `select_passive_target`.
    pub targets: Vec<TargetDescriptor>,
}

impl MockTransport {
    /// Create an empty mock with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next transceive call.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    /// Queue a target for the next acquisition poll.
    pub fn push_target(&mut self, target: TargetDescriptor) {
        self.targets.push(target);
    }

    /// Take the most recently transmitted command, if any.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transport for MockTransport {
    fn transceive(&mut self, command: &[u8], _timeout_ms: u64) -> Result<Vec<u8>> {
        self.sent.push(command.to_vec());
        if self.responses.is_empty() {
            Err(Error::Timeout)
        } else {
            Ok(self.responses.remove(0))
        }
    }
}

impl TargetAcquisition for MockTransport {
    fn select_passive_target(&mut self) -> Result<Option<TargetDescriptor>> {
        if self.targets.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.targets.remove(0)))
        }
    }
}
