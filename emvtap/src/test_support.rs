//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::session::CardSession;
use crate::transport;

/// Build a MockTransport pre-seeded with the given card responses and
/// return it boxed as a Transport trait object.
#[doc(hidden)]
pub fn boxed_mock_with_responses(responses: Vec<Vec<u8>>) -> Box<dyn transport::Transport> {
    let mut mock = transport::MockTransport::new();
    for resp in responses {
        mock.push_response(resp);
    }
    Box::new(mock)
}

/// Convenience: an idle CardSession backed by a MockTransport pre-seeded
/// with the provided responses, in exchange order.
#[doc(hidden)]
pub fn session_with_responses(responses: Vec<Vec<u8>>) -> CardSession {
    CardSession::new(boxed_mock_with_responses(responses))
}
