// emvtap/src/protocol/status.rs

//! Status-trailer and structural checks on response buffers.

use crate::constants::{FCI_TEMPLATE_TAG, STATUS_SUCCESS};

/// True when the buffer ends with the success trailer 90 00.
///
/// A response shorter than two bytes is never valid and is never indexed.
pub fn has_success_trailer(data: &[u8]) -> bool {
    data.len() >= 2 && data[data.len() - 2..] == STATUS_SUCCESS
}

/// True when the buffer looks like a selectable application: it opens with
/// the FCI template tag and closes with the success trailer. Applied to the
/// response of a select-by-AID exchange.
pub fn is_selectable_application(data: &[u8]) -> bool {
    has_success_trailer(data) && data[0] == FCI_TEMPLATE_TAG
}
