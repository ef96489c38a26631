// emvtap/src/protocol/tlv.rs

//! Positional tag scanning over card response buffers.
//!
//! This is deliberately not a BER-TLV decoder. The session only ever needs
//! two fixed lookups, so the scanners match fixed marker bytes (tag plus
//! expected length byte) positionally and extract the fixed-width value
//! behind them. Both scanners stop outright when a marker matches with too
//! few bytes left, rather than skipping the truncated match and continuing.

use crate::constants::{
    AID_MARKER, TAG_APPLICATION_PAN, TAG_CONTACTLESS_TRACK2, TAG_TRACK2_EQUIVALENT,
};
use crate::protocol::luhn;
use crate::types::{Aid, Pan};

/// Locate the first AID in a PPSE selection response.
///
/// Scans positions `1..len` for the `4F 07` marker pair and returns the
/// seven bytes behind the first occurrence, or `None` when no marker is
/// found or the first match is truncated.
pub fn find_aid(data: &[u8]) -> Option<Aid> {
    for pos in 1..data.len() {
        if data[pos - 1] == AID_MARKER[0] && data[pos] == AID_MARKER[1] {
            if data.len() - pos > Aid::LEN {
                let mut aid = [0u8; Aid::LEN];
                aid.copy_from_slice(&data[pos + 1..pos + 1 + Aid::LEN]);
                return Some(Aid::from_bytes(aid));
            }
            // Truncated match: stop the scan entirely.
            break;
        }
    }
    None
}

/// Locate the first checksum-valid packed PAN in a record response.
///
/// Scans positions `2..len` for any of the three PAN markers ending at the
/// current position. A matched candidate whose digit rendering fails the
/// Luhn check (or is not BCD at all) is discarded and the scan continues at
/// the next position; a match with fewer than eight bytes behind it stops
/// the scan entirely.
pub fn find_pan(data: &[u8]) -> Option<Pan> {
    if data.len() < 4 {
        return None;
    }

    for pos in 2..data.len() {
        if !marker_ends_at(data, pos) {
            continue;
        }
        if data.len() - pos <= Pan::LEN {
            // Truncated match: same stop policy as the AID scan.
            break;
        }

        let mut packed = [0u8; Pan::LEN];
        packed.copy_from_slice(&data[pos + 1..pos + 1 + Pan::LEN]);
        let candidate = Pan::from_bytes(packed);

        if let Ok(true) = luhn::validate(&candidate.digits()) {
            return Some(candidate);
        }
    }
    None
}

/// True when one of the three recognized tag-plus-length markers ends at
/// `pos`. Caller guarantees `pos >= 2`.
fn marker_ends_at(data: &[u8], pos: usize) -> bool {
    data[pos - 2..=pos] == TAG_CONTACTLESS_TRACK2
        || data[pos - 1..=pos] == TAG_APPLICATION_PAN
        || data[pos - 1..=pos] == TAG_TRACK2_EQUIVALENT
}
