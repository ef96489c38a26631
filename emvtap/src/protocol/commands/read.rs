// emvtap/src/protocol/commands/read.rs

use crate::constants::{CLA_ISO, INS_READ_RECORD};
use crate::types::RecordAddress;

/// Encode READ RECORD for one candidate record address.
///
/// Layout: CLA INS P1=record P2=(SFI<<3)|100b Le, with Le = 0 asking for the
/// whole record.
pub fn encode_read_record(address: RecordAddress) -> Vec<u8> {
    vec![
        CLA_ISO,
        INS_READ_RECORD,
        address.record,
        address.p2(),
        0x00,
    ]
}
