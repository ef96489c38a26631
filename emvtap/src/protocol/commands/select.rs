// emvtap/src/protocol/commands/select.rs

use crate::constants::{CLA_ISO, INS_SELECT, PPSE_NAME, SELECT_BY_NAME};
use crate::types::Aid;

/// Encode SELECT-by-name for the contactless payment directory.
///
/// Layout: CLA INS P1 P2 Lc "2PAY.SYS.DDF01" Le, with Le = 0 asking for the
/// full FCI in the response.
pub fn encode_select_ppse() -> Vec<u8> {
    let mut apdu = vec![
        CLA_ISO,
        INS_SELECT,
        SELECT_BY_NAME,
        0x00,
        PPSE_NAME.len() as u8,
    ];
    apdu.extend_from_slice(PPSE_NAME);
    apdu.push(0x00);
    apdu
}

/// Encode SELECT for a specific application by AID.
///
/// No Le byte is appended here; cards answer a select-by-AID with the FCI
/// regardless, and the trailing validation works on whatever comes back.
pub fn encode_select_application(aid: Aid) -> Vec<u8> {
    let mut apdu = vec![
        CLA_ISO,
        INS_SELECT,
        SELECT_BY_NAME,
        0x00,
        Aid::LEN as u8,
    ];
    apdu.extend_from_slice(aid.as_bytes());
    apdu
}
