// emvtap/src/constants.rs
//! Fixed protocol data embedded in the implementation

use crate::types::RecordAddress;

/// Largest APDU the transport contract accepts, in either direction.
pub const MAX_APDU_LEN: usize = 264;

/// Success status trailer (SW1 SW2) closing a card response.
pub const STATUS_SUCCESS: [u8; 2] = [0x90, 0x00];

/// File Control Information template tag opening a select-application response.
pub const FCI_TEMPLATE_TAG: u8 = 0x6F;

/// ISO 7816 interindustry class byte.
pub const CLA_ISO: u8 = 0x00;

/// SELECT instruction byte.
pub const INS_SELECT: u8 = 0xA4;

/// READ RECORD instruction byte.
pub const INS_READ_RECORD: u8 = 0xB2;

/// SELECT P1 meaning "select by DF name".
pub const SELECT_BY_NAME: u8 = 0x04;

/// DF name of the contactless payment directory (PPSE).
pub const PPSE_NAME: &[u8] = b"2PAY.SYS.DDF01";

/// Marker preceding an AID in a PPSE response: tag 4F with length byte 07.
pub const AID_MARKER: [u8; 2] = [0x4F, 0x07];

/// Contactless track-2 tag (9F 6B) with length byte 13.
pub const TAG_CONTACTLESS_TRACK2: [u8; 3] = [0x9F, 0x6B, 0x13];

/// Application PAN tag (5A) with length byte 08.
pub const TAG_APPLICATION_PAN: [u8; 2] = [0x5A, 0x08];

/// Track-2 equivalent data tag (57) with length byte 13.
pub const TAG_TRACK2_EQUIVALENT: [u8; 2] = [0x57, 0x13];

/// Record/SFI pairs probed for a PAN, in this exact order. The scan stops at
/// the first record yielding a checksum-valid PAN.
pub const PAN_RECORD_SCAN: [RecordAddress; 6] = [
    RecordAddress::new(1, 3),
    RecordAddress::new(1, 1),
    RecordAddress::new(2, 1),
    RecordAddress::new(1, 2),
    RecordAddress::new(2, 2),
    RecordAddress::new(4, 2),
];
