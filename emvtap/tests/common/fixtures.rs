// fixtures.rs — canned card responses shared by integration tests

use emvtap::types::Aid;

pub fn sample_aid_bytes() -> [u8; 7] {
    [0xA0, 0x00, 0x00, 0x00, 0x04, 0x10, 0x10]
}

pub fn sample_aid() -> Aid {
    Aid::from_bytes(sample_aid_bytes())
}

/// Packed digits of 4111111111111111, which passes the Luhn check.
pub fn valid_pan_bytes() -> [u8; 8] {
    [0x41, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11]
}

pub fn valid_pan_digits() -> &'static str {
    "4111111111111111"
}

/// Same digits with the check digit off by one; fails the Luhn check.
pub fn invalid_pan_bytes() -> [u8; 8] {
    [0x41, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x12]
}

/// Packed digits of 5500005555555559, a second Luhn-valid test number.
pub fn second_valid_pan_bytes() -> [u8; 8] {
    [0x55, 0x00, 0x00, 0x55, 0x55, 0x55, 0x55, 0x59]
}

pub fn second_valid_pan_digits() -> &'static str {
    "5500005555555559"
}

/// A realistic PPSE FCI: DF name, proprietary template, one directory entry
/// naming `sample_aid`, success trailer.
pub fn ppse_response() -> Vec<u8> {
    let mut resp = vec![0x6F, 0x23, 0x84, 0x0E];
    resp.extend_from_slice(b"2PAY.SYS.DDF01");
    resp.extend_from_slice(&[0xA5, 0x11, 0xBF, 0x0C, 0x0E, 0x61, 0x0C, 0x4F, 0x07]);
    resp.extend_from_slice(&sample_aid_bytes());
    resp.extend_from_slice(&[0x50, 0x01, 0x41]); // application label
    resp.extend_from_slice(&[0x90, 0x00]);
    resp
}

/// A PPSE response that carries the success trailer but no directory entry.
pub fn ppse_response_without_aid() -> Vec<u8> {
    let mut resp = vec![0x6F, 0x12, 0x84, 0x0E];
    resp.extend_from_slice(b"2PAY.SYS.DDF01");
    resp.extend_from_slice(&[0xA5, 0x00]);
    resp.extend_from_slice(&[0x90, 0x00]);
    resp
}

/// FCI answered by a selectable application: starts with the template tag,
/// ends with the success trailer.
pub fn application_fci_response() -> Vec<u8> {
    let mut resp = vec![0x6F, 0x12, 0x84, 0x07];
    resp.extend_from_slice(&sample_aid_bytes());
    resp.extend_from_slice(&[0xA5, 0x07, 0x50, 0x05]);
    resp.extend_from_slice(b"DEBIT");
    resp.extend_from_slice(&[0x90, 0x00]);
    resp
}

/// Card refused the command: "file not found" trailer, no body.
pub fn rejected_response() -> Vec<u8> {
    vec![0x6A, 0x82]
}

/// A record template carrying `pan` behind the given marker bytes.
pub fn record_with_pan(marker: &[u8], pan: &[u8; 8]) -> Vec<u8> {
    let mut resp = vec![0x70, (marker.len() + pan.len()) as u8];
    resp.extend_from_slice(marker);
    resp.extend_from_slice(pan);
    resp.extend_from_slice(&[0x90, 0x00]);
    resp
}

/// A successful record read that contains none of the PAN markers.
pub fn record_without_pan() -> Vec<u8> {
    vec![0x70, 0x05, 0x9F, 0x42, 0x02, 0x09, 0x78, 0x90, 0x00]
}

/// A record holding two candidates: a Luhn-failing PAN behind tag 5A and a
/// valid one behind tag 57.
pub fn record_with_second_candidate_valid() -> Vec<u8> {
    let mut resp = vec![0x70, 0x14, 0x5A, 0x08];
    resp.extend_from_slice(&invalid_pan_bytes());
    resp.extend_from_slice(&[0x57, 0x13]);
    resp.extend_from_slice(&second_valid_pan_bytes());
    resp.extend_from_slice(&[0x90, 0x00]);
    resp
}
