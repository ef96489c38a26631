// emvtap/src/types.rs

use crate::Error;
use std::convert::TryFrom;
use std::fmt;

/// AID - Newtype Pattern (7 bytes)
///
/// Identifies the payment application named by the first directory entry of
/// the PPSE response. Lives only for the duration of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aid([u8; 7]);

impl Aid {
    /// Wire length of an AID in a PPSE directory entry.
    pub const LEN: usize = 7;

    /// Wrap raw AID bytes.
    pub fn from_bytes(bytes: [u8; 7]) -> Self {
        Self(bytes)
    }

    /// Borrow the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; 7] {
        &self.0
    }

    /// Lowercase hex rendering, no separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Aid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != Self::LEN {
            return Err(Error::InvalidLength {
                expected: Self::LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 7];
        arr.copy_from_slice(&bytes[..Self::LEN]);
        Ok(Self(arr))
    }
}

impl fmt::Display for Aid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// PAN - Newtype Pattern (8 bytes of packed BCD)
///
/// Two decimal digits per byte, as stored in the card's record data. A `Pan`
/// is only ever constructed after its digit rendering passed the Luhn check,
/// except in tests that exercise the validator directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pan([u8; 8]);

impl Pan {
    /// Wire length of a packed PAN value.
    pub const LEN: usize = 8;

    /// Wrap raw packed-digit bytes.
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Borrow the underlying packed bytes.
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Render the packed digits as a 16-character string, one character per
    /// nibble. Well-formed BCD yields the decimal account number; a nibble
    /// above 9 surfaces as an uppercase hex letter, which the Luhn validator
    /// rejects as `InvalidInput`.
    pub fn digits(&self) -> String {
        use std::fmt::Write;
        let mut s = String::with_capacity(16);
        for b in self.0 {
            // write! never fails writing to a String
            let _ = write!(&mut s, "{:02X}", b);
        }
        s
    }
}

impl TryFrom<&[u8]> for Pan {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != Self::LEN {
            return Err(Error::InvalidLength {
                expected: Self::LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 8];
        arr.copy_from_slice(&bytes[..Self::LEN]);
        Ok(Self(arr))
    }
}

impl fmt::Display for Pan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits())
    }
}

/// Record number plus Short File Identifier addressing one READ RECORD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordAddress {
    /// Record number, used as P1.
    pub record: u8,
    /// Short File Identifier of the file holding the record.
    pub sfi: u8,
}

impl RecordAddress {
    /// Build an address from record number and SFI.
    pub const fn new(record: u8, sfi: u8) -> Self {
        Self { record, sfi }
    }

    /// P2 of READ RECORD: SFI in the five high bits, low bits 100 meaning
    /// "P1 is a record number".
    pub const fn p2(&self) -> u8 {
        (self.sfi << 3) | 0x04
    }
}

/// Opaque target descriptor returned by the driver when a passive target
/// enters the field (UID/ATS bytes, format owned by the driver).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TargetDescriptor(Vec<u8>);

impl TargetDescriptor {
    /// Wrap driver-reported target bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Borrow the raw descriptor bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Everything a successful session yields: the selected application and the
/// validated PAN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardData {
    aid: Aid,
    pan: Pan,
}

impl CardData {
    /// Pair an AID with its validated PAN.
    pub fn new(aid: Aid, pan: Pan) -> Self {
        Self { aid, pan }
    }

    /// The application the PAN was read from.
    pub fn aid(&self) -> &Aid {
        &self.aid
    }

    /// The checksum-validated PAN.
    pub fn pan(&self) -> &Pan {
        &self.pan
    }
}
