// emvtap/src/protocol/commands/mod.rs

pub mod read;
pub mod select;

pub use read::encode_read_record;
pub use select::{encode_select_application, encode_select_ppse};

/// High-level Command enum. New commands should be added here and their
/// per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select the contactless payment directory by name.
    SelectPpse,
    /// Select a payment application by its 7-byte AID.
    SelectApplication {
        /// The application to select.
        aid: crate::types::Aid,
    },
    /// Read one candidate record by record number and SFI.
    ReadRecord {
        /// Record/SFI pair to read.
        address: crate::types::RecordAddress,
    },
}

impl Command {
    /// Instruction byte of the encoded APDU, as defined by ISO 7816-4.
    pub fn instruction(&self) -> u8 {
        match self {
            Self::SelectPpse | Self::SelectApplication { .. } => crate::constants::INS_SELECT,
            Self::ReadRecord { .. } => crate::constants::INS_READ_RECORD,
        }
    }

    /// Encode the command into the full APDU byte sequence.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::SelectPpse => encode_select_ppse(),
            Self::SelectApplication { aid } => encode_select_application(*aid),
            Self::ReadRecord { address } => encode_read_record(*address),
        }
    }
}
