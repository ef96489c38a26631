// emvtap/src/session/mod.rs

//! Card session state machine: select the payment directory, select the
//! application it names, then probe candidate records for a validated PAN.

use derive_more::Display;
use log::{debug, info};

use crate::constants::{MAX_APDU_LEN, PAN_RECORD_SCAN};
use crate::protocol::{self, Command};
use crate::transport::Transport;
use crate::types::{Aid, CardData, Pan};
use crate::utils::{DEFAULT_EXCHANGE_TIMEOUT_MS, bytes_to_hex_spaced};
use crate::{Error, Result};

/// Protocol phase a session is in. Advances strictly forward; `Failed` and
/// `PanFound` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SessionState {
    /// No exchange has happened yet.
    #[display(fmt = "idle")]
    Idle,
    /// The payment directory answered with a success trailer.
    #[display(fmt = "ppse selected")]
    PpseSelected,
    /// The application named by the directory accepted selection.
    #[display(fmt = "application selected")]
    ApplicationSelected,
    /// Candidate records are being probed for a PAN.
    #[display(fmt = "record scanning")]
    RecordScanning,
    /// A checksum-valid PAN was extracted.
    #[display(fmt = "pan found")]
    PanFound,
    /// The session aborted; the reason was returned as the session error.
    #[display(fmt = "failed")]
    Failed,
}

/// One synchronous card session over a boxed transport. Each protocol step
/// blocks on exactly one exchange; nothing is retried here and no state is
/// shared beyond the current command/response pair.
pub struct CardSession {
    transport: Box<dyn Transport>,
    state: SessionState,
}

impl CardSession {
    /// Start an idle session over the given transport.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            state: SessionState::Idle,
        }
    }

    /// Current protocol phase.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Drive the whole machine: PPSE select, application select, record
    /// scan. Returns the AID/PAN pair on success; any failure aborts the
    /// remainder of the session immediately and leaves the state `Failed`.
    pub fn read_pan(&mut self) -> Result<CardData> {
        match self.run_to_pan() {
            Ok(data) => Ok(data),
            Err(err) => {
                self.state = SessionState::Failed;
                Err(err)
            }
        }
    }

    fn run_to_pan(&mut self) -> Result<CardData> {
        let aid = self.select_ppse()?;
        info!("directory names application {}", aid);

        self.select_application(aid)?;
        let pan = self.scan_records()?;
        info!("record scan yielded a checksum-valid pan");

        Ok(CardData::new(aid, pan))
    }

    /// Idle -> PpseSelected. Returns the AID named by the first directory
    /// entry of the response.
    fn select_ppse(&mut self) -> Result<Aid> {
        let resp = self.exchange(&Command::SelectPpse)?;
        if !protocol::has_success_trailer(&resp) {
            return Err(Error::PpseSelectionFailed);
        }
        self.state = SessionState::PpseSelected;

        protocol::find_aid(&resp).ok_or(Error::AidNotFound)
    }

    /// PpseSelected -> ApplicationSelected.
    fn select_application(&mut self, aid: Aid) -> Result<()> {
        let resp = self.exchange(&Command::SelectApplication { aid })?;
        if !protocol::is_selectable_application(&resp) {
            return Err(Error::ApplicationSelectionFailed);
        }
        self.state = SessionState::ApplicationSelected;
        Ok(())
    }

    /// ApplicationSelected -> RecordScanning -> PanFound. Probes the fixed
    /// record list in order and stops at the first record that yields a
    /// checksum-valid PAN.
    fn scan_records(&mut self) -> Result<Pan> {
        self.state = SessionState::RecordScanning;

        for address in PAN_RECORD_SCAN {
            let resp = self.exchange(&Command::ReadRecord { address })?;
            if let Some(pan) = protocol::find_pan(&resp) {
                self.state = SessionState::PanFound;
                return Ok(pan);
            }
        }

        Err(Error::PanNotFound)
    }

    /// One blocking exchange with hex tracing. The response buffer is owned
    /// here for the duration of the step; callers extract what they need
    /// and drop the rest.
    fn exchange(&mut self, command: &Command) -> Result<Vec<u8>> {
        let apdu = command.encode();
        if apdu.len() > MAX_APDU_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_APDU_LEN,
                actual: apdu.len(),
            });
        }

        debug!("=> {}", bytes_to_hex_spaced(&apdu));
        let resp = self
            .transport
            .transceive(&apdu, DEFAULT_EXCHANGE_TIMEOUT_MS)?;
        debug!("<= {}", bytes_to_hex_spaced(&resp));

        Ok(resp)
    }
}
