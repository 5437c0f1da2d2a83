use crate::baseline::BaselineEcef;
use crate::constants::*;
use crate::error::SbpError;
use crate::frame::{MsgType, scan_header};
use crate::observation::ObservationMessage;

/// A fully decoded SBP message of any supported type.
#[derive(Debug, Clone, PartialEq)]
pub enum SbpMessage {
    Observations(ObservationMessage),
    BaselineEcef(BaselineEcef),
}

impl SbpMessage {
    /// Decode whichever supported message starts at the head of `buf`.
    ///
    /// Dispatches on the scanned header type, then runs the matching payload
    /// decoder (which validates length and CRC). A frame of an unsupported
    /// type fails with [`SbpError::TypeRejected`] even if its checksum is
    /// intact.
    pub fn decode(buf: &[u8]) -> Result<Self, SbpError> {
        let header = scan_header(buf, &[])?;
        match header.msg_type {
            MsgType::Obs => ObservationMessage::decode(buf).map(SbpMessage::Observations),
            MsgType::BaselineEcef => BaselineEcef::decode(buf).map(SbpMessage::BaselineEcef),
            MsgType::Unknown(code) => Err(SbpError::TypeRejected { msg_type: code }),
        }
    }

    pub fn msg_type(&self) -> MsgType {
        match self {
            SbpMessage::Observations(_) => MsgType::Obs,
            SbpMessage::BaselineEcef(_) => MsgType::BaselineEcef,
        }
    }

    /// On-wire length of the frame this message was decoded from, so stream
    /// callers can advance past it.
    pub fn frame_len(&self) -> usize {
        let payload_len = match self {
            SbpMessage::Observations(obs) => {
                OBS_HEADER_SIZE + obs.records.len() * OBS_RECORD_SIZE
            }
            SbpMessage::BaselineEcef(_) => BASELINE_PAYLOAD_SIZE,
        };
        FRAME_HEADER_SIZE + payload_len + CRC_SIZE
    }
}
