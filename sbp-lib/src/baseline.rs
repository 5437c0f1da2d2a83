use tracing::trace;
use zerocopy::byteorder::little_endian::{I32, U16, U32};
use zerocopy::{FromBytes, Immutable, KnownLayout, Unaligned};

use crate::constants::*;
use crate::error::SbpError;
use crate::frame::{MsgType, validate_frame};

#[derive(Debug, Clone, Copy, FromBytes, KnownLayout, Immutable, Unaligned)]
#[repr(C)]
struct BaselineEcefRaw {
    tow_ms: U32,
    x_mm: I32,
    y_mm: I32,
    z_mm: I32,
    accuracy: U16,
    n_sats: u8,
    flags: u8,
}

/// Baseline vector between rover and reference station, ECEF frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaselineEcef {
    /// GPS time of week in milliseconds
    pub tow_ms: u32,
    /// Baseline components in millimeters
    pub x_mm: i32,
    pub y_mm: i32,
    pub z_mm: i32,
    /// Horizontal position accuracy estimate
    pub accuracy: u16,
    /// Satellites used in the solution
    pub n_sats: u8,
    /// Fix mode flags, passed through raw
    pub flags: u8,
}

impl From<BaselineEcefRaw> for BaselineEcef {
    fn from(raw: BaselineEcefRaw) -> Self {
        Self {
            tow_ms: raw.tow_ms.get(),
            x_mm: raw.x_mm.get(),
            y_mm: raw.y_mm.get(),
            z_mm: raw.z_mm.get(),
            accuracy: raw.accuracy.get(),
            n_sats: raw.n_sats,
            flags: raw.flags,
        }
    }
}

impl BaselineEcef {
    /// Decode a baseline ECEF message from a buffer starting at the frame
    /// preamble. The frame must validate, be typed [`MsgType::BaselineEcef`]
    /// and carry exactly the 20-byte baseline payload.
    pub fn decode(buf: &[u8]) -> Result<Self, SbpError> {
        let header = validate_frame(buf)?;
        if header.msg_type != MsgType::BaselineEcef {
            return Err(SbpError::TypeRejected {
                msg_type: header.msg_type.into(),
            });
        }
        if header.payload_len as usize != BASELINE_PAYLOAD_SIZE {
            return Err(SbpError::MalformedLength {
                payload_len: header.payload_len,
            });
        }

        let payload = &buf[FRAME_HEADER_SIZE..FRAME_HEADER_SIZE + BASELINE_PAYLOAD_SIZE];
        let raw = BaselineEcefRaw::read_from_bytes(payload).map_err(|_| {
            SbpError::MalformedLength {
                payload_len: header.payload_len,
            }
        })?;

        let baseline = BaselineEcef::from(raw);
        trace!(
            tow_ms = baseline.tow_ms,
            n_sats = baseline.n_sats,
            "baseline ECEF decoded"
        );
        Ok(baseline)
    }
}
