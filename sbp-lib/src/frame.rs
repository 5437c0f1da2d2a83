use num_enum::{FromPrimitive, IntoPrimitive};
use tracing::trace;
use zerocopy::byteorder::little_endian::U16;
use zerocopy::{FromBytes, Immutable, KnownLayout, Unaligned};

use crate::constants::*;
use crate::crc::checksum;
use crate::error::SbpError;

/// SBP message type codes this library knows how to decode.
///
/// Unknown codes are preserved through the catch-all so a scanner can still
/// report what it skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, FromPrimitive)]
#[repr(u16)]
pub enum MsgType {
    /// Raw satellite observation set
    Obs = 0x004A,
    /// Baseline vector in ECEF coordinates
    BaselineEcef = 0x0202,

    #[num_enum(catch_all)]
    Unknown(u16),
}

#[derive(Debug, Clone, Copy, FromBytes, KnownLayout, Immutable, Unaligned)]
#[repr(C)]
struct FrameHeaderRaw {
    preamble: u8,
    msg_type: U16,
    sender: U16,
    payload_len: u8,
}

/// Decoded SBP frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHeader {
    pub msg_type: MsgType,
    /// Id of the emitting device
    pub sender: u16,
    /// Bytes of payload between header and CRC trailer
    pub payload_len: u8,
}

impl MessageHeader {
    /// Total on-wire length of the frame this header describes,
    /// header and CRC trailer included.
    pub fn frame_len(&self) -> usize {
        FRAME_HEADER_SIZE + self.payload_len as usize + CRC_SIZE
    }
}

/// Detect a frame start at the head of `buf` and decode its header.
///
/// A non-empty `allowed_types` makes the scan reject any other type code.
/// Stream callers hunting for the next frame use this to extend the sync
/// pattern beyond the single 0x55 byte and cut down false positives.
pub fn scan_header(buf: &[u8], allowed_types: &[MsgType]) -> Result<MessageHeader, SbpError> {
    let first = *buf.first().ok_or(SbpError::BufferTooShort {
        expected: FRAME_HEADER_SIZE,
        actual: 0,
    })?;
    if first != PREAMBLE {
        return Err(SbpError::SyncMismatch { found: first });
    }

    let (raw, _) = FrameHeaderRaw::read_from_prefix(buf).map_err(|_| SbpError::BufferTooShort {
        expected: FRAME_HEADER_SIZE,
        actual: buf.len(),
    })?;

    let msg_type = MsgType::from_primitive(raw.msg_type.get());
    if !allowed_types.is_empty() && !allowed_types.contains(&msg_type) {
        return Err(SbpError::TypeRejected {
            msg_type: raw.msg_type.get(),
        });
    }

    Ok(MessageHeader {
        msg_type,
        sender: raw.sender.get(),
        payload_len: raw.payload_len,
    })
}

/// Certify that `buf` starts with one complete, uncorrupted frame.
///
/// Checks header, overall length and the CRC trailer. The buffer may be
/// longer than the frame; everything past the trailer is ignored. No type
/// filter is applied here; callers that want one scan first.
pub fn validate_frame(buf: &[u8]) -> Result<MessageHeader, SbpError> {
    let header = scan_header(buf, &[])?;

    let crc_offset = FRAME_HEADER_SIZE + header.payload_len as usize;
    let frame_len = crc_offset + CRC_SIZE;
    if buf.len() < frame_len {
        return Err(SbpError::BufferTooShort {
            expected: frame_len,
            actual: buf.len(),
        });
    }

    // The trailer covers the header minus the preamble, plus the payload.
    let stored = u16::from_le_bytes([buf[crc_offset], buf[crc_offset + 1]]);
    let computed = checksum(&buf[1..crc_offset]);
    if computed != stored {
        return Err(SbpError::ChecksumMismatch { computed, stored });
    }

    trace!(
        msg_type = ?header.msg_type,
        sender = header.sender,
        payload_len = header.payload_len,
        "frame validated"
    );
    Ok(header)
}
