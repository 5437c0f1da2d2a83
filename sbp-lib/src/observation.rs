use modular_bitfield::prelude::*;
use tracing::trace;
use zerocopy::byteorder::little_endian::{I16, I32, U16, U32};
use zerocopy::{FromBytes, Immutable, KnownLayout, Unaligned};

use crate::constants::*;
use crate::error::SbpError;
use crate::frame::{MessageHeader, MsgType, validate_frame};
use crate::signal::SignalCode;

/// Fragmentation metadata from the observation sub-header.
///
/// A logical observation set too large for one frame is split across several
/// messages; this byte says which fragment this is (`index`, low nibble) out
/// of how many (`total`, high nibble). It says nothing about how many records
/// the present message carries.
#[bitfield(bytes = 1)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentInfo {
    pub index: B4,
    pub total: B4,
}

/// Measurement status flags of one observation record, LSB first.
#[bitfield(bytes = 1)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationFlags {
    pub pseudorange_valid: bool,
    pub carrier_phase_valid: bool,
    pub half_cycle_resolved: bool,
    pub doppler_valid: bool,
    #[skip]
    reserved: B3,
    pub raim_exclusion: bool,
}

#[derive(Debug, Clone, Copy, FromBytes, KnownLayout, Immutable, Unaligned)]
#[repr(C)]
struct ObservationHeaderRaw {
    tow_ms: U32,     // GPS time of week, milliseconds
    ns_residual: I32, // sub-millisecond residual, nanoseconds
    week: U16,
    n_obs: u8, // packed fragment index/total nibble pair
}

#[derive(Debug, Clone, Copy, FromBytes, KnownLayout, Immutable, Unaligned)]
#[repr(C)]
struct ObservationRecordRaw {
    pseudorange: U32,
    carrier_phase_int: I32, // whole cycles
    carrier_phase_frac: u8, // fractional cycles, 1/256 units
    doppler_int: I16,       // whole Hz
    doppler_frac: u8,       // fractional Hz, 1/256 units
    cn0: u8,
    lock_time: u8,
    flags: u8,
    sat_id: u8,
    signal_code: u8,
}

/// Decoded observation sub-header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationHeader {
    /// GPS time of week in milliseconds
    pub tow_ms: u32,
    /// Sub-millisecond time residual in nanoseconds
    pub ns_residual: i32,
    /// GPS week number
    pub week: u16,
    pub fragment: FragmentInfo,
}

impl From<ObservationHeaderRaw> for ObservationHeader {
    fn from(raw: ObservationHeaderRaw) -> Self {
        Self {
            tow_ms: raw.tow_ms.get(),
            ns_residual: raw.ns_residual.get(),
            week: raw.week.get(),
            fragment: FragmentInfo::from_bytes([raw.n_obs]),
        }
    }
}

/// One satellite measurement from an observation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationRecord {
    pub pseudorange: u32,
    /// Carrier phase, whole cycles
    pub carrier_phase_int: i32,
    /// Carrier phase, fractional cycles
    pub carrier_phase_frac: u8,
    /// Doppler, whole Hz
    pub doppler_int: i16,
    /// Doppler, fractional Hz
    pub doppler_frac: u8,
    /// Carrier-to-noise density
    pub cn0: u8,
    /// Phase-lock counter; changes when the tracking loop loses lock
    pub lock_time: u8,
    pub flags: ObservationFlags,
    pub sat_id: u8,
    /// Raw constellation/band code byte; see [`ObservationRecord::signal`]
    pub signal_code: u8,
}

impl ObservationRecord {
    /// Interpret the raw `signal_code` byte.
    pub fn signal(&self) -> SignalCode {
        SignalCode::from(self.signal_code)
    }
}

impl From<ObservationRecordRaw> for ObservationRecord {
    fn from(raw: ObservationRecordRaw) -> Self {
        Self {
            pseudorange: raw.pseudorange.get(),
            carrier_phase_int: raw.carrier_phase_int.get(),
            carrier_phase_frac: raw.carrier_phase_frac,
            doppler_int: raw.doppler_int.get(),
            doppler_frac: raw.doppler_frac,
            cn0: raw.cn0,
            lock_time: raw.lock_time,
            flags: ObservationFlags::from_bytes([raw.flags]),
            sat_id: raw.sat_id,
            signal_code: raw.signal_code,
        }
    }
}

/// A decoded observation message: sub-header plus records in wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationMessage {
    pub header: ObservationHeader,
    pub records: Vec<ObservationRecord>,
}

impl ObservationMessage {
    /// Decode an observation message from a buffer starting at the frame
    /// preamble. The frame must validate and be typed [`MsgType::Obs`].
    pub fn decode(buf: &[u8]) -> Result<Self, SbpError> {
        let header = validate_frame(buf)?;
        if header.msg_type != MsgType::Obs {
            return Err(SbpError::TypeRejected {
                msg_type: header.msg_type.into(),
            });
        }
        let payload = &buf[FRAME_HEADER_SIZE..FRAME_HEADER_SIZE + header.payload_len as usize];
        Self::decode_payload(&header, payload)
    }

    fn decode_payload(header: &MessageHeader, payload: &[u8]) -> Result<Self, SbpError> {
        let payload_len = header.payload_len as usize;

        // The record count comes from the payload length alone. The nibble
        // pair in the sub-header indexes cross-message fragmentation and must
        // not be trusted for per-message record arithmetic.
        let malformed = SbpError::MalformedLength {
            payload_len: header.payload_len,
        };
        if payload_len < OBS_HEADER_SIZE || (payload_len - OBS_HEADER_SIZE) % OBS_RECORD_SIZE != 0 {
            return Err(malformed);
        }
        let n_records = (payload_len - OBS_HEADER_SIZE) / OBS_RECORD_SIZE;

        let (obs_raw, mut rest) =
            ObservationHeaderRaw::read_from_prefix(payload).map_err(|_| malformed)?;

        let mut records = Vec::with_capacity(n_records);
        for _ in 0..n_records {
            let (rec_raw, tail) =
                ObservationRecordRaw::read_from_prefix(rest).map_err(|_| malformed)?;
            records.push(ObservationRecord::from(rec_raw));
            rest = tail;
        }

        let obs_header = ObservationHeader::from(obs_raw);
        trace!(
            tow_ms = obs_header.tow_ms,
            week = obs_header.week,
            n_records,
            fragment_index = obs_header.fragment.index(),
            fragment_total = obs_header.fragment.total(),
            "observation message decoded"
        );
        Ok(Self {
            header: obs_header,
            records,
        })
    }
}
