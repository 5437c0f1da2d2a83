//! Common test utilities and fixtures shared across integration test files

// Allow unused imports and dead code since this is a shared module
// used across multiple test files - not all items are used in every test file
#[allow(unused_imports)]
pub use sbp_lib::SbpError;
#[allow(unused_imports)]
pub use sbp_lib::SbpMessage;
#[allow(unused_imports)]
pub use sbp_lib::baseline::BaselineEcef;
#[allow(unused_imports)]
pub use sbp_lib::constants::*;
#[allow(unused_imports)]
pub use sbp_lib::crc::checksum;
#[allow(unused_imports)]
pub use sbp_lib::frame::{MessageHeader, MsgType, scan_header, validate_frame};
#[allow(unused_imports)]
pub use sbp_lib::observation::{ObservationFlags, ObservationMessage, ObservationRecord};
#[allow(unused_imports)]
pub use sbp_lib::signal::SignalCode;

/// Decode hex string to bytes for testing
#[allow(dead_code)]
pub fn hex_to_bytes(hex_data: &str) -> Vec<u8> {
    hex::decode(hex_data).expect("Failed to decode hex")
}

/// Wrap a payload in a complete frame: preamble, header, payload, CRC trailer.
#[allow(dead_code)]
pub fn build_frame(msg_type: u16, sender: u16, payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(FRAME_HEADER_SIZE + payload.len() + CRC_SIZE);
    frame.push(PREAMBLE);
    frame.extend_from_slice(&msg_type.to_le_bytes());
    frame.extend_from_slice(&sender.to_le_bytes());
    frame.push(payload.len() as u8);
    frame.extend_from_slice(payload);
    let crc = checksum(&frame[1..]);
    frame.extend_from_slice(&crc.to_le_bytes());
    frame
}

/// Observation sub-header bytes with the fragment nibble pair packed
/// (index in the low nibble, total in the high nibble).
#[allow(dead_code)]
pub fn obs_header_bytes(
    tow_ms: u32,
    ns_residual: i32,
    week: u16,
    fragment_index: u8,
    fragment_total: u8,
) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(OBS_HEADER_SIZE);
    bytes.extend_from_slice(&tow_ms.to_le_bytes());
    bytes.extend_from_slice(&ns_residual.to_le_bytes());
    bytes.extend_from_slice(&week.to_le_bytes());
    bytes.push((fragment_total << 4) | (fragment_index & 0x0F));
    bytes
}

/// One packed 17-byte observation record.
#[allow(dead_code)]
#[allow(clippy::too_many_arguments)]
pub fn obs_record_bytes(
    pseudorange: u32,
    carrier_phase_int: i32,
    carrier_phase_frac: u8,
    doppler_int: i16,
    doppler_frac: u8,
    cn0: u8,
    lock_time: u8,
    flags: u8,
    sat_id: u8,
    signal_code: u8,
) -> [u8; 17] {
    let mut bytes = [0u8; 17];
    bytes[0..4].copy_from_slice(&pseudorange.to_le_bytes());
    bytes[4..8].copy_from_slice(&carrier_phase_int.to_le_bytes());
    bytes[8] = carrier_phase_frac;
    bytes[9..11].copy_from_slice(&doppler_int.to_le_bytes());
    bytes[11] = doppler_frac;
    bytes[12] = cn0;
    bytes[13] = lock_time;
    bytes[14] = flags;
    bytes[15] = sat_id;
    bytes[16] = signal_code;
    bytes
}

/// Baseline ECEF payload bytes (20 bytes).
#[allow(dead_code)]
pub fn baseline_payload_bytes(
    tow_ms: u32,
    x_mm: i32,
    y_mm: i32,
    z_mm: i32,
    accuracy: u16,
    n_sats: u8,
    flags: u8,
) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(BASELINE_PAYLOAD_SIZE);
    bytes.extend_from_slice(&tow_ms.to_le_bytes());
    bytes.extend_from_slice(&x_mm.to_le_bytes());
    bytes.extend_from_slice(&y_mm.to_le_bytes());
    bytes.extend_from_slice(&z_mm.to_le_bytes());
    bytes.extend_from_slice(&accuracy.to_le_bytes());
    bytes.push(n_sats);
    bytes.push(flags);
    bytes
}

/// Baseline ECEF frame fixture: sender 0x03E8, tow 5000 ms,
/// x 1000, y -2000, z 123456 mm, accuracy 95, 9 sats, flags 1
#[allow(dead_code)]
pub const BASELINE_FRAME_HEX: &str =
    "550202e8031488130000e803000030f8ffff40e201005f0009017fdd";

/// Observation frame fixture with one record: tow 254924000 ms,
/// residual -125 ns, week 2020, fragment 0 of 1
#[allow(dead_code)]
pub const OBS_FRAME_HEX: &str =
    "554a00e8031ce0d4310f83ffffffe40710d20296496079feff8000fe40c8250f0500da38";
