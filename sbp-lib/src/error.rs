use thiserror::Error;

/// The primary error type for the `sbp-lib` library.
///
/// Every variant is terminal for the decode attempt that produced it: the
/// decoder never returns a partial message and never retries. A caller
/// scanning a byte stream treats any of these as "no valid message starts
/// here" and resynchronizes, except `BufferTooShort`, which can also mean
/// "read more bytes first".
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SbpError {
    #[error("first byte 0x{found:02X} is not the SBP preamble")]
    SyncMismatch { found: u8 },

    #[error("buffer too short: expected at least {expected} bytes, got {actual}")]
    BufferTooShort { expected: usize, actual: usize },

    #[error("message type 0x{msg_type:04X} rejected")]
    TypeRejected { msg_type: u16 },

    #[error("checksum mismatch: computed 0x{computed:04X}, frame carries 0x{stored:04X}")]
    ChecksumMismatch { computed: u16, stored: u16 },

    #[error("payload length {payload_len} does not hold a whole number of records")]
    MalformedLength { payload_len: u8 },
}
