use num_enum::{FromPrimitive, IntoPrimitive};
use strum_macros::Display;

/// Constellation and band of one observation, from the record's code byte.
///
/// Codes beyond the ones the receiver firmware documented pass through as
/// [`SignalCode::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoPrimitive, FromPrimitive)]
#[repr(u8)]
pub enum SignalCode {
    #[strum(to_string = "GPS L1CA")]
    GpsL1Ca = 0,
    #[strum(to_string = "GPS L2CM")]
    GpsL2Cm = 1,
    #[strum(to_string = "SBAS L1")]
    SbasL1 = 2,
    #[strum(to_string = "GLO L1CA")]
    GloL1Ca = 3,
    #[strum(to_string = "GLO L2CA")]
    GloL2Ca = 4,
    #[strum(to_string = "GPS L1P")]
    GpsL1P = 5,
    #[strum(to_string = "GPS L2P")]
    GpsL2P = 6,

    #[num_enum(catch_all)]
    #[strum(to_string = "code {0}")]
    Unknown(u8),
}

impl SignalCode {
    /// Whether this signal comes from the GLONASS constellation.
    pub fn is_glonass(&self) -> bool {
        matches!(self, SignalCode::GloL1Ca | SignalCode::GloL2Ca)
    }
}
