pub mod baseline;
pub mod constants;
pub mod crc;
pub mod error;
pub mod frame;
pub mod message;
pub mod observation;
pub mod signal;

// Re-export the dispatch surface for easy access
pub use error::SbpError;
pub use message::SbpMessage;
