//! Control frames exchanged with a marquee LED sign.
//!
//! Every frame starts with a two-byte marker, `[device address, type code]`,
//! and has a fixed total length:
//!
//! | Kind            | Type | Length | Layout                         |
//! |-----------------|------|--------|--------------------------------|
//! | keep-alive      | 0x50 | 3      | address, 0x50, trailer         |
//! | acknowledgement | 0x52 | 4      | address, 0x52, status, 0x00    |
//!
//! Checksums and the transmit envelope belong to the transport and are not
//! handled here.

pub mod acknowledgement;
pub mod error;
pub mod frame;
pub mod keep_alive;
pub mod kind;
pub mod message;
pub mod recognizer;

pub use acknowledgement::Acknowledgement;
pub use error::{FrameError, Mismatch, Result};
pub use frame::Frame;
pub use keep_alive::KeepAlive;
pub use kind::{FrameKind, ACKNOWLEDGEMENT_TYPE, KEEP_ALIVE_TRAILER, KEEP_ALIVE_TYPE, MARKER_SIZE};
pub use message::Message;
pub use recognizer::FrameRecognizer;
