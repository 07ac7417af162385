use std::fmt;

use crate::kind::{FrameKind, MARKER_SIZE};

/// Errors that can occur while recognizing or decoding a control frame.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// Marker bytes or total length do not fit the expected frame kind.
    #[error("{kind} frame mismatch: {reason}")]
    FrameMismatch { kind: FrameKind, reason: Mismatch },

    /// A byte that must be zero is not.
    #[error("{kind} frame byte {index} is reserved and must be 0x00, found 0x{found:02X}")]
    MalformedReservedByte {
        kind: FrameKind,
        index: usize,
        found: u8,
    },

    /// No registered frame kind uses this marker.
    #[error("no registered frame kind matches marker {}", format_marker(.0))]
    UnrecognizedMarker([u8; MARKER_SIZE]),
}

/// What part of a frame failed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    Length {
        expected: usize,
        actual: usize,
    },
    Marker {
        expected: [u8; MARKER_SIZE],
        found: [u8; MARKER_SIZE],
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Length { expected, actual } => {
                write!(f, "expected {expected} bytes, got {actual}")
            }
            Mismatch::Marker { expected, found } => write!(
                f,
                "expected marker {}, found {}",
                format_marker(expected),
                format_marker(found)
            ),
        }
    }
}

fn format_marker(marker: &[u8; MARKER_SIZE]) -> String {
    format!("[{:#04X}, {:#04X}]", marker[0], marker[1])
}

pub type Result<T> = std::result::Result<T, FrameError>;
