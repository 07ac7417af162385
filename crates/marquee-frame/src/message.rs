use bytes::Bytes;

use crate::error::{FrameError, Mismatch, Result};
use crate::kind::{FrameKind, MARKER_SIZE};

/// Capabilities shared by every control frame variant.
pub trait Message: Sized {
    /// Variant this type implements.
    const KIND: FrameKind;

    /// Second marker byte.
    const TYPE_CODE: u8 = Self::KIND.type_code();

    /// Total frame length, marker included.
    const LENGTH: usize = Self::KIND.length();

    /// Marker identifying this variant when exchanged with `address`.
    fn marker(address: u8) -> [u8; MARKER_SIZE] {
        Self::KIND.marker(address)
    }

    /// Parse and validate a complete frame received from `address`.
    fn from_bytes(bytes: &[u8], address: u8) -> Result<Self>;

    /// Wire bytes for this frame.
    fn to_bytes(&self) -> Bytes;

    /// Device address the frame was exchanged with.
    fn address(&self) -> u8;
}

/// Check total length, then marker, against `kind`.
pub(crate) fn check_shape(kind: FrameKind, bytes: &[u8], address: u8) -> Result<()> {
    if bytes.len() != kind.length() {
        return Err(FrameError::FrameMismatch {
            kind,
            reason: Mismatch::Length {
                expected: kind.length(),
                actual: bytes.len(),
            },
        });
    }
    let expected = kind.marker(address);
    if bytes[..MARKER_SIZE] != expected {
        return Err(FrameError::FrameMismatch {
            kind,
            reason: Mismatch::Marker {
                expected,
                found: [bytes[0], bytes[1]],
            },
        });
    }
    Ok(())
}
