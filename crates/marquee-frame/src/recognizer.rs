use bytes::BytesMut;
use tracing::{debug, trace};

use crate::error::{FrameError, Result};
use crate::frame::Frame;
use crate::kind::{FrameKind, MARKER_SIZE};

/// Picks the frame kind for incoming bytes by trying registered markers in
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRecognizer {
    kinds: Vec<FrameKind>,
}

impl Default for FrameRecognizer {
    fn default() -> Self {
        Self::with_kinds(FrameKind::ALL)
    }
}

impl FrameRecognizer {
    /// A recognizer for every known kind.
    pub fn new() -> Self {
        Self::default()
    }

    /// A recognizer for the given kinds, tried in the order given.
    pub fn with_kinds(kinds: impl IntoIterator<Item = FrameKind>) -> Self {
        let mut recognizer = Self { kinds: Vec::new() };
        for kind in kinds {
            recognizer.register(kind);
        }
        recognizer
    }

    /// Add `kind` after the already registered ones. Registering twice has
    /// no effect.
    pub fn register(&mut self, kind: FrameKind) -> &mut Self {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
        self
    }

    pub fn kinds(&self) -> &[FrameKind] {
        &self.kinds
    }

    /// First registered kind whose marker starts `bytes`.
    pub fn match_marker(&self, bytes: &[u8], address: u8) -> Option<FrameKind> {
        self.kinds
            .iter()
            .copied()
            .find(|kind| kind.matches(bytes, address))
    }

    /// Recognize and decode one complete frame.
    pub fn recognize(&self, bytes: &[u8], address: u8) -> Result<Frame> {
        let kind = self
            .match_marker(bytes, address)
            .ok_or_else(|| unrecognized(bytes))?;
        trace!(%kind, len = bytes.len(), "marker matched");
        Frame::from_bytes(kind, bytes, address)
    }

    /// Decode the next frame from a receive buffer.
    ///
    /// Returns `Ok(None)` until enough bytes for the matched kind are
    /// buffered. A frame whose marker matched is consumed from `src` even if
    /// it then fails validation, so the caller can keep reading. Bytes with
    /// no matching marker are left in place.
    pub fn decode(&self, src: &mut BytesMut, address: u8) -> Result<Option<Frame>> {
        if src.len() < MARKER_SIZE {
            return Ok(None);
        }
        let kind = self
            .match_marker(&src[..], address)
            .ok_or_else(|| unrecognized(&src[..]))?;
        if src.len() < kind.length() {
            return Ok(None);
        }

        let bytes = src.split_to(kind.length());
        let frame = Frame::from_bytes(kind, &bytes, address);
        if let Err(err) = &frame {
            debug!(%kind, error = %err, "dropping malformed frame");
        }
        frame.map(Some)
    }
}

fn unrecognized(bytes: &[u8]) -> FrameError {
    let mut marker = [0u8; MARKER_SIZE];
    for (slot, byte) in marker.iter_mut().zip(bytes) {
        *slot = *byte;
    }
    FrameError::UnrecognizedMarker(marker)
}
