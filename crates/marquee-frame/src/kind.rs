use std::fmt;

/// Address byte + type byte.
pub const MARKER_SIZE: usize = 2;

/// Type byte of a keep-alive frame.
pub const KEEP_ALIVE_TYPE: u8 = 0x50;

/// Type byte of an acknowledgement frame.
pub const ACKNOWLEDGEMENT_TYPE: u8 = 0x52;

/// Trailing byte a keep-alive conventionally carries.
pub const KEEP_ALIVE_TRAILER: u8 = 0x6F;

/// The known control frame variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    KeepAlive,
    Acknowledgement,
}

impl FrameKind {
    pub const ALL: [FrameKind; 2] = [FrameKind::KeepAlive, FrameKind::Acknowledgement];

    /// Second marker byte identifying this kind.
    pub const fn type_code(self) -> u8 {
        match self {
            FrameKind::KeepAlive => KEEP_ALIVE_TYPE,
            FrameKind::Acknowledgement => ACKNOWLEDGEMENT_TYPE,
        }
    }

    /// Exact wire length, marker included.
    pub const fn length(self) -> usize {
        match self {
            FrameKind::KeepAlive => 3,
            FrameKind::Acknowledgement => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            FrameKind::KeepAlive => "keep-alive",
            FrameKind::Acknowledgement => "acknowledgement",
        }
    }

    /// Marker this kind carries when exchanged with `address`.
    pub const fn marker(self, address: u8) -> [u8; MARKER_SIZE] {
        [address, self.type_code()]
    }

    /// Returns true if `bytes` starts with this kind's marker for `address`.
    pub fn matches(self, bytes: &[u8], address: u8) -> bool {
        bytes.starts_with(&self.marker(address))
    }
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
