use bytes::Bytes;

use crate::acknowledgement::Acknowledgement;
use crate::error::Result;
use crate::keep_alive::KeepAlive;
use crate::kind::FrameKind;
use crate::message::Message;

/// A decoded control frame of any known kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frame {
    KeepAlive(KeepAlive),
    Acknowledgement(Acknowledgement),
}

impl Frame {
    /// Decode `bytes` as the given kind.
    pub fn from_bytes(kind: FrameKind, bytes: &[u8], address: u8) -> Result<Self> {
        match kind {
            FrameKind::KeepAlive => KeepAlive::from_bytes(bytes, address).map(Frame::KeepAlive),
            FrameKind::Acknowledgement => {
                Acknowledgement::from_bytes(bytes, address).map(Frame::Acknowledgement)
            }
        }
    }

    pub fn kind(&self) -> FrameKind {
        match self {
            Frame::KeepAlive(_) => FrameKind::KeepAlive,
            Frame::Acknowledgement(_) => FrameKind::Acknowledgement,
        }
    }

    pub fn address(&self) -> u8 {
        match self {
            Frame::KeepAlive(frame) => frame.address(),
            Frame::Acknowledgement(frame) => frame.address(),
        }
    }

    pub fn to_bytes(&self) -> Bytes {
        match self {
            Frame::KeepAlive(frame) => frame.to_bytes(),
            Frame::Acknowledgement(frame) => frame.to_bytes(),
        }
    }
}

impl From<KeepAlive> for Frame {
    fn from(frame: KeepAlive) -> Self {
        Frame::KeepAlive(frame)
    }
}

impl From<Acknowledgement> for Frame {
    fn from(frame: Acknowledgement) -> Self {
        Frame::Acknowledgement(frame)
    }
}
