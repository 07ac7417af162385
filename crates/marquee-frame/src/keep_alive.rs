use bytes::Bytes;

use crate::error::Result;
use crate::kind::{FrameKind, KEEP_ALIVE_TRAILER};
use crate::message::{check_shape, Message};

/// Keep-alive ping: `[address, 0x50, trailer]`.
///
/// The trailer is conventionally `0x6F`; any value is accepted and kept so
/// the frame re-encodes byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeepAlive {
    pub address: u8,
    pub trailer: u8,
}

impl KeepAlive {
    /// A keep-alive for `address` with the conventional trailer.
    pub fn new(address: u8) -> Self {
        Self {
            address,
            trailer: KEEP_ALIVE_TRAILER,
        }
    }
}

impl Message for KeepAlive {
    const KIND: FrameKind = FrameKind::KeepAlive;

    fn from_bytes(bytes: &[u8], address: u8) -> Result<Self> {
        check_shape(Self::KIND, bytes, address)?;
        Ok(Self {
            address,
            trailer: bytes[2],
        })
    }

    fn to_bytes(&self) -> Bytes {
        let [a, t] = Self::marker(self.address);
        Bytes::copy_from_slice(&[a, t, self.trailer])
    }

    fn address(&self) -> u8 {
        self.address
    }
}
