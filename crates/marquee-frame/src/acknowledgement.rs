use bytes::Bytes;

use crate::error::{FrameError, Result};
use crate::kind::FrameKind;
use crate::message::{check_shape, Message};

const RESERVED_INDEX: usize = 3;

/// Device acknowledgement: `[address, 0x52, status, 0x00]`.
///
/// `status` has no meaning at this layer and is kept for re-encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Acknowledgement {
    pub address: u8,
    pub status: u8,
}

impl Acknowledgement {
    pub fn new(address: u8, status: u8) -> Self {
        Self { address, status }
    }
}

impl Message for Acknowledgement {
    const KIND: FrameKind = FrameKind::Acknowledgement;

    fn from_bytes(bytes: &[u8], address: u8) -> Result<Self> {
        check_shape(Self::KIND, bytes, address)?;
        if bytes[RESERVED_INDEX] != 0x00 {
            return Err(FrameError::MalformedReservedByte {
                kind: Self::KIND,
                index: RESERVED_INDEX,
                found: bytes[RESERVED_INDEX],
            });
        }
        Ok(Self {
            address,
            status: bytes[2],
        })
    }

    fn to_bytes(&self) -> Bytes {
        let [a, t] = Self::marker(self.address);
        Bytes::copy_from_slice(&[a, t, self.status, 0x00])
    }

    fn address(&self) -> u8 {
        self.address
    }
}
