use std::fmt;

use crate::error::{PageError, Result};

/// Entry effect applied when a page appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationKind {
    /// Text appears in place.
    #[default]
    None,
    /// Text scrolls in vertically.
    VScroll,
    /// Text scrolls in horizontally.
    HScroll,
}

impl AnimationKind {
    pub const ALL: [AnimationKind; 3] = [
        AnimationKind::None,
        AnimationKind::VScroll,
        AnimationKind::HScroll,
    ];

    /// Tag used in page notation.
    pub const fn letter(self) -> char {
        match self {
            AnimationKind::None => 'N',
            AnimationKind::VScroll => 'V',
            AnimationKind::HScroll => 'H',
        }
    }

    /// Code used in the first header byte of an encoded page.
    pub const fn protocol_byte(self) -> u8 {
        match self {
            AnimationKind::None => 0x00,
            AnimationKind::VScroll => 0x1D,
            AnimationKind::HScroll => 0x2F,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            AnimationKind::None => "NONE",
            AnimationKind::VScroll => "VSCROLL",
            AnimationKind::HScroll => "HSCROLL",
        }
    }

    /// Look up a kind by its notation letter, ignoring case.
    pub fn from_letter(letter: char) -> Result<Self> {
        match letter.to_ascii_uppercase() {
            'N' => Ok(AnimationKind::None),
            'V' => Ok(AnimationKind::VScroll),
            'H' => Ok(AnimationKind::HScroll),
            _ => Err(PageError::InvalidAnimation(letter)),
        }
    }

    /// Look up a kind by its protocol byte.
    pub fn from_protocol_byte(byte: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.protocol_byte() == byte)
            .ok_or(PageError::UnknownAnimationByte(byte))
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for AnimationKind {
    type Error = PageError;

    fn try_from(byte: u8) -> Result<Self> {
        Self::from_protocol_byte(byte)
    }
}
