use marquee_charset::{format_chars, CharsetError};

/// Errors that can occur while building, parsing, or coding a page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    /// The page text holds characters the sign cannot display.
    #[error("unsupported character(s): {}", format_chars(.0))]
    UnsupportedCharacter(Vec<char>),

    /// The animation letter is not one of `N`, `V`, `H`.
    #[error("invalid animation letter {0:?} (expected N, V or H)")]
    InvalidAnimation(char),

    /// The delay does not fit in one byte.
    #[error("delay {0} out of range (0..=255)")]
    DelayOutOfRange(u32),

    /// Fewer bytes than the page header needs.
    #[error("page truncated: expected at least {expected} bytes, got {actual}")]
    TruncatedFrame { expected: usize, actual: usize },

    /// The first header byte is not a known animation code.
    #[error("unknown animation byte 0x{0:02X}")]
    UnknownAnimationByte(u8),

    /// The reserved header byte is not zero.
    #[error("reserved byte must be 0x00, found 0x{0:02X}")]
    MalformedReservedByte(u8),
}

impl From<CharsetError> for PageError {
    fn from(err: CharsetError) -> Self {
        match err {
            CharsetError::UnsupportedCharacter(chars) => PageError::UnsupportedCharacter(chars),
        }
    }
}

pub type Result<T> = std::result::Result<T, PageError>;
