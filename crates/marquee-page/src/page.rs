use crate::animation::AnimationKind;
use crate::error::{PageError, Result};

/// One animated, timed screen of sign text.
///
/// `text` may carry two control markers besides displayable characters:
/// `_` starts a new display line and `~` right-justifies the rest of a line.
/// Text is checked against the character table when the page is encoded,
/// not here, so pages decoded from device bytes (which may hold U+FFFD)
/// can still be represented.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Page {
    animation: AnimationKind,
    delay: u8,
    text: String,
}

impl Page {
    /// Create a page. `delay` is in quarter seconds and must fit one byte.
    pub fn new(animation: AnimationKind, delay: u32, text: impl Into<String>) -> Result<Self> {
        let delay = u8::try_from(delay).map_err(|_| PageError::DelayOutOfRange(delay))?;
        Ok(Self::from_parts(animation, delay, text))
    }

    /// Create a page from an already range-checked delay.
    pub fn from_parts(animation: AnimationKind, delay: u8, text: impl Into<String>) -> Self {
        Self {
            animation,
            delay,
            text: text.into(),
        }
    }

    pub fn animation(&self) -> AnimationKind {
        self.animation
    }

    /// Pause after the animation completes, in quarter seconds.
    pub fn delay(&self) -> u8 {
        self.delay
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
