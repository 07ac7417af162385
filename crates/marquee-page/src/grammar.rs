//! Page notation: `[<animation letter>][<delay digits>]^<text>`.
//!
//! ```text
//! H40^hello   -> HSCROLL, delay 40, "hello"
//! V^hello     -> VSCROLL, default delay, "hello"
//! hello       -> default animation, default delay, "hello"
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::animation::AnimationKind;
use crate::error::{PageError, Result};
use crate::page::Page;

/// Separates the notation prefix from the page text.
pub const SEPARATOR: char = '^';

/// Delay used when the notation does not give one, in quarter seconds.
pub const DEFAULT_DELAY: u8 = 20;

/// Values used for fields the notation leaves out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDefaults {
    pub animation: AnimationKind,
    pub delay: u8,
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self {
            animation: AnimationKind::None,
            delay: DEFAULT_DELAY,
        }
    }
}

struct Prefix<'a> {
    letter: Option<char>,
    digits: &'a str,
}

/// Matches `letter? digit*` against the whole of `head`.
fn split_prefix(head: &str) -> Option<Prefix<'_>> {
    let (letter, digits) = match head.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => (Some(c), &head[1..]),
        _ => (None, head),
    };
    digits
        .bytes()
        .all(|b| b.is_ascii_digit())
        .then_some(Prefix { letter, digits })
}

impl Page {
    /// Parse page notation, filling absent fields from `defaults`.
    ///
    /// Only the text before the first `^` is considered a prefix. If there is
    /// no `^`, or that text is not `letter? digit*`, the whole input is the
    /// page text. An empty digit run means "no delay given", never zero.
    pub fn parse(input: &str, defaults: &PageDefaults) -> Result<Self> {
        let Some((head, text)) = input.split_once(SEPARATOR) else {
            return Ok(Page::from_parts(defaults.animation, defaults.delay, input));
        };
        let Some(prefix) = split_prefix(head) else {
            trace!(prefix = head, "notation prefix not recognised, using whole input as text");
            return Ok(Page::from_parts(defaults.animation, defaults.delay, input));
        };

        let animation = match prefix.letter {
            Some(letter) => AnimationKind::from_letter(letter)?,
            None => defaults.animation,
        };
        let delay = if prefix.digits.is_empty() {
            u32::from(defaults.delay)
        } else {
            // all digits, so parsing only fails on overflow
            prefix.digits.parse::<u32>().unwrap_or(u32::MAX)
        };

        Page::new(animation, delay, text)
    }
}

impl FromStr for Page {
    type Err = PageError;

    fn from_str(input: &str) -> Result<Self> {
        Page::parse(input, &PageDefaults::default())
    }
}

/// Always writes both prefix fields, even when they equal the defaults.
impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.animation().letter(),
            self.delay(),
            SEPARATOR,
            self.text()
        )
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn parse(input: &str) -> Result<Page> {
        input.parse()
    }

    #[test]
    fn parses_full_prefix() {
        let page = parse("H40^hello").unwrap();
        assert_eq!(page.animation(), AnimationKind::HScroll);
        assert_eq!(page.delay(), 40);
        assert_eq!(page.text(), "hello");
    }

    #[test]
    fn no_caret_uses_defaults() {
        let page = parse("hello").unwrap();
        assert_eq!(page.animation(), AnimationKind::None);
        assert_eq!(page.delay(), DEFAULT_DELAY);
        assert_eq!(page.text(), "hello");
    }

    #[test]
    fn empty_digit_run_is_default_not_zero() {
        let page = parse("V^hello").unwrap();
        assert_eq!(page.animation(), AnimationKind::VScroll);
        assert_eq!(page.delay(), DEFAULT_DELAY);
        assert_eq!(page.text(), "hello");
    }

    #[test]
    fn explicit_zero_delay() {
        assert_eq!(parse("V0^x").unwrap().delay(), 0);
    }

    #[test]
    fn digits_without_letter_keep_default_animation() {
        let defaults = PageDefaults {
            animation: AnimationKind::HScroll,
            delay: 8,
        };
        let page = Page::parse("12^abc", &defaults).unwrap();
        assert_eq!(page.animation(), AnimationKind::HScroll);
        assert_eq!(page.delay(), 12);

        let page = Page::parse("^abc", &defaults).unwrap();
        assert_eq!(page.animation(), AnimationKind::HScroll);
        assert_eq!(page.delay(), 8);
        assert_eq!(page.text(), "abc");
    }

    #[test]
    fn lowercase_letter_and_multiline_text() {
        let page = parse("v5^one\ntwo^three").unwrap();
        assert_eq!(page.animation(), AnimationKind::VScroll);
        assert_eq!(page.delay(), 5);
        assert_eq!(page.text(), "one\ntwo^three");
    }

    #[test]
    fn unknown_letter_fails() {
        assert_eq!(parse("X40^hello"), Err(PageError::InvalidAnimation('X')));
    }

    #[test]
    fn large_delay_fails() {
        assert_eq!(parse("N256^hi"), Err(PageError::DelayOutOfRange(256)));
        assert_eq!(
            parse("N99999999999^hi"),
            Err(PageError::DelayOutOfRange(u32::MAX))
        );
    }

    #[test]
    fn prefix_outside_grammar_is_text() {
        let page = parse("Next stop ^ Central").unwrap();
        assert_eq!(page.animation(), AnimationKind::None);
        assert_eq!(page.delay(), DEFAULT_DELAY);
        assert_eq!(page.text(), "Next stop ^ Central");
    }

    #[test]
    fn display_always_writes_both_fields() {
        let page = Page::new(
            AnimationKind::VScroll,
            40,
            "12:34 FUNKYTOWN~5_Limited Express",
        )
        .unwrap();
        assert_eq!(page.to_string(), "V40^12:34 FUNKYTOWN~5_Limited Express");

        assert_eq!(parse("hello").unwrap().to_string(), "N20^hello");
    }

    fn animation() -> impl Strategy<Value = AnimationKind> {
        prop::sample::select(AnimationKind::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn display_then_parse_is_identity(
            kind in animation(),
            delay in any::<u8>(),
            text in ".*",
        ) {
            let page = Page::from_parts(kind, delay, text);
            prop_assert_eq!(parse(&page.to_string()).unwrap(), page);
        }
    }
}
