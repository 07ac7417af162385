//! Byte layout of a page as the sign consumes it.
//!
//! ```text
//! ┌───────────┬────────┬───────┬──────┬──────────────────────────────┐
//! │ Animation │ Offset │ Delay │ 0x00 │ line 0x0A line 0x0A line ... │
//! │ (1B)      │ (1B)   │ (1B)  │      │ (character table bytes)      │
//! └───────────┴────────┴───────┴──────┴──────────────────────────────┘
//! ```
//!
//! The offset byte counts leading blank lines so they need not be sent as
//! separators. A right-justify marker travels as the two characters `\R`
//! because `~` has no byte of its own.

use bytes::{BufMut, Bytes, BytesMut};
use tracing::debug;

use crate::animation::AnimationKind;
use crate::error::{PageError, Result};
use crate::page::Page;

/// Animation + offset + delay + reserved.
pub const HEADER_SIZE: usize = 4;

/// Byte placed between encoded lines.
pub const LINE_SEPARATOR: u8 = 0x0A;

/// Value required in the fourth header byte.
pub const RESERVED: u8 = 0x00;

/// Starts a new display line in page text.
pub const LINE_ADVANCE: char = '_';

/// Right-justifies the rest of a line in page text.
pub const RIGHT_JUSTIFY: char = '~';

/// How [`RIGHT_JUSTIFY`] is written inside encoded lines.
pub const JUSTIFY_ESCAPE: &str = "\\R";

const LINE_ADVANCE_STR: &str = "_";
const RIGHT_JUSTIFY_STR: &str = "~";

impl Page {
    /// Append this page's bytes to `dst`.
    ///
    /// Fails with [`PageError::UnsupportedCharacter`] listing every character
    /// of the text (across all lines) that the sign cannot display. Nothing is
    /// written to `dst` on failure.
    pub fn encode_into(&self, dst: &mut BytesMut) -> Result<()> {
        let text = self.text();
        let body = text.trim_start_matches(LINE_ADVANCE);
        // offset saturates; surplus markers stay in the body as blank lines
        let offset = (text.len() - body.len()).min(u8::MAX as usize);
        let rest = &text[offset..];

        let lines: Vec<String> = rest
            .split(LINE_ADVANCE)
            .map(|line| line.replace(RIGHT_JUSTIFY, JUSTIFY_ESCAPE))
            .collect();

        let missing = marquee_charset::unsupported(&lines.concat());
        if !missing.is_empty() {
            return Err(PageError::UnsupportedCharacter(missing));
        }

        let encoded = lines
            .iter()
            .map(|line| marquee_charset::encode(line))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let body_len = encoded.iter().map(Vec::len).sum::<usize>() + encoded.len() - 1;

        dst.reserve(HEADER_SIZE + body_len);
        dst.put_u8(self.animation().protocol_byte());
        dst.put_u8(offset as u8);
        dst.put_u8(self.delay());
        dst.put_u8(RESERVED);
        for (i, line) in encoded.iter().enumerate() {
            if i > 0 {
                dst.put_u8(LINE_SEPARATOR);
            }
            dst.put_slice(line);
        }

        debug!(
            animation = %self.animation(),
            offset,
            lines = encoded.len(),
            size = HEADER_SIZE + body_len,
            "encoded page"
        );
        Ok(())
    }

    /// Encode this page into a standalone buffer.
    pub fn to_bytes(&self) -> Result<Bytes> {
        let mut buf = BytesMut::new();
        self.encode_into(&mut buf)?;
        Ok(buf.freeze())
    }

    /// Decode a page from sign bytes.
    ///
    /// Text bytes never fail to decode; unmapped ones become U+FFFD. Trailing
    /// line separators are dropped.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(PageError::TruncatedFrame {
                expected: HEADER_SIZE,
                actual: bytes.len(),
            });
        }
        let animation = AnimationKind::from_protocol_byte(bytes[0])?;
        if bytes[3] != RESERVED {
            return Err(PageError::MalformedReservedByte(bytes[3]));
        }
        let offset = bytes[1] as usize;
        let delay = bytes[2];

        let mut body = &bytes[HEADER_SIZE..];
        while let [rest @ .., LINE_SEPARATOR] = body {
            body = rest;
        }

        let lines: Vec<String> = body
            .split(|&b| b == LINE_SEPARATOR)
            .map(|line| marquee_charset::decode(line).replace(JUSTIFY_ESCAPE, RIGHT_JUSTIFY_STR))
            .collect();

        let mut text = LINE_ADVANCE_STR.repeat(offset);
        text.push_str(&lines.join(LINE_ADVANCE_STR));

        debug!(%animation, offset, delay, lines = lines.len(), "decoded page");
        Ok(Page::from_parts(animation, delay, text))
    }
}

impl TryFrom<&[u8]> for Page {
    type Error = PageError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Page::from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use marquee_charset::{FULL_BLOCK, LIGHT_HORIZONTAL};
    use proptest::prelude::*;

    use super::*;

    const HELLO_WORLD: [u8; 11] = [
        0x48, 0x65, 0x6c, 0x6c, 0x6f, 0x20, 0x57, 0x6f, 0x72, 0x6c, 0x64,
    ];

    #[test]
    fn encodes_leading_blank_line_as_offset() {
        let page: Page = "V35^_Hello World".parse().unwrap();
        let bytes = page.to_bytes().unwrap();

        let mut expected = vec![0x1D, 0x01, 35, 0x00];
        expected.extend_from_slice(&HELLO_WORLD);
        assert_eq!(bytes.as_ref(), expected.as_slice());
    }

    #[test]
    fn lines_are_separated_not_terminated() {
        let page = Page::from_parts(AnimationKind::None, 20, "AB_C");
        assert_eq!(
            page.to_bytes().unwrap().as_ref(),
            &[0x00, 0x00, 20, 0x00, b'A', b'B', 0x0A, b'C']
        );
    }

    #[test]
    fn right_justify_is_escaped() {
        let page = Page::from_parts(AnimationKind::HScroll, 4, "12:34~5");
        let bytes = page.to_bytes().unwrap();
        assert_eq!(&bytes[HEADER_SIZE..], b"12:34\\R5");
        assert_eq!(Page::from_bytes(&bytes).unwrap(), page);
    }

    #[test]
    fn sample_page_round_trips() {
        let page = Page::new(
            AnimationKind::VScroll,
            40,
            "12:34 FUNKYTOWN~5_Limited Express",
        )
        .unwrap();
        let bytes = page.to_bytes().unwrap();
        assert_eq!(&bytes[..HEADER_SIZE], &[0x1D, 0x00, 40, 0x00]);
        assert_eq!(Page::from_bytes(&bytes).unwrap(), page);
    }

    #[test]
    fn empty_and_blank_only_text() {
        let empty = Page::from_parts(AnimationKind::None, 1, "");
        assert_eq!(empty.to_bytes().unwrap().as_ref(), &[0x00, 0x00, 1, 0x00]);
        assert_eq!(Page::from_bytes(&[0x00, 0x00, 1, 0x00]).unwrap(), empty);

        let blank = Page::from_parts(AnimationKind::None, 1, "___");
        let bytes = blank.to_bytes().unwrap();
        assert_eq!(bytes.as_ref(), &[0x00, 0x03, 1, 0x00]);
        assert_eq!(Page::from_bytes(&bytes).unwrap(), blank);
    }

    #[test]
    fn offset_saturates_and_keeps_blank_line_count() {
        let text = format!("{}X", "_".repeat(300));
        let page = Page::from_parts(AnimationKind::None, 0, text);
        let bytes = page.to_bytes().unwrap();

        assert_eq!(bytes[1], 255);
        assert_eq!(&bytes[HEADER_SIZE..HEADER_SIZE + 45], &[LINE_SEPARATOR; 45]);
        assert_eq!(Page::from_bytes(&bytes).unwrap(), page);
    }

    #[test]
    fn unsupported_characters_are_collected_across_lines() {
        let page = Page::from_parts(AnimationKind::None, 0, "a{b_c|d_{");
        assert_eq!(
            page.to_bytes(),
            Err(PageError::UnsupportedCharacter(vec!['{', '|']))
        );

        let mut buf = BytesMut::from(&b"keep"[..]);
        assert!(page.encode_into(&mut buf).is_err());
        assert_eq!(buf.as_ref(), b"keep");
    }

    #[test]
    fn encode_into_appends() {
        let mut buf = BytesMut::new();
        Page::from_parts(AnimationKind::None, 0, "A").encode_into(&mut buf).unwrap();
        Page::from_parts(AnimationKind::HScroll, 9, "B").encode_into(&mut buf).unwrap();
        assert_eq!(
            buf.as_ref(),
            &[0x00, 0x00, 0, 0x00, b'A', 0x2F, 0x00, 9, 0x00, b'B']
        );
    }

    #[test]
    fn decode_rejects_short_input() {
        assert_eq!(
            Page::from_bytes(&[0x00, 0x00, 0x14]),
            Err(PageError::TruncatedFrame {
                expected: HEADER_SIZE,
                actual: 3
            })
        );
    }

    #[test]
    fn decode_rejects_unknown_animation_before_reserved_byte() {
        assert_eq!(
            Page::from_bytes(&[0x42, 0x00, 0x14, 0x01]),
            Err(PageError::UnknownAnimationByte(0x42))
        );
    }

    #[test]
    fn decode_rejects_reserved_byte() {
        assert_eq!(
            Page::from_bytes(&[0x2F, 0x00, 0x14, 0x07, b'A']),
            Err(PageError::MalformedReservedByte(0x07))
        );
    }

    #[test]
    fn decode_trims_trailing_separators_and_replaces_unknown_bytes() {
        let bytes = [0x1D, 0x02, 8, 0x00, b'A', 0x01, 0x0A, 0x98, 0x0A, 0x0A];
        let page = Page::from_bytes(&bytes).unwrap();
        assert_eq!(page.animation(), AnimationKind::VScroll);
        assert_eq!(page.delay(), 8);
        assert_eq!(page.text(), format!("__A\u{FFFD}_{LIGHT_HORIZONTAL}"));
    }

    #[test]
    fn glyphs_round_trip() {
        let page = Page::from_parts(AnimationKind::None, 2, format!("{FULL_BLOCK}~{LIGHT_HORIZONTAL}"));
        let bytes = page.to_bytes().unwrap();
        assert_eq!(&bytes[HEADER_SIZE..], &[0xD3, b'\\', b'R', 0x97]);
        assert_eq!(Page::from_bytes(&bytes).unwrap(), page);
    }

    fn line_char() -> impl Strategy<Value = char> {
        // backslash is left out so generated text never spells the `\R` escape
        let chars: Vec<char> = marquee_charset::entries()
            .map(|(c, _)| c)
            .filter(|&c| c != '\\')
            .chain([RIGHT_JUSTIFY])
            .collect();
        prop::sample::select(chars)
    }

    /// Page text whose last character is never a line marker, since trailing
    /// separators are trimmed on decode.
    fn page_text() -> impl Strategy<Value = String> {
        (
            0usize..4,
            prop::collection::vec(prop::collection::vec(line_char(), 0..12), 1..5),
            line_char(),
        )
            .prop_map(|(leading, lines, last)| {
                let lines: Vec<String> = lines.into_iter().map(String::from_iter).collect();
                let mut text = LINE_ADVANCE_STR.repeat(leading);
                text.push_str(&lines.join(LINE_ADVANCE_STR));
                text.push(last);
                text
            })
    }

    proptest! {
        #[test]
        fn bytes_round_trip(
            kind in prop::sample::select(AnimationKind::ALL.to_vec()),
            delay in any::<u8>(),
            text in page_text(),
        ) {
            let page = Page::from_parts(kind, delay, text);
            let bytes = page.to_bytes().unwrap();
            prop_assert_eq!(Page::from_bytes(&bytes).unwrap(), page);
        }
    }
}
