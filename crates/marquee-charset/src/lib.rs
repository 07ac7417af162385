//! Character table for the marquee LED sign byte protocol.
//!
//! The sign renders a subset of printable ASCII plus six symbol glyphs.
//! Encoding is strict: text containing a character outside the table is
//! rejected with every offending character listed. Decoding is total: bytes
//! the table does not know become U+FFFD so device output always renders.
//!
//! The two directions are not mutual inverses. A few bytes are decode-only
//! aliases of a glyph whose canonical byte is different (`0x98` renders like
//! `0x97`, `0xA4`/`0xA5` like `0xA3`).

pub mod error;
pub mod table;

pub use error::{format_chars, CharsetError, Result};
pub use table::{
    decode, decode_byte, encode, encode_char, entries, is_canonical, is_supported, unsupported,
    BULLET, FULL_BLOCK, HEAVY_HORIZONTAL, LIGHT_HORIZONTAL, MIDDLE_DOT, ONE_EIGHTH_BLOCK,
    REPLACEMENT,
};
