use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{CharsetError, Result};

/// `·` (U+00B7), canonical byte `0x8F`.
pub const MIDDLE_DOT: char = '\u{00B7}';
/// `•` (U+2022), canonical byte `0x90`.
pub const BULLET: char = '\u{2022}';
/// `─` (U+2500), canonical byte `0x97`.
pub const LIGHT_HORIZONTAL: char = '\u{2500}';
/// `━` (U+2501), canonical byte `0x99`.
pub const HEAVY_HORIZONTAL: char = '\u{2501}';
/// `▁` (U+2581), canonical byte `0xA3`.
pub const ONE_EIGHTH_BLOCK: char = '\u{2581}';
/// `█` (U+2588), canonical byte `0xD3`.
pub const FULL_BLOCK: char = '\u{2588}';

/// Substituted for bytes the table does not map.
pub const REPLACEMENT: char = char::REPLACEMENT_CHARACTER;

/// Printable ASCII the sign cannot show or the page grammar reserves.
const RESERVED_ASCII: &[u8] = b"\"%@[]^_`{|}~";

const GLYPHS: [(char, u8); 6] = [
    (MIDDLE_DOT, 0x8F),
    (BULLET, 0x90),
    (LIGHT_HORIZONTAL, 0x97),
    (HEAVY_HORIZONTAL, 0x99),
    (ONE_EIGHTH_BLOCK, 0xA3),
    (FULL_BLOCK, 0xD3),
];

/// Bytes accepted on decode only. Never produced by `encode`.
const DECODE_ALIASES: [(u8, char); 3] = [
    (0x98, LIGHT_HORIZONTAL),
    (0xA4, ONE_EIGHTH_BLOCK),
    (0xA5, ONE_EIGHTH_BLOCK),
];

const fn ascii_supported(byte: u8) -> bool {
    if byte < b' ' || byte > b'~' {
        return false;
    }
    let mut i = 0;
    while i < RESERVED_ASCII.len() {
        if RESERVED_ASCII[i] == byte {
            return false;
        }
        i += 1;
    }
    true
}

static CANONICAL: LazyLock<[Option<char>; 256]> = LazyLock::new(|| {
    let mut table = [None; 256];
    for byte in b' '..=b'~' {
        if ascii_supported(byte) {
            table[byte as usize] = Some(byte as char);
        }
    }
    for (glyph, byte) in GLYPHS {
        table[byte as usize] = Some(glyph);
    }
    table
});

static DECODE: LazyLock<[Option<char>; 256]> = LazyLock::new(|| {
    let mut table = *CANONICAL;
    for (byte, glyph) in DECODE_ALIASES {
        table[byte as usize] = Some(glyph);
    }
    table
});

static ENCODE: LazyLock<HashMap<char, u8>> = LazyLock::new(|| entries().collect());

/// Byte for a single character, if the sign can display it.
pub fn encode_char(c: char) -> Option<u8> {
    ENCODE.get(&c).copied()
}

/// Character for a single byte. Unmapped bytes yield [`REPLACEMENT`].
pub fn decode_byte(byte: u8) -> char {
    DECODE[byte as usize].unwrap_or(REPLACEMENT)
}

/// Returns true if `c` has a byte in the table.
pub fn is_supported(c: char) -> bool {
    ENCODE.contains_key(&c)
}

/// Returns true if `byte` is what `encode` produces for some character.
pub fn is_canonical(byte: u8) -> bool {
    CANONICAL[byte as usize].is_some()
}

/// Every character of `text` missing from the table, each listed once in
/// order of first appearance.
pub fn unsupported(text: &str) -> Vec<char> {
    let mut missing = Vec::new();
    for c in text.chars() {
        if !is_supported(c) && !missing.contains(&c) {
            missing.push(c);
        }
    }
    missing
}

/// Encode text into sign bytes.
///
/// Fails with [`CharsetError::UnsupportedCharacter`] naming every character
/// that has no byte, not just the first one found.
pub fn encode(text: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len());
    let mut missing = Vec::new();
    for c in text.chars() {
        match encode_char(c) {
            Some(byte) => out.push(byte),
            None if !missing.contains(&c) => missing.push(c),
            None => {}
        }
    }
    if missing.is_empty() {
        Ok(out)
    } else {
        Err(CharsetError::UnsupportedCharacter(missing))
    }
}

/// Decode sign bytes into text. Never fails.
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| decode_byte(b)).collect()
}

/// The canonical `(character, byte)` pairs in ascending byte order.
pub fn entries() -> impl Iterator<Item = (char, u8)> {
    CANONICAL
        .iter()
        .enumerate()
        .filter_map(|(byte, glyph)| glyph.map(|c| (c, byte as u8)))
}
