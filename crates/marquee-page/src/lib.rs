//! Pages for the marquee LED sign: notation and byte layout.
//!
//! A [`Page`] is one screen of text with an entry animation and a delay. It
//! moves between three forms:
//!
//! - notation, e.g. `V40^12:34 FUNKYTOWN~5_Limited Express` ([`Page::parse`],
//!   `Display`)
//! - the structured value itself
//! - the sign's byte layout ([`Page::to_bytes`], [`Page::from_bytes`])
//!
//! Building a transmission out of several pages, and wrapping bytes in a
//! checksummed envelope, is left to callers; [`Page::encode_into`] appends to
//! a shared buffer for that purpose.

pub mod animation;
pub mod codec;
pub mod error;
pub mod grammar;
pub mod page;

pub use animation::AnimationKind;
pub use codec::{HEADER_SIZE, JUSTIFY_ESCAPE, LINE_ADVANCE, LINE_SEPARATOR, RIGHT_JUSTIFY};
pub use error::{PageError, Result};
pub use grammar::{PageDefaults, DEFAULT_DELAY, SEPARATOR};
pub use page::Page;
