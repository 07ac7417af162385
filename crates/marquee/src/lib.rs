//! Codecs for addressable scrolling LED signs.
//!
//! marquee turns human-written page notation into the byte layout a sign
//! displays, and validates the small control frames a sign sends back over
//! its serial link.
//!
//! # Crate Structure
//!
//! - [`charset`]: character/byte table (strict encode, lossy decode)
//! - [`page`]: page notation and page byte layout
//! - [`frame`]: keep-alive and acknowledgement frames, frame recognizer
//!
//! ```
//! use marquee::page::Page;
//!
//! let page: Page = "V35^_Hello World".parse().unwrap();
//! let bytes = page.to_bytes().unwrap();
//! assert_eq!(&bytes[..4], &[0x1D, 0x01, 35, 0x00]);
//! assert_eq!(Page::from_bytes(&bytes).unwrap(), page);
//! ```

/// Re-export character table types.
pub mod charset {
    pub use marquee_charset::*;
}

/// Re-export page types.
pub mod page {
    pub use marquee_page::*;
}

/// Re-export control frame types.
pub mod frame {
    pub use marquee_frame::*;
}
