//! Mica lexer core - low-level tokenization
//!
//! Standalone crate (zero mica_* dependencies) that turns source text into
//! raw `(tag, length)` tokens:
//! - [`SourceBuffer`]: sentinel-terminated, cache-line aligned source storage
//! - [`Cursor`]: zero-cost byte cursor with SIMD-accelerated skips
//! - [`RawScanner`]: allocation-free scanner producing [`RawToken`] values
//! - [`Span`]: byte-offset source ranges shared with the cooking layer
//!
//! # Two-Layer Design
//!
//! Raw tokens carry a tag and a byte length, nothing else. Decoding number
//! values, trimming string quotes, stamping line numbers, and reporting
//! errors all happen in the cooking layer (`mica_lexer`), which replays the
//! raw token stream against the original source text.
//!
//! Raw error conditions (unterminated string, malformed number, unexpected
//! character) are ordinary tags, not `Result::Err` -- the scanner never
//! fails, and the emitted tokens cover every byte of the input, trivia and
//! errors included.
//!
//! # Example
//!
//! ```
//! use mica_lexer_core::{tokenize, RawTag};
//!
//! let tokens = tokenize("1 + 2");
//! let tags: Vec<RawTag> = tokens.iter().map(|t| t.tag).collect();
//! assert_eq!(
//!     tags,
//!     [
//!         RawTag::Number,
//!         RawTag::Whitespace,
//!         RawTag::Plus,
//!         RawTag::Whitespace,
//!         RawTag::Number,
//!     ]
//! );
//! ```

mod cursor;
mod raw_scanner;
mod source_buffer;
mod span;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use span::Span;
pub use tag::{RawTag, RawToken};
