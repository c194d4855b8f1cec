//! Mica lexer - literal decoding, line stamping, and error reporting.
//!
//! Turns source text into the complete token sequence a parser
//! consumes:
//!
//! - [`scan_tokens`] / [`scan`]: eager whole-input scanning
//! - [`Token`], [`TokenKind`], [`Literal`]: the cooked token types
//! - [`LexError`], [`LexErrorKind`]: lexical faults, routed to a
//!   caller-supplied [`ErrorSink`]
//!
//! The raw layer lives in `mica_lexer_core`; this crate cooks its
//! `(RawTag, len)` output into tokens that borrow their lexemes from
//! the original source string.
//!
//! # Example
//!
//! ```
//! use mica_lexer::{scan, TokenKind};
//!
//! let (tokens, errors) = scan("1 + 2.5");
//! assert!(errors.is_empty());
//!
//! let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Number, TokenKind::Plus, TokenKind::Number, TokenKind::Eof]
//! );
//! ```

mod cooker;
mod lex_error;
mod report;
mod token;

pub use lex_error::{LexError, LexErrorKind};
pub use mica_lexer_core::Span;
pub use report::ErrorSink;
pub use token::{Literal, Token, TokenKind};

use cooker::TokenCooker;
use mica_lexer_core::{RawScanner, RawTag, SourceBuffer};

/// Scan `source` into its complete token sequence.
///
/// Tokens appear in source order and the last one is always
/// [`TokenKind::Eof`] with an empty lexeme. Lexical faults go to `sink`
/// and never abort the scan, so faulty input still yields a usable (if
/// incomplete) token stream.
///
/// # Panics
///
/// Panics if `source` is larger than `u32::MAX` bytes.
pub fn scan_tokens<'src>(source: &'src str, sink: &mut dyn ErrorSink) -> Vec<Token<'src>> {
    let source_len = u32::try_from(source.len())
        .unwrap_or_else(|_| panic!("source file exceeds {} bytes", u32::MAX));

    let buffer = SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buffer.cursor());
    let mut cooker = TokenCooker::new(source, sink);
    let mut tokens = Vec::new();

    let mut offset = 0u32;
    loop {
        let raw = scanner.next_token();
        if raw.tag == RawTag::Eof {
            break;
        }
        if let Some(token) = cooker.cook(raw.tag, offset, raw.len) {
            tokens.push(token);
        }
        offset += raw.len;
    }
    debug_assert_eq!(offset, source_len, "raw tokens tile the source exactly");

    tokens.push(cooker.eof_token());
    tokens
}

/// Scan `source`, collecting errors into a `Vec`.
///
/// Convenience wrapper over [`scan_tokens`] for callers without a
/// custom [`ErrorSink`].
pub fn scan(source: &str) -> (Vec<Token<'_>>, Vec<LexError>) {
    let mut errors = Vec::new();
    let tokens = scan_tokens(source, &mut errors);
    (tokens, errors)
}
