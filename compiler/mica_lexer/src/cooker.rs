//! Token cooking layer.
//!
//! Transforms `(RawTag, len)` pairs from the raw scanner into
//! line-stamped [`Token`] values with decoded literals.
//!
//! # Architecture
//!
//! The cooker sits between the raw scanner (`mica_lexer_core`) and the
//! consumer of the token stream:
//!
//! ```text
//! source → RawScanner → (RawTag, len) → TokenCooker → Token
//! ```
//!
//! Each `RawTag` category has a dedicated cooking path:
//! - **Operators/delimiters**: Direct 1:1 mapping, lexeme sliced from source
//! - **Numbers**: Parse to `f64`
//! - **Strings**: Trim quotes (the language has no escapes)
//! - **Trivia**: Dropped; newlines advance the line counter
//! - **Errors**: Reported to the caller's [`ErrorSink`], no token emitted
//!
//! Lexemes are sliced from the original `&str`, not the padded scan
//! buffer, so the returned tokens are independent of every scanner
//! structure.

use mica_lexer_core::{RawTag, Span};

use crate::lex_error::LexError;
use crate::report::ErrorSink;
use crate::token::{Literal, Token, TokenKind};

/// Cooks raw tokens into line-stamped [`Token`] values.
///
/// Stateless with respect to individual tokens apart from the running
/// line counter. Errors go straight to the caller's sink.
pub(crate) struct TokenCooker<'src, 'sink> {
    source: &'src str,
    /// 1-based line of the next uncooked offset.
    line: u32,
    sink: &'sink mut dyn ErrorSink,
}

impl<'src, 'sink> TokenCooker<'src, 'sink> {
    /// Create a new cooker for the given source.
    pub(crate) fn new(source: &'src str, sink: &'sink mut dyn ErrorSink) -> Self {
        Self {
            source,
            line: 1,
            sink,
        }
    }

    /// Cook a single raw token at `offset` into a [`Token`].
    ///
    /// Returns `None` for trivia and for error lexemes, which are
    /// reported to the sink instead of entering the token stream.
    pub(crate) fn cook(&mut self, tag: RawTag, offset: u32, len: u32) -> Option<Token<'src>> {
        match tag {
            // === Trivia ===
            RawTag::Whitespace | RawTag::LineComment => None,
            RawTag::Newline => {
                self.line += 1;
                None
            }

            // === Literals ===
            RawTag::Number => Some(self.cook_number(offset, len)),
            RawTag::String => Some(self.cook_string(offset, len)),

            // === Operators ===
            RawTag::Bang => Some(self.plain(TokenKind::Bang, offset, len)),
            RawTag::BangEqual => Some(self.plain(TokenKind::BangEqual, offset, len)),
            RawTag::Equal => Some(self.plain(TokenKind::Equal, offset, len)),
            RawTag::EqualEqual => Some(self.plain(TokenKind::EqualEqual, offset, len)),
            RawTag::Greater => Some(self.plain(TokenKind::Greater, offset, len)),
            RawTag::GreaterEqual => Some(self.plain(TokenKind::GreaterEqual, offset, len)),
            RawTag::Less => Some(self.plain(TokenKind::Less, offset, len)),
            RawTag::LessEqual => Some(self.plain(TokenKind::LessEqual, offset, len)),
            RawTag::Minus => Some(self.plain(TokenKind::Minus, offset, len)),
            RawTag::Plus => Some(self.plain(TokenKind::Plus, offset, len)),
            RawTag::Slash => Some(self.plain(TokenKind::Slash, offset, len)),
            RawTag::Star => Some(self.plain(TokenKind::Star, offset, len)),

            // === Delimiters ===
            RawTag::LeftParen => Some(self.plain(TokenKind::LeftParen, offset, len)),
            RawTag::RightParen => Some(self.plain(TokenKind::RightParen, offset, len)),
            RawTag::LeftBrace => Some(self.plain(TokenKind::LeftBrace, offset, len)),
            RawTag::RightBrace => Some(self.plain(TokenKind::RightBrace, offset, len)),
            RawTag::Comma => Some(self.plain(TokenKind::Comma, offset, len)),
            RawTag::Dot => Some(self.plain(TokenKind::Dot, offset, len)),
            RawTag::Semicolon => Some(self.plain(TokenKind::Semicolon, offset, len)),

            // === Errors ===
            RawTag::UnterminatedString => {
                // The raw token runs to end of input. The error is
                // reported at the line where scanning gave up, past any
                // interior newlines.
                self.line += count_newlines(self.lexeme(offset, len));
                self.sink
                    .report(LexError::unterminated_string(span(offset, len), self.line));
                None
            }
            RawTag::MalformedNumber => {
                self.sink
                    .report(LexError::malformed_number(span(offset, len), self.line));
                None
            }
            RawTag::Unexpected => {
                let ch = self
                    .lexeme(offset, len)
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                self.sink
                    .report(LexError::unexpected_character(span(offset, len), self.line, ch));
                None
            }

            RawTag::Eof => {
                debug_assert!(false, "Eof never reaches cook(); the driver emits eof_token()");
                None
            }
        }
    }

    /// The end-of-input sentinel, stamped with the final line.
    pub(crate) fn eof_token(&self) -> Token<'src> {
        Token::new(TokenKind::Eof, "", None, self.line)
    }

    /// Cook an operator or delimiter with no literal payload.
    fn plain(&self, kind: TokenKind, offset: u32, len: u32) -> Token<'src> {
        Token::new(kind, self.lexeme(offset, len), None, self.line)
    }

    fn cook_number(&self, offset: u32, len: u32) -> Token<'src> {
        let lexeme = self.lexeme(offset, len);
        // Raw number lexemes are `digits` or `digits.digits`, which f64
        // parsing always accepts; oversized values come back as
        // infinity, not as a parse failure.
        let value = lexeme.parse::<f64>().unwrap_or(f64::INFINITY);
        Token::new(
            TokenKind::Number,
            lexeme,
            Some(Literal::Number(value)),
            self.line,
        )
    }

    fn cook_string(&mut self, offset: u32, len: u32) -> Token<'src> {
        let lexeme = self.lexeme(offset, len);
        // Trim the delimiting quotes. No escape processing: the
        // contents are a direct source slice.
        let contents = &lexeme[1..lexeme.len() - 1];
        let token = Token::new(
            TokenKind::String,
            lexeme,
            Some(Literal::String(contents)),
            self.line,
        );
        // Strings may span lines. The token keeps its starting line;
        // the counter catches up past the interior newlines.
        self.line += count_newlines(lexeme);
        token
    }

    /// Slice the lexeme for a raw token out of the original source.
    ///
    /// Every raw token boundary is a `char` boundary: the scanner
    /// splits on ASCII bytes and consumes unexpected characters whole,
    /// so the indexing below cannot trip a boundary check.
    fn lexeme(&self, offset: u32, len: u32) -> &'src str {
        &self.source[span(offset, len).to_range()]
    }
}

/// Build a span from a raw token's offset and length.
fn span(offset: u32, len: u32) -> Span {
    Span::new(offset, offset + len)
}

/// Count `\n` bytes in a lexeme, for line accounting across multi-line
/// strings.
#[allow(
    clippy::cast_possible_truncation,
    reason = "newline count is bounded by the lexeme length, which fits in u32"
)]
fn count_newlines(lexeme: &str) -> u32 {
    lexeme.bytes().filter(|&b| b == b'\n').count() as u32
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
