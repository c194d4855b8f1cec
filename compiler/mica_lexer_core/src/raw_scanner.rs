//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It does not decode
//! numeric values, trim string quotes, or assign line numbers -- those are
//! deferred to the cooking layer.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns `RawToken { tag, len }`. The sentinel
//! byte (`0x00`) naturally dispatches to `eof()`.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free scanner.
///
/// Produces one token at a time as a `(tag, length)` pair.
/// Error conditions are encoded as `RawTag` variants, not as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(),
            b' ' | b'\t' | b'\r' => self.whitespace(start),
            b'\n' => self.newline(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.string(start),
            b'/' => self.slash_or_comment(start),
            b'!' => self.bang(start),
            b'=' => self.equal(start),
            b'<' => self.less(start),
            b'>' => self.greater(start),
            b'-' => self.single(start, RawTag::Minus),
            b'+' => self.single(start, RawTag::Plus),
            b'*' => self.single(start, RawTag::Star),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b',' => self.single(start, RawTag::Comma),
            b'.' => self.single(start, RawTag::Dot),
            b';' => self.single(start, RawTag::Semicolon),
            // Letters, control bytes, non-ASCII: nothing else starts a token
            // in this language (there are no identifiers or keywords).
            _ => self.unexpected(start),
        }
    }

    // ─── EOF ─────────────────────────────────────────────────────────────

    fn eof(&mut self) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            // Interior null byte -- one unexpected character, then keep going.
            let start = self.cursor.pos();
            self.cursor.advance();
            RawToken {
                tag: RawTag::Unexpected,
                len: self.cursor.pos() - start,
            }
        }
    }

    // ─── Whitespace & Newlines ───────────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        RawToken {
            tag: RawTag::Whitespace,
            len: self.cursor.pos() - start,
        }
    }

    fn newline(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        RawToken {
            tag: RawTag::Newline,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Comments ────────────────────────────────────────────────────────

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume first '/'
        if self.cursor.current() == b'/' {
            self.cursor.advance(); // consume second '/'
            // SIMD-accelerated scan to end of line; the newline is left for
            // the next token so line counting stays in one place.
            self.cursor.eat_until_newline_or_eof();
            RawToken {
                tag: RawTag::LineComment,
                len: self.cursor.pos() - start,
            }
        } else {
            RawToken {
                tag: RawTag::Slash,
                len: self.cursor.pos() - start,
            }
        }
    }

    // ─── Operators ───────────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    fn bang(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '!'
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            RawToken {
                tag: RawTag::BangEqual,
                len: self.cursor.pos() - start,
            }
        } else {
            RawToken {
                tag: RawTag::Bang,
                len: self.cursor.pos() - start,
            }
        }
    }

    fn equal(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '='
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            RawToken {
                tag: RawTag::EqualEqual,
                len: self.cursor.pos() - start,
            }
        } else {
            RawToken {
                tag: RawTag::Equal,
                len: self.cursor.pos() - start,
            }
        }
    }

    fn less(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '<'
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            RawToken {
                tag: RawTag::LessEqual,
                len: self.cursor.pos() - start,
            }
        } else {
            RawToken {
                tag: RawTag::Less,
                len: self.cursor.pos() - start,
            }
        }
    }

    fn greater(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '>'
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            RawToken {
                tag: RawTag::GreaterEqual,
                len: self.cursor.pos() - start,
            }
        } else {
            RawToken {
                tag: RawTag::Greater,
                len: self.cursor.pos() - start,
            }
        }
    }

    // ─── Numeric Literals ────────────────────────────────────────────────

    #[inline]
    fn number(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume first digit
        self.cursor.eat_while(|b| b.is_ascii_digit());

        // A dot directly after the integer digits commits to a fractional
        // part. With at least one digit following it the token is a valid
        // number; without one the dot is pulled into a malformed-number
        // token ("12." is an error, not Number then Dot). A second dot
        // never extends the token: "1.2.3" scans as 1.2, `.`, 3.
        if self.cursor.current() == b'.' {
            self.cursor.advance(); // consume '.'
            if self.cursor.current().is_ascii_digit() {
                self.cursor.eat_while(|b| b.is_ascii_digit());
            } else {
                return RawToken {
                    tag: RawTag::MalformedNumber,
                    len: self.cursor.pos() - start,
                };
            }
        }

        RawToken {
            tag: RawTag::Number,
            len: self.cursor.pos() - start,
        }
    }

    // ─── String Literals ─────────────────────────────────────────────────

    fn string(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume opening '"'
        // SIMD-accelerated skip: strings have no escapes, so the closing
        // quote is the only byte that can end one. Newlines and interior
        // nulls are ordinary content (strings may span lines).
        match self.cursor.skip_to_quote_or_eof() {
            b'"' => {
                self.cursor.advance(); // consume closing '"'
                RawToken {
                    tag: RawTag::String,
                    len: self.cursor.pos() - start,
                }
            }
            _ => RawToken {
                tag: RawTag::UnterminatedString,
                len: self.cursor.pos() - start,
            },
        }
    }

    // ─── Error tokens ────────────────────────────────────────────────────

    fn unexpected(&mut self, start: u32) -> RawToken {
        // Consume the full UTF-8 character, not just one byte: one error
        // per character, and the token stays on character boundaries so
        // slicing it back out of the source is valid.
        self.cursor.advance_char();
        RawToken {
            tag: RawTag::Unexpected,
            len: self.cursor.pos() - start,
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// Convenience function: tokenize a source string and collect all raw tokens.
///
/// Returns a `Vec<RawToken>` containing all tokens except the final `Eof`.
/// For streaming/iterator access, construct a `SourceBuffer` + `RawScanner`
/// directly.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor());
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        if tok.tag == RawTag::Eof {
            break;
        }
        tokens.push(tok);
    }
    tokens
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
