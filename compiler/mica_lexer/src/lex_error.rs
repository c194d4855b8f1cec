//! Lexer error types.
//!
//! Errors are plain data: WHERE (`span` and `line`) plus WHAT (`kind`).
//! The scanner never aborts on one. Each error is handed to the caller's
//! [`ErrorSink`](crate::report::ErrorSink) exactly once and scanning
//! resumes at the next character, so a single pass reports every fault
//! in the input.

use std::fmt;

use mica_lexer_core::Span;

/// A lexical error with enough context to render a diagnostic.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// WHERE the error occurred, as byte offsets into the source.
    pub span: Span,
    /// 1-based line on which the error was detected.
    ///
    /// For unterminated strings this is the line where scanning gave up,
    /// which may be past the opening quote's line.
    pub line: u32,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexical error occurred.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// Missing closing `"` for a string literal before end of input.
    UnterminatedString,
    /// Decimal point with no digit after it (e.g. `12.` at the end of a
    /// number literal).
    MalformedNumber,
    /// A character that starts no recognized lexeme class.
    UnexpectedCharacter { ch: char },
}

impl LexError {
    /// Create an unterminated string error.
    #[cold]
    pub fn unterminated_string(span: Span, line: u32) -> Self {
        Self {
            span,
            line,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    /// Create a malformed number error.
    #[cold]
    pub fn malformed_number(span: Span, line: u32) -> Self {
        Self {
            span,
            line,
            kind: LexErrorKind::MalformedNumber,
        }
    }

    /// Create an unexpected character error.
    #[cold]
    pub fn unexpected_character(span: Span, line: u32, ch: char) -> Self {
        Self {
            span,
            line,
            kind: LexErrorKind::UnexpectedCharacter { ch },
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] error: {}", self.line, self.kind)
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString => f.write_str("unterminated string literal"),
            Self::MalformedNumber => f.write_str("expected a digit after the decimal point"),
            Self::UnexpectedCharacter { ch } => {
                write!(f, "unexpected character `{}`", ch.escape_default())
            }
        }
    }
}

#[cfg(test)]
mod tests;
