//! Token types for the Mica lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact lexeme text it was
//! scanned from, the decoded literal value (for number and string
//! literals), and the 1-based line the lexeme starts on. Lexemes and
//! string contents borrow from the source string, so tokens are plain
//! `Copy` values and the token stream outlives every scanner structure.

use std::fmt;

/// A classified, line-stamped unit of lexical meaning.
#[derive(Clone, Copy, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// The exact source text this token was scanned from.
    ///
    /// Empty only for [`TokenKind::Eof`].
    pub lexeme: &'src str,
    /// Decoded value for number and string literals, `None` for
    /// everything else.
    pub literal: Option<Literal<'src>>,
    /// 1-based line on which the lexeme starts.
    pub line: u32,
}

impl<'src> Token<'src> {
    #[inline]
    #[must_use]
    pub fn new(
        kind: TokenKind,
        lexeme: &'src str,
        literal: Option<Literal<'src>>,
        line: u32,
    ) -> Self {
        Token {
            kind,
            lexeme,
            literal,
            line,
        }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ line {}", self.kind, self.lexeme, self.line)?;
        if let Some(literal) = self.literal {
            write!(f, " = {literal:?}")?;
        }
        Ok(())
    }
}

/// A literal value decoded from a lexeme.
///
/// String contents borrow from the source. The language has no escape
/// sequences, so the decoded string is always the direct slice between
/// the quotes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Literal<'src> {
    /// Numeric value. Every Mica number is a double-precision float.
    Number(f64),
    /// String contents without the surrounding quotes.
    String(&'src str),
}

/// Token kinds for Mica.
///
/// The language has no identifiers and no keywords; every token is
/// punctuation, an operator, a literal, or the end-of-input sentinel.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    // Single-character punctuation
    LeftParen,  // (
    RightParen, // )
    LeftBrace,  // {
    RightBrace, // }
    Comma,      // ,
    Dot,        // .
    Semicolon,  // ;

    // Arithmetic operators
    Minus, // -
    Plus,  // +
    Slash, // /
    Star,  // *

    // One- and two-character comparison operators
    Bang,         // !
    BangEqual,    // !=
    Equal,        // =
    EqualEqual,   // ==
    Greater,      // >
    GreaterEqual, // >=
    Less,         // <
    LessEqual,    // <=

    // Literals
    Number,
    String,

    /// End-of-input sentinel; always the last token of a scan.
    Eof,
}

impl TokenKind {
    /// Get a human-readable name for this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Semicolon => ";",
            Self::Minus => "-",
            Self::Plus => "+",
            Self::Slash => "/",
            Self::Star => "*",
            Self::Bang => "!",
            Self::BangEqual => "!=",
            Self::Equal => "=",
            Self::EqualEqual => "==",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Number => "number",
            Self::String => "string",
            Self::Eof => "end of file",
        }
    }

    /// Whether this kind carries a decoded literal value.
    #[must_use]
    pub const fn has_literal(self) -> bool {
        matches!(self, Self::Number | Self::String)
    }
}

#[cfg(test)]
mod tests;
