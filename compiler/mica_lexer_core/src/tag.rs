//! Raw token tags and the length-only raw token.
//!
//! [`RawTag`] is a one-byte discriminant laid out in semantic ranges so the
//! numeric value alone tells you what class a token belongs to:
//!
//! - `0..=31`: variable-length literals
//! - `32..=79`: operators
//! - `80..=111`: delimiters
//! - `112..=239`: trivia (whitespace, newlines, comments)
//! - `240..=254`: scan errors
//! - `255`: end of file
//!
//! The raw scanner never looks at lexeme text beyond what it needs to find
//! token boundaries, so a [`RawToken`] is just a tag plus a byte length.
//! Offsets are recovered by summing lengths; text is recovered by slicing
//! the original source.

/// One-byte token tag produced by the raw scanner.
///
/// Discriminants are explicit and grouped into semantic ranges (see module
/// docs). Gaps within each range leave room for future tokens without
/// renumbering the existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // Literals: 0-31
    /// Numeric literal: digits with an optional fractional part (`123`, `12.5`).
    Number = 0,
    /// String literal including both quotes (`"hello"`). May span lines.
    String = 1,

    // Operators: 32-79
    /// `!`
    Bang = 32,
    /// `!=`
    BangEqual = 33,
    /// `=`
    Equal = 34,
    /// `==`
    EqualEqual = 35,
    /// `>`
    Greater = 36,
    /// `>=`
    GreaterEqual = 37,
    /// `<`
    Less = 38,
    /// `<=`
    LessEqual = 39,
    /// `-`
    Minus = 40,
    /// `+`
    Plus = 41,
    /// `/`
    Slash = 42,
    /// `*`
    Star = 43,

    // Delimiters: 80-111
    /// `(`
    LeftParen = 80,
    /// `)`
    RightParen = 81,
    /// `{`
    LeftBrace = 82,
    /// `}`
    RightBrace = 83,
    /// `,`
    Comma = 84,
    /// `.`
    Dot = 85,
    /// `;`
    Semicolon = 86,

    // Trivia: 112-239
    /// Run of spaces, tabs, and carriage returns.
    Whitespace = 112,
    /// A single `\n`. Scanned separately from whitespace because it
    /// advances the line counter.
    Newline = 113,
    /// `//` to end of line (newline not included).
    LineComment = 114,

    // Errors: 240-254
    /// String literal with no closing `"` before EOF.
    UnterminatedString = 240,
    /// Digits followed by `.` with no fractional digits (`12.` at EOF or
    /// before a non-digit).
    MalformedNumber = 241,
    /// A character with no place in the language (one full UTF-8 character).
    Unexpected = 242,

    // Control: 255
    /// End of file. Zero length, emitted forever once reached.
    Eof = 255,
}

impl RawTag {
    /// Fixed source text for tokens that always look the same.
    ///
    /// Returns `None` for variable-length tokens (literals, trivia runs,
    /// comments, errors) whose text must be sliced from the source.
    #[must_use]
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            RawTag::Bang => Some("!"),
            RawTag::BangEqual => Some("!="),
            RawTag::Equal => Some("="),
            RawTag::EqualEqual => Some("=="),
            RawTag::Greater => Some(">"),
            RawTag::GreaterEqual => Some(">="),
            RawTag::Less => Some("<"),
            RawTag::LessEqual => Some("<="),
            RawTag::Minus => Some("-"),
            RawTag::Plus => Some("+"),
            RawTag::Slash => Some("/"),
            RawTag::Star => Some("*"),
            RawTag::LeftParen => Some("("),
            RawTag::RightParen => Some(")"),
            RawTag::LeftBrace => Some("{"),
            RawTag::RightBrace => Some("}"),
            RawTag::Comma => Some(","),
            RawTag::Dot => Some("."),
            RawTag::Semicolon => Some(";"),
            RawTag::Newline => Some("\n"),
            _ => None,
        }
    }

    /// Human-readable description for diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RawTag::Number => "number literal",
            RawTag::String => "string literal",
            RawTag::Bang => "`!`",
            RawTag::BangEqual => "`!=`",
            RawTag::Equal => "`=`",
            RawTag::EqualEqual => "`==`",
            RawTag::Greater => "`>`",
            RawTag::GreaterEqual => "`>=`",
            RawTag::Less => "`<`",
            RawTag::LessEqual => "`<=`",
            RawTag::Minus => "`-`",
            RawTag::Plus => "`+`",
            RawTag::Slash => "`/`",
            RawTag::Star => "`*`",
            RawTag::LeftParen => "`(`",
            RawTag::RightParen => "`)`",
            RawTag::LeftBrace => "`{`",
            RawTag::RightBrace => "`}`",
            RawTag::Comma => "`,`",
            RawTag::Dot => "`.`",
            RawTag::Semicolon => "`;`",
            RawTag::Whitespace => "whitespace",
            RawTag::Newline => "newline",
            RawTag::LineComment => "line comment",
            RawTag::UnterminatedString => "unterminated string",
            RawTag::MalformedNumber => "malformed number",
            RawTag::Unexpected => "unexpected character",
            RawTag::Eof => "end of file",
        }
    }

    /// Returns `true` for tokens the cooking layer drops.
    ///
    /// Newlines are trivia here: nothing downstream consumes them as
    /// tokens, they only advance the line counter during cooking.
    #[must_use]
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            RawTag::Whitespace | RawTag::Newline | RawTag::LineComment
        )
    }

    /// Returns `true` for scan-error tags.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(
            self,
            RawTag::UnterminatedString | RawTag::MalformedNumber | RawTag::Unexpected
        )
    }
}

/// A raw token: tag plus byte length, nothing else.
///
/// 8 bytes total. The scanner hands these out in source order; consumers
/// track the running byte offset themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken {
    /// What kind of token this is.
    pub tag: RawTag,
    /// Length in bytes. Zero only for [`RawTag::Eof`].
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);
