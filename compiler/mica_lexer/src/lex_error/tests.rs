use super::*;

// === Factory constructors ===

#[test]
fn unterminated_string_fills_fields() {
    let error = LexError::unterminated_string(Span::new(0, 13), 1);
    assert_eq!(error.span, Span::new(0, 13));
    assert_eq!(error.line, 1);
    assert_eq!(error.kind, LexErrorKind::UnterminatedString);
}

#[test]
fn malformed_number_fills_fields() {
    let error = LexError::malformed_number(Span::new(4, 7), 2);
    assert_eq!(error.span, Span::new(4, 7));
    assert_eq!(error.line, 2);
    assert_eq!(error.kind, LexErrorKind::MalformedNumber);
}

#[test]
fn unexpected_character_captures_char() {
    let error = LexError::unexpected_character(Span::new(0, 1), 1, '@');
    assert_eq!(error.kind, LexErrorKind::UnexpectedCharacter { ch: '@' });
}

// === Display ===

#[test]
fn display_unterminated_string() {
    let error = LexError::unterminated_string(Span::new(0, 5), 3);
    assert_eq!(error.to_string(), "[line 3] error: unterminated string literal");
}

#[test]
fn display_malformed_number() {
    let error = LexError::malformed_number(Span::new(0, 3), 1);
    assert_eq!(
        error.to_string(),
        "[line 1] error: expected a digit after the decimal point"
    );
}

#[test]
fn display_unexpected_character() {
    let error = LexError::unexpected_character(Span::new(0, 1), 1, '@');
    assert_eq!(error.to_string(), "[line 1] error: unexpected character `@`");
}

#[test]
fn display_escapes_unprintable_characters() {
    let nul = LexError::unexpected_character(Span::new(0, 1), 1, '\0');
    assert_eq!(nul.kind.to_string(), r"unexpected character `\u{0}`");

    let del = LexErrorKind::UnexpectedCharacter { ch: '\u{7f}' };
    assert_eq!(del.to_string(), r"unexpected character `\u{7f}`");
}

#[test]
fn display_escapes_non_ascii_characters() {
    let kind = LexErrorKind::UnexpectedCharacter { ch: 'é' };
    assert_eq!(kind.to_string(), r"unexpected character `\u{e9}`");
}

// === Value semantics ===

#[test]
fn errors_with_same_fields_are_equal() {
    let a = LexError::malformed_number(Span::new(0, 3), 1);
    let b = LexError::malformed_number(Span::new(0, 3), 1);
    assert_eq!(a, b);
}

#[test]
fn errors_with_different_lines_are_distinct() {
    let a = LexError::unterminated_string(Span::new(0, 5), 1);
    let b = LexError::unterminated_string(Span::new(0, 5), 2);
    assert_ne!(a, b);
}

#[test]
fn error_is_copy() {
    let error = LexError::malformed_number(Span::new(0, 3), 1);
    let copy = error;
    assert_eq!(error, copy);
}
