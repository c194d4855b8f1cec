use super::*;

// === TokenKind names ===

#[test]
fn name_returns_symbol_for_punctuation() {
    assert_eq!(TokenKind::LeftParen.name(), "(");
    assert_eq!(TokenKind::RightParen.name(), ")");
    assert_eq!(TokenKind::LeftBrace.name(), "{");
    assert_eq!(TokenKind::RightBrace.name(), "}");
    assert_eq!(TokenKind::Comma.name(), ",");
    assert_eq!(TokenKind::Dot.name(), ".");
    assert_eq!(TokenKind::Semicolon.name(), ";");
}

#[test]
fn name_returns_symbol_for_operators() {
    assert_eq!(TokenKind::Minus.name(), "-");
    assert_eq!(TokenKind::Plus.name(), "+");
    assert_eq!(TokenKind::Slash.name(), "/");
    assert_eq!(TokenKind::Star.name(), "*");
    assert_eq!(TokenKind::Bang.name(), "!");
    assert_eq!(TokenKind::BangEqual.name(), "!=");
    assert_eq!(TokenKind::Equal.name(), "=");
    assert_eq!(TokenKind::EqualEqual.name(), "==");
    assert_eq!(TokenKind::Greater.name(), ">");
    assert_eq!(TokenKind::GreaterEqual.name(), ">=");
    assert_eq!(TokenKind::Less.name(), "<");
    assert_eq!(TokenKind::LessEqual.name(), "<=");
}

#[test]
fn name_returns_word_for_literals_and_eof() {
    assert_eq!(TokenKind::Number.name(), "number");
    assert_eq!(TokenKind::String.name(), "string");
    assert_eq!(TokenKind::Eof.name(), "end of file");
}

// === Literal classification ===

#[test]
fn literal_kinds() {
    assert!(TokenKind::Number.has_literal());
    assert!(TokenKind::String.has_literal());

    assert!(!TokenKind::Plus.has_literal());
    assert!(!TokenKind::LeftParen.has_literal());
    assert!(!TokenKind::Eof.has_literal());
}

// === Token construction ===

#[test]
fn token_new_stores_fields() {
    let token = Token::new(
        TokenKind::Number,
        "12.5",
        Some(Literal::Number(12.5)),
        3,
    );
    assert_eq!(token.kind, TokenKind::Number);
    assert_eq!(token.lexeme, "12.5");
    assert_eq!(token.literal, Some(Literal::Number(12.5)));
    assert_eq!(token.line, 3);
}

#[test]
fn token_is_copy() {
    let token = Token::new(TokenKind::Plus, "+", None, 1);
    let copy = token;
    assert_eq!(token, copy);
}

#[test]
fn string_literal_borrows_content() {
    let source = "\"hello\"";
    let token = Token::new(
        TokenKind::String,
        source,
        Some(Literal::String(&source[1..6])),
        1,
    );
    assert_eq!(token.literal, Some(Literal::String("hello")));
}

#[test]
fn literal_equality_is_by_value() {
    assert_eq!(Literal::Number(1.0), Literal::Number(1.0));
    assert_ne!(Literal::Number(1.0), Literal::Number(2.0));
    assert_ne!(Literal::String("a"), Literal::String("b"));
    assert_ne!(Literal::Number(1.0), Literal::String("1"));
}

// === Debug formatting ===

#[test]
fn debug_shows_kind_lexeme_and_line() {
    let token = Token::new(TokenKind::Plus, "+", None, 1);
    assert_eq!(format!("{token:?}"), "Plus \"+\" @ line 1");
}

#[test]
fn debug_appends_literal_when_present() {
    let token = Token::new(
        TokenKind::Number,
        "12.5",
        Some(Literal::Number(12.5)),
        3,
    );
    assert_eq!(format!("{token:?}"), "Number \"12.5\" @ line 3 = Number(12.5)");
}

#[test]
fn debug_eof_has_empty_lexeme() {
    let token = Token::new(TokenKind::Eof, "", None, 2);
    assert_eq!(format!("{token:?}"), "Eof \"\" @ line 2");
}
