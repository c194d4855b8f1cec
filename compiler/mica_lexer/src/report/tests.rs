use super::*;
use crate::lex_error::LexErrorKind;
use mica_lexer_core::Span;

// === Vec sink ===

#[test]
fn vec_sink_collects_in_order() {
    let mut sink: Vec<LexError> = Vec::new();
    sink.report(LexError::malformed_number(Span::new(0, 3), 1));
    sink.report(LexError::unexpected_character(Span::new(4, 5), 1, '@'));

    assert_eq!(sink.len(), 2);
    assert_eq!(sink[0].kind, LexErrorKind::MalformedNumber);
    assert_eq!(sink[1].kind, LexErrorKind::UnexpectedCharacter { ch: '@' });
}

// === Custom sinks ===

/// Sink that renders each error the way a command-line driver would.
struct PrintingSink {
    rendered: Vec<String>,
}

impl ErrorSink for PrintingSink {
    fn report(&mut self, error: LexError) {
        self.rendered.push(error.to_string());
    }
}

#[test]
fn custom_sink_sees_line_and_message() {
    let mut sink = PrintingSink { rendered: Vec::new() };
    sink.report(LexError::unterminated_string(Span::new(0, 5), 7));

    assert_eq!(
        sink.rendered,
        vec!["[line 7] error: unterminated string literal".to_string()]
    );
}

/// Sink that only counts, discarding the errors themselves.
struct CountingSink {
    count: usize,
}

impl ErrorSink for CountingSink {
    fn report(&mut self, _error: LexError) {
        self.count += 1;
    }
}

#[test]
fn sinks_need_not_retain_errors() {
    let mut sink = CountingSink { count: 0 };
    sink.report(LexError::malformed_number(Span::new(0, 3), 1));
    sink.report(LexError::malformed_number(Span::new(4, 7), 1));
    assert_eq!(sink.count, 2);
}
