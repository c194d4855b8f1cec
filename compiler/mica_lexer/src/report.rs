//! Error reporting interface.
//!
//! The scanner neither prints nor ranks errors; it hands each
//! [`LexError`] to an [`ErrorSink`] supplied by the caller. A plain
//! `Vec<LexError>` is the usual sink for batch scanning, and an
//! interactive driver can implement the trait to print diagnostics as
//! they arrive.

use crate::lex_error::LexError;

/// Receives lexical errors as the scanner detects them.
///
/// Errors arrive in source order, each exactly once, and reporting
/// never stops the scan.
pub trait ErrorSink {
    fn report(&mut self, error: LexError);
}

impl ErrorSink for Vec<LexError> {
    fn report(&mut self, error: LexError) {
        self.push(error);
    }
}

#[cfg(test)]
mod tests;
