//! Error reporting bridge.
//!
//! Every anomaly the runtime meets is recoverable: the cursor skips malformed
//! code points, the lexer skips invalid tokens, and unexpected end of input
//! settles into returning the end-of-input token. None of these are `Err`
//! values; they are [`LexError`] diagnostics handed synchronously to the
//! caller's [`ErrorHandler`], zero or more times per `next_token()` call.
//!
//! The only `Result` in the public API is [`UnknownState`], returned when a
//! caller selects a lexer mode the grammar does not have.

use thiserror::Error;

use crate::Span;

/// What went wrong.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum LexErrorKind {
    /// A byte sequence that is not valid UTF-8. The offending unit is skipped.
    #[error("illegal UTF-8 encoding")]
    IllegalEncoding,
    /// U+FEFF anywhere but the very start of the buffer. Skipped.
    #[error("illegal byte order mark")]
    IllegalByteOrderMark,
    /// No transition for the current input; the scanned span is skipped.
    #[error("invalid token")]
    InvalidToken,
    /// Input ended in the middle of a token (unterminated string, comment).
    #[error("Unexpected end of input reached")]
    UnexpectedEndOfInput,
}

impl LexErrorKind {
    /// Diagnostic message, identical to the `Display` text.
    pub const fn message(self) -> &'static str {
        match self {
            LexErrorKind::IllegalEncoding => "illegal UTF-8 encoding",
            LexErrorKind::IllegalByteOrderMark => "illegal byte order mark",
            LexErrorKind::InvalidToken => "invalid token",
            LexErrorKind::UnexpectedEndOfInput => "Unexpected end of input reached",
        }
    }
}

/// A located diagnostic.
///
/// `line` is 1-based; `offset` and `len` are in bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{kind} at line {line} (bytes {offset}..+{len})")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: u32,
    pub offset: usize,
    pub len: usize,
}

impl LexError {
    pub const fn new(kind: LexErrorKind, line: u32, offset: usize, len: usize) -> Self {
        LexError {
            kind,
            line,
            offset,
            len,
        }
    }

    #[inline]
    pub const fn span(&self) -> Span {
        Span::new(self.offset, self.offset + self.len)
    }

    /// The `(line, offset, len, message)` tuple of a classic lexer callback.
    pub const fn parts(&self) -> (u32, usize, usize, &'static str) {
        (self.line, self.offset, self.len, self.kind.message())
    }
}

/// Receiver of lexer diagnostics.
///
/// Implemented for closures, for `Vec<LexError>` (collects everything), and
/// for [`IgnoreErrors`].
pub trait ErrorHandler {
    fn report(&mut self, error: LexError);
}

impl<F> ErrorHandler for F
where
    F: FnMut(LexError),
{
    #[inline]
    fn report(&mut self, error: LexError) {
        self(error);
    }
}

impl ErrorHandler for Vec<LexError> {
    #[inline]
    fn report(&mut self, error: LexError) {
        self.push(error);
    }
}

/// Handler that drops every diagnostic.
#[derive(Copy, Clone, Debug, Default)]
pub struct IgnoreErrors;

impl ErrorHandler for IgnoreErrors {
    #[inline]
    fn report(&mut self, _: LexError) {}
}

/// A lexer mode outside the grammar's start-state table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("lexer state {state} does not exist in grammar `{grammar}` ({count} states)")]
pub struct UnknownState {
    pub state: usize,
    pub grammar: &'static str,
    pub count: usize,
}

#[cfg(test)]
mod tests;
