//! The automaton interpreter.
//!
//! [`Lexer::next_token`] restarts the DFA at the start state of the current
//! mode and feeds it one input class per code point until the table says to
//! accept, to stop, or that no transition exists. Insignificant rules and
//! invalid spans restart the walk internally, so every call returns either a
//! significant token or end of input.
//!
//! # End of Input
//!
//! End of input is sticky. Once it has been returned (cleanly, or after an
//! unterminated token was reported) the cursor sits at `source.len()` and
//! every later call returns the end-of-input kind with an empty span there,
//! without reporting anything.
//!
//! # Skipped Input
//!
//! Bytes the cursor skips (malformed UTF-8, stray byte order marks) are
//! reported once by the cursor and do not interrupt the match in progress:
//! a string literal with a bad byte inside is still one string literal. The
//! token's span covers the skipped bytes, its [`text`](Lexer::text) leaves
//! them out.
//!
//! # Invalid Input
//!
//! When the automaton has no transition, the partial match is reported as an
//! invalid token and the walk restarts at the code point that stopped it, so
//! `[1.]` still yields the closing bracket. Only when nothing was matched at
//! all is that code point consumed with the report.

use std::borrow::Cow;
use std::iter::FusedIterator;

use bstr::{BStr, BString, ByteSlice};

use crate::{
    Action, Cursor, ErrorHandler, Grammar, LexError, LexErrorKind, Span, TokenKind, UnknownState,
    BOM,
};

/// A produced token: kind plus location and text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'a, K> {
    pub kind: K,
    pub span: Span,
    /// 1-based line of the first byte.
    pub line: u32,
    /// Borrowed from the source unless the span covers skipped bytes.
    pub text: Cow<'a, BStr>,
}

impl<K: TokenKind> Token<'_, K> {
    /// Semantic value, decoded on demand from the token text.
    pub fn value(&self) -> Option<K::Value> {
        self.kind.value(&self.text)
    }
}

/// Table-driven lexer over one source buffer.
///
/// The error handler is owned; pass a closure to forward reports elsewhere,
/// or a `Vec<LexError>` and take it back with [`into_errors`].
///
/// [`into_errors`]: Lexer::into_errors
pub struct Lexer<'a, K: 'static, H> {
    grammar: &'a Grammar<K>,
    source: &'a [u8],
    cursor: Cursor<'a>,
    errors: H,
    /// Lexer mode; index into the grammar's start states.
    state: usize,

    // Last token
    kind: K,
    rule: Option<u16>,
    token_offset: usize,
    token_end: usize,
    token_line: u32,
    /// The last token's span covers bytes the cursor skipped.
    token_skipped: bool,
}

impl<'a, K: TokenKind, H: ErrorHandler> Lexer<'a, K, H> {
    /// Create a lexer positioned before the first token of `source`.
    ///
    /// Malformed code points at the very start are reported immediately.
    pub fn new(grammar: &'a Grammar<K>, source: &'a [u8], mut errors: H) -> Self {
        let cursor = Cursor::new(source, &mut errors);
        Lexer {
            grammar,
            source,
            cursor,
            errors,
            state: 0,
            kind: K::EOI,
            rule: None,
            token_offset: cursor.offset(),
            token_end: cursor.offset(),
            token_line: cursor.line(),
            token_skipped: false,
        }
    }

    /// Start over on a new buffer with the same grammar and handler.
    ///
    /// The mode goes back to `0`.
    pub fn reset(&mut self, source: &'a [u8]) {
        self.source = source;
        self.cursor = Cursor::new(source, &mut self.errors);
        self.state = 0;
        self.kind = K::EOI;
        self.rule = None;
        self.token_offset = self.cursor.offset();
        self.token_end = self.token_offset;
        self.token_line = self.cursor.line();
        self.token_skipped = false;
    }

    /// Scan the next significant token and return its kind.
    ///
    /// Returns `K::EOI` at end of input, and keeps returning it.
    pub fn next_token(&mut self) -> K {
        'restart: loop {
            self.token_offset = self.cursor.offset();
            self.token_line = self.cursor.line();
            let mut state = self.grammar.start_state(self.state).unwrap_or(0);
            let mut skipped = false;

            loop {
                let class = self.grammar.classify(self.cursor.ch());
                match self.grammar.action(state, class) {
                    Action::Shift(next) if class != 0 => {
                        let next_offset = self.cursor.scan_offset();
                        self.cursor.advance(&mut self.errors);
                        skipped |= self.cursor.offset() != next_offset;
                        state = usize::from(next);
                    }
                    Action::Accept(rule) => {
                        let end = self.cursor.offset();
                        let rule = self
                            .grammar
                            .resolve(rule, &self.source[self.token_offset..end]);
                        if self.grammar.is_space(rule) {
                            tracing::trace!(rule, start = self.token_offset, end, "skip");
                            continue 'restart;
                        }

                        let kind = self.grammar.token(rule);
                        self.kind = kind;
                        self.rule = Some(rule);
                        self.token_end = end;
                        self.token_skipped = skipped;
                        tracing::trace!(
                            ?kind,
                            rule,
                            start = self.token_offset,
                            end,
                            line = self.token_line,
                            "token"
                        );
                        return kind;
                    }
                    Action::EndOfInput => return self.end_of_input(),
                    // No transition, or a shift on class 0 that cannot consume
                    // anything.
                    _ if self.cursor.is_eoi() => return self.unexpected_end_of_input(),
                    _ => {
                        if self.cursor.offset() == self.token_offset {
                            self.cursor.advance(&mut self.errors);
                        }
                        self.report(LexErrorKind::InvalidToken, self.cursor.offset());
                        continue 'restart;
                    }
                }
            }
        }
    }

    /// Report the partial match up to end of input and settle there.
    ///
    /// A mode whose start state has no end-of-input action fails here with
    /// nothing matched. That is not reported: the empty span carries no
    /// input, and end of input must stay silent on every later call.
    #[cold]
    fn unexpected_end_of_input(&mut self) -> K {
        let end = self.cursor.offset();
        if end > self.token_offset {
            self.report(LexErrorKind::UnexpectedEndOfInput, end);
        }
        self.end_of_input()
    }

    fn end_of_input(&mut self) -> K {
        self.token_offset = self.cursor.offset();
        self.token_line = self.cursor.line();
        self.kind = K::EOI;
        self.rule = None;
        self.token_end = self.token_offset;
        self.token_skipped = false;
        K::EOI
    }

    /// Report `kind` over `[token_offset, end)`.
    fn report(&mut self, kind: LexErrorKind, end: usize) {
        let error = LexError::new(
            kind,
            self.token_line,
            self.token_offset,
            end - self.token_offset,
        );
        tracing::debug!(%error, "lex error");
        self.errors.report(error);
    }

    /// Kind of the last token.
    #[inline]
    pub fn kind(&self) -> K {
        self.kind
    }

    /// Start and end byte offsets of the last token.
    #[inline]
    pub fn pos(&self) -> (usize, usize) {
        (self.token_offset, self.token_end)
    }

    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.token_offset, self.token_end)
    }

    /// 1-based line of the first byte of the last token.
    #[inline]
    pub fn line(&self) -> u32 {
        self.token_line
    }

    /// Text of the last token, without any bytes the cursor skipped.
    ///
    /// Borrowed from the source unless the token spans skipped bytes.
    pub fn text(&self) -> Cow<'a, BStr> {
        let raw = self.raw_text();
        if !self.token_skipped {
            return Cow::Borrowed(raw);
        }
        let mut text = BString::default();
        for (start, end, ch) in raw.char_indices() {
            let unit = &raw[start..end];
            let malformed = ch == char::REPLACEMENT_CHARACTER && unit != "\u{FFFD}".as_bytes();
            if ch != BOM && !malformed {
                text.extend_from_slice(unit);
            }
        }
        Cow::Owned(text)
    }

    /// Source bytes under the last token's span, skipped bytes included.
    #[inline]
    pub fn raw_text(&self) -> &'a BStr {
        self.source[self.token_offset..self.token_end].as_bstr()
    }

    /// Rule that produced the last token, after keyword resolution. `None`
    /// for end of input.
    #[inline]
    pub fn rule(&self) -> Option<u16> {
        self.rule
    }

    /// The last token as a record.
    pub fn token(&self) -> Token<'a, K> {
        Token {
            kind: self.kind,
            span: self.span(),
            line: self.token_line,
            text: self.text(),
        }
    }

    /// Semantic value of the last token.
    pub fn value(&self) -> Option<K::Value> {
        self.kind.value(&self.text())
    }

    /// Current lexer mode.
    #[inline]
    pub fn state(&self) -> usize {
        self.state
    }

    /// Select the lexer mode used from the next token on.
    pub fn set_state(&mut self, state: usize) -> Result<(), UnknownState> {
        let count = self.grammar.mode_count();
        if state >= count {
            return Err(UnknownState {
                state,
                grammar: self.grammar.name(),
                count,
            });
        }
        if state != self.state {
            tracing::debug!(from = self.state, to = state, "lexer mode");
            self.state = state;
        }
        Ok(())
    }

    /// Iterate over the remaining significant tokens. Stops (without
    /// yielding) at end of input.
    pub fn tokens(&mut self) -> Tokens<'_, 'a, K, H> {
        Tokens {
            lexer: self,
            done: false,
        }
    }

    #[inline]
    pub fn grammar(&self) -> &'a Grammar<K> {
        self.grammar
    }

    #[inline]
    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    /// Scanning position: the code point after the last token.
    #[inline]
    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    #[inline]
    pub fn errors(&self) -> &H {
        &self.errors
    }

    #[inline]
    pub fn errors_mut(&mut self) -> &mut H {
        &mut self.errors
    }

    pub fn into_errors(self) -> H {
        self.errors
    }
}

/// Iterator over significant tokens, see [`Lexer::tokens`].
pub struct Tokens<'l, 'a, K: 'static, H> {
    lexer: &'l mut Lexer<'a, K, H>,
    done: bool,
}

impl<'a, K: TokenKind, H: ErrorHandler> Iterator for Tokens<'_, 'a, K, H> {
    type Item = Token<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.lexer.next_token() == K::EOI {
            self.done = true;
            return None;
        }
        Some(self.lexer.token())
    }
}

impl<K: TokenKind, H: ErrorHandler> FusedIterator for Tokens<'_, '_, K, H> {}
