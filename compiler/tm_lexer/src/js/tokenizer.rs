//! Mode-tracking driver for the JavaScript-family lexer.
//!
//! A parser normally decides the lexer mode, because only it knows whether a
//! `/` can start an operand. [`Tokenizer`] approximates that decision from
//! the previous significant token. That guess is wrong only for a regular
//! expression right after the `)` of a statement head or the `}` of a block,
//! as in `if (x) /re/.test(y)`.

use std::iter::FusedIterator;

use smallvec::SmallVec;
use tm_lexer_core::ErrorHandler;

use super::{Lexer, State, Token};

/// Lexer plus the context needed to pick each token's mode.
pub struct Tokenizer<'a, H> {
    lexer: Lexer<'a, H>,
    /// Last token ended an expression, so `/` means division.
    after_expression: bool,
    /// One entry per open brace: `true` for a template substitution `${`.
    braces: SmallVec<[bool; 16]>,
    done: bool,
}

impl<'a, H: ErrorHandler> Tokenizer<'a, H> {
    pub fn new(source: &'a [u8], errors: H) -> Self {
        Tokenizer {
            lexer: super::lexer(source, errors),
            after_expression: false,
            braces: SmallVec::new(),
            done: false,
        }
    }

    /// Mode the next token will be scanned in.
    pub fn mode(&self) -> State {
        let in_template = self.braces.last() == Some(&true);
        State::select(self.after_expression, in_template)
    }

    /// Scan the next significant token in the mode chosen by its context.
    pub fn next_token(&mut self) -> Token {
        let mode = self.mode();
        if mode.index() != self.lexer.state() {
            let selected = self.lexer.set_state(mode.index());
            debug_assert!(selected.is_ok(), "js grammar lacks mode {mode:?}: {selected:?}");
        }

        let kind = self.lexer.next_token();
        match kind {
            Token::LBrace => self.braces.push(false),
            Token::TemplateHead => {
                self.braces.push(true);
                tracing::trace!(depth = self.braces.len(), "template substitution");
            }
            Token::RBrace | Token::TemplateTail => {
                self.braces.pop();
            }
            _ => {}
        }
        self.after_expression = kind.ends_expression();
        kind
    }

    /// Number of open braces and template substitutions.
    pub fn depth(&self) -> usize {
        self.braces.len()
    }

    /// The underlying lexer, positioned after the last token.
    pub fn lexer(&self) -> &Lexer<'a, H> {
        &self.lexer
    }

    pub fn into_lexer(self) -> Lexer<'a, H> {
        self.lexer
    }
}

impl<'a, H: ErrorHandler> Iterator for Tokenizer<'a, H> {
    type Item = tm_lexer_core::Token<'a, Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.next_token() == Token::Eoi {
            self.done = true;
            return None;
        }
        Some(self.lexer.token())
    }
}

impl<H: ErrorHandler> FusedIterator for Tokenizer<'_, H> {}

#[cfg(test)]
mod tests;
