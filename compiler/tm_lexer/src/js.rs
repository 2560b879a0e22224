//! JavaScript-family lexer.
//!
//! The grammar has four lexer modes that resolve the two context-sensitive
//! spots of the language:
//!
//! | mode | `/` starts | `}` is |
//! |------|-----------|--------|
//! | [`State::Initial`] | a regular expression | a punctuator |
//! | [`State::Div`] | a division operator | a punctuator |
//! | [`State::Template`] | a regular expression | the rest of a template |
//! | [`State::TemplateDiv`] | a division operator | the rest of a template |
//!
//! [`lexer`] gives the raw interface where the caller selects the mode
//! itself; [`Tokenizer`] selects it from the tokens already seen.

mod tables;
mod token;
mod tokenizer;

use std::sync::OnceLock;

use tm_lexer_core::{ErrorHandler, Grammar};

pub use tables::TABLES;
pub use token::Token;
pub use tokenizer::Tokenizer;

/// Lexer modes of the JavaScript-family grammar.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum State {
    #[default]
    Initial = 0,
    Div = 1,
    Template = 2,
    TemplateDiv = 3,
}

impl State {
    /// Mode for the next token: division after an expression, and template
    /// continuation when a `}` would close a substitution.
    pub const fn select(after_expression: bool, in_template: bool) -> Self {
        match (after_expression, in_template) {
            (false, false) => State::Initial,
            (true, false) => State::Div,
            (false, true) => State::Template,
            (true, true) => State::TemplateDiv,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Core lexer instantiated for this grammar.
pub type Lexer<'a, H> = tm_lexer_core::Lexer<'a, Token, H>;

/// Process-wide grammar, built on first use.
pub fn grammar() -> &'static Grammar<Token> {
    static GRAMMAR: OnceLock<Grammar<Token>> = OnceLock::new();
    GRAMMAR.get_or_init(|| Grammar::new("js", TABLES))
}

/// Lexer over `source` in [`State::Initial`].
pub fn lexer<H: ErrorHandler>(source: &[u8], errors: H) -> Lexer<'_, H> {
    Lexer::new(grammar(), source, errors)
}

#[cfg(test)]
mod tests;
