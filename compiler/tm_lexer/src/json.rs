//! JSON lexer.
//!
//! One lexer mode. Whitespace is insignificant; `null`, `true` and `false`
//! are keyword instances of the generic `id` rule, so other words such as
//! `nulls` lex as [`Token::Id`] and are left for the parser to reject.

mod tables;
mod token;
mod value;

use std::sync::OnceLock;

use tm_lexer_core::{ErrorHandler, Grammar};

pub use tables::TABLES;
pub use token::Token;
pub use value::Value;

/// Core lexer instantiated for this grammar.
pub type Lexer<'a, H> = tm_lexer_core::Lexer<'a, Token, H>;

/// Process-wide grammar, built on first use.
pub fn grammar() -> &'static Grammar<Token> {
    static GRAMMAR: OnceLock<Grammar<Token>> = OnceLock::new();
    GRAMMAR.get_or_init(|| Grammar::new("json", TABLES))
}

pub fn lexer<H: ErrorHandler>(source: &[u8], errors: H) -> Lexer<'_, H> {
    Lexer::new(grammar(), source, errors)
}

/// Semantic value of the last token, if it is a scalar.
pub fn value<H: ErrorHandler>(lexer: &Lexer<'_, H>) -> Option<Value> {
    lexer.value()
}
