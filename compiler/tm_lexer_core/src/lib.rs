//! Table-driven lexer runtime.
//!
//! This crate is the grammar-independent half of every generated lexer. It
//! knows nothing about any particular language: a grammar is handed to it as
//! a [`LexerTables`] bundle (input classes, start states, a flat DFA action
//! table, rule-to-token map, keyword instances, insignificant rules) and the
//! runtime drives that automaton over a UTF-8 byte buffer.
//!
//! # Architecture
//!
//! ```text
//! &[u8] ──► Cursor ──► class ──► LexerTables::action ──► Action
//!                                                          │
//!            ErrorHandler ◄── LexError ◄── Lexer::next_token ◄┘
//!                                              │
//!                        Grammar (keywords, space rules) ──► K
//! ```
//!
//! - [`Cursor`] decodes one code point at a time, skipping (and reporting)
//!   malformed UTF-8 and stray byte order marks.
//! - [`Action`] is the decoded form of a raw table cell; the sign convention
//!   of the generated tables is interpreted in exactly one place.
//! - [`Lexer`] walks the automaton, restarts on insignificant tokens and
//!   invalid input, and reclassifies identifiers through the keyword table.
//! - [`ErrorHandler`] receives every anomaly as a [`LexError`] value. Lexing
//!   never fails; it always makes progress until end of input.
//!
//! Grammars are immutable and `Sync`: build one [`Grammar`] per language
//! (typically in a `OnceLock`) and share it between any number of lexers.

mod action;
mod cursor;
mod error;
mod grammar;
mod keywords;
mod lexer;
mod span;
mod tables;

#[cfg(test)]
mod test_grammar;

pub use action::Action;
pub use cursor::{Cursor, BOM};
pub use error::{ErrorHandler, IgnoreErrors, LexError, LexErrorKind, UnknownState};
pub use grammar::{Grammar, TokenKind};
pub use keywords::KeywordTable;
pub use lexer::{Lexer, Token, Tokens};
pub use span::Span;
pub use tables::LexerTables;

/// Re-exported so token text can be handled without a direct `bstr` dependency.
pub use bstr::{BStr, ByteSlice};
