//! Token kinds of the JSON grammar.

use tm_lexer_core::{BStr, TokenKind};

use super::value::{self, Value};

/// Token kind. Rule `n` of the generated tables produces the kind after
/// [`Token::Eoi`] at position `n`; rule `0` is never accepted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Token {
    InvalidToken,
    Eoi,
    LBrace,
    RBrace,
    LBrack,
    RBrack,
    Colon,
    Comma,
    Space,
    JsonString,
    JsonNumber,
    /// Any identifier-shaped word other than the three literals.
    Id,
    Null,
    True,
    False,
}

impl Token {
    /// Fixed spelling of punctuation and literal names.
    pub const fn lexeme(self) -> Option<&'static str> {
        Some(match self {
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::LBrack => "[",
            Token::RBrack => "]",
            Token::Colon => ":",
            Token::Comma => ",",
            Token::Null => "null",
            Token::True => "true",
            Token::False => "false",
            _ => return None,
        })
    }

    /// Tokens that form a complete JSON value on their own.
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            Token::JsonString | Token::JsonNumber | Token::Null | Token::True | Token::False
        )
    }
}

impl TokenKind for Token {
    const EOI: Self = Token::Eoi;

    type Value = Value;

    fn value(self, text: &BStr) -> Option<Value> {
        match self {
            Token::JsonString => value::unquote(text).map(Value::String),
            Token::JsonNumber => value::number(text).map(Value::Number),
            Token::Null => Some(Value::Null),
            Token::True => Some(Value::Bool(true)),
            Token::False => Some(Value::Bool(false)),
            _ => None,
        }
    }
}
