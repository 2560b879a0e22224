use pretty_assertions::assert_eq;
use tm_lexer_core::{ByteSlice, TokenKind};

use super::Token;
use crate::js::TABLES;

#[test]
fn one_byte_tag() {
    assert_eq!(std::mem::size_of::<Token>(), 1);
}

#[test]
fn rule_order_follows_enum_order() {
    for (rule, &kind) in TABLES.rule_token.iter().enumerate() {
        assert_eq!(kind as usize, rule + 2, "rule {rule} is {kind:?}");
    }
}

#[test]
fn keyword_spellings_agree_with_table() {
    for &(spelling, rule) in TABLES.keywords {
        let kind = TABLES.rule_token[usize::from(rule)];
        assert!(kind.is_keyword(), "{kind:?}");
        assert_eq!(kind.lexeme(), Some(spelling));
    }
}

#[test]
fn lexemes() {
    assert_eq!(Token::Function.lexeme(), Some("function"));
    assert_eq!(Token::Instanceof.lexeme(), Some("instanceof"));
    assert_eq!(Token::DotDotDot.lexeme(), Some("..."));
    assert_eq!(Token::GtGtGtAssign.lexeme(), Some(">>>="));
    assert_eq!(Token::QuestDot.lexeme(), Some("?."));
    assert_eq!(Token::Identifier.lexeme(), None);
    assert_eq!(Token::NumericLiteral.lexeme(), None);
    assert_eq!(Token::Eoi.lexeme(), None);
}

#[test]
fn categories() {
    assert!(Token::Break.is_keyword());
    assert!(Token::Target.is_keyword());
    assert!(!Token::Identifier.is_keyword());
    assert!(!Token::LBrace.is_keyword());

    assert!(Token::LBrace.is_punctuator());
    assert!(Token::QuestQuestAssign.is_punctuator());
    assert!(!Token::NumericLiteral.is_punctuator());

    assert!(Token::MultiLineComment.is_space());
    assert!(!Token::Identifier.is_space());

    assert!(Token::TemplateMiddle.is_template());
    assert!(!Token::StringLiteral.is_template());
}

#[test]
fn division_context() {
    for kind in [
        Token::Identifier,
        Token::RParen,
        Token::RBrack,
        Token::NumericLiteral,
        Token::This,
    ] {
        assert!(kind.ends_expression(), "{kind:?}");
    }
    for kind in [Token::Assign, Token::LParen, Token::Return, Token::Comma] {
        assert!(!kind.ends_expression(), "{kind:?}");
    }
}

#[test]
fn numeric_values() {
    let value = |text: &str| Token::NumericLiteral.value(text.as_bytes().as_bstr());
    assert_eq!(value("42"), Some(42.0));
    assert_eq!(value("1.5e-3"), Some(0.0015));
    assert_eq!(value(".5"), Some(0.5));
    assert_eq!(value("5."), Some(5.0));
    assert_eq!(value("0x1F"), Some(31.0));
    assert_eq!(value("0XfF"), Some(255.0));
    assert_eq!(value("0x"), None);
    assert_eq!(Token::Identifier.value(b"x".as_bstr()), None);
}
