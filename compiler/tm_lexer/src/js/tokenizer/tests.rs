use pretty_assertions::assert_eq;
use tm_lexer_core::{IgnoreErrors, LexError};

use super::Tokenizer;
use crate::js::{State, Token};

fn kinds(source: &str) -> Vec<Token> {
    Tokenizer::new(source.as_bytes(), IgnoreErrors)
        .map(|t| t.kind)
        .collect()
}

#[test]
fn division_after_operands() {
    assert_eq!(
        kinds("a / b / c"),
        vec![
            Token::Identifier,
            Token::Div,
            Token::Identifier,
            Token::Div,
            Token::Identifier,
        ]
    );
    assert_eq!(
        kinds("a++ / 2"),
        vec![
            Token::Identifier,
            Token::PlusPlus,
            Token::Div,
            Token::NumericLiteral,
        ]
    );
}

#[test]
fn regular_expression_after_operators() {
    let tokens: Vec<_> = Tokenizer::new(b"x = /ab+c/g", IgnoreErrors).collect();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[2].kind, Token::RegularExpressionLiteral);
    assert_eq!(&*tokens[2].text, "/ab+c/g");
}

#[test]
fn both_slashes_in_one_statement() {
    assert_eq!(
        kinds("let re = a ? /x/ : b/2;"),
        vec![
            Token::Let,
            Token::Identifier,
            Token::Assign,
            Token::Identifier,
            Token::Quest,
            Token::RegularExpressionLiteral,
            Token::Colon,
            Token::Identifier,
            Token::Div,
            Token::NumericLiteral,
            Token::Semicolon,
        ]
    );
}

#[test]
fn template_substitutions() {
    let tokens: Vec<_> = Tokenizer::new(b"`a${b}c${d}e`", IgnoreErrors)
        .map(|t| (t.kind, t.text.to_string()))
        .collect();
    assert_eq!(
        tokens,
        vec![
            (Token::TemplateHead, "`a${".to_string()),
            (Token::Identifier, "b".to_string()),
            (Token::TemplateMiddle, "}c${".to_string()),
            (Token::Identifier, "d".to_string()),
            (Token::TemplateTail, "}e`".to_string()),
        ]
    );
}

#[test]
fn object_literal_inside_substitution() {
    assert_eq!(
        kinds("f(`x${ {a:1}.a }y`)"),
        vec![
            Token::Identifier,
            Token::LParen,
            Token::TemplateHead,
            Token::LBrace,
            Token::Identifier,
            Token::Colon,
            Token::NumericLiteral,
            Token::RBrace,
            Token::Dot,
            Token::Identifier,
            Token::TemplateTail,
            Token::RParen,
        ]
    );
}

#[test]
fn nested_templates() {
    assert_eq!(
        kinds("`${`${1}`}`"),
        vec![
            Token::TemplateHead,
            Token::TemplateHead,
            Token::NumericLiteral,
            Token::TemplateTail,
            Token::TemplateTail,
        ]
    );
}

#[test]
fn statement_head_guess() {
    // A regular expression right after `)` is read as division.
    assert_eq!(kinds("if (x) /re/.test(y)")[4], Token::Div);
}

#[test]
fn mode_and_depth_follow_tokens() {
    let mut tokenizer = Tokenizer::new(b"{ `${ x", IgnoreErrors);
    assert_eq!(tokenizer.mode(), State::Initial);
    assert_eq!(tokenizer.next_token(), Token::LBrace);
    assert_eq!(tokenizer.depth(), 1);
    assert_eq!(tokenizer.next_token(), Token::TemplateHead);
    assert_eq!(tokenizer.mode(), State::Template);
    assert_eq!(tokenizer.next_token(), Token::Identifier);
    assert_eq!(tokenizer.mode(), State::TemplateDiv);
    assert_eq!(tokenizer.depth(), 2);
    assert_eq!(tokenizer.next_token(), Token::Eoi);
    assert_eq!(tokenizer.lexer().state(), State::TemplateDiv.index());
}

#[test]
fn stray_closing_brace() {
    assert_eq!(kinds("} a"), vec![Token::RBrace, Token::Identifier]);
}

#[test]
fn errors_reach_the_handler() {
    let mut tokenizer = Tokenizer::new(b"a # b", Vec::new());
    assert_eq!(tokenizer.by_ref().count(), 2);
    let errors: Vec<LexError> = tokenizer.into_lexer().into_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].offset, 2);
}

#[test]
fn every_mode_exists_in_the_grammar() {
    let mut lexer = crate::js::lexer(b"", IgnoreErrors);
    for mode in [State::Initial, State::Div, State::Template, State::TemplateDiv] {
        assert_eq!(lexer.set_state(mode.index()), Ok(()), "{mode:?}");
    }
    assert!(lexer.set_state(State::TemplateDiv.index() + 1).is_err());
}
