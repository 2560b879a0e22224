use pretty_assertions::assert_eq;
use tm_lexer_core::{Action, IgnoreErrors, LexError, LexErrorKind};

use super::*;

fn lex(source: &str) -> (Vec<(Token, usize, usize)>, Vec<LexError>) {
    let mut lexer = lexer(source.as_bytes(), Vec::new());
    let mut tokens = Vec::new();
    loop {
        let kind = lexer.next_token();
        let (start, end) = lexer.pos();
        tokens.push((kind, start, end));
        if kind == Token::Eoi {
            break;
        }
    }
    (tokens, lexer.into_errors())
}

#[test]
fn tables_are_total() {
    let tables = &TABLES;
    let states = tables.num_states();
    assert_eq!(tables.actions.len(), states * tables.num_classes);
    assert_eq!(tables.rune_class.len(), 128);
    for &start in tables.state_map {
        assert!(usize::from(start) < states);
    }
    for &class in tables.rune_class {
        assert!(usize::from(class) < tables.num_classes);
    }
    for &raw in tables.actions {
        match Action::decode(raw) {
            Action::Shift(next) => assert!(usize::from(next) < states),
            Action::Accept(rule) => assert!(usize::from(rule) < tables.rule_token.len()),
            Action::Invalid | Action::EndOfInput => {}
        }
    }
    for ch in ['\u{2028}', '\u{a0}', 'é', '€', '\u{feff}'] {
        assert!(usize::from((tables.map_rune)(ch)) < tables.num_classes);
    }
}

#[test]
fn one_mode_per_state() {
    assert_eq!(grammar().mode_count(), 4);
    for state in [State::Initial, State::Div, State::Template, State::TemplateDiv] {
        assert!(grammar().start_state(state.index()).is_some());
    }
    assert_eq!(State::default(), State::Initial);
    assert_eq!(State::select(true, true), State::TemplateDiv);
}

#[test]
fn grammar_is_shared() {
    assert!(std::ptr::eq(grammar(), grammar()));
    assert_eq!(grammar().name(), "js");
}

#[test]
fn let_statement() {
    let (tokens, errors) = lex("let x = 1;");
    assert_eq!(
        tokens,
        vec![
            (Token::Let, 0, 3),
            (Token::Identifier, 4, 5),
            (Token::Assign, 6, 7),
            (Token::NumericLiteral, 8, 9),
            (Token::Semicolon, 9, 10),
            (Token::Eoi, 10, 10),
        ]
    );
    assert!(errors.is_empty());
}

#[test]
fn keyword_prefix_is_an_identifier() {
    let (tokens, _) = lex("function function2");
    assert_eq!(
        tokens,
        vec![
            (Token::Function, 0, 8),
            (Token::Identifier, 9, 18),
            (Token::Eoi, 18, 18),
        ]
    );
}

#[test]
fn comments_and_whitespace_only() {
    let source = "  // c\n/* x\ny */ \r\n";
    let mut lexer = lexer(source.as_bytes(), Vec::new());
    assert_eq!(lexer.next_token(), Token::Eoi);
    assert_eq!(lexer.pos(), (19, 19));
    assert_eq!(lexer.line(), 4);
    assert!(lexer.errors().is_empty());
}

#[test]
fn longest_match_punctuators() {
    let (tokens, _) = lex("a.b...c");
    let kinds: Vec<_> = tokens.iter().map(|t| t.0).collect();
    assert_eq!(
        kinds,
        vec![
            Token::Identifier,
            Token::Dot,
            Token::Identifier,
            Token::DotDotDot,
            Token::Identifier,
            Token::Eoi,
        ]
    );

    let (tokens, _) = lex("a >>>= b ?? c?.d");
    let kinds: Vec<_> = tokens.iter().map(|t| t.0).collect();
    assert_eq!(
        kinds,
        vec![
            Token::Identifier,
            Token::GtGtGtAssign,
            Token::Identifier,
            Token::QuestQuest,
            Token::Identifier,
            Token::QuestDot,
            Token::Identifier,
            Token::Eoi,
        ]
    );
}

#[test]
fn numeric_literals() {
    let mut lexer = lexer(b"0x1F 1.5e-3 .5 007", IgnoreErrors);
    let mut values = Vec::new();
    while lexer.next_token() == Token::NumericLiteral {
        values.push(lexer.value());
    }
    assert_eq!(
        values,
        vec![
            Some(31.0),
            Some(0.0015),
            Some(0.5),
            Some(0.0),
            Some(0.0),
            Some(7.0),
        ]
    );
}

#[test]
fn string_literals() {
    let (tokens, errors) = lex(r#"'it\'s' "q""#);
    assert_eq!(
        tokens,
        vec![
            (Token::StringLiteral, 0, 7),
            (Token::StringLiteral, 8, 11),
            (Token::Eoi, 11, 11),
        ]
    );
    assert!(errors.is_empty());
}

#[test]
fn unicode_identifiers_and_separators() {
    let (tokens, _) = lex("const été = 1");
    assert_eq!(tokens[1], (Token::Identifier, 6, 11));

    // U+2028 is a line terminator.
    let (tokens, errors) = lex("a\u{2028}b");
    assert_eq!(
        tokens,
        vec![
            (Token::Identifier, 0, 1),
            (Token::Identifier, 4, 5),
            (Token::Eoi, 5, 5),
        ]
    );
    assert!(errors.is_empty());
}

#[test]
fn unterminated_literals() {
    for source in ["\"abc", "/* open", "`abc"] {
        let (tokens, errors) = lex(source);
        let len = source.len();
        assert_eq!(tokens, vec![(Token::Eoi, len, len)], "{source:?}");
        assert_eq!(
            errors,
            vec![LexError::new(LexErrorKind::UnexpectedEndOfInput, 1, 0, len)],
            "{source:?}"
        );
    }
}

#[test]
fn invalid_character() {
    let (tokens, errors) = lex("#x");
    assert_eq!(tokens, vec![(Token::Identifier, 1, 2), (Token::Eoi, 2, 2)]);
    assert_eq!(errors, vec![LexError::new(LexErrorKind::InvalidToken, 1, 0, 1)]);
}

#[test]
fn regex_in_initial_mode() {
    let mut lexer = lexer(b"x = /ab+c/g", IgnoreErrors);
    assert_eq!(lexer.next_token(), Token::Identifier);
    assert_eq!(lexer.next_token(), Token::Assign);
    assert_eq!(lexer.next_token(), Token::RegularExpressionLiteral);
    assert_eq!(&*lexer.text(), "/ab+c/g");
}

#[test]
fn div_mode_selected_by_caller() {
    let mut lexer = lexer(b"a /b/ c", IgnoreErrors);
    assert_eq!(lexer.next_token(), Token::Identifier);
    assert_eq!(lexer.set_state(State::Div.index()), Ok(()));
    assert_eq!(lexer.next_token(), Token::Div);
    assert_eq!(lexer.next_token(), Token::Identifier);
    assert_eq!(lexer.next_token(), Token::Div);
}

#[test]
fn lines_of_tokens() {
    let mut lexer = lexer(b"x\n  y", IgnoreErrors);
    assert_eq!(lexer.next_token(), Token::Identifier);
    assert_eq!(lexer.line(), 1);
    assert_eq!(lexer.next_token(), Token::Identifier);
    assert_eq!(lexer.line(), 2);
    assert_eq!(lexer.pos(), (4, 5));
}
