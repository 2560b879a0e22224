//! Generated lexer tables for the JSON grammar.
//!
//! Produced by the table generator; do not edit by hand. Rules `1..=10` are
//! `{ } [ ] : , space JSONString JSONNumber id`, rules `11..=13` are the
//! `null`, `true` and `false` instances of `id`.

use tm_lexer_core::LexerTables;

use super::Token;

const NUM_CLASSES: usize = 23;

#[rustfmt::skip]
static RUNE_CLASS: [u8; 126] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 16, 16, 1, 1, 16, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    16, 1, 8, 1, 1, 1, 1, 1, 1, 1, 1, 22, 7, 11, 13, 17,
    12, 15, 15, 15, 15, 15, 15, 15, 15, 15, 6, 1, 1, 1, 1, 1,
    1, 19, 19, 19, 19, 21, 19, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 4, 9, 5, 1, 1,
    1, 19, 20, 19, 19, 21, 20, 14, 14, 14, 14, 14, 14, 14, 18, 14,
    14, 14, 18, 14, 18, 10, 14, 14, 14, 14, 14, 2, 1, 3,
];

static STATE_MAP: [u16; 1] = [0];

#[rustfmt::skip]
static LEXER_ACTION: [i16; 552] = [
    -2, -1, 23, 22, 21, 20, 19, 18, 11, -1, 10, 9, 8, -1, 10, 2,
    1, -1, 10, 10, 10, 10, -1, -10, -10, -10, -10, -10, -10, -10, -10, -10,
    -10, -10, -10, -10, -10, -10, -10, 1, -10, -10, -10, -10, -10, -10, -12, -12,
    -12, -12, -12, -12, -12, -12, -12, -12, -12, -12, 2, 6, -12, 2, -12, -12,
    -12, -12, -12, 3, -12, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    5, 4, -1, -1, 4, -1, -1, -1, -1, -1, -1, 5, -12, -12, -12, -12,
    -12, -12, -12, -12, -12, -12, -12, -12, 4, -12, -12, 4, -12, -12, -12, -12,
    -12, -12, -12, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 4,
    -1, -1, 4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, 7, -1, -1, 7, -1, -1, -1, -1, -1, -1,
    -1, -12, -12, -12, -12, -12, -12, -12, -12, -12, -12, -12, -12, 7, -12, -12,
    7, -12, -12, -12, -12, -12, 3, -12, -12, -12, -12, -12, -12, -12, -12, -12,
    -12, -12, -12, -12, -12, 6, -12, -12, -12, -12, -12, -12, -12, 3, -12, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 8, -1, -1, 2, -1,
    -1, -1, -1, -1, -1, -1, -13, -13, -13, -13, -13, -13, -13, -13, -13, -13,
    10, -13, 10, -13, 10, 10, -13, -13, 10, 10, 10, 10, -13, -1, 11, 11,
    11, 11, 11, 11, 11, 17, 12, 11, 11, 11, 11, 11, 11, 11, 11, 11,
    11, 11, 11, 11, -1, -1, -1, -1, -1, -1, -1, -1, 11, 11, 13, -1,
    -1, -1, -1, -1, -1, 11, 11, -1, 11, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, 14, -1, -1, 14, -1, -1, -1, 14, 14,
    14, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 15, -1,
    -1, 15, -1, -1, -1, 15, 15, 15, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, 16, -1, -1, 16, -1, -1, -1, 16, 16, 16, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, 11, -1, -1, 11,
    -1, -1, -1, 11, 11, 11, -1, -11, -11, -11, -11, -11, -11, -11, -11, -11,
    -11, -11, -11, -11, -11, -11, -11, -11, -11, -11, -11, -11, -11, -11, -9, -9,
    -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9, -9,
    -9, -9, -9, -9, -9, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8,
    -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -8, -7, -7, -7, -7,
    -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7, -7,
    -7, -7, -7, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6,
    -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -5, -5, -5, -5, -5, -5,
    -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,
    -5, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,
    -4, -4, -4, -4, -4, -4, -4, -4,
];

#[rustfmt::skip]
static RULE_TOKEN: [Token; 14] = [
    Token::InvalidToken, // 0
    Token::LBrace, // 1
    Token::RBrace, // 2
    Token::LBrack, // 3
    Token::RBrack, // 4
    Token::Colon, // 5
    Token::Comma, // 6
    Token::Space, // 7
    Token::JsonString, // 8
    Token::JsonNumber, // 9
    Token::Id, // 10
    Token::Null, // 11
    Token::True, // 12
    Token::False, // 13
];

static INSTANCES_OF_ID: [(&str, u16); 3] = [("null", 11), ("true", 12), ("false", 13)];

/// Everything outside the ASCII table can only appear inside strings.
fn map_rune(_: char) -> u8 {
    1
}

/// Table bundle of the JSON lexer.
pub static TABLES: LexerTables<Token> = LexerTables {
    num_classes: NUM_CLASSES,
    rune_class: &RUNE_CLASS,
    map_rune,
    state_map: &STATE_MAP,
    actions: &LEXER_ACTION,
    rule_token: &RULE_TOKEN,
    identifier_rule: Some(10),
    keywords: &INSTANCES_OF_ID,
    space_rules: &[7],
};
