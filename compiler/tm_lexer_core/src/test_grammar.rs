//! A tiny hand-written grammar for exercising the runtime.
//!
//! Classes: `0` end of input, `1` other, `2` letter, `3` space, `4` `+`,
//! `5` line feed, `6` `"`.
//!
//! Rules: `0` identifier, `1` spaces (skipped), `2` `+`, `3` string,
//! `4` the keyword `let`, `5` line feed (skipped).
//!
//! Mode `0` starts in state `0`; mode `1` starts in state `7`, which is
//! identical except that `+` has no transition.

use bstr::{BStr, ByteSlice};

use crate::{Grammar, LexerTables, TokenKind};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Toy {
    Eoi,
    Ident,
    Space,
    Plus,
    Str,
    Let,
    Newline,
}

impl TokenKind for Toy {
    const EOI: Self = Toy::Eoi;

    type Value = String;

    fn value(self, text: &BStr) -> Option<String> {
        match self {
            Toy::Str => text
                .strip_prefix(b"\"")
                .and_then(|t| t.strip_suffix(b"\""))
                .map(|t| t.to_str_lossy().into_owned()),
            _ => None,
        }
    }
}

const N: usize = 7;

#[rustfmt::skip]
static RUNE_CLASS: [u8; 128] = {
    let mut classes = [1u8; 128];
    let mut c = 0;
    while c < 128 {
        let b = c as u8;
        classes[c] = match b {
            b'a'..=b'z' | b'A'..=b'Z' => 2,
            b' ' => 3,
            b'+' => 4,
            b'\n' => 5,
            b'"' => 6,
            _ => 1,
        };
        c += 1;
    }
    classes
};

#[rustfmt::skip]
static ACTIONS: [i16; 8 * N] = [
    // EOI other letter space plus lf  quote
    -2,   -1,   1,     2,    3,   4,  5,   // 0: start
    -3,   -3,   1,    -3,   -3,  -3, -3,   // 1: identifier
    -4,   -4,  -4,     2,   -4,  -4, -4,   // 2: spaces
    -5,   -5,  -5,    -5,   -5,  -5, -5,   // 3: plus
    -8,   -8,  -8,    -8,   -8,  -8, -8,   // 4: line feed
    -1,    5,   5,     5,    5,  -1,  6,   // 5: inside string
    -6,   -6,  -6,    -6,   -6,  -6, -6,   // 6: closed string
    -2,   -1,   1,     2,   -1,   4,  5,   // 7: start, mode 1
];

static RULE_TOKEN: [Toy; 6] = [Toy::Ident, Toy::Space, Toy::Plus, Toy::Str, Toy::Let, Toy::Newline];

fn map_rune(ch: char) -> u8 {
    if ch.is_alphabetic() {
        2
    } else {
        1
    }
}

pub static TABLES: LexerTables<Toy> = LexerTables {
    num_classes: N,
    rune_class: &RUNE_CLASS,
    map_rune,
    state_map: &[0, 7],
    actions: &ACTIONS,
    rule_token: &RULE_TOKEN,
    identifier_rule: Some(0),
    keywords: &[("let", 4)],
    space_rules: &[1, 5],
};

pub fn grammar() -> Grammar<Toy> {
    Grammar::new("toy", TABLES)
}
