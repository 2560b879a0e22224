//! Generated lexer tables for the JavaScript-family grammar.
//!
//! Produced by the table generator from the token rules of the grammar; do
//! not edit by hand. Rule numbers are stable: `0` is the generic identifier,
//! `1..=4` are the insignificant rules, `5..=50` are keyword instances of
//! the identifier rule, punctuators and literals follow.

use tm_lexer_core::LexerTables;

use super::Token;

/// Number of input classes (class `0` is end-of-input).
const NUM_CLASSES: usize = 40;

/// Input classes of the ASCII range.
#[rustfmt::skip]
static RUNE_CLASS: [u8; 128] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 9, 10, 9, 9, 11, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    9, 30, 14, 1, 8, 33, 34, 15, 20, 21, 13, 31, 26, 32, 24, 12,
    6, 7, 7, 7, 7, 7, 7, 7, 7, 7, 39, 25, 27, 29, 28, 38,
    1, 3, 3, 3, 3, 4, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 5, 2, 2, 22, 16, 23, 36, 2,
    17, 3, 3, 3, 3, 4, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 5, 2, 2, 18, 35, 19, 37, 1,
];

/// Mode (see [`State`](super::State)) to automaton start state.
static STATE_MAP: [u16; 4] = [0, 1, 2, 3];

/// Flat `state * NUM_CLASSES + class` transition table.
#[rustfmt::skip]
static LEXER_ACTION: [i16; 4120] = [
    -2, -1, 4, 4, 4, 4, 13, 12, 4, 5, 6, 7, 38, 68, 20, 24,
    -1, 28, 44, 45, 46, 47, 48, 49, 50, 53, 54, 55, 56, 59, 61, 66,
    67, 70, 77, 78, 79, 80, 83, 86, -2, -1, 4, 4, 4, 4, 13, 12,
    4, 5, 6, 7, 69, 68, 20, 24, -1, 28, 44, 45, 46, 47, 48, 49,
    50, 53, 54, 55, 56, 59, 61, 66, 67, 70, 77, 78, 79, 80, 83, 86,
    -2, -1, 4, 4, 4, 4, 13, 12, 4, 5, 6, 7, 38, 68, 20, 24,
    -1, 28, 44, 33, 46, 47, 48, 49, 50, 53, 54, 55, 56, 59, 61, 66,
    67, 70, 77, 78, 79, 80, 83, 86, -2, -1, 4, 4, 4, 4, 13, 12,
    4, 5, 6, 7, 69, 68, 20, 24, -1, 28, 44, 33, 46, 47, 48, 49,
    50, 53, 54, 55, 56, 59, 61, 66, 67, 70, 77, 78, 79, 80, 83, 86,
    -3, -3, 4, 4, 4, 4, 4, 4, 4, -3, -3, -3, -3, -3, -3, -3,
    -3, -3, -3, -3, -3, -3, -3, -3, -3, -3, -3, -3, -3, -3, -3, -3,
    -3, -3, -3, -3, -3, -3, -3, -3, -4, -4, -4, -4, -4, -4, -4, -4,
    -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,
    -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,
    -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,
    -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,
    -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,
    -5, -5, 6, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,
    -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5, -5,
    -1, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 9, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8, -1, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 10, 9, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
    -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6,
    -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6, -6,
    -6, -6, -6, -6, -6, -6, -6, -6, -7, 11, 11, 11, 11, 11, 11, 11,
    11, 11, -7, -7, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11,
    11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11,
    -111, -111, -111, -111, 15, -111, 12, 12, -111, -111, -111, -111, -111, -111, -111, -111,
    -111, -111, -111, -111, -111, -111, -111, -111, 14, -111, -111, -111, -111, -111, -111, -111,
    -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, 15, 18, -111, -111,
    -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111,
    14, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111,
    -111, -111, -111, -111, 15, -111, 14, 14, -111, -111, -111, -111, -111, -111, -111, -111,
    -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111,
    -111, -111, -111, -111, -111, -111, -111, -111, -1, -1, -1, -1, -1, -1, 17, 17,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, 16, 16, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, 17, 17, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -111, -111, -111, -111, -111, -111, 17, 17,
    -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111,
    -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111,
    -1, -1, -1, 19, 19, -1, 19, 19, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -111, -111, -111, 19, 19, -111, 19, 19,
    -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111,
    -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111, -111,
    -1, 20, 20, 20, 20, 20, 20, 20, 20, 20, -1, -1, 20, 20, 23, 20,
    21, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20,
    20, 20, 20, 20, 20, 20, 20, 20, -1, 20, 20, 20, 20, 20, 20, 20,
    20, 20, 20, 22, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20,
    20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20,
    -1, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, -1, 20, 20, 23, 20,
    21, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20,
    20, 20, 20, 20, 20, 20, 20, 20, -112, -112, -112, -112, -112, -112, -112, -112,
    -112, -112, -112, -112, -112, -112, -112, -112, -112, -112, -112, -112, -112, -112, -112, -112,
    -112, -112, -112, -112, -112, -112, -112, -112, -112, -112, -112, -112, -112, -112, -112, -112,
    -1, 24, 24, 24, 24, 24, 24, 24, 24, 24, -1, -1, 24, 24, 24, 27,
    25, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24,
    24, 24, 24, 24, 24, 24, 24, 24, -1, 24, 24, 24, 24, 24, 24, 24,
    24, 24, 24, 26, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24,
    24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24,
    -1, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, -1, 24, 24, 24, 27,
    25, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24,
    24, 24, 24, 24, 24, 24, 24, 24, -112, -112, -112, -112, -112, -112, -112, -112,
    -112, -112, -112, -112, -112, -112, -112, -112, -112, -112, -112, -112, -112, -112, -112, -112,
    -112, -112, -112, -112, -112, -112, -112, -112, -112, -112, -112, -112, -112, -112, -112, -112,
    -1, 28, 28, 28, 28, 28, 28, 28, 30, 28, 28, 28, 28, 28, 28, 28,
    29, 31, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    28, 28, 28, 28, 28, 28, 28, 28, -1, 28, 28, 28, 28, 28, 28, 28,
    28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    -1, 28, 28, 28, 28, 28, 28, 28, 30, 28, 28, 28, 28, 28, 28, 28,
    29, 31, 32, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    28, 28, 28, 28, 28, 28, 28, 28, -113, -113, -113, -113, -113, -113, -113, -113,
    -113, -113, -113, -113, -113, -113, -113, -113, -113, -113, -113, -113, -113, -113, -113, -113,
    -113, -113, -113, -113, -113, -113, -113, -113, -113, -113, -113, -113, -113, -113, -113, -113,
    -114, -114, -114, -114, -114, -114, -114, -114, -114, -114, -114, -114, -114, -114, -114, -114,
    -114, -114, -114, -114, -114, -114, -114, -114, -114, -114, -114, -114, -114, -114, -114, -114,
    -114, -114, -114, -114, -114, -114, -114, -114, -1, 33, 33, 33, 33, 33, 33, 33,
    35, 33, 33, 33, 33, 33, 33, 33, 34, 36, 33, 33, 33, 33, 33, 33,
    33, 33, 33, 33, 33, 33, 33, 33, 33, 33, 33, 33, 33, 33, 33, 33,
    -1, 33, 33, 33, 33, 33, 33, 33, 33, 33, 33, 33, 33, 33, 33, 33,
    33, 33, 33, 33, 33, 33, 33, 33, 33, 33, 33, 33, 33, 33, 33, 33,
    33, 33, 33, 33, 33, 33, 33, 33, -1, 33, 33, 33, 33, 33, 33, 33,
    35, 33, 33, 33, 33, 33, 33, 33, 34, 36, 37, 33, 33, 33, 33, 33,
    33, 33, 33, 33, 33, 33, 33, 33, 33, 33, 33, 33, 33, 33, 33, 33,
    -116, -116, -116, -116, -116, -116, -116, -116, -116, -116, -116, -116, -116, -116, -116, -116,
    -116, -116, -116, -116, -116, -116, -116, -116, -116, -116, -116, -116, -116, -116, -116, -116,
    -116, -116, -116, -116, -116, -116, -116, -116, -115, -115, -115, -115, -115, -115, -115, -115,
    -115, -115, -115, -115, -115, -115, -115, -115, -115, -115, -115, -115, -115, -115, -115, -115,
    -115, -115, -115, -115, -115, -115, -115, -115, -115, -115, -115, -115, -115, -115, -115, -115,
    -1, 39, 39, 39, 39, 39, 39, 39, 39, 39, -1, -1, 11, 8, 39, 39,
    40, 39, 39, 39, 39, 39, 41, 39, 39, 39, 39, 39, 39, 39, 39, 39,
    39, 39, 39, 39, 39, 39, 39, 39, -1, 39, 39, 39, 39, 39, 39, 39,
    39, 39, -1, -1, 43, 39, 39, 39, 40, 39, 39, 39, 39, 39, 41, 39,
    39, 39, 39, 39, 39, 39, 39, 39, 39, 39, 39, 39, 39, 39, 39, 39,
    -1, 39, 39, 39, 39, 39, 39, 39, 39, 39, -1, -1, 39, 39, 39, 39,
    39, 39, 39, 39, 39, 39, 39, 39, 39, 39, 39, 39, 39, 39, 39, 39,
    39, 39, 39, 39, 39, 39, 39, 39, -1, 41, 41, 41, 41, 41, 41, 41,
    41, 41, -1, -1, 41, 41, 41, 41, 42, 41, 41, 41, 41, 41, 41, 39,
    41, 41, 41, 41, 41, 41, 41, 41, 41, 41, 41, 41, 41, 41, 41, 41,
    -1, 41, 41, 41, 41, 41, 41, 41, 41, 41, -1, -1, 41, 41, 41, 41,
    41, 41, 41, 41, 41, 41, 41, 41, 41, 41, 41, 41, 41, 41, 41, 41,
    41, 41, 41, 41, 41, 41, 41, 41, -117, -117, 43, 43, 43, 43, 43, 43,
    43, -117, -117, -117, -117, -117, -117, -117, -117, -117, -117, -117, -117, -117, -117, -117,
    -117, -117, -117, -117, -117, -117, -117, -117, -117, -117, -117, -117, -117, -117, -117, -117,
    -54, -54, -54, -54, -54, -54, -54, -54, -54, -54, -54, -54, -54, -54, -54, -54,
    -54, -54, -54, -54, -54, -54, -54, -54, -54, -54, -54, -54, -54, -54, -54, -54,
    -54, -54, -54, -54, -54, -54, -54, -54, -55, -55, -55, -55, -55, -55, -55, -55,
    -55, -55, -55, -55, -55, -55, -55, -55, -55, -55, -55, -55, -55, -55, -55, -55,
    -55, -55, -55, -55, -55, -55, -55, -55, -55, -55, -55, -55, -55, -55, -55, -55,
    -56, -56, -56, -56, -56, -56, -56, -56, -56, -56, -56, -56, -56, -56, -56, -56,
    -56, -56, -56, -56, -56, -56, -56, -56, -56, -56, -56, -56, -56, -56, -56, -56,
    -56, -56, -56, -56, -56, -56, -56, -56, -57, -57, -57, -57, -57, -57, -57, -57,
    -57, -57, -57, -57, -57, -57, -57, -57, -57, -57, -57, -57, -57, -57, -57, -57,
    -57, -57, -57, -57, -57, -57, -57, -57, -57, -57, -57, -57, -57, -57, -57, -57,
    -58, -58, -58, -58, -58, -58, -58, -58, -58, -58, -58, -58, -58, -58, -58, -58,
    -58, -58, -58, -58, -58, -58, -58, -58, -58, -58, -58, -58, -58, -58, -58, -58,
    -58, -58, -58, -58, -58, -58, -58, -58, -59, -59, -59, -59, -59, -59, -59, -59,
    -59, -59, -59, -59, -59, -59, -59, -59, -59, -59, -59, -59, -59, -59, -59, -59,
    -59, -59, -59, -59, -59, -59, -59, -59, -59, -59, -59, -59, -59, -59, -59, -59,
    -60, -60, -60, -60, -60, -60, 14, 14, -60, -60, -60, -60, -60, -60, -60, -60,
    -60, -60, -60, -60, -60, -60, -60, -60, 102, -60, -60, -60, -60, -60, -60, -60,
    -60, -60, -60, -60, -60, -60, -60, -60, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    52, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -61, -61, -61, -61, -61, -61, -61, -61, -61, -61, -61, -61, -61, -61, -61, -61,
    -61, -61, -61, -61, -61, -61, -61, -61, -61, -61, -61, -61, -61, -61, -61, -61,
    -61, -61, -61, -61, -61, -61, -61, -61, -62, -62, -62, -62, -62, -62, -62, -62,
    -62, -62, -62, -62, -62, -62, -62, -62, -62, -62, -62, -62, -62, -62, -62, -62,
    -62, -62, -62, -62, -62, -62, -62, -62, -62, -62, -62, -62, -62, -62, -62, -62,
    -63, -63, -63, -63, -63, -63, -63, -63, -63, -63, -63, -63, -63, -63, -63, -63,
    -63, -63, -63, -63, -63, -63, -63, -63, -63, -63, -63, -63, -63, -63, -63, -63,
    -63, -63, -63, -63, -63, -63, -63, -63, -64, -64, -64, -64, -64, -64, -64, -64,
    -64, -64, -64, -64, -64, -64, -64, -64, -64, -64, -64, -64, -64, -64, -64, -64,
    -64, -64, -64, 74, -64, 57, -64, -64, -64, -64, -64, -64, -64, -64, -64, -64,
    -65, -65, -65, -65, -65, -65, -65, -65, -65, -65, -65, -65, -65, -65, -65, -65,
    -65, -65, -65, -65, -65, -65, -65, -65, -65, -65, -65, -65, 75, 58, -65, -65,
    -65, -65, -65, -65, -65, -65, -65, -65, -66, -66, -66, -66, -66, -66, -66, -66,
    -66, -66, -66, -66, -66, -66, -66, -66, -66, -66, -66, -66, -66, -66, -66, -66,
    -66, -66, -66, -66, -66, -66, -66, -66, -66, -66, -66, -66, -66, -66, -66, -66,
    -67, -67, -67, -67, -67, -67, -67, -67, -67, -67, -67, -67, -67, -67, -67, -67,
    -67, -67, -67, -67, -67, -67, -67, -67, -67, -67, -67, -67, -67, -67, -67, -67,
    -67, -67, -67, -67, -67, -67, -67, -67, -95, -95, -95, -95, -95, -95, -95, -95,
    -95, -95, -95, -95, -95, -95, -95, -95, -95, -95, -95, -95, -95, -95, -95, -95,
    -95, -95, -95, -95, 65, 60, -95, -95, -95, -95, -95, -95, -95, -95, -95, -95,
    -68, -68, -68, -68, -68, -68, -68, -68, -68, -68, -68, -68, -68, -68, -68, -68,
    -68, -68, -68, -68, -68, -68, -68, -68, -68, -68, -68, -68, -68, 63, -68, -68,
    -68, -68, -68, -68, -68, -68, -68, -68, -87, -87, -87, -87, -87, -87, -87, -87,
    -87, -87, -87, -87, -87, -87, -87, -87, -87, -87, -87, -87, -87, -87, -87, -87,
    -87, -87, -87, -87, -87, 62, -87, -87, -87, -87, -87, -87, -87, -87, -87, -87,
    -69, -69, -69, -69, -69, -69, -69, -69, -69, -69, -69, -69, -69, -69, -69, -69,
    -69, -69, -69, -69, -69, -69, -69, -69, -69, -69, -69, -69, -69, 64, -69, -69,
    -69, -69, -69, -69, -69, -69, -69, -69, -70, -70, -70, -70, -70, -70, -70, -70,
    -70, -70, -70, -70, -70, -70, -70, -70, -70, -70, -70, -70, -70, -70, -70, -70,
    -70, -70, -70, -70, -70, -70, -70, -70, -70, -70, -70, -70, -70, -70, -70, -70,
    -71, -71, -71, -71, -71, -71, -71, -71, -71, -71, -71, -71, -71, -71, -71, -71,
    -71, -71, -71, -71, -71, -71, -71, -71, -71, -71, -71, -71, -71, -71, -71, -71,
    -71, -71, -71, -71, -71, -71, -71, -71, -72, -72, -72, -72, -72, -72, -72, -72,
    -72, -72, -72, -72, -72, -72, -72, -72, -72, -72, -72, -72, -72, -72, -72, -72,
    -72, -72, -72, -72, -72, -72, -72, -72, -72, -72, -72, -72, -72, -72, -72, -72,
    -73, -73, -73, -73, -73, -73, -73, -73, -73, -73, -73, -73, -73, -73, -73, -73,
    -73, -73, -73, -73, -73, -73, -73, -73, -73, -73, -73, -73, -73, 87, -73, 72,
    -73, -73, -73, -73, -73, -73, -73, -73, -74, -74, -74, -74, -74, -74, -74, -74,
    -74, -74, -74, -74, -74, -74, -74, -74, -74, -74, -74, -74, -74, -74, -74, -74,
    -74, -74, -74, -74, -74, 88, -74, -74, 73, -74, -74, -74, -74, -74, -74, -74,
    -75, -75, -75, -75, -75, -75, -75, -75, -75, -75, -75, -75, -75, 71, -75, -75,
    -75, -75, -75, -75, -75, -75, -75, -75, -75, -75, -75, -75, -75, 89, -75, -75,
    -75, -75, -75, -75, -75, -75, -75, -75, -76, -76, -76, -76, -76, -76, -76, -76,
    -76, -76, -76, -76, 11, 8, -76, -76, -76, -76, -76, -76, -76, -76, -76, -76,
    -76, -76, -76, -76, -76, 90, -76, -76, -76, -76, -76, -76, -76, -76, -76, -76,
    -77, -77, -77, -77, -77, -77, -77, -77, -77, -77, -77, -77, -77, -77, -77, -77,
    -77, -77, -77, -77, -77, -77, -77, -77, -77, -77, -77, -77, -77, 91, -77, -77,
    -77, -77, -77, -77, -77, -77, -77, -77, -78, -78, -78, -78, -78, -78, -78, -78,
    -78, -78, -78, -78, -78, -78, -78, -78, -78, -78, -78, -78, -78, -78, -78, -78,
    -78, -78, -78, -78, -78, 92, -78, -78, -78, -78, -78, -78, -78, -78, -78, -78,
    -79, -79, -79, -79, -79, -79, -79, -79, -79, -79, -79, -79, -79, -79, -79, -79,
    -79, -79, -79, -79, -79, -79, -79, -79, -79, -79, -79, -79, -79, -79, -79, -79,
    -79, -79, -79, -79, -79, -79, -79, -79, -80, -80, -80, -80, -80, -80, -80, -80,
    -80, -80, -80, -80, -80, -80, -80, -80, -80, -80, -80, -80, -80, -80, -80, -80,
    -80, -80, -80, -80, -80, -80, -80, -80, -80, -80, -80, -80, -80, -80, -80, -80,
    -81, -81, -81, -81, -81, -81, -81, -81, -81, -81, -81, -81, -81, -81, -81, -81,
    -81, -81, -81, -81, -81, -81, -81, -81, -81, -81, -81, -81, -81, 93, -81, -81,
    -81, -81, -81, -81, -81, -81, -81, -81, -82, -82, -82, -82, -82, -82, -82, -82,
    -82, -82, -82, -82, -82, -82, -82, -82, -82, -82, -82, -82, -82, -82, -82, -82,
    -82, -82, -82, -82, 76, 94, -82, -82, -82, -82, -82, -82, -82, -82, -82, -82,
    -83, -83, -83, -83, -83, -83, -83, -83, -83, -83, -83, -83, -83, -83, -83, -83,
    -83, -83, -83, -83, -83, -83, -83, -83, -83, -83, -83, -83, -83, 95, -83, -83,
    -83, -83, -83, -83, -83, -83, -83, -83, -84, -84, -84, -84, -84, -84, -84, -84,
    -84, -84, -84, -84, -84, -84, -84, -84, -84, -84, -84, -84, -84, -84, -84, -84,
    -84, -84, -84, -84, -84, 96, -84, -84, -84, -84, 81, -84, -84, -84, -84, -84,
    -85, -85, -85, -85, -85, -85, -85, -85, -85, -85, -85, -85, -85, -85, -85, -85,
    -85, -85, -85, -85, -85, -85, -85, -85, -85, -85, -85, -85, -85, 97, -85, -85,
    -85, -85, -85, 82, -85, -85, -85, -85, -86, -86, -86, -86, -86, -86, -86, -86,
    -86, -86, -86, -86, -86, -86, -86, -86, -86, -86, -86, -86, -86, -86, -86, -86,
    -86, -86, -86, -86, -86, 98, -86, -86, -86, -86, -86, -86, -86, -86, -86, -86,
    -88, -88, -88, -88, -88, -88, -88, -88, -88, -88, -88, -88, -88, -88, -88, -88,
    -88, -88, -88, -88, -88, -88, -88, -88, -88, -88, -88, -88, -88, -88, -88, -88,
    -88, -88, -88, -88, -88, -88, -88, -88, -89, -89, -89, -89, -89, -89, -89, -89,
    -89, -89, -89, -89, -89, -89, -89, -89, -89, -89, -89, -89, -89, -89, -89, -89,
    -89, -89, -89, -89, -89, 99, -89, -89, -89, -89, -89, -89, -89, -89, -89, -89,
    -90, -90, -90, -90, -90, -90, -90, -90, -90, -90, -90, -90, -90, -90, -90, -90,
    -90, -90, -90, -90, -90, -90, -90, -90, -90, -90, -90, -90, -90, 100, -90, -90,
    -90, -90, -90, -90, -90, -90, -90, -90, -92, -92, -92, -92, -92, -92, -92, -92,
    -92, -92, -92, -92, -92, -92, -92, -92, -92, -92, -92, -92, -92, -92, -92, -92,
    85, -92, -92, -92, -92, -92, -92, -92, -92, -92, -92, -92, -92, -92, 84, -92,
    -91, -91, -91, -91, -91, -91, -91, -91, -91, -91, -91, -91, -91, -91, -91, -91,
    -91, -91, -91, -91, -91, -91, -91, -91, -91, -91, -91, -91, -91, 101, -91, -91,
    -91, -91, -91, -91, -91, -91, -91, -91, -93, -93, -93, -93, -93, -93, -93, -93,
    -93, -93, -93, -93, -93, -93, -93, -93, -93, -93, -93, -93, -93, -93, -93, -93,
    -93, -93, -93, -93, -93, -93, -93, -93, -93, -93, -93, -93, -93, -93, -93, -93,
    -94, -94, -94, -94, -94, -94, -94, -94, -94, -94, -94, -94, -94, -94, -94, -94,
    -94, -94, -94, -94, -94, -94, -94, -94, -94, -94, -94, -94, -94, -94, -94, -94,
    -94, -94, -94, -94, -94, -94, -94, -94, -96, -96, -96, -96, -96, -96, -96, -96,
    -96, -96, -96, -96, -96, -96, -96, -96, -96, -96, -96, -96, -96, -96, -96, -96,
    -96, -96, -96, -96, -96, -96, -96, -96, -96, -96, -96, -96, -96, -96, -96, -96,
    -97, -97, -97, -97, -97, -97, -97, -97, -97, -97, -97, -97, -97, -97, -97, -97,
    -97, -97, -97, -97, -97, -97, -97, -97, -97, -97, -97, -97, -97, -97, -97, -97,
    -97, -97, -97, -97, -97, -97, -97, -97, -98, -98, -98, -98, -98, -98, -98, -98,
    -98, -98, -98, -98, -98, -98, -98, -98, -98, -98, -98, -98, -98, -98, -98, -98,
    -98, -98, -98, -98, -98, -98, -98, -98, -98, -98, -98, -98, -98, -98, -98, -98,
    -99, -99, -99, -99, -99, -99, -99, -99, -99, -99, -99, -99, -99, -99, -99, -99,
    -99, -99, -99, -99, -99, -99, -99, -99, -99, -99, -99, -99, -99, -99, -99, -99,
    -99, -99, -99, -99, -99, -99, -99, -99, -100, -100, -100, -100, -100, -100, -100, -100,
    -100, -100, -100, -100, -100, -100, -100, -100, -100, -100, -100, -100, -100, -100, -100, -100,
    -100, -100, -100, -100, -100, -100, -100, -100, -100, -100, -100, -100, -100, -100, -100, -100,
    -101, -101, -101, -101, -101, -101, -101, -101, -101, -101, -101, -101, -101, -101, -101, -101,
    -101, -101, -101, -101, -101, -101, -101, -101, -101, -101, -101, -101, -101, -101, -101, -101,
    -101, -101, -101, -101, -101, -101, -101, -101, -102, -102, -102, -102, -102, -102, -102, -102,
    -102, -102, -102, -102, -102, -102, -102, -102, -102, -102, -102, -102, -102, -102, -102, -102,
    -102, -102, -102, -102, -102, -102, -102, -102, -102, -102, -102, -102, -102, -102, -102, -102,
    -103, -103, -103, -103, -103, -103, -103, -103, -103, -103, -103, -103, -103, -103, -103, -103,
    -103, -103, -103, -103, -103, -103, -103, -103, -103, -103, -103, -103, -103, -103, -103, -103,
    -103, -103, -103, -103, -103, -103, -103, -103, -104, -104, -104, -104, -104, -104, -104, -104,
    -104, -104, -104, -104, -104, -104, -104, -104, -104, -104, -104, -104, -104, -104, -104, -104,
    -104, -104, -104, -104, -104, -104, -104, -104, -104, -104, -104, -104, -104, -104, -104, -104,
    -105, -105, -105, -105, -105, -105, -105, -105, -105, -105, -105, -105, -105, -105, -105, -105,
    -105, -105, -105, -105, -105, -105, -105, -105, -105, -105, -105, -105, -105, -105, -105, -105,
    -105, -105, -105, -105, -105, -105, -105, -105, -106, -106, -106, -106, -106, -106, -106, -106,
    -106, -106, -106, -106, -106, -106, -106, -106, -106, -106, -106, -106, -106, -106, -106, -106,
    -106, -106, -106, -106, -106, -106, -106, -106, -106, -106, -106, -106, -106, -106, -106, -106,
    -107, -107, -107, -107, -107, -107, -107, -107, -107, -107, -107, -107, -107, -107, -107, -107,
    -107, -107, -107, -107, -107, -107, -107, -107, -107, -107, -107, -107, -107, -107, -107, -107,
    -107, -107, -107, -107, -107, -107, -107, -107, -108, -108, -108, -108, -108, -108, -108, -108,
    -108, -108, -108, -108, -108, -108, -108, -108, -108, -108, -108, -108, -108, -108, -108, -108,
    -108, -108, -108, -108, -108, -108, -108, -108, -108, -108, -108, -108, -108, -108, -108, -108,
    -109, -109, -109, -109, -109, -109, -109, -109, -109, -109, -109, -109, -109, -109, -109, -109,
    -109, -109, -109, -109, -109, -109, -109, -109, -109, -109, -109, -109, -109, -109, -109, -109,
    -109, -109, -109, -109, -109, -109, -109, -109, -110, -110, -110, -110, -110, -110, -110, -110,
    -110, -110, -110, -110, -110, -110, -110, -110, -110, -110, -110, -110, -110, -110, -110, -110,
    -110, -110, -110, -110, -110, -110, -110, -110, -110, -110, -110, -110, -110, -110, -110, -110,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, 52, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1,
];

/// Token kind of every rule.
#[rustfmt::skip]
static RULE_TOKEN: [Token; 115] = [
    Token::Identifier, // 0
    Token::WhiteSpace, // 1
    Token::LineTerminatorSequence, // 2
    Token::MultiLineComment, // 3
    Token::SingleLineComment, // 4
    Token::Break, // 5
    Token::Case, // 6
    Token::Catch, // 7
    Token::Class, // 8
    Token::Const, // 9
    Token::Continue, // 10
    Token::Debugger, // 11
    Token::Default, // 12
    Token::Delete, // 13
    Token::Do, // 14
    Token::Else, // 15
    Token::Export, // 16
    Token::Extends, // 17
    Token::Finally, // 18
    Token::For, // 19
    Token::Function, // 20
    Token::If, // 21
    Token::Import, // 22
    Token::In, // 23
    Token::Instanceof, // 24
    Token::New, // 25
    Token::Return, // 26
    Token::Super, // 27
    Token::Switch, // 28
    Token::This, // 29
    Token::Throw, // 30
    Token::Try, // 31
    Token::Typeof, // 32
    Token::Var, // 33
    Token::Void, // 34
    Token::While, // 35
    Token::With, // 36
    Token::Yield, // 37
    Token::Await, // 38
    Token::Enum, // 39
    Token::Null, // 40
    Token::True, // 41
    Token::False, // 42
    Token::As, // 43
    Token::From, // 44
    Token::Get, // 45
    Token::Let, // 46
    Token::Of, // 47
    Token::Set, // 48
    Token::Static, // 49
    Token::Target, // 50
    Token::LBrace, // 51
    Token::RBrace, // 52
    Token::LParen, // 53
    Token::RParen, // 54
    Token::LBrack, // 55
    Token::RBrack, // 56
    Token::Dot, // 57
    Token::DotDotDot, // 58
    Token::Semicolon, // 59
    Token::Comma, // 60
    Token::Lt, // 61
    Token::Gt, // 62
    Token::LtAssign, // 63
    Token::GtAssign, // 64
    Token::AssignAssign, // 65
    Token::ExclAssign, // 66
    Token::AssignAssignAssign, // 67
    Token::ExclAssignAssign, // 68
    Token::AssignGt, // 69
    Token::Plus, // 70
    Token::Minus, // 71
    Token::Mult, // 72
    Token::Div, // 73
    Token::Rem, // 74
    Token::MultMult, // 75
    Token::PlusPlus, // 76
    Token::MinusMinus, // 77
    Token::LtLt, // 78
    Token::GtGt, // 79
    Token::GtGtGt, // 80
    Token::And, // 81
    Token::Or, // 82
    Token::Xor, // 83
    Token::Excl, // 84
    Token::Tilde, // 85
    Token::AndAnd, // 86
    Token::OrOr, // 87
    Token::QuestQuest, // 88
    Token::Quest, // 89
    Token::QuestDot, // 90
    Token::Colon, // 91
    Token::Assign, // 92
    Token::PlusAssign, // 93
    Token::MinusAssign, // 94
    Token::MultAssign, // 95
    Token::DivAssign, // 96
    Token::RemAssign, // 97
    Token::MultMultAssign, // 98
    Token::LtLtAssign, // 99
    Token::GtGtAssign, // 100
    Token::GtGtGtAssign, // 101
    Token::AndAssign, // 102
    Token::OrAssign, // 103
    Token::XorAssign, // 104
    Token::AndAndAssign, // 105
    Token::OrOrAssign, // 106
    Token::QuestQuestAssign, // 107
    Token::NumericLiteral, // 108
    Token::StringLiteral, // 109
    Token::NoSubstitutionTemplate, // 110
    Token::TemplateHead, // 111
    Token::TemplateMiddle, // 112
    Token::TemplateTail, // 113
    Token::RegularExpressionLiteral, // 114
];

/// Keyword instances of the identifier rule (rule `0`).
#[rustfmt::skip]
static INSTANCES_OF_IDENTIFIER: [(&str, u16); 46] = [
    ("break", 5),
    ("case", 6),
    ("catch", 7),
    ("class", 8),
    ("const", 9),
    ("continue", 10),
    ("debugger", 11),
    ("default", 12),
    ("delete", 13),
    ("do", 14),
    ("else", 15),
    ("export", 16),
    ("extends", 17),
    ("finally", 18),
    ("for", 19),
    ("function", 20),
    ("if", 21),
    ("import", 22),
    ("in", 23),
    ("instanceof", 24),
    ("new", 25),
    ("return", 26),
    ("super", 27),
    ("switch", 28),
    ("this", 29),
    ("throw", 30),
    ("try", 31),
    ("typeof", 32),
    ("var", 33),
    ("void", 34),
    ("while", 35),
    ("with", 36),
    ("yield", 37),
    ("await", 38),
    ("enum", 39),
    ("null", 40),
    ("true", 41),
    ("false", 42),
    ("as", 43),
    ("from", 44),
    ("get", 45),
    ("let", 46),
    ("of", 47),
    ("set", 48),
    ("static", 49),
    ("target", 50),
];

/// Classifies code points outside [`RUNE_CLASS`].
fn map_rune(ch: char) -> u8 {
    match ch {
        '\u{2028}' | '\u{2029}' => 10,
        _ if ch.is_whitespace() || ch == '\u{feff}' => 9,
        _ if ch.is_alphabetic() => 2,
        _ => 1,
    }
}

/// Table bundle of the JavaScript-family lexer.
pub static TABLES: LexerTables<Token> = LexerTables {
    num_classes: NUM_CLASSES,
    rune_class: &RUNE_CLASS,
    map_rune,
    state_map: &STATE_MAP,
    actions: &LEXER_ACTION,
    rule_token: &RULE_TOKEN,
    identifier_rule: Some(0),
    keywords: &INSTANCES_OF_IDENTIFIER,
    space_rules: &[1, 2, 3, 4],
};
