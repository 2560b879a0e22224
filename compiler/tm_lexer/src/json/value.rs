//! Semantic values of JSON scalar tokens.
//!
//! Decoding is lazy: the lexer only ever hands out the raw token text, and
//! these helpers run when a caller asks for the value of the last token.

use tm_lexer_core::ByteSlice;

/// Decoded scalar.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

/// Content of a quoted string token with escapes resolved.
///
/// `\u` escapes that form a surrogate pair combine into one character; an
/// unpaired surrogate becomes U+FFFD. Returns `None` if `text` is not a
/// well-formed string token.
pub(crate) fn unquote(text: &[u8]) -> Option<String> {
    let body = text.strip_prefix(b"\"")?.strip_suffix(b"\"")?;
    if !body.contains(&b'\\') {
        return Some(body.to_str_lossy().into_owned());
    }

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        let unescaped = match chars.next()? {
            '"' => '"',
            '\\' => '\\',
            '/' => '/',
            'b' => '\u{8}',
            'f' => '\u{c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'u' => {
                let unit = hex4(&mut chars)?;
                let decoded = if (0xD800..0xDC00).contains(&unit) {
                    let mut ahead = chars.clone();
                    match low_surrogate(&mut ahead) {
                        Some(low) => {
                            chars = ahead;
                            char::from_u32(0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00))
                        }
                        None => None,
                    }
                } else {
                    char::from_u32(unit)
                };
                decoded.unwrap_or(char::REPLACEMENT_CHARACTER)
            }
            _ => return None,
        };
        out.push(unescaped);
    }
    Some(out)
}

/// A `\uXXXX` escape in the low surrogate range.
fn low_surrogate(chars: &mut impl Iterator<Item = char>) -> Option<u32> {
    if chars.next()? != '\\' || chars.next()? != 'u' {
        return None;
    }
    hex4(chars).filter(|unit| (0xDC00..0xE000).contains(unit))
}

fn hex4(chars: &mut impl Iterator<Item = char>) -> Option<u32> {
    (0..4).try_fold(0, |acc, _| Some(acc * 16 + chars.next()?.to_digit(16)?))
}

/// Value of a number token.
pub(crate) fn number(text: &[u8]) -> Option<f64> {
    text.to_str().ok()?.parse().ok()
}
