use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::IgnoreErrors;

/// Walk the whole buffer, returning `(offset, ch)` for every code point.
fn walk(source: &[u8], errors: &mut Vec<LexError>) -> Vec<(usize, char)> {
    let mut cursor = Cursor::new(source, errors);
    let mut out = Vec::new();
    while let Some(ch) = cursor.ch() {
        out.push((cursor.offset(), ch));
        cursor.advance(errors);
    }
    out
}

#[test]
fn empty_input_is_eoi() {
    let mut errors = Vec::new();
    let cursor = Cursor::new(b"", &mut errors);
    assert!(cursor.is_eoi());
    assert_eq!(cursor.offset(), 0);
    assert_eq!(cursor.scan_offset(), 0);
    assert_eq!(cursor.line(), 1);
    assert!(errors.is_empty());
}

#[test]
fn ascii_and_multibyte() {
    let mut errors = Vec::new();
    let got = walk("aé€😀".as_bytes(), &mut errors);
    assert_eq!(got, vec![(0, 'a'), (1, 'é'), (3, '€'), (6, '😀')]);
    assert!(errors.is_empty());
}

#[test]
fn leading_bom_skipped_silently() {
    let mut errors = Vec::new();
    let cursor = Cursor::new(b"\xEF\xBB\xBFx", &mut errors);
    assert_eq!(cursor.ch(), Some('x'));
    assert_eq!(cursor.offset(), 3);
    assert!(errors.is_empty());
}

#[test]
fn only_first_bom_is_free() {
    let mut errors = Vec::new();
    let got = walk(b"\xEF\xBB\xBF\xEF\xBB\xBFx", &mut errors);
    assert_eq!(got, vec![(6, 'x')]);
    assert_eq!(
        errors,
        vec![LexError::new(LexErrorKind::IllegalByteOrderMark, 1, 3, 3)]
    );
}

#[test]
fn embedded_bom_reported() {
    let mut errors = Vec::new();
    let got = walk("a\u{FEFF}b".as_bytes(), &mut errors);
    assert_eq!(got, vec![(0, 'a'), (4, 'b')]);
    assert_eq!(
        errors,
        vec![LexError::new(LexErrorKind::IllegalByteOrderMark, 1, 1, 3)]
    );
}

#[test]
fn invalid_bytes_reported_and_skipped() {
    let mut errors = Vec::new();
    let got = walk(b"a\xFFb", &mut errors);
    assert_eq!(got, vec![(0, 'a'), (2, 'b')]);
    assert_eq!(
        errors,
        vec![LexError::new(LexErrorKind::IllegalEncoding, 1, 1, 1)]
    );
}

#[test]
fn truncated_sequence_skipped_as_one_unit() {
    // E2 82 is a valid prefix of a three-byte sequence cut short by 'x'.
    let mut errors = Vec::new();
    let got = walk(b"\xE2\x82x", &mut errors);
    assert_eq!(got, vec![(2, 'x')]);
    assert_eq!(
        errors,
        vec![LexError::new(LexErrorKind::IllegalEncoding, 1, 0, 2)]
    );
}

#[test]
fn truncated_at_end_reaches_eoi() {
    let mut errors = Vec::new();
    let mut cursor = Cursor::new(b"a\xF0\x9F", &mut errors);
    cursor.advance(&mut errors);
    assert!(cursor.is_eoi());
    assert_eq!(cursor.offset(), 3);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LexErrorKind::IllegalEncoding);
}

#[test]
fn line_tracking() {
    let mut errors = IgnoreErrors;
    let mut cursor = Cursor::new(b"ab\ncd\n\ne", &mut errors);
    let mut seen = Vec::new();
    while let Some(ch) = cursor.ch() {
        seen.push((ch, cursor.line(), cursor.line_offset(), cursor.column()));
        cursor.advance(&mut errors);
    }
    assert_eq!(
        seen,
        vec![
            ('a', 1, 0, 1),
            ('b', 1, 0, 2),
            ('\n', 1, 0, 3),
            ('c', 2, 3, 1),
            ('d', 2, 3, 2),
            ('\n', 2, 3, 3),
            ('\n', 3, 6, 1),
            ('e', 4, 7, 1),
        ]
    );
}

#[test]
fn trailing_newline_moves_line_at_eoi() {
    let mut errors = IgnoreErrors;
    let mut cursor = Cursor::new(b"a\n", &mut errors);
    cursor.advance(&mut errors);
    cursor.advance(&mut errors);
    assert!(cursor.is_eoi());
    assert_eq!(cursor.line(), 2);
    assert_eq!(cursor.line_offset(), 2);
}

#[test]
fn advance_at_eoi_is_noop() {
    let mut errors = Vec::new();
    let mut cursor = Cursor::new(b"z", &mut errors);
    cursor.advance(&mut errors);
    let before = (cursor.offset(), cursor.scan_offset(), cursor.line());
    for _ in 0..3 {
        cursor.advance(&mut errors);
    }
    assert!(cursor.is_eoi());
    assert_eq!((cursor.offset(), cursor.scan_offset(), cursor.line()), before);
    assert!(errors.is_empty());
}

proptest! {
    #[test]
    fn valid_utf8_decodes_like_chars(s in "\\PC*") {
        let mut errors = Vec::new();
        let got = walk(s.as_bytes(), &mut errors);
        let expected: Vec<(usize, char)> = s
            .char_indices()
            .filter(|&(i, c)| !(c == BOM && i == 0))
            .collect();
        let expected_errors = expected.iter().filter(|&&(_, c)| c == BOM).count();
        let expected: Vec<_> = expected.into_iter().filter(|&(_, c)| c != BOM).collect();
        prop_assert_eq!(got, expected);
        prop_assert_eq!(errors.len(), expected_errors);
    }

    #[test]
    fn arbitrary_bytes_always_terminate(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let mut errors = Vec::new();
        let mut cursor = Cursor::new(&bytes, &mut errors);
        let mut steps = 0usize;
        while !cursor.is_eoi() {
            let before = cursor.offset();
            prop_assert!(cursor.offset() < cursor.scan_offset());
            cursor.advance(&mut errors);
            prop_assert!(cursor.offset() > before);
            steps += 1;
            prop_assert!(steps <= bytes.len());
        }
        prop_assert_eq!(cursor.offset(), bytes.len());
        prop_assert_eq!(cursor.scan_offset(), bytes.len());
    }

    #[test]
    fn skipped_bytes_are_accounted_for(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        let mut errors = Vec::new();
        let chars = walk(&bytes, &mut errors);
        let decoded: usize = chars.iter().map(|&(_, c)| c.len_utf8()).sum();
        let skipped: usize = errors.iter().map(|e| e.len).sum();
        let bom = usize::from(bytes.starts_with(b"\xEF\xBB\xBF")) * 3;
        prop_assert_eq!(decoded + skipped + bom, bytes.len());
    }
}
