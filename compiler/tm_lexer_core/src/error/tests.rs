use super::*;

#[test]
fn messages_match_display() {
    for kind in [
        LexErrorKind::IllegalEncoding,
        LexErrorKind::IllegalByteOrderMark,
        LexErrorKind::InvalidToken,
        LexErrorKind::UnexpectedEndOfInput,
    ] {
        assert_eq!(kind.to_string(), kind.message());
    }
}

#[test]
fn parts_has_callback_shape() {
    let err = LexError::new(LexErrorKind::InvalidToken, 3, 17, 2);
    assert_eq!(err.parts(), (3, 17, 2, "invalid token"));
    assert_eq!(err.span(), Span::new(17, 19));
}

#[test]
fn display_includes_location() {
    let err = LexError::new(LexErrorKind::IllegalByteOrderMark, 2, 5, 3);
    assert_eq!(err.to_string(), "illegal byte order mark at line 2 (bytes 5..+3)");
}

#[test]
fn closure_handler_receives_reports() {
    let mut seen = Vec::new();
    {
        let mut handler = |e: LexError| seen.push(e.kind);
        handler.report(LexError::new(LexErrorKind::IllegalEncoding, 1, 0, 1));
        handler.report(LexError::new(LexErrorKind::InvalidToken, 1, 1, 1));
    }
    assert_eq!(
        seen,
        vec![LexErrorKind::IllegalEncoding, LexErrorKind::InvalidToken]
    );
}

#[test]
fn vec_handler_collects() {
    let mut errors: Vec<LexError> = Vec::new();
    errors.report(LexError::new(LexErrorKind::UnexpectedEndOfInput, 1, 0, 4));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LexErrorKind::UnexpectedEndOfInput);
}

#[test]
fn unknown_state_display() {
    let err = UnknownState {
        state: 7,
        grammar: "json",
        count: 1,
    };
    assert_eq!(
        err.to_string(),
        "lexer state 7 does not exist in grammar `json` (1 states)"
    );
}
