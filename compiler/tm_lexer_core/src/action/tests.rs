use super::Action;

#[test]
fn decode_sign_convention() {
    assert_eq!(Action::decode(0), Action::Shift(0));
    assert_eq!(Action::decode(23), Action::Shift(23));
    assert_eq!(Action::decode(-1), Action::Invalid);
    assert_eq!(Action::decode(-2), Action::EndOfInput);
    assert_eq!(Action::decode(-3), Action::Accept(0));
    assert_eq!(Action::decode(-13), Action::Accept(10));
}

#[test]
fn decode_extremes() {
    assert_eq!(Action::decode(i16::MAX), Action::Shift(32767));
    assert_eq!(Action::decode(i16::MIN), Action::Accept(32765));
}

#[test]
fn encode_boundaries() {
    for raw in [i16::MIN, -117, -4, -3, -2, -1, 0, 1, 102, i16::MAX] {
        assert_eq!(Action::decode(raw).encode(), raw, "raw value {raw}");
    }
}

#[test]
fn terminal_outcomes() {
    assert!(!Action::Shift(5).is_terminal());
    assert!(Action::Invalid.is_terminal());
    assert!(Action::EndOfInput.is_terminal());
    assert!(Action::Accept(1).is_terminal());
}
