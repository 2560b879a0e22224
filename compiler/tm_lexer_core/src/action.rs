//! Decoded form of a transition-table cell.
//!
//! Generated tables pack four outcomes into one signed integer:
//!
//! | raw value | meaning |
//! |-----------|---------|
//! | `>= 0`    | shift to that automaton state |
//! | `-1`      | no transition (invalid token, or unexpected end of input) |
//! | `-2`      | clean end of input |
//! | `<= -3`   | accept rule `-raw - 3` |
//!
//! The lexer never looks at the sign convention itself; it matches on
//! [`Action`].

/// Outcome of one `(state, class)` lookup.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Consume the current code point and continue in this state.
    Shift(u16),
    /// No transition exists.
    Invalid,
    /// End of input with nothing scanned.
    EndOfInput,
    /// The scanned span matches this rule.
    Accept(u16),
}

impl Action {
    pub const INVALID: i16 = -1;
    pub const END_OF_INPUT: i16 = -2;
    /// Raw value of `Accept(0)`; rule `n` is encoded as `FIRST_RULE - n`.
    pub const FIRST_RULE: i16 = -3;

    #[inline]
    #[allow(
        clippy::cast_sign_loss,
        reason = "both arms only cast values proven non-negative by the match"
    )]
    pub const fn decode(raw: i16) -> Self {
        match raw {
            0.. => Action::Shift(raw as u16),
            Self::INVALID => Action::Invalid,
            Self::END_OF_INPUT => Action::EndOfInput,
            _ => Action::Accept((Self::FIRST_RULE - raw) as u16),
        }
    }

    /// Inverse of [`decode`](Self::decode).
    ///
    /// State and rule numbers must fit the table's `i16` cells (states up to
    /// `i16::MAX`, rules up to `i16::MAX - 2`).
    #[allow(
        clippy::cast_possible_wrap,
        reason = "generated tables never hold states or rules beyond i16 range"
    )]
    pub const fn encode(self) -> i16 {
        match self {
            Action::Shift(state) => state as i16,
            Action::Invalid => Self::INVALID,
            Action::EndOfInput => Self::END_OF_INPUT,
            Action::Accept(rule) => Self::FIRST_RULE - rule as i16,
        }
    }

    /// `true` for every outcome that ends the automaton walk.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Action::Shift(_))
    }
}

#[cfg(test)]
mod tests;
