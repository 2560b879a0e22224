//! Static table set produced by the lexer generator.
//!
//! A grammar module emits exactly one `static` [`LexerTables`] value.
//! Everything here is borrowed `'static` data, so a table set can be shared
//! between any number of lexers and threads without synchronization.

/// Generated tables for one grammar.
///
/// Classes are dense in `0..num_classes`, class `0` is reserved for end of
/// input, and the action table is laid out row-major as
/// `actions[state * num_classes + class]`.
#[derive(Debug)]
pub struct LexerTables<K: 'static> {
    /// Number of character classes, including the end-of-input class.
    pub num_classes: usize,
    /// Class of every code point below `rune_class.len()`.
    pub rune_class: &'static [u8],
    /// Class of every code point at or above `rune_class.len()`.
    pub map_rune: fn(char) -> u8,
    /// Start automaton state for each lexer mode.
    pub state_map: &'static [u16],
    /// Raw transition cells; see [`Action`](crate::Action) for the encoding.
    pub actions: &'static [i16],
    /// Token kind produced by each rule.
    pub rule_token: &'static [K],
    /// Rule whose text is looked up in `keywords` on acceptance.
    pub identifier_rule: Option<u16>,
    /// Exact keyword spellings and the rule each one reclassifies to.
    pub keywords: &'static [(&'static str, u16)],
    /// Rules whose matches are consumed without being returned.
    pub space_rules: &'static [u16],
}

// Manual impls: derive would demand `K: Clone`, but only references to `K`
// are stored.
impl<K: 'static> Clone for LexerTables<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: 'static> Copy for LexerTables<K> {}

impl<K: 'static> LexerTables<K> {
    /// Character class of a code point; `None` is end of input.
    #[inline]
    pub fn class_of(&self, ch: Option<char>) -> usize {
        let Some(ch) = ch else { return 0 };
        match self.rune_class.get(ch as usize) {
            Some(&class) => usize::from(class),
            None => usize::from((self.map_rune)(ch)),
        }
    }

    /// Raw action cell for `(state, class)`.
    ///
    /// Out-of-range lookups read as "no transition".
    #[inline]
    pub fn action(&self, state: usize, class: usize) -> i16 {
        self.actions
            .get(state * self.num_classes + class)
            .copied()
            .unwrap_or(crate::Action::INVALID)
    }

    /// Number of automaton states the action table describes.
    #[inline]
    pub fn num_states(&self) -> usize {
        if self.num_classes == 0 {
            0
        } else {
            self.actions.len() / self.num_classes
        }
    }

    /// Number of lexer modes.
    #[inline]
    pub fn num_modes(&self) -> usize {
        self.state_map.len()
    }
}
