//! Grammar: a generated table bundle plus the lookup structures derived from
//! it once at startup.
//!
//! Language crates build their grammar lazily in a `OnceLock` and hand out
//! `&'static Grammar<K>`; every lexer instance borrows it read-only.

use std::fmt;

use bstr::BStr;

use crate::{Action, KeywordTable, LexerTables};

/// Token kind enum of a generated grammar.
///
/// `EOI` is the kind returned once input is exhausted. Kinds that carry a
/// semantic payload (numbers, strings) expose it through [`value`], which the
/// lexer calls lazily for the last token only.
///
/// [`value`]: TokenKind::value
pub trait TokenKind: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    const EOI: Self;

    /// Semantic value type; `()` for grammars that have none.
    type Value;

    /// Semantic value of a token of this kind spelled as `text`.
    fn value(self, text: &BStr) -> Option<Self::Value> {
        let _ = text;
        None
    }
}

/// Read-only view of one language's lexer: tables, keyword map, skip flags.
pub struct Grammar<K: 'static> {
    name: &'static str,
    tables: LexerTables<K>,
    keywords: KeywordTable,
    space: Box<[bool]>,
}

impl<K: TokenKind> Grammar<K> {
    pub fn new(name: &'static str, tables: LexerTables<K>) -> Self {
        debug_assert!(tables.num_classes > 0, "grammar `{name}` has no classes");
        debug_assert_eq!(
            tables.actions.len() % tables.num_classes,
            0,
            "grammar `{name}`: action table is not a whole number of rows"
        );
        debug_assert!(
            !tables.state_map.is_empty(),
            "grammar `{name}` has no lexer modes"
        );

        let mut space = vec![false; tables.rule_token.len()].into_boxed_slice();
        for &rule in tables.space_rules {
            if let Some(flag) = space.get_mut(usize::from(rule)) {
                *flag = true;
            }
        }

        tracing::debug!(
            grammar = name,
            classes = tables.num_classes,
            states = tables.num_states(),
            rules = tables.rule_token.len(),
            keywords = tables.keywords.len(),
            "grammar loaded"
        );

        Grammar {
            name,
            keywords: KeywordTable::new(tables.keywords),
            tables,
            space,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn tables(&self) -> &LexerTables<K> {
        &self.tables
    }

    /// Input class of a code point; `None` (end of input) is class `0`.
    #[inline]
    pub fn classify(&self, ch: Option<char>) -> usize {
        self.tables.class_of(ch)
    }

    #[inline]
    pub fn action(&self, state: usize, class: usize) -> Action {
        Action::decode(self.tables.action(state, class))
    }

    /// Start automaton state of lexer mode `mode`.
    #[inline]
    pub fn start_state(&self, mode: usize) -> Option<usize> {
        self.tables.state_map.get(mode).map(|&s| usize::from(s))
    }

    /// Number of lexer modes.
    #[inline]
    pub fn mode_count(&self) -> usize {
        self.tables.num_modes()
    }

    /// Token kind of `rule`. Rules outside the table read as end of input.
    #[inline]
    pub fn token(&self, rule: u16) -> K {
        self.tables
            .rule_token
            .get(usize::from(rule))
            .copied()
            .unwrap_or(K::EOI)
    }

    /// `true` if `rule` is consumed without producing a token.
    #[inline]
    pub fn is_space(&self, rule: u16) -> bool {
        self.space.get(usize::from(rule)).copied().unwrap_or(false)
    }

    /// Keyword rule for `text`, if `text` is exactly a keyword.
    #[inline]
    pub fn keyword(&self, text: &[u8]) -> Option<u16> {
        self.keywords.get(text)
    }

    /// Final rule of an accepted match: identifiers spelled like a keyword
    /// become that keyword.
    #[inline]
    pub fn resolve(&self, rule: u16, text: &[u8]) -> u16 {
        if self.tables.identifier_rule == Some(rule) {
            if let Some(keyword) = self.keyword(text) {
                return keyword;
            }
        }
        rule
    }
}

impl<K: fmt::Debug + 'static> fmt::Debug for Grammar<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grammar")
            .field("name", &self.name)
            .field("classes", &self.tables.num_classes)
            .field("states", &self.tables.num_states())
            .field("rules", &self.tables.rule_token.len())
            .field("keywords", &self.keywords.len())
            .finish_non_exhaustive()
    }
}
