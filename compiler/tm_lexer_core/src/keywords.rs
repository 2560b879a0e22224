//! Keyword reclassification table.
//!
//! Built once per grammar from the generator's `(spelling, rule)` pairs.
//! Lookups are by exact byte string: keywords are case-sensitive and never
//! match a prefix or a suffix of a longer identifier.

use rustc_hash::FxHashMap;

/// Exact-match map from keyword spelling to rule number.
#[derive(Clone, Debug, Default)]
pub struct KeywordTable {
    map: FxHashMap<&'static [u8], u16>,
}

impl KeywordTable {
    pub fn new(entries: &'static [(&'static str, u16)]) -> Self {
        let mut map = FxHashMap::default();
        map.reserve(entries.len());
        for &(spelling, rule) in entries {
            map.insert(spelling.as_bytes(), rule);
        }
        KeywordTable { map }
    }

    /// Rule for `text` if it is exactly a keyword.
    #[inline]
    pub fn get(&self, text: &[u8]) -> Option<u16> {
        self.map.get(text).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
