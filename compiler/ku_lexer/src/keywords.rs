//! Spelling-to-kind lookup.
//!
//! [`TokenTable`] is built once from [`TokenKind::ALL`] and is read-only
//! afterwards. It answers two questions:
//!
//! - [`TokenTable::lookup_keyword`]: is this identifier-shaped span a
//!   keyword? Spans outside the keyword length range are rejected before
//!   hashing.
//! - [`TokenTable::lookup_token`]: which kind has this dump name? Used by
//!   the fixture parser, and covers every kind, not only keywords.

use std::ops::RangeInclusive;

use ku_ir::TokenKind;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Immutable keyword and token-name table.
#[derive(Clone, Debug)]
pub struct TokenTable {
    keywords: FxHashMap<&'static [u8], TokenKind>,
    names: FxHashMap<&'static [u8], TokenKind>,
    keyword_lens: RangeInclusive<usize>,
}

impl TokenTable {
    pub fn new() -> Self {
        let mut keywords = FxHashMap::default();
        let mut names = FxHashMap::default();
        let mut min_len = usize::MAX;
        let mut max_len = 0;

        for kind in TokenKind::ALL {
            let name = kind.name().as_bytes();
            names.insert(name, kind);
            if kind.is_keyword() {
                keywords.insert(name, kind);
                min_len = min_len.min(name.len());
                max_len = max_len.max(name.len());
            }
        }

        debug!(
            keywords = keywords.len(),
            names = names.len(),
            min_len,
            max_len,
            "built token table"
        );
        TokenTable {
            keywords,
            names,
            keyword_lens: min_len..=max_len,
        }
    }

    /// Keyword kind spelled exactly by `text`, if any.
    #[inline]
    pub fn lookup_keyword(&self, text: &[u8]) -> Option<TokenKind> {
        if !self.keyword_lens.contains(&text.len()) {
            return None;
        }
        self.keywords.get(text).copied()
    }

    /// Kind whose dump name is exactly `text`, if any.
    #[inline]
    pub fn lookup_token(&self, text: &[u8]) -> Option<TokenKind> {
        self.names.get(text).copied()
    }

    /// Shortest and longest keyword spellings.
    pub fn keyword_lens(&self) -> RangeInclusive<usize> {
        self.keyword_lens.clone()
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }
}

impl Default for TokenTable {
    fn default() -> Self {
        TokenTable::new()
    }
}
