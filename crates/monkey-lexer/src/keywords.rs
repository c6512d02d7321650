//! The keyword table consulted when classifying identifier runs.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::scanner::is_letter;
use crate::{KeywordError, TokenKind};

/// Reserved words of the standard language.
const STANDARD_KEYWORDS: [(&str, TokenKind); 7] = [
    ("fn", TokenKind::Function),
    ("let", TokenKind::Let),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("return", TokenKind::Return),
];

static STANDARD: LazyLock<KeywordTable> = LazyLock::new(|| KeywordTable {
    entries: STANDARD_KEYWORDS
        .iter()
        .map(|&(text, kind)| (text.to_string(), kind))
        .collect(),
});

/// A fixed mapping from reserved identifier text to keyword kinds.
///
/// Build a custom table with [`KeywordTable::empty`] and
/// [`KeywordTable::with_keyword`]; most callers want
/// [`KeywordTable::standard`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordTable {
    entries: HashMap<String, TokenKind>,
}

impl KeywordTable {
    /// The keywords of the standard language: `fn let true false if else return`.
    pub fn standard() -> &'static KeywordTable {
        &STANDARD
    }

    /// A table without keywords; every identifier run scans as `Ident`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a keyword mapping.
    pub fn with_keyword(
        mut self,
        text: impl Into<String>,
        kind: TokenKind,
    ) -> Result<Self, KeywordError> {
        let text = text.into();
        if !kind.is_keyword() {
            return Err(KeywordError::NotAKeyword { kind });
        }
        if text.is_empty() || !text.bytes().all(is_letter) {
            return Err(KeywordError::InvalidText { text });
        }
        if self.entries.contains_key(&text) {
            return Err(KeywordError::Duplicate { text });
        }
        self.entries.insert(text, kind);
        Ok(self)
    }

    /// Classify an identifier run: its keyword kind, or `Ident`.
    pub fn lookup(&self, text: &str) -> TokenKind {
        self.get(text).unwrap_or(TokenKind::Ident)
    }

    pub fn get(&self, text: &str) -> Option<TokenKind> {
        self.entries.get(text).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(text, kind)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TokenKind)> {
        self.entries.iter().map(|(text, kind)| (text.as_str(), *kind))
    }
}
