//! Language registry holding per-language translation tables

use crate::table::TranslationTable;
use std::collections::HashMap;
use tracing::debug;

/// Maps language codes to their translation tables.
///
/// A language code, once added, is never removed; re-adding merges new keys
/// over existing ones without discarding unrelated entries.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: HashMap<String, TranslationTable>,
}

impl LanguageRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a language or merge additional entries into an existing one.
    ///
    /// Unknown codes get a fresh empty table first. The merge is shallow and
    /// last-write-wins at the key level; accepts any string code and any
    /// table, with no error conditions.
    pub fn add_language(&mut self, lang: &str, translations: TranslationTable) {
        let table = self.languages.entry(lang.to_string()).or_default();
        table.merge(translations);
        debug!("Merged translations into language table: {}", lang);
    }

    /// Check whether a language code is registered
    pub fn contains(&self, lang: &str) -> bool {
        self.languages.contains_key(lang)
    }

    /// Get the table for a language, if registered
    pub fn table(&self, lang: &str) -> Option<&TranslationTable> {
        self.languages.get(lang)
    }

    /// All registered language codes, sorted
    pub fn language_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Number of registered languages
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Whether no languages are registered
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
