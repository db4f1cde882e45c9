//! Translation table data model
//!
//! A table maps string keys to either leaf template strings or nested
//! namespaces of further entries. Lookup semantics come in two variants:
//! flat (literal key match, delimiters and all) and namespaced (the key is
//! split on `.` and each segment descends one level).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key delimiter for namespaced lookups.
pub const KEY_DELIMITER: char = '.';

/// A single entry in a translation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationValue {
    /// A translated template string.
    Leaf(String),
    /// A nested namespace of further entries.
    Node(HashMap<String, TranslationValue>),
}

impl From<&str> for TranslationValue {
    fn from(value: &str) -> Self {
        Self::Leaf(value.to_string())
    }
}

impl From<String> for TranslationValue {
    fn from(value: String) -> Self {
        Self::Leaf(value)
    }
}

impl From<TranslationTable> for TranslationValue {
    fn from(table: TranslationTable) -> Self {
        Self::Node(table.entries)
    }
}

/// Lookup semantics applied to dot-segmented keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupMode {
    /// Exact string-key match only; a key containing the delimiter is
    /// matched literally against the table's keys.
    Flat,
    /// Split the key on the delimiter and descend into nested entries
    /// segment by segment.
    #[default]
    Namespaced,
}

/// One language's key/value entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: HashMap<String, TranslationValue>,
}

impl TranslationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of top-level entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an entry, replacing any existing value under the same key
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<TranslationValue>,
    {
        self.entries.insert(key.into(), value.into());
    }

    /// Shallow-merge another table into this one, key by key.
    ///
    /// Conflicting keys are overwritten (last write wins); all other
    /// existing entries are preserved.
    pub fn merge(&mut self, other: TranslationTable) {
        for (key, value) in other.entries {
            self.entries.insert(key, value);
        }
    }

    /// Look up a template string under the given semantics.
    ///
    /// Absent keys, empty leaf values and non-leaf results all yield `None`;
    /// absence is a sentinel for the resolver's fallback chain, never an
    /// error.
    pub fn get(&self, key: &str, mode: LookupMode) -> Option<&str> {
        let value = match mode {
            LookupMode::Flat => self.entries.get(key),
            LookupMode::Namespaced => self.get_path(key),
        };

        match value {
            Some(TranslationValue::Leaf(template)) if !template.is_empty() => Some(template),
            _ => None,
        }
    }

    /// Walk the key's segments through nested entries.
    fn get_path(&self, key: &str) -> Option<&TranslationValue> {
        let mut segments = key.split(KEY_DELIMITER);
        let mut current = self.entries.get(segments.next()?)?;

        for segment in segments {
            match current {
                TranslationValue::Node(children) => current = children.get(segment)?,
                TranslationValue::Leaf(_) => return None,
            }
        }

        Some(current)
    }
}

impl<K, V> FromIterator<(K, V)> for TranslationTable
where
    K: Into<String>,
    V: Into<TranslationValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Macro to build translation tables from literals.
///
/// Values can be template strings or nested `table!` invocations.
#[macro_export]
macro_rules! table {
    () => {
        $crate::TranslationTable::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut table = $crate::TranslationTable::new();
        $(
            table.insert($key, $value);
        )+
        table
    }};
}
