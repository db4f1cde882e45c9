//! Pluralizer collaborator boundary
//!
//! Pluralization linguistics live behind the [`Pluralize`] trait so the
//! resolver stays independent of any particular rule set. The default
//! [`EnglishPluralizer`] covers common English rules: an irregular-noun map,
//! uncountables, and suffix transformations.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// External pluralizer collaborator.
pub trait Pluralize: Send + Sync {
    /// Return the count-appropriate form of `word`.
    ///
    /// `inclusive` prefixes the count itself, e.g. `"3 apples"`.
    fn pluralize(&self, word: &str, count: i64, inclusive: bool) -> String;
}

static IRREGULARS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("child", "children"),
        ("person", "people"),
        ("man", "men"),
        ("woman", "women"),
        ("foot", "feet"),
        ("tooth", "teeth"),
        ("mouse", "mice"),
        ("goose", "geese"),
        ("ox", "oxen"),
        ("die", "dice"),
    ])
});

static UNCOUNTABLES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "sheep",
        "fish",
        "deer",
        "series",
        "species",
        "money",
        "information",
        "equipment",
        "news",
    ])
});

/// Default English pluralization rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishPluralizer;

impl EnglishPluralizer {
    /// Build the plural form of a word, preserving a leading capital.
    fn plural_form(word: &str) -> String {
        if word.is_empty() {
            return String::new();
        }

        let lower = word.to_lowercase();
        if UNCOUNTABLES.contains(lower.as_str()) {
            return word.to_string();
        }
        if let Some(plural) = IRREGULARS.get(lower.as_str()) {
            return match_leading_case(word, plural);
        }

        if lower.ends_with('s')
            || lower.ends_with('x')
            || lower.ends_with('z')
            || lower.ends_with("ch")
            || lower.ends_with("sh")
        {
            return format!("{word}es");
        }

        if let Some(stem) = word.strip_suffix('y') {
            let preceding = stem.chars().last();
            if preceding.is_some_and(|c| !"aeiouAEIOU".contains(c)) {
                return format!("{stem}ies");
            }
        }

        if let Some(stem) = word.strip_suffix("fe") {
            return format!("{stem}ves");
        }
        if let Some(stem) = word.strip_suffix('f') {
            return format!("{stem}ves");
        }

        format!("{word}s")
    }
}

impl Pluralize for EnglishPluralizer {
    fn pluralize(&self, word: &str, count: i64, inclusive: bool) -> String {
        let form = if count == 1 {
            word.to_string()
        } else {
            Self::plural_form(word)
        };

        if inclusive {
            format!("{count} {form}")
        } else {
            form
        }
    }
}

/// Carry a leading uppercase letter over to the replacement word.
fn match_leading_case(original: &str, replacement: &str) -> String {
    let starts_upper = original.chars().next().is_some_and(char::is_uppercase);
    if !starts_upper {
        return replacement.to_string();
    }

    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
