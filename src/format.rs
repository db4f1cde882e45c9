//! Template formatting: pluralization pass and parameter interpolation
//!
//! Formatting is a total function: when a count is supplied the entire
//! resolved template goes through the pluralizer, then every `{{name}}`
//! placeholder is replaced by its parameter's string form. Unmatched
//! placeholders stay literal.

use crate::pluralize::Pluralize;
use std::fmt;

/// A parameter value: string or number.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// A string value
    Str(String),
    /// An integer value
    Int(i64),
    /// A floating point value
    Float(f64),
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => write!(f, "{}", value),
            Self::Int(value) => write!(f, "{}", value),
            Self::Float(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ArgValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Ordered parameter list for interpolation.
///
/// Parameters are substituted in insertion order, which matters when one
/// parameter's value literally contains another parameter's placeholder
/// token. `set` on an existing key updates the value in place, keeping the
/// original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    entries: Vec<(String, ArgValue)>,
}

impl Args {
    /// Create an empty parameter list
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter value
    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<ArgValue>,
    {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| *name == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Set a parameter value, builder style
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<ArgValue>,
    {
        self.set(key, value);
        self
    }

    /// Get a parameter value by name
    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// Iterate parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Apply the formatting pipeline to a resolved template.
///
/// The pluralizer receives the whole template, not an embedded token; this
/// only meaningfully affects single-word templates.
pub(crate) fn format(
    template: &str,
    args: Option<&Args>,
    count: Option<i64>,
    pluralizer: &dyn Pluralize,
) -> String {
    let mut output = match count {
        Some(count) => pluralizer.pluralize(template, count, false),
        None => template.to_string(),
    };

    if let Some(args) = args {
        for (key, value) in args.iter() {
            let placeholder = format!("{{{{{key}}}}}");
            output = output.replace(&placeholder, &value.to_string());
        }
    }

    output
}

/// Macro to create parameter lists more easily.
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut args = $crate::Args::new();
        $(
            args.set($key, $value);
        )+
        args
    }};
}
