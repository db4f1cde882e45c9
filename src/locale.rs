//! Locale detection boundary
//!
//! The host environment is an injected capability that yields a locale tag
//! such as `en-US`; only the primary language subtag is used to pick a
//! registered language.

use crate::error::{I18nError, I18nResult};
use std::env;
use unic_langid::LanguageIdentifier;

/// Injected capability that yields the host environment's locale tag.
pub trait LocaleSource: Send + Sync {
    /// The environment's locale tag, e.g. `Some("en-US")`, or `None` when
    /// the environment exposes no usable tag.
    fn locale_tag(&self) -> Option<String>;
}

/// Reads the locale tag from POSIX locale environment variables.
///
/// Checks `LC_ALL`, `LC_MESSAGES` and `LANG` in that order and normalizes
/// values like `en_US.UTF-8` to `en-US`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvLocaleSource;

impl LocaleSource for EnvLocaleSource {
    fn locale_tag(&self) -> Option<String> {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|name| env::var(name).ok())
            .find(|value| !value.is_empty() && value.as_str() != "C" && value.as_str() != "POSIX")
            .map(|value| normalize_tag(&value))
    }
}

/// Strip encoding/modifier suffixes and use `-` as the subtag separator.
fn normalize_tag(raw: &str) -> String {
    let base = raw.split(['.', '@']).next().unwrap_or(raw);
    base.replace('_', "-")
}

/// Extract the primary language subtag from a locale tag like `en-US`.
pub fn primary_subtag(tag: &str) -> I18nResult<String> {
    let id: LanguageIdentifier = tag
        .parse()
        .map_err(|_| I18nError::InvalidLocaleTag(tag.to_string()))?;
    Ok(id.language.as_str().to_string())
}
