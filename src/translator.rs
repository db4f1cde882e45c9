//! Translator context object and its public operations
//!
//! The [`Translator`] owns the language registry and selector state as an
//! explicit instance; there is no process-wide singleton, so multiple
//! isolated translators can coexist.

use crate::error::{I18nError, I18nResult};
use crate::format::{self, Args};
use crate::locale::{self, EnvLocaleSource, LocaleSource};
use crate::pluralize::{EnglishPluralizer, Pluralize};
use crate::registry::LanguageRegistry;
use crate::resolver::{self, Resolution};
use crate::table::{LookupMode, TranslationTable};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info, warn};

/// Language code used for both selector fields until configured otherwise.
pub const DEFAULT_LANG: &str = "en";

/// Configuration accepted by [`Translator::init`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InitConfig {
    /// Active language to start with, assigned without registry validation.
    pub default_lang: Option<String>,
    /// Tables to bulk-register, keyed by language code.
    pub languages: HashMap<String, TranslationTable>,
    /// Language consulted when the active one lacks a key.
    pub fallback_lang: Option<String>,
    /// Run locale detection after registration.
    pub detect_locale: bool,
}

impl InitConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial active language
    pub fn default_lang<S: Into<String>>(mut self, lang: S) -> Self {
        self.default_lang = Some(lang.into());
        self
    }

    /// Add a language table to register
    pub fn language<S: Into<String>>(mut self, lang: S, table: TranslationTable) -> Self {
        self.languages.insert(lang.into(), table);
        self
    }

    /// Set the fallback language
    pub fn fallback_lang<S: Into<String>>(mut self, lang: S) -> Self {
        self.fallback_lang = Some(lang.into());
        self
    }

    /// Enable locale detection after registration
    pub fn detect_locale(mut self, detect: bool) -> Self {
        self.detect_locale = detect;
        self
    }
}

/// Resolves lookup keys to formatted, optionally pluralized,
/// parameter-substituted strings with language fallback.
pub struct Translator {
    registry: LanguageRegistry,
    current_lang: String,
    fallback_lang: String,
    lookup_mode: LookupMode,
    pluralizer: Box<dyn Pluralize>,
    locale_source: Box<dyn LocaleSource>,
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("current_lang", &self.current_lang)
            .field("fallback_lang", &self.fallback_lang)
            .field("lookup_mode", &self.lookup_mode)
            .field("languages", &self.registry.language_codes())
            .finish_non_exhaustive()
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    /// Create a translator with an empty registry and `en`/`en` selector
    /// state.
    pub fn new() -> Self {
        Self {
            registry: LanguageRegistry::new(),
            current_lang: DEFAULT_LANG.to_string(),
            fallback_lang: DEFAULT_LANG.to_string(),
            lookup_mode: LookupMode::default(),
            pluralizer: Box::new(EnglishPluralizer),
            locale_source: Box::new(EnvLocaleSource),
        }
    }

    /// Create and initialize a translator in one step
    pub fn from_config(config: InitConfig) -> Self {
        let mut translator = Self::new();
        translator.init(config);
        translator
    }

    /// Use the given key lookup semantics
    pub fn with_lookup_mode(mut self, mode: LookupMode) -> Self {
        self.lookup_mode = mode;
        self
    }

    /// Replace the pluralizer collaborator
    pub fn with_pluralizer<P: Pluralize + 'static>(mut self, pluralizer: P) -> Self {
        self.pluralizer = Box::new(pluralizer);
        self
    }

    /// Replace the locale source capability
    pub fn with_locale_source<S: LocaleSource + 'static>(mut self, source: S) -> Self {
        self.locale_source = Box::new(source);
        self
    }

    /// Apply a configuration: bulk-register languages, then assign the
    /// fallback and initial languages, then optionally detect the locale.
    ///
    /// Unlike [`set_language`](Self::set_language), `default_lang` is
    /// assigned without checking registry membership and without a warning;
    /// an unregistered default causes initial lookups to fall through to the
    /// fallback chain or to literal-key echo.
    pub fn init(&mut self, config: InitConfig) {
        for (lang, table) in config.languages {
            self.add_language(&lang, table);
        }
        if let Some(fallback) = config.fallback_lang {
            self.fallback_lang = fallback;
        }
        if let Some(default) = config.default_lang {
            self.current_lang = default;
        }
        if config.detect_locale {
            self.detect_and_set_locale();
        }

        info!(
            "Translator initialized: current '{}', fallback '{}'",
            self.current_lang, self.fallback_lang
        );
    }

    /// Register a language or merge additional entries into an existing one
    pub fn add_language(&mut self, lang: &str, translations: TranslationTable) {
        self.registry.add_language(lang, translations);
    }

    /// Switch the active language.
    ///
    /// Unregistered codes emit a warning and select the fallback language
    /// instead (even if the fallback itself is unregistered). Always leaves
    /// the active language assigned to one of the two codes.
    pub fn set_language(&mut self, lang: &str) {
        if self.registry.contains(lang) {
            self.current_lang = lang.to_string();
        } else {
            warn!(
                "Language '{}' is not registered, falling back to '{}'",
                lang, self.fallback_lang
            );
            self.current_lang = self.fallback_lang.clone();
        }
    }

    /// The active language code
    pub fn current_language(&self) -> &str {
        &self.current_lang
    }

    /// The fallback language code
    pub fn fallback_language(&self) -> &str {
        &self.fallback_lang
    }

    /// The configured key lookup semantics
    pub fn lookup_mode(&self) -> LookupMode {
        self.lookup_mode
    }

    /// Check whether a language code is registered
    pub fn has_language(&self, lang: &str) -> bool {
        self.registry.contains(lang)
    }

    /// All registered language codes, sorted
    pub fn language_codes(&self) -> Vec<&str> {
        self.registry.language_codes()
    }

    /// Resolve a key to its raw template and resolution status, before any
    /// formatting
    pub fn resolve(&self, key: &str) -> Resolution {
        resolver::resolve(
            &self.registry,
            &self.current_lang,
            &self.fallback_lang,
            key,
            self.lookup_mode,
        )
    }

    /// Translate a key with no parameters or count
    pub fn t(&self, key: &str) -> String {
        self.translate(key, None, None)
    }

    /// Translate a key, interpolating parameters and applying the
    /// pluralization pass when a count is supplied (including zero).
    ///
    /// Total function: missing keys echo back literally and unmatched
    /// placeholders stay in the output.
    pub fn translate(&self, key: &str, args: Option<&Args>, count: Option<i64>) -> String {
        let resolution = self.resolve(key);
        format::format(&resolution.template, args, count, &*self.pluralizer)
    }

    /// Strict variant of [`translate`](Self::translate) that reports an
    /// echoed key as [`I18nError::MessageNotFound`] instead of returning it.
    pub fn try_translate(
        &self,
        key: &str,
        args: Option<&Args>,
        count: Option<i64>,
    ) -> I18nResult<String> {
        let resolution = self.resolve(key);
        if !resolution.was_found() {
            return Err(I18nError::MessageNotFound {
                key: key.to_string(),
            });
        }
        Ok(format::format(
            &resolution.template,
            args,
            count,
            &*self.pluralizer,
        ))
    }

    /// Pluralize a word through the configured collaborator
    pub fn pluralize(&self, word: &str, count: i64, inclusive: bool) -> String {
        self.pluralizer.pluralize(word, count, inclusive)
    }

    /// Detect the environment locale and switch to it.
    ///
    /// Extracts the primary subtag from the source's tag and calls
    /// [`set_language`](Self::set_language) with the detected code if it is
    /// registered, else with the fallback code.
    pub fn detect_and_set_locale(&mut self) {
        let detected = self
            .locale_source
            .locale_tag()
            .and_then(|tag| match locale::primary_subtag(&tag) {
                Ok(code) => Some(code),
                Err(e) => {
                    warn!("Locale detection failed: {}", e);
                    None
                }
            });

        match detected {
            Some(code) if self.registry.contains(&code) => {
                debug!("Detected registered locale '{}'", code);
                self.set_language(&code);
            }
            Some(code) => {
                debug!(
                    "Detected locale '{}' is not registered, selecting fallback '{}'",
                    code, self.fallback_lang
                );
                let fallback = self.fallback_lang.clone();
                self.set_language(&fallback);
            }
            None => {
                let fallback = self.fallback_lang.clone();
                self.set_language(&fallback);
            }
        }
    }
}
