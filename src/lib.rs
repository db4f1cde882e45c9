//! # Phrasebook
//!
//! Runtime translation resolver: given per-language key/value tables, it
//! resolves a lookup key (optionally namespaced via dot notation) to a
//! formatted, optionally pluralized, parameter-substituted string, with
//! language fallback when the active language lacks a key. It includes:
//!
//! - Incremental language registration with shallow merging
//! - Flat and namespaced (dot-segmented) key lookup
//! - An ordered fallback chain ending in literal key echo
//! - `{{name}}` parameter interpolation and count-based pluralization
//! - Locale detection from an environment-provided language tag
//!
//! # Example
//!
//! ```rust
//! use phrasebook::{args, table, InitConfig, Translator};
//!
//! let mut translator = Translator::from_config(
//!     InitConfig::new()
//!         .default_lang("en")
//!         .fallback_lang("en")
//!         .language("en", table! { "greeting" => "Hello, {{name}}!" })
//!         .language("fr", table! { "greeting" => "Bonjour, {{name}}!" }),
//! );
//!
//! translator.set_language("fr");
//! let text = translator.translate("greeting", Some(&args! { "name" => "Ana" }), None);
//! assert_eq!(text, "Bonjour, Ana!");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod format;
pub mod locale;
pub mod pluralize;
pub mod registry;
pub mod resolver;
pub mod table;
pub mod translator;

pub use error::{I18nError, I18nResult};
pub use format::{ArgValue, Args};
pub use locale::{EnvLocaleSource, LocaleSource};
pub use pluralize::{EnglishPluralizer, Pluralize};
pub use registry::LanguageRegistry;
pub use resolver::{Resolution, ResolutionStatus};
pub use table::{LookupMode, TranslationTable, TranslationValue, KEY_DELIMITER};
pub use translator::{InitConfig, Translator, DEFAULT_LANG};
