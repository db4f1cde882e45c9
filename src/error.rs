//! Error types for translation operations
//!
//! The resolution pipeline itself is total and never fails; these errors only
//! surface through the strict lookup API and locale-tag parsing.

use thiserror::Error;

/// Errors that can occur during translation operations
#[derive(Error, Debug)]
pub enum I18nError {
    /// Key absent from both the active and fallback language tables
    #[error("Message not found: {key}")]
    MessageNotFound {
        /// The lookup key that could not be resolved
        key: String,
    },

    /// Failed to parse a locale tag into a language identifier
    #[error("Invalid locale tag: {0}")]
    InvalidLocaleTag(String),
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
