//! Key resolution with language fallback
//!
//! Produces the raw template string for a key by walking an ordered chain:
//! active language, then fallback language, then the literal key itself.
//! No stage raises; absence is a sentinel that advances the chain.

use crate::registry::LanguageRegistry;
use crate::table::LookupMode;
use tracing::{debug, warn};

/// How a raw template was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStatus {
    /// Found in the active language's table.
    Resolved,
    /// Missing from the active language; found in the fallback language.
    FallbackUsed,
    /// Missing everywhere; the literal key is echoed back.
    KeyEchoed,
}

/// A resolved raw template, before formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The raw template string (or the echoed key).
    pub template: String,
    /// Which stage of the fallback chain produced the template.
    pub status: ResolutionStatus,
}

impl Resolution {
    /// Whether the key was found in some language table
    pub fn was_found(&self) -> bool {
        self.status != ResolutionStatus::KeyEchoed
    }
}

/// Walk the fallback chain for a key.
///
/// A missing language entry is treated as an empty table, so an unregistered
/// fallback degrades to literal key echo rather than an error.
pub(crate) fn resolve(
    registry: &LanguageRegistry,
    current_lang: &str,
    fallback_lang: &str,
    key: &str,
    mode: LookupMode,
) -> Resolution {
    if let Some(template) = registry.table(current_lang).and_then(|t| t.get(key, mode)) {
        return Resolution {
            template: template.to_string(),
            status: ResolutionStatus::Resolved,
        };
    }

    if let Some(template) = registry.table(fallback_lang).and_then(|t| t.get(key, mode)) {
        warn!(
            "Key '{}' not found in language '{}', falling back to '{}'",
            key, current_lang, fallback_lang
        );
        return Resolution {
            template: template.to_string(),
            status: ResolutionStatus::FallbackUsed,
        };
    }

    debug!("Key '{}' not found in any language table, echoing key", key);
    Resolution {
        template: key.to_string(),
        status: ResolutionStatus::KeyEchoed,
    }
}
