//! Translation resolution with a degrade-gracefully fallback chain.
//!
//! Resolution never fails: a missing translation falls back to the default
//! language, and a key missing everywhere resolves to the key text itself.
//! A raw key showing up in rendered output is the only signal of a fully
//! missing translation, which is preferable to failing a live page render.

use serde::{
    Deserialize,
    Serialize,
};

use crate::store::LocalizationStore;
use crate::types::Language;

/// How a resolution was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationMatch {
    /// Found in the requested language's table.
    Exact,
    /// Missing there, found in the default language's table.
    Fallback,
    /// Missing everywhere; the key itself is used as the display string.
    Missing,
}

/// A resolved display string together with how it was obtained.
///
/// `value` borrows from the store for `Exact`/`Fallback` and from the key
/// for `Missing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// The display string to render.
    pub value: &'a str,
    /// Which tier of the fallback chain produced `value`.
    pub matched: TranslationMatch,
}

/// Resolves a key under the given language, tagging the outcome.
///
/// Fallback tiers, in order:
/// 1. `(language, key)` — exact match.
/// 2. `(default_language, key)` — silent fallback, logged at `debug`.
/// 3. the key text itself — identity fallback, logged at `warn` as the
///    operator-facing signal of an untranslated key.
///
/// No tier errors or panics; the function is total.
#[must_use]
pub fn resolve_detailed<'a>(
    store: &'a LocalizationStore,
    key: &'a str,
    language: Language,
) -> Resolution<'a> {
    if let Some(value) = store.get(language, key) {
        return Resolution { value, matched: TranslationMatch::Exact };
    }

    let default_language = store.default_language();
    if language != default_language {
        if let Some(value) = store.get(default_language, key) {
            tracing::debug!(
                "Translation key '{key}' missing for '{language}', using '{default_language}'"
            );
            return Resolution { value, matched: TranslationMatch::Fallback };
        }
    }

    tracing::warn!("Translation key '{key}' not found in any language");
    Resolution { value: key, matched: TranslationMatch::Missing }
}

/// Plain-string convenience wrapper over [`resolve_detailed`].
///
/// This is the surface rendering call sites use; the match tag is dropped.
#[must_use]
pub fn resolve<'a>(store: &'a LocalizationStore, key: &'a str, language: Language) -> &'a str {
    resolve_detailed(store, key, language).value
}
