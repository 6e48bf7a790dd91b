//! セッションごとの言語選択状態
//!
//! 各セッションは自分専用の `Session` を所有し、共有されるのは読み取り
//! 専用の [`LocalizationStore`] だけです。ロックは不要です。

use std::sync::Arc;

use crate::resolver;
use crate::resolver::Resolution;
use crate::store::LocalizationStore;
use crate::types::Language;

/// Outcome of a language selection action.
///
/// `Changed` obliges the host to re-render the current page; `Unchanged`
/// means the selection targeted the already-current language and nothing
/// needs to happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a Changed transition obliges the host to re-render"]
pub enum LanguageTransition {
    /// The current language changed; the host must re-render.
    Changed,
    /// No-op re-selection of the current language.
    Unchanged,
}

/// Per-session language state plus the shared store handle.
///
/// Created at session start with the store's default language; lives for
/// the session; never shared between sessions.
#[derive(Debug, Clone)]
pub struct Session {
    /// Shared, read-only translation tables.
    store: Arc<LocalizationStore>,

    /// Language used for all subsequent resolutions in this session.
    current_language: Language,
}

impl Session {
    /// Creates a session starting in the store's default language.
    #[must_use]
    pub fn new(store: Arc<LocalizationStore>) -> Self {
        let current_language = store.default_language();
        Self { store, current_language }
    }

    /// Returns the session's current language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.current_language
    }

    /// Selects a language for this session.
    ///
    /// Selecting the already-current language is a no-op and reports
    /// [`LanguageTransition::Unchanged`].
    pub fn set_language(&mut self, language: Language) -> LanguageTransition {
        if language == self.current_language {
            return LanguageTransition::Unchanged;
        }

        tracing::debug!("Session language changed: {} -> {}", self.current_language, language);
        self.current_language = language;
        LanguageTransition::Changed
    }

    /// Resolves a key under the session's current language, tagged.
    #[must_use]
    pub fn resolve<'a>(&'a self, key: &'a str) -> Resolution<'a> {
        resolver::resolve_detailed(&self.store, key, self.current_language)
    }

    /// Resolves a key to a plain display string.
    ///
    /// The workhorse of rendering call sites.
    #[must_use]
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        resolver::resolve(&self.store, key, self.current_language)
    }
}
