//! Localization store: the complete set of translatable strings.
//!
//! The store is built once at process start from locale documents compiled
//! into the binary, and is never mutated afterwards. It is safe to share
//! across any number of sessions behind an `Arc`.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

use crate::types::Language;

/// Separator used when flattening nested locale documents into keys.
pub const KEY_SEPARATOR: &str = ".";

/// English locale document, compiled into the binary.
const EN_JSON: &str = include_str!("../locales/en.json");

/// Somali locale document, compiled into the binary.
const SO_JSON: &str = include_str!("../locales/so.json");

/// Errors that may occur while building the store.
///
/// Translation gaps are not errors: a missing key is only observable on
/// read. Only a malformed embedded locale document fails construction.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A compiled-in locale document is not valid JSON.
    #[error("Failed to parse embedded locale document for '{language}': {source}")]
    ParseLocale {
        /// Language whose document failed to parse.
        language: Language,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Read-only mapping of (language, key) → display string.
///
/// Populated once from the embedded locale documents (or directly from flat
/// tables); lookups are pure O(1) accesses with no side effects. No
/// completeness check runs at construction: incomplete tables are tolerated
/// and masked by the resolver's fallback chain.
#[derive(Debug, Clone)]
pub struct LocalizationStore {
    /// Language → (flattened key → display string).
    tables: HashMap<Language, HashMap<String, String>>,

    /// Language used as the ultimate fallback for missing translations.
    default_language: Language,
}

impl LocalizationStore {
    /// Builds the store from the locale documents compiled into the binary.
    ///
    /// Nested documents are flattened into dot-separated keys
    /// (e.g. `"intro.title"`). No I/O is performed.
    ///
    /// # Errors
    /// [`StoreError::ParseLocale`] if an embedded document is malformed.
    pub fn embedded() -> Result<Self, StoreError> {
        let documents = [(Language::En, EN_JSON), (Language::So, SO_JSON)];

        let mut tables = HashMap::new();
        for (language, text) in documents {
            let json: Value = serde_json::from_str(text)
                .map_err(|source| StoreError::ParseLocale { language, source })?;
            let keys = flatten_json(&json, KEY_SEPARATOR, None);
            tracing::debug!("Loaded {} translation keys for '{}'", keys.len(), language);
            tables.insert(language, keys);
        }

        Ok(Self { tables, default_language: Language::En })
    }

    /// Builds a store directly from flat tables.
    ///
    /// Used by tests and by hosts that assemble tables programmatically.
    #[must_use]
    pub fn from_tables(
        default_language: Language,
        tables: HashMap<Language, HashMap<String, String>>,
    ) -> Self {
        Self { tables, default_language }
    }

    /// Looks up the display string for `(language, key)`.
    ///
    /// A language with no table behaves as an empty table.
    #[must_use]
    pub fn get(&self, language: Language, key: &str) -> Option<&str> {
        self.tables.get(&language).and_then(|table| table.get(key)).map(String::as_str)
    }

    /// Returns the designated default (fallback) language.
    #[must_use]
    pub const fn default_language(&self) -> Language {
        self.default_language
    }

    /// Returns the key table for a language, if one exists.
    #[must_use]
    pub fn table(&self, language: Language) -> Option<&HashMap<String, String>> {
        self.tables.get(&language)
    }
}

/// Flattens a nested JSON document into a dot-separated key map.
///
/// Objects contribute `parent.child` keys, arrays contribute `parent[i]`
/// keys, and scalar leaves become the stored display strings.
#[must_use]
pub fn flatten_json(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
) -> HashMap<String, String> {
    let mut result = HashMap::new();
    flatten_json_value(json, separator, prefix, &mut result);
    result
}

/// Recursive worker behind [`flatten_json`].
fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut HashMap<String, String>,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
        _ => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), json.to_string());
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::test_utils::store_from_pairs;

    #[googletest::test]
    fn flatten_json_handles_nested_objects() {
        let json = json!({
            "intro": {
                "title": "Challenging the Absolutism of Energy Conservation",
                "subtitle": "A scientific and philosophical examination"
            }
        });

        let flattened = flatten_json(&json, KEY_SEPARATOR, None);

        expect_that!(
            flattened.get("intro.title"),
            some(eq("Challenging the Absolutism of Energy Conservation"))
        );
        expect_that!(
            flattened.get("intro.subtitle"),
            some(eq("A scientific and philosophical examination"))
        );
        expect_that!(flattened.len(), eq(2));
    }

    #[googletest::test]
    fn flatten_json_handles_arrays() {
        let json = json!({ "points": ["first", "second"] });

        let flattened = flatten_json(&json, KEY_SEPARATOR, None);

        expect_that!(flattened.get("points[0]"), some(eq("first")));
        expect_that!(flattened.get("points[1]"), some(eq("second")));
    }

    #[googletest::test]
    fn embedded_store_loads_both_languages() {
        let store = LocalizationStore::embedded().unwrap();

        expect_that!(store.default_language(), eq(Language::En));
        for language in Language::ALL {
            expect_that!(store.table(language), some(not(is_empty())));
        }
    }

    #[googletest::test]
    fn embedded_store_contains_known_keys() {
        let store = LocalizationStore::embedded().unwrap();

        expect_that!(
            store.get(Language::En, "app.title"),
            some(eq("Challenging Energy Conservation Absolutism"))
        );
        expect_that!(store.get(Language::So, "nav.introduction"), some(eq("Hordhac")));
    }

    #[googletest::test]
    fn get_is_none_for_absent_key_and_absent_table() {
        let store = store_from_pairs(Language::En, &[(Language::En, "app.title", "Hello")]);

        expect_that!(store.get(Language::En, "app.missing"), none());
        // Somali has no table at all; behaves as an empty table.
        expect_that!(store.get(Language::So, "app.title"), none());
    }
}
