//! Translation coverage reporting.
//!
//! Gaps never fail store construction and never surface during rendering;
//! this module is the opt-in stricter check an operator or CI job can run
//! to enumerate them.

use std::collections::BTreeSet;

use serde::{
    Deserialize,
    Serialize,
};

use crate::store::LocalizationStore;
use crate::types::Language;

/// A default-language key that has no entry in `language`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TranslationGap {
    /// Language missing the entry.
    pub language: Language,
    /// Key present in the default language but absent here.
    pub key: String,
}

/// Enumerates translation gaps across all non-default languages.
///
/// A key counts as a gap when the default language has it and `language`
/// does not. The result is sorted (by language order in [`Language::ALL`],
/// then key) so reports are deterministic.
#[must_use]
pub fn missing_translations(store: &LocalizationStore) -> Vec<TranslationGap> {
    let default_language = store.default_language();

    let default_keys: BTreeSet<&str> = store
        .table(default_language)
        .map(|table| table.keys().map(String::as_str).collect())
        .unwrap_or_default();

    let mut gaps = Vec::new();
    for language in Language::ALL {
        if language == default_language {
            continue;
        }

        for key in &default_keys {
            if store.get(language, key).is_none() {
                gaps.push(TranslationGap { language, key: (*key).to_string() });
            }
        }
    }

    tracing::debug!("Found {} translation gaps", gaps.len());
    gaps
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;

    use super::*;
    use crate::test_utils::store_from_pairs;

    #[googletest::test]
    fn complete_store_has_no_gaps() {
        let store = store_from_pairs(
            Language::En,
            &[
                (Language::En, "app.title", "Hello"),
                (Language::So, "app.title", "Salaan"),
            ],
        );

        expect_that!(missing_translations(&store), is_empty());
    }

    #[googletest::test]
    fn gaps_name_exactly_the_untranslated_keys() {
        let store = store_from_pairs(
            Language::En,
            &[
                (Language::En, "app.title", "Hello"),
                (Language::En, "nav.conclusion", "Conclusion"),
                (Language::So, "app.title", "Salaan"),
            ],
        );

        let gaps = missing_translations(&store);

        expect_that!(
            gaps,
            elements_are![eq(&TranslationGap {
                language: Language::So,
                key: "nav.conclusion".to_string()
            })]
        );
    }

    #[googletest::test]
    fn extra_keys_in_other_languages_are_not_gaps() {
        // Somali has a key English lacks; only default-language keys count.
        let store = store_from_pairs(
            Language::En,
            &[
                (Language::En, "app.title", "Hello"),
                (Language::So, "app.title", "Salaan"),
                (Language::So, "app.extra", "Dheeraad"),
            ],
        );

        expect_that!(missing_translations(&store), is_empty());
    }

    #[googletest::test]
    fn report_is_sorted_by_key() {
        let store = store_from_pairs(
            Language::En,
            &[
                (Language::En, "b.key", "B"),
                (Language::En, "a.key", "A"),
            ],
        );

        let gaps = missing_translations(&store);
        let keys: Vec<&str> = gaps.iter().map(|gap| gap.key.as_str()).collect();

        expect_that!(keys, eq(&vec!["a.key", "b.key"]));
    }
}
