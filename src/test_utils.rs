//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use std::collections::HashMap;

use crate::store::LocalizationStore;
use crate::types::Language;

/// (language, key, value) の組からテスト用ストアを作成する
///
/// # Arguments
/// * `default_language` - フォールバック先のデフォルト言語
/// * `pairs` - 登録するエントリー
///
/// # Returns
/// 作成された `LocalizationStore`
pub(crate) fn store_from_pairs(
    default_language: Language,
    pairs: &[(Language, &str, &str)],
) -> LocalizationStore {
    let mut tables: HashMap<Language, HashMap<String, String>> = HashMap::new();
    for (language, key, value) in pairs {
        tables.entry(*language).or_default().insert((*key).to_string(), (*value).to_string());
    }
    LocalizationStore::from_tables(default_language, tables)
}
