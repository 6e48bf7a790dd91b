//! slides-i18n
//!
//! エネルギー保存プレゼンテーション向けのローカライゼーションサブシステム
//!
//! A read-only [`store::LocalizationStore`] holds the English/Somali
//! translation tables compiled into the binary; [`resolver`] implements the
//! three-tier fallback chain (exact match → default language → the key
//! itself); [`session::Session`] carries one user's current language.
//! Rendering and navigation are out-of-scope collaborators that consume the
//! resolved strings.

pub mod report;
pub mod resolver;
pub mod session;
pub mod store;
mod test_utils;
pub mod types;

// よく使う型を再エクスポート
pub use resolver::{
    Resolution,
    TranslationMatch,
};
pub use session::{
    LanguageTransition,
    Session,
};
pub use store::{
    LocalizationStore,
    StoreError,
};
pub use types::Language;
