//! Core types used throughout the crate.

use serde::{
    Deserialize,
    Serialize,
};

/// Supported presentation languages.
///
/// The set is closed: the selection surface only ever offers these values,
/// so an unsupported language identifier is not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (the primary/default language).
    En,
    /// Somali.
    So,
}

impl Language {
    /// All supported languages, default language first.
    pub const ALL: [Self; 2] = [Self::En, Self::So];

    /// Returns the two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::So => "so",
        }
    }

    /// Parses a two-letter language code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "so" => Some(Self::So),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
