//! Language tags.
//!
//! A [`Language`] selects both the hyphenation patterns used for syllable
//! estimation and the easy-word dictionary file (`<tag>.txt`).

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// Tag used when no language is given.
pub const DEFAULT_LANGUAGE: &str = "en_us";

/// An opaque language tag such as `en_us`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    /// Create a language from a tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the tag exactly as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve the tag to an embedded hyphenation pattern set.
    ///
    /// Matching ignores case and treats `-` and `_` alike, so `en-US` and
    /// `en_us` select the same patterns.
    pub fn pattern_language(&self) -> AnalysisResult<hyphenation::Language> {
        use hyphenation::Language as Patterns;

        let normalized = self.0.to_ascii_lowercase().replace('-', "_");
        let patterns = match normalized.as_str() {
            "en_us" | "en" => Patterns::EnglishUS,
            "en_gb" => Patterns::EnglishGB,
            "de" | "de_de" => Patterns::German1996,
            "fr" | "fr_fr" => Patterns::French,
            "es" | "es_es" => Patterns::Spanish,
            "it" | "it_it" => Patterns::Italian,
            "nl" | "nl_nl" => Patterns::Dutch,
            "pt" | "pt_pt" => Patterns::Portuguese,
            _ => return Err(AnalysisError::UnsupportedLanguage(self.0.clone())),
        };
        Ok(patterns)
    }
}

impl Default for Language {
    fn default() -> Self {
        Self(DEFAULT_LANGUAGE.to_string())
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Language {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Language {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}
