//! Easy-word dictionaries.
//!
//! Each language has a flat word list named `<tag>.txt`, used as the
//! baseline of familiar words for the Dale-Chall and Gunning Fog formulas.
//! The English list is compiled into the crate. Setting a base directory
//! with [`set_dictionary_path`] makes every language read `<base>/<tag>.txt`
//! instead. The override is process-wide, changes where *future* loads look,
//! and never touches a word set an engine has already cached.

pub mod easy_words;

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

use camino::Utf8PathBuf;

use crate::error::AnalysisResult;
use crate::language::Language;

pub use easy_words::{load_easy_words, parse_word_list};

/// Override for the dictionary base directory. `None` means the bundled lists.
static DICTIONARY_PATH: RwLock<Option<Utf8PathBuf>> = RwLock::new(None);

/// Word lists compiled into the crate, by language tag.
const BUNDLED: &[(&str, &str)] = &[("en_us", include_str!("../../dictionaries/en_us.txt"))];

/// Source directory of the bundled lists.
///
/// Languages without a compiled-in list are looked up here when no override
/// is set.
pub fn default_dictionary_path() -> Utf8PathBuf {
    Utf8PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/dictionaries"))
}

/// The base directory set with [`set_dictionary_path`], if any.
pub fn dictionary_override() -> Option<Utf8PathBuf> {
    DICTIONARY_PATH
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Current dictionary base directory.
pub fn dictionary_path() -> Utf8PathBuf {
    dictionary_override().unwrap_or_else(default_dictionary_path)
}

/// Point future dictionary loads at `path`. Last write wins.
pub fn set_dictionary_path(path: impl Into<Utf8PathBuf>) {
    let path = path.into();
    tracing::debug!(path = %path, "dictionary path overridden");
    *DICTIONARY_PATH
        .write()
        .unwrap_or_else(PoisonError::into_inner) = Some(path);
}

/// Go back to the bundled dictionaries.
pub fn reset_dictionary_path() {
    *DICTIONARY_PATH
        .write()
        .unwrap_or_else(PoisonError::into_inner) = None;
}

/// The compiled-in list for `language`, if there is one.
pub fn bundled_word_list(language: &Language) -> Option<&'static str> {
    let tag = language.as_str().to_ascii_lowercase().replace('-', "_");
    BUNDLED
        .iter()
        .find(|(bundled, _)| *bundled == tag)
        .map(|(_, words)| *words)
}

/// Resolve the easy-word set for `language`.
///
/// An override directory always wins. Otherwise the compiled-in list is
/// used, falling back to [`default_dictionary_path`] for other languages.
pub fn easy_words_for(language: &Language) -> AnalysisResult<HashSet<String>> {
    if let Some(base) = dictionary_override() {
        return load_easy_words(&base, language);
    }
    match bundled_word_list(language) {
        Some(words) => {
            tracing::debug!(%language, "using bundled easy-word list");
            Ok(parse_word_list(words))
        }
        None => load_easy_words(&default_dictionary_path(), language),
    }
}
