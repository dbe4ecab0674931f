//! Reading easy-word lists.

use std::collections::HashSet;

use camino::Utf8Path;

use crate::error::{AnalysisError, AnalysisResult};
use crate::language::Language;

/// Read `<base>/<tag>.txt` into a set of lowercase words.
#[tracing::instrument(skip_all, fields(base = %base, language = %language))]
pub fn load_easy_words(base: &Utf8Path, language: &Language) -> AnalysisResult<HashSet<String>> {
    let path = base.join(format!("{language}.txt"));
    let content = std::fs::read_to_string(path.as_std_path()).map_err(|source| {
        AnalysisError::DictionaryNotFound {
            language: language.to_string(),
            path: path.clone(),
            source,
        }
    })?;

    let words = parse_word_list(&content);
    tracing::debug!(words = words.len(), "easy-word dictionary loaded");
    Ok(words)
}

/// Parse a word list: one word per line, trimmed and lowercased, blank
/// lines skipped.
pub fn parse_word_list(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}
