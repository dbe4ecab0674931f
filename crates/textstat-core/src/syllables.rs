//! Syllable estimation through hyphenation.
//!
//! A word's syllable count is approximated by the number of fragments a
//! hyphenation provider splits it into. The default provider applies the
//! Knuth-Liang TeX patterns embedded in the `hyphenation` crate; anything
//! implementing [`Hyphenator`] can stand in for it.

use hyphenation::Load;

use crate::error::{AnalysisError, AnalysisResult};
use crate::language::Language;

/// Unbreakable characters at the start and end of a word.
const SYLLABLE_MINIMA: (usize, usize) = (1, 1);

/// A hyphenation provider bound to one language.
pub trait Hyphenator: Send + Sync {
    /// Split a lowercase, alphabetic word into its syllable fragments.
    ///
    /// Returning an empty vector means the word was not recognized; callers
    /// treat that as a single syllable.
    fn hyphenate(&self, word: &str) -> Vec<String>;
}

/// Pattern-based hyphenation using embedded TeX patterns.
pub struct PatternHyphenator {
    dictionary: hyphenation::Standard,
}

impl PatternHyphenator {
    /// Load the embedded patterns for `language`.
    #[tracing::instrument(skip_all, fields(language = %language))]
    pub fn load(language: &Language) -> AnalysisResult<Self> {
        let patterns = language.pattern_language()?;
        let mut dictionary = hyphenation::Standard::from_embedded(patterns).map_err(|e| {
            AnalysisError::HyphenationLoad {
                language: language.to_string(),
                reason: e.to_string(),
            }
        })?;
        // Breaks may fall one character in from either edge.
        dictionary.minima = SYLLABLE_MINIMA;
        tracing::debug!("hyphenation patterns loaded");
        Ok(Self { dictionary })
    }
}

impl std::fmt::Debug for PatternHyphenator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternHyphenator").finish_non_exhaustive()
    }
}

impl Hyphenator for PatternHyphenator {
    fn hyphenate(&self, word: &str) -> Vec<String> {
        use hyphenation::Hyphenator as _;

        let hyphenated = self.dictionary.hyphenate(word);
        let mut fragments = Vec::with_capacity(hyphenated.breaks.len() + 1);
        let mut start = 0;
        for &end in &hyphenated.breaks {
            if end > start && word.is_char_boundary(end) {
                fragments.push(word[start..end].to_string());
                start = end;
            }
        }
        fragments.push(word[start..].to_string());
        fragments
    }
}

/// Estimate the syllables in one whitespace-delimited token.
///
/// The token is lowercased and split on literal hyphens, which already mark
/// a break. Each part is stripped to its letters and hyphenated; a part
/// contributes its fragment count, never less than one. Tokens with no
/// letters at all (`...`, `&`) still count as one syllable.
pub fn word_syllables(hyphenator: &dyn Hyphenator, token: &str) -> usize {
    let lowered = token.to_lowercase();
    let count: usize = lowered
        .split('-')
        .map(|part| part.chars().filter(|c| c.is_alphabetic()).collect::<String>())
        .filter(|part| !part.is_empty())
        .map(|part| hyphenator.hyphenate(&part).len().max(1))
        .sum();
    count.max(1)
}
