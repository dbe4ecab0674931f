//! The metrics engine.
//!
//! [`TextStat`] owns the per-language resources (hyphenation patterns and the
//! easy-word set) and exposes every count, average and formula as a method.
//! Resources are loaded on first use and cached for the engine's lifetime.

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::dictionaries;
use crate::error::AnalysisResult;
use crate::language::Language;
use crate::syllables::{self, Hyphenator, PatternHyphenator};
use crate::text::{self, round_to};

/// Readability metrics for one language.
///
/// Cheap to construct; nothing is loaded until a method needs it. A loaded
/// resource is never replaced, so repeated calls on the same text always
/// agree. The engine is `Send + Sync` and can be shared across threads.
pub struct TextStat {
    language: Language,
    hyphenator: OnceLock<Box<dyn Hyphenator>>,
    easy_words: OnceLock<HashSet<String>>,
}

impl TextStat {
    /// Create an engine for `language`.
    pub fn new(language: impl Into<Language>) -> Self {
        Self {
            language: language.into(),
            hyphenator: OnceLock::new(),
            easy_words: OnceLock::new(),
        }
    }

    /// Use `hyphenator` instead of the embedded patterns.
    pub fn with_hyphenator(mut self, hyphenator: impl Hyphenator + 'static) -> Self {
        let boxed: Box<dyn Hyphenator> = Box::new(hyphenator);
        self.hyphenator = OnceLock::from(boxed);
        self
    }

    /// Use `words` as the easy-word set instead of loading `<tag>.txt`.
    pub fn with_easy_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        self.easy_words = OnceLock::from(words);
        self
    }

    /// The language this engine was built for.
    pub const fn language(&self) -> &Language {
        &self.language
    }

    /// The hyphenation provider, loading the embedded patterns on first use.
    pub(crate) fn hyphenator(&self) -> AnalysisResult<&dyn Hyphenator> {
        if let Some(loaded) = self.hyphenator.get() {
            return Ok(loaded.as_ref());
        }
        let loaded: Box<dyn Hyphenator> = Box::new(PatternHyphenator::load(&self.language)?);
        // A concurrent loader may have won; either value is equivalent.
        Ok(self.hyphenator.get_or_init(|| loaded).as_ref())
    }

    /// The easy-word set, resolved on first use.
    pub(crate) fn easy_words(&self) -> AnalysisResult<&HashSet<String>> {
        if let Some(words) = self.easy_words.get() {
            return Ok(words);
        }
        let words = dictionaries::easy_words_for(&self.language)?;
        Ok(self.easy_words.get_or_init(|| words))
    }

    /// Count characters, ignoring spaces when `ignore_spaces` is set.
    pub fn char_count(&self, text: &str, ignore_spaces: bool) -> usize {
        text::char_count(text, ignore_spaces)
    }

    /// Count words, dropping punctuation first when `remove_punctuation` is set.
    pub fn lexicon_count(&self, text: &str, remove_punctuation: bool) -> usize {
        text::lexicon_count(text, remove_punctuation)
    }

    /// Count sentences; always at least 1.
    pub fn sentence_count(&self, text: &str) -> usize {
        text::sentence_count(text)
    }

    /// Total estimated syllables over all whitespace-delimited tokens.
    pub fn syllable_count(&self, text: &str) -> AnalysisResult<usize> {
        if text.is_empty() {
            return Ok(0);
        }
        let hyphenator = self.hyphenator()?;
        Ok(text
            .split_whitespace()
            .map(|token| syllables::word_syllables(hyphenator, token))
            .sum())
    }

    /// Words per sentence, 1 decimal.
    pub fn avg_sentence_length(&self, text: &str) -> f64 {
        let words = self.lexicon_count(text, true);
        ratio(words, self.sentence_count(text), 1)
    }

    /// Syllables per word, 1 decimal; 0.0 when there are no words.
    pub fn avg_syllables_per_word(&self, text: &str) -> AnalysisResult<f64> {
        let words = self.lexicon_count(text, true);
        if words == 0 {
            return Ok(0.0);
        }
        Ok(ratio(self.syllable_count(text)?, words, 1))
    }

    /// Characters (spaces excluded) per word, 2 decimals.
    pub fn avg_letter_per_word(&self, text: &str) -> f64 {
        ratio(self.char_count(text, true), self.lexicon_count(text, true), 2)
    }

    /// Sentences per word, 2 decimals.
    pub fn avg_sentence_per_word(&self, text: &str) -> f64 {
        ratio(self.sentence_count(text), self.lexicon_count(text, true), 2)
    }
}

impl Default for TextStat {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl std::fmt::Debug for TextStat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextStat")
            .field("language", &self.language)
            .field("hyphenator_loaded", &self.hyphenator.get().is_some())
            .field("easy_words_loaded", &self.easy_words.get().is_some())
            .finish()
    }
}

/// `numerator / denominator` rounded to `places`, or 0.0 for a zero denominator.
fn ratio(numerator: usize, denominator: usize, places: i32) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    round_to(numerator as f64 / denominator as f64, places)
}
