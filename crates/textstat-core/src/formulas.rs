//! Readability formulas.
//!
//! Each formula is a method on [`TextStat`] combining the shared counts into
//! one score. Most of them resolve an empty text to `0.0`; [`TextStat::lix`]
//! is the exception and reports [`AnalysisError::EmptyInput`] instead.
//!
//! Coefficients are applied in the published order without fused
//! multiply-add so scores round the same way as other implementations.
#![allow(clippy::suboptimal_flops)]

use std::collections::HashSet;

use crate::engine::TextStat;
use crate::error::{AnalysisError, AnalysisResult};
use crate::syllables;
use crate::text::{self, round_to};

/// Linsear Write only looks at this many leading words.
const LINSEAR_SAMPLE_WORDS: usize = 101;

/// Points added to the difficult-word percentage in Gunning Fog.
const FOG_DIFFICULT_OFFSET: f64 = 5.0;

impl TextStat {
    /// Flesch Reading Ease: higher is easier, roughly 0 to 100.
    pub fn flesch_reading_ease(&self, text: &str) -> AnalysisResult<f64> {
        let sentence_length = self.avg_sentence_length(text);
        let syllables_per_word = self.avg_syllables_per_word(text)?;
        let score = 206.835 - 1.015 * sentence_length - 84.6 * syllables_per_word;
        Ok(round_to(score, 2))
    }

    /// Flesch-Kincaid Grade Level.
    pub fn flesch_kincaid_grade(&self, text: &str) -> AnalysisResult<f64> {
        let sentence_length = self.avg_sentence_length(text);
        let syllables_per_word = self.avg_syllables_per_word(text)?;
        let grade = 0.39 * sentence_length + 11.8 * syllables_per_word - 15.59;
        Ok(round_to(grade, 1))
    }

    /// Number of whitespace tokens with three or more syllables.
    pub fn polysyllab_count(&self, text: &str) -> AnalysisResult<usize> {
        let hyphenator = self.hyphenator()?;
        Ok(text
            .split_whitespace()
            .filter(|token| syllables::word_syllables(hyphenator, token) >= 3)
            .count())
    }

    /// SMOG index; 0.0 for texts with fewer than three sentences.
    ///
    /// Polysyllables per sentence is taken as a whole number before scaling.
    pub fn smog_index(&self, text: &str) -> AnalysisResult<f64> {
        let sentences = self.sentence_count(text);
        if sentences < 3 {
            return Ok(0.0);
        }
        let per_sentence = self.polysyllab_count(text)? / sentences;
        let smog = 1.043 * (30.0 * per_sentence as f64).sqrt() + 3.1291;
        Ok(round_to(smog, 1))
    }

    /// Coleman-Liau index, from letters and sentences per hundred words.
    pub fn coleman_liau_index(&self, text: &str) -> f64 {
        let letters = round_to(self.avg_letter_per_word(text) * 100.0, 2);
        let sentences = round_to(self.avg_sentence_per_word(text) * 100.0, 2);
        let coleman = 0.0588 * letters - 0.296 * sentences - 15.8;
        round_to(coleman, 2)
    }

    /// Automated Readability Index; 0.0 when there are no words.
    pub fn automated_readability_index(&self, text: &str) -> f64 {
        let chars = self.char_count(text, true);
        let words = self.lexicon_count(text, true);
        let sentences = self.sentence_count(text);
        if words == 0 || sentences == 0 {
            return 0.0;
        }

        let letters_per_word = chars as f64 / words as f64;
        let words_per_sentence = words as f64 / sentences as f64;
        let readability = 4.71 * letters_per_word + 0.5 * words_per_sentence - 21.43;
        round_to(readability, 1)
    }

    /// Linsear Write over the first 101 words. Not rounded.
    pub fn linsear_write_formula(&self, text: &str) -> AnalysisResult<f64> {
        let hyphenator = self.hyphenator()?;
        let sample: Vec<&str> = text
            .split_whitespace()
            .take(LINSEAR_SAMPLE_WORDS)
            .collect();

        let (easy, hard) = sample.iter().fold((0usize, 0usize), |(easy, hard), word| {
            if syllables::word_syllables(hyphenator, word) < 3 {
                (easy + 1, hard)
            } else {
                (easy, hard + 1)
            }
        });

        let sentences = self.sentence_count(&sample.join(" "));
        let mut number = (easy + 3 * hard) as f64 / sentences as f64;
        if number <= 20.0 {
            number -= 2.0;
        }
        Ok(number / 2.0)
    }

    /// Distinct words that are neither in the easy-word set nor monosyllabic.
    pub fn difficult_words(&self, text: &str) -> AnalysisResult<usize> {
        let easy_words = self.easy_words()?;
        let hyphenator = self.hyphenator()?;
        let mut difficult: HashSet<String> = HashSet::new();
        for word in text::difficulty_tokens(text) {
            if easy_words.contains(&word) || difficult.contains(&word) {
                continue;
            }
            if syllables::word_syllables(hyphenator, &word) > 1 {
                difficult.insert(word);
            }
        }
        Ok(difficult.len())
    }

    /// New Dale-Chall score; 0.0 when there are no words.
    pub fn dale_chall_readability_score(&self, text: &str) -> AnalysisResult<f64> {
        let words = self.lexicon_count(text, true);
        if words == 0 {
            return Ok(0.0);
        }
        let familiar = words.saturating_sub(self.difficult_words(text)?);

        let difficult_percent = 100.0 - 100.0 * familiar as f64 / words as f64;
        let mut score = 0.1579 * difficult_percent + 0.0496 * self.avg_sentence_length(text);
        if difficult_percent > 5.0 {
            score += 3.6365;
        }
        Ok(round_to(score, 2))
    }

    /// Gunning Fog index; 0.0 when there are no words.
    ///
    /// The difficult-word percentage carries a fixed five-point offset.
    pub fn gunning_fog(&self, text: &str) -> AnalysisResult<f64> {
        let words = self.lexicon_count(text, true);
        if words == 0 {
            return Ok(0.0);
        }
        let difficult_percent =
            100.0 * self.difficult_words(text)? as f64 / words as f64 + FOG_DIFFICULT_OFFSET;
        let grade = 0.4 * (self.avg_sentence_length(text) + difficult_percent);
        Ok(round_to(grade, 2))
    }

    /// LIX: sentence length plus the percentage of words over six characters.
    ///
    /// Fails with [`AnalysisError::EmptyInput`] when the text has no tokens.
    pub fn lix(&self, text: &str) -> AnalysisResult<f64> {
        let tokens = text.split_whitespace().count();
        if tokens == 0 {
            return Err(AnalysisError::EmptyInput);
        }
        let long_percent = 100.0 * text::long_word_count(text) as f64 / tokens as f64;
        Ok(round_to(self.avg_sentence_length(text) + long_percent, 2))
    }
}
