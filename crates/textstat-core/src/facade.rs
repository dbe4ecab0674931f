//! One-call functions for the default language.
//!
//! Each function builds a short-lived [`TextStat`] for `en_us`, so resources
//! are loaded again on every call. Build an engine once and reuse it when
//! scoring more than a handful of texts, or to pick another language.

use crate::consensus::TextStandard;
use crate::engine::TextStat;
use crate::error::AnalysisResult;
use crate::metric::{Metric, MetricValue};

/// See [`TextStat::char_count`].
pub fn char_count(text: &str, ignore_spaces: bool) -> usize {
    TextStat::default().char_count(text, ignore_spaces)
}

/// See [`TextStat::lexicon_count`].
pub fn lexicon_count(text: &str, remove_punctuation: bool) -> usize {
    TextStat::default().lexicon_count(text, remove_punctuation)
}

/// See [`TextStat::syllable_count`].
pub fn syllable_count(text: &str) -> AnalysisResult<usize> {
    TextStat::default().syllable_count(text)
}

/// See [`TextStat::sentence_count`].
pub fn sentence_count(text: &str) -> usize {
    TextStat::default().sentence_count(text)
}

/// See [`TextStat::avg_sentence_length`].
pub fn avg_sentence_length(text: &str) -> f64 {
    TextStat::default().avg_sentence_length(text)
}

/// See [`TextStat::avg_syllables_per_word`].
pub fn avg_syllables_per_word(text: &str) -> AnalysisResult<f64> {
    TextStat::default().avg_syllables_per_word(text)
}

/// See [`TextStat::avg_letter_per_word`].
pub fn avg_letter_per_word(text: &str) -> f64 {
    TextStat::default().avg_letter_per_word(text)
}

/// See [`TextStat::avg_sentence_per_word`].
pub fn avg_sentence_per_word(text: &str) -> f64 {
    TextStat::default().avg_sentence_per_word(text)
}

/// See [`TextStat::flesch_reading_ease`].
pub fn flesch_reading_ease(text: &str) -> AnalysisResult<f64> {
    TextStat::default().flesch_reading_ease(text)
}

/// See [`TextStat::flesch_kincaid_grade`].
pub fn flesch_kincaid_grade(text: &str) -> AnalysisResult<f64> {
    TextStat::default().flesch_kincaid_grade(text)
}

/// See [`TextStat::polysyllab_count`].
pub fn polysyllab_count(text: &str) -> AnalysisResult<usize> {
    TextStat::default().polysyllab_count(text)
}

/// See [`TextStat::smog_index`].
pub fn smog_index(text: &str) -> AnalysisResult<f64> {
    TextStat::default().smog_index(text)
}

/// See [`TextStat::coleman_liau_index`].
pub fn coleman_liau_index(text: &str) -> f64 {
    TextStat::default().coleman_liau_index(text)
}

/// See [`TextStat::automated_readability_index`].
pub fn automated_readability_index(text: &str) -> f64 {
    TextStat::default().automated_readability_index(text)
}

/// See [`TextStat::linsear_write_formula`].
pub fn linsear_write_formula(text: &str) -> AnalysisResult<f64> {
    TextStat::default().linsear_write_formula(text)
}

/// See [`TextStat::difficult_words`].
pub fn difficult_words(text: &str) -> AnalysisResult<usize> {
    TextStat::default().difficult_words(text)
}

/// See [`TextStat::dale_chall_readability_score`].
pub fn dale_chall_readability_score(text: &str) -> AnalysisResult<f64> {
    TextStat::default().dale_chall_readability_score(text)
}

/// See [`TextStat::gunning_fog`].
pub fn gunning_fog(text: &str) -> AnalysisResult<f64> {
    TextStat::default().gunning_fog(text)
}

/// See [`TextStat::lix`].
pub fn lix(text: &str) -> AnalysisResult<f64> {
    TextStat::default().lix(text)
}

/// See [`TextStat::text_standard`].
pub fn text_standard(text: &str, numeric_output: bool) -> AnalysisResult<TextStandard> {
    TextStat::default().text_standard(text, numeric_output)
}

/// See [`TextStat::measure`].
pub fn measure(metric: Metric, text: &str) -> AnalysisResult<MetricValue> {
    TextStat::default().measure(metric, text)
}
