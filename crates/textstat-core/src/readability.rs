//! Full readability report.
//!
//! Runs every count, average and formula over one text and gathers the
//! results, the consensus grade and an optional grade gate into a single
//! serializable [`ReadabilityReport`].

use serde::{Deserialize, Serialize};

use crate::consensus::GradeTally;
use crate::engine::TextStat;
use crate::error::{AnalysisError, AnalysisResult};
use crate::language::Language;
use crate::markdown;

/// Every metric for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    /// Language the text was scored as.
    pub language: Language,
    /// Characters, spaces excluded.
    pub char_count: usize,
    /// Words, punctuation stripped.
    pub lexicon_count: usize,
    /// Estimated syllables.
    pub syllable_count: usize,
    /// Detected sentences.
    pub sentence_count: usize,
    /// Words per sentence.
    pub avg_sentence_length: f64,
    /// Syllables per word.
    pub avg_syllables_per_word: f64,
    /// Characters per word.
    pub avg_letter_per_word: f64,
    /// Sentences per word.
    pub avg_sentence_per_word: f64,
    /// Flesch Reading Ease.
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid Grade Level.
    pub flesch_kincaid_grade: f64,
    /// Words of three or more syllables.
    pub polysyllab_count: usize,
    /// SMOG index.
    pub smog_index: f64,
    /// Coleman-Liau index.
    pub coleman_liau_index: f64,
    /// Automated Readability Index.
    pub automated_readability_index: f64,
    /// Linsear Write formula.
    pub linsear_write_formula: f64,
    /// Distinct difficult words.
    pub difficult_words: usize,
    /// New Dale-Chall score.
    pub dale_chall_readability_score: f64,
    /// Gunning Fog index.
    pub gunning_fog: f64,
    /// LIX.
    pub lix: f64,
    /// Consensus grade level.
    pub grade: i64,
    /// Consensus grade range, e.g. `"7th and 8th grade"`.
    pub text_standard: String,
    /// Votes behind the consensus grade.
    pub votes: GradeTally,
    /// Maximum acceptable grade (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_grade: Option<i64>,
    /// Whether the consensus grade exceeds the maximum.
    pub over_max: bool,
}

impl TextStat {
    /// Score `text` with every metric at once.
    ///
    /// Fails with [`AnalysisError::EmptyInput`] when the text has no words.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len(), language = %self.language()))]
    pub fn report(&self, text: &str, max_grade: Option<i64>) -> AnalysisResult<ReadabilityReport> {
        let lexicon_count = self.lexicon_count(text, true);
        if lexicon_count == 0 {
            return Err(AnalysisError::EmptyInput);
        }

        let consensus = self.consensus(text)?;
        let over_max = max_grade.is_some_and(|max| consensus.grade > max);
        if over_max {
            tracing::debug!(grade = consensus.grade, ?max_grade, "grade over maximum");
        }

        Ok(ReadabilityReport {
            language: self.language().clone(),
            char_count: self.char_count(text, true),
            lexicon_count,
            syllable_count: self.syllable_count(text)?,
            sentence_count: self.sentence_count(text),
            avg_sentence_length: self.avg_sentence_length(text),
            avg_syllables_per_word: self.avg_syllables_per_word(text)?,
            avg_letter_per_word: self.avg_letter_per_word(text),
            avg_sentence_per_word: self.avg_sentence_per_word(text),
            flesch_reading_ease: self.flesch_reading_ease(text)?,
            flesch_kincaid_grade: self.flesch_kincaid_grade(text)?,
            polysyllab_count: self.polysyllab_count(text)?,
            smog_index: self.smog_index(text)?,
            coleman_liau_index: self.coleman_liau_index(text),
            automated_readability_index: self.automated_readability_index(text),
            linsear_write_formula: self.linsear_write_formula(text)?,
            difficult_words: self.difficult_words(text)?,
            dale_chall_readability_score: self.dale_chall_readability_score(text)?,
            gunning_fog: self.gunning_fog(text)?,
            lix: self.lix(text)?,
            grade: consensus.grade,
            text_standard: consensus.label(),
            votes: consensus.tally,
            max_grade,
            over_max,
        })
    }
}

/// Score `text` in `language`, optionally stripping markdown first.
///
/// # Arguments
///
/// * `text`: The text to analyze.
/// * `language`: Language tag selecting patterns and easy words.
/// * `strip_md`: If `true`, strip markdown formatting before analysis.
/// * `max_grade`: Optional maximum acceptable consensus grade.
#[tracing::instrument(skip(text, language), fields(text_len = text.len(), strip_md))]
pub fn check_readability(
    text: &str,
    language: impl Into<Language>,
    strip_md: bool,
    max_grade: Option<i64>,
) -> AnalysisResult<ReadabilityReport> {
    let prose = if strip_md {
        markdown::strip_to_prose(text)
    } else {
        text.to_string()
    };
    TextStat::new(language).report(&prose, max_grade)
}
