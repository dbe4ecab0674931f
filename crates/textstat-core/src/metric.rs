//! The fixed set of metrics an engine can compute, addressable by name.

use serde::{Deserialize, Serialize};

use crate::engine::TextStat;
use crate::error::{AnalysisError, AnalysisResult};

/// Every metric [`TextStat`] exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "clap", value(rename_all = "snake_case"))]
pub enum Metric {
    /// Characters, spaces excluded.
    CharCount,
    /// Words, punctuation stripped.
    LexiconCount,
    /// Estimated syllables.
    SyllableCount,
    /// Sentences.
    SentenceCount,
    /// Words per sentence.
    AvgSentenceLength,
    /// Syllables per word.
    AvgSyllablesPerWord,
    /// Characters per word.
    AvgLetterPerWord,
    /// Sentences per word.
    AvgSentencePerWord,
    /// Flesch Reading Ease.
    FleschReadingEase,
    /// Flesch-Kincaid Grade Level.
    FleschKincaidGrade,
    /// Words of three or more syllables.
    PolysyllabCount,
    /// SMOG index.
    SmogIndex,
    /// Coleman-Liau index.
    ColemanLiauIndex,
    /// Automated Readability Index.
    AutomatedReadabilityIndex,
    /// Linsear Write formula.
    LinsearWriteFormula,
    /// Distinct difficult words.
    DifficultWords,
    /// New Dale-Chall score.
    DaleChallReadabilityScore,
    /// Gunning Fog index.
    GunningFog,
    /// LIX.
    Lix,
    /// Consensus grade label.
    TextStandard,
}

impl Metric {
    /// All metrics in reporting order.
    pub const ALL: [Self; 20] = [
        Self::CharCount,
        Self::LexiconCount,
        Self::SyllableCount,
        Self::SentenceCount,
        Self::AvgSentenceLength,
        Self::AvgSyllablesPerWord,
        Self::AvgLetterPerWord,
        Self::AvgSentencePerWord,
        Self::FleschReadingEase,
        Self::FleschKincaidGrade,
        Self::PolysyllabCount,
        Self::SmogIndex,
        Self::ColemanLiauIndex,
        Self::AutomatedReadabilityIndex,
        Self::LinsearWriteFormula,
        Self::DifficultWords,
        Self::DaleChallReadabilityScore,
        Self::GunningFog,
        Self::Lix,
        Self::TextStandard,
    ];

    /// The metric's snake_case name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CharCount => "char_count",
            Self::LexiconCount => "lexicon_count",
            Self::SyllableCount => "syllable_count",
            Self::SentenceCount => "sentence_count",
            Self::AvgSentenceLength => "avg_sentence_length",
            Self::AvgSyllablesPerWord => "avg_syllables_per_word",
            Self::AvgLetterPerWord => "avg_letter_per_word",
            Self::AvgSentencePerWord => "avg_sentence_per_word",
            Self::FleschReadingEase => "flesch_reading_ease",
            Self::FleschKincaidGrade => "flesch_kincaid_grade",
            Self::PolysyllabCount => "polysyllab_count",
            Self::SmogIndex => "smog_index",
            Self::ColemanLiauIndex => "coleman_liau_index",
            Self::AutomatedReadabilityIndex => "automated_readability_index",
            Self::LinsearWriteFormula => "linsear_write_formula",
            Self::DifficultWords => "difficult_words",
            Self::DaleChallReadabilityScore => "dale_chall_readability_score",
            Self::GunningFog => "gunning_fog",
            Self::Lix => "lix",
            Self::TextStandard => "text_standard",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Metric {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|metric| metric.as_str() == s)
            .ok_or_else(|| AnalysisError::UnknownMetric {
                name: s.to_string(),
                available: Self::ALL.map(|m| m.as_str()).join(", "),
            })
    }
}

/// The value of one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// A whole-number count.
    Count(usize),
    /// A score or average.
    Score(f64),
    /// A formatted label.
    Label(String),
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Score(v) => write!(f, "{v}"),
            Self::Label(s) => f.write_str(s),
        }
    }
}

impl TextStat {
    /// Compute `metric` for `text`, using each operation's default flags.
    pub fn measure(&self, metric: Metric, text: &str) -> AnalysisResult<MetricValue> {
        use MetricValue::{Count, Label, Score};

        let value = match metric {
            Metric::CharCount => Count(self.char_count(text, true)),
            Metric::LexiconCount => Count(self.lexicon_count(text, true)),
            Metric::SyllableCount => Count(self.syllable_count(text)?),
            Metric::SentenceCount => Count(self.sentence_count(text)),
            Metric::AvgSentenceLength => Score(self.avg_sentence_length(text)),
            Metric::AvgSyllablesPerWord => Score(self.avg_syllables_per_word(text)?),
            Metric::AvgLetterPerWord => Score(self.avg_letter_per_word(text)),
            Metric::AvgSentencePerWord => Score(self.avg_sentence_per_word(text)),
            Metric::FleschReadingEase => Score(self.flesch_reading_ease(text)?),
            Metric::FleschKincaidGrade => Score(self.flesch_kincaid_grade(text)?),
            Metric::PolysyllabCount => Count(self.polysyllab_count(text)?),
            Metric::SmogIndex => Score(self.smog_index(text)?),
            Metric::ColemanLiauIndex => Score(self.coleman_liau_index(text)),
            Metric::AutomatedReadabilityIndex => Score(self.automated_readability_index(text)),
            Metric::LinsearWriteFormula => Score(self.linsear_write_formula(text)?),
            Metric::DifficultWords => Count(self.difficult_words(text)?),
            Metric::DaleChallReadabilityScore => Score(self.dale_chall_readability_score(text)?),
            Metric::GunningFog => Score(self.gunning_fog(text)?),
            Metric::Lix => Score(self.lix(text)?),
            Metric::TextStandard => Label(self.text_standard(text, false)?.to_string()),
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllables::tests::VowelGroups;

    #[test]
    fn names_round_trip_through_from_str() {
        for metric in Metric::ALL {
            assert_eq!(metric.as_str().parse::<Metric>().unwrap(), metric);
        }
    }

    #[test]
    fn unknown_name_lists_available() {
        let err = "readability".parse::<Metric>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown metric: readability"));
        assert!(message.contains("gunning_fog"));
    }

    #[test]
    fn serde_uses_snake_case_names() {
        let json = serde_json::to_string(&Metric::DaleChallReadabilityScore).unwrap();
        assert_eq!(json, "\"dale_chall_readability_score\"");
    }

    #[test]
    fn measure_matches_direct_calls() {
        let stat = TextStat::default()
            .with_hyphenator(VowelGroups)
            .with_easy_words(["the", "cat"]);
        let text = "The cat sat on the mat. It was happy.";

        assert_eq!(stat.measure(Metric::LexiconCount, text).unwrap(), MetricValue::Count(9));
        assert_eq!(
            stat.measure(Metric::GunningFog, text).unwrap(),
            MetricValue::Score(stat.gunning_fog(text).unwrap())
        );
        assert!(matches!(
            stat.measure(Metric::TextStandard, text).unwrap(),
            MetricValue::Label(ref label) if label.ends_with("grade")
        ));
    }

    #[test]
    fn every_metric_is_computable() {
        let stat = TextStat::default()
            .with_hyphenator(VowelGroups)
            .with_easy_words(["a"]);
        for metric in Metric::ALL {
            assert!(stat.measure(metric, "A short text. Another line.").is_ok(), "{metric}");
        }
    }

    #[test]
    fn lix_fault_surfaces_through_measure() {
        let stat = TextStat::default()
            .with_hyphenator(VowelGroups)
            .with_easy_words(["a"]);
        assert!(matches!(stat.measure(Metric::Lix, ""), Err(AnalysisError::EmptyInput)));
    }
}
