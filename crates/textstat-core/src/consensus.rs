//! Grade-level consensus across formulas.
//!
//! Every grade formula votes twice, once with its rounded score and once
//! with its ceiling, so a score straddling two grades supports both. Flesch
//! Reading Ease is not a grade, so it votes through a fixed score table. The
//! grade with the most votes wins; ties go to the grade voted for first.

use serde::{Deserialize, Serialize};

use crate::engine::TextStat;
use crate::error::AnalysisResult;

/// Insertion-ordered frequency table of grade votes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeTally {
    votes: Vec<i64>,
    counts: Vec<(i64, usize)>,
}

impl GradeTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one vote for `grade`.
    pub fn record(&mut self, grade: i64) {
        self.votes.push(grade);
        match self.counts.iter_mut().find(|(g, _)| *g == grade) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((grade, 1)),
        }
    }

    /// Record the rounded and the ceiling grade of `score`.
    pub fn record_range(&mut self, score: f64) {
        self.record(score.round() as i64);
        self.record(score.ceil() as i64);
    }

    /// The grade with the most votes, earliest first on ties.
    pub fn most_common(&self) -> Option<i64> {
        let mut best: Option<(i64, usize)> = None;
        for &(grade, count) in &self.counts {
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((grade, count));
            }
        }
        best.map(|(grade, _)| grade)
    }

    /// Every vote in the order it was cast.
    pub fn votes(&self) -> &[i64] {
        &self.votes
    }

    /// Distinct grades with their vote counts, in first-vote order.
    pub fn counts(&self) -> &[(i64, usize)] {
        &self.counts
    }
}

/// Grades a Flesch Reading Ease score stands for.
pub fn flesch_ease_grades(score: f64) -> &'static [i64] {
    if score >= 90.0 {
        &[5]
    } else if score >= 80.0 {
        &[6]
    } else if score >= 70.0 {
        &[7]
    } else if score >= 60.0 {
        &[8, 9]
    } else if score >= 50.0 {
        &[10]
    } else if score >= 40.0 {
        &[11]
    } else if score >= 30.0 {
        &[12]
    } else {
        &[13]
    }
}

/// The consensus grade together with the votes behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consensus {
    /// Winning grade level.
    pub grade: i64,
    /// All votes cast.
    pub tally: GradeTally,
}

impl Consensus {
    /// Human-readable range, e.g. `"10th and 11th grade"`.
    pub fn label(&self) -> String {
        format!("{}th and {}th grade", self.grade - 1, self.grade)
    }
}

/// Output of [`TextStat::text_standard`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextStandard {
    /// The bare consensus grade.
    Grade(f64),
    /// The formatted grade range.
    Label(String),
}

impl std::fmt::Display for TextStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grade(grade) => write!(f, "{grade:.1}"),
            Self::Label(label) => f.write_str(label),
        }
    }
}

impl TextStat {
    /// Tally grade votes from every grade-level formula.
    ///
    /// Votes are cast in a fixed order (Flesch-Kincaid, Flesch Reading Ease,
    /// SMOG, Coleman-Liau, ARI, Dale-Chall, Linsear Write, Gunning Fog),
    /// which decides ties.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn consensus(&self, text: &str) -> AnalysisResult<Consensus> {
        let mut tally = GradeTally::new();

        tally.record_range(self.flesch_kincaid_grade(text)?);
        for &grade in flesch_ease_grades(self.flesch_reading_ease(text)?) {
            tally.record(grade);
        }
        tally.record_range(self.smog_index(text)?);
        tally.record_range(self.coleman_liau_index(text));
        tally.record_range(self.automated_readability_index(text));
        tally.record_range(self.dale_chall_readability_score(text)?);
        tally.record_range(self.linsear_write_formula(text)?);
        tally.record_range(self.gunning_fog(text)?);

        // The Flesch Reading Ease table always votes, so the tally is never empty.
        let grade = tally.most_common().unwrap_or_default();
        tracing::debug!(grade, votes = ?tally.votes(), "consensus reached");
        Ok(Consensus { grade, tally })
    }

    /// Consensus grade, either as a number or as a `"Nth and Mth grade"` label.
    pub fn text_standard(&self, text: &str, numeric_output: bool) -> AnalysisResult<TextStandard> {
        let consensus = self.consensus(text)?;
        Ok(if numeric_output {
            TextStandard::Grade(consensus.grade as f64)
        } else {
            TextStandard::Label(consensus.label())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllables::tests::VowelGroups;

    const SAMPLE: &str = "The committee reviewed every proposal carefully. \
                          Several ideas seemed promising and practical. \
                          However, the budget remained a serious limitation. \
                          Members agreed to meet again next month.";

    fn engine() -> TextStat {
        TextStat::default()
            .with_hyphenator(VowelGroups)
            .with_easy_words([
                "the", "every", "ideas", "and", "a", "to", "meet", "again", "next", "month",
            ])
    }

    #[test]
    fn tally_picks_most_frequent() {
        let mut tally = GradeTally::new();
        for grade in [7, 9, 9, 8, 9, 7] {
            tally.record(grade);
        }
        assert_eq!(tally.most_common(), Some(9));
        assert_eq!(tally.counts(), &[(7, 2), (9, 3), (8, 1)]);
    }

    #[test]
    fn tally_breaks_ties_by_first_vote() {
        let mut tally = GradeTally::new();
        for grade in [12, 10, 10, 12, 11] {
            tally.record(grade);
        }
        assert_eq!(tally.most_common(), Some(12));
    }

    #[test]
    fn empty_tally_has_no_winner() {
        assert_eq!(GradeTally::new().most_common(), None);
    }

    #[test]
    fn record_range_votes_round_and_ceiling() {
        let mut tally = GradeTally::new();
        tally.record_range(10.2);
        tally.record_range(10.5);
        tally.record_range(11.0);
        tally.record_range(-1.5);
        assert_eq!(tally.votes(), &[10, 11, 11, 11, 11, 11, -2, -1]);
    }

    #[test]
    fn flesch_ease_table() {
        assert_eq!(flesch_ease_grades(120.0), &[5]);
        assert_eq!(flesch_ease_grades(90.0), &[5]);
        assert_eq!(flesch_ease_grades(85.5), &[6]);
        assert_eq!(flesch_ease_grades(70.0), &[7]);
        assert_eq!(flesch_ease_grades(65.0), &[8, 9]);
        assert_eq!(flesch_ease_grades(56.29), &[10]);
        assert_eq!(flesch_ease_grades(40.0), &[11]);
        assert_eq!(flesch_ease_grades(30.0), &[12]);
        assert_eq!(flesch_ease_grades(29.99), &[13]);
        assert_eq!(flesch_ease_grades(-40.0), &[13]);
    }

    #[test]
    fn consensus_on_sample() {
        let consensus = engine().consensus(SAMPLE).unwrap();
        assert_eq!(
            consensus.tally.votes(),
            &[13, 13, 13, 11, 12, 16, 17, 11, 11, 13, 14, 5, 5, 28, 28]
        );
        assert_eq!(consensus.grade, 13);
        assert_eq!(consensus.label(), "12th and 13th grade");
    }

    #[test]
    fn consensus_grade_is_one_of_the_votes() {
        let stat = engine();
        for text in [SAMPLE, "The cat sat.", "", "Extraordinary."] {
            let consensus = stat.consensus(text).unwrap();
            assert!(consensus.tally.votes().contains(&consensus.grade));
        }
    }

    #[test]
    fn text_standard_formats() {
        let stat = engine();
        assert_eq!(
            stat.text_standard(SAMPLE, false).unwrap(),
            TextStandard::Label("12th and 13th grade".to_string())
        );
        assert_eq!(stat.text_standard(SAMPLE, true).unwrap(), TextStandard::Grade(13.0));
        assert_eq!(stat.text_standard(SAMPLE, true).unwrap().to_string(), "13.0");
    }

    #[test]
    fn text_standard_serializes_untagged() {
        let label = serde_json::to_string(&TextStandard::Label("4th and 5th grade".into())).unwrap();
        assert_eq!(label, "\"4th and 5th grade\"");
        let grade = serde_json::to_string(&TextStandard::Grade(5.0)).unwrap();
        assert_eq!(grade, "5.0");
    }
}
