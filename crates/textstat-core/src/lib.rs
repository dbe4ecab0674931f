//! Core library for textstat.
//!
//! Readability statistics for plain text: character, word, syllable and
//! sentence counts, the classic readability formulas built on them, and a
//! consensus grade level across formulas.
//!
//! # Modules
//!
//! - [`engine`] - The [`TextStat`] engine and its per-language resources
//! - [`formulas`] - Flesch, SMOG, Coleman-Liau, ARI, Linsear Write, Dale-Chall, Fog, LIX
//! - [`consensus`] - Grade voting across formulas
//! - [`metric`] - The fixed metric set, addressable by name
//! - [`facade`] - One-call functions for the default language
//! - [`readability`] - Every metric at once, as a serializable report
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use textstat_core::TextStat;
//!
//! let stat = TextStat::default();
//! let text = "Playing games has always been thought to be important.";
//! println!("Flesch Reading Ease: {}", stat.flesch_reading_ease(text).unwrap());
//! println!("Grade: {}", stat.text_standard(text, false).unwrap());
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod consensus;
pub mod dictionaries;
pub mod engine;
pub mod error;
pub mod facade;
pub mod formulas;
pub mod language;
pub mod markdown;
pub mod metric;
pub mod readability;
pub mod syllables;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use consensus::{Consensus, GradeTally, TextStandard};
pub use dictionaries::{
    dictionary_override, dictionary_path, reset_dictionary_path, set_dictionary_path,
};
pub use engine::TextStat;
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use language::Language;
pub use metric::{Metric, MetricValue};
pub use readability::{ReadabilityReport, check_readability};
pub use syllables::{Hyphenator, PatternHyphenator};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
