//! Error types for textstat-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during text analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input text is empty or has no scorable content.
    #[error("no scorable text in input")]
    EmptyInput,

    /// No hyphenation patterns exist for the language tag.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The embedded hyphenation patterns could not be loaded.
    #[error("failed to load hyphenation patterns for {language}: {reason}")]
    HyphenationLoad {
        /// The language tag whose patterns failed to load.
        language: String,
        /// Loader error message.
        reason: String,
    },

    /// The easy-word dictionary for a language could not be read.
    #[error("easy-word dictionary for {language} not found at {path}")]
    DictionaryNotFound {
        /// The language tag that was requested.
        language: String,
        /// The file that was looked up.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An unknown metric name was provided.
    #[error("unknown metric: {name}. Use: {available}")]
    UnknownMetric {
        /// The metric name that was requested.
        name: String,
        /// Comma-separated list of available metric names.
        available: String,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
