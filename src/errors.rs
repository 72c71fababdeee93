//! Error types for the aligner.
//!
//! Only configuration, resource loading and input-size checks are fallible.
//! Malformed dependency edges, empty sentences and passes without candidates
//! are not errors: they contribute no evidence and produce no alignments.

use thiserror::Error;

/// Which sentence of a pair an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceSide {
    Source,
    Target,
}

impl std::fmt::Display for SentenceSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentenceSide::Source => f.write_str("source"),
            SentenceSide::Target => f.write_str("target"),
        }
    }
}

/// Errors that can occur while configuring or running the aligner.
#[derive(Debug, Error)]
pub enum AlignError {
    /// Reading a paraphrase table or config file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A paraphrase table line could not be parsed.
    #[error("paraphrase table line {line}: {message}")]
    ParaphraseTable { line: usize, message: String },

    /// The configuration could not be decoded.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A configuration value is out of range.
    #[error("invalid value for `{field}`: {message}")]
    InvalidConfig { field: &'static str, message: String },

    /// A sentence exceeds the configured length cap.
    #[error("{side} sentence has {length} tokens, limit is {limit}")]
    SentenceTooLong {
        side: SentenceSide,
        length: usize,
        limit: usize,
    },
}

/// Result type for aligner operations.
pub type AlignResult<T> = Result<T, AlignError>;
