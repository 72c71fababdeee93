//! Error types for the fixture harness.

use layered_align::AlignError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    /// A fixture file could not be read.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },

    /// A fixture file is not valid fixture TOML.
    #[error("failed to parse fixture: {path}: {message}")]
    Parse { path: String, message: String },

    /// The aligner rejected the fixture's configuration or sentences.
    #[error("alignment failed: {0}")]
    Align(#[from] AlignError),
}

pub type SpecResult<T> = Result<T, SpecError>;
