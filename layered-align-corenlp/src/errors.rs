//! Errors raised while reading CoreNLP output.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreNlpError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CoreNLP JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CoreNlpResult<T> = Result<T, CoreNlpError>;
