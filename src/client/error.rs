//! Errors raised while calling the receiver.

use thiserror::Error;

/// Failure of a single downstream call.
///
/// A non-2xx status is not a `CallError`; it is returned in-band.
#[derive(Debug, Error)]
pub enum CallError {
    /// Connection, TLS, redirect or body read failure.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("invalid downstream url: {0}")]
    InvalidUrl(String),

    #[error("missing value for path variable `{0}`")]
    MissingPathVariable(String),

    #[error("cannot read upload file {path}: {source}")]
    Upload {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}
