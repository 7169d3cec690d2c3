//! Crate-wide error type.

use thiserror::Error;

use crate::cli::ParseError;
use crate::pass::range::Rejection;

#[derive(Debug, Error)]
pub enum Error {
    /// No class, no `--all` and no custom range contributed a character.
    #[error("no character set selected (use -h for help)")]
    EmptyCharset,

    /// A custom range part was malformed and the strict policy is active.
    #[error("invalid range part {part:?}: {reason}")]
    InvalidRange { part: String, reason: Rejection },

    #[error("entropy source failed: {0}")]
    Entropy(#[from] rand::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Usage(#[from] ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) => 2,
            _ => 1,
        }
    }
}
