//! Error types raised by the game library.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while setting the game up. Nothing in the running game
/// loop produces these; bad input during play is ignored instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("word list is empty")]
    EmptyWordList,

    #[error("invalid word {0:?}: words must be non-empty and purely alphabetic")]
    InvalidWord(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
