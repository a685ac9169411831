use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the persistence collaborator. They never touch a live game.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("ledger i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed ledger: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown player {0:?}")]
    UnknownPlayer(String),
    #[error("invalid username {0:?}")]
    InvalidUsername(String),
    #[error("game is still in progress")]
    Unfinished,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed settings: {0}")]
    Toml(#[from] toml::de::Error),
}
