use std::io;
use std::path::PathBuf;

use termfolio_core::{ContentError, StoreError};
use thiserror::Error;

/// Startup and I/O failures of the command-line host.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("invalid key script: {0}")]
    KeyScript(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}
