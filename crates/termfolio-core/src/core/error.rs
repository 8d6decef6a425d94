//! Error types for the terminal core.
//!
//! One enum per domain:
//!
//! - [`ShellError`] - failures of a single command line. These are never
//!   fatal: the interpreter renders them into the command log and the
//!   machine keeps running.
//! - [`ContentError`] - problems with the filesystem content document,
//!   reported once at startup.
//! - [`StoreError`] - failures of the last-login store. Logged, never fatal
//!   to a running session.

use thiserror::Error;

/// A recoverable command failure.
///
/// The `Display` text is exactly what the user sees in the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// `cd` target missing or not a directory.
    #[error("File not found.")]
    PathNotFound { path: String },
    /// `nvim`/`open` target missing or not a file.
    #[error("File Not Found")]
    FileNotFound { path: String },
    /// First token is not a built-in.
    #[error("bash: {0}: command not found")]
    CommandNotFound(String),
    /// `cat` is deliberately unsupported.
    #[error("Only nvim is supported to view files!")]
    UnsupportedOperation,
}

impl ShellError {
    /// The path a lookup failed on, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::PathNotFound { path } | Self::FileNotFound { path } => Some(path.as_str()),
            Self::CommandNotFound(_) | Self::UnsupportedOperation => None,
        }
    }
}

/// Errors raised while building the virtual filesystem from content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The document is not valid JSON or does not match the schema.
    #[error("invalid content document: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two siblings share a name.
    #[error("duplicate entry '{name}' in '{parent}'")]
    DuplicateEntry { parent: String, name: String },
    /// Empty names, `.`/`..`, and names containing `/` cannot be addressed.
    #[error("invalid entry name '{0}'")]
    InvalidName(String),
    /// A node declared both `entries` and `content`, or neither.
    #[error("entry '{0}' must have exactly one of `entries` or `content`")]
    AmbiguousNode(String),
}

/// Errors raised by a [`LoginStore`](crate::session::LoginStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("login store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("login store is malformed: {0}")]
    Format(#[from] serde_json::Error),
    /// Backend not reachable (e.g. storage disabled by the host).
    #[error("login store unavailable: {0}")]
    Unavailable(String),
}
