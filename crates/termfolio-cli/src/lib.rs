//! Command-line host for the terminal core.
//!
//! Provides:
//! - [`config`] - TOML configuration with CLI overrides
//! - [`keys`] - key-script parsing for stdin and `--keys`
//! - [`host`] - playing strokes into a session and unmounting it
//! - [`render`] - plain-text rendering of terminal state
//! - [`store`] - JSON file login store
//! - [`format`] - login date formatting

pub mod config;
pub mod error;
pub mod format;
pub mod host;
pub mod keys;
pub mod render;
pub mod store;

pub use config::CliConfig;
pub use error::CliError;
