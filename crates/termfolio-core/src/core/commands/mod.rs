//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed command lines
//! - `CommandResult` for command execution results
//! - `interpret` for running a raw line against the filesystem
//!
//! # Architecture
//!
//! Input is split on whitespace; the first token picks the built-in and the
//! rest are positional arguments. Parsing never fails: unknown names become
//! [`Command::Unknown`] and blank input becomes [`Command::Empty`].

mod execute;
mod result;

pub use execute::execute_command;
pub use result::{CommandAction, CommandResult};

use std::fmt;

use crate::config::TerminalConfig;
use crate::core::VirtualFs;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd foo`, `nvim bar.js`).
///
/// The path is stored as-is; validation happens during execution against
/// the virtual filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for PathArg {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Pwd,
    /// Arguments are ignored; always lists the cwd.
    Ls,
    /// `None` goes to the root.
    Cd(Option<PathArg>),
    Nvim(Option<PathArg>),
    /// Always refused.
    Cat(Option<PathArg>),
    Open(Option<PathArg>),
    /// Blank line.
    Empty,
    Unknown(String),
}

impl Command {
    /// Parse a raw command line. Names are case-sensitive.
    pub fn parse(input: &str) -> Self {
        let mut tokens = input.split_whitespace();
        let Some(name) = tokens.next() else {
            return Self::Empty;
        };
        let path = tokens.next().map(PathArg::new);

        match name {
            "pwd" => Self::Pwd,
            "ls" => Self::Ls,
            "cd" => Self::Cd(path),
            "nvim" => Self::Nvim(path),
            "cat" => Self::Cat(path),
            "open" => Self::Open(path),
            _ => Self::Unknown(name.to_string()),
        }
    }
}

// =============================================================================
// Interpretation
// =============================================================================

/// Parse and execute one command line.
///
/// Pure: the same line, cwd and filesystem always give the same result.
pub fn interpret(
    input: &str,
    cwd: &[String],
    fs: &VirtualFs,
    config: &TerminalConfig,
) -> CommandResult {
    execute_command(Command::parse(input), cwd, fs, config)
}

// =============================================================================
// Tests
// =============================================================================
