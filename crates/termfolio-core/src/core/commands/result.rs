//! Command execution result type.

use crate::core::error::ShellError;
use crate::models::{RecordKind, WindowRequest};

/// Side request attached to a command result.
///
/// The interpreter never applies these itself; the state machine does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandAction {
    /// Move the cwd to these absolute segments.
    ChangeDirectory(Vec<String>),
    /// Enter editor mode on this file content.
    OpenEditor { file_content: String },
    /// Ask the window manager to focus or open a window.
    OpenWindow(WindowRequest),
}

/// Result of executing a command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Kind of log record to append
    pub kind: RecordKind,
    /// Text printed under the prompt line
    pub output: String,
    /// Optional request for the state machine
    pub action: Option<CommandAction>,
}

impl CommandResult {
    /// A real record with output and no action.
    pub fn output(text: impl Into<String>) -> Self {
        Self {
            kind: RecordKind::Real,
            output: text.into(),
            action: None,
        }
    }

    /// A real record with no output carrying an action.
    pub fn action(action: CommandAction) -> Self {
        Self {
            kind: RecordKind::Real,
            output: String::new(),
            action: Some(action),
        }
    }

    /// A fake record: visible, but never recalled.
    pub fn fake(text: impl Into<String>) -> Self {
        Self {
            kind: RecordKind::Fake,
            output: text.into(),
            action: None,
        }
    }

    /// A fake record carrying the error message.
    pub fn failed(err: &ShellError) -> Self {
        if let Some(path) = err.path() {
            log::debug!("lookup of '{path}' failed: {err}");
        }
        Self::fake(err.to_string())
    }
}
