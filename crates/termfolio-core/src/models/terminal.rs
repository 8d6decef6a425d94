//! Terminal state types consumed by the rendering layer.

use std::collections::BTreeSet;
use std::fmt;

use super::DirEntry;
use crate::core::HistoryCursor;

// =============================================================================
// Command Log
// =============================================================================

/// Whether a log entry takes part in history recall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    /// Dispatched to the interpreter; recallable.
    Real,
    /// Synthetic entry (abort, failure message, blank line); never recalled.
    Fake,
}

/// A single entry of the visible command log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandRecord {
    /// The line as typed
    pub input: String,
    pub kind: RecordKind,
    /// Text printed under the prompt line (may be empty)
    pub output: String,
    /// Absolute cwd at the time the line was submitted
    pub cwd: String,
}

impl CommandRecord {
    pub fn real(input: impl Into<String>, output: impl Into<String>, cwd: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            kind: RecordKind::Real,
            output: output.into(),
            cwd: cwd.into(),
        }
    }

    pub fn fake(input: impl Into<String>, output: impl Into<String>, cwd: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            kind: RecordKind::Fake,
            output: output.into(),
            cwd: cwd.into(),
        }
    }
}

// =============================================================================
// Modes
// =============================================================================

/// Top-level mode of the terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Terminal,
    Editor,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminal => write!(f, "terminal"),
            Self::Editor => write!(f, "editor"),
        }
    }
}

/// Mode of the editor sub-machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Normal,
    Command,
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
        }
    }
}

/// State of the editor while the terminal is in editor mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorContext {
    pub mode: EditorMode,
    /// Text typed after `:`, including the colon
    pub command_buffer: String,
    pub file_content: String,
    /// False until the simulated boot delay has elapsed
    pub ready: bool,
}

// =============================================================================
// Window Requests
// =============================================================================

/// Request for the parent window manager to focus or open a window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowRequest {
    pub name: String,
    pub default_url: Option<String>,
}

// =============================================================================
// Terminal Context
// =============================================================================

/// Entries of the current directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CwdContents {
    Directory(Vec<DirEntry>),
    /// The cwd resolved to a file. The machine never enters this state.
    NotADirectory,
}

/// Snapshot of the terminal state machine.
///
/// The machine is the only writer; hosts read it after every transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerminalContext {
    pub(crate) cwd_path: Vec<String>,
    pub(crate) cwd_contents: CwdContents,
    pub(crate) commands: Vec<CommandRecord>,
    pub(crate) current_command: String,
    pub(crate) history: HistoryCursor,
    pub(crate) keys_pressed: BTreeSet<String>,
    pub(crate) editor: Option<EditorContext>,
}

impl TerminalContext {
    pub(crate) fn new(cwd_contents: CwdContents) -> Self {
        Self {
            cwd_path: Vec::new(),
            cwd_contents,
            commands: Vec::new(),
            current_command: String::new(),
            history: HistoryCursor::new(),
            keys_pressed: BTreeSet::new(),
            editor: None,
        }
    }

    /// Current directory as segments from the root.
    pub fn cwd_path(&self) -> &[String] {
        &self.cwd_path
    }

    /// Current directory as an absolute path (`/` at the root).
    pub fn cwd(&self) -> String {
        crate::core::VirtualFs::display_path(&self.cwd_path)
    }

    pub fn cwd_contents(&self) -> &CwdContents {
        &self.cwd_contents
    }

    /// The command log, oldest first.
    pub fn commands(&self) -> &[CommandRecord] {
        &self.commands
    }

    pub fn current_command(&self) -> &str {
        &self.current_command
    }

    pub fn history_index(&self) -> Option<usize> {
        self.history.index()
    }

    pub fn keys_pressed(&self) -> &BTreeSet<String> {
        &self.keys_pressed
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys_pressed.contains(key)
    }

    pub fn mode(&self) -> Mode {
        if self.editor.is_some() {
            Mode::Editor
        } else {
            Mode::Terminal
        }
    }

    pub fn editor(&self) -> Option<&EditorContext> {
        self.editor.as_ref()
    }
}
