//! Plain-text rendering of terminal state.
//!
//! The renderer is incremental: it remembers how much of the log it has
//! printed and which mode it last showed, and only prints what changed.

use std::io::{self, Write};

use termfolio_core::config::WELCOME_HINT;
use termfolio_core::{CommandRecord, EditorContext, EditorMode, Mode, TerminalContext};

/// Prompt for a cwd given as an absolute path, e.g. `[root ~]$`.
///
/// The root is shown as `~`; anything else by its last segment.
pub fn prompt(user: &str, cwd: &str) -> String {
    let dir = match cwd.rsplit('/').next() {
        Some(last) if !last.is_empty() => last,
        _ => "~",
    };
    format!("[{user} {dir}]$")
}

/// Lines for one log record: the prompt line, then its output if any.
pub fn record_lines(user: &str, record: &CommandRecord) -> Vec<String> {
    let mut lines = vec![format!("{} {}", prompt(user, &record.cwd), record.input)];
    if !record.output.is_empty() {
        lines.push(record.output.clone());
    }
    lines
}

/// Full-screen editor view.
pub fn editor_lines(editor: &EditorContext) -> Vec<String> {
    if !editor.ready {
        return vec!["Starting nvim...".to_string()];
    }

    let mut lines: Vec<String> = editor.file_content.lines().map(str::to_string).collect();
    lines.push(status_line(editor));
    lines
}

/// Bottom line of the editor: the mode, or the command being typed.
pub fn status_line(editor: &EditorContext) -> String {
    match editor.mode {
        EditorMode::Normal => format!("-- {} --", editor.mode),
        EditorMode::Command => editor.command_buffer.clone(),
    }
}

/// Incremental printer for a [`TerminalContext`].
pub struct Renderer {
    user: String,
    printed: usize,
    last_mode: Mode,
    last_editor: Option<EditorContext>,
}

impl Renderer {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            printed: 0,
            last_mode: Mode::Terminal,
            last_editor: None,
        }
    }

    /// Banner shown once at startup.
    pub fn banner(&self, out: &mut impl Write, login_line: &str) -> io::Result<()> {
        writeln!(out, "{login_line}")?;
        writeln!(out, "{WELCOME_HINT}")
    }

    /// Print whatever changed since the last call.
    pub fn render(&mut self, out: &mut impl Write, ctx: &TerminalContext) -> io::Result<()> {
        let commands = ctx.commands();
        if commands.len() < self.printed {
            // Log was cleared
            self.printed = 0;
        }
        for record in &commands[self.printed..] {
            for line in record_lines(&self.user, record) {
                writeln!(out, "{line}")?;
            }
        }
        self.printed = commands.len();

        match (self.last_mode, ctx.editor(), self.last_editor.as_ref()) {
            // Same screen, only the status line moved
            (_, Some(editor), Some(prev)) if prev.ready == editor.ready => {
                if prev != editor {
                    writeln!(out, "{}", status_line(editor))?;
                }
            }
            (_, Some(editor), _) => {
                for line in editor_lines(editor) {
                    writeln!(out, "{line}")?;
                }
            }
            (Mode::Editor, None, _) => writeln!(out, "{}", prompt(&self.user, &ctx.cwd()))?,
            _ => {}
        }
        self.last_mode = ctx.mode();
        self.last_editor = ctx.editor().cloned();

        out.flush()
    }
}
