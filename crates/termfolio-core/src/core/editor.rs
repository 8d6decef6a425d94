//! Modal editor sub-machine.
//!
//! Runs only while the terminal is in editor mode. Normal mode ignores
//! everything except `:`, which opens a command line; `:q` on that line
//! asks the outer machine to leave the editor.

use crate::config::{EDITOR_QUIT_COMMAND, keys};
use crate::models::{EditorContext, EditorMode};

/// What the outer machine should do after an editor key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorIntent {
    Stay,
    Exit,
}

impl EditorContext {
    /// Fresh editor on `file_content`, in normal mode and still booting.
    pub fn new(file_content: impl Into<String>) -> Self {
        Self {
            mode: EditorMode::Normal,
            command_buffer: String::new(),
            file_content: file_content.into(),
            ready: false,
        }
    }

    /// Feed one key to the editor.
    pub fn handle_key(&mut self, key: &str) -> EditorIntent {
        if !self.ready {
            log::debug!("editor booting, dropped key {key:?}");
            return EditorIntent::Stay;
        }

        match self.mode {
            EditorMode::Normal => {
                if key == ":" {
                    self.mode = EditorMode::Command;
                    self.command_buffer = ":".to_string();
                }
                EditorIntent::Stay
            }
            EditorMode::Command => self.handle_command_key(key),
        }
    }

    fn handle_command_key(&mut self, key: &str) -> EditorIntent {
        match key {
            keys::ENTER => {
                if self.command_buffer == EDITOR_QUIT_COMMAND {
                    return EditorIntent::Exit;
                }
                self.leave_command_mode();
            }
            keys::ESCAPE => self.leave_command_mode(),
            keys::BACKSPACE => {
                self.command_buffer.pop();
            }
            _ if key.chars().count() == 1 => self.command_buffer.push_str(key),
            // Modifiers and other named keys
            _ => {}
        }
        EditorIntent::Stay
    }

    fn leave_command_mode(&mut self) {
        self.command_buffer.clear();
        self.mode = EditorMode::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_editor() -> EditorContext {
        let mut editor = EditorContext::new("content");
        editor.ready = true;
        editor
    }

    fn type_keys(editor: &mut EditorContext, keys: &[&str]) -> EditorIntent {
        let mut intent = EditorIntent::Stay;
        for key in keys {
            intent = editor.handle_key(key);
        }
        intent
    }

    #[test]
    fn test_new_editor() {
        let editor = EditorContext::new("hello");
        assert_eq!(editor.mode, EditorMode::Normal);
        assert_eq!(editor.file_content, "hello");
        assert!(editor.command_buffer.is_empty());
        assert!(!editor.ready);
    }

    #[test]
    fn test_keys_dropped_while_booting() {
        let mut editor = EditorContext::new("hello");
        assert_eq!(type_keys(&mut editor, &[":", "q", "Enter"]), EditorIntent::Stay);
        assert_eq!(editor.mode, EditorMode::Normal);
        assert!(editor.command_buffer.is_empty());
    }

    #[test]
    fn test_colon_enters_command_mode() {
        let mut editor = ready_editor();
        editor.handle_key(":");
        assert_eq!(editor.mode, EditorMode::Command);
        assert_eq!(editor.command_buffer, ":");
    }

    #[test]
    fn test_normal_mode_ignores_other_keys() {
        let mut editor = ready_editor();
        type_keys(&mut editor, &["i", "x", "Enter", "Escape"]);
        assert_eq!(editor.mode, EditorMode::Normal);
        assert!(editor.command_buffer.is_empty());
    }

    #[test]
    fn test_quit() {
        let mut editor = ready_editor();
        assert_eq!(type_keys(&mut editor, &[":", "q", "Enter"]), EditorIntent::Exit);
    }

    #[test]
    fn test_backspace_edits_buffer() {
        let mut editor = ready_editor();
        type_keys(&mut editor, &[":", "w", "Backspace", "q"]);
        assert_eq!(editor.command_buffer, ":q");
        assert_eq!(editor.handle_key("Enter"), EditorIntent::Exit);
    }

    #[test]
    fn test_other_command_returns_to_normal() {
        let mut editor = ready_editor();
        assert_eq!(type_keys(&mut editor, &[":", "w", "q", "Enter"]), EditorIntent::Stay);
        assert_eq!(editor.mode, EditorMode::Normal);
        assert!(editor.command_buffer.is_empty());
    }

    #[test]
    fn test_escape_cancels() {
        let mut editor = ready_editor();
        type_keys(&mut editor, &[":", "q", "Escape"]);
        assert_eq!(editor.mode, EditorMode::Normal);
        assert!(editor.command_buffer.is_empty());
        // `q` alone in normal mode does nothing
        assert_eq!(editor.handle_key("Enter"), EditorIntent::Stay);
    }

    #[test]
    fn test_named_keys_not_appended() {
        let mut editor = ready_editor();
        type_keys(&mut editor, &[":", "Shift", "q", "Meta"]);
        assert_eq!(editor.command_buffer, ":q");
    }
}
