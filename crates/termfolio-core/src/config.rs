//! Terminal configuration.
//!
//! Centralizes the constants used by the state machine and the interpreter.
//! The default filesystem content is loaded at compile time using `include_str!`.

use std::time::Duration;

// =============================================================================
// Content Assets (loaded at compile time)
// =============================================================================

/// Default filesystem content document (JSON).
pub const DEFAULT_CONTENT: &str = include_str!("../assets/content.json");

// =============================================================================
// Session
// =============================================================================

/// Key under which the last login timestamp is persisted.
pub const LAST_LOGIN_KEY: &str = "lastLogin";

/// Terminal device name shown in the login banner.
pub const TTY_NAME: &str = "ttys001";

/// Hint shown under the login banner.
pub const WELCOME_HINT: &str =
    "View resume at /home/personal/Resume.js (ex: nvim home/personal/Resume.js)";

/// Default user shown in the prompt.
pub const DEFAULT_PROMPT_USER: &str = "root";

// =============================================================================
// Interpreter
// =============================================================================

/// Window requested by `open`.
pub const DEFAULT_BROWSER_WINDOW: &str = "chrome";

/// Suffix appended to an aborted input line.
pub const ABORT_MARKER: &str = "^C";

/// Commands whose first argument is a path eligible for Tab completion.
pub const PATH_COMMANDS: &[&str] = &["ls", "cat", "cd", "nvim", "open"];

// =============================================================================
// Editor
// =============================================================================

/// Simulated editor boot latency.
pub const EDITOR_BOOT_DELAY_MS: u64 = 2000;

/// Editor command that leaves editor mode.
pub const EDITOR_QUIT_COMMAND: &str = ":q";

// =============================================================================
// Keys
// =============================================================================

/// Key names as reported by the host (DOM `KeyboardEvent.key` spelling).
pub mod keys {
    pub const TAB: &str = "Tab";
    pub const ENTER: &str = "Enter";
    pub const ARROW_UP: &str = "ArrowUp";
    pub const ARROW_DOWN: &str = "ArrowDown";
    pub const BACKSPACE: &str = "Backspace";
    pub const ESCAPE: &str = "Escape";
    pub const META: &str = "Meta";
    pub const CONTROL: &str = "Control";
    /// Held with [`META`] on an empty line: clear screen.
    pub const CLEAR_SCREEN: &str = "k";
    /// Held with [`CONTROL`]: abort the current line.
    pub const ABORT: &str = "c";
}

// =============================================================================
// Runtime Settings
// =============================================================================

/// Settings a host may override when constructing a machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerminalConfig {
    /// Window name passed to the window manager by `open`.
    pub browser_window: String,
    /// Delay before the editor becomes interactive.
    pub editor_boot_delay: Duration,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            browser_window: DEFAULT_BROWSER_WINDOW.to_string(),
            editor_boot_delay: Duration::from_millis(EDITOR_BOOT_DELAY_MS),
        }
    }
}
