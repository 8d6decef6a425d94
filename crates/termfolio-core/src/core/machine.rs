//! Terminal state machine.
//!
//! The single writer of [`TerminalContext`]. Hosts feed it raw keys (or named
//! events) and get back a list of [`Effect`]s to run; everything else is
//! applied to the context before `send` returns.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{ABORT_MARKER, TerminalConfig, keys};
use crate::core::commands::{CommandAction, interpret};
use crate::core::editor::EditorIntent;
use crate::core::history::{Recall, recallable};
use crate::core::{AutocompleteResult, VirtualFs, autocomplete};
use crate::models::{
    CommandRecord, CwdContents, DirEntry, EditorContext, Mode, TerminalContext, WindowRequest,
};

// =============================================================================
// Events and Effects
// =============================================================================

/// Identifies one scheduled editor boot. Only the latest token is honoured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BootToken(u64);

/// Named inputs of the machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TerminalEvent {
    KeyDown { key: String },
    KeyUp { key: String },
    /// Overwrite the input buffer.
    SetCurrentCommand { command: String },
    Tab,
    Enter,
    ArrowUp,
    ArrowDown,
    /// Empty the command log.
    Clear,
    /// Drop the input line, logging it with `^C`.
    Abort,
    /// Enter the editor on `file_content`, logging `command`.
    ChangeMode {
        file_content: String,
        command: CommandRecord,
    },
    /// A key routed to the editor sub-machine.
    EditorKey { key: String },
    /// The editor boot delay for `token` elapsed.
    EditorReady { token: BootToken },
}

/// Work the host must carry out after a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    OpenWindow(WindowRequest),
    /// Send [`TerminalEvent::EditorReady`] with `token` after `delay`.
    ScheduleEditorBoot { token: BootToken, delay: Duration },
}

// =============================================================================
// Machine
// =============================================================================

/// Terminal state machine over a shared read-only filesystem.
pub struct TerminalMachine {
    fs: Arc<VirtualFs>,
    config: TerminalConfig,
    context: TerminalContext,
    boot_generation: u64,
    pending_boot: Option<BootToken>,
}

impl TerminalMachine {
    /// Start in terminal mode at the root with an empty log.
    pub fn new(fs: Arc<VirtualFs>, config: TerminalConfig) -> Self {
        let contents = cwd_contents(&fs, &[]);
        Self {
            fs,
            config,
            context: TerminalContext::new(contents),
            boot_generation: 0,
            pending_boot: None,
        }
    }

    pub fn context(&self) -> &TerminalContext {
        &self.context
    }

    /// Owned copy of the current state for renderers that keep it around.
    pub fn snapshot(&self) -> TerminalContext {
        self.context.clone()
    }

    /// The boot timer the host should be running, if any.
    pub fn pending_boot(&self) -> Option<(BootToken, Duration)> {
        self.pending_boot
            .map(|token| (token, self.config.editor_boot_delay))
    }

    /// Invalidate the outstanding boot token; a late firing becomes a no-op.
    pub fn cancel_pending_boot(&mut self) {
        if let Some(token) = self.pending_boot.take() {
            log::debug!("cancelled editor boot {:?}", token);
        }
    }

    // =========================================================================
    // Raw Keys
    // =========================================================================

    /// Raw key-down from the host.
    ///
    /// Records the key, then routes it: to the editor in editor mode,
    /// otherwise to shortcuts, line editing and the named terminal events.
    pub fn handle_key_down(&mut self, key: &str) -> Vec<Effect> {
        let mut effects = self.send(TerminalEvent::KeyDown {
            key: key.to_string(),
        });

        let routed = match self.context.mode() {
            Mode::Editor => self.send(TerminalEvent::EditorKey {
                key: key.to_string(),
            }),
            Mode::Terminal => self.terminal_key(key),
        };
        effects.extend(routed);
        effects
    }

    /// Raw key-up from the host.
    pub fn handle_key_up(&mut self, key: &str) -> Vec<Effect> {
        self.send(TerminalEvent::KeyUp {
            key: key.to_string(),
        })
    }

    fn terminal_key(&mut self, key: &str) -> Vec<Effect> {
        let meta = self.context.is_pressed(keys::META);
        let control = self.context.is_pressed(keys::CONTROL);

        if meta && key.eq_ignore_ascii_case(keys::CLEAR_SCREEN) {
            if self.context.current_command.is_empty() {
                return self.send(TerminalEvent::Clear);
            }
            return Vec::new();
        }
        if control && key.eq_ignore_ascii_case(keys::ABORT) {
            if !self.context.current_command.is_empty() {
                return self.send(TerminalEvent::Abort);
            }
            return Vec::new();
        }

        match key {
            keys::TAB => self.send(TerminalEvent::Tab),
            keys::ENTER => self.send(TerminalEvent::Enter),
            keys::ARROW_UP => self.send(TerminalEvent::ArrowUp),
            keys::ARROW_DOWN => self.send(TerminalEvent::ArrowDown),
            keys::BACKSPACE => {
                let mut command = self.context.current_command.clone();
                command.pop();
                self.send(TerminalEvent::SetCurrentCommand { command })
            }
            _ if key.chars().count() == 1 && !meta && !control => {
                let command = format!("{}{}", self.context.current_command, key);
                self.send(TerminalEvent::SetCurrentCommand { command })
            }
            _ => Vec::new(),
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Apply one event and return the effects it produced.
    pub fn send(&mut self, event: TerminalEvent) -> Vec<Effect> {
        let mode = self.context.mode();
        match (mode, event) {
            (_, TerminalEvent::KeyDown { key }) => {
                self.context.keys_pressed.insert(key);
            }
            (_, TerminalEvent::KeyUp { .. }) => {
                self.context.keys_pressed.clear();
            }
            (_, TerminalEvent::EditorReady { token }) => self.finish_boot(token),

            (Mode::Terminal, TerminalEvent::SetCurrentCommand { command }) => {
                self.context.current_command = command;
                self.context.history.reset();
            }
            (Mode::Terminal, TerminalEvent::Tab) => self.complete(),
            (Mode::Terminal, TerminalEvent::Enter) => return self.submit(),
            (Mode::Terminal, TerminalEvent::ArrowUp) => self.recall(true),
            (Mode::Terminal, TerminalEvent::ArrowDown) => self.recall(false),
            (Mode::Terminal, TerminalEvent::Clear) => {
                self.context.commands.clear();
                self.context.history.reset();
            }
            (Mode::Terminal, TerminalEvent::Abort) => {
                let input = std::mem::take(&mut self.context.current_command);
                let record =
                    CommandRecord::fake(format!("{input}{ABORT_MARKER}"), "", self.context.cwd());
                self.context.commands.push(record);
                self.context.history.reset();
            }
            (Mode::Terminal, TerminalEvent::ChangeMode { file_content, command }) => {
                return self.enter_editor(file_content, command);
            }

            (Mode::Editor, TerminalEvent::EditorKey { key }) => {
                let intent = match self.context.editor.as_mut() {
                    Some(editor) => editor.handle_key(&key),
                    None => EditorIntent::Stay,
                };
                if intent == EditorIntent::Exit {
                    self.exit_editor();
                }
            }

            (mode, event) => {
                log::debug!("ignored {:?} in {} mode", event, mode);
            }
        }
        Vec::new()
    }

    fn complete(&mut self) {
        let ctx = &mut self.context;
        match autocomplete(&ctx.current_command, &ctx.cwd_path, &self.fs) {
            AutocompleteResult::Single(line) => {
                ctx.current_command = line;
                ctx.history.reset();
            }
            AutocompleteResult::Multiple(candidates) => {
                let record =
                    CommandRecord::fake(ctx.current_command.clone(), candidates.join(" "), ctx.cwd());
                ctx.commands.push(record);
            }
            AutocompleteResult::None => {}
        }
    }

    fn recall(&mut self, older: bool) {
        let ctx = &mut self.context;
        let entries = recallable(&ctx.commands);
        let recall = if older {
            ctx.history.older(&entries)
        } else {
            ctx.history.newer(&entries)
        };

        match recall {
            Recall::Select(input) => ctx.current_command = input.to_string(),
            Recall::Clear => ctx.current_command.clear(),
            Recall::Unchanged => {}
        }
    }

    fn submit(&mut self) -> Vec<Effect> {
        let input = std::mem::take(&mut self.context.current_command);
        self.context.history.reset();

        let result = interpret(&input, &self.context.cwd_path, &self.fs, &self.config);
        let record = CommandRecord {
            input,
            kind: result.kind,
            output: result.output,
            cwd: self.context.cwd(),
        };

        match result.action {
            None => {
                self.context.commands.push(record);
                Vec::new()
            }
            Some(CommandAction::ChangeDirectory(path)) => {
                self.context.commands.push(record);
                self.context.cwd_contents = cwd_contents(&self.fs, &path);
                log::debug!("cwd {} -> {}", self.context.cwd(), VirtualFs::display_path(&path));
                self.context.cwd_path = path;
                Vec::new()
            }
            Some(CommandAction::OpenEditor { file_content }) => {
                self.send(TerminalEvent::ChangeMode {
                    file_content,
                    command: record,
                })
            }
            Some(CommandAction::OpenWindow(request)) => {
                self.context.commands.push(record);
                vec![Effect::OpenWindow(request)]
            }
        }
    }

    // =========================================================================
    // Editor Lifecycle
    // =========================================================================

    fn enter_editor(&mut self, file_content: String, command: CommandRecord) -> Vec<Effect> {
        self.context.commands.push(command);
        self.context.editor = Some(EditorContext::new(file_content));

        self.boot_generation += 1;
        let token = BootToken(self.boot_generation);
        self.pending_boot = Some(token);
        log::debug!("entered editor, boot {:?} scheduled", token);

        vec![Effect::ScheduleEditorBoot {
            token,
            delay: self.config.editor_boot_delay,
        }]
    }

    fn finish_boot(&mut self, token: BootToken) {
        if self.pending_boot != Some(token) {
            log::warn!("ignoring stale editor boot {:?}", token);
            return;
        }
        self.pending_boot = None;
        if let Some(editor) = self.context.editor.as_mut() {
            editor.ready = true;
        }
    }

    fn exit_editor(&mut self) {
        self.context.editor = None;
        self.cancel_pending_boot();
        log::debug!("left editor");
    }
}

/// Listing for the directory at `path`.
fn cwd_contents(fs: &VirtualFs, path: &[String]) -> CwdContents {
    match fs.get(path).and_then(|node| node.entries()) {
        Some(entries) => CwdContents::Directory(entries.iter().map(DirEntry::from).collect()),
        None => CwdContents::NotADirectory,
    }
}
