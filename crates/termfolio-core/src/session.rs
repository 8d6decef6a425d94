//! Host-facing session around a [`TerminalMachine`].
//!
//! A session owns the machine together with its collaborators:
//! - [`WindowManager`] receives `open` requests
//! - [`LoginStore`] keeps the last login stamp between runs
//!
//! It also tracks whether the terminal holds keyboard focus. Raw keys are
//! only forwarded while a listener is live.

use crate::config::{LAST_LOGIN_KEY, TTY_NAME};
use crate::core::error::StoreError;
use crate::core::{BootToken, Effect, TerminalEvent, TerminalMachine};
use crate::models::{TerminalContext, WindowRequest};

use std::time::Duration;

// =============================================================================
// Collaborators
// =============================================================================

/// Parent window manager (the desktop shell in a browser host).
pub trait WindowManager {
    /// Focus the named window, opening it first when needed.
    fn focus_window(&mut self, request: &WindowRequest);
}

/// Persistence for the last login stamp, stored under [`LAST_LOGIN_KEY`].
///
/// The stamp is opaque to the core; hosts decide how to format it.
pub trait LoginStore {
    fn load(&self) -> Result<Option<String>, StoreError>;
    fn save(&mut self, stamp: &str) -> Result<(), StoreError>;
}

// =============================================================================
// Listener Scope
// =============================================================================

/// Keyboard listener guard. At most one listener is live at a time.
#[derive(Debug, Default)]
pub struct ListenerScope {
    active: bool,
}

impl ListenerScope {
    /// Attach the listener. Returns `false` if it was already attached.
    pub fn acquire(&mut self) -> bool {
        !std::mem::replace(&mut self.active, true)
    }

    /// Detach the listener. Returns `false` if nothing was attached.
    pub fn release(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

// =============================================================================
// Session
// =============================================================================

/// A mounted terminal.
pub struct Session<W, S> {
    machine: TerminalMachine,
    windows: W,
    store: S,
    listener: ListenerScope,
    last_login: String,
    mounted: bool,
}

impl<W: WindowManager, S: LoginStore> Session<W, S> {
    /// Mount a terminal and read the previous login stamp.
    ///
    /// `now` stands in for the previous login when the store is empty or
    /// unreadable.
    pub fn mount(machine: TerminalMachine, windows: W, store: S, now: impl Into<String>) -> Self {
        let last_login = match store.load() {
            Ok(Some(stamp)) => stamp,
            Ok(None) => now.into(),
            Err(err) => {
                log::warn!("could not read {LAST_LOGIN_KEY}: {err}");
                now.into()
            }
        };
        log::debug!("mounted session, last login {last_login}");

        Self {
            machine,
            windows,
            store,
            listener: ListenerScope::default(),
            last_login,
            mounted: true,
        }
    }

    pub fn last_login(&self) -> &str {
        &self.last_login
    }

    /// First banner line, e.g. `Last login: Sun Mar 14 23:14:25 on ttys001`.
    pub fn login_banner(&self) -> String {
        format!("Last login: {} on {}", self.last_login, TTY_NAME)
    }

    pub fn context(&self) -> &TerminalContext {
        self.machine.context()
    }

    pub fn windows(&self) -> &W {
        &self.windows
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // =========================================================================
    // Focus
    // =========================================================================

    pub fn focus(&mut self) {
        if self.mounted && self.listener.acquire() {
            log::debug!("keyboard listener attached");
        }
    }

    pub fn blur(&mut self) {
        if self.listener.release() {
            log::debug!("keyboard listener detached");
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listener.is_active()
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Raw key-down. Ignored while unfocused.
    pub fn key_down(&mut self, key: &str) {
        if !self.listener.is_active() {
            return;
        }
        let effects = self.machine.handle_key_down(key);
        self.run_effects(effects);
    }

    /// Raw key-up. Ignored while unfocused.
    pub fn key_up(&mut self, key: &str) {
        if !self.listener.is_active() {
            return;
        }
        let effects = self.machine.handle_key_up(key);
        self.run_effects(effects);
    }

    /// Send a named event straight to the machine.
    pub fn dispatch(&mut self, event: TerminalEvent) {
        if !self.mounted {
            return;
        }
        let effects = self.machine.send(event);
        self.run_effects(effects);
    }

    /// Editor boot timer the host should be running.
    pub fn pending_boot(&self) -> Option<(BootToken, Duration)> {
        self.machine.pending_boot()
    }

    /// Called by the host when a boot timer elapses.
    pub fn fire_boot_timer(&mut self, token: BootToken) {
        self.dispatch(TerminalEvent::EditorReady { token });
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::OpenWindow(request) => self.windows.focus_window(&request),
                Effect::ScheduleEditorBoot { token, delay } => {
                    log::debug!("editor boot {:?} due in {:?}", token, delay);
                }
            }
        }
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Cancel the boot timer, detach the listener and persist `now`.
    ///
    /// A second call does nothing.
    pub fn unmount(&mut self, now: &str) -> Result<(), StoreError> {
        if !self.mounted {
            return Ok(());
        }
        self.mounted = false;
        self.machine.cancel_pending_boot();
        self.blur();
        self.store.save(now)
    }
}
