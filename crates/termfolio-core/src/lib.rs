//! Terminal emulation core: a virtual filesystem, a small shell and the
//! state machine that drives them from raw key events.
//!
//! Rendering is left to the host. Hosts create a [`TerminalMachine`] (or a
//! [`Session`] around one), forward keys, and read [`TerminalContext`]
//! after each transition.

pub mod config;
pub mod core;
pub mod models;
pub mod session;

pub use config::TerminalConfig;
pub use crate::core::error::{ContentError, ShellError, StoreError};
pub use crate::core::{BootToken, Effect, TerminalEvent, TerminalMachine, VirtualFs};
pub use models::{CommandRecord, EditorContext, EditorMode, Mode, RecordKind, TerminalContext};
pub use session::{ListenerScope, LoginStore, Session, WindowManager};
