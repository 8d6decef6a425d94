//! Core logic of the terminal.
//!
//! This module provides:
//! - [`VirtualFs`] read-only virtual filesystem and path resolution
//! - [`autocomplete`] and [`complete`] for tab completion
//! - [`Command`] parsing and [`interpret`] execution
//! - [`HistoryCursor`] for arrow-key recall
//! - [`TerminalMachine`] driving all of the above from key events

mod autocomplete;
pub mod commands;
mod editor;
pub mod error;
mod filesystem;
mod history;
mod machine;

pub use autocomplete::{AutocompleteResult, autocomplete, complete};
pub use commands::{Command, CommandAction, CommandResult, interpret};
pub use editor::EditorIntent;
pub use filesystem::{ResolvedPath, VirtualFs};
pub use history::{HistoryCursor, Recall, recallable};
pub use machine::{BootToken, Effect, TerminalEvent, TerminalMachine};
