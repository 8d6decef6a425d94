//! Data models and types for the terminal.
//!
//! Contains domain types for:
//! - [`FsNode`], [`DirEntry`], [`ContentDocument`] - Virtual filesystem representation
//! - [`CommandRecord`], [`TerminalContext`], [`EditorContext`] - Terminal state snapshots
//! - [`WindowRequest`] - Requests for the parent window manager

mod filesystem;
mod terminal;

pub use filesystem::{ContentDocument, ContentEntry, DirEntry, FsNode};
pub use terminal::{
    CommandRecord, CwdContents, EditorContext, EditorMode, Mode, RecordKind, TerminalContext,
    WindowRequest,
};
