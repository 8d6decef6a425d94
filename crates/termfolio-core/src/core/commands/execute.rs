//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the virtual filesystem and returns results.

use crate::config::TerminalConfig;
use crate::core::VirtualFs;
use crate::core::error::ShellError;
use crate::models::WindowRequest;

use super::{Command, CommandAction, CommandResult, PathArg};

/// Execute a parsed command.
///
/// Nothing is mutated here. Directory changes, editor entry and window
/// requests come back as a [`CommandAction`] for the state machine to apply.
///
/// # Arguments
///
/// * `cmd` - The parsed command to execute
/// * `cwd` - Current directory as segments from the root
/// * `fs` - Virtual filesystem
/// * `config` - Terminal settings (window name for `open`)
pub fn execute_command(
    cmd: Command,
    cwd: &[String],
    fs: &VirtualFs,
    config: &TerminalConfig,
) -> CommandResult {
    match cmd {
        Command::Pwd => CommandResult::output(VirtualFs::display_path(cwd)),
        Command::Ls => execute_ls(fs, cwd),
        Command::Cd(path) => execute_cd(path, fs, cwd),
        Command::Nvim(path) => execute_nvim(path, fs, cwd),
        Command::Cat(_) => CommandResult::failed(&ShellError::UnsupportedOperation),
        Command::Open(path) => execute_open(path, fs, cwd, config),
        Command::Empty => CommandResult::fake(""),
        Command::Unknown(name) => {
            CommandResult::output(ShellError::CommandNotFound(name).to_string())
        }
    }
}

/// Execute `ls` command.
fn execute_ls(fs: &VirtualFs, cwd: &[String]) -> CommandResult {
    match fs.get(cwd) {
        Some(dir) => CommandResult::output(VirtualFs::list_entries(dir).join(" ")),
        None => {
            log::warn!("ls: cwd {} does not resolve", VirtualFs::display_path(cwd));
            CommandResult::output("")
        }
    }
}

/// Execute `cd` command.
fn execute_cd(path: Option<PathArg>, fs: &VirtualFs, cwd: &[String]) -> CommandResult {
    let target = path.as_ref().map(PathArg::as_str).unwrap_or("/");

    match fs.directory(cwd, target) {
        Ok(resolved) => CommandResult::action(CommandAction::ChangeDirectory(resolved.path)),
        Err(err) => CommandResult::failed(&err),
    }
}

/// Execute `nvim` command.
fn execute_nvim(path: Option<PathArg>, fs: &VirtualFs, cwd: &[String]) -> CommandResult {
    let Some(path) = path else {
        return CommandResult::failed(&ShellError::FileNotFound {
            path: String::new(),
        });
    };

    match fs.file_content(cwd, path.as_str()) {
        Ok(content) => CommandResult::action(CommandAction::OpenEditor {
            file_content: content.to_string(),
        }),
        Err(err) => CommandResult::failed(&err),
    }
}

/// Execute `open` command.
///
/// The file content is the URL. A path that does not resolve still focuses
/// the browser window, just without a URL.
fn execute_open(
    path: Option<PathArg>,
    fs: &VirtualFs,
    cwd: &[String],
    config: &TerminalConfig,
) -> CommandResult {
    let default_url = path.and_then(|p| match fs.file_content(cwd, p.as_str()) {
        Ok(url) => Some(url.trim().to_string()),
        Err(err) => {
            log::debug!("open: {}: {}", p, err);
            None
        }
    });

    CommandResult::action(CommandAction::OpenWindow(WindowRequest {
        name: config.browser_window.clone(),
        default_url,
    }))
}
