//! CLI configuration.
//!
//! Values come from an optional TOML file; every field has a default, so an
//! empty file (or no file) is valid. Command-line flags are applied on top
//! in `main`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use termfolio_core::TerminalConfig;
use termfolio_core::config::{DEFAULT_BROWSER_WINDOW, DEFAULT_PROMPT_USER, EDITOR_BOOT_DELAY_MS};

use crate::CliError;

/// Default location of the last-login file.
pub const DEFAULT_LOGIN_STORE: &str = ".termfolio-login.json";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// User shown in the prompt
    pub prompt_user: String,
    /// Content document; the embedded one is used when unset
    pub content_path: Option<PathBuf>,
    pub login_store_path: PathBuf,
    pub boot_delay_ms: u64,
    /// Window name sent by `open`
    pub browser_window: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            prompt_user: DEFAULT_PROMPT_USER.to_string(),
            content_path: None,
            login_store_path: PathBuf::from(DEFAULT_LOGIN_STORE),
            boot_delay_ms: EDITOR_BOOT_DELAY_MS,
            browser_window: DEFAULT_BROWSER_WINDOW.to_string(),
        }
    }
}

impl CliConfig {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Settings handed to the core machine.
    pub fn terminal_config(&self) -> TerminalConfig {
        TerminalConfig {
            browser_window: self.browser_window.clone(),
            editor_boot_delay: Duration::from_millis(self.boot_delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(CliConfig::from_toml("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = CliConfig::from_toml(
            r#"
            prompt_user = "guest"
            boot_delay_ms = 0
            content_path = "site.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.prompt_user, "guest");
        assert_eq!(config.content_path, Some(PathBuf::from("site.json")));
        assert_eq!(config.browser_window, "chrome");
        assert_eq!(config.terminal_config().editor_boot_delay, Duration::ZERO);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(CliConfig::from_toml("colour = \"green\"").is_err());
    }
}
