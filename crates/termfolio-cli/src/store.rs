//! Last-login store backed by a small JSON file.
//!
//! The file holds a flat object, e.g. `{ "lastLogin": "Sun Mar 14 23:14:25" }`.

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

use termfolio_core::config::LAST_LOGIN_KEY;
use termfolio_core::{LoginStore, StoreError};

#[derive(Clone, Debug)]
pub struct JsonLoginStore {
    path: PathBuf,
}

impl JsonLoginStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }
}

impl LoginStore for JsonLoginStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.remove(LAST_LOGIN_KEY))
    }

    fn save(&mut self, stamp: &str) -> Result<(), StoreError> {
        // Keep unrelated keys; start over if the file is unreadable.
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(LAST_LOGIN_KEY.to_string(), stamp.to_string());

        let json = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, json)?;
        log::debug!("saved last login to {}", self.path.display());
        Ok(())
    }
}
