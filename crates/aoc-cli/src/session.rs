//! Session key storage.
//!
//! The key is the value of the site's `session` cookie, kept in a single file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use aoc_config::SessionConfig;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{AocError, Result};

static SESSION_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{128}$").expect("valid session key regex"));

/// Session keys are 128 hex digits.
pub fn looks_like_key(key: &str) -> bool {
    SESSION_KEY.is_match(key)
}

/// File-backed session key store.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the configured location.
    pub fn from_config(config: &SessionConfig) -> Result<Self> {
        config
            .resolved_path()
            .map(Self::new)
            .ok_or(AocError::NoSessionPath)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored key, trimmed. A missing or blank file means no key.
    pub fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let key = contents.trim();
                Ok((!key.is_empty()).then(|| key.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Trim and store `key`, creating parent directories. Returns the stored key.
    pub fn store(&self, key: &str) -> Result<String> {
        let key = key.trim();
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, key)?;
        tracing::info!(path = %self.path.display(), "stored session key");
        Ok(key.to_string())
    }
}
