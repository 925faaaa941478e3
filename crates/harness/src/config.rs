// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture configuration, read from TOML.
//!
//! ```toml
//! enabled = true
//! print_logs = true
//! format = "{levelname:<8} {name}: {message}"
//! level = "INFO"
//! logger = "my_crate"
//! ```

use crate::error::HarnessError;
use catchlog::{Formatter, Level, LevelRegistry, DEFAULT_FORMAT, ROOT};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_true() -> bool {
    true
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

/// How log capture is set up around each test phase.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CatchLogConfig {
    /// Install a capture handler at all (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Add captured text to the item's report sections (default: true)
    #[serde(default = "default_true")]
    pub print_logs: bool,

    /// Line format for captured text
    #[serde(default = "default_format")]
    pub format: String,

    /// Capture threshold as a level name or number (default: capture all)
    #[serde(default)]
    pub level: Option<String>,

    /// Logger the handler attaches to (default: root)
    #[serde(default)]
    pub logger: Option<String>,
}

impl Default for CatchLogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            print_logs: true,
            format: default_format(),
            level: None,
            logger: None,
        }
    }
}

impl CatchLogConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, HarnessError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path).map_err(|source| HarnessError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn formatter(&self) -> Result<Formatter, HarnessError> {
        Ok(Formatter::new(&self.format)?)
    }

    /// Capture threshold; `NOTSET` when no level is configured.
    pub fn resolve_level(&self, levels: &LevelRegistry) -> Result<Level, HarnessError> {
        match &self.level {
            Some(name) => Ok(levels.parse(name)?),
            None => Ok(Level::NOTSET),
        }
    }

    pub fn target_logger(&self) -> &str {
        self.logger.as_deref().unwrap_or(ROOT)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
