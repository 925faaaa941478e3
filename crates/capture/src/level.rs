// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Numeric severity levels and the name registry that resolves them.

use crate::error::{CaptureError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Numeric log severity. Higher is more severe.
///
/// Any value is a valid level; the associated constants are the built-in
/// names every [`LevelRegistry`] starts with. The default is `NOTSET`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Level(u32);

impl Level {
    pub const NOTSET: Level = Level(0);
    pub const DEBUG: Level = Level(10);
    pub const INFO: Level = Level(20);
    pub const WARNING: Level = Level(30);
    pub const ERROR: Level = Level(40);
    pub const CRITICAL: Level = Level(50);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for Level {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const BUILTIN: [(&str, Level); 6] = [
    ("CRITICAL", Level::CRITICAL),
    ("ERROR", Level::ERROR),
    ("WARNING", Level::WARNING),
    ("INFO", Level::INFO),
    ("DEBUG", Level::DEBUG),
    ("NOTSET", Level::NOTSET),
];

/// Bidirectional mapping between level names and numbers.
#[derive(Clone, Debug)]
pub struct LevelRegistry {
    by_name: HashMap<String, Level>,
    by_level: BTreeMap<Level, String>,
}

impl LevelRegistry {
    /// Registry holding only the six built-in names.
    pub fn new() -> Self {
        let mut registry = Self {
            by_name: HashMap::new(),
            by_level: BTreeMap::new(),
        };
        for (name, level) in BUILTIN {
            registry.register(name, level);
        }
        registry
    }

    /// Register (or rename) a level. Later registrations of the same number
    /// replace its display name; the old name keeps resolving.
    pub fn register(&mut self, name: &str, level: Level) {
        self.by_name.insert(name.to_string(), level);
        self.by_level.insert(level, name.to_string());
    }

    /// Resolve a level name.
    pub fn lookup(&self, name: &str) -> Result<Level> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| CaptureError::UnknownLevel(name.to_string()))
    }

    /// Display name of a level, `Level N` when unregistered.
    pub fn name_of(&self, level: Level) -> String {
        self.by_level
            .get(&level)
            .cloned()
            .unwrap_or_else(|| format!("Level {}", level.value()))
    }

    /// Parse either a registered name or a bare number.
    pub fn parse(&self, text: &str) -> Result<Level> {
        let text = text.trim();
        match text.parse::<u32>() {
            Ok(value) => Ok(Level(value)),
            Err(_) => self.lookup(&text.to_ascii_uppercase()),
        }
    }

    /// Names currently registered, most severe first.
    pub fn names(&self) -> Vec<(String, Level)> {
        self.by_level
            .iter()
            .rev()
            .map(|(level, name)| (name.clone(), *level))
            .collect()
    }
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "level_tests.rs"]
mod tests;
