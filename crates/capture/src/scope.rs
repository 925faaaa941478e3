// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Level scope management.
//!
//! A level can be changed permanently with [`set_level`] or for the life of
//! a [`LevelGuard`]. Guards restore the previous threshold when dropped, which
//! includes early returns, `?` propagation and panics unwinding through the
//! scope. Nested guards on the same target restore in reverse order of
//! creation because Rust drops them that way.

use crate::error::Result;
use crate::level::Level;
use std::sync::Arc;

/// Anything carrying an adjustable severity threshold.
pub trait LevelTarget {
    fn level(&self) -> Level;
    fn set_level(&self, level: Level);

    /// Short label for diagnostics.
    fn describe(&self) -> String;
}

/// Lookup-by-name access to the logger hierarchy.
///
/// Injected rather than reached through global state so that level handling
/// can be exercised against a fake.
pub trait LoggerRegistry: Send + Sync {
    /// The logger's own level (`NOTSET` when it inherits).
    fn logger_level(&self, name: &str) -> Level;

    fn set_logger_level(&self, name: &str, level: Level);

    /// Resolve a level name against the registry as it is right now.
    fn lookup_level(&self, name: &str) -> Result<Level>;
}

/// A logger addressed by name through a [`LoggerRegistry`].
pub struct NamedLogger {
    registry: Arc<dyn LoggerRegistry>,
    name: String,
}

impl NamedLogger {
    pub fn new(registry: Arc<dyn LoggerRegistry>, name: impl Into<String>) -> Self {
        Self {
            registry,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl LevelTarget for NamedLogger {
    fn level(&self) -> Level {
        self.registry.logger_level(&self.name)
    }

    fn set_level(&self, level: Level) {
        self.registry.set_logger_level(&self.name, level);
    }

    fn describe(&self) -> String {
        format!("logger {:?}", self.name)
    }
}

/// Set a threshold for the rest of the test. The old value is not kept.
pub fn set_level(target: &dyn LevelTarget, level: Level) {
    tracing::trace!(on = %target.describe(), %level, "set level");
    target.set_level(level);
}

/// Set a threshold until the returned guard is dropped.
pub fn scoped_level(target: Box<dyn LevelTarget>, level: Level) -> LevelGuard {
    LevelGuard::new(target, level)
}

/// Run `f` with `target` at `level`, restoring the previous level afterwards.
pub fn with_level<T>(target: Box<dyn LevelTarget>, level: Level, f: impl FnOnce() -> T) -> T {
    let _guard = scoped_level(target, level);
    f()
}

/// Restores a target's previous threshold on drop.
#[must_use = "the previous level is restored as soon as the guard is dropped"]
pub struct LevelGuard {
    target: Box<dyn LevelTarget>,
    previous: Level,
}

impl LevelGuard {
    fn new(target: Box<dyn LevelTarget>, level: Level) -> Self {
        let previous = target.level();
        tracing::trace!(on = %target.describe(), %previous, %level, "enter level scope");
        target.set_level(level);
        Self { target, previous }
    }

    /// The level that will be restored.
    pub fn previous(&self) -> Level {
        self.previous
    }
}

impl Drop for LevelGuard {
    fn drop(&mut self) {
        tracing::trace!(on = %self.target.describe(), level = %self.previous, "exit level scope");
        self.target.set_level(self.previous);
    }
}

#[cfg(test)]
#[path = "scope_tests.rs"]
mod tests;
