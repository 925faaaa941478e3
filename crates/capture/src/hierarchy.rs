// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named logger hierarchy.
//!
//! Loggers are addressed by dotted names (`app.net.conn`); the root logger
//! has the empty name. A logger's own level of `NOTSET` means "inherit", and
//! the effective level is the first explicit level found walking towards the
//! root. A log call below the effective level is dropped; otherwise the
//! record is offered to the handlers of the logger and of each ancestor,
//! stopping after a logger whose `propagate` flag is off. Each handler then
//! applies its own threshold.

use crate::error::Result;
use crate::level::{Level, LevelRegistry};
use crate::record::{Location, Record};
use crate::scope::LoggerRegistry;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::panic::Location as CallSite;
use std::sync::{Arc, OnceLock};

/// Name of the root logger.
pub const ROOT: &str = "";

/// Name root-logger records carry.
pub const ROOT_RECORD_NAME: &str = "root";

/// Level the root logger starts with.
pub const ROOT_DEFAULT_LEVEL: Level = Level::WARNING;

/// A sink attached to a logger.
pub trait Handler: Send + Sync {
    /// Records below this level are ignored by the handler.
    fn level(&self) -> Level;

    fn handle(&self, record: &Record);
}

/// Identifies one attachment of a handler, for detaching it later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

struct LoggerNode {
    level: Level,
    propagate: bool,
    handlers: Vec<(HandlerId, Arc<dyn Handler>)>,
}

impl LoggerNode {
    fn new() -> Self {
        Self {
            level: Level::NOTSET,
            propagate: true,
            handlers: Vec::new(),
        }
    }
}

struct Inner {
    loggers: HashMap<String, LoggerNode>,
    levels: LevelRegistry,
    next_id: u64,
}

impl Inner {
    fn node(&mut self, name: &str) -> &mut LoggerNode {
        self.loggers
            .entry(name.to_string())
            .or_insert_with(LoggerNode::new)
    }
}

/// The logger tree plus the level-name registry it resolves against.
pub struct Hierarchy {
    inner: RwLock<Inner>,
}

static GLOBAL: OnceLock<Arc<Hierarchy>> = OnceLock::new();

impl Hierarchy {
    pub fn new() -> Self {
        let mut root = LoggerNode::new();
        root.level = ROOT_DEFAULT_LEVEL;
        let mut loggers = HashMap::new();
        loggers.insert(ROOT.to_string(), root);

        Self {
            inner: RwLock::new(Inner {
                loggers,
                levels: LevelRegistry::new(),
                next_id: 0,
            }),
        }
    }

    /// Process-wide hierarchy, fed by the `log` bridge.
    pub fn global() -> Arc<Hierarchy> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Hierarchy::new())))
    }

    /// Handle for logging through the named logger.
    pub fn logger(&self, name: &str) -> Logger<'_> {
        Logger {
            hierarchy: self,
            name: name.to_string(),
        }
    }

    /// The logger's own level, `NOTSET` when it inherits.
    pub fn level(&self, name: &str) -> Level {
        let inner = self.inner.read();
        match inner.loggers.get(name) {
            Some(node) => node.level,
            None => Level::NOTSET,
        }
    }

    pub fn set_level(&self, name: &str, level: Level) {
        self.inner.write().node(name).level = level;
    }

    pub fn effective_level(&self, name: &str) -> Level {
        let inner = self.inner.read();
        let mut current = Some(name);
        while let Some(n) = current {
            if let Some(node) = inner.loggers.get(n) {
                if node.level != Level::NOTSET {
                    return node.level;
                }
            }
            current = parent(n);
        }
        Level::NOTSET
    }

    pub fn is_enabled_for(&self, name: &str, level: Level) -> bool {
        level >= self.effective_level(name)
    }

    pub fn propagate(&self, name: &str) -> bool {
        let inner = self.inner.read();
        inner.loggers.get(name).map_or(true, |node| node.propagate)
    }

    pub fn set_propagate(&self, name: &str, propagate: bool) {
        self.inner.write().node(name).propagate = propagate;
    }

    pub fn attach(&self, name: &str, handler: Arc<dyn Handler>) -> HandlerId {
        let mut inner = self.inner.write();
        let id = HandlerId(inner.next_id);
        inner.next_id += 1;
        inner.node(name).handlers.push((id, handler));
        tracing::trace!(logger = record_name(name), ?id, "attached handler");
        id
    }

    /// Remove one attachment. Returns false if it was not attached to `name`.
    pub fn detach(&self, name: &str, id: HandlerId) -> bool {
        let mut inner = self.inner.write();
        let Some(node) = inner.loggers.get_mut(name) else {
            return false;
        };
        let before = node.handlers.len();
        node.handlers.retain(|(handler_id, _)| *handler_id != id);
        let removed = node.handlers.len() != before;
        tracing::trace!(logger = record_name(name), ?id, removed, "detached handler");
        removed
    }

    pub fn handler_count(&self, name: &str) -> usize {
        let inner = self.inner.read();
        inner.loggers.get(name).map_or(0, |node| node.handlers.len())
    }

    /// Add a custom level name, visible to later lookups.
    pub fn register_level(&self, name: &str, level: Level) {
        self.inner.write().levels.register(name, level);
    }

    pub fn lookup_level(&self, name: &str) -> Result<Level> {
        self.inner.read().levels.lookup(name)
    }

    pub fn level_name(&self, level: Level) -> String {
        self.inner.read().levels.name_of(level)
    }

    /// Snapshot of the level-name registry.
    pub fn levels(&self) -> LevelRegistry {
        self.inner.read().levels.clone()
    }

    /// Log a pre-formatted message.
    #[track_caller]
    pub fn log(&self, name: &str, level: Level, message: impl Into<String>) {
        if !self.is_enabled_for(name, level) {
            return;
        }
        let record = Record::new(record_name(name), level, message);
        self.emit(record, CallSite::caller());
    }

    /// Log a `{}` template with positional arguments.
    ///
    /// Rendering errors go back to the caller; nothing is emitted then.
    #[track_caller]
    pub fn log_args<I>(&self, name: &str, level: Level, template: &str, args: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        if !self.is_enabled_for(name, level) {
            return Ok(());
        }
        let record = Record::with_args(record_name(name), level, template, args)?;
        self.emit(record, CallSite::caller());
        Ok(())
    }

    fn emit(&self, record: Record, site: &CallSite<'_>) {
        let level_name = self.level_name(record.level());
        let record = record
            .with_level_name(level_name)
            .with_location(Location {
                file: site.file().to_string(),
                line: site.line(),
                module_path: None,
            });
        self.dispatch(&record);
    }

    /// Offer an already-built record to the handlers of `record.name()` and
    /// its ancestors; a record named `root` goes to the root logger. The
    /// logger's level is not consulted here.
    pub fn dispatch(&self, record: &Record) {
        let logger = match record.name() {
            ROOT_RECORD_NAME => ROOT,
            name => name,
        };
        for handler in self.handlers_for(logger) {
            if record.level() >= handler.level() {
                handler.handle(record);
            }
        }
    }

    fn handlers_for(&self, name: &str) -> Vec<Arc<dyn Handler>> {
        let inner = self.inner.read();
        let mut handlers = Vec::new();
        let mut current = Some(name);
        while let Some(n) = current {
            if let Some(node) = inner.loggers.get(n) {
                handlers.extend(node.handlers.iter().map(|(_, h)| Arc::clone(h)));
                if !node.propagate {
                    break;
                }
            }
            current = parent(n);
        }
        handlers
    }
}

impl Default for Hierarchy {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerRegistry for Hierarchy {
    fn logger_level(&self, name: &str) -> Level {
        self.level(name)
    }

    fn set_logger_level(&self, name: &str, level: Level) {
        self.set_level(name, level);
    }

    fn lookup_level(&self, name: &str) -> Result<Level> {
        Hierarchy::lookup_level(self, name)
    }
}

fn parent(name: &str) -> Option<&str> {
    if name.is_empty() {
        return None;
    }
    match name.rsplit_once('.') {
        Some((prefix, _)) => Some(prefix),
        None => Some(ROOT),
    }
}

/// Name stamped on records logged through `logger`.
pub fn record_name(logger: &str) -> &str {
    if logger == ROOT {
        ROOT_RECORD_NAME
    } else {
        logger
    }
}

/// A named logger bound to a hierarchy.
pub struct Logger<'a> {
    hierarchy: &'a Hierarchy,
    name: String,
}

impl Logger<'_> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Level {
        self.hierarchy.level(&self.name)
    }

    pub fn set_level(&self, level: Level) {
        self.hierarchy.set_level(&self.name, level);
    }

    pub fn effective_level(&self) -> Level {
        self.hierarchy.effective_level(&self.name)
    }

    pub fn is_enabled_for(&self, level: Level) -> bool {
        self.hierarchy.is_enabled_for(&self.name, level)
    }

    /// Child logger, `self.name` + `.` + `suffix`.
    pub fn child(&self, suffix: &str) -> Logger<'_> {
        let name = if self.name.is_empty() {
            suffix.to_string()
        } else {
            format!("{}.{}", self.name, suffix)
        };
        Logger {
            hierarchy: self.hierarchy,
            name,
        }
    }

    #[track_caller]
    pub fn log(&self, level: Level, message: impl Into<String>) {
        self.hierarchy.log(&self.name, level, message);
    }

    #[track_caller]
    pub fn log_args<I>(&self, level: Level, template: &str, args: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.hierarchy.log_args(&self.name, level, template, args)
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.hierarchy.log(&self.name, Level::DEBUG, message);
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.hierarchy.log(&self.name, Level::INFO, message);
    }

    #[track_caller]
    pub fn warning(&self, message: impl Into<String>) {
        self.hierarchy.log(&self.name, Level::WARNING, message);
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.hierarchy.log(&self.name, Level::ERROR, message);
    }

    #[track_caller]
    pub fn critical(&self, message: impl Into<String>) {
        self.hierarchy.log(&self.name, Level::CRITICAL, message);
    }
}

#[cfg(test)]
#[path = "hierarchy_tests.rs"]
mod tests;
