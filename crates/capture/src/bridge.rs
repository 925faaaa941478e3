// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bridge from the `log` facade into a [`Hierarchy`].
//!
//! The record target becomes the logger name with `::` turned into `.`, so
//! `my_crate::net` logs through `my_crate.net` and inherits from `my_crate`.

use crate::error::{CaptureError, Result};
use crate::hierarchy::{record_name, Hierarchy};
use crate::level::Level;
use crate::record::{Location, Record};
use std::sync::{Arc, OnceLock};

/// Numeric level for `log::Level::Trace`, registered as `TRACE`.
pub const TRACE: Level = Level::new(5);

pub fn level_from_log(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::ERROR,
        log::Level::Warn => Level::WARNING,
        log::Level::Info => Level::INFO,
        log::Level::Debug => Level::DEBUG,
        log::Level::Trace => TRACE,
    }
}

/// Logger name for a `log` target.
pub fn logger_name(target: &str) -> String {
    target.replace("::", ".")
}

/// `log::Log` implementation feeding a hierarchy.
pub struct LogBridge {
    hierarchy: Arc<Hierarchy>,
}

impl LogBridge {
    pub fn new(hierarchy: Arc<Hierarchy>) -> Self {
        hierarchy.register_level("TRACE", TRACE);
        Self { hierarchy }
    }

    pub fn hierarchy(&self) -> &Arc<Hierarchy> {
        &self.hierarchy
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.hierarchy.is_enabled_for(
            &logger_name(metadata.target()),
            level_from_log(metadata.level()),
        )
    }

    fn log(&self, record: &log::Record<'_>) {
        let name = logger_name(record.target());
        let level = level_from_log(record.level());
        if !self.hierarchy.is_enabled_for(&name, level) {
            return;
        }

        let mut captured = Record::new(record_name(&name), level, record.args().to_string())
            .with_level_name(self.hierarchy.level_name(level));
        if let (Some(file), Some(line)) = (record.file(), record.line()) {
            captured = captured.with_location(Location {
                file: file.to_string(),
                line,
                module_path: record.module_path().map(str::to_string),
            });
        }
        self.hierarchy.dispatch(&captured);
    }

    fn flush(&self) {}
}

static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Route the global `log` facade into [`Hierarchy::global`].
///
/// Safe to call repeatedly; fails only if some other logger got there first.
pub fn install() -> Result<()> {
    let installed = *INSTALLED.get_or_init(|| {
        let bridge = LogBridge::new(Hierarchy::global());
        match log::set_boxed_logger(Box::new(bridge)) {
            Ok(()) => {
                log::set_max_level(log::LevelFilter::Trace);
                true
            }
            Err(err) => {
                tracing::warn!(%err, "log bridge not installed");
                false
            }
        }
    });

    if installed {
        Ok(())
    } else {
        Err(CaptureError::LoggerAlreadySet)
    }
}

#[cfg(test)]
#[path = "bridge_tests.rs"]
mod tests;
