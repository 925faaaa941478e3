// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The accessor a test receives to inspect and steer log capture.

use crate::error::Result;
use crate::filter::{MessageMatcher, RecordFilter};
use crate::handler::CaptureHandler;
use crate::level::Level;
use crate::record::{Record, RecordTuple};
use crate::scope::{self, LevelGuard, LevelTarget, LoggerRegistry, NamedLogger};
use std::sync::Arc;

/// Access and control of log capturing for one test.
///
/// Storage lives in the wrapped [`CaptureHandler`]; level changes on named
/// loggers go through the injected [`LoggerRegistry`].
#[derive(Clone)]
pub struct LogCaptureFixture {
    handler: CaptureHandler,
    registry: Arc<dyn LoggerRegistry>,
}

impl LogCaptureFixture {
    pub fn new(handler: CaptureHandler, registry: Arc<dyn LoggerRegistry>) -> Self {
        Self { handler, registry }
    }

    pub fn handler(&self) -> &CaptureHandler {
        &self.handler
    }

    /// Formatted log text.
    pub fn text(&self) -> String {
        self.handler.text()
    }

    /// Captured records, oldest first.
    pub fn records(&self) -> Vec<Record> {
        self.handler.records()
    }

    /// `(logger, level, message)` for each record, for assertion comparison.
    pub fn record_tuples(&self) -> Vec<RecordTuple> {
        self.handler.records().iter().map(Record::to_tuple).collect()
    }

    /// Records matching every given criterion.
    ///
    /// * `name` - exact logger name; root-logger records are named `root`
    /// * `level` - exact level
    /// * `message` - substring of, or regex found in, the rendered message
    ///
    /// Only `None` leaves a criterion out: `Some("")` matches records with an
    /// empty name and `Some(Level::NOTSET)` matches records at level 0, so
    /// either usually selects nothing.
    pub fn filter_records(
        &self,
        name: Option<&str>,
        level: Option<Level>,
        message: Option<MessageMatcher>,
    ) -> Vec<Record> {
        self.filter(&RecordFilter::from_parts(name, level, message))
    }

    /// Tuple form of [`filter_records`](Self::filter_records).
    pub fn filter_record_tuples(
        &self,
        name: Option<&str>,
        level: Option<Level>,
        message: Option<MessageMatcher>,
    ) -> Vec<RecordTuple> {
        self.filter_tuples(&RecordFilter::from_parts(name, level, message))
    }

    pub fn filter(&self, filter: &RecordFilter) -> Vec<Record> {
        filter.apply(&self.handler.records())
    }

    pub fn filter_tuples(&self, filter: &RecordFilter) -> Vec<RecordTuple> {
        filter.apply_tuples(self.record_tuples())
    }

    /// Forget everything captured so far.
    pub fn clear(&self) {
        self.handler.clear();
    }

    /// Set the capture level for the rest of the test.
    ///
    /// Without a logger name the level goes on the capture handler; with one
    /// it goes on that logger instead. `Some("")` names the root logger, so
    /// only `None` targets the handler.
    pub fn set_level(&self, level: Level, logger: Option<&str>) {
        scope::set_level(self.target(logger).as_ref(), level);
    }

    /// Like [`set_level`](Self::set_level), undone when the guard drops.
    pub fn at_level(&self, level: Level, logger: Option<&str>) -> LevelGuard {
        scope::scoped_level(self.target(logger), level)
    }

    /// Run `f` with the level changed, then restore it.
    pub fn with_level<T>(&self, level: Level, logger: Option<&str>, f: impl FnOnce() -> T) -> T {
        scope::with_level(self.target(logger), level, f)
    }

    /// Resolve a level name (`"CRITICAL"`, or a custom one registered at any
    /// point before the call).
    pub fn level(&self, name: &str) -> Result<Level> {
        self.registry.lookup_level(name)
    }

    fn target(&self, logger: Option<&str>) -> Box<dyn LevelTarget> {
        match logger {
            Some(name) => Box::new(NamedLogger::new(Arc::clone(&self.registry), name)),
            None => Box::new(self.handler.clone()),
        }
    }
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;
