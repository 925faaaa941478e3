// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture handler: the sink that buffers records for one test.

use crate::format::Formatter;
use crate::hierarchy::Handler;
use crate::level::Level;
use crate::record::Record;
use crate::scope::LevelTarget;
use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};
use std::sync::Arc;

#[derive(Debug, Default)]
struct CaptureState {
    level: Level,
    records: Vec<Record>,
    text: String,
}

/// Buffers every record routed to it, plus its formatted text.
///
/// Clones share the same buffer, so the hierarchy and the test can each
/// hold one.
#[derive(Debug)]
pub struct CaptureHandler {
    state: Arc<Mutex<CaptureState>>,
    formatter: Arc<Formatter>,
}

impl CaptureHandler {
    /// Handler with the default line format and `NOTSET` threshold.
    pub fn new() -> Self {
        Self::with_formatter(Formatter::default())
    }

    pub fn with_formatter(formatter: Formatter) -> Self {
        Self {
            state: Arc::new(Mutex::new(CaptureState::default())),
            formatter: Arc::new(formatter),
        }
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Store a record and append its formatted line to the text buffer.
    pub fn handle(&self, record: &Record) {
        let line = self.formatter.format(record);
        let mut state = self.state.lock();
        state.records.push(record.clone());
        state.text.push_str(&line);
        state.text.push('\n');
    }

    /// Everything formatted so far.
    pub fn text(&self) -> String {
        self.state.lock().text.clone()
    }

    /// Snapshot of the record buffer, in arrival order.
    pub fn records(&self) -> Vec<Record> {
        self.state.lock().records.clone()
    }

    /// Live, mutable view of the record buffer.
    pub fn records_mut(&self) -> MappedMutexGuard<'_, Vec<Record>> {
        MutexGuard::map(self.state.lock(), |state| &mut state.records)
    }

    /// Replace the record buffer. The text buffer is left as is.
    pub fn set_records(&self, records: Vec<Record>) {
        self.state.lock().records = records;
    }

    /// Drop every captured record and the text rendered from them.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.records.clear();
        state.text.clear();
    }

    pub fn level(&self) -> Level {
        self.state.lock().level
    }

    pub fn set_level(&self, level: Level) {
        self.state.lock().level = level;
    }

    pub fn len(&self) -> usize {
        self.state.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().records.is_empty()
    }
}

impl Default for CaptureHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CaptureHandler {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            formatter: Arc::clone(&self.formatter),
        }
    }
}

impl Handler for CaptureHandler {
    fn level(&self) -> Level {
        CaptureHandler::level(self)
    }

    fn handle(&self, record: &Record) {
        CaptureHandler::handle(self, record);
    }
}

impl LevelTarget for CaptureHandler {
    fn level(&self) -> Level {
        CaptureHandler::level(self)
    }

    fn set_level(&self, level: Level) {
        CaptureHandler::set_level(self, level);
    }

    fn describe(&self) -> String {
        "capture handler".to_string()
    }
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
