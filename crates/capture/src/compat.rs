// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Backward compatibility with the older capture-log API.
//!
//! The old API exposed `text()`, `records()` and `record_tuples()` as calls
//! and `setLevel`/`atLevel` as camel-case methods. Each has a deprecated
//! counterpart here that reports a warning and then delegates. Everything
//! else is reached through `Deref` to [`LogCaptureFixture`].

use crate::fixture::LogCaptureFixture;
use crate::level::Level;
use crate::record::{Record, RecordTuple};
use crate::scope::LevelGuard;
use parking_lot::MappedMutexGuard;
use std::ops::Deref;
use std::sync::Arc;

/// Warning code attached to every compatibility warning.
pub const COMPAT_WARNING_CODE: &str = "L1";

/// Receiver of deprecation warnings, owned by the test harness.
pub trait DeprecationSink: Send + Sync {
    fn warn(&self, code: &str, message: &str);
}

/// [`LogCaptureFixture`] plus the deprecated legacy entry points.
#[derive(Clone)]
pub struct CompatLogCaptureFixture {
    inner: LogCaptureFixture,
    sink: Arc<dyn DeprecationSink>,
}

impl CompatLogCaptureFixture {
    pub fn new(inner: LogCaptureFixture, sink: Arc<dyn DeprecationSink>) -> Self {
        Self { inner, sink }
    }

    pub fn fixture(&self) -> &LogCaptureFixture {
        &self.inner
    }

    fn warn_compat(&self, old: &str, new: &str) {
        let message = format!("{old} is deprecated, use {new} instead");
        tracing::debug!(code = COMPAT_WARNING_CODE, %message, "compat call");
        self.sink.warn(COMPAT_WARNING_CODE, &message);
    }

    #[deprecated(since = "0.1.0", note = "use `text()` on the fixture")]
    pub fn text_legacy(&self) -> String {
        self.warn_compat("'caplog.text()' syntax", "'caplog.text' property");
        self.inner.text()
    }

    /// Live record buffer; edits go straight to the capture handler.
    #[deprecated(since = "0.1.0", note = "use `records()` or `clear()` on the fixture")]
    pub fn records_legacy(&self) -> MappedMutexGuard<'_, Vec<Record>> {
        self.warn_compat(
            "'caplog.records()' syntax",
            "'caplog.records' property (or caplog.clear())",
        );
        self.inner.handler().records_mut()
    }

    #[deprecated(since = "0.1.0", note = "use `record_tuples()` on the fixture")]
    pub fn record_tuples_legacy(&self) -> Vec<RecordTuple> {
        self.warn_compat(
            "'caplog.record_tuples()' syntax",
            "'caplog.record_tuples' property",
        );
        self.inner.record_tuples()
    }

    #[deprecated(since = "0.1.0", note = "use `set_level()`")]
    pub fn set_level_legacy(&self, level: Level, logger: Option<&str>) {
        self.warn_compat("'caplog.setLevel()'", "'caplog.set_level()'");
        self.inner.set_level(level, logger);
    }

    #[deprecated(since = "0.1.0", note = "use `at_level()`")]
    pub fn at_level_legacy(&self, level: Level, logger: Option<&str>) -> LevelGuard {
        self.warn_compat("'caplog.atLevel()'", "'caplog.at_level()'");
        self.inner.at_level(level, logger)
    }
}

impl Deref for CompatLogCaptureFixture {
    type Target = LogCaptureFixture;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[cfg(test)]
#[path = "compat_tests.rs"]
mod tests;
