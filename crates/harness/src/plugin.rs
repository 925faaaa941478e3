// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-phase capture around test bodies.
//!
//! Each phase (setup, call, teardown) gets a fresh [`CaptureHandler`]
//! attached to the configured logger. The body sees it through a
//! [`CompatLogCaptureFixture`]; when the phase ends the handler is detached
//! and its text becomes a "Captured log <phase>" report section.

use crate::config::CatchLogConfig;
use crate::error::HarnessError;
use crate::item::{Phase, TestItem};
use catchlog::{
    catching_logs, CaptureHandler, CompatLogCaptureFixture, DeprecationSink, Formatter, Hierarchy,
    Level, LogCaptureFixture,
};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Report section key for captured log text.
pub const LOG_SECTION_KEY: &str = "log";

pub struct CatchLogPlugin {
    hierarchy: Arc<Hierarchy>,
    config: CatchLogConfig,
    formatter: Formatter,
    level: Level,
}

impl CatchLogPlugin {
    /// Resolves the configured format and level up front.
    pub fn new(hierarchy: Arc<Hierarchy>, config: CatchLogConfig) -> Result<Self, HarnessError> {
        let formatter = config.formatter()?;
        let level = config.resolve_level(&hierarchy.levels())?;
        Ok(Self {
            hierarchy,
            config,
            formatter,
            level,
        })
    }

    pub fn config(&self) -> &CatchLogConfig {
        &self.config
    }

    pub fn hierarchy(&self) -> &Arc<Hierarchy> {
        &self.hierarchy
    }

    /// Threshold the per-phase handler is installed with.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Run every phase in order with the same body.
    pub fn run_item<F>(&self, item: &mut TestItem, mut body: F)
    where
        F: FnMut(Phase, &CompatLogCaptureFixture),
    {
        for phase in Phase::ALL {
            self.run_phase(item, phase, |caplog| body(phase, caplog));
        }
    }

    /// Run `body` inside a capture window for `phase`.
    ///
    /// A panic in `body` is resumed after the handler has been detached and
    /// the report section added.
    pub fn run_phase<T>(
        &self,
        item: &mut TestItem,
        phase: Phase,
        body: impl FnOnce(&CompatLogCaptureFixture) -> T,
    ) -> T {
        let sink: Arc<dyn DeprecationSink> = Arc::new(item.warnings().clone());
        let handler = CaptureHandler::with_formatter(self.formatter.clone());

        if !self.config.enabled {
            tracing::trace!(nodeid = item.nodeid(), %phase, "capture disabled");
            let fixture = LogCaptureFixture::new(handler, self.hierarchy.clone());
            return body(&CompatLogCaptureFixture::new(fixture, sink));
        }

        let logger = self.config.target_logger();
        tracing::trace!(nodeid = item.nodeid(), %phase, logger, "capture start");
        let window = catching_logs(self.hierarchy.clone(), logger, handler, self.level);
        item.set_handler(Some(window.handler().clone()));
        let caplog = CompatLogCaptureFixture::new(window.fixture(), sink);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| body(&caplog)));

        let text = window.handler().text();
        drop(caplog);
        drop(window);
        item.set_handler(None);
        tracing::trace!(nodeid = item.nodeid(), %phase, "capture end");

        if self.config.print_logs {
            let log = text.trim();
            if !log.is_empty() {
                item.add_report_section(phase, LOG_SECTION_KEY, log);
            }
        }

        match outcome {
            Ok(value) => value,
            Err(payload) => panic::resume_unwind(payload),
        }
    }
}

#[cfg(test)]
#[path = "plugin_tests.rs"]
mod tests;
