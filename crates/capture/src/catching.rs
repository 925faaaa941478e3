// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Installing a capture handler for a delimited window.

use crate::fixture::LogCaptureFixture;
use crate::handler::CaptureHandler;
use crate::hierarchy::{HandlerId, Hierarchy, ROOT};
use crate::level::Level;
use std::sync::Arc;

/// Attach `handler` to `logger` until the returned guard drops.
///
/// The handler's threshold becomes `level`, and the logger's own level is
/// lowered to `level` if it was higher so that such records are emitted at
/// all. A non-root logger is never lowered to `NOTSET`, which would make it
/// inherit from its parent instead. Both the attachment and the logger level
/// are undone on drop.
pub fn catching_logs(
    hierarchy: Arc<Hierarchy>,
    logger: &str,
    handler: CaptureHandler,
    level: Level,
) -> CatchingLogs {
    handler.set_level(level);
    let id = hierarchy.attach(logger, Arc::new(handler.clone()));
    let previous_level = hierarchy.level(logger);
    let lowered = previous_level.min(level);
    if lowered != Level::NOTSET || logger == ROOT {
        hierarchy.set_level(logger, lowered);
    }

    CatchingLogs {
        hierarchy,
        logger: logger.to_string(),
        handler,
        id,
        previous_level,
    }
}

/// Active capture window. Dropping it detaches the handler.
#[must_use = "capture stops as soon as the guard is dropped"]
pub struct CatchingLogs {
    hierarchy: Arc<Hierarchy>,
    logger: String,
    handler: CaptureHandler,
    id: HandlerId,
    previous_level: Level,
}

impl CatchingLogs {
    pub fn handler(&self) -> &CaptureHandler {
        &self.handler
    }

    pub fn logger(&self) -> &str {
        &self.logger
    }

    /// Accessor over this window's handler.
    pub fn fixture(&self) -> LogCaptureFixture {
        LogCaptureFixture::new(self.handler.clone(), self.hierarchy.clone())
    }
}

impl Drop for CatchingLogs {
    fn drop(&mut self) {
        self.hierarchy.set_level(&self.logger, self.previous_level);
        self.hierarchy.detach(&self.logger, self.id);
    }
}

#[cfg(test)]
#[path = "catching_tests.rs"]
mod tests;
