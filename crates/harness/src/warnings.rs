// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Deprecation warnings raised while a test runs.

use catchlog::DeprecationSink;
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;

/// A warning attributed to a test item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub code: String,
    pub nodeid: String,
    pub message: String,
}

/// Collects warnings for one test item. Clones share the same list.
#[derive(Clone, Debug, Default)]
pub struct WarningRecorder {
    nodeid: String,
    warnings: Arc<Mutex<Vec<Warning>>>,
}

impl WarningRecorder {
    pub fn new(nodeid: impl Into<String>) -> Self {
        Self {
            nodeid: nodeid.into(),
            warnings: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn warnings(&self) -> Vec<Warning> {
        self.warnings.lock().clone()
    }

    /// Warnings carrying `code`.
    pub fn with_code(&self, code: &str) -> Vec<Warning> {
        self.warnings
            .lock()
            .iter()
            .filter(|w| w.code == code)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.warnings.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.lock().is_empty()
    }
}

impl DeprecationSink for WarningRecorder {
    fn warn(&self, code: &str, message: &str) {
        tracing::warn!(code, nodeid = %self.nodeid, "{message}");
        self.warnings.lock().push(Warning {
            code: code.to_string(),
            nodeid: self.nodeid.clone(),
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
#[path = "warnings_tests.rs"]
mod tests;
