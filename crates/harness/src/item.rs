// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test items and their report sections.

use crate::warnings::{Warning, WarningRecorder};
use catchlog::CaptureHandler;
use serde::Serialize;
use std::fmt;

/// Phase of a test run that gets its own capture window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Setup,
    Call,
    Teardown,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Setup, Phase::Call, Phase::Teardown];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::Call => "call",
            Phase::Teardown => "teardown",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extra output attached to a test report, e.g. "Captured log call".
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub phase: Phase,
    pub key: String,
    pub content: String,
}

impl ReportSection {
    pub fn title(&self) -> String {
        format!("Captured {} {}", self.key, self.phase)
    }
}

#[derive(Serialize)]
struct ItemReport<'a> {
    nodeid: &'a str,
    sections: Vec<SectionReport<'a>>,
    warnings: Vec<Warning>,
}

#[derive(Serialize)]
struct SectionReport<'a> {
    title: String,
    phase: Phase,
    content: &'a str,
}

/// One test, as seen by the capture plugin.
#[derive(Debug)]
pub struct TestItem {
    nodeid: String,
    handler: Option<CaptureHandler>,
    sections: Vec<ReportSection>,
    warnings: WarningRecorder,
}

impl TestItem {
    pub fn new(nodeid: impl Into<String>) -> Self {
        let nodeid = nodeid.into();
        Self {
            warnings: WarningRecorder::new(nodeid.clone()),
            nodeid,
            handler: None,
            sections: Vec::new(),
        }
    }

    pub fn nodeid(&self) -> &str {
        &self.nodeid
    }

    /// Handler of the phase currently running, if any.
    pub fn handler(&self) -> Option<&CaptureHandler> {
        self.handler.as_ref()
    }

    pub(crate) fn set_handler(&mut self, handler: Option<CaptureHandler>) {
        self.handler = handler;
    }

    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    /// Content of the section for `phase` and `key`.
    pub fn section(&self, phase: Phase, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.phase == phase && s.key == key)
            .map(|s| s.content.as_str())
    }

    pub fn add_report_section(&mut self, phase: Phase, key: &str, content: impl Into<String>) {
        self.sections.push(ReportSection {
            phase,
            key: key.to_string(),
            content: content.into(),
        });
    }

    pub fn warnings(&self) -> &WarningRecorder {
        &self.warnings
    }

    /// Sections and warnings as JSON.
    pub fn report(&self) -> serde_json::Value {
        let report = ItemReport {
            nodeid: &self.nodeid,
            sections: self
                .sections
                .iter()
                .map(|s| SectionReport {
                    title: s.title(),
                    phase: s.phase,
                    content: &s.content,
                })
                .collect(),
            warnings: self.warnings.warnings(),
        };
        serde_json::to_value(report).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
