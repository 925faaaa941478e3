// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test-runner side of catchlog.
//!
//! [`CatchLogPlugin`] wraps each phase of a [`TestItem`] in a capture
//! window, turns what was logged into report sections, and records
//! deprecation warnings raised through the legacy fixture API.

mod config;
mod error;
mod item;
mod plugin;
mod warnings;

pub use config::CatchLogConfig;
pub use error::HarnessError;
pub use item::{Phase, ReportSection, TestItem};
pub use plugin::{CatchLogPlugin, LOG_SECTION_KEY};
pub use warnings::{Warning, WarningRecorder};
