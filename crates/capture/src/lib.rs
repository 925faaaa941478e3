// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Log record capture for test assertions.
//!
//! A [`CaptureHandler`] is attached to a logger of a [`Hierarchy`] for the
//! duration of a test; the test inspects what was logged through a
//! [`LogCaptureFixture`]:
//!
//! ```
//! use catchlog::{catching_logs, CaptureHandler, Hierarchy, Level, RecordFilter, ROOT};
//! use std::sync::Arc;
//!
//! let hierarchy = Arc::new(Hierarchy::new());
//! let window = catching_logs(hierarchy.clone(), ROOT, CaptureHandler::new(), Level::NOTSET);
//! let caplog = window.fixture();
//!
//! hierarchy.logger("app.db").warning("slow query");
//!
//! let slow = caplog.filter(&RecordFilter::new().name("app.db").message("slow"));
//! assert_eq!(slow.len(), 1);
//! ```

pub mod bridge;
mod catching;
mod compat;
mod error;
pub mod filter;
pub mod format;
mod fixture;
mod handler;
pub mod hierarchy;
mod level;
mod record;
pub mod scope;

pub use catching::{catching_logs, CatchingLogs};
pub use compat::{CompatLogCaptureFixture, DeprecationSink, COMPAT_WARNING_CODE};
pub use error::{CaptureError, Result};
pub use filter::{MessageMatcher, RecordFilter};
pub use fixture::LogCaptureFixture;
pub use format::{Formatter, DEFAULT_FORMAT};
pub use handler::CaptureHandler;
pub use hierarchy::{Handler, HandlerId, Hierarchy, Logger, ROOT, ROOT_RECORD_NAME};
pub use level::{Level, LevelRegistry};
pub use record::{render, Location, Record, RecordTuple};
pub use scope::{LevelGuard, LevelTarget, LoggerRegistry};
