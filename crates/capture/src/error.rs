// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error type shared by the capture crate.

/// Errors raised by level lookup, message rendering and formatting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    #[error("unknown level name: {0}")]
    UnknownLevel(String),

    #[error("cannot render {template:?}: {placeholders} placeholder(s) but {args} argument(s)")]
    Render {
        template: String,
        placeholders: usize,
        args: usize,
    },

    #[error("invalid format template: {0}")]
    Format(String),

    #[error("another global logger is already installed")]
    LoggerAlreadySet,
}

/// Result alias for capture operations.
pub type Result<T> = std::result::Result<T, CaptureError>;
