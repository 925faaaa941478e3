// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness errors.

use catchlog::CaptureError;

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("Failed to read config from {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Capture(#[from] CaptureError),
}
