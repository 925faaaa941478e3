// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Captured log records and message rendering.

use crate::error::{CaptureError, Result};
use crate::level::Level;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Source position of the log call, when the emitter knows it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
    pub module_path: Option<String>,
}

/// Projection of a record used in assertions: `(logger, level, message)`.
pub type RecordTuple = (String, Level, String);

/// One log event, immutable once handed to a handler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    level: Level,
    level_name: String,
    msg: String,
    args: Vec<String>,
    message: String,
    created: SystemTime,
    location: Option<Location>,
}

impl Record {
    /// Record with a pre-formatted message.
    pub fn new(name: impl Into<String>, level: Level, message: impl Into<String>) -> Self {
        let msg = message.into();
        Self {
            name: name.into(),
            level,
            level_name: default_level_name(level),
            message: msg.clone(),
            msg,
            args: Vec::new(),
            created: SystemTime::now(),
            location: None,
        }
    }

    /// Record built from a `{}` template and positional arguments.
    ///
    /// Fails when the number of placeholders and arguments differ; the caller
    /// that emitted the log call owns that error.
    pub fn with_args<I>(name: impl Into<String>, level: Level, template: &str, args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let args: Vec<String> = args.into_iter().map(|a| a.to_string()).collect();
        let message = render(template, &args)?;
        Ok(Self {
            name: name.into(),
            level,
            level_name: default_level_name(level),
            msg: template.to_string(),
            args,
            message,
            created: SystemTime::now(),
            location: None,
        })
    }

    pub fn with_level_name(mut self, level_name: impl Into<String>) -> Self {
        self.level_name = level_name.into();
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Logger name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn level_name(&self) -> &str {
        &self.level_name
    }

    /// Raw message template, before argument substitution
    pub fn msg(&self) -> &str {
        &self.msg
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Rendered message (template with arguments substituted)
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn created(&self) -> SystemTime {
        self.created
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn to_tuple(&self) -> RecordTuple {
        (self.name.clone(), self.level, self.message.clone())
    }
}

fn default_level_name(level: Level) -> String {
    match level {
        Level::CRITICAL => "CRITICAL".to_string(),
        Level::ERROR => "ERROR".to_string(),
        Level::WARNING => "WARNING".to_string(),
        Level::INFO => "INFO".to_string(),
        Level::DEBUG => "DEBUG".to_string(),
        Level::NOTSET => "NOTSET".to_string(),
        other => format!("Level {}", other.value()),
    }
}

/// Substitute `{}` placeholders in order. `{{` and `}}` are literal braces.
///
/// A template with no arguments is returned verbatim, placeholders included.
pub fn render(template: &str, args: &[String]) -> Result<String> {
    if args.is_empty() {
        return Ok(template.to_string());
    }

    let mut out = String::with_capacity(template.len() + args.iter().map(String::len).sum::<usize>());
    let mut remaining = args.iter();
    let mut placeholders = 0usize;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('{', Some('{')) => {
                chars.next();
                out.push('{');
            }
            ('{', Some('}')) => {
                chars.next();
                placeholders += 1;
                if let Some(arg) = remaining.next() {
                    out.push_str(arg);
                }
            }
            ('}', Some('}')) => {
                chars.next();
                out.push('}');
            }
            _ => out.push(c),
        }
    }

    if placeholders != args.len() {
        return Err(CaptureError::Render {
            template: template.to_string(),
            placeholders,
            args: args.len(),
        });
    }
    Ok(out)
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
