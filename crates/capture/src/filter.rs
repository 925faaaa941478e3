// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Record filtering.
//!
//! A [`RecordFilter`] holds up to three criteria, all of which must hold:
//!
//! - name: the logger name equals it exactly (no prefix matching)
//! - level: the record level equals it exactly (not "at least")
//! - message: a [`Regex`] that matches anywhere in the rendered message, or
//!   a plain string that occurs in it
//!
//! An absent criterion always holds, so the empty filter keeps everything.

use crate::level::Level;
use crate::record::{Record, RecordTuple};
use regex::Regex;

/// How the rendered message is tested.
#[derive(Clone, Debug)]
pub enum MessageMatcher {
    /// Literal substring
    Contains(String),
    /// Unanchored regular expression search
    Pattern(Regex),
}

impl MessageMatcher {
    pub fn matches(&self, message: &str) -> bool {
        match self {
            Self::Contains(needle) => message.contains(needle.as_str()),
            Self::Pattern(regex) => regex.is_match(message),
        }
    }
}

impl PartialEq for MessageMatcher {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Contains(a), Self::Contains(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl From<&str> for MessageMatcher {
    fn from(needle: &str) -> Self {
        Self::Contains(needle.to_string())
    }
}

impl From<String> for MessageMatcher {
    fn from(needle: String) -> Self {
        Self::Contains(needle)
    }
}

impl From<&String> for MessageMatcher {
    fn from(needle: &String) -> Self {
        Self::Contains(needle.clone())
    }
}

impl From<Regex> for MessageMatcher {
    fn from(regex: Regex) -> Self {
        Self::Pattern(regex)
    }
}

impl From<&Regex> for MessageMatcher {
    fn from(regex: &Regex) -> Self {
        Self::Pattern(regex.clone())
    }
}

/// AND-combination of optional criteria over captured records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordFilter {
    name: Option<String>,
    level: Option<Level>,
    message: Option<MessageMatcher>,
}

impl RecordFilter {
    /// Filter with no criteria.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the three optional criteria.
    pub fn from_parts(
        name: Option<&str>,
        level: Option<Level>,
        message: Option<MessageMatcher>,
    ) -> Self {
        Self {
            name: name.map(str::to_string),
            level,
            message,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn message(mut self, message: impl Into<MessageMatcher>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.level.is_none() && self.message.is_none()
    }

    fn accepts(&self, name: &str, level: Level, message: &str) -> bool {
        if self.name.as_deref().is_some_and(|n| n != name) {
            return false;
        }
        if self.level.is_some_and(|l| l != level) {
            return false;
        }
        if let Some(matcher) = &self.message {
            if !matcher.matches(message) {
                return false;
            }
        }
        true
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.accepts(record.name(), record.level(), record.message())
    }

    pub fn matches_tuple(&self, tuple: &RecordTuple) -> bool {
        self.accepts(&tuple.0, tuple.1, &tuple.2)
    }

    /// Matching records, in their original order.
    pub fn apply<'a, I>(&self, records: I) -> Vec<Record>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        records
            .into_iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }

    /// Matching tuples, in their original order.
    pub fn apply_tuples<I>(&self, tuples: I) -> Vec<RecordTuple>
    where
        I: IntoIterator<Item = RecordTuple>,
    {
        tuples
            .into_iter()
            .filter(|t| self.matches_tuple(t))
            .collect()
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
