// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering of captured records.
//!
//! Templates interpolate record fields by name:
//!
//! - `{name}` - logger name
//! - `{levelname}` / `{levelno}` - level name and number
//! - `{message}` - rendered message
//! - `{msg}` - raw template
//! - `{file}` / `{line}` / `{module}` - call site, empty when unknown
//!
//! A field may carry a width with optional alignment: `{levelname:<8}`,
//! `{line:>4}`. `{{` and `}}` produce literal braces.

use crate::error::{CaptureError, Result};
use crate::record::Record;
use std::path::Path;

/// Default layout of one captured line.
pub const DEFAULT_FORMAT: &str = "{file:<25} {line:>4} {levelname:<8} {message}";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    Name,
    LevelName,
    LevelNo,
    Message,
    Msg,
    File,
    Line,
    Module,
}

impl Field {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "levelname" => Some(Self::LevelName),
            "levelno" => Some(Self::LevelNo),
            "message" => Some(Self::Message),
            "msg" => Some(Self::Msg),
            "file" => Some(Self::File),
            "line" => Some(Self::Line),
            "module" => Some(Self::Module),
            _ => None,
        }
    }

    /// Numbers align right by default, text aligns left.
    fn default_align(self) -> Align {
        match self {
            Self::LevelNo | Self::Line => Align::Right,
            _ => Align::Left,
        }
    }

    fn value(self, record: &Record) -> String {
        match self {
            Self::Name => record.name().to_string(),
            Self::LevelName => record.level_name().to_string(),
            Self::LevelNo => record.level().value().to_string(),
            Self::Message => record.message().to_string(),
            Self::Msg => record.msg().to_string(),
            Self::File => record
                .location()
                .map(|loc| {
                    Path::new(&loc.file)
                        .file_name()
                        .map(|f| f.to_string_lossy().into_owned())
                        .unwrap_or_else(|| loc.file.clone())
                })
                .unwrap_or_default(),
            Self::Line => record
                .location()
                .map(|loc| loc.line.to_string())
                .unwrap_or_default(),
            Self::Module => record
                .location()
                .and_then(|loc| loc.module_path.clone())
                .unwrap_or_default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Field {
        field: Field,
        align: Align,
        width: usize,
    },
}

/// Compiled record template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formatter {
    template: String,
    pieces: Vec<Piece>,
}

impl Formatter {
    pub fn new(template: &str) -> Result<Self> {
        Ok(Self {
            template: template.to_string(),
            pieces: parse(template)?,
        })
    }

    /// Formatter that emits only the rendered message.
    pub fn message_only() -> Self {
        Self {
            template: "{message}".to_string(),
            pieces: vec![Piece::Field {
                field: Field::Message,
                align: Align::Left,
                width: 0,
            }],
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Render one record, without a trailing newline.
    pub fn format(&self, record: &Record) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Field {
                    field,
                    align,
                    width,
                } => pad(&mut out, &field.value(record), *align, *width),
            }
        }
        out
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(DEFAULT_FORMAT).unwrap_or_else(|_| Self::message_only())
    }
}

fn pad(out: &mut String, value: &str, align: Align, width: usize) {
    let fill = width.saturating_sub(value.chars().count());
    if align == Align::Right {
        out.push_str(&" ".repeat(fill));
    }
    out.push_str(value);
    if align == Align::Left {
        out.push_str(&" ".repeat(fill));
    }
}

fn parse(template: &str) -> Result<Vec<Piece>> {
    let mut pieces = Vec::new();
    let mut literal = String::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                literal.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                literal.push('}');
            }
            '{' => {
                let mut spec = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    spec.push(c);
                }
                if !closed {
                    return Err(CaptureError::Format(format!("unclosed field in {template:?}")));
                }
                if !literal.is_empty() {
                    pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                }
                pieces.push(parse_field(&spec)?);
            }
            '}' => {
                return Err(CaptureError::Format(format!("unmatched '}}' in {template:?}")));
            }
            _ => literal.push(c),
        }
    }

    if !literal.is_empty() {
        pieces.push(Piece::Literal(literal));
    }
    Ok(pieces)
}

fn parse_field(spec: &str) -> Result<Piece> {
    let (name, width_spec) = match spec.split_once(':') {
        Some((name, width)) => (name, Some(width)),
        None => (spec, None),
    };
    let field = Field::parse(name.trim())
        .ok_or_else(|| CaptureError::Format(format!("unknown field {name:?}")))?;

    let Some(width_spec) = width_spec else {
        return Ok(Piece::Field {
            field,
            align: field.default_align(),
            width: 0,
        });
    };

    let (align, digits) = if let Some(rest) = width_spec.strip_prefix('<') {
        (Align::Left, rest)
    } else if let Some(rest) = width_spec.strip_prefix('>') {
        (Align::Right, rest)
    } else {
        (field.default_align(), width_spec)
    };
    let width = digits
        .parse::<usize>()
        .map_err(|_| CaptureError::Format(format!("invalid width {width_spec:?} for {name}")))?;

    Ok(Piece::Field {
        field,
        align,
        width,
    })
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
