//! Output formats for tokenized lines, parsed blocks and search results
//!
//! Two formats are supported:
//!
//! - `simple`: one record per line, meant for terminals and snapshot tests.
//! - `json`: pretty printed serde output, same shape as the library types.
//!
//! Simple format samples:
//!
//! ```text
//! 1: keyword("public") whitespace(" ") keyword("class")
//! <quote> [plain("quoted "), bold("text")]
//! <numbered 2> [plain("second")]
//! #3 Dependency Injection
//! ```

use crate::highlight::Line;
use crate::markup::Block;
use crate::search::Concept;
use serde::Serialize;
use std::fmt::Write as _;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Simple,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["simple", "json"];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(OutputFormat::Simple),
            "json" => Ok(OutputFormat::Json),
            _ => Err(FormatError::Unknown(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unknown output format '{0}' (expected one of: simple, json)")]
    Unknown(String),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn lines_to_string(lines: &[Line], format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Simple => Ok(join_records(lines.iter().map(simple_line))),
        OutputFormat::Json => to_json(lines),
    }
}

pub fn blocks_to_string(blocks: &[Block], format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Simple => Ok(join_records(blocks.iter().map(simple_block))),
        OutputFormat::Json => to_json(blocks),
    }
}

pub fn concepts_to_string(concepts: &[Concept], format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Simple => Ok(join_records(
            concepts.iter().map(|c| format!("#{} {}", c.id, c.title)),
        )),
        OutputFormat::Json => to_json(concepts),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, FormatError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn join_records(records: impl Iterator<Item = String>) -> String {
    records.collect::<Vec<_>>().join("\n")
}

fn simple_line(line: &Line) -> String {
    let mut out = format!("{}:", line.line_number);
    for token in &line.tokens {
        // Debug formatting quotes and escapes the content.
        let _ = write!(out, " {}({:?})", token.kind, token.content);
    }
    out
}

fn simple_block(block: &Block) -> String {
    let tag = match block {
        Block::Numbered { ordinal, .. } => format!("<numbered {}>", ordinal),
        Block::Break => return "<break>".to_string(),
        other => format!("<{}>", other.kind_name()),
    };
    let spans: Vec<String> = block
        .spans()
        .iter()
        .map(|span| format!("{}({:?})", span.kind_name(), span.text()))
        .collect();
    format!("{} [{}]", tag, spans.join(", "))
}
