//! Block classification
//!
//! Each source line maps to exactly one [LineKind]. [parse] turns those into [Block]s, running
//! inline extraction over the content and dropping fence lines.

use super::inlines::extract_spans;
use super::nodes::Block;
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)\. ").expect("numbered item pattern is valid"));

const QUOTE_PREFIX: &str = "> ";
const BULLET_PREFIX: &str = "- ";
const FENCE_PREFIX: &str = "```";

/// Classification of a single line, borrowing the content after any prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Quote(&'a str),
    Bullet(&'a str),
    /// Ordinal digits as written, then the content.
    Numbered(&'a str, &'a str),
    /// Fenced code marker. Produces no block.
    Fence,
    Paragraph(&'a str),
}

/// Determine the kind of a line. Checks run in a fixed order and the first match wins.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    if let Some(content) = line.strip_prefix(QUOTE_PREFIX) {
        return LineKind::Quote(content);
    }
    if let Some(content) = line.strip_prefix(BULLET_PREFIX) {
        return LineKind::Bullet(content);
    }
    if let Some(numbered) = numbered_item(line) {
        return numbered;
    }
    if line.starts_with(FENCE_PREFIX) {
        return LineKind::Fence;
    }
    LineKind::Paragraph(line)
}

/// `<digits>. content`. The digits are kept verbatim, leading zeros and all.
fn numbered_item(line: &str) -> Option<LineKind<'_>> {
    let captures = NUMBERED_ITEM.captures(line)?;
    let ordinal = captures.get(1)?.as_str();
    let prefix_len = captures.get(0)?.end();
    Some(LineKind::Numbered(ordinal, &line[prefix_len..]))
}

/// Parse a text blob into blocks, one per line (fence lines excepted).
///
/// Lines are split on `\n` with a trailing `\r` removed. The empty string gives no blocks.
pub fn parse(text: &str) -> Vec<Block> {
    if text.is_empty() {
        return Vec::new();
    }

    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter_map(|line| match classify_line(line) {
            LineKind::Blank => Some(Block::Break),
            LineKind::Quote(content) => Some(Block::Quote(extract_spans(content))),
            LineKind::Bullet(content) => Some(Block::Bullet(extract_spans(content))),
            LineKind::Numbered(ordinal, content) => Some(Block::Numbered {
                ordinal: ordinal.to_string(),
                spans: extract_spans(content),
            }),
            LineKind::Fence => None,
            LineKind::Paragraph(content) => Some(Block::Paragraph(extract_spans(content))),
        })
        .collect()
}
