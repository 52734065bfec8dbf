//! Fluent assertions for tests
//!
//! ```rust,ignore
//! use concepta::markup::parse;
//! use concepta::testing::assert_blocks;
//!
//! let blocks = parse("> **Note** here");
//! assert_blocks(&blocks)
//!     .count(1)
//!     .block(0, |block| {
//!         block.is_quote().span_count(2).bold(0, "Note").plain(1, " here");
//!     });
//! ```
//!
//! Failures report the index path (`blocks[2].spans[1]`) and a short summary of what was found.

use crate::highlight::{Line, TokenKind};
use crate::markup::{Block, Span};
use crate::search::Concept;

// ============================================================================
// Blocks
// ============================================================================

pub fn assert_blocks(blocks: &[Block]) -> BlocksAssertion<'_> {
    BlocksAssertion { blocks }
}

pub struct BlocksAssertion<'a> {
    blocks: &'a [Block],
}

impl<'a> BlocksAssertion<'a> {
    pub fn count(self, expected: usize) -> Self {
        assert_eq!(
            self.blocks.len(),
            expected,
            "Expected {} blocks, found {}: [{}]",
            expected,
            self.blocks.len(),
            summarize_blocks(self.blocks)
        );
        self
    }

    /// Block kinds in order, e.g. `["quote", "break", "paragraph"]`.
    pub fn kinds(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.blocks.iter().map(Block::kind_name).collect();
        assert_eq!(actual, expected, "Block kinds differ");
        self
    }

    pub fn block<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assert!(
            index < self.blocks.len(),
            "Block index {} out of bounds ({} blocks)",
            index,
            self.blocks.len()
        );
        assertion(BlockAssertion {
            block: &self.blocks[index],
            context: format!("blocks[{}]", index),
        });
        self
    }
}

pub struct BlockAssertion<'a> {
    block: &'a Block,
    context: String,
}

impl<'a> BlockAssertion<'a> {
    fn expect_kind(self, kind: &str) -> Self {
        assert_eq!(
            self.block.kind_name(),
            kind,
            "{}: Expected {}, found {}",
            self.context,
            kind,
            summarize_block(self.block)
        );
        self
    }

    pub fn is_paragraph(self) -> Self {
        self.expect_kind("paragraph")
    }

    pub fn is_quote(self) -> Self {
        self.expect_kind("quote")
    }

    pub fn is_bullet(self) -> Self {
        self.expect_kind("bullet")
    }

    pub fn is_break(self) -> Self {
        self.expect_kind("break")
    }

    pub fn is_numbered(self, ordinal: &str) -> Self {
        match self.block {
            Block::Numbered { ordinal: actual, .. } => assert_eq!(
                actual, ordinal,
                "{}: Expected ordinal {}, found {}",
                self.context, ordinal, actual
            ),
            other => panic!(
                "{}: Expected numbered item {}, found {}",
                self.context,
                ordinal,
                summarize_block(other)
            ),
        }
        self
    }

    /// Text of all spans joined, markers stripped.
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.block.plain_text(),
            expected,
            "{}: text differs",
            self.context
        );
        self
    }

    pub fn span_count(self, expected: usize) -> Self {
        assert_eq!(
            self.block.spans().len(),
            expected,
            "{}: Expected {} spans, found {:?}",
            self.context,
            expected,
            self.block.spans()
        );
        self
    }

    pub fn spans(self, expected: &[Span]) -> Self {
        assert_eq!(self.block.spans(), expected, "{}: spans differ", self.context);
        self
    }

    pub fn plain(self, index: usize, text: &str) -> Self {
        self.span(index, Span::Plain(text.to_string()))
    }

    pub fn bold(self, index: usize, text: &str) -> Self {
        self.span(index, Span::Bold(text.to_string()))
    }

    pub fn italic(self, index: usize, text: &str) -> Self {
        self.span(index, Span::Italic(text.to_string()))
    }

    pub fn code(self, index: usize, text: &str) -> Self {
        self.span(index, Span::InlineCode(text.to_string()))
    }

    fn span(self, index: usize, expected: Span) -> Self {
        let spans = self.block.spans();
        assert!(
            index < spans.len(),
            "{}.spans[{}] out of bounds ({} spans)",
            self.context,
            index,
            spans.len()
        );
        assert_eq!(
            spans[index], expected,
            "{}.spans[{}] differs",
            self.context, index
        );
        self
    }
}

fn summarize_block(block: &Block) -> String {
    let text = block.plain_text();
    let shown = if text.chars().count() > 40 {
        format!("{}...", text.chars().take(40).collect::<String>())
    } else {
        text
    };
    match block {
        Block::Break => "break".to_string(),
        Block::Numbered { ordinal, .. } => format!("numbered {} '{}'", ordinal, shown),
        other => format!("{} '{}'", other.kind_name(), shown),
    }
}

fn summarize_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(summarize_block)
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Highlighted lines
// ============================================================================

pub fn assert_line(line: &Line) -> LineAssertion<'_> {
    LineAssertion { line }
}

pub struct LineAssertion<'a> {
    line: &'a Line,
}

impl<'a> LineAssertion<'a> {
    pub fn number(self, expected: usize) -> Self {
        assert_eq!(self.line.line_number, expected, "line number differs");
        self
    }

    pub fn kinds(self, expected: &[TokenKind]) -> Self {
        assert_eq!(
            self.line.kinds(),
            expected,
            "line {}: token kinds differ for {:?}",
            self.line.line_number,
            self.line.source()
        );
        self
    }

    /// `(kind, content)` pairs, in order.
    pub fn tokens(self, expected: &[(TokenKind, &str)]) -> Self {
        let actual: Vec<(TokenKind, &str)> = self
            .line
            .tokens
            .iter()
            .map(|token| (token.kind, token.content.as_str()))
            .collect();
        assert_eq!(actual, expected, "line {}: tokens differ", self.line.line_number);
        self
    }

    /// Kind of the first token whose content is exactly `content`.
    pub fn token_kind(self, content: &str, expected: TokenKind) -> Self {
        let token = self
            .line
            .tokens
            .iter()
            .find(|token| token.content == content)
            .unwrap_or_else(|| {
                panic!(
                    "line {}: no token {:?} in {:?}",
                    self.line.line_number,
                    content,
                    self.line.source()
                )
            });
        assert_eq!(
            token.kind, expected,
            "line {}: token {:?} has the wrong kind",
            self.line.line_number, content
        );
        self
    }

    pub fn reconstructs(self, source: &str) -> Self {
        assert_eq!(self.line.source(), source, "line {} is not lossless", self.line.line_number);
        self
    }
}

// ============================================================================
// Search results
// ============================================================================

pub fn assert_hits(hits: &[Concept]) -> HitsAssertion<'_> {
    HitsAssertion { hits }
}

pub struct HitsAssertion<'a> {
    hits: &'a [Concept],
}

impl<'a> HitsAssertion<'a> {
    pub fn count(self, expected: usize) -> Self {
        assert_eq!(
            self.hits.len(),
            expected,
            "Expected {} hits, found {:?}",
            expected,
            titles(self.hits)
        );
        self
    }

    pub fn titles(self, expected: &[&str]) -> Self {
        assert_eq!(titles(self.hits), expected, "hit order differs");
        self
    }

    pub fn ids(self, expected: &[u64]) -> Self {
        let actual: Vec<u64> = self.hits.iter().map(|c| c.id).collect();
        assert_eq!(actual, expected, "hit ids differ");
        self
    }

    pub fn first(self, title: &str) -> Self {
        assert_eq!(
            self.hits.first().map(|c| c.title.as_str()),
            Some(title),
            "unexpected top hit among {:?}",
            titles(self.hits)
        );
        self
    }
}

fn titles(hits: &[Concept]) -> Vec<&str> {
    hits.iter().map(|c| c.title.as_str()).collect()
}
