//! Block and inline nodes produced by the markup parser.

use serde::{Deserialize, Serialize};

/// Inline span within a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "lowercase")]
pub enum Span {
    /// Plain text segment with no formatting.
    Plain(String),
    /// Strong emphasis delimited by `**`.
    Bold(String),
    /// Emphasis delimited by `*`.
    Italic(String),
    /// Inline code delimited by `` ` ``.
    #[serde(rename = "code")]
    InlineCode(String),
}

impl Span {
    /// Text content with the markers stripped.
    pub fn text(&self) -> &str {
        match self {
            Span::Plain(text) | Span::Bold(text) | Span::Italic(text) | Span::InlineCode(text) => {
                text
            }
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Span::Plain(_) => "plain",
            Span::Bold(_) => "bold",
            Span::Italic(_) => "italic",
            Span::InlineCode(_) => "code",
        }
    }
}

/// One structural unit of parsed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum Block {
    Paragraph(Vec<Span>),
    Quote(Vec<Span>),
    Bullet(Vec<Span>),
    /// `ordinal` holds the digits exactly as written (`"007"` stays `"007"`).
    Numbered { ordinal: String, spans: Vec<Span> },
    /// A blank line.
    Break,
}

impl Block {
    /// Inline spans of this block. Empty for [Block::Break].
    pub fn spans(&self) -> &[Span] {
        match self {
            Block::Paragraph(spans) | Block::Quote(spans) | Block::Bullet(spans) => spans,
            Block::Numbered { spans, .. } => spans,
            Block::Break => &[],
        }
    }

    /// Concatenated span text, i.e. the source content without inline markers.
    pub fn plain_text(&self) -> String {
        self.spans().iter().map(Span::text).collect()
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Quote(_) => "quote",
            Block::Bullet(_) => "bullet",
            Block::Numbered { .. } => "numbered",
            Block::Break => "break",
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Block::Break)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_text_strips_markers() {
        assert_eq!(Span::Bold("strong".into()).text(), "strong");
        assert_eq!(Span::InlineCode("x + 1".into()).text(), "x + 1");
    }

    #[test]
    fn block_plain_text_concatenates_spans() {
        let block = Block::Numbered {
            ordinal: "2".into(),
            spans: vec![Span::Plain("use ".into()), Span::InlineCode("var".into())],
        };
        assert_eq!(block.plain_text(), "use var");
        assert_eq!(block.kind_name(), "numbered");
        assert_eq!(Block::Break.plain_text(), "");
    }

    #[test]
    fn serializes_with_type_tags() {
        let block = Block::Quote(vec![Span::Italic("note".into()), Span::InlineCode("x".into())]);
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(
            json,
            r#"{"type":"quote","content":[{"type":"italic","text":"note"},{"type":"code","text":"x"}]}"#
        );
        assert_eq!(serde_json::to_string(&Block::Break).unwrap(), r#"{"type":"break"}"#);
    }
}
