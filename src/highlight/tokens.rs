//! Token definitions for highlighted code
//!
//! These are the public, classified tokens. The raw lexemes produced by logos live in
//! [lexer](super::lexer) and never leave it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highlight category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Whitespace,
    Comment,
    String,
    Number,
    Keyword,
    Type,
    Method,
    Property,
    Operator,
    /// Anything no other rule claims, one character per token.
    Text,
}

impl TokenKind {
    /// Lowercase name, as used by the text and JSON output formats.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Keyword => "keyword",
            TokenKind::Type => "type",
            TokenKind::Method => "method",
            TokenKind::Property => "property",
            TokenKind::Operator => "operator",
            TokenKind::Text => "text",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexeme. `content` is the exact source slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub content: String,
}

impl Token {
    pub fn new(kind: TokenKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }
}

/// One tokenized source line. Line numbers start at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub line_number: usize,
    pub tokens: Vec<Token>,
}

impl Line {
    pub fn new(line_number: usize, tokens: Vec<Token>) -> Self {
        Self {
            line_number,
            tokens,
        }
    }

    /// Rebuilds the source text of this line from its tokens.
    pub fn source(&self) -> String {
        super::detokenize(&self.tokens)
    }

    /// Kinds of all tokens, in order. Handy in tests.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|token| token.kind).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
