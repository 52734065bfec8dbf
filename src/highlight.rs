//! Code sample highlighting
//!
//!     This module turns the code sample attached to a concept into classified tokens that a
//!     renderer can color. It is a best-effort highlighter, not a compiler front end: every
//!     input line produces a token stream, whatever it contains.
//!
//! Per-Line Design
//!
//!     Tokenization works one line at a time and carries no state between lines. A multi-line
//!     sample is handled by [highlight](lexer::highlight), which splits on `\n`, numbers the
//!     lines from 1 and tokenizes each independently. The consequence is that a block comment
//!     opened on one line and closed on a later one is not recognized: `/*` without a `*/` on
//!     the same line lexes as two operators and the rest of the line lexes normally.
//!
//! Lexing
//!
//!     Raw lexemes (whitespace, comments, strings, numbers, identifiers, operators) come from a
//!     logos lexer. See [lexer](lexer). Rules that need to look further along the line before
//!     they can commit (the close of a block comment or of a string, the fractional part of a
//!     number) are logos callbacks that either extend the match or reject it. A rejected
//!     position falls back to a single character token and lexing resumes right after it, so
//!     the cursor always advances and tokenization always terminates.
//!
//!     Identifiers are classified after lexing against a [Vocabulary](vocabulary::Vocabulary):
//!     keyword, then known type name, then method (when followed by `(`), then the capitalized
//!     name convention for types, and property otherwise.
//!
//! Lossless Output
//!
//!     Token contents are exact slices of the input. Concatenating them in order gives back the
//!     original line, which [detokenize](detokenizer::detokenize) does.

pub mod detokenizer;
pub mod lexer;
pub mod tokens;
pub mod vocabulary;

pub use detokenizer::{detokenize, detokenize_lines, ToSourceString};
pub use lexer::{highlight, highlight_with, tokenize, tokenize_with};
pub use tokens::{Line, Token, TokenKind};
pub use vocabulary::Vocabulary;
