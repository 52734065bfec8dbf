//! # concepta
//!
//! Content processing core for concept learning notes:
//!
//! - [highlight]: per-line C# tokenizer for code samples.
//! - [markup]: line based markup parser (quotes, bullets, numbered items, inline emphasis).
//! - [search]: in-memory search index with title/keyword ranking.
//! - [store]: concept collection that keeps the search index in sync with mutations.
//! - [formats]: `simple` and `json` renderings used by the CLI and snapshot tests.
//!
//! Tokenizing, parsing and searching are total functions: every input produces output and
//! none of them return errors.
//!
//! ## Testing
//!
//! Fluent assertion helpers for blocks, highlighted lines and search hits live in the
//! [testing] module.

pub mod formats;
pub mod highlight;
pub mod markup;
pub mod search;
pub mod store;
pub mod testing;

pub use formats::{FormatError, OutputFormat};
pub use highlight::{highlight, tokenize, Line, Token, TokenKind};
pub use markup::{parse, Block, Span};
pub use search::{Concept, ConceptId, SearchEngine, SearchOptions};
pub use store::{ConceptStore, StoreError};
