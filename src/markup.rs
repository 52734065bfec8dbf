//! Rich text markup
//!
//!     Concept descriptions are written in a small markdown-like dialect. This module parses a
//!     text blob into a flat list of [Block]s, each holding inline [Span]s.
//!
//! Blocks
//!
//!     The input is split on `\n` (a trailing `\r` is dropped) and every line becomes exactly one
//!     block, classified in this order:
//!
//!         1. blank (whitespace only)  -> Break
//!         2. `> ` prefix              -> Quote
//!         3. `- ` prefix              -> Bullet
//!         4. `<digits>. ` prefix      -> Numbered
//!         5. ``` prefix               -> dropped, fenced code is shown from the concept's own
//!                                        code sample field
//!         6. anything else            -> Paragraph
//!
//!     See [blocks](blocks).
//!
//! Inlines
//!
//!     Inline spans are extracted in a fixed precedence order: bold (`**`), then italic (`*`),
//!     then inline code (`` ` ``). Each step only scans text the previous steps left as plain,
//!     so italic can never eat half of a bold delimiter and nothing is matched inside an
//!     already extracted span. Unmatched markers stay literal. See [inlines](inlines).
//!
//!     Parsing is total: any string, including the empty one, produces a (possibly empty)
//!     block list.

pub mod blocks;
pub mod inlines;
pub mod nodes;

pub use blocks::{classify_line, parse, LineKind};
pub use inlines::extract_spans;
pub use nodes::{Block, Span};
