//! Concept search
//!
//! Filters and orders a concept collection against a free-text query.
//!
//! # Matching
//!
//! Every concept gets a derived *search text*: the lowercase concatenation of a fixed, ordered
//! set of its fields (see [`SEARCH_FIELDS`]), separated by single spaces. A query is
//! lowercased, trimmed and split on whitespace; a concept matches when every query word is a
//! substring of its search text. Words do not have to align with word boundaries, so `dep`
//! matches `dependency`.
//!
//! A blank query is not a filter at all: it returns the whole collection in its current order.
//!
//! # Ranking
//!
//! Matches are stably sorted on two keys:
//!
//! 1. concepts whose title contains the whole normalized query come first;
//! 2. then concepts whose keywords contain it;
//! 3. anything still tied keeps collection order.
//!
//! # Snapshots
//!
//! The search texts are cached in an immutable [`SearchIndex`]. [`SearchEngine`] holds the
//! current index behind an `Arc` and swaps in a freshly built one on every rebuild, so a
//! search always runs against one complete index, old or new, never a half built one.
//!
//! ```rust,ignore
//! use concepta::search::{Concept, SearchEngine};
//!
//! let engine = SearchEngine::with_records(&concepts);
//! let hits = engine.search("dep inj");
//! ```

pub mod engine;
pub mod index;
pub mod query;
pub mod record;

pub use engine::SearchEngine;
pub use index::{search_text, SearchIndex, SEARCH_FIELDS};
pub use query::{Query, SearchOptions};
pub use record::{Concept, ConceptId, SearchField};
