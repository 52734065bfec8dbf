//! Search engine holding the current index snapshot.

use super::index::SearchIndex;
use super::query::{Query, SearchOptions};
use super::record::{Concept, ConceptId};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace};

/// Answers ranked queries against the latest indexed collection.
///
/// The engine is `Sync`: readers take a cheap `Arc` clone of the current snapshot and search it
/// without holding any lock, while [rebuild_index](SearchEngine::rebuild_index) builds the new
/// snapshot first and then swaps the pointer under a short write lock.
#[derive(Debug, Default)]
pub struct SearchEngine {
    current: RwLock<Arc<SearchIndex>>,
}

impl SearchEngine {
    /// An engine over an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(concepts: &[Concept]) -> Self {
        let engine = Self::new();
        engine.rebuild_index(concepts);
        engine
    }

    /// Recompute every search text and replace the current snapshot.
    pub fn rebuild_index(&self, concepts: &[Concept]) {
        let started = Instant::now();
        let index = Arc::new(SearchIndex::build(concepts));
        *self.current.write() = index;
        debug!(
            records = concepts.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "search index rebuilt"
        );
    }

    /// The snapshot searches currently run against.
    pub fn snapshot(&self) -> Arc<SearchIndex> {
        Arc::clone(&self.current.read())
    }

    /// Ranked matches for `query`. A blank query returns the whole collection in order.
    pub fn search(&self, query: &str) -> Vec<Concept> {
        self.search_with_options(query, &SearchOptions::default())
    }

    pub fn search_with_options(&self, query: &str, options: &SearchOptions) -> Vec<Concept> {
        let snapshot = self.snapshot();
        let parsed = Query::parse(query);
        let hits = snapshot.search(parsed.as_ref());
        trace!(
            query,
            hits = hits.len(),
            indexed = snapshot.len(),
            "search executed"
        );

        let limit = options.limit.unwrap_or(usize::MAX);
        hits.into_iter().take(limit).cloned().collect()
    }

    /// Cached search text for a concept, mostly useful for diagnostics.
    pub fn search_text(&self, id: ConceptId) -> Option<String> {
        self.snapshot().search_text(id).map(str::to_string)
    }
}
